//! The library code for the `vitrine` static site generator. The architecture
//! can be generally broken down into three distinct steps:
//!
//! 1. Parsing posts from markdown files on disk ([`crate::post`],
//!    [`crate::store`])
//! 2. Resolving every slug the site serves to either a real post, one of the
//!    built-in placeholder posts, or nothing ([`crate::resolve`])
//! 3. Rendering the resolved pages to output files on disk ([`crate::write`])
//!
//! The second step is what makes this generator unusual: the site ships with
//! a small catalog of placeholder posts ([`crate::placeholder`]) that stand
//! in for slugs the content directory doesn't serve, so the blog renders a
//! complete set of pages even with an empty or broken content directory. A
//! real post with the same slug as a placeholder always wins.
//!
//! The third step is pretty straight-forward: for each page, render the body
//! fragment ([`crate::render`]) and the head metadata ([`crate::meta`]),
//! apply the page template, and write the result to disk. On top of the
//! pages themselves, a build also emits an Atom feed ([`crate::feed`]) of
//! the real posts and a sitemap ([`crate::sitemap`]) of every page.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod diagram;
pub mod feed;
pub mod meta;
pub mod placeholder;
pub mod post;
pub mod render;
pub mod resolve;
pub mod sitemap;
pub mod store;
pub mod util;
pub mod write;
