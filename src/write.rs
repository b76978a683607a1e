//! Responsible for templating rendered page bodies and writing the output
//! HTML files to disk. Each output page is the theme's template shell
//! wrapped around a `<head>` fragment from [`crate::meta`] and a body
//! fragment from [`crate::render`].

use crate::config::Site;
use crate::meta;
use crate::render;
use crate::resolve::{ResolvedPost, Resolver};
use crate::store::PostStore;
use gtmpl::Template;
use gtmpl_value::Value;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Writes the site's HTML pages. Expects the output directories to exist.
pub struct Writer<'a> {
    /// The template for post pages, real and placeholder alike.
    pub post_template: &'a Template,

    /// The template for the blog index page.
    pub index_template: &'a Template,

    /// The template for the 404 page.
    pub not_found_template: &'a Template,

    /// The directory post pages and the blog index are written to.
    pub blog_output_directory: &'a Path,

    /// The directory the 404 page is written to.
    pub root_output_directory: &'a Path,

    /// Whether the blog index lists real posts beneath the featured cards.
    pub list_real_posts: bool,

    /// Site identity, used for URLs and page metadata.
    pub site: &'a Site,
}

impl Writer<'_> {
    /// Takes a single [`Page`], templates it, and writes it to disk.
    fn write_page(&self, page: &Page) -> Result<()> {
        let mut value = page.to_value();
        if let Value::Object(obj) = &mut value {
            obj.insert(
                "site_title".to_owned(),
                Value::String(self.site.title.clone()),
            );
            obj.insert(
                "home_page".to_owned(),
                Value::String(self.site.home_page()),
            );
            obj.insert("blog_url".to_owned(), Value::String(self.site.blog_url()));
            obj.insert(
                "static_url".to_owned(),
                Value::String(self.site.static_url()),
            );
        }
        page.template.execute(
            &mut std::fs::File::create(&page.file_path)?,
            &gtmpl::Context::from(value).map_err(Error::Template)?,
        )?;
        Ok(())
    }

    /// Writes a page for every slug the resolver knows. Real posts and
    /// placeholders alike land at `{slug}.html` under the blog directory.
    pub fn write_post_pages<S: PostStore>(&self, resolver: &Resolver<S>) -> Result<()> {
        for slug in resolver.all_slugs() {
            let resolved = resolver.resolve(&slug);
            let content = match &resolved {
                ResolvedPost::Real(post) => render::post_page(self.site, post),
                ResolvedPost::Placeholder(post) => render::placeholder_page(self.site, post),
                ResolvedPost::NotFound => {
                    // A slug the enumeration just returned should still
                    // resolve; a store racing with the build can break that.
                    tracing::warn!("slug '{}' no longer resolves, skipping", slug);
                    continue;
                }
            };
            // resolve() returned a post above, so there is always metadata
            let head = meta::page_metadata(self.site, &resolved).unwrap().to_html();
            self.write_page(&Page {
                file_path: self.blog_output_directory.join(format!("{}.html", slug)),
                template: self.post_template,
                head,
                content,
            })?;
        }
        Ok(())
    }

    /// Writes the blog index page.
    pub fn write_index<S: PostStore>(&self, resolver: &Resolver<S>) -> Result<()> {
        self.write_page(&Page {
            file_path: self.blog_output_directory.join("index.html"),
            template: self.index_template,
            head: meta::default_head(self.site, "Blog"),
            content: render::index_page(self.site, &resolver.real_posts(), self.list_real_posts),
        })
    }

    /// Writes the 404 page.
    pub fn write_not_found(&self) -> Result<()> {
        self.write_page(&Page {
            file_path: self.root_output_directory.join("404.html"),
            template: self.not_found_template,
            head: meta::default_head(self.site, "Not Found"),
            content: render::not_found_page(self.site),
        })
    }
}

/// An object representing an output HTML file: where it goes, the template
/// that shells it, and the fragments the template interpolates.
struct Page<'a> {
    /// The target location on disk for the output file.
    file_path: PathBuf,

    /// The template with which the page will be rendered.
    template: &'a Template,

    /// The `<head>` metadata markup.
    head: String,

    /// The page body fragment.
    content: String,
}

impl Page<'_> {
    /// Converts a [`Page`] into a [`Value`]. The result is a
    /// [`Value::Object`] with `head` and `content` fields; [`Writer`] adds
    /// the site-wide fields before templating.
    fn to_value(&self) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("head".to_owned(), Value::String(self.head.clone()));
        m.insert("content".to_owned(), Value::String(self.content.clone()));
        Value::Object(m)
    }
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error during templating.
    Template(String),

    /// An error writing the output files.
    Io(io::Error),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use the
    /// `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`]. This
    /// allows us to use the `?` operator for fallible template operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}
