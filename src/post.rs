//! Defines the [`Post`] type for real blog posts and the parsing from raw
//! file contents into it. A post file is a YAML frontmatter block fenced by
//! `---` lines followed by a markdown body; parsing renders the body to HTML
//! eagerly so everything downstream only ever handles HTML.

use pulldown_cmark::{html, Options, Parser};
use serde::Deserialize;
use std::fmt;

/// The frontmatter fields of a post file. Field names match the frontmatter
/// keys, which use camelCase.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMetadata {
    pub title: String,

    /// Publication date as `YYYY-MM-DD`.
    #[serde(rename = "publishedAt")]
    pub published_at: String,

    /// Short description, used for index listings and page metadata.
    pub summary: String,

    /// Site-relative path to a cover image, e.g. `/images/cover.png`. When
    /// absent, pages fall back to a generated social image.
    #[serde(default)]
    pub image: Option<String>,
}

/// A single real post: its slug, frontmatter, and body rendered to HTML.
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub metadata: PostMetadata,

    /// The post body as HTML.
    pub source: String,
}

impl Post {
    /// Parses a post from the raw contents of its file.
    pub fn parse(slug: &str, input: &str) -> Result<Post> {
        let (frontmatter, body) = split_frontmatter(input)?;
        let metadata: PostMetadata = serde_yaml::from_str(frontmatter)?;

        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        let mut source = String::new();
        html::push_html(&mut source, Parser::new_ext(body, options));

        Ok(Post {
            slug: slug.to_owned(),
            metadata,
            source,
        })
    }
}

const FENCE: &str = "---";

/// Splits raw file contents into frontmatter and body. The frontmatter must
/// begin at the very start of the file.
fn split_frontmatter(input: &str) -> Result<(&str, &str)> {
    if !input.starts_with(FENCE) {
        return Err(Error::MissingStartFence);
    }
    match input[FENCE.len()..].find(FENCE) {
        None => Err(Error::MissingEndFence),
        Some(offset) => Ok((
            &input[FENCE.len()..FENCE.len() + offset],
            &input[FENCE.len() + offset + FENCE.len()..],
        )),
    }
}

/// The result of a fallible post-parsing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a post file.
#[derive(Debug)]
pub enum Error {
    /// The file doesn't open with a `---` fence.
    MissingStartFence,

    /// The frontmatter's closing `---` fence is missing.
    MissingEndFence,

    /// The frontmatter isn't valid YAML or is missing required fields.
    Frontmatter(serde_yaml::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingStartFence => {
                write!(f, "Post must begin with a `{}` frontmatter fence", FENCE)
            }
            Error::MissingEndFence => {
                write!(f, "Missing closing `{}` frontmatter fence", FENCE)
            }
            Error::Frontmatter(err) => write!(f, "Parsing frontmatter: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Frontmatter(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts [`serde_yaml::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Frontmatter(err)
    }
}
