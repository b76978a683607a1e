//! The source of real posts. [`PostStore`] abstracts over where posts live
//! so the resolver can be tested against in-memory stores; [`FileStore`] is
//! the real implementation, backed by a directory of markdown files.

use crate::post::{self, Post};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Where real posts come from. Lookups fail with [`Error::NotFound`] when no
/// post has the requested slug; any other error means the store itself
/// misbehaved (unreadable directory, malformed post file).
pub trait PostStore {
    /// Returns every post in the store.
    fn all(&self) -> Result<Vec<Post>>;

    /// Returns the post with the given slug.
    fn by_slug(&self, slug: &str) -> Result<Post>;
}

/// A [`PostStore`] backed by a directory of `*.md` files. A post's slug is
/// its slugified file stem, so `My First Post.md` is served as
/// `my-first-post`.
pub struct FileStore {
    content_directory: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(content_directory: P) -> FileStore {
        FileStore {
            content_directory: content_directory.into(),
        }
    }

    /// Lists the post files in the content directory as `(slug, path)`
    /// pairs, sorted by slug so results don't depend on directory order.
    fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.content_directory)? {
            let path = entry?.path();
            if path.extension().and_then(|extension| extension.to_str()) != Some("md") {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => entries.push((slug::slugify(stem), path)),
                None => return Err(Error::InvalidFileName(path)),
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn parse_file(&self, slug: &str, path: &Path) -> Result<Post> {
        let input = fs::read_to_string(path)?;
        Post::parse(slug, &input).map_err(|err| Error::Post {
            path: path.to_owned(),
            err,
        })
    }
}

impl PostStore for FileStore {
    fn all(&self) -> Result<Vec<Post>> {
        self.entries()?
            .iter()
            .map(|(slug, path)| self.parse_file(slug, path))
            .collect()
    }

    fn by_slug(&self, slug: &str) -> Result<Post> {
        for (candidate, path) in self.entries()? {
            if candidate == slug {
                return self.parse_file(&candidate, &path);
            }
        }
        Err(Error::NotFound {
            slug: slug.to_owned(),
        })
    }
}

/// The result of a fallible store operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error fetching posts from a store.
#[derive(Debug)]
pub enum Error {
    /// No post has the requested slug.
    NotFound { slug: String },

    /// A post file's name isn't valid UTF-8.
    InvalidFileName(PathBuf),

    /// A post file exists but couldn't be parsed.
    Post { path: PathBuf, err: post::Error },

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound { slug } => write!(f, "No post with slug '{}'", slug),
            Error::InvalidFileName(path) => {
                write!(f, "Post file name isn't valid UTF-8: '{}'", path.display())
            }
            Error::Post { path, err } => {
                write!(f, "Parsing post '{}': {}", path.display(), err)
            }
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Post { path: _, err } => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
