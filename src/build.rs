//! Exports the [`build_site`] function which stitches together the
//! high-level steps of building the output site: resolving every slug to a
//! page ([`crate::resolve`]), writing the post, index, and 404 pages
//! ([`crate::write`]), copying the static source directory into the static
//! output directory, and generating the Atom feed and sitemap.

use crate::config::Config;
use crate::feed::{self, Error as FeedError};
use crate::resolve::Resolver;
use crate::sitemap;
use crate::store::FileStore;
use crate::write::{Error as WriteError, Writer};
use gtmpl::Template;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Builds the site from a [`Config`] object. This calls into
/// [`Writer::write_post_pages`] and friends which do the heavy-lifting;
/// this function also copies the static assets into the output directory
/// and writes the feed and sitemap.
pub fn build_site(config: &Config) -> Result<()> {
    let resolver = Resolver::new(FileStore::new(config.content_directory.clone()));

    // Parse the template files.
    let post_template = parse_template(config.post_template.iter())?;
    let index_template = parse_template(config.index_template.iter())?;
    let not_found_template = parse_template(config.not_found_template.iter())?;

    // Blow away the old output subdirectories so stale pages don't linger.
    // The root output directory itself survives; it may hold files that
    // aren't ours.
    rmdir(&config.blog_output_directory)?;
    rmdir(&config.static_output_directory)?;
    std::fs::create_dir_all(&config.blog_output_directory)?;

    // write the post pages, the blog index, and the 404 page
    let writer = Writer {
        post_template: &post_template,
        index_template: &index_template,
        not_found_template: &not_found_template,
        blog_output_directory: &config.blog_output_directory,
        root_output_directory: &config.root_output_directory,
        list_real_posts: config.list_real_posts,
        site: &config.site,
    };
    writer.write_post_pages(&resolver)?;
    writer.write_index(&resolver)?;
    writer.write_not_found()?;

    // copy static directory
    copy_dir(
        &config.static_source_directory,
        &config.static_output_directory,
    )?;

    // copy /blog/index.html to /index.html
    let _ = std::fs::copy(
        &config.blog_output_directory.join("index.html"),
        &config.root_output_directory.join("index.html"),
    )?;

    // The feed syndicates real posts only; the sitemap covers every page.
    let posts = resolver.real_posts();
    feed::write_feed(
        &config.site,
        &posts,
        File::create(config.root_output_directory.join("feed.atom"))?,
    )?;
    sitemap::write_sitemap(
        &sitemap::entries(&config.site, &posts),
        File::create(config.root_output_directory.join("sitemap.xml"))?,
    )?;

    tracing::info!(
        "built site with {} real posts into '{}'",
        posts.len(),
        config.root_output_directory.display()
    );
    Ok(())
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &dst.join(entry.file_name()))?;
        } else {
            std::fs::copy(entry.path(), dst.join(entry.file_name()))?;
        }
    }

    Ok(())
}

// Loads the template file contents, concatenates them, and parses the
// result into a template.
fn parse_template<P: AsRef<Path>>(template_files: impl Iterator<Item = P>) -> Result<Template> {
    let mut contents = String::new();
    for template_file in template_files {
        use std::io::Read;
        let template_file = template_file.as_ref();
        File::open(&template_file)
            .map_err(|e| Error::OpenTemplateFile {
                path: template_file.to_owned(),
                err: e,
            })?
            .read_to_string(&mut contents)?;
        contents.push(' ');
    }

    let mut template = Template::default();
    template.parse(&contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

fn rmdir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(x) => Ok(x),
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Ok(()),
            _ => Err(Error::Clean {
                path: dir.to_owned(),
                err: e,
            }),
        },
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during writing pages,
/// cleaning output directories, parsing template files, generating the
/// feed, and other I/O.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors writing pages to disk as HTML files.
    Write(WriteError),

    /// Returned for I/O problems while cleaning output directories.
    Clean { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while opening template files.
    OpenTemplateFile { path: PathBuf, err: std::io::Error },

    /// Returned for errors parsing template files.
    ParseTemplate(String),

    /// Returned for errors writing the feed.
    Feed(FeedError),

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Write(err) => err.fmt(f),
            Error::Clean { path, err } => {
                write!(f, "Cleaning directory '{}': {}", path.display(), err)
            }
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate(err) => err.fmt(f),
            Error::Feed(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Write(err) => Some(err),
            Error::Clean { path: _, err } => Some(err),
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::ParseTemplate(_) => None,
            Error::Feed(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}

impl From<FeedError> for Error {
    /// Converts [`FeedError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: FeedError) -> Error {
        Error::Feed(err)
    }
}
