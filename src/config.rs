//! Project configuration. A site is a directory containing a `vitrine.yaml`
//! project file, a `content/` directory of markdown posts, a `static/`
//! directory of assets, and a `theme/` directory with templates. This module
//! locates the project file, deserializes it and the theme file, and
//! resolves everything into an absolute-pathed [`Config`].

use crate::util::open;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

const PROJECT_FILE: &str = "vitrine.yaml";

/// The project file as written by the user.
#[derive(Deserialize)]
struct Project {
    site_root: Url,
    title: String,
    description: String,
    author: Author,

    /// When true, the blog index lists real posts beneath the placeholder
    /// cards.
    #[serde(default)]
    list_real_posts: bool,
}

/// The theme file (`theme/theme.yaml`). Each template is a list of fragment
/// files that are concatenated before parsing.
#[derive(Deserialize)]
struct Theme {
    post_template: Vec<PathBuf>,
    index_template: Vec<PathBuf>,
    not_found_template: Vec<PathBuf>,
}

/// The site's author.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,
}

/// Site-wide identity: everything needed to derive canonical URLs and page
/// metadata.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: Url,
    pub title: String,
    pub description: String,
    pub author: Author,
}

impl Site {
    /// The site root with any trailing slash trimmed, ready to prepend to
    /// absolute paths. `Url` normalizes `https://example.com` to end in a
    /// slash, so trimming keeps joins from doubling it.
    pub fn base(&self) -> &str {
        self.root.as_str().trim_end_matches('/')
    }

    /// The home page URL.
    pub fn home_page(&self) -> String {
        format!("{}/", self.base())
    }

    /// The canonical URL of a post page.
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{}.html", self.base(), slug)
    }

    /// The URL of the blog index page.
    pub fn blog_url(&self) -> String {
        format!("{}/blog/index.html", self.base())
    }

    /// The URL static assets are served under.
    pub fn static_url(&self) -> String {
        format!("{}/static", self.base())
    }
}

/// Fully-resolved build configuration, with every path anchored to the
/// project root.
pub struct Config {
    pub site: Site,
    pub list_real_posts: bool,
    pub content_directory: PathBuf,
    pub static_source_directory: PathBuf,
    pub post_template: Vec<PathBuf>,
    pub index_template: Vec<PathBuf>,
    pub not_found_template: Vec<PathBuf>,
    pub root_output_directory: PathBuf,
    pub blog_output_directory: PathBuf,
    pub static_output_directory: PathBuf,
}

impl Config {
    /// Searches `dir` and its ancestors for the project file and loads the
    /// configuration from the first one found.
    pub fn from_directory(dir: &Path, output_directory: &Path) -> Result<Config> {
        let path = dir.join(PROJECT_FILE);
        if path.exists() {
            Config::from_project_file(&path, output_directory)
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent, output_directory),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    PROJECT_FILE
                )),
            }
        }
    }

    pub fn from_project_file(path: &Path, output_directory: &Path) -> Result<Config> {
        let project: Project = serde_yaml::from_reader(open(path, "project")?)?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(project_root) => {
                let theme_dir = project_root.join("theme");
                let theme: Theme =
                    serde_yaml::from_reader(open(&theme_dir.join("theme.yaml"), "theme")?)?;
                let templates = |relpaths: &[PathBuf]| -> Vec<PathBuf> {
                    relpaths
                        .iter()
                        .map(|relpath| theme_dir.join(relpath))
                        .collect()
                };
                Ok(Config {
                    site: Site {
                        root: project.site_root,
                        title: project.title,
                        description: project.description,
                        author: project.author,
                    },
                    list_real_posts: project.list_real_posts,
                    content_directory: project_root.join("content"),
                    static_source_directory: project_root.join("static"),
                    post_template: templates(&theme.post_template),
                    index_template: templates(&theme.index_template),
                    not_found_template: templates(&theme.not_found_template),
                    root_output_directory: output_directory.to_owned(),
                    blog_output_directory: output_directory.join("blog"),
                    static_output_directory: output_directory.join("static"),
                })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    const PROJECT: &str = r#"site_root: https://example.com
title: Jane Doe
description: Software engineer and writer.
author:
  name: Jane Doe
  email: jane@example.com
"#;

    const THEME: &str = r#"post_template: [base.html, post.html]
index_template: [base.html, index.html]
not_found_template: [base.html, not_found.html]
"#;

    fn project_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("vitrine.yaml"), PROJECT).unwrap();
        fs::create_dir(dir.path().join("theme")).unwrap();
        fs::write(dir.path().join("theme").join("theme.yaml"), THEME).unwrap();
        dir
    }

    #[test]
    fn test_from_project_file() {
        let dir = project_dir();
        let out = dir.path().join("out");
        let config = Config::from_project_file(&dir.path().join("vitrine.yaml"), &out).unwrap();
        assert_eq!(config.site.base(), "https://example.com");
        assert_eq!(config.site.title, "Jane Doe");
        assert_eq!(config.site.author.name, "Jane Doe");
        assert!(!config.list_real_posts);
        assert_eq!(config.content_directory, dir.path().join("content"));
        assert_eq!(
            config.post_template,
            vec![
                dir.path().join("theme").join("base.html"),
                dir.path().join("theme").join("post.html"),
            ]
        );
        assert_eq!(config.blog_output_directory, out.join("blog"));
    }

    #[test]
    fn test_from_directory_walks_up() {
        let dir = project_dir();
        let nested = dir.path().join("content").join("drafts");
        fs::create_dir_all(&nested).unwrap();
        let config = Config::from_directory(&nested, &dir.path().join("out")).unwrap();
        assert_eq!(config.site.title, "Jane Doe");
    }

    #[test]
    fn test_site_urls() {
        let site = Site {
            root: Url::parse("https://example.com").unwrap(),
            title: "t".to_owned(),
            description: "d".to_owned(),
            author: Author {
                name: "a".to_owned(),
                email: None,
            },
        };
        assert_eq!(site.home_page(), "https://example.com/");
        assert_eq!(
            site.post_url("my-post"),
            "https://example.com/blog/my-post.html"
        );
        assert_eq!(site.blog_url(), "https://example.com/blog/index.html");
        assert_eq!(site.static_url(), "https://example.com/static");
    }

    #[test]
    fn test_site_urls_with_subpath_root() {
        let site = Site {
            root: Url::parse("https://example.com/me/").unwrap(),
            title: "t".to_owned(),
            description: "d".to_owned(),
            author: Author {
                name: "a".to_owned(),
                email: None,
            },
        };
        assert_eq!(
            site.post_url("my-post"),
            "https://example.com/me/blog/my-post.html"
        );
    }
}
