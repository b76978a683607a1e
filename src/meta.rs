//! Page metadata: the `<head>` content every page carries. Real and
//! placeholder posts produce the same shape with one deliberate asymmetry:
//! real posts always get a social image (the frontmatter cover image, or a
//! generated one when the frontmatter names none), while placeholders get no
//! image at all and leave scrapers to their own defaults.

use crate::config::Site;
use crate::resolve::ResolvedPost;
use crate::util::escape;

/// OpenGraph fields for a post page. The `og:type` is always `article`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub published_time: String,

    /// The post's canonical URL.
    pub url: String,

    pub image: Option<String>,
}

/// Twitter card fields for a post page. The card type is always
/// `summary_large_image`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterCard {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

/// Everything that goes into a post page's `<head>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

impl PageMetadata {
    /// Serializes the metadata as `<head>` markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        meta(&mut out, "name", "description", &self.description);
        meta(&mut out, "property", "og:title", &self.open_graph.title);
        meta(
            &mut out,
            "property",
            "og:description",
            &self.open_graph.description,
        );
        meta(&mut out, "property", "og:type", "article");
        meta(
            &mut out,
            "property",
            "article:published_time",
            &self.open_graph.published_time,
        );
        meta(&mut out, "property", "og:url", &self.open_graph.url);
        if let Some(image) = &self.open_graph.image {
            meta(&mut out, "property", "og:image", image);
        }
        meta(&mut out, "name", "twitter:card", "summary_large_image");
        meta(&mut out, "name", "twitter:title", &self.twitter.title);
        meta(
            &mut out,
            "name",
            "twitter:description",
            &self.twitter.description,
        );
        if let Some(image) = &self.twitter.image {
            meta(&mut out, "name", "twitter:image", image);
        }
        out
    }
}

fn meta(out: &mut String, key_attribute: &str, key: &str, content: &str) {
    out.push_str(&format!(
        "<meta {}=\"{}\" content=\"{}\"/>\n",
        key_attribute,
        key,
        escape(content)
    ));
}

/// Derives the page metadata for a resolved post. `NotFound` has no post
/// page and derives nothing; the 404 page uses [`default_head`] instead.
pub fn page_metadata(site: &Site, resolved: &ResolvedPost) -> Option<PageMetadata> {
    match resolved {
        ResolvedPost::Real(post) => {
            let image = social_image(site, &post.metadata.title, post.metadata.image.as_deref());
            Some(PageMetadata {
                title: post.metadata.title.clone(),
                description: post.metadata.summary.clone(),
                open_graph: OpenGraph {
                    title: post.metadata.title.clone(),
                    description: post.metadata.summary.clone(),
                    published_time: post.metadata.published_at.clone(),
                    url: site.post_url(&post.slug),
                    image: Some(image.clone()),
                },
                twitter: TwitterCard {
                    title: post.metadata.title.clone(),
                    description: post.metadata.summary.clone(),
                    image: Some(image),
                },
            })
        }
        ResolvedPost::Placeholder(post) => Some(PageMetadata {
            title: post.title.to_owned(),
            description: post.summary.to_owned(),
            open_graph: OpenGraph {
                title: post.title.to_owned(),
                description: post.summary.to_owned(),
                published_time: post.published_at.to_owned(),
                url: site.post_url(post.slug),
                image: None,
            },
            twitter: TwitterCard {
                title: post.title.to_owned(),
                description: post.summary.to_owned(),
                image: None,
            },
        }),
        ResolvedPost::NotFound => None,
    }
}

/// The social image for a real post: the cover image when the frontmatter
/// names one, otherwise the generated image endpoint seeded with the title.
/// An empty frontmatter value counts as no image.
pub fn social_image(site: &Site, title: &str, image: Option<&str>) -> String {
    match image.filter(|image| !image.is_empty()) {
        Some(image) => format!("{}{}", site.base(), image),
        None => og_image_url(site, title),
    }
}

/// The URL of the generated social image for a title.
pub fn og_image_url(site: &Site, title: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(title.as_bytes()).collect();
    format!("{}/og?title={}", site.base(), encoded)
}

/// Minimal `<head>` metadata for pages that aren't posts (the blog index
/// and the 404 page): a title plus the site description.
pub fn default_head(site: &Site, page_title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("<title>{}</title>\n", escape(page_title)));
    meta(&mut out, "name", "description", &site.description);
    meta(&mut out, "property", "og:title", page_title);
    meta(&mut out, "property", "og:description", &site.description);
    meta(&mut out, "property", "og:type", "website");
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Author;
    use crate::post::{Post, PostMetadata};
    use url::Url;

    fn site() -> Site {
        Site {
            root: Url::parse("https://example.com").unwrap(),
            title: "Jane Doe".to_owned(),
            description: "Software engineer and writer.".to_owned(),
            author: Author {
                name: "Jane Doe".to_owned(),
                email: None,
            },
        }
    }

    fn real_post(image: Option<&str>) -> ResolvedPost {
        ResolvedPost::Real(Post {
            slug: "my-post".to_owned(),
            metadata: PostMetadata {
                title: "My Post".to_owned(),
                published_at: "2025-06-01".to_owned(),
                summary: "A post of mine.".to_owned(),
                image: image.map(str::to_owned),
            },
            source: "<p>body</p>".to_owned(),
        })
    }

    #[test]
    fn test_real_post_with_cover_image() {
        let metadata = page_metadata(&site(), &real_post(Some("/images/cover.png"))).unwrap();
        assert_eq!(
            metadata.open_graph.image.as_deref(),
            Some("https://example.com/images/cover.png")
        );
        assert_eq!(metadata.twitter.image, metadata.open_graph.image);
        assert_eq!(
            metadata.open_graph.url,
            "https://example.com/blog/my-post.html"
        );
        assert_eq!(metadata.open_graph.published_time, "2025-06-01");
    }

    #[test]
    fn test_real_post_without_cover_image_gets_generated_one() {
        let metadata = page_metadata(&site(), &real_post(None)).unwrap();
        assert_eq!(
            metadata.open_graph.image.as_deref(),
            Some("https://example.com/og?title=My+Post")
        );
        assert_eq!(metadata.twitter.image, metadata.open_graph.image);
    }

    #[test]
    fn test_real_post_with_empty_cover_image_gets_generated_one() {
        let metadata = page_metadata(&site(), &real_post(Some(""))).unwrap();
        assert_eq!(
            metadata.open_graph.image.as_deref(),
            Some("https://example.com/og?title=My+Post")
        );
        assert_eq!(metadata.twitter.image, metadata.open_graph.image);
    }

    #[test]
    fn test_placeholder_has_no_images() {
        let resolved = ResolvedPost::Placeholder(crate::placeholder::find("react-patterns").unwrap());
        let metadata = page_metadata(&site(), &resolved).unwrap();
        assert_eq!(metadata.open_graph.image, None);
        assert_eq!(metadata.twitter.image, None);
        assert_eq!(metadata.open_graph.published_time, "2025-10-15");
        assert_eq!(
            metadata.open_graph.url,
            "https://example.com/blog/react-patterns.html"
        );
    }

    #[test]
    fn test_not_found_has_no_metadata() {
        assert_eq!(page_metadata(&site(), &ResolvedPost::NotFound), None);
    }

    #[test]
    fn test_og_image_url_encodes_title() {
        assert_eq!(
            og_image_url(&site(), "React Patterns: Composition over Inheritance"),
            "https://example.com/og?title=React+Patterns%3A+Composition+over+Inheritance"
        );
    }

    #[test]
    fn test_to_html() {
        let html = page_metadata(&site(), &real_post(None)).unwrap().to_html();
        assert!(html.contains("<title>My Post</title>"));
        assert!(html.contains(r#"<meta property="og:type" content="article"/>"#));
        assert!(html.contains(r#"<meta property="article:published_time" content="2025-06-01"/>"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image"/>"#));
        assert!(html.contains(r#"<meta property="og:image""#));
    }

    #[test]
    fn test_to_html_placeholder_omits_images() {
        let resolved = ResolvedPost::Placeholder(crate::placeholder::find("react-patterns").unwrap());
        let html = page_metadata(&site(), &resolved).unwrap().to_html();
        assert!(!html.contains("og:image"));
        assert!(!html.contains("twitter:image"));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image"/>"#));
    }

    #[test]
    fn test_to_html_escapes_content() {
        let mut resolved = real_post(None);
        if let ResolvedPost::Real(post) = &mut resolved {
            post.metadata.title = "Q&A".to_owned();
        }
        let html = page_metadata(&site(), &resolved).unwrap().to_html();
        assert!(html.contains("<title>Q&amp;A</title>"));
        assert!(html.contains(r#"content="Q&amp;A""#));
    }

    #[test]
    fn test_default_head() {
        let html = default_head(&site(), "Blog");
        assert!(html.contains("<title>Blog</title>"));
        assert!(html.contains(r#"<meta name="description" content="Software engineer and writer."/>"#));
        assert!(html.contains(r#"<meta property="og:type" content="website"/>"#));
    }
}
