//! Sitemap generation: a hand-built `sitemap.xml` listing the home page,
//! the blog index, and every post page the site serves.

use crate::config::Site;
use crate::placeholder;
use crate::post::Post;
use crate::util::escape;
use std::collections::BTreeMap;
use std::io::{self, Write};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// A single `<url>` entry.
#[derive(Debug, PartialEq)]
pub struct UrlEntry {
    pub loc: String,

    /// Last modification date as `YYYY-MM-DD`.
    pub lastmod: Option<String>,
}

/// Builds the sitemap entries: the home page, the blog index, and one entry
/// per post page. Post entries carry their publication date as `lastmod`; a
/// slug that is both real and placeholder appears once, with the real
/// post's date.
pub fn entries(site: &Site, real_posts: &[Post]) -> Vec<UrlEntry> {
    let mut entries = vec![
        UrlEntry {
            loc: site.home_page(),
            lastmod: None,
        },
        UrlEntry {
            loc: site.blog_url(),
            lastmod: None,
        },
    ];

    let mut dates: BTreeMap<String, String> = BTreeMap::new();
    for post in placeholder::PLACEHOLDERS.iter() {
        dates.insert(post.slug.to_owned(), post.published_at.to_owned());
    }
    for post in real_posts {
        dates.insert(post.slug.clone(), post.metadata.published_at.clone());
    }
    for (slug, date) in dates {
        entries.push(UrlEntry {
            loc: site.post_url(&slug),
            lastmod: Some(date),
        });
    }
    entries
}

/// Serializes the entries as sitemap XML and writes them out.
pub fn write_sitemap<W: Write>(entries: &[UrlEntry], mut w: W) -> io::Result<()> {
    let mut xml = String::with_capacity(4096);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NS));
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.loc)));
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape(lastmod)));
        }
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    w.write_all(xml.as_bytes())
}
