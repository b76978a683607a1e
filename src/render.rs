//! Renders page bodies as HTML fragments. Templates supply the outer shell
//! (`<html>`, `<head>`, site chrome); these functions produce the content
//! that lands inside it. Real posts render their markdown-derived HTML
//! as-is, placeholders render the richer hero-and-cards layout, and the
//! blog index renders the featured cards for the whole catalog.

use crate::config::Site;
use crate::diagram;
use crate::placeholder::{PlaceholderPost, Section, PLACEHOLDERS};
use crate::post::Post;
use crate::util::{escape, format_date};

/// The body of a real post's page: structured data, title, date, and the
/// post's own HTML.
pub fn post_page(site: &Site, post: &Post) -> String {
    let mut out = String::new();
    out.push_str("<section id=\"blog\">\n");
    out.push_str(&format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        structured_data(site, post)
    ));
    out.push_str(&format!(
        "<h1 class=\"title\">{}</h1>\n",
        escape(&post.metadata.title)
    ));
    out.push_str(&format!(
        "<p class=\"post-date\">{}</p>\n",
        escape(&format_date(&post.metadata.published_at))
    ));
    out.push_str(&format!(
        "<article class=\"prose\">{}</article>\n",
        post.source
    ));
    out.push_str("</section>\n");
    out
}

/// The schema.org `BlogPosting` blob embedded in real post pages.
fn structured_data(site: &Site, post: &Post) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.metadata.title,
        "datePublished": post.metadata.published_at,
        "dateModified": post.metadata.published_at,
        "description": post.metadata.summary,
        "image": crate::meta::social_image(
            site,
            &post.metadata.title,
            post.metadata.image.as_deref()
        ),
        "url": site.post_url(&post.slug),
        "author": {
            "@type": "Person",
            "name": site.author.name
        }
    })
    .to_string()
}

const BACK_ARROW: &str = r#"<svg class="back-arrow" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"><path stroke-linecap="round" stroke-linejoin="round" d="M15 19l-7-7 7-7"/></svg>"#;

/// Filler copy rendered under every placeholder section.
const SECTION_BOILERPLATE: &str = "<p>This section expands on the topic with example code, \
    trade-offs and recommended patterns. Use this template to add additional paragraphs, \
    lists and inline code.</p>\n<p>Example: Prefer composition and hooks to keep components \
    small. When introducing server components, clearly separate data fetching boundaries \
    from UI rendering.</p>";

/// The body of a placeholder post's page: a gradient hero with the post's
/// lead diagram, then one card per section.
pub fn placeholder_page(site: &Site, post: &PlaceholderPost) -> String {
    let mut out = String::new();
    out.push_str("<section id=\"blog\" class=\"placeholder-post\">\n");

    out.push_str(&format!("<div class=\"hero {}\">\n", post.gradient));
    out.push_str(&format!(
        "<a class=\"back-link\" href=\"{}\">{}<span>Back</span></a>\n",
        site.blog_url(),
        BACK_ARROW
    ));
    out.push_str("<div class=\"hero-text\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape(post.title)));
    out.push_str(&format!(
        "<p class=\"summary\">{}</p>\n",
        escape(post.summary)
    ));
    out.push_str(&format!(
        "<div class=\"post-date\">{}</div>\n",
        escape(&format_date(post.published_at))
    ));
    out.push_str("</div>\n<div class=\"hero-art-wrap\">");
    if let Some(descriptor) = diagram::select(post.hero_diagram()) {
        out.push_str(&diagram::svg(descriptor, "diagram"));
    }
    out.push_str("</div>\n</div>\n");

    out.push_str("<div class=\"post-sections\">\n");
    for section in post.sections {
        out.push_str("<section class=\"card\">\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape(section.title)));
        out.push_str(&format!(
            "<p class=\"section-body\">{}</p>\n",
            escape(section.body)
        ));
        if let Some(tag) = section.diagram {
            if let Some(descriptor) = diagram::select(tag) {
                out.push_str("<div class=\"section-diagram\">");
                out.push_str(&diagram::svg(descriptor, "diagram"));
                out.push_str("</div>\n");
            }
        }
        out.push_str("<div class=\"prose\">\n");
        out.push_str(SECTION_BOILERPLATE);
        out.push_str("\n</div>\n</section>\n");
    }
    out.push_str("</div>\n</section>\n");
    out
}

const HERO_ART: &str = r##"<svg viewBox="0 0 400 300" class="hero-art" xmlns="http://www.w3.org/2000/svg" aria-hidden="true"><defs><linearGradient id="hero-gradient" x1="0" x2="1"><stop offset="0" stop-color="#ffffff" stop-opacity="0.06"/><stop offset="1" stop-color="#ffffff" stop-opacity="0.02"/></linearGradient></defs><rect width="400" height="300" rx="12" fill="url(#hero-gradient)"/><g fill="none" stroke="#fff" stroke-opacity="0.08"><rect x="20" y="20" width="140" height="60" rx="6"/><rect x="180" y="20" width="200" height="60" rx="6"/><rect x="20" y="100" width="360" height="160" rx="6"/></g></svg>"##;

/// The body of the blog index: a hero banner, a featured card for every
/// placeholder post, and (optionally) a plain list of real posts.
pub fn index_page(site: &Site, real_posts: &[Post], list_real_posts: bool) -> String {
    let mut out = String::new();
    out.push_str("<section>\n");

    out.push_str("<div class=\"hero hero-index\">\n<div class=\"hero-text\">\n");
    out.push_str("<h1>Thoughtful technical articles</h1>\n");
    out.push_str(
        "<p>Deep dives, architecture notes and practical patterns for React and Next.js \
         engineers. Read focused write-ups with diagrams and clear sub-sections.</p>\n",
    );
    out.push_str(&format!(
        "<div class=\"hero-actions\"><a class=\"button\" href=\"{}\">Browse posts</a>\
         <a class=\"button button-outline\" href=\"#featured\">Try a sample</a></div>\n",
        site.blog_url()
    ));
    out.push_str("</div>\n<div class=\"hero-art-wrap\">");
    out.push_str(HERO_ART);
    out.push_str("</div>\n</div>\n");

    out.push_str("<section id=\"featured\" class=\"featured-posts\">\n");
    for post in PLACEHOLDERS.iter() {
        placeholder_card(&mut out, site, post);
    }
    out.push_str("</section>\n");

    if list_real_posts {
        out.push_str("<div class=\"all-posts\">\n<h3>All posts</h3>\n");
        let mut posts: Vec<&Post> = real_posts.iter().collect();
        // Newest first; sort_by is stable so equal dates keep store order.
        posts.sort_by(|a, b| b.metadata.published_at.cmp(&a.metadata.published_at));
        for post in posts {
            out.push_str(&format!(
                "<a class=\"post-link\" href=\"{}\"><p>{}</p><p class=\"post-date\">{}</p></a>\n",
                site.post_url(&post.slug),
                escape(&post.metadata.title),
                escape(&post.metadata.published_at)
            ));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
    out
}

/// One featured card on the index: title and byline, the section texts, a
/// diagram rail down the side, and a link to the full page.
fn placeholder_card(out: &mut String, site: &Site, post: &PlaceholderPost) {
    out.push_str("<article class=\"post-card\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", escape(post.title)));
    out.push_str(&format!(
        "<p class=\"byline\">{} • {}</p>\n",
        escape(post.published_at),
        escape(post.summary)
    ));

    out.push_str("<div class=\"card-sections\">\n");
    for section in post.sections {
        out.push_str(&format!(
            "<section class=\"card-section\"><h3>{}</h3><p>{}</p></section>\n",
            escape(section.title),
            escape(section.body)
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"card-diagrams\">\n");
    for (index, section) in post.sections.iter().enumerate() {
        out.push_str("<div class=\"card-diagram\">");
        if let Some(descriptor) = diagram::select(listing_diagram_tag(section, index)) {
            out.push_str(&diagram::svg(descriptor, "diagram-small"));
        }
        out.push_str(&format!(
            "<div class=\"card-diagram-label\"><p>{}</p><p class=\"note\">Short note</p></div>",
            escape(section.title)
        ));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<p class=\"card-footer\"><a href=\"{}\">Read full</a> • Preview content included</p>\n",
        site.post_url(post.slug)
    ));
    out.push_str("</article>\n");
}

/// The diagram tag for a listing row: the section's own tag when it has
/// one, otherwise alternating by row parity so every row gets art.
fn listing_diagram_tag(section: &Section, index: usize) -> &'static str {
    match section.diagram {
        Some(tag) => tag,
        None => {
            if index % 2 == 0 {
                "layout"
            } else {
                "hooks"
            }
        }
    }
}

/// The body of the 404 page.
pub fn not_found_page(site: &Site) -> String {
    format!(
        "<section id=\"not-found\">\n<h1>404</h1>\n<p>This page could not be found.</p>\n\
         <p><a href=\"{}\">Back to the home page</a></p>\n</section>\n",
        site.home_page()
    )
}
