//! Defines the fixed catalog of placeholder posts. These are hand-written
//! articles that ship with the site itself rather than living in the content
//! directory; they guarantee the blog always has something to show even when
//! no real posts exist. Real posts always take precedence: the catalog is
//! only consulted after the post store comes up empty for a slug.

/// One block of a placeholder post's body. Sections render as cards, and a
/// section may optionally name a diagram to draw beneath its text.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,

    /// Diagram tag, e.g. `"layout"`. Unknown tags render nothing.
    pub diagram: Option<&'static str>,
}

/// A built-in post. Unlike real posts, placeholders carry structured
/// sections instead of a markdown body, and a gradient class for the hero
/// banner.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub published_at: &'static str,
    pub summary: &'static str,
    pub gradient: &'static str,
    pub sections: &'static [Section],
}

impl PlaceholderPost {
    /// The diagram tag for the hero banner: the second section's diagram if
    /// it has one, otherwise `"layout"`.
    pub fn hero_diagram(&self) -> &'static str {
        self.sections
            .get(1)
            .and_then(|section| section.diagram)
            .unwrap_or("layout")
    }
}

/// Looks up a placeholder by slug. Scans the catalog in order; the catalog
/// is small and fixed, so a linear scan is fine.
pub fn find(slug: &str) -> Option<&'static PlaceholderPost> {
    PLACEHOLDERS.iter().find(|post| post.slug == slug)
}

pub static PLACEHOLDERS: [PlaceholderPost; 2] = [
    PlaceholderPost {
        slug: "nextjs-architecture",
        title: "Next.js Architecture: App Router Deep Dive",
        published_at: "2025-11-20",
        summary: "Explore the Next.js App Router, layouts, streaming, and \
                  best practices for building scalable apps.",
        gradient: "bg-gradient-to-r from-indigo-600 via-sky-500 to-emerald-400",
        sections: &[
            Section {
                title: "Overview",
                body: "Next.js App Router introduces file-based routing, \
                       server components, and layout nesting to simplify \
                       complex UI structure.",
                diagram: None,
            },
            Section {
                title: "Layouts & Nesting",
                body: "Layouts let you persist UI across routes while only \
                       updating the part that changes. This reduces \
                       re-renders and improves UX.",
                diagram: Some("layout"),
            },
            Section {
                title: "Streaming & Suspense",
                body: "Streaming allows progressively rendering parts of the \
                       page as they become ready, improving perceived \
                       performance.",
                diagram: Some("stream"),
            },
            Section {
                title: "Practical Tips",
                body: "Use route groups, carefully design data fetching \
                       boundaries, and prefer server components for heavy IO \
                       work.",
                diagram: None,
            },
        ],
    },
    PlaceholderPost {
        slug: "react-patterns",
        title: "React Patterns: Composition over Inheritance",
        published_at: "2025-10-15",
        summary: "A practical guide to composition patterns in React: render \
                  props, hooks, and component composition.",
        gradient: "bg-gradient-to-r from-pink-500 via-purple-600 to-indigo-700",
        sections: &[
            Section {
                title: "Composition Basics",
                body: "Compose small stateless components to build complex \
                       UI while keeping logic reusable and testable.",
                diagram: None,
            },
            Section {
                title: "Custom Hooks",
                body: "Extract behavior into hooks to share logic without \
                       coupling components to implementation details.",
                diagram: Some("hooks"),
            },
            Section {
                title: "Patterns in Practice",
                body: "Combine hooks with context and higher-order utilities \
                       to build robust abstractions that stay testable.",
                diagram: None,
            },
            Section {
                title: "Performance",
                body: "Use memoization, avoid unnecessary context updates, \
                       and split rendering with virtualization where needed.",
                diagram: None,
            },
        ],
    },
];
