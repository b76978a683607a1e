//! Post resolution: decides what a given slug renders. Real posts from the
//! store always win; slugs the store can't serve fall back to the
//! placeholder catalog; slugs known to neither are [`ResolvedPost::NotFound`]
//! and become the 404 page. Store failures never propagate out of this
//! module, so a broken content directory can't take down pages the catalog
//! can serve.

use crate::placeholder::{self, PlaceholderPost};
use crate::post::Post;
use crate::store::PostStore;
use std::collections::BTreeSet;

/// The outcome of resolving a slug.
#[derive(Debug)]
pub enum ResolvedPost {
    /// A real post from the store.
    Real(Post),

    /// A built-in placeholder post.
    Placeholder(&'static PlaceholderPost),

    /// Neither the store nor the catalog knows the slug.
    NotFound,
}

/// Applies the resolution rules against a [`PostStore`] and the built-in
/// placeholder catalog.
pub struct Resolver<S> {
    pub store: S,
}

impl<S: PostStore> Resolver<S> {
    pub fn new(store: S) -> Resolver<S> {
        Resolver { store }
    }

    /// Resolves a slug. Posts are fetched from the store fresh on every
    /// call; nothing is cached here.
    pub fn resolve(&self, slug: &str) -> ResolvedPost {
        match self.store.by_slug(slug) {
            Ok(post) => return ResolvedPost::Real(post),
            Err(err) => {
                tracing::debug!("store has no post for slug '{}': {}", slug, err);
            }
        }
        match placeholder::find(slug) {
            Some(post) => ResolvedPost::Placeholder(post),
            None => ResolvedPost::NotFound,
        }
    }

    /// Every real post in the store. A store failure logs a warning and
    /// yields an empty list so the rest of the site still builds.
    pub fn real_posts(&self) -> Vec<Post> {
        match self.store.all() {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!("failed to list posts, continuing without them: {}", err);
                Vec::new()
            }
        }
    }

    /// The slugs of every post page the site serves: the union of store
    /// slugs and placeholder slugs, deduplicated. A slug in both sets
    /// appears once and resolves to the real post.
    pub fn all_slugs(&self) -> BTreeSet<String> {
        let mut slugs: BTreeSet<String> = self
            .real_posts()
            .into_iter()
            .map(|post| post.slug)
            .collect();
        for post in placeholder::PLACEHOLDERS.iter() {
            slugs.insert(post.slug.to_owned());
        }
        slugs
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::post::PostMetadata;
    use crate::store;

    fn post(slug: &str, published_at: &str) -> Post {
        Post {
            slug: slug.to_owned(),
            metadata: PostMetadata {
                title: format!("Title for {}", slug),
                published_at: published_at.to_owned(),
                summary: "A summary.".to_owned(),
                image: None,
            },
            source: "<p>body</p>".to_owned(),
        }
    }

    struct FakeStore {
        posts: Vec<Post>,
    }

    impl PostStore for FakeStore {
        fn all(&self) -> store::Result<Vec<Post>> {
            Ok(self.posts.clone())
        }

        fn by_slug(&self, slug: &str) -> store::Result<Post> {
            self.posts
                .iter()
                .find(|post| post.slug == slug)
                .cloned()
                .ok_or_else(|| store::Error::NotFound {
                    slug: slug.to_owned(),
                })
        }
    }

    /// A store whose backing directory is unreadable.
    struct FailingStore;

    impl FailingStore {
        fn error() -> store::Error {
            store::Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store offline",
            ))
        }
    }

    impl PostStore for FailingStore {
        fn all(&self) -> store::Result<Vec<Post>> {
            Err(FailingStore::error())
        }

        fn by_slug(&self, _slug: &str) -> store::Result<Post> {
            Err(FailingStore::error())
        }
    }

    #[test]
    fn test_real_post_wins_over_placeholder() {
        let resolver = Resolver::new(FakeStore {
            posts: vec![post("react-patterns", "2025-12-01")],
        });
        match resolver.resolve("react-patterns") {
            ResolvedPost::Real(post) => {
                assert_eq!(post.metadata.title, "Title for react-patterns")
            }
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_placeholder_fallback() {
        let resolver = Resolver::new(FakeStore { posts: vec![] });
        match resolver.resolve("nextjs-architecture") {
            ResolvedPost::Placeholder(post) => {
                assert_eq!(post.sections.len(), 4);
                assert_eq!(post.hero_diagram(), "layout");
            }
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        let resolver = Resolver::new(FakeStore { posts: vec![] });
        match resolver.resolve("no-such-post") {
            ResolvedPost::NotFound => (),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_store_failure_falls_back_to_placeholder() {
        let resolver = Resolver::new(FailingStore);
        match resolver.resolve("react-patterns") {
            ResolvedPost::Placeholder(post) => assert_eq!(post.slug, "react-patterns"),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_store_failure_without_placeholder_is_not_found() {
        let resolver = Resolver::new(FailingStore);
        match resolver.resolve("no-such-post") {
            ResolvedPost::NotFound => (),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_all_slugs_union_dedup() {
        let resolver = Resolver::new(FakeStore {
            posts: vec![
                post("my-post", "2025-01-01"),
                post("react-patterns", "2025-12-01"),
            ],
        });
        let slugs = resolver.all_slugs();
        assert_eq!(slugs.len(), 3);
        assert!(slugs.contains("my-post"));
        assert!(slugs.contains("nextjs-architecture"));
        assert!(slugs.contains("react-patterns"));
    }

    #[test]
    fn test_all_slugs_store_failure_keeps_placeholders() {
        let resolver = Resolver::new(FailingStore);
        let slugs = resolver.all_slugs();
        assert_eq!(slugs.len(), 2);
        assert!(slugs.contains("nextjs-architecture"));
        assert!(slugs.contains("react-patterns"));
    }

    #[test]
    fn test_real_posts_store_failure_is_empty() {
        let resolver = Resolver::new(FailingStore);
        assert!(resolver.real_posts().is_empty());
    }
}
