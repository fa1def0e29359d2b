//! In-memory post collection for a single load

use super::loader::ContentLoader;
use super::post::Post;
use crate::error::ContentError;

/// Holds the posts from one load. Rebuilt on every run; never mutated.
#[derive(Debug, Clone, Default)]
pub struct PostRepository {
    posts: Vec<Post>,
}

impl PostRepository {
    /// Load every post the loader can see
    pub fn load(loader: &ContentLoader) -> Result<Self, ContentError> {
        Ok(Self::from_posts(loader.load_posts()?))
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// All posts in load order
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn find_by_slug(&self, slug: &str) -> Result<&Post, ContentError> {
        self.posts
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
