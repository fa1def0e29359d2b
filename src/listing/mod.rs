//! Post ordering, truncation and previous/next navigation

mod paginator;

pub use paginator::{PageError, Paginator};

use crate::content::Post;

/// A post together with its neighbours in newest-first order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors<'a> {
    pub current: &'a Post,
    /// The next-older post
    pub previous: Option<&'a Post>,
    /// The next-newer post
    pub next: Option<&'a Post>,
}

/// Sort posts newest first (ties by slug)
pub fn sort_newest_first(posts: &[Post]) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| a.cmp_newest_first(b));
    sorted
}

/// Newest-first posts, optionally truncated to the first `n`
pub fn list_latest(posts: &[Post], n: Option<usize>) -> Vec<&Post> {
    let mut sorted = sort_newest_first(posts);
    if let Some(n) = n {
        sorted.truncate(n);
    }
    sorted
}

/// Locate `slug` in newest-first order. `None` when no post has that slug.
pub fn neighbors<'a>(posts: &'a [Post], slug: &str) -> Option<Neighbors<'a>> {
    let sorted = sort_newest_first(posts);
    let i = sorted.iter().position(|p| p.slug == slug)?;
    Some(neighbors_at(&sorted, i))
}

/// Neighbours of every post in an already sorted newest-first list, in order
pub fn all_neighbors<'a>(sorted: &[&'a Post]) -> Vec<Neighbors<'a>> {
    (0..sorted.len()).map(|i| neighbors_at(sorted, i)).collect()
}

fn neighbors_at<'a>(sorted: &[&'a Post], i: usize) -> Neighbors<'a> {
    Neighbors {
        current: sorted[i],
        previous: sorted.get(i + 1).copied(),
        next: i.checked_sub(1).map(|j| sorted[j]),
    }
}
