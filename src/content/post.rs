//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Slug (file name without extension)
    pub slug: String,

    /// Parsed front-matter plus derived fields
    pub metadata: PostMetadata,

    /// Raw MDX body
    pub content: String,

    /// Source file path
    pub source: PathBuf,
}

/// Front-matter of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub title: String,

    /// Publication date
    pub published_at: NaiveDate,

    pub summary: String,

    /// Cover image URL or path
    pub image: Option<String>,

    /// Reading estimate, e.g. "4 min read"
    pub time_to_read: String,
}

impl Post {
    pub fn new(slug: impl Into<String>, metadata: PostMetadata, content: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            source: PathBuf::from(&slug),
            slug,
            metadata,
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn published_at(&self) -> NaiveDate {
        self.metadata.published_at
    }

    /// Newest first; equal dates fall back to slug order so the sort is total
    pub fn cmp_newest_first(&self, other: &Post) -> Ordering {
        other
            .metadata
            .published_at
            .cmp(&self.metadata.published_at)
            .then_with(|| self.slug.cmp(&other.slug))
    }
}

/// Estimate reading time from whitespace-separated word count
pub fn time_to_read(body: &str, words_per_minute: usize) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(words_per_minute.max(1));
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str) -> Post {
        Post::new(
            slug,
            PostMetadata {
                title: slug.to_string(),
                published_at: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                summary: String::new(),
                image: None,
                time_to_read: "1 min read".to_string(),
            },
            "",
        )
    }

    #[test]
    fn test_newest_first() {
        let old = post("old", "2024-01-01");
        let new = post("new", "2025-03-01");
        assert_eq!(new.cmp_newest_first(&old), Ordering::Less);
        assert_eq!(old.cmp_newest_first(&new), Ordering::Greater);
    }

    #[test]
    fn test_tie_breaks_on_slug() {
        let a = post("alpha", "2024-06-15");
        let b = post("beta", "2024-06-15");
        assert_eq!(a.cmp_newest_first(&b), Ordering::Less);
        assert_eq!(b.cmp_newest_first(&a), Ordering::Greater);
        assert_eq!(a.cmp_newest_first(&a), Ordering::Equal);
    }

    #[test]
    fn test_time_to_read_rounds_up() {
        let body = "word ".repeat(201);
        assert_eq!(time_to_read(&body, 200), "2 min read");
        assert_eq!(time_to_read(&"word ".repeat(200), 200), "1 min read");
        assert_eq!(time_to_read("one two three", 200), "1 min read");
        assert_eq!(time_to_read("", 200), "0 min read");
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let json = serde_json::to_value(&post("a", "2024-01-01").metadata).unwrap();
        assert_eq!(json["publishedAt"], "2024-01-01");
        assert_eq!(json["timeToRead"], "1 min read");
    }
}
