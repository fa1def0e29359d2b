//! Presentation shapes handed to templates and the CLI

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{MarkupRenderer, Post};
use crate::helpers::{format_date, iso_date, post_url};
use crate::listing::Neighbors;

/// A post as shown in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub url: String,
    pub title: String,
    /// ISO date for `<time datetime>`
    pub datetime: String,
    /// Display date, e.g. "June 15, 2024"
    pub date: String,
    pub time_to_read: String,
    pub summary: String,
}

/// Link to a neighbouring post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavPost {
    pub title: String,
    pub url: String,
}

/// Everything needed to render a single post page
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub card: PostCard,
    pub image: Option<String>,
    pub content_html: String,
    /// Next-older post
    pub previous: Option<NavPost>,
    /// Next-newer post
    pub next: Option<NavPost>,
}

impl PostCard {
    pub fn from_post(config: &SiteConfig, post: &Post, today: NaiveDate) -> Self {
        Self {
            slug: post.slug.clone(),
            url: post_url(config, &post.slug),
            title: post.metadata.title.clone(),
            datetime: iso_date(post.metadata.published_at),
            date: format_date(post.metadata.published_at, false, today),
            time_to_read: post.metadata.time_to_read.clone(),
            summary: post.metadata.summary.clone(),
        }
    }
}

impl NavPost {
    pub fn from_post(config: &SiteConfig, post: &Post) -> Self {
        Self {
            title: post.metadata.title.clone(),
            url: post_url(config, &post.slug),
        }
    }
}

impl PostPage {
    pub fn build(
        config: &SiteConfig,
        neighbors: &Neighbors<'_>,
        renderer: &MarkupRenderer,
        today: NaiveDate,
    ) -> Self {
        let post = neighbors.current;
        Self {
            card: PostCard::from_post(config, post, today),
            image: post.metadata.image.clone(),
            content_html: renderer.render_body(&post.content),
            previous: neighbors.previous.map(|p| NavPost::from_post(config, p)),
            next: neighbors.next.map(|p| NavPost::from_post(config, p)),
        }
    }
}

/// Map posts to listing cards, keeping their order
pub fn cards(config: &SiteConfig, posts: &[&Post], today: NaiveDate) -> Vec<PostCard> {
    posts
        .iter()
        .map(|p| PostCard::from_post(config, p, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostMetadata;
    use crate::listing::neighbors;

    fn post(slug: &str, date: &str, body: &str) -> Post {
        Post::new(
            slug,
            PostMetadata {
                title: format!("Title {slug}"),
                published_at: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                summary: format!("Summary {slug}"),
                image: Some("/cover.png".to_string()),
                time_to_read: "2 min read".to_string(),
            },
            body,
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_card_from_post() {
        let config = SiteConfig::default();
        let card = PostCard::from_post(&config, &post("hello", "2024-06-15", ""), today());
        assert_eq!(
            card,
            PostCard {
                slug: "hello".to_string(),
                url: "/blog/hello/".to_string(),
                title: "Title hello".to_string(),
                datetime: "2024-06-15".to_string(),
                date: "June 15, 2024".to_string(),
                time_to_read: "2 min read".to_string(),
                summary: "Summary hello".to_string(),
            }
        );
    }

    #[test]
    fn test_post_page_links_neighbors() {
        let config = SiteConfig::default();
        let posts = vec![
            post("old", "2024-01-01", ""),
            post("mid", "2024-06-15", "# Heading\n\nBody"),
            post("new", "2025-03-01", ""),
        ];
        let n = neighbors(&posts, "mid").unwrap();
        let page = PostPage::build(&config, &n, &MarkupRenderer::new(), today());

        assert_eq!(page.previous.unwrap().url, "/blog/old/");
        assert_eq!(page.next.unwrap().title, "Title new");
        assert!(page.content_html.contains(r#"<h1 id="heading">"#));
        assert_eq!(page.image.as_deref(), Some("/cover.png"));
    }
}
