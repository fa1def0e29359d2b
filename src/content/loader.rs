//! Content loader - loads posts from the content directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::{parse_published_at, FrontMatter};
use super::post::{time_to_read, Post, PostMetadata};
use crate::error::ContentError;
use crate::Folio;

/// What to do when a single post fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log a warning and leave the post out
    #[default]
    Skip,
    /// Fail the whole load
    Strict,
}

/// Loads posts from a directory of `.md` / `.mdx` files
#[derive(Debug, Clone)]
pub struct ContentLoader {
    posts_dir: PathBuf,
    words_per_minute: usize,
    policy: LoadPolicy,
}

impl ContentLoader {
    /// Create a loader for a site's configured content directory
    pub fn new(folio: &Folio) -> Self {
        let policy = if folio.config.strict {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Skip
        };
        Self::with_dir(&folio.content_dir)
            .words_per_minute(folio.config.words_per_minute)
            .policy(policy)
    }

    /// Create a loader for an arbitrary directory with default settings
    pub fn with_dir<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            words_per_minute: 200,
            policy: LoadPolicy::Skip,
        }
    }

    pub fn words_per_minute(mut self, words_per_minute: usize) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    pub fn policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load all posts in file-name order. The result is not sorted by date.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        if !self.posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(&self.posts_dir).to_path_buf();
                    self.handle_failure(ContentError::Io {
                        path,
                        source: e.into(),
                    })?;
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }

            let post = match self.load_post(path) {
                Ok(post) => post,
                Err(e) => {
                    self.handle_failure(e)?;
                    continue;
                }
            };

            if !seen.insert(post.slug.clone()) {
                self.handle_failure(ContentError::DuplicateSlug {
                    slug: post.slug,
                    path: path.to_path_buf(),
                })?;
                continue;
            }

            posts.push(post);
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::MetadataParse {
                path: path.to_path_buf(),
                reason: "file name is not valid UTF-8".to_string(),
            })?;

        self.parse_post(slug, path, &content)
    }

    /// Build a post from raw document text
    pub fn parse_post(&self, slug: &str, path: &Path, content: &str) -> Result<Post, ContentError> {
        let (fm, body) = FrontMatter::parse(content).map_err(|e| ContentError::MetadataParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let require = |field: &'static str| {
            fm.get(field).ok_or_else(|| ContentError::MissingField {
                path: path.to_path_buf(),
                field,
            })
        };

        let title = require("title")?;
        let published_raw = require("publishedAt")?;
        let summary = require("summary")?;

        let published_at =
            parse_published_at(published_raw).ok_or_else(|| ContentError::DateParse {
                path: path.to_path_buf(),
                value: published_raw.to_string(),
            })?;

        let metadata = PostMetadata {
            title: title.to_string(),
            published_at,
            summary: summary.to_string(),
            image: fm.get("image").map(str::to_string),
            time_to_read: time_to_read(body, self.words_per_minute),
        };

        Ok(Post {
            slug: slug.to_string(),
            metadata,
            content: body.to_string(),
            source: path.to_path_buf(),
        })
    }

    fn handle_failure(&self, err: ContentError) -> Result<(), ContentError> {
        match self.policy {
            LoadPolicy::Strict => Err(err),
            LoadPolicy::Skip => {
                tracing::warn!("Skipping post: {}", err);
                Ok(())
            }
        }
    }
}

/// Check if a file is a post document
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn doc(title: &str, date: &str) -> String {
        format!("---\ntitle: {title}\npublishedAt: {date}\nsummary: About {title}\n---\n\nSome body text here.\n")
    }

    #[test]
    fn test_load_posts_in_file_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b-post.mdx", &doc("B", "2024-01-01"));
        write(dir.path(), "a-post.md", &doc("A", "2025-03-01"));
        write(dir.path(), "notes.txt", "not a post");

        let posts = ContentLoader::with_dir(dir.path()).load_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a-post", "b-post"]);
        assert_eq!(posts[0].metadata.title, "A");
        assert_eq!(
            posts[1].metadata.published_at,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(posts[0].metadata.time_to_read, "1 min read");
        assert_eq!(posts[0].content, "Some body text here.\n");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let posts = ContentLoader::with_dir(dir.path().join("nope"))
            .load_posts()
            .unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_skip_policy_drops_broken_posts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "good.md", &doc("Good", "2024-01-01"));
        write(dir.path(), "no-block.md", "# Just a heading\n");
        write(
            dir.path(),
            "no-summary.md",
            "---\ntitle: T\npublishedAt: 2024-01-01\n---\n",
        );
        write(dir.path(), "bad-date.md", &doc("Bad", "2024-13-45"));

        let posts = ContentLoader::with_dir(dir.path()).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn test_strict_policy_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "good.md", &doc("Good", "2024-01-01"));
        write(dir.path(), "bad-date.md", &doc("Bad", "not-a-date"));

        let err = ContentLoader::with_dir(dir.path())
            .policy(LoadPolicy::Strict)
            .load_posts()
            .unwrap_err();
        match err {
            ContentError::DateParse { value, .. } => assert_eq!(value, "not-a-date"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_slug() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "same.md", &doc("Markdown", "2024-01-01"));
        write(dir.path(), "same.mdx", &doc("Mdx", "2024-01-02"));

        let posts = ContentLoader::with_dir(dir.path()).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].metadata.title, "Markdown");

        let err = ContentLoader::with_dir(dir.path())
            .policy(LoadPolicy::Strict)
            .load_posts()
            .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { ref slug, .. } if slug == "same"));
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let loader = ContentLoader::with_dir(".");
        let err = loader
            .parse_post(
                "x",
                Path::new("x.md"),
                "---\ntitle: T\nsummary: S\n---\nbody",
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingField {
                field: "publishedAt",
                ..
            }
        ));
    }

    #[test]
    fn test_optional_image_and_reading_speed() {
        let loader = ContentLoader::with_dir(".").words_per_minute(2);
        let post = loader
            .parse_post(
                "x",
                Path::new("x.md"),
                "---\ntitle: T\npublishedAt: 2024-01-01\nsummary: S\nimage: /cover.png\n---\none two three four five",
            )
            .unwrap();
        assert_eq!(post.metadata.image.as_deref(), Some("/cover.png"));
        assert_eq!(post.metadata.time_to_read, "3 min read");
    }
}
