//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Create a post stub dated today and return its path
pub fn create_post(
    folio: &Folio,
    title: &str,
    slug: Option<&str>,
    mdx: bool,
) -> Result<PathBuf> {
    if title.contains(['\n', '\r']) {
        anyhow::bail!("Title must be a single line: {:?}", title);
    }

    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let ext = if mdx { "mdx" } else { "md" };
    fs::create_dir_all(&folio.content_dir)?;

    // Either extension claims the slug
    for existing in ["md", "mdx"] {
        let path = folio.content_dir.join(format!("{}.{}", slug, existing));
        if path.exists() {
            anyhow::bail!("File already exists: {:?}", path);
        }
    }

    let content = format!(
        "---\ntitle: {}\npublishedAt: {}\nsummary: Add a one-line summary.\n---\n",
        quote(title),
        folio.today().format("%Y-%m-%d")
    );

    let file_path = folio.content_dir.join(format!("{}.{}", slug, ext));
    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a front-matter value when it would not survive unquoted.
/// Only the outermost pair of quotes is stripped on load, so the inner
/// text is written as is.
fn quote(value: &str) -> String {
    let plain = !value.contains(':')
        && !value.starts_with(['"', '\''])
        && value.trim() == value;
    if plain {
        value.to_string()
    } else if value.contains('"') {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_post() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(&folio, "Rust: Ownership Explained", None, false).unwrap();
        assert!(path.ends_with("rust-ownership-explained.md"));

        let post = crate::content::ContentLoader::with_dir(&folio.content_dir)
            .load_post(&path)
            .unwrap();
        assert_eq!(post.title(), "Rust: Ownership Explained");
        assert_eq!(post.published_at(), folio.today());
    }

    #[test]
    fn test_create_post_keeps_title_verbatim() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let loader = crate::content::ContentLoader::with_dir(&folio.content_dir);

        for (i, title) in [
            r#"Say "hi": now"#,
            r#""Quoted" start"#,
            r#"It's "fine""#,
            "'single' and more",
            " padded ",
        ]
        .into_iter()
        .enumerate()
        {
            let slug = format!("post-{}", i);
            let path = create_post(&folio, title, Some(&slug), false).unwrap();
            assert_eq!(loader.load_post(&path).unwrap().title(), title);
        }
    }

    #[test]
    fn test_create_post_rejects_multiline_title() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(create_post(&folio, "Line one\nsummary: injected", None, false).is_err());
        assert!(!folio.content_dir.exists());
    }

    #[test]
    fn test_create_post_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        create_post(&folio, "Hello", Some("hello"), true).unwrap();
        assert!(create_post(&folio, "Hello again", Some("hello"), false).is_err());
        assert!(create_post(&folio, "!!!", None, false).is_err());
    }
}
