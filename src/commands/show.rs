//! Show a single post

use anyhow::Result;
use chrono::NaiveDate;

use crate::content::PostRepository;
use crate::error::ContentError;
use crate::helpers::format_date;
use crate::listing::neighbors;
use crate::Folio;

/// Print a post's metadata and its neighbours
pub fn run(folio: &Folio, slug: &str) -> Result<()> {
    let repo = folio.load_posts()?;
    for line in describe(&repo, slug, folio.today())? {
        println!("{}", line);
    }
    Ok(())
}

/// Text shown for `slug`; `NotFound` when no post has that slug
pub fn describe(
    repo: &PostRepository,
    slug: &str,
    today: NaiveDate,
) -> Result<Vec<String>, ContentError> {
    let post = repo.find_by_slug(slug)?;
    let mut lines = vec![
        post.title().to_string(),
        format!(
            "{} · {}",
            format_date(post.published_at(), true, today),
            post.metadata.time_to_read
        ),
        post.metadata.summary.clone(),
    ];

    if let Some(nav) = neighbors(repo.all(), slug) {
        if let Some(newer) = nav.next {
            lines.push(format!("Next: {} [{}]", newer.title(), newer.slug));
        }
        if let Some(older) = nav.previous {
            lines.push(format!("Previous: {} [{}]", older.title(), older.slug));
        }
    }

    Ok(lines)
}
