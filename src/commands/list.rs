//! List site content

use anyhow::Result;

use crate::content::PostRepository;
use crate::helpers::format_date;
use crate::listing::list_latest;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, latest: Option<usize>) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let repo = folio.load_posts()?;
            for line in post_lines(&repo, latest, folio.today()) {
                println!("{}", line);
            }
        }
        "project" | "projects" => {
            let projects = &folio.config.projects;
            println!("Personal projects ({}):", projects.personal.len());
            for project in &projects.personal {
                println!("  {} [{}]", project.title, project.tags.join(", "));
            }
            println!("Freelance projects ({}):", projects.freelance.len());
            for project in &projects.freelance {
                println!("  {} [{}]", project.title, project.tags.join(", "));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, project", content_type);
        }
    }

    Ok(())
}

/// One line per post, newest first
pub fn post_lines(
    repo: &PostRepository,
    latest: Option<usize>,
    today: chrono::NaiveDate,
) -> Vec<String> {
    let posts = list_latest(repo.all(), latest);
    let mut lines = vec![format!("Posts ({}):", posts.len())];
    lines.extend(posts.iter().map(|post| {
        format!(
            "  {} - {} [{}] ({})",
            format_date(post.published_at(), false, today),
            post.title(),
            post.slug,
            post.metadata.time_to_read
        )
    }));
    lines
}
