//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::preferences::Preferences;
use crate::Folio;

/// Load posts and render the whole site into the public directory
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let repo = folio.load_posts()?;
    // Preferences only pick the color scheme class; a bad file is not fatal here
    let mut prefs = folio.preferences().unwrap_or_else(|e| {
        tracing::warn!("Ignoring saved preferences: {:#}", e);
        Preferences::default()
    });

    let generator = Generator::new(folio)?;
    let summary = generator.generate(&repo, &mut prefs)?;

    tracing::info!(
        "Generated {} posts, {} blog pages and {} static files in {:.2}s",
        summary.posts,
        summary.blog_pages,
        summary.assets,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
