//! folio: static generator for a personal portfolio and blog
//!
//! Posts live as Markdown/MDX files with a front-matter block. They are
//! loaded into a [`content::PostRepository`], ordered and paginated by
//! [`listing`], and rendered through embedded Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod listing;
pub mod preferences;
pub mod resume;
pub mod templates;
pub mod view;

use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use content::{ContentLoader, PostRepository};
use preferences::{JsonFileStore, Preferences};

/// The main site handle
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding `.md` / `.mdx` posts
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        }
    }

    /// Read every post from disk. Each call reloads.
    pub fn load_posts(&self) -> Result<PostRepository> {
        let repo = PostRepository::load(&ContentLoader::new(self))?;
        tracing::info!("Loaded {} posts", repo.len());
        Ok(repo)
    }

    /// Today's date in the configured timezone
    pub fn today(&self) -> NaiveDate {
        helpers::today_in(&self.config.timezone)
    }

    /// Preferences persisted inside the site directory
    pub fn preferences(&self) -> Result<Preferences> {
        Preferences::persisted(JsonFileStore::in_site(&self.base_dir))
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
