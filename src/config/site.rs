//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: Option<String>,
    pub language: String,
    pub timezone: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Writing
    pub words_per_minute: usize,
    /// Abort the whole load on the first broken post instead of skipping it
    pub strict: bool,
    pub highlight_theme: String,

    // Listing
    pub latest_posts: usize,
    pub per_page: usize,

    // Home page
    #[serde(default)]
    pub bio: Vec<String>,
    /// Social links in display order, name -> url
    #[serde(default)]
    pub social: IndexMap<String, String>,

    #[serde(default)]
    pub projects: ProjectsConfig,

    #[serde(default)]
    pub resume: ResumeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            email: None,
            language: "en".to_string(),
            timezone: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content/posts".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            words_per_minute: 200,
            strict: false,
            highlight_theme: "base16-ocean.dark".to_string(),

            latest_posts: 2,
            per_page: 10,

            bio: Vec::new(),
            social: IndexMap::new(),
            projects: ProjectsConfig::default(),
            resume: ResumeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        config.validate()?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Reject values that would make the listing pipeline meaningless
    pub fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 {
            anyhow::bail!("words_per_minute must be greater than 0");
        }
        if self.per_page == 0 {
            anyhow::bail!("per_page must be greater than 0");
        }
        Ok(())
    }
}

/// Project listings shown on the projects page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub personal: Vec<Project>,
    pub freelance: Vec<Project>,
}

/// A single project card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    /// Free-form period, e.g. "Jan. 16, 2024 - Apr. 12, 2024"
    pub date: Option<String>,
    /// Trusted HTML
    pub description: String,
    pub tags: Vec<String>,
    pub github: Option<String>,
    pub live_url: Option<String>,
}

/// Resume viewer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    /// PDF path relative to the static directory
    pub file: String,
    /// Page width in PDF points
    pub page_width: f64,
    /// Width of the viewer container in CSS pixels
    pub container_width: f64,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            file: "Resume.pdf".to_string(),
            page_width: 612.0,
            container_width: 768.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content/posts");
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.latest_posts, 2);
        assert!(!config.strict);
        assert_eq!(config.resume.page_width, 612.0);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Bhavanvir
author: Bhavanvir
strict: true
per_page: 5
social:
  GitHub: https://github.com/example
  LinkedIn: https://www.linkedin.com/in/example/
projects:
  personal:
    - title: Workout Planner
      tags: [Python, OR-Tools]
      github: https://github.com/example/workout-planner
  freelance:
    - title: Skylark Maintenance
      live_url: https://example.ca/
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Bhavanvir");
        assert!(config.strict);
        assert_eq!(config.per_page, 5);
        assert_eq!(
            config.social.keys().collect::<Vec<_>>(),
            vec!["GitHub", "LinkedIn"]
        );
        assert_eq!(config.projects.personal[0].tags, vec!["Python", "OR-Tools"]);
        assert!(config.projects.freelance[0].github.is_none());
        assert_eq!(config.words_per_minute, 200);
    }

    #[test]
    fn test_validate_rejects_zero_reading_speed() {
        let config = SiteConfig {
            words_per_minute: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
