//! Configuration module

mod site;

pub use site::{Project, ProjectsConfig, ResumeConfig, SiteConfig};
