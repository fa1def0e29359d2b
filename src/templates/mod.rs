//! Built-in site templates using Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Tera's default escaper also rewrites `/`, which mangles every URL
        tera.set_escape_fn(html_escape);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("macros.html", include_str!("site/macros.html")),
            ("home.html", include_str!("site/home.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("projects.html", include_str!("site/projects.html")),
            ("resume.html", include_str!("site/resume.html")),
            ("404.html", include_str!("site/404.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: Option<String>,
    pub language: String,
    pub root: String,
    pub rss_url: String,
    pub year: String,
    pub color_scheme: String,
    pub nav: Vec<MenuItem>,
    pub social: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    pub total: usize,
    pub current: usize,
    pub prev_link: String,
    pub next_link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeData {
    pub url: String,
    pub ready: bool,
    pub page: usize,
    pub pages: usize,
    pub scale: f64,
    pub label: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            title: "Folio".to_string(),
            description: String::new(),
            author: "Ada & Co".to_string(),
            email: None,
            language: "en".to_string(),
            root: "/".to_string(),
            rss_url: "/rss.xml".to_string(),
            year: "2025".to_string(),
            color_scheme: "dark".to_string(),
            nav: vec![MenuItem {
                name: "Blog".to_string(),
                path: "/blog/".to_string(),
            }],
            social: IndexMap::new(),
        }
    }

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_render_not_found_page() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("current_section", "Blog");

        let html = renderer.render("404.html", &context).unwrap();
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains("404 - Page Not Found"));
        assert!(html.contains(r#"<a href="/blog/" aria-current="page">Blog</a>"#));
        assert!(html.contains("Ada &amp; Co"));
    }
}
