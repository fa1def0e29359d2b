//! Generator module - generates static HTML files using built-in Tera templates

use anyhow::{Context as _, Result};
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::Path;

use tera::Context;
use walkdir::WalkDir;

use crate::content::{MarkupRenderer, Post, PostRepository};
use crate::helpers::{
    escape_xml, full_url_for, iso_date, post_path, rss_date, strip_invalid_xml_chars, url_for,
};
use crate::listing::{all_neighbors, list_latest, Paginator};
use crate::preferences::Preferences;
use crate::resume::{self, ResumeStatus};
use crate::templates::{MenuItem, PaginationData, ResumeData, SiteData, TemplateRenderer};
use crate::view::{cards, PostPage};
use crate::Folio;

/// Navigation sections, in header order
const SECTIONS: [(&str, &str); 4] = [
    ("About", ""),
    ("Blog", "blog/"),
    ("Projects", "projects/"),
    ("Resume", "resume/"),
];

/// Counts of what one run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub posts: usize,
    pub blog_pages: usize,
    pub assets: usize,
}

/// Static site generator using Tera templates
pub struct Generator<'a> {
    folio: &'a Folio,
    renderer: TemplateRenderer,
    markup: MarkupRenderer,
    today: NaiveDate,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(folio: &'a Folio) -> Result<Self> {
        Ok(Self {
            folio,
            renderer: TemplateRenderer::new()?,
            markup: MarkupRenderer::with_theme(&folio.config.highlight_theme),
            today: folio.today(),
        })
    }

    /// Fix "today" instead of reading the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Generate the entire site
    pub fn generate(
        &self,
        repo: &PostRepository,
        prefs: &mut Preferences,
    ) -> Result<GenerateSummary> {
        let public_dir = &self.folio.public_dir;
        fs::create_dir_all(public_dir)
            .with_context(|| format!("Failed to create {:?}", public_dir))?;

        let assets = self.copy_static_assets()?;

        let posts = repo.all();
        let sorted = list_latest(posts, None);

        prefs.set_current_section("About");
        self.generate_home(posts, prefs)?;

        prefs.set_current_section("Blog");
        let blog_pages = self.generate_blog_pages(&sorted, prefs)?;
        self.generate_post_pages(&sorted, prefs)?;

        prefs.set_current_section("Projects");
        self.generate_projects_page(prefs)?;

        prefs.set_current_section("Resume");
        self.generate_resume_page(prefs)?;

        prefs.set_current_section("");
        self.write("404.html", &self.render("404.html", self.base_context(prefs))?)?;

        self.generate_rss(&sorted)?;
        self.generate_sitemap(&sorted)?;

        Ok(GenerateSummary {
            posts: posts.len(),
            blog_pages,
            assets,
        })
    }

    /// Build site data for templates
    fn site_data(&self, prefs: &Preferences) -> SiteData {
        let config = &self.folio.config;
        SiteData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            email: config.email.clone(),
            language: config.language.clone(),
            root: url_for(config, ""),
            rss_url: url_for(config, "rss.xml"),
            year: self.today.year().to_string(),
            color_scheme: prefs.color_scheme().to_string(),
            nav: SECTIONS
                .iter()
                .map(|(name, path)| MenuItem {
                    name: name.to_string(),
                    path: url_for(config, path),
                })
                .collect(),
            social: config.social.clone(),
        }
    }

    /// Create a base context with common variables
    fn base_context(&self, prefs: &Preferences) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site_data(prefs));
        context.insert("current_section", prefs.current_section.get());
        context
    }

    fn generate_home(&self, posts: &[Post], prefs: &Preferences) -> Result<()> {
        let config = &self.folio.config;
        let latest = list_latest(posts, Some(config.latest_posts));

        let mut context = self.base_context(prefs);
        context.insert("bio", &config.bio);
        context.insert("latest", &cards(config, &latest, self.today));

        self.write("index.html", &self.render("home.html", context)?)
    }

    /// Generate blog index pages with pagination
    fn generate_blog_pages(&self, sorted: &[&Post], prefs: &Preferences) -> Result<usize> {
        let config = &self.folio.config;
        let paginator = Paginator::new(sorted, config.per_page);
        // An empty blog still gets its index page
        let total = paginator.page_count().max(1);

        let page_link = |n: usize| {
            if n == 1 {
                url_for(config, "blog/")
            } else {
                url_for(config, &format!("blog/page/{}/", n))
            }
        };

        for page_num in 1..=total {
            let page_posts = paginator.page(page_num).unwrap_or(&[]);

            let pagination = PaginationData {
                total,
                current: page_num,
                prev_link: if page_num > 1 {
                    page_link(page_num - 1)
                } else {
                    String::new()
                },
                next_link: if page_num < total {
                    page_link(page_num + 1)
                } else {
                    String::new()
                },
            };

            let mut context = self.base_context(prefs);
            context.insert("posts", &cards(config, page_posts, self.today));
            context.insert("pagination", &pagination);

            let output = if page_num == 1 {
                "blog/index.html".to_string()
            } else {
                format!("blog/page/{}/index.html", page_num)
            };
            self.write(&output, &self.render("blog.html", context)?)?;
        }

        Ok(total)
    }

    /// Generate individual post pages from the newest-first list
    fn generate_post_pages(&self, sorted: &[&Post], prefs: &Preferences) -> Result<()> {
        let config = &self.folio.config;

        for nav in all_neighbors(sorted) {
            let page = PostPage::build(config, &nav, &self.markup, self.today);

            let mut context = self.base_context(prefs);
            context.insert("page", &page);

            let output = format!("blog/{}/index.html", nav.current.slug);
            self.write(&output, &self.render("post.html", context)?)?;
        }

        Ok(())
    }

    fn generate_projects_page(&self, prefs: &Preferences) -> Result<()> {
        let mut context = self.base_context(prefs);
        context.insert("projects", &self.folio.config.projects);
        self.write(
            "projects/index.html",
            &self.render("projects.html", context)?,
        )
    }

    fn generate_resume_page(&self, prefs: &Preferences) -> Result<()> {
        let config = &self.folio.config;
        let path = self.folio.static_dir.join(&config.resume.file);
        let url = url_for(config, &config.resume.file);

        let data = match resume::inspect(
            &path,
            config.resume.container_width,
            config.resume.page_width,
        ) {
            ResumeStatus::Ready { cursor, scale } => ResumeData {
                url,
                ready: true,
                page: cursor.current(),
                pages: cursor.total(),
                scale,
                label: cursor.label(),
                error: String::new(),
            },
            ResumeStatus::Failed { message } => ResumeData {
                url,
                ready: false,
                page: 0,
                pages: 0,
                scale: 1.0,
                label: String::new(),
                error: message,
            },
        };

        let mut context = self.base_context(prefs);
        context.insert("resume", &data);
        self.write("resume/index.html", &self.render("resume.html", context)?)
    }

    /// Generate RSS 2.0 feed
    fn generate_rss(&self, sorted: &[&Post]) -> Result<()> {
        let config = &self.folio.config;

        let mut feed = String::new();
        feed.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        feed.push('\n');
        feed.push_str(r#"<rss version="2.0">"#);
        feed.push_str("\n<channel>\n");
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link>{}</link>\n",
            escape_xml(&full_url_for(config, ""))
        ));
        feed.push_str(&format!(
            "  <description>{}</description>\n",
            escape_xml(&config.description)
        ));

        for post in sorted {
            let link = escape_xml(&full_url_for(config, &post_path(&post.slug)));
            feed.push_str("  <item>\n");
            feed.push_str(&format!(
                "    <title>{}</title>\n",
                escape_xml(&strip_invalid_xml_chars(post.title()))
            ));
            feed.push_str(&format!("    <link>{}</link>\n", link));
            feed.push_str(&format!("    <guid>{}</guid>\n", link));
            feed.push_str(&format!(
                "    <description>{}</description>\n",
                escape_xml(&strip_invalid_xml_chars(&post.metadata.summary))
            ));
            feed.push_str(&format!(
                "    <pubDate>{}</pubDate>\n",
                rss_date(post.published_at())
            ));
            feed.push_str("  </item>\n");
        }

        feed.push_str("</channel>\n</rss>\n");

        self.write("rss.xml", &feed)?;
        tracing::info!("Generated rss.xml");
        Ok(())
    }

    /// Generate sitemap.xml
    fn generate_sitemap(&self, sorted: &[&Post]) -> Result<()> {
        let config = &self.folio.config;
        let today = iso_date(self.today);

        let mut urls: Vec<(String, String)> = SECTIONS
            .iter()
            .map(|(_, path)| (full_url_for(config, path), today.clone()))
            .collect();
        urls.extend(sorted.iter().map(|p| {
            (
                full_url_for(config, &post_path(&p.slug)),
                iso_date(p.published_at()),
            )
        }));

        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');
        for (loc, lastmod) in urls {
            xml.push_str(&format!(
                "  <url><loc>{}</loc><lastmod>{}</lastmod></url>\n",
                escape_xml(&loc),
                lastmod
            ));
        }
        xml.push_str("</urlset>\n");

        self.write("sitemap.xml", &xml)?;
        tracing::info!("Generated sitemap.xml");
        Ok(())
    }

    /// Copy static assets (images, the resume PDF, ...) to the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest).with_context(|| format!("Failed to copy {:?}", path))?;
            copied += 1;
        }

        Ok(copied)
    }

    fn render(&self, template: &str, context: Context) -> Result<String> {
        self.renderer.render(template, &context)
    }

    /// Write a file below the public directory
    fn write(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.folio.public_dir.join(Path::new(relative));
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, content)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}
