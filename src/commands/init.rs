//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG: &str = r#"# Site
title: My Portfolio
description: ''
author: John Doe
email:
language: en
timezone: ''

# URL
url: http://example.com
root: /

# Directory
content_dir: content/posts
public_dir: public
static_dir: static

# Writing
words_per_minute: 200
strict: false
highlight_theme: base16-ocean.dark

# Listing
latest_posts: 2
per_page: 10

# Home page
bio:
  - Hi, I'm John. I build things for the web.
social:
  GitHub: https://github.com/

# Projects
projects:
  personal: []
  freelance: []

# Resume viewer
resume:
  file: Resume.pdf
  page_width: 612
  container_width: 768
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("content/posts"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    fs::write(&config_path, CONFIG)?;

    let today = chrono::Local::now().date_naive();
    let sample_post = format!(
        r#"---
title: Hello World
publishedAt: {}
summary: The first post on this site.
---

Welcome! This post lives in `content/posts/hello-world.md`.

## Writing posts

Create a new one with:

```bash
$ folio new "My New Post"
```

<Callout emoji="💡" text="Components like this one work in .mdx posts too." />
"#,
        today.format("%Y-%m-%d")
    );

    fs::write(target_dir.join("content/posts/hello-world.md"), sample_post)?;

    Ok(())
}
