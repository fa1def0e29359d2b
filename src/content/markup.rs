//! MDX-style post bodies: a small node tree plus an HTML renderer
//!
//! Bodies are markdown with embedded component tags on their own line,
//! e.g. `<Callout emoji="💡" text="Remember this" />`. Components are never
//! evaluated; they are parsed into [`Node::Component`] and rendered from a
//! fixed set of built-ins.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::{encode_url, html_escape};

lazy_static! {
    static ref COMPONENT_RE: Regex = Regex::new(
        r#"^<([A-Z][A-Za-z0-9]*)((?:\s+[A-Za-z_][A-Za-z0-9_-]*\s*=\s*(?:"[^"]*"|'[^']*'))*)\s*/>$"#
    )
    .unwrap();
    static ref PROP_RE: Regex =
        Regex::new(r#"([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
}

/// One block of a post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading { level: u8, id: String, html: String },
    Paragraph { html: String },
    CodeBlock { lang: Option<String>, code: String },
    Component { name: String, props: IndexMap<String, String> },
    /// Lists, quotes, tables, rules and raw HTML, already rendered
    Markup { html: String },
}

/// Parse a post body into nodes
pub fn parse(body: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut ids = HeadingIds::default();
    let mut chunk = String::new();
    let mut fence: Option<&str> = None;

    for line in body.lines() {
        let trimmed = line.trim();

        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
        } else if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            fence = Some(&trimmed[..3]);
        } else if let Some(node) = parse_component(trimmed) {
            parse_markdown(&chunk, &mut ids, &mut nodes);
            chunk.clear();
            nodes.push(node);
            continue;
        }

        chunk.push_str(line);
        chunk.push('\n');
    }
    parse_markdown(&chunk, &mut ids, &mut nodes);

    nodes
}

fn parse_component(line: &str) -> Option<Node> {
    let caps = COMPONENT_RE.captures(line)?;
    let name = caps[1].to_string();
    let props = PROP_RE
        .captures_iter(caps.get(2).map_or("", |m| m.as_str()))
        .map(|p| {
            let value = p.get(2).or_else(|| p.get(3)).map_or("", |m| m.as_str());
            (p[1].to_string(), value.to_string())
        })
        .collect();
    Some(Node::Component { name, props })
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_GFM
}

fn parse_markdown(chunk: &str, ids: &mut HeadingIds, nodes: &mut Vec<Node>) {
    if chunk.trim().is_empty() {
        return;
    }

    let mut parser = Parser::new_ext(chunk, markdown_options());

    while let Some(event) = parser.next() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let (inner, _) = take_block(&mut parser);
                let id = ids.unique(&slug::slugify(plain_text(&inner)));
                nodes.push(Node::Heading {
                    level: level as u8,
                    id,
                    html: to_html(inner),
                });
            }
            Event::Start(Tag::Paragraph) => {
                let (inner, _) = take_block(&mut parser);
                nodes.push(Node::Paragraph {
                    html: to_html(inner),
                });
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let (inner, _) = take_block(&mut parser);
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                nodes.push(Node::CodeBlock {
                    lang,
                    code: plain_text(&inner),
                });
            }
            Event::Start(tag) => {
                let (inner, end) = take_block(&mut parser);
                let mut events = vec![Event::Start(tag)];
                events.extend(inner);
                events.extend(end);
                nodes.push(Node::Markup {
                    html: to_html(events),
                });
            }
            other => nodes.push(Node::Markup {
                html: to_html(vec![other]),
            }),
        }
    }
}

/// Collect events up to the end tag matching an already-consumed start tag.
/// Returns the inner events and the end event.
fn take_block<'a, I>(parser: &mut I) -> (Vec<Event<'a>>, Option<Event<'a>>)
where
    I: Iterator<Item = Event<'a>>,
{
    let mut depth = 0usize;
    let mut inner = Vec::new();

    for event in parser.by_ref() {
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return (inner, Some(event)),
            Event::End(_) => depth -= 1,
            _ => {}
        }
        inner.push(event);
    }

    (inner, None)
}

fn plain_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

fn to_html(events: Vec<Event>) -> String {
    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// Hands out unique heading anchors
#[derive(Default)]
struct HeadingIds {
    /// Every id handed out so far
    seen: HashSet<String>,
    /// Next suffix to try per base slug
    counts: HashMap<String, usize>,
}

impl HeadingIds {
    fn unique(&mut self, base: &str) -> String {
        let base = if base.is_empty() { "section" } else { base };
        let count = self.counts.entry(base.to_string()).or_insert(0);
        let mut id = if *count == 0 {
            base.to_string()
        } else {
            format!("{}-{}", base, count)
        };
        // A literal heading may already own a suffixed id
        while self.seen.contains(&id) {
            *count += 1;
            id = format!("{}-{}", base, count);
        }
        *count += 1;
        self.seen.insert(id.clone());
        id
    }
}

/// Renders body nodes to HTML with syntax highlighting
pub struct MarkupRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl MarkupRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create with a syntect theme name
    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Parse and render a body in one go
    pub fn render_body(&self, body: &str) -> String {
        self.render(&parse(body))
    }

    /// Render nodes to HTML
    pub fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();

        for node in nodes {
            match node {
                Node::Heading { level, id, html } => {
                    out.push_str(&format!(
                        r##"<h{level} id="{id}"><a href="#{id}" class="anchor"></a>{html}</h{level}>"##
                    ));
                }
                Node::Paragraph { html } => {
                    out.push_str("<p>");
                    out.push_str(html);
                    out.push_str("</p>");
                }
                Node::CodeBlock { lang, code } => {
                    out.push_str(&self.highlight_code(code, lang.as_deref()));
                }
                Node::Component { name, props } => {
                    if let Some(html) = render_component(name, props) {
                        out.push_str(&html);
                    }
                }
                Node::Markup { html } => out.push_str(html.trim_end()),
            }
            out.push('\n');
        }

        out
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        match theme.map(|t| highlighted_html_for_string(code, &self.syntax_set, syntax, t)) {
            Some(Ok(highlighted)) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            _ => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                html_escape(lang),
                html_escape(code)
            ),
        }
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_component(name: &str, props: &IndexMap<String, String>) -> Option<String> {
    let prop = |key: &str| html_escape(props.get(key).map_or("", String::as_str));

    match name {
        "Callout" => Some(format!(
            r#"<div class="callout"><span class="callout-emoji">{}</span><div class="callout-text">{}</div></div>"#,
            prop("emoji"),
            prop("text")
        )),
        "Image" | "RoundedImage" => Some(format!(
            r#"<img class="rounded-image" src="{}" alt="{}">"#,
            prop("src"),
            prop("alt")
        )),
        "YouTube" => {
            let id = props.get("id")?;
            Some(format!(
                r#"<iframe class="youtube" src="https://www.youtube.com/embed/{}" allowfullscreen></iframe>"#,
                encode_url(id)
            ))
        }
        _ => {
            tracing::warn!("Unknown component <{} />, leaving it out", name);
            None
        }
    }
}
