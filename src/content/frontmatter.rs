//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use thiserror::Error;

/// Block delimiter for front-matter
const DELIMITER: &str = "---";

/// Why a front-matter block could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("document does not start with a `---` front-matter block")]
    MissingBlock,

    #[error("front-matter block is not closed with `---`")]
    Unterminated,

    #[error("line {line} is not a `key: value` pair: {text:?}")]
    MalformedLine { line: usize, text: String },
}

/// Key-value pairs from a post's front-matter, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start_matches('\u{feff}');
        let mut lines = content.split_inclusive('\n');

        let first = lines.next().ok_or(FrontMatterError::MissingBlock)?;
        if first.trim_end() != DELIMITER {
            return Err(FrontMatterError::MissingBlock);
        }
        let mut consumed = first.len();

        let mut fields = IndexMap::new();
        let mut closed = false;

        for (i, raw) in lines.enumerate() {
            consumed += raw.len();
            let line = raw.trim();

            if line == DELIMITER {
                closed = true;
                break;
            }
            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = split_pair(line).ok_or_else(|| FrontMatterError::MalformedLine {
                // +2: one for the opening delimiter, one for 1-based numbering
                line: i + 2,
                text: line.to_string(),
            })?;
            fields.insert(key.to_string(), unquote(value).to_string());
        }

        if !closed {
            return Err(FrontMatterError::Unterminated);
        }

        let body = content[consumed..].trim_start_matches(['\n', '\r']);
        Ok((Self { fields }, body))
    }

    /// Get a field value, treating empty values as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Iterate over all fields in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split `key: value` at the first colon. The key must be a simple identifier.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !is_valid_key {
        return None;
    }
    Some((key, line[colon_pos + 1..].trim()))
}

/// Remove one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a `publishedAt` value into its calendar date
pub fn parse_published_at(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    let formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset; keep the author's calendar date
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
