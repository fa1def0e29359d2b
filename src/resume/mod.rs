//! Resume viewer model: page discovery, fit-to-width scale and paging
//!
//! The PDF itself is drawn client-side; this only works out what the
//! viewer page needs to know up front.

use lopdf::Document;
use std::fs;
use std::path::Path;

/// Width of a US Letter page in PDF points
pub const LETTER_WIDTH: f64 = 612.0;

/// Number of pages in a PDF, following the page tree.
/// Compressed object streams and cross-reference streams are supported.
pub fn page_count(pdf: &[u8]) -> Result<usize, lopdf::Error> {
    Ok(Document::load_mem(pdf)?.get_pages().len())
}

/// Scale that makes a page of `page_width` fill `container_width`
pub fn fit_scale(container_width: f64, page_width: f64) -> f64 {
    if container_width <= 0.0 || page_width <= 0.0 {
        return 1.0;
    }
    container_width / page_width
}

/// Current page of a loaded document, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: usize,
    total: usize,
}

impl PageCursor {
    /// `None` for a document without pages
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { current: 1, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1).min(self.total);
        self.current
    }

    pub fn previous(&mut self) -> usize {
        self.current = self.current.saturating_sub(1).max(1);
        self.current
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}

/// What the resume page shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeStatus {
    Ready { cursor: PageCursor, scale: f64 },
    Failed { message: String },
}

/// Inspect the resume file for the viewer page
pub fn inspect(path: &Path, container_width: f64, page_width: f64) -> ResumeStatus {
    let failed = || ResumeStatus::Failed {
        message: "Failed to load PDF. Please try again later.".to_string(),
    };

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Could not read resume {:?}: {}", path, e);
            return failed();
        }
    };

    let pages = match page_count(&bytes) {
        Ok(pages) => pages,
        Err(e) => {
            tracing::warn!("Resume {:?} is not a readable PDF: {}", path, e);
            return failed();
        }
    };

    match PageCursor::new(pages) {
        Some(cursor) => ResumeStatus::Ready {
            cursor,
            scale: fit_scale(container_width, page_width),
        },
        None => {
            tracing::warn!("Resume {:?} has no pages", path);
            failed()
        }
    }
}
