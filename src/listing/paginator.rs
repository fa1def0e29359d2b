use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page has to be greater than 0")]
    Zero,
    #[error("Page has to be at most page_count ({0})")]
    OutOfRange(usize),
}

/// Splits an ordered list into fixed-size, 1-based pages
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    per_page: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
        }
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.per_page)
    }

    pub fn page(&self, page: usize) -> Result<&'a [T], PageError> {
        match page {
            0 => return Err(PageError::Zero),
            x if x > self.page_count() => return Err(PageError::OutOfRange(self.page_count())),
            _ => {}
        }

        let start = (page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.items.len());
        Ok(&self.items[start..end])
    }

    /// Iterate over `(page_number, items)` pairs
    pub fn pages(&self) -> impl Iterator<Item = (usize, &'a [T])> + 'a {
        let per_page = self.per_page;
        self.items
            .chunks(per_page)
            .enumerate()
            .map(|(i, chunk)| (i + 1, chunk))
    }
}
