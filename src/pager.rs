//! Page arithmetic over a collection length and a page size.

use crate::{Error, PageBounds, Result};
use std::ops::Range;

/// Page count and page validation for `total_items` split into pages of
/// `page_size` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total_items: usize,
    page_size: usize,
}

/// The slice of the collection shown on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// First item index on the page (inclusive)
    pub start: usize,
    /// Last item index on the page (exclusive)
    pub end: usize,
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Pager {
    /// Create a pager; a zero page size is rejected.
    pub fn new(total_items: usize, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        Ok(Self {
            total_items,
            page_size,
        })
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total_items / page_size)`; zero for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Highest page that may be requested. An empty collection still has a
    /// (blank) page 1.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Resolve a requested page against `1..=last_page()`.
    pub fn resolve(&self, page: usize, bounds: PageBounds) -> Result<usize> {
        let last = self.last_page();
        if (1..=last).contains(&page) {
            return Ok(page);
        }
        match bounds {
            PageBounds::Reject => Err(Error::PageOutOfRange {
                page,
                total_pages: self.total_pages(),
            }),
            PageBounds::Clamp => {
                let clamped = page.clamp(1, last);
                log::warn!("page {} out of range, clamped to {}", page, clamped);
                Ok(clamped)
            }
        }
    }

    /// Window for an already valid page.
    pub fn window(&self, page: usize) -> Result<PageWindow> {
        let page = self.resolve(page, PageBounds::Reject)?;
        let start = ((page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        Ok(PageWindow {
            page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages(),
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pager::new(25, 10).unwrap().total_pages(), 3);
        assert_eq!(Pager::new(30, 10).unwrap().total_pages(), 3);
        assert_eq!(Pager::new(1, 10).unwrap().total_pages(), 1);
        assert_eq!(Pager::new(0, 10).unwrap().total_pages(), 0);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(Pager::new(5, 0), Err(Error::InvalidPageSize(0))));
    }

    #[test]
    fn resolve_rejects_or_clamps() {
        let pager = Pager::new(25, 10).unwrap();
        assert_eq!(pager.resolve(3, PageBounds::Reject).unwrap(), 3);
        assert!(matches!(
            pager.resolve(4, PageBounds::Reject),
            Err(Error::PageOutOfRange {
                page: 4,
                total_pages: 3
            })
        ));
        assert!(pager.resolve(0, PageBounds::Reject).is_err());
        assert_eq!(pager.resolve(0, PageBounds::Clamp).unwrap(), 1);
        assert_eq!(pager.resolve(99, PageBounds::Clamp).unwrap(), 3);
    }

    #[test]
    fn empty_collection_has_blank_first_page() {
        let pager = Pager::new(0, 10).unwrap();
        let w = pager.window(1).unwrap();
        assert!(w.is_empty());
        assert!(!w.has_previous());
        assert!(!w.has_next());
        assert!(pager.window(2).is_err());
    }

    #[test]
    fn last_window_is_short() {
        let w = Pager::new(25, 10).unwrap().window(3).unwrap();
        assert_eq!(w.range(), 20..25);
        assert!(w.has_previous());
        assert!(!w.has_next());
    }
}
