//! # Pagination
//!
//! Pages are 1-based, fixed-size, contiguous slices of the recipe sequence. Slicing
//! never fails: asking for a page past the end yields a short or empty slice.
//!
//! [`Pager`] is the current-page cursor. It starts at page 1 and only moves on an
//! explicit [`Pager::select`]. When the collection shrinks (a delete emptying the last
//! page), [`Pager::clamp`] pulls the cursor back onto the last existing page so the
//! listing never points at a page that no longer exists.

use serde::Serialize;

/// Page size used when no configuration says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Returns the slice `[(page-1)*size, page*size)` of `items`, clipped to its bounds.
///
/// Page 0 is read as page 1. A page size of 0 yields nothing.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`; 0 for an empty sequence or a zero page size.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Where the listing currently stands, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current: usize,
    pub count: usize,
    pub total: usize,
}

/// The current-page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves to `page`. Page 0 is read as page 1; no upper bound is enforced here.
    pub fn select(&mut self, page: usize) {
        self.current = page.max(1);
    }

    /// Pulls the cursor back onto the last page of a `total`-long sequence.
    /// Returns true when the cursor moved.
    pub fn clamp(&mut self, total: usize) -> bool {
        let last = page_count(total, self.page_size).max(1);
        if self.current > last {
            self.current = last;
            true
        } else {
            false
        }
    }

    /// The items on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current, self.page_size)
    }

    pub fn info(&self, total: usize) -> PageInfo {
        PageInfo {
            current: self.current,
            count: page_count(total, self.page_size),
            total,
        }
    }
}
