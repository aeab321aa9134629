use serde::Serialize;

/// One page of a sequence plus the page count it was cut from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, T> PageView<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `len` items, never less than 1
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Slice `items` to the 1-indexed `page`
///
/// Out-of-range pages (including page 0) give an empty slice rather than an
/// error. The page number itself is reported back untouched; repairing page
/// state is the caller's job, see [`PageState::clamp`].
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageView<'_, T> {
    let total = total_pages(items.len(), page_size);

    let slice = if page == 0 || page_size == 0 {
        &items[..0]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(items.len());
        let end = page.saturating_mul(page_size).min(items.len());
        &items[start..end]
    };

    PageView {
        items: slice,
        page,
        total_pages: total,
        total_items: items.len(),
    }
}

/// Current page of the transaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    /// Create page state positioned on the first page
    pub fn new(page_size: usize) -> Self {
        PageState {
            current_page: 1,
            page_size,
        }
    }

    /// Move to next page
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages.max(1) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Move to previous page
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped into `[1, total_pages]`
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the current page back into range after the sequence shrank
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Check if on first page
    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    /// Check if on last page
    pub fn is_last(&self, total_pages: usize) -> bool {
        self.current_page >= total_pages.max(1)
    }
}
