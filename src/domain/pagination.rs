// src/domain/pagination.rs

/// Number of pages for `total` items, never less than 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Constrain a requested page to `[1, total_pages]`.
pub fn clamp_page(requested: usize, total: usize, page_size: usize) -> usize {
    requested.clamp(1, total_pages(total, page_size))
}

/// One page of results plus the numbers the "Showing 8–12 of 12" line needs.
#[derive(Debug, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    /// 1-based ordinal of the first item shown, 0 when there are no items.
    pub first_shown: usize,
    /// 1-based ordinal of the last item shown, 0 when there are no items.
    pub last_shown: usize,
}

impl<T> PageSlice<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` to the requested page after clamping it.
pub fn paginate<T>(items: &[T], page_size: usize, requested: usize) -> PageSlice<'_, T> {
    let total = items.len();
    let page = clamp_page(requested, total, page_size);
    let pages = total_pages(total, page_size);

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    let slice = &items[start..end];

    let (first_shown, last_shown) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    PageSlice {
        items: slice,
        page,
        total_pages: pages,
        total,
        first_shown,
        last_shown,
    }
}

/// Page numbers for a bounded row of buttons.
///
/// The window sits around `current`; near the start it shows more pages
/// after `current`, near the end more pages before it. It never runs past
/// either edge.
pub fn page_window(current: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let width = max_buttons.max(1).min(total_pages);

    let half = width / 2;
    let mut start = current.saturating_sub(half).max(1);
    if start + width - 1 > total_pages {
        start = total_pages + 1 - width;
    }

    (start..start + width).collect()
}
