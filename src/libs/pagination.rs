//! Page windows for paginated list views.
//!
//! [`window`] picks which page numbers to show for a given position. Placing
//! ellipsis markers is a separate step, [`insert_ellipsis`], which marks every
//! jump between two shown numbers. The window rule stays purely numeric.
//!
//! ```text
//! window(1, 20, 7)   -> 1 2 3 4 5 6 20        -> 1 2 3 4 5 6 ... 20
//! window(10, 20, 7)  -> 1 8 9 10 11 12 20     -> 1 ... 8 9 10 11 12 ... 20
//! window(20, 20, 7)  -> 1 15 16 17 18 19 20   -> 1 ... 15 16 17 18 19 20
//! ```
//!
//! The generator does not clamp `current_page`. Callers clamp first (see
//! [`clamp_page`]). Out-of-range input yields an unspecified window but never
//! panics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::once;

/// Number of page slots shown by default.
pub const DEFAULT_MAX_VISIBLE: usize = 7;

/// One slot of a rendered page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => f.write_str("..."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationWindow {
    /// 1-based.
    pub current_page: usize,
    pub total_pages: usize,
    pub max_visible: usize,
    /// Page numbers to show, ascending.
    pub pages: Vec<usize>,
}

impl PaginationWindow {
    /// The window with ellipsis markers inserted.
    pub fn items(&self) -> Vec<PageItem> {
        insert_ellipsis(&self.pages)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Whether every window built with `max_visible` stays within that many numbers
/// and keeps page 1: the value must be odd and at least 3.
pub fn is_valid_max_visible(max_visible: usize) -> bool {
    max_visible >= 3 && max_visible % 2 == 1
}

/// Computes the page numbers to display around `current_page`.
///
/// `max_visible` is expected to pass [`is_valid_max_visible`].
pub fn window(current_page: usize, total_pages: usize, max_visible: usize) -> PaginationWindow {
    let pages: Vec<usize> = if total_pages <= max_visible {
        (1..=total_pages).collect()
    } else {
        let half = max_visible / 2;
        if current_page <= half + 1 {
            // near start
            (1..max_visible).chain(once(total_pages)).collect()
        } else if current_page >= total_pages.saturating_sub(half) {
            // near end
            once(1)
                .chain(total_pages.saturating_sub(max_visible.saturating_sub(2))..=total_pages)
                .collect()
        } else {
            once(1)
                .chain(current_page.saturating_add(1).saturating_sub(half)..=current_page.saturating_add(half).saturating_sub(1))
                .chain(once(total_pages))
                .collect()
        }
    };

    PaginationWindow {
        current_page,
        total_pages,
        max_visible,
        pages,
    }
}

/// Inserts an ellipsis wherever two adjacent page numbers are not consecutive.
pub fn insert_ellipsis(pages: &[usize]) -> Vec<PageItem> {
    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;

    for &page in pages {
        if previous.is_some_and(|p| page > p.saturating_add(1)) {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }

    items
}

/// Number of pages needed for `len` items; at least 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Clamps a requested page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The items on 1-based `page`. Empty when the page is past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
