//! Pure pagination math and page-window shaping.

use std::ops::Range;

use crate::error::ConfigError;

/// Window is not compressed while total page count fits into it
pub const FULL_WINDOW: u32 = 5;

/// Pages shown after the first one when current page is near the start
const LEAD_PAGES: u32 = 4;

/// Validated page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Check raw configured page size.
    /// Zero and negative sizes are rejected
    pub fn new(raw: i64) -> Result<Self, ConfigError> {
        match usize::try_from(raw) {
            Ok(size) if size > 0 => Ok(Self(size)),
            _ => Err(ConfigError::PageSize(raw)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Count of pages needed for `total_items`, never less than 1
    pub fn total_pages(self, total_items: usize) -> u32 {
        let pages = total_items.div_ceil(self.0).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// Compute the number of pages for a dataset.
/// Empty dataset still has one (empty) page
pub fn total_pages(total_items: usize, page_size: i64) -> Result<u32, ConfigError> {
    Ok(PageSize::new(page_size)?.total_pages(total_items))
}

/// Clamp a requested page into `1..=max(total_pages, 1)`
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Half-open index range of items on `current_page`.
///
/// Range is empty when the page lies past the data.
pub fn page_slice(
    current_page: u32,
    page_size: i64,
    total_items: usize,
) -> Result<Range<usize>, ConfigError> {
    let size = PageSize::new(page_size)?.get();
    let start = (current_page.saturating_sub(1) as usize)
        .saturating_mul(size)
        .min(total_items);
    let end = start.saturating_add(size).min(total_items);
    Ok(start..end)
}

/// Single control of the page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEntry {
    /// Jump to the first page
    First,
    /// Page from the middle range
    Page(u32),
    /// Omitted pages
    Ellipsis,
    /// Jump to the last page (carries last page number)
    Last(u32),
}

impl WindowEntry {
    /// Page this entry selects, `None` for ellipsis
    pub fn page(&self) -> Option<u32> {
        match *self {
            Self::First => Some(1),
            Self::Page(page) | Self::Last(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

/// Ordered page selector controls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub entries: Vec<WindowEntry>,
}

impl PageWindow {
    pub fn iter(&self) -> impl Iterator<Item = &WindowEntry> {
        self.entries.iter()
    }

    /// Selectable page numbers in display order
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().filter_map(WindowEntry::page)
    }

    pub fn has_ellipsis(&self) -> bool {
        self.entries.contains(&WindowEntry::Ellipsis)
    }
}

/// Decide which page controls are shown around `current_page`.
///
/// First and last page are always present when there is more than one page.
/// A gap hiding exactly one page shows that page instead of an ellipsis.
pub fn page_window(current_page: u32, total_pages: u32) -> PageWindow {
    let total = total_pages.max(1);
    if total == 1 {
        return PageWindow { entries: vec![WindowEntry::Page(1)] };
    }

    let current = clamp_page(current_page, total);

    // Middle range, excluding first and last page
    let (left, right) = if total <= FULL_WINDOW {
        (2, total - 1)
    } else if current <= 3 {
        (2, LEAD_PAGES)
    } else if current.saturating_add(2) >= total {
        (total - 3, total - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut entries = Vec::with_capacity(7);
    entries.push(WindowEntry::First);

    match left {
        3 => entries.push(WindowEntry::Page(2)),
        l if l > 3 => entries.push(WindowEntry::Ellipsis),
        _ => (),
    }

    entries.extend((left..=right).map(WindowEntry::Page));

    match total - right {
        2 => entries.push(WindowEntry::Page(total - 1)),
        gap if gap > 2 => entries.push(WindowEntry::Ellipsis),
        _ => (),
    }

    entries.push(WindowEntry::Last(total));
    PageWindow { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WindowEntry::*;

    #[test]
    fn slice_bounds() {
        for total_items in 0..40 {
            for page_size in 1..8 {
                for page in 1..12 {
                    let range = page_slice(page, page_size, total_items).unwrap();
                    assert!(range.start <= range.end);
                    assert!(range.end <= total_items);
                }
            }
        }
    }

    #[test]
    fn slice_values() {
        assert_eq!(page_slice(1, 6, 42), Ok(0..6));
        assert_eq!(page_slice(7, 6, 42), Ok(36..42));
        assert_eq!(page_slice(3, 5, 12), Ok(10..12));
        // Past the data
        assert_eq!(page_slice(9, 5, 12), Ok(12..12));
        assert_eq!(page_slice(1, 5, 0), Ok(0..0));
        assert_eq!(page_slice(u32::MAX, i64::MAX, 3), Ok(3..3));
    }

    #[test]
    fn slice_rejects_bad_page_size() {
        assert_eq!(page_slice(1, 0, 10), Err(ConfigError::PageSize(0)));
        assert_eq!(page_slice(1, -4, 10), Err(ConfigError::PageSize(-4)));
    }

    #[test]
    fn page_count() {
        assert_eq!(total_pages(0, 5), Ok(1));
        assert_eq!(total_pages(5, 5), Ok(1));
        assert_eq!(total_pages(6, 5), Ok(2));
        assert_eq!(total_pages(42, 6), Ok(7));
        assert!(total_pages(42, 0).is_err());
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn small_windows_show_every_page() {
        for total in 1..=FULL_WINDOW {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(!window.has_ellipsis());
                let pages: Vec<_> = window.pages().collect();
                assert_eq!(pages, (1..=total).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn single_page_has_no_jump_controls() {
        assert_eq!(page_window(1, 1).entries, [Page(1)]);
        assert_eq!(page_window(1, 0).entries, [Page(1)]);
        assert_eq!(page_window(2, 2).entries, [First, Last(2)]);
    }

    #[test]
    fn window_branches() {
        assert_eq!(
            page_window(1, 10).entries,
            [First, Page(2), Page(3), Page(4), Ellipsis, Last(10)]
        );
        assert_eq!(
            page_window(9, 10).entries,
            [First, Ellipsis, Page(7), Page(8), Page(9), Last(10)]
        );
        assert_eq!(
            page_window(5, 10).entries,
            [First, Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Last(10)]
        );
    }

    #[test]
    fn single_hidden_page_is_shown() {
        assert_eq!(
            page_window(1, 6).entries,
            [First, Page(2), Page(3), Page(4), Page(5), Last(6)]
        );
        assert_eq!(
            page_window(4, 6).entries,
            [First, Page(2), Page(3), Page(4), Page(5), Last(6)]
        );
        assert_eq!(
            page_window(4, 7).entries,
            [First, Page(2), Page(3), Page(4), Page(5), Page(6), Last(7)]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 10), page_window(1, 10));
        assert_eq!(page_window(50, 10), page_window(10, 10));
    }

    #[test]
    fn window_pages_are_sorted_and_unique() {
        for total in 1..30 {
            for current in 1..=total {
                let pages: Vec<_> = page_window(current, total).pages().collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{current}/{total}");
                assert!(pages.contains(&current));
            }
        }
    }
}
