//! Page counting and the compact page label sequence shown in page controls.

/// Page counts up to this size are listed in full, without ellipses.
pub const MAX_UNTRUNCATED_PAGES: usize = 7;

/// An entry in the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A 1-based page number
    Page(usize),
    /// A gap of hidden page numbers
    Ellipsis,
}

/// Number of pages needed to show `total_rows`; zero rows means zero pages.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(page_size)
}

/// Build the page label sequence for `current_page` (1-based).
///
/// Up to seven pages are listed in full. Beyond that the first and last page
/// are always shown, with the current page and its neighbours in between and
/// an ellipsis standing in for each hidden run. A current page outside
/// `1..=page_count` is clamped into range.
pub fn page_labels(page_count: usize, current_page: usize) -> Vec<PageLabel> {
    if page_count == 0 {
        return Vec::new();
    }

    if page_count <= MAX_UNTRUNCATED_PAGES {
        return (1..=page_count).map(PageLabel::Page).collect();
    }

    let current = current_page.clamp(1, page_count);
    let mut labels = vec![PageLabel::Page(1)];

    if current > 3 {
        labels.push(PageLabel::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(page_count - 1);
    labels.extend((start..=end).map(PageLabel::Page));

    if current + 2 < page_count {
        labels.push(PageLabel::Ellipsis);
    }

    labels.push(PageLabel::Page(page_count));
    labels
}

/// Whether `label` is the current page. Ellipses are never active.
pub fn is_active(label: PageLabel, current_page: usize) -> bool {
    match label {
        PageLabel::Page(page) => page == current_page,
        PageLabel::Ellipsis => false,
    }
}

/// Allowed page sizes and the size a fresh table starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Sizes offered in the rows-per-page select (default: 3, 10, 20, 50)
    pub page_sizes: Vec<usize>,
    /// Initial page size (default: 10)
    pub default_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_sizes: vec![3, 10, 20, 50],
            default_page_size: 10,
        }
    }
}

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Largest valid page index for `total_rows`.
    pub fn last_page_index(&self, total_rows: usize) -> usize {
        page_count(total_rows, self.page_size).saturating_sub(1)
    }

    /// Index of the first row on the current page.
    pub fn first_row(&self) -> usize {
        self.page_index * self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLabel::{Ellipsis, Page};

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(42, 3), 14);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_small_page_counts_listed_in_full() {
        for count in 1..=7 {
            for current in 1..=count {
                let expected: Vec<PageLabel> = (1..=count).map(Page).collect();
                assert_eq!(page_labels(count, current), expected);
            }
        }
    }

    #[test]
    fn test_zero_pages_is_empty() {
        assert!(page_labels(0, 1).is_empty());
    }

    #[test]
    fn test_first_page_of_ten() {
        assert_eq!(page_labels(10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_middle_page_of_ten() {
        assert_eq!(
            page_labels(10, 6),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_last_page_of_ten() {
        assert_eq!(page_labels(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn test_ellipsis_boundaries() {
        // Page 3 still touches page 1 through the window
        assert_eq!(page_labels(10, 3), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
        assert_eq!(
            page_labels(10, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_labels(10, 8),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_out_of_range_current_page_is_clamped() {
        assert_eq!(page_labels(10, 0), page_labels(10, 1));
        assert_eq!(page_labels(10, 99), page_labels(10, 10));
    }

    #[test]
    fn test_labels_never_repeat_pages() {
        for count in 8..=30 {
            for current in 1..=count {
                let pages: Vec<usize> = page_labels(count, current)
                    .into_iter()
                    .filter_map(|l| match l {
                        Page(p) => Some(p),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{count}/{current}");
                assert!(pages.contains(&current));
            }
        }
    }

    #[test]
    fn test_is_active() {
        assert!(is_active(Page(3), 3));
        assert!(!is_active(Page(2), 3));
        assert!(!is_active(Ellipsis, 3));
    }

    #[test]
    fn test_default_config_page_size_is_allowed() {
        let config = PaginationConfig::default();
        assert!(config.page_sizes.contains(&config.default_page_size));
    }

    #[test]
    fn test_last_page_index() {
        let pagination = Pagination {
            page_index: 0,
            page_size: 10,
        };
        assert_eq!(pagination.last_page_index(0), 0);
        assert_eq!(pagination.last_page_index(25), 2);
    }
}
