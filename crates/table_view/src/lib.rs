//! Table engine for the team dashboard.
//!
//! Given rows, column definitions, and a [`TableState`], this crate derives
//! the visible page of rows: sorted first, then paginated. The view is a
//! pure recomputation over borrowed rows; nothing is cached between calls.
//! State setters clamp out-of-range input instead of failing.

pub mod members;
mod pagination;

pub use pagination::{
    MAX_UNTRUNCATED_PAGES, PageLabel, Pagination, PaginationConfig, is_active, page_count,
    page_labels,
};

/// Ordered value a sortable column extracts from a row.
///
/// Text is compared case-insensitively. Numbers sort before text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(i64),
    Text(String),
}

impl SortKey {
    /// Case-insensitive text key.
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }
}

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Which column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: &'static str,
    pub direction: SortDirection,
}

/// A table column definition.
pub struct Column<T> {
    /// Stable identifier used in sort state
    pub id: &'static str,
    /// Header text
    pub header: &'static str,
    /// Sort accessor; `None` makes the column unsortable
    pub sort_key: Option<fn(&T) -> SortKey>,
}

impl<T> Column<T> {
    /// A sortable column.
    pub fn sortable(id: &'static str, header: &'static str, sort_key: fn(&T) -> SortKey) -> Self {
        Self {
            id,
            header,
            sort_key: Some(sort_key),
        }
    }

    /// A display-only column.
    pub fn display(id: &'static str, header: &'static str) -> Self {
        Self {
            id,
            header,
            sort_key: None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }
}

/// Sort and pagination state of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sorting: Option<SortState>,
    pub pagination: Pagination,
    page_sizes: Vec<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(&PaginationConfig::default())
    }
}

impl TableState {
    /// Unsorted state on the first page with the configured default size.
    pub fn new(config: &PaginationConfig) -> Self {
        let page_size = if config.page_sizes.contains(&config.default_page_size) {
            config.default_page_size
        } else {
            config.page_sizes.first().copied().unwrap_or(config.default_page_size)
        };

        Self {
            sorting: None,
            pagination: Pagination {
                page_index: 0,
                page_size: page_size.max(1),
            },
            page_sizes: config.page_sizes.clone(),
        }
    }

    /// Page sizes the rows-per-page select offers.
    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    /// Current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.pagination.page_index + 1
    }

    /// Jump to `index`, clamped to the last page.
    pub fn set_page_index(&mut self, index: usize, total_rows: usize) {
        self.pagination.page_index = index.min(self.pagination.last_page_index(total_rows));
    }

    /// Change the page size, keeping the first visible row on screen.
    ///
    /// Sizes outside the allowed set are ignored. Returns whether the size changed.
    pub fn set_page_size(&mut self, size: usize, total_rows: usize) -> bool {
        if size == 0 || !self.page_sizes.contains(&size) {
            return false;
        }

        let first_row = self.pagination.first_row();
        self.pagination.page_size = size;
        self.set_page_index(first_row / size, total_rows);
        true
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.page_index > 0
    }

    pub fn can_next_page(&self, total_rows: usize) -> bool {
        self.pagination.page_index < self.pagination.last_page_index(total_rows)
    }

    pub fn previous_page(&mut self) {
        self.pagination.page_index = self.pagination.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, total_rows: usize) {
        self.set_page_index(self.pagination.page_index + 1, total_rows);
    }

    /// Re-clamp the page index after the row count changed.
    pub fn reconcile(&mut self, total_rows: usize) {
        self.set_page_index(self.pagination.page_index, total_rows);
    }

    /// Cycle a column through ascending, descending, and unsorted.
    ///
    /// Moving to a different column starts at ascending. Unsortable columns
    /// are ignored.
    pub fn toggle_sort<T>(&mut self, column: &Column<T>) {
        if !column.is_sortable() {
            return;
        }

        self.sorting = match self.sorting {
            Some(SortState {
                column: current,
                direction: SortDirection::Asc,
            }) if current == column.id => Some(SortState {
                column: column.id,
                direction: SortDirection::Desc,
            }),
            Some(SortState {
                column: current,
                direction: SortDirection::Desc,
            }) if current == column.id => None,
            _ => Some(SortState {
                column: column.id,
                direction: SortDirection::Asc,
            }),
        };
    }

    /// Direction `column_id` is sorted in, if it is the sort column.
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .filter(|s| s.column == column_id)
            .map(|s| s.direction)
    }
}

/// The visible page of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a, T> {
    /// Rows on the current page, in display order
    pub rows: Vec<&'a T>,
    /// Effective zero-based page index, after clamping
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl<T> TableView<'_, T> {
    /// Current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.page_index + 1
    }

    /// Page label sequence for the navigation bar.
    pub fn labels(&self) -> Vec<PageLabel> {
        page_labels(self.page_count, self.current_page())
    }

    /// 1-based inclusive range of rows shown, or `None` for an empty table.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let start = self.page_index * self.page_size;
        Some((start + 1, start + self.rows.len()))
    }
}

/// Sort then paginate `rows` according to `state`.
pub fn derive_view<'a, T>(rows: &'a [T], columns: &[Column<T>], state: &TableState) -> TableView<'a, T> {
    let mut ordered: Vec<&'a T> = rows.iter().collect();

    let sorter = state.sorting.and_then(|sort| {
        columns
            .iter()
            .find(|c| c.id == sort.column)
            .and_then(|c| c.sort_key)
            .map(|key| (key, sort.direction))
    });

    if let Some((key, direction)) = sorter {
        let mut keyed: Vec<(SortKey, &'a T)> = ordered.into_iter().map(|row| (key(row), row)).collect();
        // sort_by is stable, so ties keep insertion order in both directions
        keyed.sort_by(|a, b| match direction {
            SortDirection::Asc => a.0.cmp(&b.0),
            SortDirection::Desc => b.0.cmp(&a.0),
        });
        ordered = keyed.into_iter().map(|(_, row)| row).collect();
    }

    let total_rows = ordered.len();
    let page_size = state.pagination.page_size.max(1);
    let page_index = state.pagination.page_index.min(state.pagination.last_page_index(total_rows));

    let rows = ordered
        .into_iter()
        .skip(page_index * page_size)
        .take(page_size)
        .collect();

    TableView {
        rows,
        page_index,
        page_size,
        page_count: page_count(total_rows, page_size),
        total_rows,
    }
}
