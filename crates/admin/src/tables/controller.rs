//! Table controller state machine.
//!
//! States: `Idle → Loading → (Success | Error)`. Every load is tagged with a
//! [`RequestToken`]; only the most recently issued token may complete, so a
//! slow response can never overwrite a newer one.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::shopify::{AdminClient, ErrorInfo, Filters, Page, PageInfo, ShopifyError};

use super::TableRow;

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// A load the caller must run and hand back to [`TableController::complete`].
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub token: RequestToken,
    pub filters: Filters,
}

/// Load state of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Success,
    Error(ErrorInfo),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current page-local sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

/// Page an in-flight load is heading to.
#[derive(Debug, Clone)]
struct PageTarget {
    number: u32,
    cursor: Option<String>,
}

/// Per-screen controller holding filters, the loaded page and sort state.
///
/// The page number and cursor describe the rows on screen: a page move only
/// takes effect once its load succeeds.
#[derive(Debug)]
pub struct TableController<R: TableRow> {
    filters: Filters,
    rows: Vec<R>,
    page_info: PageInfo,
    page_number: u32,
    state: LoadState,
    sort: Option<SortState>,
    latest: u64,
    pending: Option<PageTarget>,
    _row: PhantomData<R>,
}

impl<R: TableRow> Default for TableController<R> {
    fn default() -> Self {
        Self::new(Filters::default())
    }
}

impl<R: TableRow> TableController<R> {
    /// Create an idle controller. Any cursor in `filters` is dropped.
    #[must_use]
    pub fn new(filters: Filters) -> Self {
        Self {
            filters: Filters {
                cursor: None,
                ..filters
            },
            rows: Vec::new(),
            page_info: PageInfo::default(),
            page_number: 1,
            state: LoadState::Idle,
            sort: None,
            latest: 0,
            pending: None,
            _row: PhantomData,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub const fn filters(&self) -> &Filters {
        &self.filters
    }

    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// 1-based number of the page on screen.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    #[must_use]
    pub const fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Error banner contents, if the last load failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorInfo> {
        match &self.state {
            LoadState::Error(info) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page_info.has_next_page && self.page_info.end_cursor.is_some()
    }

    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Enter `Loading` and issue a new token for the current page.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.start(PageTarget {
            number: self.page_number,
            cursor: self.filters.cursor.clone(),
        })
    }

    fn start(&mut self, target: PageTarget) -> LoadRequest {
        self.latest += 1;
        self.state = LoadState::Loading;
        tracing::debug!(token = self.latest, page = target.number, "Table load started");
        let filters = Filters {
            cursor: target.cursor.clone(),
            ..self.filters.clone()
        };
        self.pending = Some(target);
        LoadRequest {
            token: RequestToken(self.latest),
            filters,
        }
    }

    /// Apply a finished load.
    ///
    /// Returns `false` (and changes nothing) when `token` is not the most
    /// recently issued one. On success the rows are replaced wholesale, the
    /// requested page becomes current and the sort is reapplied. On failure
    /// the previous rows and page stay.
    pub fn complete(&mut self, token: RequestToken, result: Result<Page<R>, ShopifyError>) -> bool {
        if token.0 != self.latest {
            tracing::debug!(token = token.0, latest = self.latest, "Discarding stale table response");
            return false;
        }

        match result {
            Ok(page) => {
                if let Some(target) = self.pending.take() {
                    self.page_number = target.number;
                    self.filters.cursor = target.cursor;
                }
                self.rows = page.entities;
                self.page_info = page.page_info;
                self.apply_sort();
                self.state = LoadState::Success;
            }
            Err(e) => {
                self.pending = None;
                tracing::warn!(error = %e, "Table load failed");
                self.state = LoadState::Error(e.info());
            }
        }
        true
    }

    /// Reload the current page.
    pub fn refresh(&mut self) -> LoadRequest {
        self.begin_load()
    }

    /// Replace the filters and go back to page 1.
    pub fn set_filters(&mut self, filters: Filters) -> LoadRequest {
        self.filters = Filters {
            cursor: None,
            ..filters
        };
        self.page_number = 1;
        self.begin_load()
    }

    /// Advance with the loaded page's end cursor. `None` on the last page.
    pub fn next_page(&mut self) -> Option<LoadRequest> {
        if !self.has_next_page() {
            return None;
        }
        Some(self.start(PageTarget {
            number: self.page_number + 1,
            cursor: self.page_info.end_cursor.clone(),
        }))
    }

    /// Go back by reloading page 1. `None` when already on page 1.
    ///
    /// There is no backward cursoring: any page after the first returns to
    /// the first page of the current filters.
    pub fn previous_page(&mut self) -> Option<LoadRequest> {
        if !self.has_previous_page() {
            return None;
        }
        Some(self.start(PageTarget {
            number: 1,
            cursor: None,
        }))
    }

    /// Sort the loaded rows by `column`.
    ///
    /// Clicking the sorted column again flips the direction; a different
    /// column starts ascending. Returns `false` for non-sortable columns.
    pub fn sort_by(&mut self, column: &str) -> bool {
        if !R::table_config().is_sortable(column) {
            return false;
        }

        let direction = match &self.sort {
            Some(current) if current.column == column => current.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortState {
            column: column.to_string(),
            direction,
        });
        self.apply_sort();
        true
    }

    /// Hide the error banner. Rows from the last successful load stay.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, LoadState::Error(_)) {
            self.state = LoadState::Idle;
        }
    }

    /// Issue a load, run it against `client` and apply it.
    ///
    /// Convenience for callers that await loads one at a time; concurrent
    /// callers use [`Self::begin_load`] and [`Self::complete`] directly.
    pub async fn load(&mut self, client: &AdminClient) -> &LoadState {
        let request = self.begin_load();
        let result = R::fetch(client, &request.filters).await;
        self.complete(request.token, result);
        &self.state
    }

    fn apply_sort(&mut self) {
        let Some(sort) = &self.sort else {
            return;
        };
        // `sort_by` is stable, so equal keys keep their fetched order.
        self.rows.sort_by(|a, b| {
            let ordering = R::compare(a, b, &sort.column).unwrap_or(std::cmp::Ordering::Equal);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::components::{DataTableConfig, TableColumn};
    use std::cmp::Ordering;
    use std::future::Future;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        score: u32,
    }

    impl TableRow for Row {
        fn table_config() -> DataTableConfig {
            DataTableConfig::new("rows")
                .column(TableColumn::sortable("name", "Name"))
                .column(TableColumn::sortable("score", "Score"))
                .column(TableColumn::new("id", "ID"))
        }

        fn compare(a: &Self, b: &Self, column: &str) -> Option<Ordering> {
            match column {
                "name" => Some(a.name.cmp(b.name)),
                "score" => Some(a.score.cmp(&b.score)),
                _ => None,
            }
        }

        fn fetch(
            _client: &AdminClient,
            _filters: &Filters,
        ) -> impl Future<Output = Result<Page<Self>, ShopifyError>> + Send {
            async { Ok(Page::default()) }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "b", score: 2 },
            Row { id: 2, name: "a", score: 1 },
            Row { id: 3, name: "c", score: 2 },
        ]
    }

    fn page(rows: Vec<Row>, next: Option<&str>) -> Page<Row> {
        Page::new(
            rows,
            PageInfo {
                has_next_page: next.is_some(),
                has_previous_page: false,
                start_cursor: None,
                end_cursor: next.map(str::to_string),
            },
        )
    }

    fn ids(controller: &TableController<Row>) -> Vec<u32> {
        controller.rows().iter().map(|r| r.id).collect()
    }

    fn loaded(rows: Vec<Row>, next: Option<&str>) -> TableController<Row> {
        let mut controller = TableController::<Row>::default();
        let request = controller.begin_load();
        assert!(controller.complete(request.token, Ok(page(rows, next))));
        controller
    }

    #[test]
    fn test_load_lifecycle() {
        let mut controller = TableController::<Row>::default();
        assert_eq!(controller.state(), &LoadState::Idle);

        let request = controller.begin_load();
        assert!(controller.is_loading());

        assert!(controller.complete(request.token, Ok(page(rows(), None))));
        assert_eq!(controller.state(), &LoadState::Success);
        assert_eq!(ids(&controller), vec![1, 2, 3]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = TableController::<Row>::default();
        let first = controller.begin_load();
        let second = controller.refresh();

        assert!(controller.complete(second.token, Ok(page(vec![rows()[0].clone()], None))));
        assert!(!controller.complete(first.token, Ok(page(rows(), None))));
        assert_eq!(ids(&controller), vec![1]);
    }

    #[test]
    fn test_error_keeps_rows_and_dismisses() {
        let mut controller = loaded(rows(), None);
        let request = controller.refresh();
        controller.complete(request.token, Err(ShopifyError::EmptyResponse));

        assert_eq!(controller.error().unwrap().code, "EMPTY_RESPONSE");
        assert_eq!(controller.rows().len(), 3);

        controller.dismiss_error();
        assert_eq!(controller.state(), &LoadState::Idle);
        assert!(controller.error().is_none());
        assert_eq!(controller.rows().len(), 3);
    }

    #[test]
    fn test_sort_toggles_and_resets() {
        let mut controller = loaded(rows(), None);

        assert!(controller.sort_by("name"));
        assert_eq!(ids(&controller), vec![2, 1, 3]);
        assert_eq!(controller.sort().unwrap().direction, SortDirection::Ascending);

        assert!(controller.sort_by("name"));
        assert_eq!(ids(&controller), vec![3, 1, 2]);
        assert_eq!(controller.sort().unwrap().direction, SortDirection::Descending);

        // A third click is ascending again, not the fetched order.
        assert!(controller.sort_by("name"));
        assert_eq!(ids(&controller), vec![2, 1, 3]);

        controller.sort_by("name");
        assert!(controller.sort_by("score"));
        assert_eq!(controller.sort().unwrap().direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut controller = loaded(rows(), None);
        controller.sort_by("score");
        // ids 1 and 3 tie on score and keep their fetched order
        assert_eq!(ids(&controller), vec![2, 1, 3]);
        controller.sort_by("score");
        assert_eq!(ids(&controller), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_rejects_unsortable_column() {
        let mut controller = loaded(rows(), None);
        assert!(!controller.sort_by("id"));
        assert!(!controller.sort_by("nope"));
        assert!(controller.sort().is_none());
        assert_eq!(ids(&controller), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_reapplied_after_reload() {
        let mut controller = loaded(rows(), None);
        controller.sort_by("name");
        let request = controller.refresh();
        controller.complete(request.token, Ok(page(rows(), None)));
        assert_eq!(ids(&controller), vec![2, 1, 3]);
    }

    #[test]
    fn test_next_page_uses_end_cursor() {
        let mut controller = loaded(rows(), Some("cursor-2"));
        assert!(controller.has_next_page());

        let request = controller.next_page().unwrap();
        assert_eq!(request.filters.cursor.as_deref(), Some("cursor-2"));
        assert!(controller.is_loading());
        assert_eq!(controller.page_number(), 1);

        controller.complete(request.token, Ok(page(rows(), None)));
        assert_eq!(controller.page_number(), 2);
        assert_eq!(controller.filters().cursor.as_deref(), Some("cursor-2"));
    }

    #[test]
    fn test_failed_next_page_stays_on_current_page() {
        let mut controller = loaded(rows(), Some("cursor-2"));
        let request = controller.next_page().unwrap();
        controller.complete(request.token, Err(ShopifyError::EmptyResponse));

        assert!(controller.error().is_some());
        assert_eq!(controller.page_number(), 1);
        assert!(controller.filters().cursor.is_none());
        assert_eq!(ids(&controller), vec![1, 2, 3]);

        // Retrying asks for the same page again.
        let retry = controller.next_page().unwrap();
        assert_eq!(retry.filters.cursor.as_deref(), Some("cursor-2"));
        controller.complete(retry.token, Ok(page(vec![rows()[2].clone()], None)));
        assert_eq!(controller.page_number(), 2);
        assert_eq!(ids(&controller), vec![3]);
    }

    #[test]
    fn test_refresh_after_failed_page_move_reloads_current_page() {
        let mut controller = loaded(rows(), Some("cursor-2"));
        let request = controller.next_page().unwrap();
        controller.complete(request.token, Err(ShopifyError::EmptyResponse));

        let request = controller.refresh();
        assert!(request.filters.cursor.is_none());
        controller.complete(request.token, Ok(page(rows(), Some("cursor-2"))));
        assert_eq!(controller.page_number(), 1);
    }

    #[test]
    fn test_next_page_on_last_page() {
        let mut controller = loaded(rows(), None);
        assert!(controller.next_page().is_none());
        assert_eq!(controller.state(), &LoadState::Success);
    }

    #[test]
    fn test_previous_page_resets_to_first_page() {
        let mut controller = loaded(rows(), Some("c2"));
        let request = controller.next_page().unwrap();
        controller.complete(request.token, Ok(page(rows(), Some("c3"))));
        let request = controller.next_page().unwrap();
        controller.complete(request.token, Ok(page(rows(), None)));
        assert_eq!(controller.page_number(), 3);

        let request = controller.previous_page().unwrap();
        assert!(request.filters.cursor.is_none());
        controller.complete(request.token, Ok(page(rows(), Some("c2"))));
        assert_eq!(controller.page_number(), 1);
        assert!(controller.previous_page().is_none());
    }

    #[test]
    fn test_set_filters_resets_cursor() {
        let mut controller = loaded(rows(), Some("c2"));
        let request = controller.next_page().unwrap();
        controller.complete(request.token, Ok(page(rows(), Some("c3"))));

        let request = controller.set_filters(Filters {
            status: Some("active".to_string()),
            cursor: Some("ignored".to_string()),
            ..Filters::default()
        });
        assert!(request.filters.cursor.is_none());
        assert_eq!(request.filters.status.as_deref(), Some("active"));
        assert_eq!(controller.page_number(), 1);
    }
}
