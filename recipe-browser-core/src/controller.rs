//! List controller
//!
//! Owns the pagination, filter, fetch-status, record and selection state of
//! the browser and is the only place that mutates it. The controller does no
//! I/O itself: every operation that needs data returns a [`FetchTicket`]
//! which the caller executes against a [`RecipeSource`], handing the
//! [`FetchOutcome`] back through [`ListController::apply`].
//!
//! Each ticket carries a generation number. Only the outcome of the most
//! recently issued ticket is applied; anything older is discarded, so a slow
//! early response can never overwrite the result of a later state change.

use crate::error::{BrowserError, BrowserResult};
use crate::traits::RecipeSource;
use crate::types::{
    FilterField, FilterSet, PageLimit, PageState, Recipe, RecipePage, RecipeRequest, RequestMode,
};

/// Lifecycle of the current fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing outstanding, last fetch (if any) succeeded.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The latest request failed and nothing has superseded it yet.
    Error,
}

/// What the list area should show, derived from controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    /// The latest fetch failed. Takes priority over everything else.
    ConnectionError,
    /// A search returned nothing; the recovery action is `clear_filters`.
    EmptyFiltered,
    /// The backend itself holds no records.
    EmptyCorpus,
    /// Regular table; rows are replaced by a loading indicator while `loading`.
    Table { loading: bool },
}

/// A request the caller must execute, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: RecipeRequest,
}

impl FetchTicket {
    /// Execute the request against a data source.
    pub async fn run(self, source: &dyn RecipeSource) -> FetchOutcome {
        let result = source.fetch(&self.request).await;
        FetchOutcome {
            generation: self.generation,
            result,
        }
    }
}

/// Result of an executed [`FetchTicket`].
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: BrowserResult<RecipePage>,
}

/// Pagination/filter state machine.
#[derive(Debug, Clone, Default)]
pub struct ListController {
    page: PageState,
    filters: FilterSet,
    status: FetchStatus,
    records: Vec<Recipe>,
    selected: Option<Recipe>,
    last_error: Option<BrowserError>,
    generation: u64,
}

impl ListController {
    /// Create a controller on page 1 with no filters.
    pub fn new(limit: PageLimit) -> Self {
        Self {
            page: PageState::new(limit),
            ..Self::default()
        }
    }

    // ========== Reads ==========

    pub fn page(&self) -> u32 {
        self.page.page
    }

    pub fn limit(&self) -> PageLimit {
        self.page.limit
    }

    pub fn total(&self) -> u64 {
        self.page.total
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages()
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Error of the latest fetch, while it is still current.
    pub fn last_error(&self) -> Option<&BrowserError> {
        self.last_error.as_ref()
    }

    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    /// Generation of the most recently issued ticket.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> RequestMode {
        if self.filters.is_empty() {
            RequestMode::Paged
        } else {
            RequestMode::Filtered
        }
    }

    /// Page navigation and the limit selector are inert while filtered.
    pub fn pagination_enabled(&self) -> bool {
        self.mode() == RequestMode::Paged
    }

    pub fn has_prev_page(&self) -> bool {
        self.pagination_enabled() && self.page.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination_enabled() && self.page.page < self.total_pages()
    }

    /// The request the current state maps to.
    pub fn current_request(&self) -> RecipeRequest {
        match self.mode() {
            RequestMode::Paged => RecipeRequest::Paged {
                page: self.page.page,
                limit: self.page.limit,
            },
            RequestMode::Filtered => RecipeRequest::Filtered(self.filters.clone()),
        }
    }

    /// Which screen the list area should show.
    pub fn view(&self) -> ListView {
        if self.status == FetchStatus::Error {
            return ListView::ConnectionError;
        }

        let loading = self.is_loading();
        if !loading && self.records.is_empty() {
            if self.mode() == RequestMode::Filtered {
                return ListView::EmptyFiltered;
            }
            if self.page.total == 0 {
                return ListView::EmptyCorpus;
            }
        }

        ListView::Table { loading }
    }

    // ========== Operations ==========

    /// Initial fetch for the current state.
    pub fn start(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Jump to page `page`. Rejected (state unchanged) outside
    /// `[1, total_pages]` or while any filter is active.
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        if !self.pagination_enabled() {
            log::debug!("Ignoring page change to {page}: filters are active");
            return None;
        }
        if page < 1 || page > self.total_pages() {
            log::debug!(
                "Ignoring page change to {page}: out of range 1..={}",
                self.total_pages()
            );
            return None;
        }

        self.page.page = page;
        Some(self.issue())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.page.page.saturating_add(1))
    }

    /// Step back one page, or to the last page when the corpus has shrunk
    /// below the current one.
    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        let target = self.page.page.saturating_sub(1).min(self.total_pages());
        self.set_page(target)
    }

    /// Change the page size. Only 10, 20 and 50 are accepted, and only
    /// while no filter is active. Always goes back to page 1.
    pub fn set_limit(&mut self, limit: u32) -> Option<FetchTicket> {
        if !self.pagination_enabled() {
            log::debug!("Ignoring limit change to {limit}: filters are active");
            return None;
        }
        let Some(limit) = PageLimit::from_value(limit) else {
            log::debug!("Ignoring unsupported limit {limit}");
            return None;
        };

        self.page.limit = limit;
        self.page.page = 1;
        Some(self.issue())
    }

    /// Step the limit selector to its next value.
    pub fn cycle_limit(&mut self) -> Option<FetchTicket> {
        self.set_limit(self.page.limit.next().value())
    }

    /// Set (or, for blank input, remove) one filter. Every call resets to
    /// page 1 and refetches, even when the set of active fields is unchanged.
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> FetchTicket {
        self.filters.set(field, value);
        self.page.page = 1;
        self.issue()
    }

    /// Drop every filter and go back to unfiltered page 1.
    pub fn clear_filters(&mut self) -> FetchTicket {
        self.filters.clear();
        self.page.page = 1;
        self.issue()
    }

    /// Re-issue the request for the current state.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn select(&mut self, record: Recipe) {
        self.selected = Some(record);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    // ========== Resolution ==========

    /// Apply the outcome of an executed ticket.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        self.resolve(outcome.generation, outcome.result)
    }

    /// Apply a fetch result if `generation` is still the latest issued one.
    ///
    /// Returns `false` when the result was stale (or already applied) and
    /// has been discarded.
    pub fn resolve(&mut self, generation: u64, result: BrowserResult<RecipePage>) -> bool {
        if generation != self.generation {
            log::debug!(
                "Discarding stale response (generation {generation}, latest {})",
                self.generation
            );
            return false;
        }
        if self.status != FetchStatus::Loading {
            log::debug!("Generation {generation} already resolved");
            return false;
        }

        match result {
            Ok(page) => {
                log::debug!(
                    "Generation {generation} resolved: {} records, total {}",
                    page.data.len(),
                    page.total
                );
                self.records = page.data;
                self.page.total = page.total;
                if self.mode() == RequestMode::Paged && self.page.page > self.total_pages() {
                    log::debug!(
                        "Page {} past the end, clamping to {}",
                        self.page.page,
                        self.total_pages()
                    );
                    self.page.page = self.total_pages();
                }
                self.status = FetchStatus::Idle;
                self.last_error = None;
            }
            Err(e) => {
                log::warn!("Fetch failed (generation {generation}): {e}");
                self.records.clear();
                self.page.total = 0;
                self.status = FetchStatus::Error;
                self.last_error = Some(e);
            }
        }
        true
    }

    fn issue(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.status = FetchStatus::Loading;
        self.last_error = None;

        let request = self.current_request();
        log::debug!("Issuing generation {}: {request:?}", self.generation);

        FetchTicket {
            generation: self.generation,
            request,
        }
    }
}
