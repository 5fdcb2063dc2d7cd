//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with selection management, request ticketing, and UI
//! view model generation. It serves as the single source of truth for all
//! transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates committed state (the query, the current page and its
//! results) from transient input state (the live edit buffer, the input
//! mode). View models are computed on-demand from state snapshots; the
//! renderer and the mouse hit-testing in the event handler both derive their
//! geometry from the same layout functions, so they can never disagree.
//!
//! # State Components
//!
//! - **Query**: The committed search text driving requests
//! - **Input**: The live edit buffer while the search field is focused
//! - **Results**: The movie list of the most recently applied page
//! - **Status**: Search lifecycle phase selecting the body of the screen
//! - **Ticket**: Monotonic counter identifying the newest in-flight request
//! - **Overlay**: The movie whose details are shown above the grid, if any
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation: a notice screen or the windowed card grid, plus the
//! optional search box, pager, and detail overlay.

use crate::app::phase::{InputMode, SearchStatus};
use crate::catalog::{resolve_image, ImageSize};
use crate::domain::Movie;
use crate::ui::helpers;
use crate::ui::layout::{self, GridLayout, CARD_INNER_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, CardItem, FooterInfo, GridView, HeaderInfo, NoticeTone, NoticeView, OverlayModel,
    PagerModel, SearchBarInfo, UiViewModel,
};

/// Primary message of the start screen.
const IDLE_MESSAGE: &str = "Search for movies";

/// Message shown while a page is loading.
const LOADING_MESSAGE: &str = "Loading movies, please wait...";

/// Primary message of the error screen.
const ERROR_MESSAGE: &str = "There was an error, please try again...";

/// Primary message of the zero-results screen.
const EMPTY_MESSAGE: &str = "No movies found";

/// Central application state container.
///
/// Holds all transient UI state including the committed query, the applied
/// result page, selection, and mode information. Mutated by the event handler
/// in response to user input and fetch outcomes. View models are computed
/// on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The committed search query driving requests.
    ///
    /// Empty exactly while `status` is [`SearchStatus::Idle`]. Set when the
    /// user submits a non-empty buffer; cleared when an empty buffer is
    /// submitted.
    pub query: String,

    /// Live edit buffer of the search field.
    ///
    /// Accumulated by `Char` events and reduced by `Backspace` while in
    /// [`InputMode::Editing`]. Only becomes the query on submit; abandoning
    /// the edit leaves the committed query untouched.
    pub input: String,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// One-based page of the current query.
    ///
    /// Reset to 1 whenever a genuinely new query is committed. Page changes
    /// for the same query keep the results on screen while loading.
    pub page: u32,

    /// Search lifecycle phase.
    pub status: SearchStatus,

    /// Results of the most recently applied page.
    ///
    /// Retained while a page change loads so the grid does not flash empty;
    /// cleared when a new query is committed or a request fails.
    pub results: Vec<Movie>,

    /// Total pages reported by the catalog for the current query.
    pub total_pages: u32,

    /// Total matching titles reported by the catalog.
    pub total_results: u32,

    /// Failure message of the most recent rejected request.
    pub error_message: Option<String>,

    /// Zero-based index of the selected card within `results`.
    pub selected_index: usize,

    /// Movie shown in the detail overlay, when one is open.
    ///
    /// While the overlay is open, grid navigation and paging are locked;
    /// escape or a click outside the content rectangle closes it.
    pub overlay: Option<Movie>,

    /// Ticket of the newest request issued.
    ///
    /// Tickets increase monotonically and never reset. A fetch outcome is
    /// applied only when its ticket equals this value; anything older is a
    /// superseded request whose response must be discarded.
    pub latest_ticket: u64,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Terminal height in character cells.
    pub rows: usize,

    /// Terminal width in character cells.
    pub cols: usize,
}

impl AppState {
    /// Creates a new application state with the given theme.
    ///
    /// Starts idle with an empty query and a default 80x24 viewport; the
    /// runtime updates the viewport before the first frame.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cinescope::app::AppState;
    /// use cinescope::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert!(state.query.is_empty());
    /// assert_eq!(state.page, 1);
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            input: String::new(),
            input_mode: InputMode::Browse,
            page: 1,
            status: SearchStatus::Idle,
            results: vec![],
            total_pages: 0,
            total_results: 0,
            error_message: None,
            selected_index: 0,
            overlay: None,
            latest_ticket: 0,
            theme,
            rows: 24,
            cols: 80,
        }
    }

    /// Records the terminal size used for layout and hit-testing.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Mints the ticket for a new request and makes it the newest.
    ///
    /// Any outcome carrying an older ticket is stale from this point on.
    pub fn issue_ticket(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Clears everything back to the start screen.
    ///
    /// Also advances the ticket so an outcome from a request that was still
    /// in flight cannot resurrect results into the idle screen.
    pub fn reset_to_idle(&mut self) {
        self.query.clear();
        self.results.clear();
        self.page = 1;
        self.total_pages = 0;
        self.total_results = 0;
        self.error_message = None;
        self.selected_index = 0;
        self.status = SearchStatus::Idle;
        self.overlay = None;
        self.latest_ticket += 1;
    }

    /// Returns a reference to the currently selected movie, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.results.get(self.selected_index)
    }

    /// True when the body of the screen is the result grid.
    ///
    /// The grid shows for a successful page and keeps showing while the next
    /// page loads behind it. Idle, first-load, empty, and error states render
    /// a notice instead.
    #[must_use]
    pub fn showing_grid(&self) -> bool {
        !self.results.is_empty()
            && matches!(self.status, SearchStatus::Success | SearchStatus::Loading)
    }

    /// Moves the selection one card row down, clamping at the last card.
    ///
    /// A partial last row is reachable from any column above it; moving down
    /// from the last row is a no-op.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let columns = self.grid_columns();
        let last = self.results.len() - 1;
        let candidate = self.selected_index + columns;
        if candidate <= last {
            self.selected_index = candidate;
        } else if self.selected_index / columns < last / columns {
            self.selected_index = last;
        }
    }

    /// Moves the selection one card row up, stopping at the first row.
    pub fn move_selection_up(&mut self) {
        let columns = self.grid_columns();
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Moves the selection one card left, stopping at the first card.
    pub fn move_selection_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Moves the selection one card right, stopping at the last card.
    pub fn move_selection_right(&mut self) {
        if !self.results.is_empty() && self.selected_index + 1 < self.results.len() {
            self.selected_index += 1;
        }
    }

    /// Computes a renderable UI view model from current state.
    ///
    /// Transforms application state into a structured representation for
    /// rendering: header and footer text, the optional search box, the body
    /// (notice screen or windowed card grid), the pager, and the overlay.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cinescope::app::AppState;
    /// use cinescope::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// let viewmodel = state.compute_viewmodel();
    /// assert!(viewmodel.pager.is_none());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        let body = if self.showing_grid() {
            BodyView::Grid(self.compute_grid())
        } else {
            BodyView::Notice(self.compute_notice())
        };

        let pager = if self.showing_grid() && self.total_pages > 1 {
            Some(PagerModel {
                slots: layout::pager_slots(self.total_pages, self.page),
                active_page: self.page,
            })
        } else {
            None
        };

        UiViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            body,
            pager,
            overlay: self.compute_overlay(),
        }
    }

    /// Computes the visible grid window and its cards.
    fn compute_grid(&self) -> GridView {
        let grid = GridLayout::compute(
            self.rows,
            self.cols,
            self.results.len(),
            self.selected_index,
            self.input_mode == InputMode::Editing,
        );

        let cards = (0..grid.visible_count)
            .map(|slot| {
                let index = grid.absolute_index(slot);
                let movie = &self.results[index];
                CardItem {
                    title: helpers::truncate_with_ellipsis(&movie.title, CARD_INNER_WIDTH),
                    year_label: movie
                        .release_year()
                        .map_or_else(|| "n/a".to_string(), |year| year.to_string()),
                    rating_label: movie.rating_label(),
                    is_selected: index == self.selected_index,
                }
            })
            .collect();

        GridView {
            cards,
            layout: grid,
            loading: self.status == SearchStatus::Loading,
        }
    }

    /// Computes the full-screen notice for non-grid states.
    fn compute_notice(&self) -> NoticeView {
        match self.status {
            SearchStatus::Idle => NoticeView {
                message: IDLE_MESSAGE.to_string(),
                subtitle: "press / and type a title, then enter".to_string(),
                tone: NoticeTone::Info,
            },
            SearchStatus::Loading => NoticeView {
                message: LOADING_MESSAGE.to_string(),
                subtitle: String::new(),
                tone: NoticeTone::Loading,
            },
            SearchStatus::Error => NoticeView {
                message: ERROR_MESSAGE.to_string(),
                subtitle: self.error_message.clone().unwrap_or_default(),
                tone: NoticeTone::Error,
            },
            // The handler maps zero-result pages to Empty, so Success never
            // reaches a notice; it falls through to the same screen if it
            // ever does.
            SearchStatus::Empty | SearchStatus::Success => NoticeView {
                message: EMPTY_MESSAGE.to_string(),
                subtitle: "try a different title".to_string(),
                tone: NoticeTone::Info,
            },
        }
    }

    /// Computes the detail overlay content, when one is open.
    fn compute_overlay(&self) -> Option<OverlayModel> {
        self.overlay.as_ref().map(|movie| {
            let release_label = movie
                .release_date
                .as_deref()
                .filter(|date| !date.trim().is_empty())
                .map_or_else(
                    || "Release date: unknown".to_string(),
                    |date| format!("Release date: {date}"),
                );

            OverlayModel {
                title: movie.title.clone(),
                release_label,
                rating_label: format!("Rating: {}", movie.rating_label()),
                image_url: resolve_image(movie.backdrop_path.as_deref(), ImageSize::Backdrop),
                overview: movie.overview.clone(),
                rect: layout::overlay_rect(self.rows, self.cols),
            }
        })
    }

    /// Computes the header title for the current query and phase.
    fn compute_header(&self) -> HeaderInfo {
        let title = if self.query.is_empty() {
            " cinescope ".to_string()
        } else if matches!(self.status, SearchStatus::Success | SearchStatus::Empty) {
            format!(" cinescope: {} ({} found) ", self.query, self.total_results)
        } else {
            format!(" cinescope: {} ", self.query)
        };
        HeaderInfo { title }
    }

    /// Computes footer keybinding hints for the current mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.overlay.is_some() {
            "ESC or click outside: close".to_string()
        } else {
            match self.input_mode {
                InputMode::Editing => {
                    "Enter: search  ESC: cancel  Type to edit the query".to_string()
                }
                InputMode::Browse if self.showing_grid() => {
                    "h/j/k/l or arrows: move  n/p: page  Enter: details  /: search  q: quit"
                        .to_string()
                }
                InputMode::Browse => "/: search  q: quit".to_string(),
            }
        };
        FooterInfo { keybindings }
    }

    /// Computes search box state if the query editor is open.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.input_mode == InputMode::Editing {
            Some(SearchBarInfo {
                buffer: self.input.clone(),
            })
        } else {
            None
        }
    }

    /// Grid column count for the current viewport.
    fn grid_columns(&self) -> usize {
        GridLayout::compute(
            self.rows,
            self.cols,
            self.results.len(),
            self.selected_index,
            self.input_mode == InputMode::Editing,
        )
        .columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PLACEHOLDER_IMAGE_URL;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: format!("{title} overview"),
            release_date: Some("1995-12-15".to_string()),
            vote_average: 7.9,
            poster_path: Some(format!("/{id}.jpg")),
            backdrop_path: None,
        }
    }

    fn state_with_results(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.set_viewport(30, 120);
        state.query = "heat".to_string();
        state.status = SearchStatus::Success;
        state.results = (0..count).map(|i| movie(i as u64, "Heat")).collect();
        state.total_pages = 1;
        state.total_results = count as u32;
        state
    }

    #[test]
    fn new_state_renders_idle_notice() {
        let state = AppState::new(Theme::default());
        assert_eq!(state.status, SearchStatus::Idle);

        let vm = state.compute_viewmodel();
        match vm.body {
            BodyView::Notice(notice) => {
                assert_eq!(notice.message, IDLE_MESSAGE);
                assert_eq!(notice.tone, NoticeTone::Info);
            }
            BodyView::Grid(_) => panic!("idle state must not render a grid"),
        }
        assert!(vm.pager.is_none());
        assert!(vm.overlay.is_none());
    }

    #[test]
    fn header_counts_results_after_success() {
        let state = state_with_results(3);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.title, " cinescope: heat (3 found) ");
    }

    #[test]
    fn fresh_load_renders_loading_notice() {
        let mut state = AppState::new(Theme::default());
        state.query = "heat".to_string();
        state.status = SearchStatus::Loading;

        let vm = state.compute_viewmodel();
        match vm.body {
            BodyView::Notice(notice) => {
                assert_eq!(notice.message, LOADING_MESSAGE);
                assert_eq!(notice.tone, NoticeTone::Loading);
            }
            BodyView::Grid(_) => panic!("first load has nothing to show in a grid"),
        }
    }

    #[test]
    fn page_change_keeps_grid_and_marks_it_loading() {
        let mut state = state_with_results(6);
        state.total_pages = 4;
        state.status = SearchStatus::Loading;

        let vm = state.compute_viewmodel();
        match vm.body {
            BodyView::Grid(grid) => {
                assert!(grid.loading);
                assert_eq!(grid.cards.len(), 6);
            }
            BodyView::Notice(_) => panic!("retained results must stay visible while loading"),
        }
        assert!(vm.pager.is_some());
    }

    #[test]
    fn error_notice_carries_failure_message() {
        let mut state = AppState::new(Theme::default());
        state.query = "heat".to_string();
        state.status = SearchStatus::Error;
        state.error_message = Some("Invalid API key.".to_string());

        let vm = state.compute_viewmodel();
        match vm.body {
            BodyView::Notice(notice) => {
                assert_eq!(notice.message, ERROR_MESSAGE);
                assert_eq!(notice.subtitle, "Invalid API key.");
                assert_eq!(notice.tone, NoticeTone::Error);
            }
            BodyView::Grid(_) => panic!("error state must not render a grid"),
        }
    }

    #[test]
    fn empty_status_renders_the_no_results_notice() {
        let mut state = AppState::new(Theme::default());
        state.query = "qqqqzzzz".to_string();
        state.status = SearchStatus::Empty;

        let vm = state.compute_viewmodel();
        match vm.body {
            BodyView::Notice(notice) => {
                assert_eq!(notice.message, EMPTY_MESSAGE);
                assert_eq!(notice.tone, NoticeTone::Info);
            }
            BodyView::Grid(_) => panic!("empty state must not render a grid"),
        }
        assert!(vm.pager.is_none());
    }

    #[test]
    fn pager_appears_only_beyond_one_page() {
        let mut state = state_with_results(3);
        assert!(state.compute_viewmodel().pager.is_none());

        state.total_pages = 7;
        state.page = 2;
        let pager = state.compute_viewmodel().pager.expect("pager for 7 pages");
        assert_eq!(pager.active_page, 2);
        assert!(!pager.slots.is_empty());
    }

    #[test]
    fn grid_marks_selected_card() {
        let mut state = state_with_results(5);
        state.selected_index = 2;

        let vm = state.compute_viewmodel();
        match vm.body {
            BodyView::Grid(grid) => {
                assert!(grid.cards[2].is_selected);
                assert!(!grid.cards[0].is_selected);
                assert_eq!(grid.cards[2].year_label, "1995");
                assert_eq!(grid.cards[2].rating_label, "7.9/10");
            }
            BodyView::Notice(_) => panic!("expected a grid"),
        }
    }

    #[test]
    fn overlay_resolves_placeholder_for_missing_backdrop() {
        let mut state = state_with_results(1);
        state.overlay = Some(state.results[0].clone());

        let overlay = state.compute_viewmodel().overlay.expect("overlay is open");
        assert_eq!(overlay.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(overlay.release_label, "Release date: 1995-12-15");
        assert_eq!(overlay.rating_label, "Rating: 7.9/10");
    }

    #[test]
    fn selection_moves_by_grid_rows_and_clamps() {
        // 120 columns fit 4 cards per row; 6 results make rows of 4 and 2.
        let mut state = state_with_results(6);

        state.move_selection_right();
        assert_eq!(state.selected_index, 1);

        state.move_selection_down();
        assert_eq!(state.selected_index, 5);

        state.move_selection_down();
        assert_eq!(state.selected_index, 5);

        state.move_selection_up();
        assert_eq!(state.selected_index, 1);

        state.move_selection_up();
        assert_eq!(state.selected_index, 1);

        state.move_selection_left();
        assert_eq!(state.selected_index, 0);

        state.move_selection_left();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn partial_last_row_is_reachable_from_any_column() {
        let mut state = state_with_results(6);
        state.selected_index = 3;

        state.move_selection_down();
        assert_eq!(state.selected_index, 5);
    }

    #[test]
    fn reset_to_idle_invalidates_inflight_tickets() {
        let mut state = state_with_results(3);
        let ticket = state.issue_ticket();

        state.reset_to_idle();
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.query.is_empty());
        assert!(state.results.is_empty());
        assert!(state.latest_ticket > ticket);
    }
}
