//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and fetch outcomes, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal runtime or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `SelectionUp/Down/Left/Right`, `NextPage`, `PrevPage`
//! - **Input**: `Char`, `Backspace`, `SubmitSearch`, `CancelSearch`
//! - **Mouse**: `Click`, `PageClicked`
//! - **Overlay**: `OpenDetails`, `DismissOverlay`
//! - **System**: `Resized`, `Quit`
//! - **Worker**: `FetchFinished` with the tagged outcome
//!
//! # Request ordering
//!
//! Every request mints a fresh ticket via [`AppState::issue_ticket`], and the
//! outcome echoes it. `FetchFinished` applies an outcome only when its ticket
//! is still the newest, so responses arriving out of order can never clobber
//! the results of a newer request.

use crate::app::phase::{InputMode, SearchStatus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::ui::layout::{self, GridLayout, PagerClick, PagerLayout};
use crate::worker::{FetchOutcome, FetchRequest};

/// Notification raised when a query resolves with zero results.
pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";

/// Events triggered by user input, terminal changes, or fetch outcomes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug)]
pub enum Event {
    /// Moves the selection one card row up.
    SelectionUp,
    /// Moves the selection one card row down.
    SelectionDown,
    /// Moves the selection one card left.
    SelectionLeft,
    /// Moves the selection one card right.
    SelectionRight,

    /// Requests the next page of the current query.
    NextPage,
    /// Requests the previous page of the current query.
    PrevPage,
    /// Requests a specific page chosen on the page selector.
    ///
    /// `index` is the zero-based value a page selector reports; the handler
    /// owns the translation to the one-based page used internally.
    PageClicked {
        /// Zero-based page index.
        index: u32,
    },

    /// Opens the query editor.
    OpenSearch,
    /// Appends a character to the edit buffer.
    Char(char),
    /// Removes the last character from the edit buffer.
    Backspace,
    /// Commits the edit buffer as the new query.
    SubmitSearch,
    /// Abandons the edit, keeping the committed query.
    CancelSearch,

    /// Opens the detail overlay for the selected movie.
    OpenDetails,
    /// Closes the detail overlay.
    DismissOverlay,

    /// A left mouse click at 1-based screen coordinates.
    ///
    /// Resolved against the same layout functions the renderer uses: the
    /// overlay backdrop, the pager cells, then the grid cards.
    Click {
        /// 1-based column.
        x: u16,
        /// 1-based row.
        y: u16,
    },

    /// The terminal was resized.
    Resized {
        /// New height in character cells.
        rows: usize,
        /// New width in character cells.
        cols: usize,
    },

    /// A background fetch completed, successfully or not.
    FetchFinished(FetchOutcome),

    /// Exits the application.
    Quit,
}

impl Event {
    /// Short name used as the span field for tracing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectionUp => "selection_up",
            Self::SelectionDown => "selection_down",
            Self::SelectionLeft => "selection_left",
            Self::SelectionRight => "selection_right",
            Self::NextPage => "next_page",
            Self::PrevPage => "prev_page",
            Self::PageClicked { .. } => "page_clicked",
            Self::OpenSearch => "open_search",
            Self::Char(_) => "char",
            Self::Backspace => "backspace",
            Self::SubmitSearch => "submit_search",
            Self::CancelSearch => "cancel_search",
            Self::OpenDetails => "open_details",
            Self::DismissOverlay => "dismiss_overlay",
            Self::Click { .. } => "click",
            Self::Resized { .. } => "resized",
            Self::FetchFinished(_) => "fetch_finished",
            Self::Quit => "quit",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of a re-render flag and the actions to execute in sequence. The
/// action list is empty for events without side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods. The current transitions are
/// infallible; the `Result` keeps the signature stable as transitions grow.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event name.
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::SelectionUp => move_selection(state, AppState::move_selection_up),
        Event::SelectionDown => move_selection(state, AppState::move_selection_down),
        Event::SelectionLeft => move_selection(state, AppState::move_selection_left),
        Event::SelectionRight => move_selection(state, AppState::move_selection_right),

        Event::NextPage => change_page(state, state.page.saturating_add(1)),
        Event::PrevPage => change_page(state, state.page.saturating_sub(1).max(1)),
        Event::PageClicked { index } => change_page(state, index.saturating_add(1)),

        Event::OpenSearch => {
            if state.overlay.is_some() {
                return Ok((false, vec![]));
            }
            tracing::debug!("opening query editor");
            state.input_mode = InputMode::Editing;
            state.input.clear();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.input.push(*c);
            tracing::trace!(buffer = %state.input, "edit buffer updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.input.pop();
            Ok((true, vec![]))
        }
        Event::CancelSearch => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.query, "edit abandoned");
            state.input_mode = InputMode::Browse;
            state.input.clear();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => submit_query(state),

        Event::OpenDetails => {
            if state.overlay.is_some() || !state.showing_grid() {
                return Ok((false, vec![]));
            }
            let Some(movie) = state.selected_movie().cloned() else {
                return Ok((false, vec![]));
            };
            tracing::debug!(movie_id = movie.id, title = %movie.title, "opening details");
            state.overlay = Some(movie);
            Ok((true, vec![]))
        }
        Event::DismissOverlay => {
            if state.overlay.take().is_some() {
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }

        Event::Click { x, y } => handle_click(state, usize::from(*x), usize::from(*y)),

        Event::Resized { rows, cols } => {
            state.set_viewport(*rows, *cols);
            Ok((true, vec![]))
        }

        Event::FetchFinished(outcome) => apply_fetch_outcome(state, outcome),

        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Applies one selection movement unless input is locked.
///
/// Movement is ignored while the overlay is open and when no grid is shown.
fn move_selection(
    state: &mut AppState,
    step: fn(&mut AppState),
) -> Result<(bool, Vec<Action>)> {
    if state.overlay.is_some() || !state.showing_grid() {
        return Ok((false, vec![]));
    }
    step(state);
    Ok((true, vec![]))
}

/// Commits the edit buffer as the query and starts the first fetch.
///
/// - An empty buffer never issues a request: it returns to browsing, and
///   clears everything back to idle when a query was committed before.
/// - A buffer identical to the committed query changes nothing beyond
///   closing the editor; the shown results are already for that query.
/// - A genuinely new query resets to page 1, drops the old results, and
///   issues a fetch under a fresh ticket.
fn submit_query(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let submitted = state.input.trim().to_string();
    state.input_mode = InputMode::Browse;

    if submitted.is_empty() {
        if state.query.is_empty() {
            return Ok((true, vec![]));
        }
        tracing::debug!("empty query submitted, returning to idle");
        state.reset_to_idle();
        return Ok((true, vec![]));
    }

    if submitted == state.query {
        tracing::debug!(query = %submitted, "query unchanged, skipping fetch");
        return Ok((true, vec![]));
    }

    tracing::debug!(query = %submitted, "new query committed");
    state.query = submitted;
    state.page = 1;
    state.results.clear();
    state.total_pages = 0;
    state.total_results = 0;
    state.error_message = None;
    state.selected_index = 0;
    state.overlay = None;
    state.status = SearchStatus::Loading;

    let ticket = state.issue_ticket();
    Ok((
        true,
        vec![Action::Fetch(FetchRequest {
            ticket,
            query: state.query.clone(),
            page: 1,
        })],
    ))
}

/// Moves to `target` page of the current query.
///
/// Page changes keep the current results on screen while the new page loads;
/// only the status flips to loading. Requests are suppressed while idle,
/// while the overlay is open, and when the target equals the current page
/// after clamping to the known page range.
fn change_page(state: &mut AppState, target: u32) -> Result<(bool, Vec<Action>)> {
    if state.overlay.is_some() || state.query.is_empty() {
        return Ok((false, vec![]));
    }

    let target = target.clamp(1, state.total_pages.max(1));
    if target == state.page {
        return Ok((false, vec![]));
    }

    tracing::debug!(from = state.page, to = target, "changing page");
    state.page = target;
    state.status = SearchStatus::Loading;
    state.error_message = None;

    let ticket = state.issue_ticket();
    Ok((
        true,
        vec![Action::Fetch(FetchRequest {
            ticket,
            query: state.query.clone(),
            page: target,
        })],
    ))
}

/// Applies a completed fetch, unless a newer request superseded it.
fn apply_fetch_outcome(
    state: &mut AppState,
    outcome: &FetchOutcome,
) -> Result<(bool, Vec<Action>)> {
    if outcome.ticket != state.latest_ticket {
        tracing::debug!(
            ticket = outcome.ticket,
            latest = state.latest_ticket,
            query = %outcome.query,
            "discarding stale fetch outcome"
        );
        return Ok((false, vec![]));
    }

    match &outcome.result {
        Ok(page) if page.results.is_empty() => {
            tracing::debug!(query = %outcome.query, "query matched nothing");
            state.status = SearchStatus::Empty;
            state.results.clear();
            state.total_pages = page.total_pages;
            state.total_results = page.total_results;
            state.selected_index = 0;
            Ok((true, vec![Action::Notify(NO_RESULTS_MESSAGE.to_string())]))
        }
        Ok(page) => {
            tracing::debug!(
                query = %outcome.query,
                page = outcome.page,
                results = page.results.len(),
                "applying fetched page"
            );
            state.status = SearchStatus::Success;
            state.results = page.results.clone();
            state.total_pages = page.total_pages;
            state.total_results = page.total_results;
            state.error_message = None;
            if state.selected_index >= state.results.len() {
                state.selected_index = state.results.len() - 1;
            }
            Ok((true, vec![]))
        }
        Err(error) => {
            let message = error.to_string();
            tracing::debug!(query = %outcome.query, error = %message, "fetch failed");
            state.status = SearchStatus::Error;
            state.results.clear();
            state.selected_index = 0;
            state.error_message = Some(message.clone());
            Ok((true, vec![Action::Notify(message)]))
        }
    }
}

/// Resolves a left click against the current layout.
///
/// Precedence mirrors the visual stacking order: the overlay swallows every
/// click (dismissing on the backdrop), then the pager row, then the grid
/// cards. Clicks while the query editor is open are ignored.
fn handle_click(state: &mut AppState, x: usize, y: usize) -> Result<(bool, Vec<Action>)> {
    if state.overlay.is_some() {
        let rect = layout::overlay_rect(state.rows, state.cols);
        if rect.contains(x, y) {
            return Ok((false, vec![]));
        }
        tracing::debug!("overlay dismissed by backdrop click");
        state.overlay = None;
        return Ok((true, vec![]));
    }

    if state.input_mode == InputMode::Editing || !state.showing_grid() {
        return Ok((false, vec![]));
    }

    if state.total_pages > 1 {
        let slots = layout::pager_slots(state.total_pages, state.page);
        let pager = PagerLayout::compute(&slots, state.rows, state.cols);
        match pager.hit(x, y) {
            Some(PagerClick::Prev) => {
                return change_page(state, state.page.saturating_sub(1).max(1));
            }
            Some(PagerClick::Next) => {
                return change_page(state, state.page.saturating_add(1));
            }
            Some(PagerClick::Page(index)) => {
                return change_page(state, index as u32 + 1);
            }
            None => {}
        }
    }

    let grid = GridLayout::compute(
        state.rows,
        state.cols,
        state.results.len(),
        state.selected_index,
        false,
    );
    if let Some(slot) = grid.hit(x, y) {
        let index = grid.absolute_index(slot);
        if let Some(movie) = state.results.get(index).cloned() {
            tracing::debug!(movie_id = movie.id, "card clicked");
            state.selected_index = index;
            state.overlay = Some(movie);
            return Ok((true, vec![]));
        }
    }

    Ok((false, vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CinescopeError, Movie, SearchPage};
    use crate::ui::theme::Theme;

    fn test_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.set_viewport(30, 120);
        state
    }

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: format!("{title} overview"),
            release_date: Some("2022-03-01".to_string()),
            vote_average: 7.7,
            poster_path: Some(format!("/{id}.jpg")),
            backdrop_path: None,
        }
    }

    fn page_of(titles: &[&str], page: u32, total_pages: u32) -> SearchPage {
        SearchPage {
            page,
            results: titles
                .iter()
                .enumerate()
                .map(|(i, title)| movie(i as u64 + 1, title))
                .collect(),
            total_pages,
            total_results: total_pages * titles.len() as u32,
        }
    }

    fn commit_query(state: &mut AppState, text: &str) -> Vec<Action> {
        handle_event(state, &Event::OpenSearch).unwrap();
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(state, &Event::SubmitSearch).unwrap();
        actions
    }

    fn single_fetch(actions: &[Action]) -> FetchRequest {
        match actions {
            [Action::Fetch(request)] => request.clone(),
            other => panic!("expected exactly one fetch action, got {other:?}"),
        }
    }

    fn deliver(
        state: &mut AppState,
        request: &FetchRequest,
        result: crate::domain::Result<SearchPage>,
    ) -> Vec<Action> {
        let outcome = FetchOutcome::for_request(request, result);
        let (_, actions) = handle_event(state, &Event::FetchFinished(outcome)).unwrap();
        actions
    }

    #[test]
    fn empty_submit_while_idle_issues_nothing() {
        let mut state = test_state();
        let actions = commit_query(&mut state, "   ");

        assert!(actions.is_empty());
        assert_eq!(state.status, SearchStatus::Idle);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.latest_ticket, 0);
    }

    #[test]
    fn committing_a_query_resets_page_and_fetches_page_one() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B"], 1, 3)));

        // Move to page 3, then search for something new.
        let (_, actions) = handle_event(&mut state, &Event::PageClicked { index: 2 }).unwrap();
        let request = single_fetch(&actions);
        deliver(&mut state, &request, Ok(page_of(&["E", "F"], 3, 3)));
        assert_eq!(state.page, 3);

        let request = single_fetch(&commit_query(&mut state, "superman"));
        assert_eq!(request.page, 1);
        assert_eq!(request.query, "superman");
        assert_eq!(state.page, 1);
        assert_eq!(state.status, SearchStatus::Loading);
        assert!(state.results.is_empty());
    }

    #[test]
    fn resubmitting_the_same_query_is_a_noop() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B"], 1, 3)));

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        let request = single_fetch(&actions);
        deliver(&mut state, &request, Ok(page_of(&["C", "D"], 2, 3)));

        let actions = commit_query(&mut state, "batman");
        assert!(actions.is_empty());
        assert_eq!(state.page, 2, "page survives a duplicate submit");
        assert_eq!(state.status, SearchStatus::Success);
        assert_eq!(state.results.len(), 2);
    }

    #[test]
    fn stale_outcome_is_discarded_after_a_newer_request() {
        let mut state = test_state();
        let first = single_fetch(&commit_query(&mut state, "alien"));
        let second = single_fetch(&commit_query(&mut state, "blade runner"));
        assert!(second.ticket > first.ticket);

        // The older response arrives last and must not apply.
        let actions = deliver(&mut state, &second, Ok(page_of(&["Blade Runner"], 1, 1)));
        assert!(actions.is_empty());
        assert_eq!(state.results[0].title, "Blade Runner");

        let actions = deliver(&mut state, &first, Ok(page_of(&["Alien", "Aliens"], 1, 1)));
        assert!(actions.is_empty());
        assert_eq!(state.status, SearchStatus::Success);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].title, "Blade Runner");
    }

    #[test]
    fn zero_results_raise_exactly_one_notification() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "qqqqzzzz"));
        let actions = deliver(&mut state, &request, Ok(page_of(&[], 1, 0)));

        assert_eq!(actions, vec![Action::Notify(NO_RESULTS_MESSAGE.to_string())]);
        assert_eq!(state.status, SearchStatus::Empty);
        assert!(state.results.is_empty());
        assert!(state.compute_viewmodel().pager.is_none());
    }

    #[test]
    fn failed_fetch_surfaces_message_and_clears_grid() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        let actions = deliver(
            &mut state,
            &request,
            Err(CinescopeError::Request("Invalid API key.".to_string())),
        );

        assert_eq!(actions, vec![Action::Notify("Invalid API key.".to_string())]);
        assert_eq!(state.status, SearchStatus::Error);
        assert_eq!(state.error_message.as_deref(), Some("Invalid API key."));
        assert!(state.results.is_empty());
    }

    #[test]
    fn first_page_scenario_builds_grid_and_pager() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        assert_eq!(request.page, 1);

        deliver(&mut state, &request, Ok(page_of(&["The Batman", "Batman"], 1, 3)));

        let vm = state.compute_viewmodel();
        match vm.body {
            crate::ui::viewmodel::BodyView::Grid(grid) => assert_eq!(grid.cards.len(), 2),
            crate::ui::viewmodel::BodyView::Notice(_) => panic!("expected a grid"),
        }
        let pager = vm.pager.expect("three pages need a pager");
        assert_eq!(pager.active_page, 1);
        assert_eq!(
            pager
                .slots
                .iter()
                .filter(|slot| matches!(slot, layout::PagerSlot::Page(_)))
                .count(),
            3
        );
    }

    #[test]
    fn pager_click_translates_zero_based_selection() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B"], 1, 3)));

        // Click the cell displaying page 3; the hit reports zero-based 2.
        let slots = layout::pager_slots(state.total_pages, state.page);
        let pager = PagerLayout::compute(&slots, state.rows, state.cols);
        let cell = pager.cell_for_page(3).expect("page 3 cell");
        let (_, actions) = handle_event(
            &mut state,
            &Event::Click {
                x: cell.col as u16,
                y: pager.row as u16,
            },
        )
        .unwrap();

        let request = single_fetch(&actions);
        assert_eq!(request.page, 3);
        assert_eq!(request.query, "batman");

        deliver(&mut state, &request, Ok(page_of(&["E", "F"], 3, 3)));
        assert_eq!(state.page, 3);
        assert_eq!(state.compute_viewmodel().pager.unwrap().active_page, 3);
    }

    #[test]
    fn page_change_retains_results_while_loading() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B"], 1, 3)));

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        single_fetch(&actions);

        assert_eq!(state.status, SearchStatus::Loading);
        assert_eq!(state.results.len(), 2, "previous page stays visible");
        match state.compute_viewmodel().body {
            crate::ui::viewmodel::BodyView::Grid(grid) => assert!(grid.loading),
            crate::ui::viewmodel::BodyView::Notice(_) => panic!("grid must survive page loads"),
        }
    }

    #[test]
    fn paging_is_suppressed_while_idle() {
        let mut state = test_state();
        for event in [
            Event::NextPage,
            Event::PrevPage,
            Event::PageClicked { index: 4 },
        ] {
            let (rendered, actions) = handle_event(&mut state, &event).unwrap();
            assert!(!rendered);
            assert!(actions.is_empty());
        }
        assert_eq!(state.latest_ticket, 0);
    }

    #[test]
    fn paging_clamps_to_the_known_range() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A"], 1, 3)));

        let (_, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
        assert!(actions.is_empty(), "already on the first page");

        let (_, actions) = handle_event(&mut state, &Event::PageClicked { index: 99 }).unwrap();
        let request = single_fetch(&actions);
        assert_eq!(request.page, 3, "clamped to the last page");
    }

    #[test]
    fn enter_opens_overlay_and_escape_dismisses_once() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B"], 1, 1)));

        let (rendered, _) = handle_event(&mut state, &Event::OpenDetails).unwrap();
        assert!(rendered);
        assert!(state.overlay.is_some());

        let (rendered, _) = handle_event(&mut state, &Event::DismissOverlay).unwrap();
        assert!(rendered);
        assert!(state.overlay.is_none());

        let (rendered, actions) = handle_event(&mut state, &Event::DismissOverlay).unwrap();
        assert!(!rendered, "second dismissal is a no-op");
        assert!(actions.is_empty());
    }

    #[test]
    fn backdrop_click_dismisses_but_content_click_does_not() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A"], 1, 1)));
        handle_event(&mut state, &Event::OpenDetails).unwrap();

        let rect = layout::overlay_rect(state.rows, state.cols);
        let inside = Event::Click {
            x: rect.col as u16,
            y: rect.row as u16,
        };
        let (rendered, _) = handle_event(&mut state, &inside).unwrap();
        assert!(!rendered);
        assert!(state.overlay.is_some(), "content clicks never dismiss");

        let (rendered, _) = handle_event(&mut state, &Event::Click { x: 1, y: 1 }).unwrap();
        assert!(rendered);
        assert!(state.overlay.is_none(), "backdrop click dismisses");
    }

    #[test]
    fn input_is_locked_while_overlay_is_open() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B", "C"], 1, 3)));
        handle_event(&mut state, &Event::OpenDetails).unwrap();

        let before = state.selected_index;
        handle_event(&mut state, &Event::SelectionRight).unwrap();
        assert_eq!(state.selected_index, before);

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(actions.is_empty(), "paging is locked under the overlay");

        let (rendered, _) = handle_event(&mut state, &Event::OpenSearch).unwrap();
        assert!(!rendered);
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn empty_submit_clears_results_back_to_idle() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B"], 1, 3)));

        let actions = commit_query(&mut state, "");
        assert!(actions.is_empty());
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.query.is_empty());
        assert!(state.results.is_empty());
    }

    #[test]
    fn clearing_to_idle_invalidates_inflight_outcomes() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));

        // Clear the query before the response lands.
        commit_query(&mut state, "");
        let actions = deliver(&mut state, &request, Ok(page_of(&["A"], 1, 1)));

        assert!(actions.is_empty());
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.results.is_empty(), "idle screen must stay empty");
    }

    #[test]
    fn cancel_keeps_the_committed_query() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A"], 1, 1)));

        handle_event(&mut state, &Event::OpenSearch).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::CancelSearch).unwrap();

        assert_eq!(state.query, "batman");
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.latest_ticket, 1, "no new request was issued");
    }

    #[test]
    fn card_click_selects_and_opens_details() {
        let mut state = test_state();
        let request = single_fetch(&commit_query(&mut state, "batman"));
        deliver(&mut state, &request, Ok(page_of(&["A", "B", "C"], 1, 1)));

        let grid = GridLayout::compute(state.rows, state.cols, 3, 0, false);
        let rect = grid.slot_rect(2);
        let (rendered, _) = handle_event(
            &mut state,
            &Event::Click {
                x: rect.col as u16,
                y: rect.row as u16,
            },
        )
        .unwrap();

        assert!(rendered);
        assert_eq!(state.selected_index, 2);
        assert_eq!(state.overlay.as_ref().map(|m| m.title.as_str()), Some("C"));
    }

    #[test]
    fn resize_updates_the_viewport() {
        let mut state = test_state();
        let (rendered, _) = handle_event(&mut state, &Event::Resized { rows: 50, cols: 200 }).unwrap();
        assert!(rendered);
        assert_eq!((state.rows, state.cols), (50, 200));
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = test_state();
        let (rendered, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert!(!rendered);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
