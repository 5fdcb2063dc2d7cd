//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information: truncation-ready labels, the grid window geometry, pager
//! slots, and the overlay content.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.
//! The grid and pager geometry embedded here comes from [`crate::ui::layout`],
//! the same functions the event handler uses for mouse hit-testing.

use crate::ui::layout::{GridLayout, PagerSlot, Rect};

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render one frame. The body is
/// either a full-screen notice (idle, first load, empty, error) or the card
/// grid; the pager and overlay are layered on top when present.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Search input box, present while the query editor is open.
    pub search_bar: Option<SearchBarInfo>,

    /// Main body: a notice screen or the result grid.
    pub body: BodyView,

    /// Page selector, present when the grid is shown and there is more than
    /// one page.
    pub pager: Option<PagerModel>,

    /// Detail overlay, drawn above everything else when open.
    pub overlay: Option<OverlayModel>,
}

/// Main body of the screen.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Full-screen message replacing the grid.
    Notice(NoticeView),

    /// The card grid with its window geometry.
    Grid(GridView),
}

/// Tone of a notice screen, selecting its accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Loading,
    Error,
}

/// Full-screen message shown instead of the grid.
#[derive(Debug, Clone)]
pub struct NoticeView {
    /// Primary message (e.g. "No movies found").
    pub message: String,

    /// Secondary explanatory text. May be empty.
    pub subtitle: String,

    /// Tone driving the accent color.
    pub tone: NoticeTone,
}

/// The visible window of the result grid.
#[derive(Debug, Clone)]
pub struct GridView {
    /// Cards in the visible window, in slot order.
    pub cards: Vec<CardItem>,

    /// Geometry the cards are placed with.
    pub layout: GridLayout,

    /// True while a page change is loading behind the retained results. The
    /// renderer dims the grid and shows the loading banner on the status row.
    pub loading: bool,
}

/// Display information for a single movie card.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Title, already truncated to the card width.
    pub title: String,

    /// Release year label ("1995" or "n/a").
    pub year_label: String,

    /// Rating label ("7.9/10").
    pub rating_label: String,

    /// Whether this card is currently selected.
    pub is_selected: bool,
}

/// Page selector state.
#[derive(Debug, Clone)]
pub struct PagerModel {
    /// Slot sequence to lay out, from [`crate::ui::layout::pager_slots`].
    pub slots: Vec<PagerSlot>,

    /// One-based page to highlight as active.
    pub active_page: u32,
}

/// Detail overlay content.
#[derive(Debug, Clone)]
pub struct OverlayModel {
    /// Movie title for the overlay heading.
    pub title: String,

    /// Release date line ("Release date: 1995-12-15" or "Release date: unknown").
    pub release_label: String,

    /// Rating line ("Rating: 7.9/10").
    pub rating_label: String,

    /// Resolved backdrop URL, placeholder included when artwork is missing.
    pub image_url: String,

    /// Plot summary. May be empty.
    pub overview: String,

    /// Content rectangle; clicks outside it dismiss the overlay.
    pub rect: Rect,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g. "n/p: page  /: search  q: quit").
    pub keybindings: String,
}

/// Search input box state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Live edit buffer, not yet committed as the query.
    pub buffer: String,
}
