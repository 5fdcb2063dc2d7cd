//! Search lifecycle and input mode state types.
//!
//! This module defines the two small state machines that drive the UI: the
//! search lifecycle phase, which selects what the body of the screen shows,
//! and the input mode, which selects which keybindings are active.
//!
//! # State Machine
//!
//! The search phase moves through a fixed lifecycle:
//! - **Idle**: no committed query; holds exactly while the query is empty
//! - **Loading**: a request is in flight for the current query and page
//! - **Success**: the current page resolved with at least one result
//! - **Empty**: the current query resolved with zero results
//! - **Error**: the most recent request failed
//!
//! Input runs in one of two modes:
//! - **Browse**: grid navigation and paging
//! - **Editing**: the search field owns the keyboard

/// Lifecycle phase of the current search.
///
/// Determines what the body of the screen renders. The phase is `Idle` if and
/// only if the committed query is empty; every transition that clears the
/// query also resets the phase, and every committed query immediately leaves
/// `Idle` for `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No query committed. The body shows the start screen.
    Idle,

    /// A request for the current query and page is in flight.
    ///
    /// When results from a previous page are still on screen they stay
    /// visible, dimmed behind a loading banner. A fresh query clears them
    /// first, so the full-screen loading message shows instead.
    Loading,

    /// The current page resolved with at least one result.
    Success,

    /// The query resolved, but matched nothing. The body shows a notice and a
    /// notification is raised exactly once per resolution.
    Empty,

    /// The most recent request failed. The failure message is kept in state
    /// for the error screen and raised once as a notification.
    Error,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and which footer hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Grid navigation and command mode.
    ///
    /// Available keybindings: arrows or h/j/k/l (move selection), n/p (page),
    /// enter (open details), / (edit query), q (quit).
    Browse,

    /// The search field owns the keyboard.
    ///
    /// Printable characters edit the live buffer, enter commits it as the new
    /// query, escape abandons the edit and keeps the committed query.
    Editing,
}
