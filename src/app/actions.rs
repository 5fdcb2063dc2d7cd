//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! fetch outcomes. Actions bridge pure state transformations and effectful
//! operations like spawning catalog requests or raising notifications.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The runtime loop
//! in `main.rs` executes them in sequence: fetches go to the background
//! worker, notifications into the toast tray, and quit breaks the loop.

use crate::worker::FetchRequest;

/// Commands representing side effects to be executed by the runtime.
///
/// Actions are produced by the event handler and executed by the runtime
/// loop. They represent the boundary between pure state transformations and
/// effectful operations like network access and terminal teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submits a catalog search to the background fetch worker.
    ///
    /// Carries the ticket minted for the request so the eventual outcome can
    /// be matched against the newest ticket and stale responses discarded.
    Fetch(FetchRequest),

    /// Raises a transient notification toast.
    ///
    /// Used for zero-result searches and failed requests. The toast tray is
    /// owned by the runtime, not by application state, so notifications are
    /// fire-and-forget from the handler's point of view.
    Notify(String),

    /// Exits the application.
    ///
    /// Sent when the user explicitly requests to quit (pressing 'q' while
    /// browsing, or ctrl-c anywhere).
    Quit,
}
