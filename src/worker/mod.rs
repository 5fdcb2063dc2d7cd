//! Background fetch execution for catalog searches.
//!
//! This module runs catalog requests off the UI event loop so input stays
//! responsive while pages load. Each submitted request is spawned as its own
//! Tokio task; outcomes come back over an mpsc channel tagged with the ticket
//! that was current when the request was issued, which lets the event handler
//! discard responses that arrive after a newer request superseded them.
//!
//! # Architecture
//!
//! - `messages`: Request/outcome types exchanged with the event loop
//! - `handler`: Task spawning and outcome delivery

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{FetchOutcome, FetchRequest};
