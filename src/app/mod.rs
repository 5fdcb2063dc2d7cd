//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal runtime (main.rs) and the domain/catalog/worker layers. It
//! implements the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Outcomes ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`phase`]: Search lifecycle and input mode state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use cinescope::app::{handle_event, AppState, Event};
//! use cinescope::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (rendered, actions) = handle_event(&mut state, &Event::OpenSearch)?;
//! assert!(rendered);
//! assert!(actions.is_empty());
//! # Ok::<(), cinescope::domain::CinescopeError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod phase;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, NO_RESULTS_MESSAGE};
pub use phase::{InputMode, SearchStatus};
pub use state::AppState;
