//! Domain layer for the cinescope application.
//!
//! This module contains the core domain types, independent of terminal,
//! network, or infrastructure concerns: the movie model deserialized from
//! catalog responses and the application-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie model and search result pages
//!
//! # Examples
//!
//! ```
//! use cinescope::domain::{Movie, Result};
//!
//! fn best_rated(movies: &[Movie]) -> Result<Option<&Movie>> {
//!     Ok(movies
//!         .iter()
//!         .max_by(|a, b| a.vote_average.total_cmp(&b.vote_average)))
//! }
//! ```

pub mod error;
pub mod movie;

pub use error::{CinescopeError, Result};
pub use movie::{Movie, SearchPage};
