//! Catalog access layer.
//!
//! Defines the [`CatalogClient`] abstraction the rest of the application
//! depends on, the TMDB-backed implementation, and helpers for turning the
//! catalog's relative image paths into full URLs.
//!
//! # Organization
//!
//! - [`tmdb`]: HTTP client for the TMDB search API
//! - [`images`]: Image URL resolution with a placeholder fallback

use async_trait::async_trait;

use crate::domain::{Result, SearchPage};

pub mod images;
pub mod tmdb;

pub use images::{resolve_image, ImageSize, PLACEHOLDER_IMAGE_URL};
pub use tmdb::{TmdbClient, DEFAULT_API_BASE};

/// Remote movie catalog capable of serving paginated title searches.
///
/// The application talks to the catalog exclusively through this trait so the
/// fetch worker can be exercised in tests with a scripted in-memory client.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Searches the catalog for `query` and returns the requested result page.
    ///
    /// Pages are one-based. Implementations must not mutate any shared state;
    /// concurrent calls with different arguments are expected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CinescopeError::Config`] when the client is not
    /// configured for network access, [`crate::CinescopeError::Request`] when
    /// the catalog rejects the request, and [`crate::CinescopeError::Unknown`]
    /// for transport failures or malformed responses.
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage>;
}
