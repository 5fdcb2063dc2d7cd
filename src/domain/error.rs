//! Error types for the cinescope application.
//!
//! This module defines the centralized error type [`CinescopeError`] and a type
//! alias [`Result`] for convenient error handling throughout the application.
//! All errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for cinescope operations.
///
/// This enum consolidates all error conditions that can occur while the
/// application runs, from catalog requests to I/O failures and configuration
/// issues. The catalog-facing variants (`Config`, `Request`, `Unknown`) carry
/// the exact text shown to the user in toasts and the error screen, so their
/// `Display` output is the message itself without a category prefix.
///
/// # Examples
///
/// ```
/// use cinescope::CinescopeError;
///
/// fn require_token(token: Option<&str>) -> Result<(), CinescopeError> {
///     match token {
///         Some(_) => Ok(()),
///         None => Err(CinescopeError::Config("TMDB token is not set".to_string())),
///     }
/// }
///
/// assert!(require_token(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum CinescopeError {
    /// Required configuration is missing or malformed.
    ///
    /// Raised before any network activity, for example when a search is
    /// attempted without an API token. The string is the user-facing message.
    #[error("{0}")]
    Config(String),

    /// The catalog rejected a request.
    ///
    /// Carries the `status_message` from the remote error payload when one was
    /// present, otherwise a generic fallback. The string is shown verbatim to
    /// the user.
    #[error("{0}")]
    Request(String),

    /// A request failed for reasons other than a rejection.
    ///
    /// Covers transport failures and malformed response bodies. The underlying
    /// cause is logged at the call site; the string carried here is the stable
    /// user-facing message.
    #[error("{0}")]
    Unknown(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or does not parse as a valid
    /// theme definition. The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for cinescope operations.
///
/// This is a type alias for `std::result::Result<T, CinescopeError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CinescopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_variants_display_without_prefix() {
        let error = CinescopeError::Request("Invalid API key.".to_string());
        assert_eq!(error.to_string(), "Invalid API key.");

        let error = CinescopeError::Unknown("An unexpected error occurred.".to_string());
        assert_eq!(error.to_string(), "An unexpected error occurred.");
    }

    #[test]
    fn io_variant_converts_and_prefixes() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = CinescopeError::from(io);
        assert!(matches!(error, CinescopeError::Io(_)));
        assert!(error.to_string().starts_with("IO error:"));
    }
}
