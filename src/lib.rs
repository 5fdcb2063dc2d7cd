//! Cinescope: a full-screen terminal client for searching movies.
//!
//! Cinescope renders a searchable movie catalog in the terminal:
//! - Incremental query editing with explicit submission
//! - Paginated result grids with a windowed pager control
//! - A modal detail overlay for the selected title
//! - Keyboard and mouse input over raw-mode `crossterm`
//! - Asynchronous catalog fetches on background Tokio tasks
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - TMDB HTTP   │   │ - Async fetch │
//! │ - Theming     │   │ - Image URLs  │   │ - Outcome     │
//! │ - Components  │   │ - Client trait│   │   channel     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Movie model (domain/movie)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Movie, errors)
//! - [`catalog`]: Catalog client trait, TMDB HTTP implementation, image URLs
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background fetch execution with outcome delivery
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The application is configured via environment variables:
//!
//! ```sh
//! export CINESCOPE_TMDB_TOKEN="eyJhbGciOi..."   # TMDB API read access token
//! export CINESCOPE_API_BASE="https://api.themoviedb.org/3"
//! export CINESCOPE_THEME="catppuccin-mocha"
//! export CINESCOPE_THEME_FILE="~/.config/cinescope/theme.toml"
//! export CINESCOPE_TRACE_LEVEL="info"
//! cinescope
//! ```
//!
//! Only the token is required for searches to succeed; everything else has a
//! working default. A missing token is reported in the UI when a search is
//! attempted, not at startup.
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse configuration from the environment
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Enter raw mode + alternate screen, enable mouse capture
//!    - Spawn the fetch worker channel
//!
//! 2. **Event Loop**:
//!    - `select!` over terminal input and fetch outcomes
//!    - Translate raw input to application events
//!    - Delegate to `handle_event`, execute returned actions
//!
//! 3. **Fetch Execution**:
//!    - `Action::Fetch` spawns a Tokio task against the catalog client
//!    - The tagged outcome re-enters the loop as `Event::FetchFinished`
//!    - Stale outcomes (superseded ticket) are discarded
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, search, grid, pager, overlay, footer)
//!    - Write one ANSI frame string to stdout
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use cinescope::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     api_token: Some("tmdb-token".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! // Open the query editor; no side effects yet.
//! let (rendered, actions) = handle_event(&mut state, &Event::OpenSearch)?;
//! assert!(rendered);
//! assert!(actions.is_empty());
//! # Ok::<(), cinescope::CinescopeError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Ticket-Based Staleness
//!
//! Every fetch carries a monotonically increasing ticket:
//! - `AppState` records the newest issued ticket
//! - Outcomes echo their request's ticket back to the handler
//! - Outcomes with a superseded ticket are dropped without touching state,
//!   so responses arriving out of order can never clobber a newer result
//!
//! ## Worker-Based Fetching
//!
//! Catalog requests run on spawned Tokio tasks:
//! - Prevents UI blocking during network I/O
//! - Outcomes return over an mpsc channel as ordinary events
//! - The catalog sits behind a trait so tests script it in memory
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Layout geometry is shared with mouse hit-testing so the renderer and
//!   the click resolver can never disagree
//!
//! # Platform Support
//!
//! - **OS Support**: Linux, macOS, Windows (via data directory detection)
//! - **Terminal**: Any ANSI-capable terminal emulator; truecolor and OSC 8
//!   hyperlinks are used when available

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchStatus};
pub use domain::{CinescopeError, Movie, Result, SearchPage};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Application configuration sourced from environment variables.
///
/// All values are optional at startup; the token is only required once a
/// search is actually submitted.
///
/// # Example
///
/// ```sh
/// export CINESCOPE_TMDB_TOKEN="eyJhbGciOi..."
/// export CINESCOPE_THEME="catppuccin-latte"
/// cinescope
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB API read access token sent as a bearer credential.
    ///
    /// Without it the catalog client refuses to issue requests and surfaces
    /// a configuration error in the UI. Default: `None`
    pub api_token: Option<String>,

    /// Base URL of the catalog API.
    ///
    /// Override to point at a proxy or a mock server.
    /// Default: `https://api.themoviedb.org/3`
    pub api_base: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base: catalog::DEFAULT_API_BASE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Collects the current environment into a map and delegates to
    /// [`Config::from_vars`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Parses configuration from an environment-variable map.
    ///
    /// Blank values are treated as unset, so `CINESCOPE_TMDB_TOKEN=""` does
    /// not count as a configured token.
    ///
    /// # Parameters
    ///
    /// * `vars` - Environment variables as a name → value map
    ///
    /// # Parsing Rules
    ///
    /// - `CINESCOPE_TMDB_TOKEN`: String → `Option<String>`
    /// - `CINESCOPE_API_BASE`: String → `String` (falls back to the default base)
    /// - `CINESCOPE_THEME`: String → `Option<String>`
    /// - `CINESCOPE_THEME_FILE`: String → `Option<String>`
    /// - `CINESCOPE_TRACE_LEVEL`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cinescope::Config;
    ///
    /// let mut vars = BTreeMap::new();
    /// vars.insert("CINESCOPE_TMDB_TOKEN".to_string(), "abc123".to_string());
    /// vars.insert("CINESCOPE_THEME".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_vars(&vars);
    /// assert_eq!(config.api_token.as_deref(), Some("abc123"));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.api_base, "https://api.themoviedb.org/3");
    /// ```
    #[must_use]
    pub fn from_vars(vars: &BTreeMap<String, String>) -> Self {
        let get = |name: &str| {
            vars.get(name)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            api_token: get("CINESCOPE_TMDB_TOKEN"),
            api_base: get("CINESCOPE_API_BASE")
                .unwrap_or_else(|| catalog::DEFAULT_API_BASE.to_string()),
            theme_name: get("CINESCOPE_THEME"),
            theme_file: get("CINESCOPE_THEME_FILE"),
            trace_level: get("CINESCOPE_TRACE_LEVEL"),
        }
    }
}

/// Initializes the application state from configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - An idle search screen and an empty result set
///
/// Theme failures are never fatal: a missing or unparsable theme file and an
/// unknown theme name both fall back to the default theme with a debug log.
///
/// # Parameters
///
/// * `config` - Application configuration
///
/// # Returns
///
/// An initialized `AppState` ready for event processing.
///
/// # Example
///
/// ```rust
/// use cinescope::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing cinescope");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}
