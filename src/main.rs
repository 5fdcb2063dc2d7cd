//! Terminal runtime and entry point.
//!
//! This module provides the thin integration layer between the cinescope
//! library and the terminal. It owns the raw-mode terminal, translates
//! crossterm input into application events, and executes the side effects the
//! event handler returns.
//!
//! # Architecture
//!
//! One logical UI loop multiplexes two sources:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  tokio::select!                             │
//! │  ┌──────────────────┐  ┌─────────────────┐  │
//! │  │ EventStream      │  │ mpsc receiver   │  │
//! │  │ (keys, mouse,    │  │ (fetch outcomes │  │
//! │  │  resize)         │  │  from tasks)    │  │
//! │  └──────────────────┘  └─────────────────┘  │
//! │            │                   │            │
//! │            ▼                   ▼            │
//! │        map to Event ──▶ handle_event        │
//! │                              │              │
//! │              render ◀── execute actions     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Fetches never run on the loop; `Action::Fetch` hands the request to the
//! [`FetchWorker`], which spawns a task and posts the outcome back through
//! the channel as `Event::FetchFinished`.
//!
//! # Runtime Lifecycle
//!
//! 1. **Startup**: Parse environment config, initialize tracing, build the
//!    catalog client and application state
//! 2. **Acquire**: Enable raw mode, enter the alternate screen, capture mouse
//! 3. **Loop**: Translate input, dispatch events, execute actions, redraw
//! 4. **Release**: Restore the terminal on every exit path, panics included
//!
//! # Event Mapping
//!
//! Crossterm events are translated to library events:
//!
//! - `Key(Enter)` → `Event::OpenDetails` (or `SubmitSearch` while editing)
//! - `Key(Esc)` → `Event::DismissOverlay` (or `CancelSearch` while editing)
//! - `Mouse(Down(Left))` → `Event::Click { x, y }` (converted to 1-based)
//! - `Resize(cols, rows)` → `Event::Resized { rows, cols }`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+c`: Quit
//!
//! While browsing:
//! - `h`/`j`/`k`/`l` or arrows: Move selection
//! - `n`/`p`, `PageDown`/`PageUp`: Next/previous page
//! - `Enter`: Open details for the selected card
//! - `/`: Edit the query
//! - `Esc`: Close the detail overlay
//! - `q`: Quit
//!
//! While editing:
//! - Printable characters: Extend the buffer
//! - `Backspace`: Delete
//! - `Enter`: Submit the buffer as the query
//! - `Esc`: Cancel, keeping the committed query

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    self, Event as TerminalEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::{cursor, terminal};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use cinescope::worker::{FetchOutcome, FetchWorker};
use cinescope::{handle_event, ui, Action, AppState, Config, Event, InputMode, Result};

/// How long a notification toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Capacity of the fetch outcome channel.
///
/// Outcomes are tiny and consumed promptly; the bound only guards against a
/// wedged UI loop.
const OUTCOME_CHANNEL_CAPACITY: usize = 32;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    cinescope::observability::init_tracing(&config);
    tracing::debug!("starting cinescope");

    let client = cinescope::catalog::TmdbClient::new(&config)?;
    let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
    let worker = FetchWorker::new(Arc::new(client), outcome_tx);

    let mut app = cinescope::initialize(&config);
    let (cols, rows) = terminal::size()?;
    app.set_viewport(usize::from(rows), usize::from(cols));
    tracing::debug!(rows, cols, "app state initialized");

    install_panic_hook();
    let _terminal = TerminalGuard::acquire()?;

    let mut runtime = Runtime::new(app, worker, outcome_rx);
    runtime.run().await
}

/// Owns the terminal's raw mode and alternate screen.
///
/// Restores the terminal when dropped, so any return path out of `main`
/// leaves the user's shell usable.
struct TerminalGuard;

impl TerminalGuard {
    /// Enables raw mode, enters the alternate screen, and captures the mouse.
    fn acquire() -> Result<Self> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self)
    }

    /// Undoes [`TerminalGuard::acquire`] in reverse order.
    ///
    /// Errors are ignored: this runs on teardown and panic paths where
    /// there is nothing left to do about a failing terminal.
    fn restore() {
        let _ = crossterm::execute!(
            io::stdout(),
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Self::restore();
    }
}

/// Restores the terminal before the default panic output is printed.
///
/// Without this, a panic message would be swallowed by the alternate screen
/// and the shell left in raw mode.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        TerminalGuard::restore();
        default_hook(panic_info);
    }));
}

/// A transient notification line with its expiry deadline.
struct Toast {
    message: String,
    expires_at: Instant,
}

/// Event loop state: the application, its side-effect executors, and the
/// live toasts.
struct Runtime {
    /// Core application state from the library layer.
    app: AppState,

    /// Executor for `Action::Fetch`.
    worker: FetchWorker,

    /// Fetch outcomes posted back by worker tasks.
    outcomes: mpsc::Receiver<FetchOutcome>,

    /// Active toasts, oldest first. All share one TTL, so the first entry
    /// always carries the earliest deadline.
    toasts: Vec<Toast>,

    /// Cleared by `Action::Quit` to end the loop.
    running: bool,
}

impl Runtime {
    fn new(app: AppState, worker: FetchWorker, outcomes: mpsc::Receiver<FetchOutcome>) -> Self {
        Self {
            app,
            worker,
            outcomes,
            toasts: Vec::new(),
            running: true,
        }
    }

    /// Runs the event loop until quit or end of terminal input.
    ///
    /// Multiplexes the crossterm event stream, the fetch outcome channel,
    /// and the expiry of the oldest toast. Redraws only when the handler
    /// reports a visible change or a toast appears or expires.
    async fn run(&mut self) -> Result<()> {
        let mut terminal_events = EventStream::new();
        self.draw()?;

        while self.running {
            let toast_deadline = self.toasts.first().map_or_else(
                || Instant::now() + Duration::from_secs(3600),
                |toast| toast.expires_at,
            );

            tokio::select! {
                maybe_raw = terminal_events.next() => {
                    let Some(raw) = maybe_raw else {
                        tracing::debug!("terminal input closed");
                        break;
                    };
                    if let Some(event) = self.map_terminal_event(&raw?) {
                        if self.dispatch(&event)? {
                            self.draw()?;
                        }
                    }
                }
                Some(outcome) = self.outcomes.recv() => {
                    if self.dispatch(&Event::FetchFinished(outcome))? {
                        self.draw()?;
                    }
                }
                () = time::sleep_until(toast_deadline), if !self.toasts.is_empty() => {
                    let now = Instant::now();
                    self.toasts.retain(|toast| toast.expires_at > now);
                    self.draw()?;
                }
            }
        }

        tracing::debug!("event loop finished");
        Ok(())
    }

    /// Feeds one event through the handler and executes its actions.
    ///
    /// Returns whether the screen needs a redraw; raising a toast forces one
    /// even when the handler itself reported no visible change.
    fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (mut should_render, actions) = handle_event(&mut self.app, event)?;

        for action in actions {
            match action {
                Action::Fetch(request) => {
                    tracing::debug!(ticket = request.ticket, query = %request.query, page = request.page, "submitting fetch");
                    self.worker.submit(request);
                }
                Action::Notify(message) => {
                    tracing::debug!(message = %message, "raising toast");
                    self.toasts.push(Toast {
                        message,
                        expires_at: Instant::now() + TOAST_TTL,
                    });
                    should_render = true;
                }
                Action::Quit => {
                    tracing::debug!("quit requested");
                    self.running = false;
                }
            }
        }

        Ok(should_render)
    }

    /// Renders one frame to stdout.
    fn draw(&self) -> Result<()> {
        let messages: Vec<String> = self
            .toasts
            .iter()
            .map(|toast| toast.message.clone())
            .collect();
        let frame = ui::render(&self.app, &messages);

        let mut stdout = io::stdout();
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Translates a crossterm event into an application event.
    fn map_terminal_event(&self, raw: &TerminalEvent) -> Option<Event> {
        match raw {
            TerminalEvent::Key(key) => self.map_key_event(key),
            TerminalEvent::Mouse(mouse) => Self::map_mouse_event(mouse),
            TerminalEvent::Resize(cols, rows) => Some(Event::Resized {
                rows: usize::from(*rows),
                cols: usize::from(*cols),
            }),
            _ => None,
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The mapping depends on the current input mode: while the query editor
    /// is open, letters extend the buffer instead of navigating.
    fn map_key_event(&self, key: &KeyEvent) -> Option<Event> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Event::Quit);
        }

        match self.app.input_mode {
            InputMode::Editing => match key.code {
                KeyCode::Enter => Some(Event::SubmitSearch),
                KeyCode::Esc => Some(Event::CancelSearch),
                KeyCode::Backspace => Some(Event::Backspace),
                KeyCode::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            InputMode::Browse => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Event::SelectionUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Event::SelectionDown),
                KeyCode::Left | KeyCode::Char('h') => Some(Event::SelectionLeft),
                KeyCode::Right | KeyCode::Char('l') => Some(Event::SelectionRight),
                KeyCode::Char('n') | KeyCode::PageDown => Some(Event::NextPage),
                KeyCode::Char('p') | KeyCode::PageUp => Some(Event::PrevPage),
                KeyCode::Enter => Some(Event::OpenDetails),
                KeyCode::Char('/') => Some(Event::OpenSearch),
                KeyCode::Esc => Some(Event::DismissOverlay),
                KeyCode::Char('q') => Some(Event::Quit),
                _ => None,
            },
        }
    }

    /// Maps mouse events to application events.
    ///
    /// Only left-button presses matter; crossterm reports 0-based cells and
    /// the click event carries 1-based screen coordinates.
    fn map_mouse_event(mouse: &MouseEvent) -> Option<Event> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Event::Click {
                x: mouse.column.saturating_add(1),
                y: mouse.row.saturating_add(1),
            }),
            _ => None,
        }
    }
}
