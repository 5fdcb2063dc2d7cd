//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface into the frame
//! buffer.
//!
//! # Components
//!
//! - [`header`]: Title bar with the current query and result count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, edit buffer)
//! - [`grid`]: Movie result cards laid out in columns
//! - [`pager`]: Page selector with pinned margins and a floating window
//! - [`notice`]: Full-body message for idle, loading, empty, and error states
//! - [`overlay`]: Movie detail box drawn above the grid
//! - [`toast`]: Transient notification stack in the top right corner
//!
//! Components place themselves with the shared layout functions in
//! [`crate::ui::layout`], the same functions the event handler resolves mouse
//! clicks against.

mod footer;
mod grid;
mod header;
mod notice;
mod overlay;
mod pager;
mod search;
mod toast;

pub use footer::render_footer;
pub use grid::render_grid;
pub use header::render_header;
pub use notice::render_notice;
pub use overlay::render_overlay;
pub use pager::render_pager;
pub use search::render_search_bar;
pub use toast::render_toasts;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_border(buf: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(buf, row, 1);
    buf.push_str(&Theme::fg(color));
    buf.push_str(&"\u{2500}".repeat(cols));
    buf.push_str(Theme::reset());
    row + 1
}
