//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. The result is one ANSI
//! frame string the runtime writes to the terminal in a single piece, which
//! keeps redraws flicker-free under the alternate screen.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Drawing order matters: chrome first, then the body, then the overlay and
//! toasts so they stack above everything else.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::{centered_col, position_cursor};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UiViewModel};

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Banner shown on the status row while a page change is loading.
const LOADING_BANNER: &str = "Loading movies, please wait...";

/// Renders the full UI frame for the current application state.
///
/// Computes the view model from application state and delegates to the
/// component renderers. `toasts` is the list of notification messages
/// currently alive; their lifetimes are owned by the runtime.
///
/// # Example
///
/// ```rust
/// use cinescope::app::AppState;
/// use cinescope::ui::{render, Theme};
///
/// let state = AppState::new(Theme::default());
/// let frame = render(&state, &[]);
/// assert!(frame.starts_with("\u{1b}[2J"));
/// ```
#[must_use]
pub fn render(state: &AppState, toasts: &[String]) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, state.rows, state.cols, toasts)
}

/// Renders a pre-computed view model into a frame string.
fn render_viewmodel(
    vm: &UiViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
    toasts: &[String],
) -> String {
    let mut buf = String::with_capacity(rows * cols);
    buf.push_str(CLEAR_SCREEN);

    components::render_header(&mut buf, layout::HEADER_ROW, &vm.header, theme, cols);
    components::render_border(&mut buf, layout::HEADER_BORDER_ROW, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        components::render_search_bar(&mut buf, layout::search_box_row(), search, theme, cols);
    }

    match &vm.body {
        BodyView::Grid(grid) => {
            if grid.loading {
                render_loading_banner(&mut buf, theme, vm.search_bar.is_some(), cols);
            }
            components::render_grid(&mut buf, grid, theme);
        }
        BodyView::Notice(notice) => {
            components::render_notice(&mut buf, notice, theme, rows, cols);
        }
    }

    if let Some(pager) = &vm.pager {
        components::render_pager(&mut buf, pager, theme, rows, cols);
    }

    components::render_border(&mut buf, rows.saturating_sub(1), &theme.colors.border, cols);
    components::render_footer(&mut buf, rows, &vm.footer, theme, cols);

    if let Some(overlay) = &vm.overlay {
        components::render_overlay(&mut buf, overlay, theme);
    }

    components::render_toasts(&mut buf, toasts, theme, cols);
    buf
}

/// Draws the loading banner on the status row while retained results stay on
/// screen.
fn render_loading_banner(buf: &mut String, theme: &Theme, search_open: bool, cols: usize) {
    let row = layout::status_row(search_open);
    position_cursor(buf, row, centered_col(cols, LOADING_BANNER.len()));
    buf.push_str(Theme::dim());
    buf.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    buf.push_str(LOADING_BANNER);
    buf.push_str(Theme::reset());
}
