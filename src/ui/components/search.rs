//! Search box component renderer.
//!
//! This module renders the search input box with a bordered frame and the
//! live edit buffer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the edit buffer followed by a
/// block cursor. The box is horizontally centered with margins on both sides.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: batman█ │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
pub fn render_search_bar(
    buf: &mut String,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(buf, row, 1);
    buf.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    buf.push_str(&Theme::fg(&theme.colors.search_bar_border));
    buf.push_str(&format!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width)));
    buf.push_str(Theme::reset());

    let search_text = format!(" Search: {}\u{2588}", search.buffer);
    let text_len = search_text.chars().count();
    let padding = inner_width.saturating_sub(text_len);

    position_cursor(buf, row + 1, 1);
    buf.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    buf.push_str(&Theme::fg(&theme.colors.search_bar_border));
    buf.push('\u{2502}');
    buf.push_str(&Theme::fg(&theme.colors.text_normal));
    buf.push_str(&search_text);
    buf.push_str(&" ".repeat(padding));
    buf.push_str(&Theme::fg(&theme.colors.search_bar_border));
    buf.push('\u{2502}');
    buf.push_str(Theme::reset());

    position_cursor(buf, row + 2, 1);
    buf.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    buf.push_str(&Theme::fg(&theme.colors.search_bar_border));
    buf.push_str(&format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width)));
    buf.push_str(Theme::reset());

    row + 3
}
