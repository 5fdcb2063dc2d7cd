//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. Pads
/// the line to fill the entire terminal width. Help text wider than the
/// terminal is cut to fit so narrow terminals never corrupt the layout.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(buf: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(buf, row, 1);
    buf.push_str(&Theme::fg(&theme.colors.text_dim));
    buf.push_str(&" ".repeat(padding));
    buf.push_str(&help_text);
    buf.push_str(&" ".repeat(cols.saturating_sub(padding + text_len)));
    buf.push_str(Theme::reset());
    row + 1
}
