//! Notification toast component renderer.
//!
//! This module renders the transient notification stack in the top right
//! corner. Toast lifetimes are owned by the runtime; the renderer only draws
//! whatever messages are currently alive.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Right margin kept between a toast and the terminal edge.
const TOAST_MARGIN: usize = 2;

/// First row of the toast stack.
const TOAST_TOP_ROW: usize = 2;

/// Renders the active toasts, newest at the top.
pub fn render_toasts(buf: &mut String, messages: &[String], theme: &Theme, cols: usize) {
    for (offset, message) in messages.iter().enumerate() {
        let label = format!(" {message} ");
        let width = label.chars().count();
        let col = cols.saturating_sub(width + TOAST_MARGIN).max(1);

        position_cursor(buf, TOAST_TOP_ROW + offset, col);
        buf.push_str(&Theme::fg(&theme.colors.toast_fg));
        buf.push_str(&Theme::bg(&theme.colors.toast_bg));
        buf.push_str(&label);
        buf.push_str(Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_from_the_top_row() {
        let theme = Theme::default();
        let messages = vec![
            "No movies found for your request.".to_string(),
            "Failed to fetch movies.".to_string(),
        ];

        let mut buf = String::new();
        render_toasts(&mut buf, &messages, &theme, 120);

        assert!(buf.contains(" No movies found for your request. "));
        assert!(buf.contains(" Failed to fetch movies. "));
        assert!(buf.contains("\u{1b}[2;"));
        assert!(buf.contains("\u{1b}[3;"));
    }
}
