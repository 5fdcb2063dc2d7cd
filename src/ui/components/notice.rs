//! Full-body notice component renderer.
//!
//! This module renders the centered message shown instead of the grid: the
//! start screen, the first-load banner, the zero-results screen, and the
//! error screen.

use crate::ui::helpers::{centered_col, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NoticeTone, NoticeView};

/// Renders the body notice centered in the terminal.
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message color follows the tone: informational and loading notices use
/// the `empty_state_fg` theme color, errors use `error_fg`. The subtitle is
/// always dimmed.
pub fn render_notice(buf: &mut String, notice: &NoticeView, theme: &Theme, rows: usize, cols: usize) {
    let message_row = (rows / 2).saturating_sub(1).max(1);
    let message_color = match notice.tone {
        NoticeTone::Info | NoticeTone::Loading => &theme.colors.empty_state_fg,
        NoticeTone::Error => &theme.colors.error_fg,
    };

    position_cursor(buf, message_row, centered_col(cols, notice.message.chars().count()));
    buf.push_str(&Theme::fg(message_color));
    buf.push_str(&notice.message);
    buf.push_str(Theme::reset());

    if !notice.subtitle.is_empty() {
        position_cursor(
            buf,
            message_row + 1,
            centered_col(cols, notice.subtitle.chars().count()),
        );
        buf.push_str(Theme::dim());
        buf.push_str(&Theme::fg(&theme.colors.text_dim));
        buf.push_str(&notice.subtitle);
        buf.push_str(Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notice_uses_error_color() {
        let theme = Theme::default();
        let notice = NoticeView {
            message: "There was an error, please try again...".to_string(),
            subtitle: "Invalid API key.".to_string(),
            tone: NoticeTone::Error,
        };

        let mut buf = String::new();
        render_notice(&mut buf, &notice, &theme, 30, 120);

        assert!(buf.contains(&Theme::fg(&theme.colors.error_fg)));
        assert!(buf.contains("Invalid API key."));
    }
}
