//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, character-aware truncation, word wrapping,
//! and terminal hyperlinks.
//!
//! All output goes into the frame buffer `String` assembled by the renderer,
//! which the runtime writes to the terminal in one piece per frame.
//!
//! # UTF-8 Safety
//!
//! Width calculations operate on character counts, not byte lengths, so
//! truncation and centering never split a multi-byte character.

/// Positions the cursor at a specific row and column.
///
/// Appends the ANSI escape sequence `\u{1b}[{row};{col}H` to the frame
/// buffer. Coordinates are 1-indexed (row 1 = first row, col 1 = first
/// column).
pub fn position_cursor(buf: &mut String, row: usize, col: usize) {
    buf.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Truncates `text` to at most `max` characters, appending an ellipsis when
/// anything was cut.
///
/// Counts characters, not bytes. A `max` of zero yields an empty string.
///
/// # Example
///
/// ```rust
/// use cinescope::ui::helpers::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("The Batman", 20), "The Batman");
/// assert_eq!(truncate_with_ellipsis("The Batman", 6), "The B\u{2026}");
/// ```
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max - 1).collect();
    format!("{kept}\u{2026}")
}

/// Column at which content of `width` characters starts when centered.
///
/// 1-based, clamped to the first column when the content is wider than the
/// terminal.
#[must_use]
pub const fn centered_col(cols: usize, width: usize) -> usize {
    cols.saturating_sub(width) / 2 + 1
}

/// Wraps `text` into lines of at most `width` characters, breaking on
/// whitespace.
///
/// Words longer than `width` are split hard. Returns no lines for blank
/// input.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word_len = word.chars().count();
        let mut word = word;

        // Hard-split words that cannot fit a line on their own.
        while word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let head: String = word.chars().take(width).collect();
            let head_bytes = head.len();
            lines.push(head);
            word = &word[head_bytes..];
            word_len -= width;
        }

        let needed = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Wraps `label` in an OSC 8 terminal hyperlink pointing at `url`.
///
/// Terminals without hyperlink support show the plain label.
#[must_use]
pub fn hyperlink(url: &str, label: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{label}\u{1b}]8;;\u{1b}\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_cursor_appends_ansi_sequence() {
        let mut buf = String::new();
        position_cursor(&mut buf, 5, 12);
        assert_eq!(buf, "\u{1b}[5;12H");
    }

    #[test]
    fn truncate_keeps_short_text_untouched() {
        assert_eq!(truncate_with_ellipsis("Heat", 10), "Heat");
        assert_eq!(truncate_with_ellipsis("Heat", 4), "Heat");
    }

    #[test]
    fn truncate_cuts_on_character_boundaries() {
        assert_eq!(truncate_with_ellipsis("Amélie from Montmartre", 7), "Amélie\u{2026}");
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
    }

    #[test]
    fn centered_col_clamps_to_first_column() {
        assert_eq!(centered_col(80, 20), 31);
        assert_eq!(centered_col(10, 40), 1);
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("a gritty noir set in a rain soaked city", 12);
        assert_eq!(lines, vec!["a gritty", "noir set in", "a rain", "soaked city"]);
        assert!(lines.iter().all(|line| line.chars().count() <= 12));
    }

    #[test]
    fn wrap_splits_oversized_words() {
        let lines = wrap_text("Llanfairpwllgwyngyll", 8);
        assert_eq!(lines, vec!["Llanfair", "pwllgwyn", "gyll"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("   ", 10).is_empty());
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn hyperlink_wraps_label_in_osc8() {
        let link = hyperlink("https://example.org/a.jpg", "backdrop");
        assert!(link.starts_with("\u{1b}]8;;https://example.org/a.jpg\u{1b}\\"));
        assert!(link.contains("backdrop"));
        assert!(link.ends_with("\u{1b}]8;;\u{1b}\\"));
    }
}
