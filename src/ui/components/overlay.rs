//! Movie detail overlay component renderer.
//!
//! This module renders the detail box above the grid: a bordered, cleared
//! rectangle with the title, release date, rating, a terminal hyperlink to
//! the backdrop image, and the wrapped overview.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayModel;

/// Renders the detail overlay at its layout rectangle.
///
/// The interior is cleared first so the grid underneath never shows through.
/// Overview text is word-wrapped and cut with an ellipsis when it exceeds the
/// remaining rows.
pub fn render_overlay(buf: &mut String, model: &OverlayModel, theme: &Theme) {
    let rect = model.rect;
    let inner = rect.width.saturating_sub(2);
    let content_width = rect.width.saturating_sub(4);
    let content_col = rect.col + 2;
    let last_interior = rect.row + rect.height.saturating_sub(2);

    position_cursor(buf, rect.row, rect.col);
    buf.push_str(&Theme::fg(&theme.colors.overlay_border));
    buf.push_str(&format!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner)));

    for offset in 1..rect.height.saturating_sub(1) {
        position_cursor(buf, rect.row + offset, rect.col);
        buf.push('\u{2502}');
        buf.push_str(&" ".repeat(inner));
        buf.push('\u{2502}');
    }

    position_cursor(buf, rect.row + rect.height.saturating_sub(1), rect.col);
    buf.push_str(&format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner)));
    buf.push_str(Theme::reset());

    let mut row = rect.row + 2;
    if row <= last_interior {
        position_cursor(buf, row, content_col);
        buf.push_str(Theme::bold());
        buf.push_str(&Theme::fg(&theme.colors.text_normal));
        buf.push_str(&helpers::truncate_with_ellipsis(&model.title, content_width));
        buf.push_str(Theme::reset());
    }

    row += 1;
    if row <= last_interior {
        position_cursor(buf, row, content_col);
        buf.push_str(&Theme::fg(&theme.colors.text_dim));
        buf.push_str(&helpers::truncate_with_ellipsis(&model.release_label, content_width));
        buf.push_str(Theme::reset());
    }

    row += 1;
    if row <= last_interior {
        position_cursor(buf, row, content_col);
        buf.push_str(&Theme::fg(&theme.colors.rating_fg));
        buf.push_str(&helpers::truncate_with_ellipsis(&model.rating_label, content_width));
        buf.push_str(Theme::reset());
    }

    row += 1;
    if row <= last_interior {
        position_cursor(buf, row, content_col);
        buf.push_str(&Theme::fg(&theme.colors.text_normal));
        buf.push_str("Backdrop: ");
        buf.push_str(&Theme::fg(&theme.colors.link_fg));
        let label = helpers::truncate_with_ellipsis(
            &model.image_url,
            content_width.saturating_sub("Backdrop: ".len()),
        );
        buf.push_str(&helpers::hyperlink(&model.image_url, &label));
        buf.push_str(Theme::reset());
    }

    render_overview(buf, model, theme, row + 2, content_col, content_width, last_interior);
}

/// Renders the wrapped overview from `start_row` down to the last interior
/// row, ending with an ellipsis when lines had to be dropped.
fn render_overview(
    buf: &mut String,
    model: &OverlayModel,
    theme: &Theme,
    start_row: usize,
    col: usize,
    width: usize,
    last_interior: usize,
) {
    if start_row > last_interior {
        return;
    }
    let available = last_interior - start_row + 1;
    let mut lines = helpers::wrap_text(&model.overview, width);
    if lines.len() > available {
        lines.truncate(available);
        if let Some(last) = lines.last_mut() {
            *last = helpers::truncate_with_ellipsis(&format!("{last}\u{2026}"), width);
        }
    }

    buf.push_str(&Theme::fg(&theme.colors.text_normal));
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(buf, start_row + offset, col);
        buf.push_str(line);
    }
    buf.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::overlay_rect;

    fn model() -> OverlayModel {
        OverlayModel {
            title: "The Batman".to_string(),
            release_label: "Release date: 2022-03-01".to_string(),
            rating_label: "Rating: 7.7/10".to_string(),
            image_url: "https://image.tmdb.org/t/p/original/x.jpg".to_string(),
            overview: "Two years of nights have turned Bruce Wayne into a nocturnal animal."
                .to_string(),
            rect: overlay_rect(30, 120),
        }
    }

    #[test]
    fn overlay_draws_details_and_backdrop_link() {
        let mut buf = String::new();
        render_overlay(&mut buf, &model(), &Theme::default());

        assert!(buf.contains("The Batman"));
        assert!(buf.contains("Release date: 2022-03-01"));
        assert!(buf.contains("Rating: 7.7/10"));
        assert!(buf.contains("\u{1b}]8;;https://image.tmdb.org/t/p/original/x.jpg\u{1b}\\"));
        assert!(buf.contains("nocturnal animal."));
    }

    #[test]
    fn long_overview_is_cut_with_an_ellipsis() {
        let mut long = model();
        long.overview = "word ".repeat(400);

        let mut buf = String::new();
        render_overlay(&mut buf, &long, &Theme::default());

        assert!(buf.contains('\u{2026}'));
    }
}
