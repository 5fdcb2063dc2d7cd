//! Movie card grid component renderer.
//!
//! This module renders the visible window of result cards. Each card is a
//! bordered box showing the title, release year, and rating; the selected
//! card is drawn in the selection colors.
//!
//! Card positions come from the [`GridLayout`] carried by the view model, the
//! same geometry mouse clicks are resolved against.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, GridView};

/// Renders all visible cards of the grid window.
///
/// While a page change is loading behind retained results the whole grid is
/// drawn dimmed, so the retained cards read as stale next to the loading
/// banner.
pub fn render_grid(buf: &mut String, view: &GridView, theme: &Theme) {
    for (slot, card) in view.cards.iter().enumerate() {
        render_card(buf, view.layout.slot_rect(slot), card, theme, view.loading);
    }
}

/// Starts a styled segment: foreground color, plus dim while loading.
fn push_style(buf: &mut String, color: &str, dim: bool) {
    buf.push_str(&Theme::fg(color));
    if dim {
        buf.push_str(Theme::dim());
    }
}

/// Renders a single card box.
///
/// # Layout
///
/// ```text
/// ┌────────────────────────┐
/// │ The Batman             │
/// │ 2022            7.7/10 │
/// └────────────────────────┘
/// ```
fn render_card(buf: &mut String, rect: Rect, card: &CardItem, theme: &Theme, dim: bool) {
    let inner = rect.width.saturating_sub(2);
    let border_color = if card.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.card_border
    };

    position_cursor(buf, rect.row, rect.col);
    push_style(buf, border_color, dim);
    buf.push_str(&format!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner)));
    buf.push_str(Theme::reset());

    render_title_line(buf, rect, card, theme, border_color, inner, dim);
    render_meta_line(buf, rect, card, theme, border_color, inner, dim);

    position_cursor(buf, rect.row + 3, rect.col);
    push_style(buf, border_color, dim);
    buf.push_str(&format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner)));
    buf.push_str(Theme::reset());
}

fn render_title_line(
    buf: &mut String,
    rect: Rect,
    card: &CardItem,
    theme: &Theme,
    border_color: &str,
    inner: usize,
    dim: bool,
) {
    position_cursor(buf, rect.row + 1, rect.col);
    push_style(buf, border_color, dim);
    buf.push('\u{2502}');

    if card.is_selected {
        buf.push_str(&Theme::fg(&theme.colors.selection_fg));
        buf.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        buf.push_str(Theme::bold());
        buf.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    if dim {
        buf.push_str(Theme::dim());
    }

    let title_len = card.title.chars().count();
    buf.push(' ');
    buf.push_str(&card.title);
    buf.push_str(&" ".repeat(inner.saturating_sub(title_len + 1)));

    buf.push_str(Theme::reset());
    push_style(buf, border_color, dim);
    buf.push('\u{2502}');
    buf.push_str(Theme::reset());
}

fn render_meta_line(
    buf: &mut String,
    rect: Rect,
    card: &CardItem,
    theme: &Theme,
    border_color: &str,
    inner: usize,
    dim: bool,
) {
    let year_len = card.year_label.chars().count();
    let rating_len = card.rating_label.chars().count();
    let middle = inner.saturating_sub(year_len + rating_len + 2);

    position_cursor(buf, rect.row + 2, rect.col);
    push_style(buf, border_color, dim);
    buf.push('\u{2502}');

    if card.is_selected {
        buf.push_str(&Theme::fg(&theme.colors.selection_fg));
        buf.push_str(&Theme::bg(&theme.colors.selection_bg));
        if dim {
            buf.push_str(Theme::dim());
        }
        buf.push(' ');
        buf.push_str(&card.year_label);
        buf.push_str(&" ".repeat(middle));
        buf.push_str(&card.rating_label);
        buf.push(' ');
    } else {
        push_style(buf, &theme.colors.text_dim, dim);
        buf.push(' ');
        buf.push_str(&card.year_label);
        buf.push_str(&" ".repeat(middle));
        buf.push_str(&Theme::fg(&theme.colors.rating_fg));
        buf.push_str(&card.rating_label);
        buf.push(' ');
    }

    buf.push_str(Theme::reset());
    push_style(buf, border_color, dim);
    buf.push('\u{2502}');
    buf.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::GridLayout;

    fn card(title: &str, selected: bool) -> CardItem {
        CardItem {
            title: title.to_string(),
            year_label: "2022".to_string(),
            rating_label: "7.7/10".to_string(),
            is_selected: selected,
        }
    }

    #[test]
    fn grid_draws_each_card_with_title_and_meta() {
        let view = GridView {
            cards: vec![card("The Batman", true), card("Batman Begins", false)],
            layout: GridLayout::compute(30, 120, 2, 0, false),
            loading: false,
        };

        let mut buf = String::new();
        render_grid(&mut buf, &view, &Theme::default());

        assert!(buf.contains("The Batman"));
        assert!(buf.contains("Batman Begins"));
        assert!(buf.contains("2022"));
        assert!(buf.contains("7.7/10"));
        assert!(buf.contains('\u{250c}'));
    }

    #[test]
    fn loading_grid_is_drawn_dimmed() {
        let layout = GridLayout::compute(30, 120, 2, 0, false);
        let cards = vec![card("The Batman", true), card("Batman Begins", false)];
        let theme = Theme::default();

        let mut settled = String::new();
        render_grid(
            &mut settled,
            &GridView {
                cards: cards.clone(),
                layout,
                loading: false,
            },
            &theme,
        );

        let mut loading = String::new();
        render_grid(
            &mut loading,
            &GridView {
                cards,
                layout,
                loading: true,
            },
            &theme,
        );

        assert_ne!(settled, loading, "retained cards must restyle while loading");
        assert!(loading.contains(Theme::dim()));
        assert!(!settled.contains(Theme::dim()));
    }

    #[test]
    fn selected_card_uses_selection_background() {
        let view = GridView {
            cards: vec![card("Heat", true)],
            layout: GridLayout::compute(30, 120, 1, 0, false),
            loading: false,
        };

        let mut buf = String::new();
        let theme = Theme::default();
        render_grid(&mut buf, &view, &theme);

        assert!(buf.contains(&Theme::bg(&theme.colors.selection_bg)));
    }
}
