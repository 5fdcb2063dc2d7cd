//! Page selector component renderer.
//!
//! This module renders the pager row under the grid: arrow cells, page
//! numbers with the active page highlighted, and dimmed gap markers for
//! elided page runs.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{PagerLayout, PagerSlot};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerModel;

/// Renders the page selector on its layout row.
///
/// The active page is drawn in the selection colors. The arrows dim when no
/// page exists in their direction, and gap markers are always dim.
pub fn render_pager(buf: &mut String, model: &PagerModel, theme: &Theme, rows: usize, cols: usize) {
    let layout = PagerLayout::compute(&model.slots, rows, cols);
    let last_page = model
        .slots
        .iter()
        .filter_map(|slot| match slot {
            PagerSlot::Page(page) => Some(*page),
            _ => None,
        })
        .max()
        .unwrap_or(1);

    for cell in &layout.cells {
        position_cursor(buf, layout.row, cell.col);
        let label = format!(" {} ", cell.slot.label());

        match cell.slot {
            PagerSlot::Page(page) if page == model.active_page => {
                buf.push_str(&Theme::fg(&theme.colors.selection_fg));
                buf.push_str(&Theme::bg(&theme.colors.selection_bg));
                buf.push_str(&label);
            }
            PagerSlot::Page(_) => {
                buf.push_str(&Theme::fg(&theme.colors.text_normal));
                buf.push_str(&label);
            }
            PagerSlot::Gap => {
                buf.push_str(Theme::dim());
                buf.push_str(&Theme::fg(&theme.colors.text_dim));
                buf.push_str(&label);
            }
            PagerSlot::Prev => {
                if model.active_page <= 1 {
                    buf.push_str(Theme::dim());
                    buf.push_str(&Theme::fg(&theme.colors.text_dim));
                } else {
                    buf.push_str(&Theme::fg(&theme.colors.text_normal));
                }
                buf.push_str(&label);
            }
            PagerSlot::Next => {
                if model.active_page >= last_page {
                    buf.push_str(Theme::dim());
                    buf.push_str(&Theme::fg(&theme.colors.text_dim));
                } else {
                    buf.push_str(&Theme::fg(&theme.colors.text_normal));
                }
                buf.push_str(&label);
            }
        }
        buf.push_str(Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::pager_slots;

    #[test]
    fn active_page_is_highlighted_and_gaps_are_dim() {
        let theme = Theme::default();
        let model = PagerModel {
            slots: pager_slots(20, 10),
            active_page: 10,
        };

        let mut buf = String::new();
        render_pager(&mut buf, &model, &theme, 30, 120);

        assert!(buf.contains(&format!(
            "{}{} 10 ",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )));
        assert!(buf.contains('\u{2026}'));
        assert!(buf.contains('\u{2190}'));
        assert!(buf.contains('\u{2192}'));
    }
}
