//! Pure screen geometry shared by the renderer and mouse hit-testing.
//!
//! Every clickable region is computed here from the terminal size and state
//! counts alone, with no rendering involved. The renderer places components
//! using these functions and the event handler resolves mouse clicks against
//! the same functions, so a click can never land on a region the renderer
//! drew somewhere else.
//!
//! All coordinates are 1-based, matching ANSI cursor positioning. The runtime
//! converts crossterm's 0-based mouse coordinates before events reach the
//! handler.

/// Width of one grid card slot, including the gap to its right neighbor.
pub const CARD_WIDTH: usize = 28;

/// Height of one grid card in rows.
pub const CARD_HEIGHT: usize = 4;

/// Columns of the slot width that are gap rather than card box.
pub const CARD_GAP: usize = 2;

/// Text columns available inside a card box, between borders and padding.
pub const CARD_INNER_WIDTH: usize = CARD_WIDTH - CARD_GAP - 4;

/// Horizontal margin kept free on each side of the grid.
const GRID_SIDE_MARGIN: usize = 2;

/// Pages shown in the moving window of the pager.
pub const PAGE_RANGE_DISPLAYED: usize = 5;

/// Pages pinned at each end of the pager.
pub const MARGIN_PAGES_DISPLAYED: usize = 1;

/// Screen row of the header text.
pub const HEADER_ROW: usize = 2;

/// Screen row of the border under the header.
pub const HEADER_BORDER_ROW: usize = 3;

/// A rectangular screen region in 1-based coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Returns true when the cell `(x, y)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.col && x < self.col + self.width && y >= self.row && y < self.row + self.height
    }
}

/// First row of the search input box when the query editor is open.
#[must_use]
pub const fn search_box_row() -> usize {
    HEADER_BORDER_ROW + 1
}

/// Row of the status line carrying the loading banner.
#[must_use]
pub const fn status_row(search_open: bool) -> usize {
    if search_open {
        // Below the three-row search box.
        search_box_row() + 3
    } else {
        HEADER_BORDER_ROW + 1
    }
}

/// First row of the card grid.
#[must_use]
pub const fn grid_origin_row(search_open: bool) -> usize {
    status_row(search_open) + 1
}

/// Last row available to the card grid.
#[must_use]
pub const fn grid_bottom_row(rows: usize) -> usize {
    rows.saturating_sub(4)
}

/// Row holding the page selector.
#[must_use]
pub const fn pager_row(rows: usize) -> usize {
    rows.saturating_sub(3)
}

/// Geometry of the visible portion of the card grid.
///
/// Windowing keeps the selected card visible: the window of whole card rows
/// is centered on the selection and clamped to the ends of the list, the same
/// scheme a scrolling list uses but applied to rows of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Screen row of the first visible card row.
    pub origin_row: usize,
    /// Screen column of the leftmost card.
    pub origin_col: usize,
    /// Number of card columns that fit the terminal width.
    pub columns: usize,
    /// Number of whole card rows that fit the grid area.
    pub visible_rows: usize,
    /// Absolute index of the first visible card.
    pub first_visible: usize,
    /// Number of cards actually visible.
    pub visible_count: usize,
}

impl GridLayout {
    /// Computes the grid geometry for the given terminal size and item count.
    ///
    /// `selected` is the absolute index the window must keep visible.
    /// `search_open` shifts the grid down to make room for the search box.
    #[must_use]
    pub fn compute(
        rows: usize,
        cols: usize,
        total: usize,
        selected: usize,
        search_open: bool,
    ) -> Self {
        let origin_row = grid_origin_row(search_open);
        let bottom = grid_bottom_row(rows);
        let height = bottom.saturating_sub(origin_row).saturating_add(1);

        let columns = (cols.saturating_sub(GRID_SIDE_MARGIN * 2) / CARD_WIDTH).max(1);
        let visible_rows = (height / CARD_HEIGHT).max(1);
        let origin_col = cols.saturating_sub(columns * CARD_WIDTH) / 2 + 1;

        let total_rows = if total == 0 { 0 } else { (total - 1) / columns + 1 };
        let selected_row = selected.min(total.saturating_sub(1)) / columns.max(1);

        let mut first_row = selected_row.saturating_sub(visible_rows / 2);
        if first_row + visible_rows > total_rows {
            first_row = total_rows.saturating_sub(visible_rows);
        }

        let first_visible = first_row * columns;
        let visible_count = total
            .saturating_sub(first_visible)
            .min(visible_rows * columns);

        Self {
            origin_row,
            origin_col,
            columns,
            visible_rows,
            first_visible,
            visible_count,
        }
    }

    /// Screen rectangle of the card box in visible slot `slot`.
    ///
    /// The rectangle covers the drawn box only, not the gap column to its
    /// right, so clicks between cards select nothing.
    #[must_use]
    pub const fn slot_rect(&self, slot: usize) -> Rect {
        let row_in_window = slot / self.columns;
        let col_in_window = slot % self.columns;
        Rect {
            row: self.origin_row + row_in_window * CARD_HEIGHT,
            col: self.origin_col + col_in_window * CARD_WIDTH,
            width: CARD_WIDTH - CARD_GAP,
            height: CARD_HEIGHT,
        }
    }

    /// Maps a click to the visible slot it landed on, if any.
    #[must_use]
    pub fn hit(&self, x: usize, y: usize) -> Option<usize> {
        (0..self.visible_count).find(|&slot| self.slot_rect(slot).contains(x, y))
    }

    /// Converts a visible slot into an absolute result index.
    #[must_use]
    pub const fn absolute_index(&self, slot: usize) -> usize {
        self.first_visible + slot
    }
}

/// One position in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerSlot {
    /// Step back one page.
    Prev,
    /// Jump to a specific page. The number is the one-based display value.
    Page(u32),
    /// Elision marker between the pinned margin and the moving window.
    Gap,
    /// Step forward one page.
    Next,
}

impl PagerSlot {
    /// Label drawn for this slot.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Prev => "\u{2190}".to_string(),
            Self::Page(page) => page.to_string(),
            Self::Gap => "\u{2026}".to_string(),
            Self::Next => "\u{2192}".to_string(),
        }
    }
}

/// A pager click resolved from screen coordinates.
///
/// Direct page selections are reported zero-based, mirroring how page
/// selector widgets report `selected`; the event handler owns the
/// translation to the one-based page used everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerClick {
    Prev,
    Next,
    /// Zero-based index of the chosen page.
    Page(usize),
}

/// Builds the slot sequence for the pager.
///
/// Small page counts list every page. Larger counts pin
/// [`MARGIN_PAGES_DISPLAYED`] pages at each end and float a window of
/// [`PAGE_RANGE_DISPLAYED`] pages around the active page, with a single gap
/// marker for each elided run.
#[must_use]
pub fn pager_slots(total_pages: u32, active: u32) -> Vec<PagerSlot> {
    let mut slots = vec![PagerSlot::Prev];

    let margin = MARGIN_PAGES_DISPLAYED as u32;
    let range = PAGE_RANGE_DISPLAYED as u32;

    if total_pages <= range + margin * 2 {
        for page in 1..=total_pages {
            slots.push(PagerSlot::Page(page));
        }
    } else {
        let half = range / 2;
        let mut window_start = active.saturating_sub(half).max(1);
        let mut window_end = window_start + range - 1;
        if window_end > total_pages {
            window_end = total_pages;
            window_start = window_end - range + 1;
        }

        let mut last_emitted = 0u32;
        for page in 1..=total_pages {
            let in_margin = page <= margin || page > total_pages - margin;
            let in_window = page >= window_start && page <= window_end;
            if in_margin || in_window {
                if last_emitted != 0 && page != last_emitted + 1 {
                    slots.push(PagerSlot::Gap);
                }
                slots.push(PagerSlot::Page(page));
                last_emitted = page;
            }
        }
    }

    slots.push(PagerSlot::Next);
    slots
}

/// One laid-out pager cell with its horizontal span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerCell {
    pub slot: PagerSlot,
    pub col: usize,
    pub width: usize,
}

/// Horizontal layout of the pager row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerLayout {
    /// Screen row the pager occupies.
    pub row: usize,
    /// Laid-out cells from left to right.
    pub cells: Vec<PagerCell>,
}

impl PagerLayout {
    /// Lays out `slots` centered on the pager row.
    ///
    /// Each cell is its label padded by one column on each side.
    #[must_use]
    pub fn compute(slots: &[PagerSlot], rows: usize, cols: usize) -> Self {
        let widths: Vec<usize> = slots
            .iter()
            .map(|slot| slot.label().chars().count() + 2)
            .collect();
        let total_width: usize = widths.iter().sum();

        let mut col = cols.saturating_sub(total_width) / 2 + 1;
        let mut cells = Vec::with_capacity(slots.len());
        for (slot, width) in slots.iter().zip(widths) {
            cells.push(PagerCell {
                slot: *slot,
                col,
                width,
            });
            col += width;
        }

        Self {
            row: pager_row(rows),
            cells,
        }
    }

    /// Resolves a click against the pager cells.
    ///
    /// Gap markers are not clickable. Page cells report the zero-based page
    /// index.
    #[must_use]
    pub fn hit(&self, x: usize, y: usize) -> Option<PagerClick> {
        if y != self.row {
            return None;
        }
        for cell in &self.cells {
            if x >= cell.col && x < cell.col + cell.width {
                return match cell.slot {
                    PagerSlot::Prev => Some(PagerClick::Prev),
                    PagerSlot::Next => Some(PagerClick::Next),
                    PagerSlot::Page(page) => Some(PagerClick::Page(page as usize - 1)),
                    PagerSlot::Gap => None,
                };
            }
        }
        None
    }

    /// Finds the cell displaying `page`, when it is part of the window.
    #[must_use]
    pub fn cell_for_page(&self, page: u32) -> Option<&PagerCell> {
        self.cells
            .iter()
            .find(|cell| matches!(cell.slot, PagerSlot::Page(p) if p == page))
    }
}

/// Rectangle of the detail overlay content box.
///
/// Centered, capped at a comfortable reading size, and clamped on terminals
/// too small to hold the cap. Everything outside this rectangle counts as
/// backdrop for click dismissal.
#[must_use]
pub fn overlay_rect(rows: usize, cols: usize) -> Rect {
    let width = cols.saturating_sub(10).min(76).max(24.min(cols));
    let height = rows.saturating_sub(6).min(16).max(7.min(rows));
    Rect {
        row: rows.saturating_sub(height) / 2 + 1,
        col: cols.saturating_sub(width) / 2 + 1,
        width,
        height,
    }
}
