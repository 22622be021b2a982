use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum LayoutPolicy {
    /// Fixed row count; columns grow with the card count and leftover cells are placeholders.
    FixedRows { rows: u32 },
    /// Largest factor pair with rows <= cols. Always an exact fit.
    BalancedFactor,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        LayoutPolicy::FixedRows { rows: DEFAULT_ROWS }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    pub rows: u32,
    pub cols: u32,
}

impl BoardLayout {
    pub fn cells(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn placeholders_for(self, total_cards: usize) -> usize {
        self.cells().saturating_sub(total_cards)
    }
}

impl LayoutPolicy {
    /// `total` must be non-zero.
    pub fn layout_for(self, total: usize) -> BoardLayout {
        match self {
            LayoutPolicy::FixedRows { rows } => {
                let rows = rows.max(1);
                let cols = total.div_ceil(rows as usize) as u32;
                BoardLayout { rows, cols }
            }
            LayoutPolicy::BalancedFactor => {
                let rows = (1..=total.isqrt())
                    .rev()
                    .find(|i| total % i == 0)
                    .unwrap_or(1);
                BoardLayout {
                    rows: rows as u32,
                    cols: (total / rows) as u32,
                }
            }
        }
    }
}

/// What the board occupies on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    /// Vertical space taken by the UI above the board.
    pub occupied_above: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BoardSizing {
    pub card_size: u32,
    pub board_width: u32,
    pub board_height: u32,
}

/// Largest square card that fits `layout` into `viewport` with `gap` pixels between cards.
///
/// Pure in its inputs so it can be rerun on every resize against the stored layout.
/// A viewport too small to hold any card yields a zero card size.
pub fn compute_sizing(layout: BoardLayout, viewport: Viewport, gap: u32) -> BoardSizing {
    if layout.rows == 0 || layout.cols == 0 {
        return BoardSizing::default();
    }
    let rows = i64::from(layout.rows);
    let cols = i64::from(layout.cols);
    let gap = i64::from(gap);

    let available_width = i64::from(viewport.width) - gap * (cols - 1);
    let available_height =
        i64::from(viewport.height) - i64::from(viewport.occupied_above) - gap * (rows - 1);

    let size_w = available_width.div_euclid(cols);
    let size_h = available_height.div_euclid(rows);
    let card_size = size_w.min(size_h).max(0);

    BoardSizing {
        card_size: card_size as u32,
        board_width: (card_size * cols + gap * (cols - 1)) as u32,
        board_height: (card_size * rows + gap * (rows - 1)) as u32,
    }
}

/// Edge of one card on a board `board_width` pixels wide. Inverse of the width
/// [`compute_sizing`] produces, so renderers can size cells from the board size alone.
pub fn card_size_for_board_width(board_width: u32, cols: u32, gap: u32) -> u32 {
    if cols == 0 {
        return 0;
    }
    board_width.saturating_sub(gap * (cols - 1)) / cols
}
