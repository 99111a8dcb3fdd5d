mod button;

pub use button::{Action, Button};

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_GAP: f32 = 8.0;
pub const MIN_CELL_SIZE: f32 = 2.0;
pub const MAX_CELL_SIZE: f32 = 24.0;
pub const BOARD_MARGIN: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Where the board sits on screen and how big one cell is
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl BoardLayout {
    /// Fit a `rows x cols` board into an area, largest cell size that fits
    pub fn fit(area_width: f32, area_height: f32, rows: usize, cols: usize) -> Self {
        let usable_w = (area_width - 2.0 * BOARD_MARGIN).max(0.0);
        let usable_h = (area_height - 2.0 * BOARD_MARGIN).max(0.0);
        let cell_size = (usable_w / cols.max(1) as f32)
            .min(usable_h / rows.max(1) as f32)
            .floor()
            .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);

        Self {
            origin_x: BOARD_MARGIN,
            origin_y: BOARD_MARGIN,
            cell_size,
            rows,
            cols,
        }
    }

    /// Layout for the current window
    pub fn for_screen(rows: usize, cols: usize) -> Self {
        Self::fit(board_area_width(), board_area_height(), rows, cols)
    }

    /// Top-left corner of a cell in screen space
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }

    /// Board position under a screen point, if any
    pub fn cell_under(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let col = (dx / self.cell_size) as usize;
        let row = (dy / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }
}

/// Create the panel buttons, stacked from the top of the panel
pub fn create_buttons(running: bool) -> Vec<Button> {
    let px = panel_x();
    let actions = [
        (Action::PlayPause, if running { "Pause" } else { "Play" }),
        (Action::Step, "Next"),
        (Action::Clear, "Clear"),
        (Action::Random, "Random"),
        (Action::Wrap, "Wrap"),
        (Action::Algorithm, "Algorithm"),
    ];

    actions
        .iter()
        .enumerate()
        .map(|(i, (action, label))| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(px + 10.0, y, PANEL_WIDTH - 20.0, BUTTON_HEIGHT, *label, *action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_picks_largest_square_cells() {
        let layout = BoardLayout::fit(520.0, 270.0, 25, 50);
        // usable 500x250 -> 10px per cell both ways
        assert_eq!(layout.cell_size, 10.0);
        assert_eq!(layout.width(), 500.0);
        assert_eq!(layout.height(), 250.0);
    }

    #[test]
    fn test_fit_clamps_cell_size() {
        assert_eq!(BoardLayout::fit(2000.0, 2000.0, 5, 5).cell_size, MAX_CELL_SIZE);
        assert_eq!(BoardLayout::fit(100.0, 100.0, 500, 500).cell_size, MIN_CELL_SIZE);
    }

    #[test]
    fn test_cell_under_round_trips() {
        let layout = BoardLayout::fit(520.0, 520.0, 25, 25);
        let (x, y) = layout.cell_origin(3, 7);
        let half = layout.cell_size / 2.0;
        assert_eq!(layout.cell_under(x + half, y + half), Some((3, 7)));
    }

    #[test]
    fn test_cell_under_outside_board() {
        let layout = BoardLayout::fit(520.0, 520.0, 25, 25);
        assert_eq!(layout.cell_under(0.0, 0.0), None);
        assert_eq!(layout.cell_under(layout.origin_x + layout.width() + 1.0, 20.0), None);
    }
}
