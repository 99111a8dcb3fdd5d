use macroquad::prelude::*;

/// Intent a panel button forwards to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Step,
    Clear,
    Random,
    Wrap,
    Algorithm,
}

/// Panel button with hover highlight
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    action: Action,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            action,
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
