use macroquad::prelude::*;

use crate::application::Session;
use crate::config::MAX_DIMENSION;
use crate::error::Result;
use crate::ui::{Action, BoardLayout, Button};

/// Speed bounds for the arrow keys, in steps per second
const MIN_FREQ: f32 = 1.0;
const MAX_FREQ: f32 = 60.0;

/// Log a rejected intent; the session is unchanged when this fires
fn report<T>(intent: &str, result: Result<T>) {
    if let Err(err) = result {
        log::warn!("{intent} rejected: {err}");
    }
}

/// Paint with the left button, erase with the right one.
/// Returns the hovered cell for the "Row / Col" readout.
pub fn handle_mouse_paint(
    session: &mut Session,
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
) -> Option<(usize, usize)> {
    let (row, col) = layout.cell_under(mouse_pos.0, mouse_pos.1)?;

    let paint = if is_mouse_button_down(MouseButton::Left) {
        Some(true)
    } else if is_mouse_button_down(MouseButton::Right) {
        Some(false)
    } else {
        None
    };

    if let Some(alive) = paint {
        report("paint", session.set_cell_at(row, col, alive));
    }
    Some((row, col))
}

/// Apply one panel action
pub fn apply_action(session: &mut Session, action: Action) {
    match action {
        Action::PlayPause => report("play/pause", session.toggle_playing()),
        Action::Step => {
            session.step();
        }
        Action::Clear => {
            session.clear();
        }
        Action::Random => report("randomize", session.randomize(None)),
        Action::Wrap => {
            let wrap = !session.wrap();
            session.set_wrap(wrap);
        }
        Action::Algorithm => {
            let next = session.algorithm().next();
            log::info!("step algorithm: {}", next.name());
            session.set_algorithm(next);
        }
    }
}

/// Forward clicked panel buttons to the session
pub fn process_button_clicks(session: &mut Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .for_each(|btn| apply_action(session, btn.action()));
}

/// Keyboard shortcuts
pub fn process_keyboard_input(session: &mut Session) {
    let actions = [
        (KeyCode::Space, Action::PlayPause),
        (KeyCode::P, Action::PlayPause),
        (KeyCode::N, Action::Step),
        (KeyCode::R, Action::Random),
        (KeyCode::C, Action::Clear),
        (KeyCode::W, Action::Wrap),
        (KeyCode::A, Action::Algorithm),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| apply_action(session, *action));

    if is_key_pressed(KeyCode::Up) {
        adjust_speed(session, 1.0);
    }
    if is_key_pressed(KeyCode::Down) {
        adjust_speed(session, -1.0);
    }

    let (rows, cols) = session.grid().dimensions();
    let resize = [
        (KeyCode::RightBracket, 1, 0),
        (KeyCode::LeftBracket, -1, 0),
        (KeyCode::Equal, 0, 1),
        (KeyCode::Minus, 0, -1),
    ]
    .into_iter()
    .find(|(key, _, _)| is_key_pressed(*key));

    if let Some((_, dr, dc)) = resize {
        let new_rows = (rows as i64 + dr).min(MAX_DIMENSION as i64);
        let new_cols = (cols as i64 + dc).min(MAX_DIMENSION as i64);
        report("resize", session.resize(new_rows, new_cols));
    }
}

fn adjust_speed(session: &mut Session, delta: f32) {
    let freq = (session.freq() + delta).clamp(MIN_FREQ, MAX_FREQ);
    report("speed", session.set_freq(freq));
}
