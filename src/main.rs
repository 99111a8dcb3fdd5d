use macroquad::prelude::*;
use toroidal_life::{Session, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: 900,
        window_height: 620,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // Default 25x25 wrapped board, randomly seeded
    let mut session = Session::new();
    log::info!(
        "starting with a {}x{} board, {} alive",
        session.grid().rows(),
        session.grid().cols(),
        session.alive()
    );

    loop {
        let mouse_pos = mouse_position();
        let (rows, cols) = session.grid().dimensions();
        let layout = ui::BoardLayout::for_screen(rows, cols);
        let buttons = ui::create_buttons(session.is_running());

        // Intents
        input::process_button_clicks(&mut session, &buttons, mouse_pos);
        input::process_keyboard_input(&mut session);
        let hovered = input::handle_mouse_paint(&mut session, &layout, mouse_pos);

        // Playback
        session.tick(get_frame_time());

        // Render from a snapshot, after every intent of this frame is applied
        clear_background(BLACK);
        let (rows, cols) = session.grid().dimensions();
        let layout = ui::BoardLayout::for_screen(rows, cols);
        let snapshot = session.snapshot();
        rendering::draw_board(&snapshot, &layout);
        rendering::draw_controls(
            &snapshot,
            &buttons,
            mouse_pos,
            hovered,
            session.last_step_time_ms,
        );

        next_frame().await;
    }
}
