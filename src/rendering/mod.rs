use macroquad::prelude::*;

use crate::application::Snapshot;
use crate::ui::{BoardLayout, Button, PANEL_WIDTH, panel_x};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw every cell of the board
pub fn draw_board(snapshot: &Snapshot, layout: &BoardLayout) {
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_color = Color::from_rgba(15, 15, 15, 255);
    let line_color = Color::from_rgba(60, 60, 60, 255);
    let size = layout.cell_size;
    let draw_lines = size >= 4.0;

    for (i, cell) in snapshot.cells.iter().enumerate() {
        let (x, y) = layout.cell_origin(i / snapshot.cols, i % snapshot.cols);
        let color = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(x, y, size, size, color);
        if draw_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, line_color);
        }
    }

    // Frame color shows the edge policy
    let frame = if snapshot.wrap { SKYBLUE } else { ORANGE };
    draw_rectangle_lines(
        layout.origin_x - 2.0,
        layout.origin_y - 2.0,
        layout.width() + 4.0,
        layout.height() + 4.0,
        2.0,
        frame,
    );
}

fn draw_label(text: &str, y: f32, size: f32, color: Color) {
    draw_text(text, panel_x() + 10.0, y, size, color);
}

/// Draw the control panel: buttons, counters, settings and help
pub fn draw_controls(
    snapshot: &Snapshot,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    hovered: Option<(usize, usize)>,
    last_step_ms: f32,
) {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let stats = snapshot.stats;
    let info = [
        format!("Generation: {}", stats.generation),
        format!("Cells: {}", format_number(stats.cells)),
        format!("Alive: {}", format_number(stats.alive)),
        format!("Dead: {}", format_number(stats.dead)),
    ];
    let settings = [
        format!("Board: {}x{}", snapshot.rows, snapshot.cols),
        format!("Wrap: {}", if snapshot.wrap { "on" } else { "off" }),
        format!("Speed: {:.0} gen/s", snapshot.freq),
        format!("{} | {:.2}ms", snapshot.algorithm.name(), last_step_ms),
    ];

    let top = 300.0;
    for (i, line) in info.iter().enumerate() {
        draw_label(line, top + i as f32 * 18.0, 16.0, WHITE);
    }
    for (i, line) in settings.iter().enumerate() {
        draw_label(line, top + 85.0 + i as f32 * 16.0, 14.0, LIGHTGRAY);
    }

    let (status, color) = if snapshot.running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_label(status, top + 160.0, 18.0, color);

    let coords = match hovered {
        Some((row, col)) => format!("Row: {} Col: {}", row + 1, col + 1),
        None => "Row: - Col: -".to_string(),
    };
    draw_label(&coords, top + 185.0, 14.0, GRAY);

    let help = [
        "LMB paint / RMB erase",
        "Space/P play  N next",
        "R random  C clear",
        "W wrap  A algorithm",
        "Up/Down speed",
        "[ ] rows  - = cols",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_label(line, top + 215.0 + i as f32 * 14.0, 12.0, GRAY);
    }
}
