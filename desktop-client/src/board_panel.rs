use eframe::egui;
use engine::game::GameSession;

use crate::colors;

pub const TILE_SIZE: f32 = 20.0;

pub fn render_board(ui: &mut egui::Ui, session: &GameSession) {
    let field_size = session.board().field_size();
    let canvas = egui::Vec2::new(
        field_size.width as f32 * TILE_SIZE,
        field_size.height as f32 * TILE_SIZE,
    );

    let (response, painter) = ui.allocate_painter(canvas, egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, colors::BOARD_BACKGROUND);

    for (i, tile) in session.board().tiles().iter().enumerate() {
        let Some(tile) = tile else {
            continue;
        };
        let x = (i % field_size.width) as f32;
        let y = (i / field_size.width) as f32;
        let tile_rect = egui::Rect::from_min_size(
            egui::pos2(rect.min.x + x * TILE_SIZE, rect.min.y + y * TILE_SIZE),
            egui::vec2(TILE_SIZE, TILE_SIZE),
        );
        painter.rect_filled(tile_rect.shrink(1.0), 2.0, colors::tile_color(*tile));
    }

    let message = if session.is_new_game() {
        Some(("Snake Remake", "Press Enter to start"))
    } else if session.is_game_over() {
        Some(("Game Over!", "Press Enter to try again"))
    } else if session.is_paused() {
        Some(("Paused", "Press P to resume"))
    } else {
        None
    };

    if let Some((title, hint)) = message {
        painter.text(
            rect.center() - egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(28.0),
            colors::OVERLAY_TEXT,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            hint,
            egui::FontId::proportional(16.0),
            colors::OVERLAY_TEXT,
        );
    }
}
