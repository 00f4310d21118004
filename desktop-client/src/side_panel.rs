use eframe::egui;
use engine::game::GameSession;

use crate::app::StatusMessage;

pub fn render_side_panel(
    ui: &mut egui::Ui,
    session: &GameSession,
    status: Option<&StatusMessage>,
) {
    ui.heading("Snake Remake");
    ui.separator();

    ui.strong("Statistics");
    ui.label(format!("Total Score: {}", session.score()));
    ui.label(format!("Fruit Eaten: {}", session.fruits_eaten()));
    ui.label(format!("Extra Score: {}", session.next_fruit_bonus()));

    ui.separator();
    ui.strong("Controls");
    ui.label("Move: Arrow keys");
    ui.label("Pause: P");
    ui.label("New Game: Enter");
    ui.label("Save Game: S");
    ui.label("Load Game: L");

    ui.separator();
    ui.strong("Fruits");
    ui.label("Red: +1 tile, +50 pts");
    ui.label("Blue: +2 tiles, +100 pts");
    ui.label("Green: +3 tiles, +200 pts");
    ui.label("Brown: game over");

    if let Some(status) = status {
        ui.separator();
        let color = if status.is_error {
            egui::Color32::LIGHT_RED
        } else {
            egui::Color32::LIGHT_GREEN
        };
        ui.colored_label(color, &status.text);
    }
}
