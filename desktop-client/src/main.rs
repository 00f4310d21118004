mod app;
mod audio;
mod board_panel;
mod colors;
mod config;
mod side_panel;

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;

use app::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_remake")]
struct Args {
    /// Saved game to load on startup.
    save_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    engine::logger::init_logger();
    let args = Args::parse();

    let config = config::get_config_manager()
        .get_config()
        .map_err(|e| format!("Failed to load config: {}", e))?;

    let board_width = config.field_width as f32 * board_panel::TILE_SIZE;
    let board_height = config.field_height as f32 * board_panel::TILE_SIZE;
    let window_size = [
        board_width + app::SIDE_PANEL_WIDTH + 40.0,
        board_height + 20.0,
    ];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title("Snake Remake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Remake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(&config, args.save_file)))),
    )?;

    Ok(())
}
