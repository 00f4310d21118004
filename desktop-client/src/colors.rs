use eframe::egui;
use engine::game::{FruitKind, TileType};

pub const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x10, 0x10, 0x10);
pub const OVERLAY_TEXT: egui::Color32 = egui::Color32::WHITE;

pub fn tile_color(tile: TileType) -> egui::Color32 {
    match tile {
        TileType::SnakeHead => egui::Color32::from_rgb(0x00, 0x96, 0x00),
        TileType::SnakeBody => egui::Color32::from_rgb(0x46, 0xc8, 0x46),
        TileType::Fruit(FruitKind::Red) => egui::Color32::from_rgb(0xdc, 0x28, 0x28),
        TileType::Fruit(FruitKind::Blue) => egui::Color32::from_rgb(0x32, 0x6e, 0xf0),
        TileType::Fruit(FruitKind::Green) => egui::Color32::from_rgb(0x28, 0xdc, 0x64),
        TileType::Fruit(FruitKind::Bad) => egui::Color32::from_rgb(0x8b, 0x45, 0x13),
    }
}
