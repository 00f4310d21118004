mod file_io;
mod saved_game;

pub use file_io::{
    SaveError, generate_save_filename, load_game, load_game_from_bytes, save_game,
    save_game_to_bytes,
};
pub use saved_game::SavedGame;

pub const SAVE_FILE_EXTENSION: &str = "snakesave";
pub const SAVE_VERSION: u8 = 1;
