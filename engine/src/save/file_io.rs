use std::io::{Read, Write};
use std::path::Path;

use super::saved_game::SavedGame;
use super::{SAVE_FILE_EXTENSION, SAVE_VERSION};

#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    EmptyFile,
    UnexpectedEof,
    UnsupportedVersion { found: u8, expected: u8 },
    InvalidTile(u8),
    InvalidDirection(u8),
    EmptyDirectionQueue,
    FieldSizeMismatch {
        found: (usize, usize),
        expected: (usize, usize),
    },
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::EmptyFile => write!(f, "Empty save file"),
            SaveError::UnexpectedEof => write!(f, "Save file is truncated"),
            SaveError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported save version: found {}, expected {}", found, expected)
            }
            SaveError::InvalidTile(code) => write!(f, "Unknown tile marker: {}", code),
            SaveError::InvalidDirection(code) => write!(f, "Unknown direction: {}", code),
            SaveError::EmptyDirectionQueue => {
                write!(f, "Saved game has no queued direction")
            }
            SaveError::FieldSizeMismatch { found, expected } => write!(
                f,
                "Saved field is {}x{}, current game uses {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

pub fn save_game(path: &Path, game: &SavedGame) -> Result<(), SaveError> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(&save_game_to_bytes(game))?;
    Ok(())
}

pub fn save_game_to_bytes(game: &SavedGame) -> Vec<u8> {
    let mut result = vec![SAVE_VERSION];
    result.extend(game.encode_to_vec());
    result
}

pub fn load_game(path: &Path) -> Result<SavedGame, SaveError> {
    let mut file = std::fs::File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    load_game_from_bytes(&buffer)
}

pub fn load_game_from_bytes(bytes: &[u8]) -> Result<SavedGame, SaveError> {
    if bytes.is_empty() {
        return Err(SaveError::EmptyFile);
    }

    let version = bytes[0];
    if version != SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion {
            found: version,
            expected: SAVE_VERSION,
        });
    }

    SavedGame::decode(&bytes[1..])
}

/// Default file name offered in the save dialog.
pub fn generate_save_filename(engine_version: &str) -> String {
    let now = chrono::Local::now();
    let timestamp = now.format("%Y%m%d%H%M%S");
    let sanitized_version = engine_version.replace('.', "_");

    format!("{}_SNAKE_{}.{}", timestamp, sanitized_version, SAVE_FILE_EXTENSION)
}
