use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod level;
pub mod positions;

pub use level::{GridSize, Level, Position, WordPositions};
pub use positions::{add_positions, positions_for_word, random_position, word_positions};

/// Where the game keeps its level table, relative to the project root.
pub const DEFAULT_LEVELS_PATH: &str = "assets/json/word_game_lv.json";

#[derive(Debug, Clone)]
pub struct PositionSettings {
    pub levels_path: PathBuf,
    pub grid: GridSize,
}

impl Default for PositionSettings {
    fn default() -> Self {
        Self {
            levels_path: PathBuf::from(DEFAULT_LEVELS_PATH),
            grid: GridSize::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WordGridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WordGridError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub levels: usize,
    pub words: usize,
}

pub fn load_levels(path: &Path) -> Result<Vec<Level>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes the table back in the game's layout: two-space indent, UTF-8
/// letters left unescaped, no trailing newline.
pub fn save_levels(path: &Path, levels: &[Level]) -> Result<()> {
    let data = serde_json::to_string_pretty(levels)?;
    fs::write(path, data)?;
    Ok(())
}

/// Loads the level file, gives every word a random spot per letter and
/// overwrites the file in place.
pub fn run(settings: PositionSettings) -> Result<RunSummary> {
    if settings.grid.is_empty() {
        return Err(WordGridError::Config(format!(
            "grid must be at least 1x1, got {}x{}",
            settings.grid.rows, settings.grid.cols
        )));
    }

    log::info!("reading levels from {}", settings.levels_path.display());
    let mut levels = load_levels(&settings.levels_path)?;

    positions::add_positions(&mut rand::thread_rng(), &mut levels, settings.grid);

    save_levels(&settings.levels_path, &levels)?;
    log::info!("wrote {} levels to {}", levels.len(), settings.levels_path.display());

    Ok(RunSummary {
        levels: levels.len(),
        words: levels.iter().map(|l| l.words().len()).sum(),
    })
}
