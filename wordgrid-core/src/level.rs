use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const WORD_POSITIONS_KEY: &str = "word_positions";
pub const GRID_SIZE_KEY: &str = "grid_size";

/// A single letter cell on the board, zero-based.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Board dimensions. Stored in level files as `[rows, cols]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "[u8; 2]", into = "[u8; 2]")]
pub struct GridSize {
    pub rows: u8,
    pub cols: u8,
}

impl GridSize {
    pub const fn new(rows: u8, cols: u8) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

impl From<[u8; 2]> for GridSize {
    fn from([rows, cols]: [u8; 2]) -> Self {
        Self { rows, cols }
    }
}

impl From<GridSize> for [u8; 2] {
    fn from(grid: GridSize) -> Self {
        [grid.rows, grid.cols]
    }
}

/// Uppercased word -> one position per letter, in spelling order.
pub type WordPositions = IndexMap<String, Vec<Position>>;

/// One entry of the level file.
///
/// The whole JSON object is kept as read, key order included, so writing it
/// back only touches the keys set by [`Level::place`]. `words` and `letters`
/// are required and parsed up front.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Level {
    words: Vec<String>,
    letters: String,
    fields: Map<String, Value>,
}

impl Level {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Letters offered to the player, split out of the comma-separated field.
    pub fn letter_pool(&self) -> impl Iterator<Item = &str> {
        self.letters
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `None` if the level has no table yet or carries one in another shape.
    pub fn word_positions(&self) -> Option<WordPositions> {
        WordPositions::deserialize(self.get(WORD_POSITIONS_KEY)?).ok()
    }

    /// `None` if the level has no grid size yet or carries one in another shape.
    pub fn grid_size(&self) -> Option<GridSize> {
        GridSize::deserialize(self.get(GRID_SIZE_KEY)?).ok()
    }

    /// Stores the table and grid size, whatever was under those keys before.
    /// Keys already present keep their place; new ones go at the end.
    pub fn place(&mut self, table: &WordPositions, grid: GridSize) {
        let table: Map<String, Value> = table
            .iter()
            .map(|(word, cells)| {
                let cells = cells
                    .iter()
                    .map(|p| json!({ "row": p.row, "col": p.col }))
                    .collect();
                (word.clone(), Value::Array(cells))
            })
            .collect();

        self.fields
            .insert(WORD_POSITIONS_KEY.to_string(), Value::Object(table));
        self.fields
            .insert(GRID_SIZE_KEY.to_string(), json!([grid.rows, grid.cols]));
    }
}

fn required<'a>(fields: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, serde_json::Error> {
    fields
        .get(key)
        .ok_or_else(|| serde_json::Error::missing_field(key))
}

impl TryFrom<Map<String, Value>> for Level {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let words = Vec::<String>::deserialize(required(&fields, "words")?)?;
        let letters = String::deserialize(required(&fields, "letters")?)?;
        Ok(Self {
            words,
            letters,
            fields,
        })
    }
}

impl From<Level> for Map<String, Value> {
    fn from(level: Level) -> Self {
        level.fields
    }
}
