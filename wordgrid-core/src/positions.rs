use rand::Rng;

use crate::level::{GridSize, Level, Position, WordPositions};

/// Picks any cell of the grid. Cells are not reserved, so two letters (even
/// of the same word) may land on the same spot.
///
/// `grid` must have at least one row and one column.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Position {
    Position {
        row: rng.gen_range(0..grid.rows),
        col: rng.gen_range(0..grid.cols),
    }
}

pub fn positions_for_word<R: Rng + ?Sized>(rng: &mut R, word: &str, grid: GridSize) -> Vec<Position> {
    word.chars().map(|_| random_position(rng, grid)).collect()
}

/// Builds the `word_positions` table for one level.
///
/// Keys are the uppercased words in their original order. A word listed
/// twice keeps its first slot but gets the positions drawn last.
pub fn word_positions<R, S>(rng: &mut R, words: &[S], grid: GridSize) -> WordPositions
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut table = WordPositions::with_capacity(words.len());
    for word in words {
        let upper = word.as_ref().to_uppercase();
        let positions = positions_for_word(rng, &upper, grid);
        table.insert(upper, positions);
    }
    table
}

/// Attaches fresh positions and the grid size to every level. Any positions
/// already present are thrown away.
pub fn add_positions<R: Rng + ?Sized>(rng: &mut R, levels: &mut [Level], grid: GridSize) {
    for (index, level) in levels.iter_mut().enumerate() {
        let table = word_positions(rng, level.words(), grid);
        level.place(&table, grid);

        log::debug!(
            "level {index}: {} words placed, {} letters in pool",
            table.len(),
            level.letter_pool().count(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn level(words: &[&str], letters: &str) -> Level {
        serde_json::from_value(serde_json::json!({ "words": words, "letters": letters })).unwrap()
    }

    #[test]
    fn one_position_per_letter() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridSize::default();
        for word in ["A", "CAT", "ELEPHANT", ""] {
            let positions = positions_for_word(&mut rng, word, grid);
            assert_eq!(positions.len(), word.chars().count());
        }
    }

    #[test]
    fn positions_stay_inside_grid() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let grid = GridSize::default();
        for _ in 0..2000 {
            let pos = random_position(&mut rng, grid);
            assert!(pos.row <= 4 && pos.col <= 4, "{pos:?}");
        }
    }

    #[test]
    fn every_cell_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = GridSize::default();
        let mut seen = [[false; 5]; 5];
        for _ in 0..2000 {
            let pos = random_position(&mut rng, grid);
            seen[pos.row as usize][pos.col as usize] = true;
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }

    #[test]
    fn non_square_grid_respects_each_axis() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = GridSize::new(2, 7);
        for _ in 0..500 {
            assert!(grid.contains(random_position(&mut rng, grid)));
        }
    }

    #[test]
    fn table_is_keyed_by_uppercase_in_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let table = word_positions(&mut rng, &["cat", "Dog", "EMU"], GridSize::default());
        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["CAT", "DOG", "EMU"]);
        assert_eq!(table["CAT"].len(), 3);
    }

    #[test]
    fn non_ascii_words_are_uppercased_per_char() {
        let mut rng = StdRng::seed_from_u64(5);
        let table = word_positions(&mut rng, &["çay", "göz"], GridSize::default());
        assert_eq!(table["ÇAY"].len(), 3);
        assert_eq!(table["GÖZ"].len(), 3);
    }

    #[test]
    fn duplicate_word_keeps_first_slot_and_last_draw() {
        let grid = GridSize::default();
        let mut rng = StdRng::seed_from_u64(11);
        let table = word_positions(&mut rng, &["sun", "sea", "SUN"], grid);
        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["SUN", "SEA"]);

        let mut replay = StdRng::seed_from_u64(11);
        positions_for_word(&mut replay, "SUN", grid);
        let sea = positions_for_word(&mut replay, "SEA", grid);
        let last_sun = positions_for_word(&mut replay, "SUN", grid);
        assert_eq!(table["SEA"], sea);
        assert_eq!(table["SUN"], last_sun);
    }

    #[test]
    fn add_positions_fills_every_level() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut levels = vec![
            level(&["cat"], "c,a,t"),
            level(&["tea", "eat", "ate"], "t,e,a"),
            level(&[], ""),
        ];
        add_positions(&mut rng, &mut levels, GridSize::default());

        for level in &levels {
            assert_eq!(level.grid_size(), Some(GridSize::new(5, 5)));
            let table = level.word_positions().unwrap();
            assert_eq!(table.len(), level.words().len());
            for word in level.words() {
                let positions = &table[&word.to_uppercase()];
                assert_eq!(positions.len(), word.chars().count());
            }
        }
    }

    #[test]
    fn add_positions_replaces_existing_table() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut levels = vec![level(&["cat"], "c,a,t")];
        let mut stale = WordPositions::new();
        stale.insert("OLD".to_string(), vec![Position { row: 9, col: 9 }]);
        levels[0].place(&stale, GridSize::new(9, 9));

        add_positions(&mut rng, &mut levels, GridSize::default());

        let table = levels[0].word_positions().unwrap();
        assert!(!table.contains_key("OLD"));
        assert!(table.contains_key("CAT"));
        assert_eq!(levels[0].grid_size(), Some(GridSize::default()));
    }
}
