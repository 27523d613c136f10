//! Seed Board
//!
//! Initial columns and tasks, embedded at compile time. The snapshot is
//! parsed into owned values and moved into the store; nothing aliases it.

use serde::Deserialize;

use crate::board::Board;
use crate::error::Result;
use crate::models::Column;

const BUILTIN_SEED: &str = include_str!("seed.json");

/// Immutable board snapshot used to initialize the store
#[derive(Debug, Clone, Copy)]
pub struct BoardSeed {
    json: &'static str,
}

#[derive(Deserialize)]
struct SeedFile {
    columns: Vec<Column>,
}

impl BoardSeed {
    pub const fn builtin() -> Self {
        Self { json: BUILTIN_SEED }
    }

    pub const fn from_json(json: &'static str) -> Self {
        Self { json }
    }

    /// Parse into a fresh board
    pub fn load(&self) -> Result<Board> {
        let file: SeedFile = serde_json::from_str(self.json)?;
        Ok(Board::new(file.columns))
    }
}

impl Default for BoardSeed {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_builtin_seed_parses() {
        let board = BoardSeed::builtin().load().unwrap();
        let titles: Vec<_> = board.columns().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["To Do", "In Progress", "Review", "Done"]);
        assert_eq!(board.task_count(), 8);

        let assignees: Vec<_> = board.all_assignees().into_iter().map(|a| a.id).collect();
        assert_eq!(assignees, ["user-1", "user-2", "user-3"]);
    }

    #[test]
    fn test_each_load_is_independent() {
        let seed = BoardSeed::builtin();
        let mut first = seed.load().unwrap();
        first.delete_task("task-1").unwrap();

        let second = seed.load().unwrap();
        assert!(second.task_by_id("task-1").is_some());
    }

    #[test]
    fn test_created_task_follows_seed_numbering() {
        let mut board = BoardSeed::builtin().load().unwrap();
        let id = board.create_task("col-1", "Another").unwrap();
        assert_eq!(id, "task-9");
        assert_eq!(board.task_by_id(&id).unwrap().ticket_display(), "T-109");
    }

    #[test]
    fn test_invalid_seed_is_an_error() {
        let result = BoardSeed::from_json(r#"{ "columns": [ { "id": 1 } ] }"#).load();
        assert!(matches!(result, Err(BoardError::Seed(_))));
    }
}
