//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use rusqlite::Row;
use todo_core::todo::TodoEntry;

/// Convert a SQLite row to a TodoEntry.
///
/// Expected columns: id, description, done
pub fn row_to_todo(row: &Row) -> rusqlite::Result<TodoEntry> {
    let id: i64 = row.get(0)?;
    let description: String = row.get(1)?;
    let done: i64 = row.get(2)?;

    Ok(TodoEntry {
        id,
        description,
        done: int_to_bool(done),
    })
}

/// SQLite has no boolean type; any non-zero integer counts as done.
pub fn int_to_bool(value: i64) -> bool {
    value != 0
}

pub fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_round_trip() {
        assert_eq!(bool_to_int(true), 1);
        assert_eq!(bool_to_int(false), 0);
        assert!(int_to_bool(1));
        assert!(!int_to_bool(0));
    }

    #[test]
    fn test_any_nonzero_is_done() {
        assert!(int_to_bool(2));
        assert!(int_to_bool(-1));
    }

    #[test]
    fn test_row_to_todo() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let entry = conn
            .query_row("SELECT 3, 'water plants', 1", [], row_to_todo)
            .unwrap();

        assert_eq!(entry, TodoEntry::new(3, "water plants").with_done(true));
    }
}
