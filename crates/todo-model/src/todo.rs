//! Todo Record
//!
//! The single data structure the whole demo revolves around.

use serde::{Deserialize, Serialize};

/// One todo item. `id` is unique within the active list and never changes
/// once assigned; list position is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_starts_incomplete() {
        let todo = Todo::new(1, "buy milk");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "buy milk");
        assert!(!todo.complete);
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let todo = Todo {
            id: 7,
            text: "walk dog".to_string(),
            complete: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
