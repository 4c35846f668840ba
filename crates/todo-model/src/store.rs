//! Record Store
//!
//! Single source of truth for the todo list. Every mutation replaces the
//! whole list value (copy-on-write) and fans out through the wrapped
//! [`Notifier`]; a persistence listener registered at construction writes
//! the serialized list back to storage on every change.

use std::rc::Rc;

use crate::notify::Notifier;
use crate::todo::Todo;

/// Fixed key the serialized list is stored under.
pub const STORAGE_KEY: &str = "todos";

/// Durable key-value boundary. `load` returns the raw JSON previously saved
/// under [`STORAGE_KEY`], or `None` when nothing was stored.
pub trait TodoStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, json: &str);
}

/// The MVVM Model: owns the list, all mutation goes through it.
///
/// Single-threaded by design; the list has exactly one owner and every
/// listener runs synchronously inside the mutating call.
pub struct TodoModel {
    todos: Notifier<Vec<Todo>>,
}

impl TodoModel {
    /// Load the persisted list (absent or unparsable input becomes an empty
    /// list) and register the write-back listener before any subscriber.
    pub fn new(storage: Rc<dyn TodoStorage>) -> Self {
        let initial = storage.load().map(|raw| decode(&raw)).unwrap_or_default();
        let mut todos = Notifier::new(initial);
        todos.subscribe(move |list: &Vec<Todo>| match serde_json::to_string(list) {
            Ok(json) => storage.save(&json),
            Err(err) => log::warn!("failed to serialize todos: {err}"),
        });
        Self { todos }
    }

    /// Current list snapshot.
    pub fn todos(&self) -> &[Todo] {
        self.todos.get()
    }

    /// Register a listener invoked with the full list on every change, in
    /// registration order (after the persistence write-back).
    pub fn subscribe(&mut self, mut listener: impl FnMut(&[Todo]) + 'static) {
        self.todos.subscribe(move |todos| listener(todos));
    }

    /// Append a new incomplete record. The id comes from the last record
    /// only, not the global max, so deleting the tail and re-adding can
    /// reuse an id; kept as-is from the original demo.
    pub fn add_todo(&mut self, text: &str) {
        let next_id = self.todos.get().last().map(|todo| todo.id + 1).unwrap_or(1);
        let mut next = self.todos.get().clone();
        next.push(Todo::new(next_id, text));
        self.todos.set(next);
    }

    /// Replace the text of the matching record, preserving its completion
    /// flag and position. An unknown id leaves the content unchanged but
    /// still notifies.
    pub fn edit_todo(&mut self, id: u32, new_text: &str) {
        let next = self
            .todos
            .get()
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Todo {
                        id: todo.id,
                        text: new_text.to_string(),
                        complete: todo.complete,
                    }
                } else {
                    todo.clone()
                }
            })
            .collect();
        self.todos.set(next);
    }

    /// Remove the matching record, preserving the relative order of the
    /// rest. An unknown id is a natural no-op that still notifies.
    pub fn delete_todo(&mut self, id: u32) {
        let next = self
            .todos
            .get()
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect();
        self.todos.set(next);
    }

    /// Invert the completion flag of the matching record. An unknown id
    /// leaves the content unchanged but still notifies.
    pub fn toggle_todo(&mut self, id: u32) {
        let next = self
            .todos
            .get()
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Todo {
                        id: todo.id,
                        text: todo.text.clone(),
                        complete: !todo.complete,
                    }
                } else {
                    todo.clone()
                }
            })
            .collect();
        self.todos.set(next);
    }
}

fn decode(raw: &str) -> Vec<Todo> {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::warn!("stored todos are unparsable, starting empty: {err}");
        Vec::new()
    })
}
