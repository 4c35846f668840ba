//! Todo Model Layer
//!
//! Owns the canonical todo list (the MVVM "Model") and the notification
//! primitives it is built on. Contains no browser types, so it compiles and
//! tests on the native target.

mod notify;
mod store;
mod todo;

pub use notify::{Notifier, ObservableField};
pub use store::{TodoModel, TodoStorage, STORAGE_KEY};
pub use todo::Todo;
