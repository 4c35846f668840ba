//! MVVM Todo Frontend Entry Point

mod dom;
mod storage;
mod view;
mod viewmodel;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use storage::LocalStorage;
use todo_model::TodoModel;
use view::View;
use viewmodel::ViewModel;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = run() {
        web_sys::console::error_1(&err);
    }
}

/// Composition root: owns the storage, model, view and view-model wiring
/// and triggers the one explicit initial render.
fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let storage = LocalStorage::new(&window)?;
    let model = Rc::new(RefCell::new(TodoModel::new(Rc::new(storage))));
    let view = Rc::new(View::new(&document)?);

    let app = ViewModel::new(view, model)?;
    app.render();
    Ok(())
}
