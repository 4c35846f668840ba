//! Coordinator
//!
//! Wires view intents to model mutations and model change notifications to
//! re-renders. No business logic of its own; subscriptions are established
//! once at construction and never torn down.

use std::cell::RefCell;
use std::rc::Rc;

use todo_model::TodoModel;
use wasm_bindgen::JsValue;

use crate::view::View;

pub struct ViewModel {
    view: Rc<View>,
    model: Rc<RefCell<TodoModel>>,
}

impl ViewModel {
    pub fn new(view: Rc<View>, model: Rc<RefCell<TodoModel>>) -> Result<Self, JsValue> {
        let vm = Self { view, model };
        vm.model_bind_view();
        vm.view_bind_model()?;
        Ok(vm)
    }

    fn model_bind_view(&self) {
        let view = self.view.clone();
        self.model.borrow_mut().subscribe(move |todos| {
            if let Err(err) = view.render(todos) {
                web_sys::console::error_1(&err);
            }
        });
    }

    fn view_bind_model(&self) -> Result<(), JsValue> {
        let model = self.model.clone();
        self.view
            .bind_add_todo(move |text| model.borrow_mut().add_todo(&text))?;

        let model = self.model.clone();
        self.view
            .bind_delete_todo(move |id| model.borrow_mut().delete_todo(id))?;

        let model = self.model.clone();
        self.view
            .bind_edit_todo(move |id, text| model.borrow_mut().edit_todo(id, &text))?;

        let model = self.model.clone();
        self.view
            .bind_toggle_todo(move |id| model.borrow_mut().toggle_todo(id))?;
        Ok(())
    }

    /// Explicit initial pull-render; the store does not render on
    /// construction.
    pub fn render(&self) {
        if let Err(err) = self.view.render(self.model.borrow().todos()) {
            web_sys::console::error_1(&err);
        }
    }
}
