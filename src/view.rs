//! Presentation Layer
//!
//! Renders the todo list into the DOM and surfaces the four user intents
//! (add, delete, edit, toggle). Rendering is clear-and-rebuild, no diffing;
//! row-level events are delegated from the list container, so rows added by
//! later renders need no rebinding.

use std::cell::RefCell;
use std::rc::Rc;

use todo_model::Todo;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::dom::{self, ElementKind};

pub struct View {
    document: Document,
    title: Element,
    form: Element,
    input: HtmlInputElement,
    todo_list: Element,
    /// Text typed into a row's editable span, committed on focusout.
    edit_buffer: Rc<RefCell<String>>,
}

impl View {
    /// Build the static skeleton (heading, add-form, list) under `#root`
    /// and start buffering content-editable input.
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let root = document
            .query_selector("#root")?
            .ok_or_else(|| JsValue::from_str("missing #root container"))?;

        let title = dom::create(document, ElementKind::Heading, None)?;
        title.set_text_content(Some("Todos"));

        let form = dom::create(document, ElementKind::Form, None)?;
        let input: HtmlInputElement = dom::create(document, ElementKind::Input, None)?
            .dyn_into()
            .map_err(JsValue::from)?;
        input.set_type("text");
        input.set_placeholder("Add todo");
        input.set_name("todo");
        let submit = dom::create(document, ElementKind::Button, None)?;
        submit.set_text_content(Some("Submit"));
        form.append_child(&input)?;
        form.append_child(&submit)?;

        let todo_list = dom::create(document, ElementKind::List, Some("todo-list"))?;

        root.append_child(&title)?;
        root.append_child(&form)?;
        root.append_child(&todo_list)?;

        let view = Self {
            document: document.clone(),
            title,
            form,
            input,
            todo_list,
            edit_buffer: Rc::new(RefCell::new(String::new())),
        };
        view.bind_edit_buffer()?;
        Ok(view)
    }

    /// Clear the list and rebuild it from the given snapshot.
    pub fn render(&self, todos: &[Todo]) -> Result<(), JsValue> {
        while let Some(child) = self.todo_list.first_child() {
            self.todo_list.remove_child(&child)?;
        }

        self.title
            .set_text_content(Some(&format!("Todos ({})", todos.len())));

        if todos.is_empty() {
            let placeholder = dom::create(&self.document, ElementKind::Paragraph, None)?;
            placeholder.set_text_content(Some("Nothing to do! Add a task?"));
            self.todo_list.append_child(&placeholder)?;
            return Ok(());
        }

        for todo in todos {
            let row = dom::create(&self.document, ElementKind::ListItem, None)?;
            row.set_id(&todo.id.to_string());

            let checkbox: HtmlInputElement = dom::create(&self.document, ElementKind::Input, None)?
                .dyn_into()
                .map_err(JsValue::from)?;
            checkbox.set_type("checkbox");
            checkbox.set_checked(todo.complete);

            let text: HtmlElement = dom::create(&self.document, ElementKind::Span, Some("editable"))?
                .dyn_into()
                .map_err(JsValue::from)?;
            text.set_content_editable("true");
            if todo.complete {
                let strike = dom::create(&self.document, ElementKind::Strikethrough, None)?;
                strike.set_text_content(Some(&todo.text));
                text.append_child(&strike)?;
            } else {
                text.set_text_content(Some(&todo.text));
            }

            let delete = dom::create(&self.document, ElementKind::Button, Some("delete"))?;
            delete.set_text_content(Some("Delete"));

            row.append_child(&checkbox)?;
            row.append_child(&text)?;
            row.append_child(&delete)?;
            self.todo_list.append_child(&row)?;
        }
        Ok(())
    }

    /// Add intent: fires on form submit when the input is non-empty; the
    /// field is cleared after submission.
    pub fn bind_add_todo(&self, handler: impl Fn(String) + 'static) -> Result<(), JsValue> {
        let input = self.input.clone();
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let text = input.value();
            if !text.is_empty() {
                handler(text);
                input.set_value("");
            }
        });
        self.form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
        Ok(())
    }

    /// Delete intent: delegated click on a row's delete button.
    pub fn bind_delete_todo(&self, handler: impl Fn(u32) + 'static) -> Result<(), JsValue> {
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(element) = target_element(&event) {
                if element.class_name() == "delete" {
                    if let Some(id) = row_id(&element) {
                        handler(id);
                    }
                }
            }
        });
        self.todo_list
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    /// Edit intent: delegated focusout commits the buffered text when
    /// non-empty, then clears the buffer so unrelated focus changes do not
    /// re-fire.
    pub fn bind_edit_todo(&self, handler: impl Fn(u32, String) + 'static) -> Result<(), JsValue> {
        let buffer = self.edit_buffer.clone();
        let on_focusout = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let text = {
                let mut buffer = buffer.borrow_mut();
                if buffer.is_empty() {
                    return;
                }
                std::mem::take(&mut *buffer)
            };
            if let Some(id) = target_element(&event).as_ref().and_then(row_id) {
                handler(id, text);
            }
        });
        self.todo_list
            .add_event_listener_with_callback("focusout", on_focusout.as_ref().unchecked_ref())?;
        on_focusout.forget();
        Ok(())
    }

    /// Toggle intent: delegated change event on a row's checkbox.
    pub fn bind_toggle_todo(&self, handler: impl Fn(u32) + 'static) -> Result<(), JsValue> {
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(element) = target_element(&event) {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    if input.type_() == "checkbox" {
                        if let Some(id) = row_id(&element) {
                            handler(id);
                        }
                    }
                }
            }
        });
        self.todo_list
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
        Ok(())
    }

    // Track typing inside editable spans so focusout can commit it.
    fn bind_edit_buffer(&self) -> Result<(), JsValue> {
        let buffer = self.edit_buffer.clone();
        let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(element) = target_element(&event) {
                if element.class_name() == "editable" {
                    if let Some(span) = element.dyn_ref::<HtmlElement>() {
                        *buffer.borrow_mut() = span.inner_text();
                    }
                }
            }
        });
        self.todo_list
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
        Ok(())
    }
}

fn target_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Id of the row (`li`) containing the element, parsed from its id attribute.
fn row_id(element: &Element) -> Option<u32> {
    element.parent_element()?.id().parse().ok()
}
