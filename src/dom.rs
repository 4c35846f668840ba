//! DOM Element Builder
//!
//! Explicit tagged builder for the handful of element kinds the view uses.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Element kinds the view renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementKind {
    Form,
    Input,
    Button,
    Heading,
    List,
    ListItem,
    Paragraph,
    Span,
    Strikethrough,
}

impl ElementKind {
    fn tag(self) -> &'static str {
        match self {
            ElementKind::Form => "form",
            ElementKind::Input => "input",
            ElementKind::Button => "button",
            ElementKind::Heading => "h1",
            ElementKind::List => "ul",
            ElementKind::ListItem => "li",
            ElementKind::Paragraph => "p",
            ElementKind::Span => "span",
            ElementKind::Strikethrough => "s",
        }
    }
}

/// Create an element of the given kind, optionally with a class.
pub fn create(
    document: &Document,
    kind: ElementKind,
    class: Option<&str>,
) -> Result<Element, JsValue> {
    let element = document.create_element(kind.tag())?;
    if let Some(class) = class {
        element.class_list().add_1(class)?;
    }
    Ok(element)
}
