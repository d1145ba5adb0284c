//! Browser DOM host.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::StyleHost;
use crate::error::{InjectError, Result};

/// The live document, or `NoDocument` outside a window context (workers,
/// server-side runtimes).
pub fn browser_document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(InjectError::NoDocument)
}

fn js_error(value: JsValue) -> InjectError {
    InjectError::dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl StyleHost for Document {
    type Element = Element;

    fn remove_by_id(&self, id: &str) -> bool {
        match self.get_element_by_id(id) {
            Some(node) => {
                node.remove();
                true
            }
            None => false,
        }
    }

    fn append_style(&self, id: &str, css: &str) -> Result<()> {
        let head = self.head().ok_or(InjectError::NoHead)?;
        let style = self.create_element("style").map_err(js_error)?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(js_error)?;
        Ok(())
    }

    // An invalid selector throws in the browser; treat it as no match.
    fn query_selector(&self, selector: &str) -> Option<Element> {
        Document::query_selector(self, selector).ok().flatten()
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<()> {
        element.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }
}
