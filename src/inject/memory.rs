//! In-process document model.
//!
//! Tracks `<head>` style nodes and a flat list of elements with ids, tags
//! and class lists, which is all the injector touches. Used headless (CLI
//! previews, server-side rendering) and in tests. Shared through `Rc`, so
//! clones observe the same document and it stays on one thread like the
//! browser DOM.

use std::cell::RefCell;
use std::rc::Rc;

use super::StyleHost;
use crate::error::{InjectError, Result};

/// Handle to an element created with [`MemoryDocument::create_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef(usize);

impl ElementRef {
    #[cfg(test)]
    pub(crate) fn dangling() -> Self {
        Self(usize::MAX)
    }
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    dom: Rc<RefCell<Dom>>,
}

#[derive(Debug)]
struct Dom {
    has_head: bool,
    styles: Vec<StyleNode>,
    elements: Vec<ElementData>,
}

#[derive(Debug)]
struct StyleNode {
    id: String,
    text: String,
}

#[derive(Debug)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::with_head(true)
    }

    /// A document with no `<head>`; style injection fails with `NoHead`.
    pub fn without_head() -> Self {
        Self::with_head(false)
    }

    fn with_head(has_head: bool) -> Self {
        Self {
            dom: Rc::new(RefCell::new(Dom {
                has_head,
                styles: Vec::new(),
                elements: Vec::new(),
            })),
        }
    }

    pub fn create_element(&self, tag: &str, id: Option<&str>) -> ElementRef {
        let mut dom = self.dom.borrow_mut();
        dom.elements.push(ElementData {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: Vec::new(),
        });
        ElementRef(dom.elements.len() - 1)
    }

    /// Text of the style node keyed `id`.
    pub fn style_text(&self, id: &str) -> Option<String> {
        self.dom
            .borrow()
            .styles
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.text.clone())
    }

    /// Keys of all style nodes, in attach order.
    pub fn style_ids(&self) -> Vec<String> {
        self.dom.borrow().styles.iter().map(|s| s.id.clone()).collect()
    }

    /// Whether any style node or element carries `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        let dom = self.dom.borrow();
        dom.styles.iter().any(|s| s.id == id)
            || dom.elements.iter().any(|e| e.id.as_deref() == Some(id))
    }

    pub fn style_count(&self) -> usize {
        self.dom.borrow().styles.len()
    }

    pub fn classes_of(&self, element: ElementRef) -> Vec<String> {
        self.dom
            .borrow()
            .elements
            .get(element.0)
            .map(|e| e.classes.clone())
            .unwrap_or_default()
    }
}

impl ElementData {
    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else {
            self.tag.eq_ignore_ascii_case(selector)
        }
    }
}

impl StyleHost for MemoryDocument {
    type Element = ElementRef;

    fn remove_by_id(&self, id: &str) -> bool {
        let mut dom = self.dom.borrow_mut();
        match dom.styles.iter().position(|s| s.id == id) {
            Some(idx) => {
                dom.styles.remove(idx);
                true
            }
            None => false,
        }
    }

    fn append_style(&self, id: &str, css: &str) -> Result<()> {
        let mut dom = self.dom.borrow_mut();
        if !dom.has_head {
            return Err(InjectError::NoHead);
        }
        dom.styles.push(StyleNode {
            id: id.to_string(),
            text: css.to_string(),
        });
        Ok(())
    }

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }
        self.dom
            .borrow()
            .elements
            .iter()
            .position(|e| e.matches(selector))
            .map(ElementRef)
    }

    fn add_class(&self, element: &ElementRef, class: &str) -> Result<()> {
        let mut dom = self.dom.borrow_mut();
        let data = dom
            .elements
            .get_mut(element.0)
            .ok_or_else(|| InjectError::dom(format!("no element #{}", element.0)))?;
        // classList semantics: a token is present at most once.
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, element: &ElementRef, class: &str) {
        if let Some(data) = self.dom.borrow_mut().elements.get_mut(element.0) {
            data.classes.retain(|c| c != class);
        }
    }
}
