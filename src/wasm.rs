//! WASM bindings for the browser.
//!
//! Exposes the generator and the injector to JavaScript via wasm-bindgen
//! under the same names as the npm package (`generateScrollbarCSS`, ...).
//! Build with: `wasm-pack build --target web --features wasm`

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::inject::web::browser_document;
use crate::inject::{Cancel, Injector, StyleHost, Target};
use crate::options::StyleOptions;

/// Log through `tracing` and mirror to the browser console, which has no
/// subscriber of its own.
fn warn(msg: &str) {
    tracing::warn!("{msg}");
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// `undefined`/`null` mean defaults; a malformed object is reported and also
/// falls back to defaults so no binding ever throws.
fn options_from(value: JsValue) -> StyleOptions {
    if value.is_undefined() || value.is_null() {
        return StyleOptions::default();
    }
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        warn(&format!("StylisticScroll: invalid options ({e}), using defaults"));
        StyleOptions::default()
    })
}

fn noop_fn() -> Function {
    Closure::<dyn FnMut()>::new(|| {})
        .into_js_value()
        .unchecked_into()
}

/// Wrap a cancel handle as a JS function that can be called repeatedly.
fn cancel_fn<H: StyleHost + 'static>(cancel: Cancel<H>) -> Function {
    Closure::<dyn FnMut()>::new(move || cancel.cancel())
        .into_js_value()
        .unchecked_into()
}

/// Generate the global scrollbar CSS. Works without a document.
#[wasm_bindgen(js_name = generateScrollbarCSS)]
pub fn generate_scrollbar_css(options: JsValue) -> String {
    crate::css::generate(&options_from(options))
}

/// Style every scrollbar on the page. Returns a cleanup function.
#[wasm_bindgen(js_name = applyScrollbarStyles)]
pub fn apply_scrollbar_styles(options: JsValue) -> Function {
    let document = match browser_document() {
        Ok(d) => d,
        Err(e) => {
            warn(&format!("StylisticScroll: {e}"));
            return noop_fn();
        }
    };
    match Injector::new(document).try_apply(&options_from(options)) {
        Ok(cancel) => cancel_fn(cancel),
        Err(e) => {
            warn(&format!("StylisticScroll: {e}"));
            noop_fn()
        }
    }
}

/// Style the scrollbars of one element, given as an element or a selector.
/// Returns a cleanup function.
#[wasm_bindgen(js_name = applyScrollbarStylesToElement)]
pub fn apply_scrollbar_styles_to_element(element: JsValue, options: JsValue) -> Function {
    let document = match browser_document() {
        Ok(d) => d,
        Err(e) => {
            warn(&format!("StylisticScroll: {e}"));
            return noop_fn();
        }
    };

    let target = if let Some(selector) = element.as_string() {
        Target::Selector(selector)
    } else {
        match element.dyn_into::<web_sys::Element>() {
            Ok(el) => Target::Handle(el),
            Err(_) => {
                warn("StylisticScroll: Element not found");
                return noop_fn();
            }
        }
    };

    match Injector::new(document).try_apply_to(target, &options_from(options)) {
        Ok(cancel) => cancel_fn(cancel),
        Err(e) => {
            warn(&format!("StylisticScroll: {e}"));
            noop_fn()
        }
    }
}

/// The default options as a plain JS object.
#[wasm_bindgen(js_name = defaultOptions)]
pub fn default_options() -> JsValue {
    StyleOptions::default()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}
