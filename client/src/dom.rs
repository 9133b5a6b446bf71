//! Thin DOM access helpers.
//!
//! ERROR HANDLING
//! ==============
//! Every fallible web-sys call is funnelled into [`DomError`] so handlers can
//! use `?` and the dispatcher logs one line per failure instead of panicking.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "csr")]
use web_sys::{Document, Element, HtmlElement, Window};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element `{0}` is missing")]
    MissingElement(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "csr")]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

#[cfg(feature = "csr")]
pub fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

/// First element matching `selector`, if any.
#[cfg(feature = "csr")]
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, DomError> {
    Ok(document.query_selector(selector)?)
}

/// Every element matching `selector`, in document order.
#[cfg(feature = "csr")]
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(Ok(element)) = nodes.get(i).map(|node| node.dyn_into::<Element>()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

#[cfg(feature = "csr")]
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

#[cfg(feature = "csr")]
pub fn scroll_y(window: &Window) -> Result<f64, DomError> {
    Ok(window.scroll_y()?)
}

#[cfg(feature = "csr")]
pub fn viewport_height(window: &Window) -> Result<f64, DomError> {
    window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".to_owned()))
}

/// Set an inline style property on an element that is an `HtmlElement`.
#[cfg(feature = "csr")]
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), DomError> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

#[cfg(feature = "csr")]
pub fn clear_style(element: &Element, property: &str) -> Result<(), DomError> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().remove_property(property)?;
    }
    Ok(())
}
