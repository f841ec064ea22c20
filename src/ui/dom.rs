//! Small web-sys helpers shared by the interaction modules
//!
//! Every lookup returns an `Option` or a [`InteractionError`]; nothing here panics when
//! the page is missing an element.

use leptos::wasm_bindgen::{JsCast, JsValue};
use leptos::web_sys;

use crate::core::InteractionError;
use crate::core::effects::StylePatch;

/// Convert a thrown JS value into an [`InteractionError`]
pub fn js_error(value: JsValue) -> InteractionError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    InteractionError::Js(message)
}

pub fn document() -> Result<web_sys::Document, InteractionError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| InteractionError::missing("document"))
}

/// Element with the given id
pub fn by_id(id: &str) -> Result<web_sys::HtmlElement, InteractionError> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| InteractionError::missing(format!("#{}", id)))
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Result<Vec<web_sys::Element>, InteractionError> {
    let list = document()?.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect())
}

/// Apply every property of `patch` to the element's inline style
pub fn apply_style(element: &web_sys::HtmlElement, patch: StylePatch) -> Result<(), InteractionError> {
    let style = element.style();
    for (property, value) in patch.properties {
        if value.is_empty() {
            style.remove_property(property).map_err(js_error)?;
        } else {
            style.set_property(property, value).map_err(js_error)?;
        }
    }
    Ok(())
}

pub fn set_style(
    element: &web_sys::HtmlElement,
    property: &str,
    value: &str,
) -> Result<(), InteractionError> {
    element.style().set_property(property, value).map_err(js_error)
}

/// Position of `element` among its parent's element children
pub fn sibling_index(element: &web_sys::Element) -> usize {
    let Some(parent) = element.parent_element() else {
        return 0;
    };
    let children = parent.children();
    (0..children.length())
        .find(|&i| children.item(i).as_ref() == Some(element))
        .unwrap_or(0) as usize
}

/// Current vertical scroll offset of the window
pub fn scroll_offset() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    window
        .scroll_y()
        .ok()
        .or_else(|| {
            window
                .document()
                .and_then(|d| d.document_element())
                .map(|el| el.scroll_top() as f64)
        })
        .unwrap_or(0.0)
}

/// Log an interaction failure. Missing elements only show up in debug builds.
pub fn report(context: &str, result: Result<(), InteractionError>) {
    if let Err(err) = result {
        if err.is_missing_element() {
            leptos::logging::debug_warn!("{}: {}", context, err);
        } else {
            leptos::logging::warn!("{}: {}", context, err);
        }
    }
}
