//! Keyboard focus ring for every focusable element
//!
//! Listens for `focusin`/`focusout` on the document so elements rendered later
//! (the confirmation dialog buttons, for instance) are covered too.

use leptos::wasm_bindgen::JsCast;
use leptos::wasm_bindgen::closure::Closure;
use leptos::web_sys;

use super::dom::{apply_style, document, js_error, report};
use crate::core::InteractionError;
use crate::core::effects::{FOCUSABLE_SELECTOR, focus_style};

pub fn install_focus_outline() -> Result<(), InteractionError> {
    let document = document()?;

    for (event, focused) in [("focusin", true), ("focusout", false)] {
        let handler = Closure::<dyn FnMut(web_sys::FocusEvent)>::new(move |ev: web_sys::FocusEvent| {
            let Some(element) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            if element.matches(FOCUSABLE_SELECTOR).unwrap_or(false) {
                report("focus outline", apply_style(&element, focus_style(focused)));
            }
        });

        document
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .map_err(js_error)?;

        // Leak the closure to keep it alive
        handler.forget();
    }

    Ok(())
}
