//! Hover lift for content cards

use leptos::wasm_bindgen::JsCast;
use leptos::wasm_bindgen::closure::Closure;
use leptos::web_sys;

use super::dom::{apply_style, js_error, query_all, report};
use crate::core::InteractionError;
use crate::core::effects::{HOVER_CARD_SELECTOR, HoverState};

pub fn install_card_hover() -> Result<(), InteractionError> {
    for card in query_all(HOVER_CARD_SELECTOR)? {
        let Ok(card) = card.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };

        for (event, state) in [
            ("mouseenter", HoverState::Lifted),
            ("mouseleave", HoverState::Resting),
        ] {
            let target = card.clone();
            let handler = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_: web_sys::MouseEvent| {
                report("card hover", apply_style(&target, state.style()));
            });
            card.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
                .map_err(js_error)?;
            handler.forget();
        }
    }

    Ok(())
}
