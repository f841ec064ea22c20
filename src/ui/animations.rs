//! Entrance animations for `.fade-in` / `.slide-up` elements
//!
//! Uses an `IntersectionObserver`; each element is unobserved after its first
//! crossing, and the [`AnimationTracker`] keeps the handler idempotent if a stale
//! entry is delivered anyway.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::wasm_bindgen::closure::Closure;
use leptos::wasm_bindgen::{JsCast, JsValue};
use leptos::web_sys;

use super::dom::{js_error, query_all, report, set_style, sibling_index};
use crate::core::InteractionError;
use crate::core::animation::{
    ANIMATED_CLASS, ANIMATED_SELECTOR, AnimationTracker, ROOT_MARGIN, VISIBILITY_THRESHOLD,
    stagger_delay,
};

/// Attribute holding the key used by the tracker
const KEY_ATTRIBUTE: &str = "data-animation-key";

/// Start observing every animated element on the page
pub fn install_entrance_animations() -> Result<(), InteractionError> {
    let elements = query_all(ANIMATED_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(AnimationTracker::<u32>::new()));
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = target
                    .get_attribute(KEY_ATTRIBUTE)
                    .and_then(|k| k.parse::<u32>().ok())
                else {
                    continue;
                };

                if tracker
                    .borrow_mut()
                    .on_intersection(key, entry.is_intersecting())
                {
                    report("animations", animate(&target));
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(js_error)?;

    for (key, element) in elements.iter().enumerate() {
        element
            .set_attribute(KEY_ATTRIBUTE, &key.to_string())
            .map_err(js_error)?;
        observer.observe(element);
    }

    // Observer lives as long as the page
    callback.forget();
    Ok(())
}

fn animate(target: &web_sys::Element) -> Result<(), InteractionError> {
    target.class_list().add_1(ANIMATED_CLASS).map_err(js_error)?;
    if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
        let delay = stagger_delay(sibling_index(target));
        set_style(element, "animation-delay", &delay)?;
    }
    Ok(())
}
