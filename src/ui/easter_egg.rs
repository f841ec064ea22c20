//! Konami code easter egg
//!
//! Typing ↑↑↓↓←→←→BA makes the whole page pulse for two seconds, then shows a
//! message from the creators.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::ev::keydown;
use leptos::prelude::*;

use super::dom::{document, js_error, report, set_style};
use crate::core::InteractionError;
use crate::core::konami::{
    CELEBRATION_MESSAGE, PULSE_ANIMATION, PULSE_DURATION_MS, SequenceMatcher,
};

/// Listen for the secret sequence on the window
pub fn install_easter_egg() {
    let matcher = Rc::new(RefCell::new(SequenceMatcher::konami()));
    let handle = window_event_listener(keydown, move |ev| {
        if matcher.borrow_mut().push(ev.key_code()) {
            leptos::logging::log!("Easter egg unlocked");
            celebrate();
        }
    });

    on_cleanup(move || handle.remove());
}

fn celebrate() {
    let body = match document().and_then(|d| d.body().ok_or_else(|| InteractionError::missing("body"))) {
        Ok(body) => body,
        Err(err) => return report("easter egg", Err(err)),
    };
    report("easter egg", set_style(&body, "animation", PULSE_ANIMATION));

    Timeout::new(PULSE_DURATION_MS, move || {
        report(
            "easter egg",
            body.style().remove_property("animation").map(drop).map_err(js_error),
        );
        if let Some(window) = leptos::web_sys::window() {
            report(
                "easter egg",
                window.alert_with_message(CELEBRATION_MESSAGE).map_err(js_error),
            );
        }
    })
    .forget();
}
