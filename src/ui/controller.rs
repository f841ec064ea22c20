//! Page interaction controller
//!
//! Wires the behaviors that work on plain markup (entrance animations, card hover,
//! focus ring, easter egg, scroll logger, dateline) once the page has hydrated.
//! Component-owned behaviors (menu, scroll frame, typewriter, social buttons) live in
//! their own components.

use leptos::prelude::*;

/// Mount once per page, after the content it decorates
#[component]
pub fn PageInteractions() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use super::dom::report;

        super::easter_egg::install_easter_egg();
        super::scroll_effects::install_scroll_logger();

        // Effects run after the DOM has been hydrated
        Effect::new(move |_| {
            report("current date", show_current_date());
            report("animations", super::animations::install_entrance_animations());
            report("card hover", super::cards::install_card_hover());
            report("focus outline", super::accessibility::install_focus_outline());
            leptos::logging::log!("Page interactions ready");
        });
    }

    view! {
        <super::styles::InteractionStyles />
    }
}

#[cfg(not(feature = "ssr"))]
fn show_current_date() -> Result<(), crate::core::InteractionError> {
    let element = super::dom::by_id("current-date")?;
    element.set_text_content(Some(&crate::core::date::today_long_pt_br()));
    Ok(())
}
