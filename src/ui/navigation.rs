//! Vintage navigation bar
//!
//! Provides:
//! - Hamburger toggle flipping the `active` class on `nav-menu` and the toggle icon
//! - Smooth scrolling to in-page sections from `.nav-link`s
//! - Closing the menu on link clicks and on clicks outside the nav
//! - `scrolled` variant and hide-on-scroll driven by the page's [`ScrollFrame`]

use leptos::html;
use leptos::prelude::*;
use leptos::web_sys;

use crate::core::nav::{ACTIVE_CLASS, MenuState, anchor_target};
use crate::core::scroll::ScrollFrame;

/// Sections linked from the menu
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#inicio", "Início"),
    ("#curso", "O Curso"),
    ("#galeria", "Galeria"),
    ("#criadoras", "Criadoras"),
    ("#redes", "Redes Sociais"),
];

#[component]
pub fn VintageNav(
    /// Latest scroll-derived state
    frame: ReadSignal<ScrollFrame>,
) -> impl IntoView {
    let menu = RwSignal::new(MenuState::new());
    let toggle_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Ul>::new();

    // Close when clicking anywhere outside the toggle and the menu
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::click;
        use leptos::wasm_bindgen::JsCast;

        let handle = window_event_listener(click, move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside_toggle = toggle_ref
                .get_untracked()
                .is_some_and(|el| el.contains(target.as_ref()));
            let inside_menu = menu_ref
                .get_untracked()
                .is_some_and(|el| el.contains(target.as_ref()));

            if menu.with_untracked(MenuState::is_open) {
                menu.update(|m| m.on_document_click(inside_toggle, inside_menu));
            }
        });

        on_cleanup(move || handle.remove());
    }

    let on_link_click = move |ev: web_sys::MouseEvent, href: &'static str| {
        menu.update(MenuState::close);
        if let Some(id) = anchor_target(href) {
            if scroll_to_section(id) {
                ev.prevent_default();
            }
        }
    };

    view! {
        <nav
            class="vintage-nav"
            class:scrolled=move || frame.get().scrolled
            style=move || format!("transform: {};", frame.get().nav.transform())
        >
            <div class="nav-container">
                <a href="#inicio" class="nav-logo">
                    <i class="fas fa-newspaper"></i>
                    " Vlog Vintage"
                </a>

                <ul
                    id="nav-menu"
                    class="nav-menu"
                    class=(ACTIVE_CLASS, move || menu.get().is_open())
                    node_ref=menu_ref
                >
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=href
                                        class="nav-link"
                                        on:click=move |ev| on_link_click(ev, href)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    node_ref=toggle_ref
                    on:click=move |_| menu.update(MenuState::toggle)
                    aria-label="Abrir ou fechar o menu"
                    aria-controls="nav-menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                >
                    <i class=move || menu.get().icon_class()></i>
                </button>
            </div>
        </nav>
    }
}

/// Smoothly align the section's top with the viewport; `false` when it does not exist
fn scroll_to_section(id: &str) -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(section) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
        false
    }
}
