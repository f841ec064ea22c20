//! Confirmation dialog shown before leaving the page
//!
//! A newspaper "notice" box over a dimmed page. Escape, the cancel button and a
//! click on the dimmed area all dismiss it.

use leptos::html;
use leptos::prelude::*;

/// Class of the dimmed overlay; clicks landing on it dismiss the dialog
const OVERLAY_CLASS: &str = "vintage-modal-backdrop";

#[component]
pub fn ConfirmDialog(
    title: String,
    message: Signal<String>,
    is_open: Signal<bool>,
    on_confirm: Callback<()>,
    /// Also runs after a confirmation, so the caller can reset its state
    on_cancel: Callback<()>,
    #[prop(default = "Continuar")]
    confirm_label: &'static str,
    #[prop(default = "Cancelar")]
    cancel_label: &'static str,
) -> impl IntoView {
    let confirm_ref = NodeRef::<html::Button>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle = window_event_listener(keydown, move |ev| {
            if is_open.get_untracked() && ev.key() == "Escape" {
                on_cancel.run(());
            }
        });
        on_cleanup(move || handle.remove());

        // Move keyboard focus into the dialog when it opens
        Effect::new(move |_| {
            if is_open.get() {
                if let Some(button) = confirm_ref.get_untracked() {
                    crate::ui::dom::report(
                        "dialog focus",
                        button.focus().map_err(crate::ui::dom::js_error),
                    );
                }
            }
        });
    }

    let dismiss_on_overlay = move |ev: leptos::web_sys::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::wasm_bindgen::JsCast;

            let on_overlay = ev
                .target()
                .and_then(|t| t.dyn_into::<leptos::web_sys::Element>().ok())
                .is_some_and(|el| el.class_list().contains(OVERLAY_CLASS));
            if on_overlay {
                on_cancel.run(());
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            class=OVERLAY_CLASS
            class=("open", move || is_open.get())
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=dismiss_on_overlay
        >
            <div
                class="vintage-modal"
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="vintage-modal-title"
            >
                <h3 id="vintage-modal-title" class="vintage-modal-title">{title}</h3>
                <p class="vintage-modal-message">{move || message.get()}</p>
                <div class="vintage-modal-actions">
                    <button class="vintage-btn" on:click=move |_| on_cancel.run(())>
                        {cancel_label}
                    </button>
                    <button
                        class="vintage-btn vintage-btn-primary"
                        node_ref=confirm_ref
                        on:click=move |_| {
                            on_confirm.run(());
                            on_cancel.run(());
                        }
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
