//! Social network buttons
//!
//! Each click gives tactile feedback (a short press pulse and a ripple centered on the
//! pointer). When redirect confirmation is enabled, the outbound link opens in a new tab
//! only after the visitor confirms in a dialog.

use leptos::html;
use leptos::prelude::*;
use leptos::web_sys;

use super::modal::ConfirmDialog;
use super::settings::use_site_settings;
use crate::core::site::SocialPlatform;

/// Buttons for every platform plus the shared confirmation dialog
#[component]
pub fn SocialLinks() -> impl IntoView {
    let settings = use_site_settings();
    let confirm = settings.confirm_redirects;
    let stored_settings = StoredValue::new(settings.clone());
    let pending = RwSignal::new(None::<SocialPlatform>);

    let on_request = Callback::new(move |platform: SocialPlatform| pending.set(Some(platform)));
    let on_confirm = Callback::new(move |_| {
        if let Some(platform) = pending.get_untracked() {
            let url = stored_settings.with_value(|s| s.url_for(platform).to_string());
            open_in_new_tab(&url);
        }
    });
    let on_cancel = Callback::new(move |_| pending.set(None));

    view! {
        <div class="social-links">
            {SocialPlatform::ALL
                .into_iter()
                .map(|platform| {
                    view! {
                        <SocialButton
                            platform=platform
                            url=settings.url_for(platform).to_string()
                            confirm=confirm
                            on_request=on_request
                        />
                    }
                })
                .collect_view()}
        </div>

        <ConfirmDialog
            title="Sair do Vlog Vintage".to_string()
            message=Signal::derive(move || {
                pending.get().map(|p| p.redirect_prompt()).unwrap_or_default()
            })
            is_open=Signal::derive(move || pending.get().is_some())
            on_confirm=on_confirm
            on_cancel=on_cancel
        />
    }
}

#[component]
fn SocialButton(
    platform: SocialPlatform,
    url: String,
    /// Ask before following the link
    confirm: bool,
    /// Called with the platform when confirmation is needed
    on_request: Callback<SocialPlatform>,
) -> impl IntoView {
    let button_ref = NodeRef::<html::A>::new();
    #[cfg(not(feature = "ssr"))]
    let ripples = StoredValue::new_local(feedback::Ripples::new());

    let on_click = move |ev: web_sys::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(button) = button_ref.get_untracked() {
                super::dom::report("press", feedback::press(&button));
                super::dom::report("ripple", feedback::ripple(&button, &ev, ripples));
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = button_ref;
        }

        if confirm {
            ev.prevent_default();
            on_request.run(platform);
        }
    };

    view! {
        <a
            id=platform.button_id()
            class=format!("social-btn {}", platform.button_id())
            href=url
            target="_blank"
            rel="noopener noreferrer"
            aria-label=platform.aria_label()
            node_ref=button_ref
            on:click=on_click
        >
            <i class=platform.icon_class()></i>
            <span>{platform.display_name()}</span>
        </a>
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) =
                window.open_with_url_and_target_and_features(url, "_blank", "noopener")
            {
                leptos::logging::warn!("Failed to open {}: {:?}", url, err);
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = url;
    }
}

#[cfg(not(feature = "ssr"))]
mod feedback {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;
    use leptos::web_sys;

    use crate::core::InteractionError;
    use crate::core::ripple::{
        PRESS_DURATION_MS, PRESS_TRANSFORM, RELEASE_TRANSFORM, RIPPLE_DURATION_MS, Rect,
        RippleGeometry, RippleSet,
    };
    use crate::ui::dom::{document, js_error, report, set_style};

    /// Ripple spans currently on a button
    pub type Ripples = RippleSet<web_sys::Element>;

    /// Scale the button down and back up
    pub fn press(button: &web_sys::HtmlElement) -> Result<(), InteractionError> {
        set_style(button, "transform", PRESS_TRANSFORM)?;
        let button = button.clone();
        Timeout::new(PRESS_DURATION_MS, move || {
            report("press", set_style(&button, "transform", RELEASE_TRANSFORM));
        })
        .forget();
        Ok(())
    }

    /// Spawn a ripple centered on the click and schedule its removal
    pub fn ripple(
        button: &web_sys::HtmlElement,
        ev: &web_sys::MouseEvent,
        ripples: StoredValue<Ripples, LocalStorage>,
    ) -> Result<(), InteractionError> {
        let now = js_sys::Date::now();

        // Sweep ripples whose timer was lost
        if let Some(stale) = ripples.try_update_value(|set| set.expire(now)) {
            stale.iter().for_each(web_sys::Element::remove);
        }

        let bounds = button.get_bounding_client_rect();
        let rect = Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let geometry =
            RippleGeometry::from_click(rect, ev.client_x() as f64, ev.client_y() as f64);

        let span = document()?.create_element("span").map_err(js_error)?;
        span.set_attribute("style", &geometry.css_text())
            .map_err(js_error)?;
        button.append_child(&span).map_err(js_error)?;

        let id = ripples.try_update_value(|set| set.spawn(now, span.clone()));
        Timeout::new(RIPPLE_DURATION_MS, move || {
            // The set hands the span back; without it (button gone) remove our own copy
            let tracked = id.and_then(|id| ripples.try_update_value(|set| set.remove(id)).flatten());
            tracked.unwrap_or(span).remove();
        })
        .forget();

        Ok(())
    }
}
