//! Site settings context
//!
//! On the server the settings come from [`crate::core::config::Config`] and are
//! provided as context by the router. The shell serialises them into the page; in the
//! browser they are read back from that element before the app renders.

use leptos::prelude::*;

use crate::core::site::SiteSettings;

/// Provide the site settings to the component tree
pub fn provide_site_settings() -> SiteSettings {
    let settings = load_site_settings();
    provide_context(settings.clone());
    settings
}

/// Get the site settings provided by [`provide_site_settings`]
pub fn use_site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

#[cfg(feature = "ssr")]
fn load_site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
fn load_site_settings() -> SiteSettings {
    read_embedded_settings().unwrap_or_else(|err| {
        leptos::logging::warn!("Using default site settings: {}", err);
        SiteSettings::default()
    })
}

#[cfg(not(feature = "ssr"))]
fn read_embedded_settings() -> Result<SiteSettings, crate::core::InteractionError> {
    use crate::core::site::SETTINGS_ELEMENT_ID;

    let element = super::dom::by_id(SETTINGS_ELEMENT_ID)?;
    let json = element.text_content().unwrap_or_default();
    Ok(SiteSettings::from_json(&json)?)
}

/// `<script type="application/json">` carrying the settings; rendered by the shell
#[component]
pub fn EmbeddedSettings(settings: SiteSettings) -> impl IntoView {
    // Keep "</script>" out of the payload
    let json = settings
        .to_json()
        .unwrap_or_else(|_| "{}".to_string())
        .replace('<', "\\u003c");

    view! {
        <script
            type="application/json"
            id=crate::core::site::SETTINGS_ELEMENT_ID
            inner_html=json
        ></script>
    }
}
