//! Site content and settings shared by the server render and the browser
//!
//! The server builds [`SiteSettings`] from its environment and embeds them in the page
//! as JSON (see [`SETTINGS_ELEMENT_ID`]); the hydrated client reads the same JSON back
//! so both sides render identical markup.

use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` carrying [`SiteSettings`]
pub const SETTINGS_ELEMENT_ID: &str = "site-settings";

pub const DEFAULT_YOUTUBE_URL: &str = "https://www.youtube.com/@vlogvintage";
pub const DEFAULT_INSTAGRAM_URL: &str = "https://www.instagram.com/vlogvintage";

const CREATORS_JSON: &str = include_str!("../../content/creators.json");

/// Outbound social platforms linked from the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    YouTube,
    Instagram,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 2] = [SocialPlatform::YouTube, SocialPlatform::Instagram];

    pub fn display_name(&self) -> &'static str {
        match self {
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Instagram => "Instagram",
        }
    }

    /// Element id of the platform's button
    pub fn button_id(&self) -> &'static str {
        match self {
            SocialPlatform::YouTube => "youtube-btn",
            SocialPlatform::Instagram => "instagram-btn",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialPlatform::YouTube => "fab fa-youtube",
            SocialPlatform::Instagram => "fab fa-instagram",
        }
    }

    /// Screen-reader label for the button
    pub fn aria_label(&self) -> String {
        format!("Visitar nosso {}", self.display_name())
    }

    /// Question asked before leaving the site
    pub fn redirect_prompt(&self) -> String {
        format!(
            "Você será redirecionado para o nosso {}. Deseja continuar?",
            self.display_name()
        )
    }
}

/// Settings resolved on the server and mirrored in the browser
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub youtube_url: String,
    pub instagram_url: String,
    /// Ask before opening an outbound link
    pub confirm_redirects: bool,
}

impl SiteSettings {
    pub fn url_for(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::YouTube => &self.youtube_url,
            SocialPlatform::Instagram => &self.instagram_url,
        }
    }

    /// JSON embedded in the page
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Read back the embedded JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            youtube_url: DEFAULT_YOUTUBE_URL.to_string(),
            instagram_url: DEFAULT_INSTAGRAM_URL.to_string(),
            confirm_redirects: true,
        }
    }
}

/// One of the students behind the site
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub role: String,
    pub description: String,
    /// Font Awesome class for the card badge
    pub icon: String,
}

/// Creators shown in the `creators-grid` section
pub fn creators() -> Result<Vec<Creator>, serde_json::Error> {
    serde_json::from_str(CREATORS_JSON)
}
