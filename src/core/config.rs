//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::site::{DEFAULT_INSTAGRAM_URL, DEFAULT_YOUTUBE_URL, SiteSettings};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Outbound YouTube channel URL
    pub youtube_url: Option<String>,

    /// Outbound Instagram profile URL
    pub instagram_url: Option<String>,

    /// Whether social buttons ask before leaving the site
    /// Accepts true/false, 1/0, yes/no, sim/não
    pub confirm_redirects: Option<String>,

    /// Log level for the tracing subscriber (error, warn, info, debug, trace)
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            youtube_url: std::env::var("YOUTUBE_URL").ok(),
            instagram_url: std::env::var("INSTAGRAM_URL").ok(),
            confirm_redirects: std::env::var("CONFIRM_REDIRECTS").ok(),
            log_level: std::env::var("LOG_LEVEL").ok(),
        }
    }

    /// Check if a custom YouTube URL is configured
    pub fn has_youtube_url(&self) -> bool {
        non_empty(&self.youtube_url).is_some()
    }

    /// Check if a custom Instagram URL is configured
    pub fn has_instagram_url(&self) -> bool {
        non_empty(&self.instagram_url).is_some()
    }

    /// Parsed redirect confirmation flag, defaulting to `true`
    pub fn confirm_redirects(&self) -> bool {
        match non_empty(&self.confirm_redirects).map(|v| v.to_lowercase()) {
            Some(v) => !matches!(v.as_str(), "false" | "0" | "no" | "não" | "nao" | "off"),
            None => true,
        }
    }

    /// Tracing level, defaulting to `info` when unset or unknown
    pub fn log_level(&self) -> tracing::Level {
        non_empty(&self.log_level)
            .and_then(|v| v.parse().ok())
            .unwrap_or(tracing::Level::INFO)
    }

    /// Settings mirrored to the browser
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            youtube_url: non_empty(&self.youtube_url)
                .unwrap_or(DEFAULT_YOUTUBE_URL)
                .to_string(),
            instagram_url: non_empty(&self.instagram_url)
                .unwrap_or(DEFAULT_INSTAGRAM_URL)
                .to_string(),
            confirm_redirects: self.confirm_redirects(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Config {
        Config {
            youtube_url: None,
            instagram_url: None,
            confirm_redirects: None,
            log_level: None,
        }
    }

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_no_fields_uses_defaults() {
        let settings = empty().site_settings();

        assert_eq!(settings.youtube_url, DEFAULT_YOUTUBE_URL);
        assert_eq!(settings.instagram_url, DEFAULT_INSTAGRAM_URL);
        assert!(settings.confirm_redirects);
    }

    #[test]
    fn test_config_with_custom_urls() {
        let config = Config {
            youtube_url: Some("https://www.youtube.com/@escola".to_string()),
            instagram_url: Some("https://www.instagram.com/escola".to_string()),
            ..empty()
        };

        assert!(config.has_youtube_url());
        assert!(config.has_instagram_url());
        let settings = config.site_settings();
        assert_eq!(settings.youtube_url, "https://www.youtube.com/@escola");
        assert_eq!(settings.instagram_url, "https://www.instagram.com/escola");
    }

    #[test]
    fn test_config_with_empty_string_values() {
        // Blank values fall back to the defaults
        let config = Config {
            youtube_url: Some("".to_string()),
            instagram_url: Some("   ".to_string()),
            confirm_redirects: Some("".to_string()),
            log_level: Some("".to_string()),
        };

        assert!(!config.has_youtube_url());
        assert!(!config.has_instagram_url());
        assert!(config.confirm_redirects());
        assert_eq!(config.log_level(), tracing::Level::INFO);
        assert_eq!(config.site_settings(), SiteSettings::default());
    }

    #[test]
    fn test_confirm_redirects_parsing() {
        for (raw, expected) in [
            ("true", true),
            ("1", true),
            ("sim", true),
            ("false", false),
            ("FALSE", false),
            ("0", false),
            ("no", false),
            ("não", false),
            ("off", false),
        ] {
            let config = Config {
                confirm_redirects: Some(raw.to_string()),
                ..empty()
            };
            assert_eq!(config.confirm_redirects(), expected, "value {:?}", raw);
        }
    }

    #[test]
    fn test_log_level_parsing() {
        let config = Config {
            log_level: Some("debug".to_string()),
            ..empty()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);

        let config = Config {
            log_level: Some("loud".to_string()),
            ..empty()
        };
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Just verify from_env() returns a Config without errors
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();

        let _ = config.has_youtube_url();
        let _ = config.site_settings();
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            youtube_url: Some("https://yt.example".to_string()),
            ..empty()
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("youtube_url"));
        assert!(debug_str.contains("https://yt.example"));
    }
}
