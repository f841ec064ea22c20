pub mod controller;
pub mod modal;
pub mod navigation;
pub mod pages;
pub mod scroll_effects;
pub mod settings;
pub mod social;
pub mod styles;
pub mod typewriter;

// Browser-only helpers and behaviors
#[cfg(not(feature = "ssr"))]
pub mod accessibility;
#[cfg(not(feature = "ssr"))]
pub mod animations;
#[cfg(not(feature = "ssr"))]
pub mod cards;
#[cfg(not(feature = "ssr"))]
pub mod dom;
#[cfg(not(feature = "ssr"))]
pub mod easter_egg;

pub use controller::PageInteractions;
pub use modal::ConfirmDialog;
pub use navigation::VintageNav;
pub use pages::{NewspaperPage, NotFoundPage};
pub use scroll_effects::use_scroll_frame;
pub use settings::{EmbeddedSettings, provide_site_settings, use_site_settings};
pub use social::SocialLinks;
pub use typewriter::Headline;
