//! Page behavior rules, independent of the DOM
//!
//! Everything here compiles for both the server and the browser so the decisions
//! behind each interaction can be tested without a document.

pub mod animation;
#[cfg(feature = "ssr")]
pub mod config;
pub mod date;
pub mod debounce;
pub mod effects;
mod error;
pub mod konami;
pub mod nav;
pub mod ripple;
pub mod scroll;
pub mod site;
pub mod typewriter;

pub use error::InteractionError;
