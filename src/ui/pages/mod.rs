//! Application pages module
//!
//! - Newspaper front page (home)
//! - Not found page

mod newspaper;
mod not_found;

pub use newspaper::NewspaperPage;
pub use not_found::NotFoundPage;
