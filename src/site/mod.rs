//! Site Rendering
//!
//! Content-to-markup mapping for the portfolio page.
//!
//! ## Layout
//! - `view`: palette lookup, section shell, link policy, escaping
//! - `sections`: hero, about, stack, projects, contact
//! - `generator`: assembles the full document

pub mod view;
pub mod sections;
pub mod generator;

pub use generator::SiteGenerator;
