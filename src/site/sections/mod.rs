//! Page Sections
//!
//! One module per region of the page, each a pure `generate` function that
//! returns the section's markup. The generator assembles them in order.

pub mod hero;
pub mod about;
pub mod stack;
pub mod projects;
pub mod contact;
