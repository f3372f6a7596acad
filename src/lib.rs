//! Portfolio Site Generator
//!
//! Renders a single-page portfolio from static content records.
//!
//! - `content`: the typed content model, canonical data, and validation
//! - `site`: view helpers, page sections, and the document generator
//! - `meta`: title/description/Open Graph tags and the schema.org payload
//!
//! Content flows one way: `SiteContent` → section generators → final
//! markup. Rendering is synchronous, deterministic, and infallible; all
//! schema checking happens up front in `content::validate`.

pub mod content;
pub mod meta;
pub mod site;

// Re-export commonly used types
pub use content::{validate, ContentError, ProjectTheme, SiteContent};
pub use site::SiteGenerator;
