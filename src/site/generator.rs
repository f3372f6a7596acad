//! Site Generator
//!
//! Main entry point for rendering the portfolio page. Orchestrates head,
//! header/hero, the four anchored sections, and the footer into a single
//! HTML document.
//!
//! Public API (consumed by generate_site.rs and the test suite):
//! - SiteGenerator::new() -> Self
//! - SiteGenerator::generate(content) -> String

use chrono::{Datelike, Utc};

use crate::content::SiteContent;
use crate::meta;
use crate::site::sections::{about, contact, hero, projects, stack};
use crate::site::view::escape_html;

/// Page renderer. The only ambient input, the footer year, is captured at
/// construction, so `generate` is a pure function of generator + content.
pub struct SiteGenerator {
    copyright_year: i32,
}

impl SiteGenerator {
    /// Create a site generator stamped with the current year.
    pub fn new() -> Self {
        Self::with_year(Utc::now().year())
    }

    /// Create a site generator with a fixed copyright year.
    pub fn with_year(copyright_year: i32) -> Self {
        Self { copyright_year }
    }

    /// Render the complete page for the given content.
    ///
    /// Deterministic: identical content renders to identical bytes. There
    /// is no failure path; schema problems are caught by
    /// `content::validate` before rendering.
    pub fn generate(&self, content: &SiteContent) -> String {
        let mut html = String::with_capacity(64 * 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
        html.push_str(&meta::generate_head(content));
        html.push_str("<body>\n");
        html.push_str(&hero::generate(&content.hero, &content.highlights));
        html.push_str("<main>\n");
        html.push_str(&about::generate(&content.about));
        html.push_str(&stack::generate(&content.tech_stack));
        html.push_str(&projects::generate(&content.projects));
        html.push_str(&contact::generate(&content.contact));
        html.push_str("</main>\n");
        html.push_str(&generate_footer(content, self.copyright_year));
        html.push_str("</body>\n</html>\n");
        html
    }
}

impl Default for SiteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Footer: copyright line only. Contact links live in the contact section,
/// which keeps each contact method at exactly one link on the page.
fn generate_footer(content: &SiteContent, year: i32) -> String {
    format!(
        "<footer class=\"site-footer\">\n<p><span class=\"accent\">&gt;</span> \
         &copy; {} {}. Built with an automation mindset.</p>\n</footer>\n",
        year,
        escape_html(content.hero.owner_name())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_render_in_fixed_order() {
        let content = SiteContent::canonical();
        let html = SiteGenerator::new().generate(&content);

        let positions: Vec<usize> = ["id=\"about\"", "id=\"stack\"", "id=\"projects\"", "id=\"contact\""]
            .iter()
            .map(|needle| html.find(needle).expect("section missing"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        let header = html.find("<header").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(header < positions[0]);
        assert!(footer > positions[3]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let content = SiteContent::canonical();
        let generator = SiteGenerator::new();
        assert_eq!(generator.generate(&content), generator.generate(&content));
    }

    #[test]
    fn separately_built_generators_agree_for_a_fixed_year() {
        let content = SiteContent::canonical();
        let first = SiteGenerator::with_year(2026).generate(&content);
        let second = SiteGenerator::with_year(2026).generate(&content);
        assert_eq!(first, second);
        assert!(first.contains("&copy; 2026 Adrian Cancio"));
    }

    #[test]
    fn footer_names_the_owner_without_links() {
        let content = SiteContent::canonical();
        let footer = generate_footer(&content, 2026);
        assert!(footer.contains("&copy; 2026 Adrian Cancio"));
        assert!(!footer.contains("<a "));
    }
}
