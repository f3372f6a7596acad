//! Header and Hero
//!
//! Top-of-page region: brand, in-page navigation, the identity statement,
//! and the trajectory panel with highlight cards. Not wrapped in the
//! section shell; it is a `<header>`, not an anchor-addressable section.

use crate::content::{HeroInfo, Highlight};
use crate::site::view::{escape_html, icon_markup, NAV_ENTRIES};

/// Generate the page header: nav plus hero panel.
pub fn generate(hero: &HeroInfo, highlights: &[Highlight]) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<header class=\"hero\">\n");
    html.push_str(&generate_nav(hero));
    html.push_str("<div class=\"hero-panel\">\n");
    html.push_str("<div class=\"hero-copy\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&hero.name)));
    html.push_str(&format!(
        "<p class=\"hero-role\"><span class=\"accent\">$</span> {}</p>\n",
        escape_html(&hero.role)
    ));
    if !hero.aspiration.is_empty() {
        html.push_str(&format!(
            "<p class=\"hero-aspiration\">{}</p>\n",
            escape_html(&hero.aspiration)
        ));
    }
    html.push_str(&format!(
        "<p class=\"hero-bio\">{}</p>\n",
        escape_html(&hero.bio)
    ));
    html.push_str("<div class=\"hero-actions\">\n");
    html.push_str("<a class=\"cta cta-primary\" href=\"#projects\">View portfolio</a>\n");
    html.push_str("<a class=\"cta cta-secondary\" href=\"#contact\">Contact me</a>\n");
    html.push_str("</div>\n");
    html.push_str("</div>\n");
    html.push_str(&generate_highlights(highlights));
    html.push_str("</div>\n</header>\n");
    html
}

fn generate_nav(hero: &HeroInfo) -> String {
    let brand = hero.owner_name();

    let mut html = String::with_capacity(512);
    html.push_str("<nav class=\"top-nav\">\n");
    html.push_str(&format!(
        "<span class=\"brand\"><span class=\"accent\">&gt;</span> {}</span>\n",
        escape_html(brand)
    ));
    html.push_str("<div class=\"nav-links\">\n");
    for entry in NAV_ENTRIES {
        html.push_str(&format!(
            "<a class=\"nav-link\" href=\"#{}\">{}</a>\n",
            entry.id, entry.label
        ));
    }
    html.push_str("</div>\n</nav>\n");
    html
}

fn generate_highlights(highlights: &[Highlight]) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<aside class=\"trajectory\">\n");
    html.push_str("<h3><span class=\"accent\">$</span> Trajectory</h3>\n");
    for highlight in highlights {
        html.push_str("<div class=\"highlight\">\n");
        html.push_str(&icon_markup(highlight.icon));
        html.push_str("<div>\n");
        html.push_str(&format!(
            "<p class=\"highlight-title\">{}</p>\n",
            escape_html(&highlight.title)
        ));
        html.push_str(&format!(
            "<p class=\"highlight-description\">{}</p>\n",
            escape_html(&highlight.description)
        ));
        html.push_str("</div>\n</div>\n");
    }
    html.push_str("</aside>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn renders_hero_name_in_h1() {
        let content = SiteContent::canonical();
        let html = generate(&content.hero, &content.highlights);
        assert!(html.contains(&format!("<h1>{}</h1>", content.hero.name)));
    }

    #[test]
    fn skips_empty_aspiration() {
        let content = SiteContent::canonical();
        let mut hero = content.hero.clone();
        hero.aspiration = String::new();
        let html = generate(&hero, &content.highlights);
        assert!(!html.contains("hero-aspiration"));
    }

    #[test]
    fn nav_links_every_anchor_once() {
        let content = SiteContent::canonical();
        let html = generate(&content.hero, &content.highlights);
        for anchor in ["about", "stack", "projects", "contact"] {
            let needle = format!("class=\"nav-link\" href=\"#{}\"", anchor);
            assert_eq!(html.matches(&needle).count(), 1, "anchor {}", anchor);
        }
    }

    #[test]
    fn renders_one_card_per_highlight() {
        let content = SiteContent::canonical();
        let html = generate(&content.hero, &content.highlights);
        assert_eq!(
            html.matches("<div class=\"highlight\">").count(),
            content.highlights.len()
        );
    }
}
