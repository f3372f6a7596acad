//! Stack Section
//!
//! One card per tech category, in source order: icon, title, optional
//! focus subtitle, and a chip per skill label.

use crate::content::TechCategory;
use crate::site::view::{escape_html, icon_markup, section_shell, tag_chip};

pub fn generate(categories: &[TechCategory]) -> String {
    let mut body = String::with_capacity(2048);
    body.push_str("<div class=\"card-grid cols-2\">\n");
    for category in categories {
        body.push_str(&category_card(category));
    }
    body.push_str("</div>\n");

    section_shell(
        "stack",
        "Technical stack",
        "Tools that shape resilient, automated delivery",
        None,
        &body,
    )
}

fn category_card(category: &TechCategory) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<article class=\"card stack-card\">\n");
    html.push_str("<div class=\"card-heading\">\n");
    html.push_str(&icon_markup(category.icon));
    html.push_str("<div>\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape_html(&category.title)));
    if let Some(focus) = &category.focus {
        html.push_str(&format!(
            "<p class=\"card-focus\">{}</p>\n",
            escape_html(focus)
        ));
    }
    html.push_str("</div>\n</div>\n");
    html.push_str("<div class=\"chips\">\n");
    for item in &category.items {
        html.push_str(&tag_chip("chip", item));
        html.push('\n');
    }
    html.push_str("</div>\n</article>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn renders_one_card_per_category_in_order() {
        let stack = SiteContent::canonical().tech_stack;
        let html = generate(&stack);
        assert_eq!(
            html.matches("stack-card").count(),
            stack.len(),
            "one card per category"
        );
        // Source order is display order.
        let mut last = 0;
        for category in &stack {
            let needle = format!("<h3>{}</h3>", escape_html(&category.title));
            let pos = html[last..].find(&needle).expect("category title missing");
            last += pos;
        }
    }

    #[test]
    fn skips_absent_focus_subtitle() {
        let mut stack = SiteContent::canonical().tech_stack;
        stack[0].focus = None;
        let html = category_card(&stack[0]);
        assert!(!html.contains("card-focus"));
    }

    #[test]
    fn escapes_skill_labels() {
        let stack = SiteContent::canonical().tech_stack;
        let html = generate(&stack);
        assert!(html.contains("DevOps &amp; Automation"));
    }
}
