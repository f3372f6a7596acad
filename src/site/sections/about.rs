//! About Section
//!
//! Career narrative: the value proposition as the section description plus
//! three narrative cards (current focus, career vision, active learning).

use crate::content::AboutInfo;
use crate::site::view::{escape_html, section_shell};

pub fn generate(about: &AboutInfo) -> String {
    let mut body = String::with_capacity(2048);
    body.push_str("<div class=\"card-grid cols-3\">\n");
    body.push_str(&narrative_card("Current mission", &about.current_focus));
    body.push_str(&narrative_card("Career vision", &about.career_vision));
    body.push_str(&narrative_card("Active learning", &about.learning));
    body.push_str("</div>\n");

    section_shell(
        "about",
        "Career narrative",
        "Full-stack development with automation expertise",
        Some(&about.value_proposition),
        &body,
    )
}

fn narrative_card(title: &str, text: &str) -> String {
    format!(
        "<div class=\"card\">\n<h3><span class=\"accent\">&gt;</span> {}</h3>\n<p>{}</p>\n</div>\n",
        escape_html(title),
        escape_html(text)
    )
}
