//! Contact Section
//!
//! One card per defined contact method: mail-to for email, profile links
//! for GitHub and LinkedIn, and a non-linked pronouns card. Each method
//! renders exactly one link; the footer does not repeat them.

use crate::content::{ContactInfo, Icon};
use crate::site::view::{escape_html, external_link, icon_markup, section_shell};

pub fn generate(contact: &ContactInfo) -> String {
    let mut body = String::with_capacity(2048);
    body.push_str("<div class=\"card contact-panel\">\n");
    body.push_str("<h3><span class=\"accent\">&gt;</span> Let&#39;s build together</h3>\n");
    body.push_str(
        "<p>Whether it&#39;s automating environments, hardening CI/CD, or crafting \
         full-stack features, I thrive where software and infrastructure intersect.</p>\n",
    );
    body.push_str("<div class=\"card-grid cols-2\">\n");

    body.push_str(&contact_card(
        Icon::Mail,
        "Email",
        &contact.email,
        Some(&format!("mailto:{}", contact.email)),
    ));
    body.push_str(&contact_card(
        Icon::Github,
        "GitHub",
        github_handle(&contact.github),
        Some(&contact.github),
    ));
    if let Some(linkedin) = &contact.linkedin {
        body.push_str(&contact_card(Icon::Linkedin, "LinkedIn", "Profile", Some(linkedin)));
    }
    body.push_str(&contact_card(Icon::Target, "Pronouns", &contact.pronouns, None));

    body.push_str("</div>\n</div>\n");

    section_shell(
        "contact",
        "Let's collaborate",
        "Ready to contribute to your team",
        Some("Open to conversations about automation, infrastructure, and secure delivery."),
        &body,
    )
}

/// Trailing path segment of the profile URL, shown as the card value.
fn github_handle(github_url: &str) -> &str {
    github_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(github_url)
}

fn contact_card(icon: Icon, title: &str, value: &str, href: Option<&str>) -> String {
    let inner = format!(
        "{}<div class=\"contact-copy\">\n<span class=\"contact-kind\">{}</span>\n<span class=\"contact-value\">{}</span>\n</div>\n",
        icon_markup(icon),
        escape_html(title),
        escape_html(value)
    );
    match href {
        Some(href) => {
            let mut html = String::from("<div class=\"contact-card\">\n");
            html.push_str(&external_link(href, "contact-link", &inner));
            html.push_str("\n</div>\n");
            html
        }
        None => format!("<div class=\"contact-card\">\n{}</div>\n", inner),
    }
}
