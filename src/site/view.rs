//! View Helpers
//!
//! Shared presentational building blocks: the theme palette lookup, the
//! uniform section shell, icon markup, the outbound-link policy, and HTML
//! escaping. Everything here is a pure function of its inputs.

use crate::content::{Icon, ProjectTheme};

/// Style bundle for one project theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: &'static str,
    pub badge: &'static str,
    pub background: &'static str,
}

/// Resolve a project theme to its card palette.
///
/// Exhaustive match with no fallback arm: a new `ProjectTheme` variant
/// without a palette entry fails to compile rather than at render time.
pub fn palette(theme: ProjectTheme) -> Palette {
    match theme {
        ProjectTheme::Automation => Palette {
            border: "border-cyan",
            badge: "badge-cyan",
            background: "card-cyan",
        },
        ProjectTheme::Systems => Palette {
            border: "border-emerald",
            badge: "badge-emerald",
            background: "card-emerald",
        },
        ProjectTheme::Tooling => Palette {
            border: "border-purple",
            badge: "badge-purple",
            background: "card-purple",
        },
    }
}

/// In-page navigation entry: anchor id plus the visible label.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// The canonical anchor set. Section ids and nav links both derive from
/// this table, so they cannot drift apart.
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry { id: "about", label: "About" },
    NavEntry { id: "stack", label: "Stack" },
    NavEntry { id: "projects", label: "Projects" },
    NavEntry { id: "contact", label: "Contact" },
];

/// Escape text for interpolation into HTML body or attribute positions.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inline icon placeholder resolved by the stylesheet's sprite rules.
pub fn icon_markup(icon: Icon) -> String {
    format!(
        "<span class=\"icon\" data-icon=\"{}\" aria-hidden=\"true\"></span>",
        icon.slug()
    )
}

/// Outbound link with the non-delegating policy: opens in a new browsing
/// context and never hands the destination a reference back to this page.
pub fn external_link(href: &str, class: &str, body: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        class,
        escape_html(href),
        body
    )
}

/// Uniform section shell: eyebrow label, title, optional description, body.
///
/// The description paragraph is emitted only when one is supplied; an
/// absent description renders no empty markup.
pub fn section_shell(
    id: &str,
    eyebrow: &str,
    title: &str,
    description: Option<&str>,
    body: &str,
) -> String {
    let mut html = String::with_capacity(body.len() + 512);
    html.push_str(&format!("<section id=\"{}\" class=\"section\">\n", id));
    html.push_str("<div class=\"section-head\">\n");
    html.push_str(&format!(
        "<p class=\"eyebrow\"><span class=\"accent\">//</span> {}</p>\n",
        escape_html(eyebrow)
    ));
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(title)));
    if let Some(text) = description {
        html.push_str(&format!(
            "<p class=\"section-description\">{}</p>\n",
            escape_html(text)
        ));
    }
    html.push_str("</div>\n");
    html.push_str("<div class=\"section-body\">\n");
    html.push_str(body);
    html.push_str("</div>\n</section>\n");
    html
}

/// Pill-style tag chip, used for skill labels and project stack tags.
pub fn tag_chip(class: &str, label: &str) -> String {
    format!("<span class=\"{}\">{}</span>", class, escape_html(label))
}
