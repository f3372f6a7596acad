//! Projects Section
//!
//! One card per project, in source order. Each card gets its palette from
//! the project theme and carries exactly one outbound repository link.

use crate::content::Project;
use crate::site::view::{escape_html, external_link, palette, section_shell, tag_chip};

pub fn generate(projects: &[Project]) -> String {
    let mut body = String::with_capacity(4096);
    body.push_str("<div class=\"card-grid cols-2\">\n");
    for project in projects {
        body.push_str(&project_card(project));
    }
    body.push_str("</div>\n");

    section_shell(
        "projects",
        "Key projects",
        "Proof in shipped automation, systems, and tooling",
        Some("Selected initiatives spanning infrastructure automation, secure delivery, and developer experience."),
        &body,
    )
}

fn project_card(project: &Project) -> String {
    let palette = palette(project.theme);

    let mut html = String::with_capacity(1024);
    html.push_str(&format!(
        "<article class=\"card project-card {} {}\">\n",
        palette.border, palette.background
    ));
    html.push_str("<div class=\"project-head\">\n");
    html.push_str(&format!(
        "<span class=\"badge {}\"><span class=\"accent\">$</span> {}</span>\n",
        palette.badge,
        project.theme.label()
    ));
    html.push_str(&external_link(
        &project.repository,
        "repo-link",
        "View repo",
    ));
    html.push('\n');
    html.push_str("</div>\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
    html.push_str(&format!(
        "<p class=\"project-description\">{}</p>\n",
        escape_html(&project.description)
    ));
    html.push_str("<div class=\"chips\">\n");
    for tag in &project.stack {
        html.push_str(&tag_chip("chip chip-dim", tag));
        html.push('\n');
    }
    html.push_str("</div>\n</article>\n");
    html
}
