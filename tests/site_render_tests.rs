//! Site Rendering Integration Tests
//!
//! Renders the full page from the canonical content set (and from
//! substitute fixtures) and asserts on the produced markup.

use portfolio_site_rust::content::{
    self, AboutInfo, ContactInfo, HeroInfo, Highlight, Icon, Project, ProjectTheme, SiteContent,
    TechCategory,
};
use portfolio_site_rust::site::view::palette;
use portfolio_site_rust::SiteGenerator;

fn render_canonical() -> (SiteContent, String) {
    let site_content = SiteContent::canonical();
    content::validate(&site_content).expect("canonical content must validate");
    let html = SiteGenerator::new().generate(&site_content);
    (site_content, html)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Minimal substitute content set, proving the view layer renders content
/// it was not shipped with.
fn fixture_content(linkedin: Option<&str>) -> SiteContent {
    SiteContent {
        hero: HeroInfo {
            name: "Jo Bloggs - Platform Engineer".to_string(),
            role: "SRE at Example Corp".to_string(),
            aspiration: String::new(),
            bio: "Keeps the lights on. Automates the rest.".to_string(),
        },
        about: AboutInfo {
            current_focus: "Reliability work.".to_string(),
            career_vision: "Boring infrastructure.".to_string(),
            learning: "Rust.".to_string(),
            value_proposition: "Fewer pages at 3am.".to_string(),
        },
        tech_stack: vec![TechCategory {
            title: "Ops".to_string(),
            icon: Icon::Workflow,
            focus: None,
            items: vec!["Kubernetes".to_string()],
        }],
        projects: vec![Project {
            title: "Pager Silencer".to_string(),
            description: "Dedupes alerts.".to_string(),
            repository: "https://github.com/jo-bloggs/pager-silencer".to_string(),
            stack: vec!["Rust".to_string()],
            theme: ProjectTheme::Tooling,
        }],
        contact: ContactInfo {
            email: "jo@example.com".to_string(),
            github: "https://github.com/jo-bloggs".to_string(),
            linkedin: linkedin.map(str::to_string),
            pronouns: "They/Them".to_string(),
        },
        highlights: vec![Highlight {
            title: "On-call hygiene".to_string(),
            description: "Cut alert noise by half.".to_string(),
            icon: Icon::BadgeCheck,
        }],
        site_url: "https://example.com".to_string(),
    }
}

#[test]
fn every_project_links_its_repository_exactly_once() {
    let (site_content, html) = render_canonical();
    for project in &site_content.projects {
        let needle = format!("href=\"{}\"", project.repository);
        assert_eq!(count(&html, &needle), 1, "repository {}", project.repository);
    }
}

#[test]
fn view_repo_link_count_matches_project_count() {
    let (site_content, html) = render_canonical();
    assert_eq!(count(&html, ">View repo</a>"), site_content.projects.len());
}

#[test]
fn every_used_theme_has_a_palette() {
    let (site_content, _) = render_canonical();
    for project in &site_content.projects {
        let p = palette(project.theme);
        assert!(!p.border.is_empty());
        assert!(!p.badge.is_empty());
        assert!(!p.background.is_empty());
    }
}

#[test]
fn hero_heading_contains_literal_name() {
    let (site_content, html) = render_canonical();
    let h1_start = html.find("<h1>").expect("missing h1");
    let h1_end = html.find("</h1>").expect("unterminated h1");
    assert!(html[h1_start..h1_end].contains(&site_content.hero.name));
}

#[test]
fn linkedin_link_renders_only_when_defined() {
    let generator = SiteGenerator::new();

    let with = fixture_content(Some("https://www.linkedin.com/in/jo-bloggs"));
    content::validate(&with).unwrap();
    let html = generator.generate(&with);
    assert_eq!(
        count(&html, "href=\"https://www.linkedin.com/in/jo-bloggs\""),
        1
    );

    let without = fixture_content(None);
    content::validate(&without).unwrap();
    let html = generator.generate(&without);
    assert_eq!(count(&html, "linkedin"), 0);
    assert_eq!(count(&html, "LinkedIn"), 0);
}

#[test]
fn canonical_email_renders_one_mailto() {
    let (_, html) = render_canonical();
    assert_eq!(count(&html, "href=\"mailto:adriancancio@duck.com\""), 1);
}

#[test]
fn anchors_and_nav_links_are_one_to_one() {
    let (_, html) = render_canonical();

    let nav_start = html.find("<nav").expect("missing nav");
    let nav_end = html.find("</nav>").expect("unterminated nav");
    let nav = &html[nav_start..nav_end];

    for anchor in ["about", "stack", "projects", "contact"] {
        assert_eq!(
            count(&html, &format!("id=\"{}\"", anchor)),
            1,
            "section id {}",
            anchor
        );
        assert_eq!(
            count(nav, &format!("href=\"#{}\"", anchor)),
            1,
            "nav link {}",
            anchor
        );
    }
    // No stray anchors beyond the canonical set.
    assert_eq!(count(nav, "href=\"#"), 4);
    assert_eq!(count(&html, "id=\"approach\""), 0);
}

#[test]
fn identical_content_renders_identical_bytes() {
    let site_content = SiteContent::canonical();
    let generator = SiteGenerator::new();
    let first = generator.generate(&site_content);
    let second = generator.generate(&site_content);
    assert_eq!(first, second);
}

#[test]
fn outbound_links_never_delegate() {
    let (site_content, html) = render_canonical();
    for (pos, _) in html.match_indices("target=\"_blank\"") {
        let tail = &html[pos..pos + 60.min(html.len() - pos)];
        assert!(
            tail.contains("rel=\"noopener noreferrer\""),
            "link at {} missing rel policy",
            pos
        );
    }
    // One policy-marked link per project plus one per defined contact
    // method (email, GitHub, optional LinkedIn).
    let expected = site_content.projects.len()
        + 2
        + usize::from(site_content.contact.linkedin.is_some());
    assert_eq!(count(&html, "rel=\"noopener noreferrer\""), expected);
}

#[test]
fn tech_cards_render_in_source_order() {
    let (site_content, html) = render_canonical();
    let mut last = 0;
    for category in &site_content.tech_stack {
        let pos = html[last..]
            .find(&format!("<h3>{}</h3>", category.title.replace('&', "&amp;")))
            .expect("category missing");
        last += pos;
    }
}

#[test]
fn metadata_stays_in_sync_with_content() {
    let (site_content, html) = render_canonical();
    let owner = site_content.hero.owner_name();
    assert!(html.contains(&format!("<title>{} | {}</title>", owner, site_content.hero.aspiration)));
    assert!(html.contains("\"@type\":\"Person\""));
    assert!(html.contains(&format!("\"name\":\"{}\"", owner)));
    assert!(html.contains(&format!("mailto:{}", site_content.contact.email)));
    assert!(html.contains(&format!(
        "<meta property=\"og:image\" content=\"{}/og-image.svg\">",
        site_content.site_url
    )));
}

#[test]
fn rendered_site_writes_to_disk() {
    let (_, html) = render_canonical();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(&path, &html).unwrap();
    let read_back = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back, html);
    assert!(read_back.starts_with("<!DOCTYPE html>"));
    assert!(read_back.trim_end().ends_with("</html>"));
}
