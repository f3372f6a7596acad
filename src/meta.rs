//! Page Metadata
//!
//! Everything inside `<head>`: title, description, Open Graph and Twitter
//! tags, the schema.org Person payload, and the embedded stylesheet. All
//! of it derives from the same content records the page body renders, so
//! the two surfaces cannot drift apart.

use serde_json::{json, Value};

use crate::content::SiteContent;
use crate::site::view::escape_html;

/// Derived page metadata.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub site_name: String,
    /// Social-preview image URL, served from the site root.
    pub image_url: String,
    pub keywords: Vec<String>,
}

impl PageMeta {
    /// Derive the metadata surface from the content model.
    pub fn from_content(content: &SiteContent) -> Self {
        let owner = content.hero.owner_name();
        let title = if content.hero.aspiration.is_empty() {
            owner.to_string()
        } else {
            format!("{} | {}", owner, content.hero.aspiration)
        };

        let mut keywords: Vec<String> = vec![owner.to_string()];
        keywords.extend(
            content
                .tech_stack
                .iter()
                .flat_map(|category| category.items.iter().cloned()),
        );
        keywords.push("Portfolio".to_string());

        PageMeta {
            title,
            description: first_sentence(&content.hero.bio),
            canonical_url: content.site_url.clone(),
            site_name: format!("{} Portfolio", owner),
            image_url: format!("{}/og-image.svg", content.site_url.trim_end_matches('/')),
            keywords,
        }
    }
}

/// schema.org Person payload, embedded as JSON-LD.
pub fn person_json_ld(content: &SiteContent) -> Value {
    let owner = content.hero.owner_name();

    // "Software Developer at Treelogic" → jobTitle + worksFor.
    let (job_title, employer) = match content.hero.role.split_once(" at ") {
        Some((title, employer)) => (title, Some(employer)),
        None => (content.hero.role.as_str(), None),
    };

    let mut same_as = vec![content.contact.github.clone()];
    if let Some(linkedin) = &content.contact.linkedin {
        same_as.push(linkedin.clone());
    }

    let knows_about: Vec<&str> = content
        .tech_stack
        .iter()
        .flat_map(|category| category.items.iter().map(String::as_str))
        .collect();

    let mut person = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": owner,
        "jobTitle": job_title,
        "url": content.site_url,
        "email": format!("mailto:{}", content.contact.email),
        "sameAs": same_as,
        "description": first_sentence(&content.hero.bio),
        "knowsAbout": knows_about,
    });
    if let Some(employer) = employer {
        person["worksFor"] = json!({ "@type": "Organization", "name": employer });
    }
    person
}

/// Assemble the full `<head>` element.
pub fn generate_head(content: &SiteContent) -> String {
    let meta = PageMeta::from_content(content);

    let mut html = String::with_capacity(8192);
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&meta.title)));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_html(&meta.description)
    ));
    html.push_str(&format!(
        "<meta name=\"keywords\" content=\"{}\">\n",
        escape_html(&meta.keywords.join(", "))
    ));
    html.push_str(&format!(
        "<meta name=\"author\" content=\"{}\">\n",
        escape_html(content.hero.owner_name())
    ));
    html.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_html(&meta.canonical_url)
    ));

    // Open Graph / Twitter preview.
    html.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape_html(&meta.title)
    ));
    html.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        escape_html(&meta.description)
    ));
    html.push_str(&format!(
        "<meta property=\"og:url\" content=\"{}\">\n",
        escape_html(&meta.canonical_url)
    ));
    html.push_str(&format!(
        "<meta property=\"og:site_name\" content=\"{}\">\n",
        escape_html(&meta.site_name)
    ));
    html.push_str("<meta property=\"og:type\" content=\"website\">\n");
    html.push_str("<meta property=\"og:locale\" content=\"en_US\">\n");
    html.push_str(&format!(
        "<meta property=\"og:image\" content=\"{}\">\n",
        escape_html(&meta.image_url)
    ));
    html.push_str(&format!(
        "<meta property=\"og:image:alt\" content=\"{}\">\n",
        escape_html(&meta.title)
    ));
    html.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
    html.push_str(&format!(
        "<meta name=\"twitter:title\" content=\"{}\">\n",
        escape_html(&meta.title)
    ));
    html.push_str(&format!(
        "<meta name=\"twitter:image\" content=\"{}\">\n",
        escape_html(&meta.image_url)
    ));

    // Structured person record. serde_json cannot fail on a json! value.
    let json_ld =
        serde_json::to_string(&person_json_ld(content)).unwrap_or_else(|_| "{}".to_string());
    html.push_str("<script type=\"application/ld+json\">");
    html.push_str(&json_ld);
    html.push_str("</script>\n");

    html.push_str("<style>\n");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n");
    html.push_str("</head>\n");
    html
}

/// Up to and including the first full stop, falling back to the whole text.
fn first_sentence(text: &str) -> String {
    match text.find(". ") {
        Some(pos) => text[..=pos].to_string(),
        None => text.to_string(),
    }
}

/// Condensed rendition of the site's dark terminal-accent styling.
const STYLESHEET: &str = "\
body { margin: 0; background: #070b1a; color: #e2e8f0; font-family: ui-monospace, 'Cascadia Code', Menlo, monospace; line-height: 1.6; }
.hero, main, .site-footer { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.accent { color: #38bdf8; }
a { color: #38bdf8; text-decoration: none; }
a:hover { color: #7dd3fc; }
.top-nav { display: flex; align-items: center; justify-content: space-between; padding: 1rem 0; border-bottom: 1px solid rgba(255,255,255,0.05); }
.brand { font-weight: 600; color: #e2e8f0; }
.nav-links { display: flex; gap: 1.5rem; }
.nav-link { color: #cbd5e1; }
.hero-panel { display: grid; gap: 2rem; grid-template-columns: minmax(0,1fr) minmax(0,300px); margin-top: 2.5rem; padding: 2rem; border: 1px solid rgba(56,189,248,0.2); border-radius: 1rem; background: linear-gradient(135deg, rgba(15,23,42,0.95), rgba(2,6,23,0.8)); }
h1 { font-size: 2.5rem; color: #fff; margin: 0 0 0.5rem; letter-spacing: -0.02em; }
.hero-role { font-weight: 500; color: rgba(226,232,240,0.9); }
.hero-aspiration { display: inline-block; padding: 0.25rem 0.75rem; border: 1px solid rgba(56,189,248,0.3); border-radius: 0.375rem; color: #7dd3fc; font-size: 0.8rem; }
.hero-bio { max-width: 42rem; color: #cbd5e1; font-size: 0.95rem; }
.hero-actions { display: flex; gap: 1rem; }
.cta { display: inline-flex; align-items: center; padding: 0.75rem 1.25rem; border-radius: 0.375rem; font-weight: 600; font-size: 0.875rem; }
.cta-primary { background: #38bdf8; color: #020617; }
.cta-secondary { border: 1px solid rgba(56,189,248,0.3); color: #7dd3fc; }
.trajectory { display: flex; flex-direction: column; gap: 1rem; padding: 1.5rem; border: 1px solid rgba(56,189,248,0.2); border-radius: 0.75rem; background: rgba(15,23,42,0.6); }
.trajectory h3 { margin: 0; font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.25em; color: #7dd3fc; border-bottom: 1px solid rgba(56,189,248,0.2); padding-bottom: 0.5rem; }
.highlight { display: flex; gap: 0.75rem; align-items: flex-start; }
.highlight-title { margin: 0; color: #fff; font-weight: 500; }
.highlight-description { margin: 0.25rem 0 0; color: #94a3b8; font-size: 0.8rem; }
.icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; border: 1px solid rgba(56,189,248,0.2); border-radius: 0.375rem; background: rgba(56,189,248,0.1); }
.section { padding: 3rem 0; }
.eyebrow { margin: 0; text-transform: uppercase; letter-spacing: 0.3em; font-size: 0.7rem; font-weight: 600; color: #38bdf8; }
.section-head h2 { margin: 0.75rem 0 0; font-size: 2rem; color: #f1f5f9; letter-spacing: -0.02em; }
.section-description { max-width: 42rem; margin-top: 1rem; color: #cbd5e1; font-size: 0.95rem; }
.section-body { margin-top: 2rem; }
.card-grid { display: grid; gap: 1.25rem; }
.cols-2 { grid-template-columns: repeat(2, minmax(0,1fr)); }
.cols-3 { grid-template-columns: repeat(3, minmax(0,1fr)); }
.card { border: 1px solid rgba(56,189,248,0.2); border-radius: 0.75rem; background: rgba(56,189,248,0.05); padding: 1.5rem; }
.card h3 { margin: 0; color: #fff; font-size: 1.05rem; }
.card p { color: #cbd5e1; font-size: 0.85rem; }
.card-heading { display: flex; align-items: center; gap: 0.75rem; }
.card-focus { margin: 0.2rem 0 0; text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.65rem; color: rgba(125,211,252,0.8); }
.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1.25rem; }
.chip { border: 1px solid rgba(56,189,248,0.2); background: rgba(56,189,248,0.1); border-radius: 0.375rem; padding: 0.3rem 0.8rem; font-size: 0.8rem; color: #bae6fd; }
.chip-dim { background: rgba(56,189,248,0.05); color: #7dd3fc; }
.project-head { display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
.badge { display: inline-flex; align-items: center; gap: 0.3rem; border-radius: 0.375rem; border: 1px solid; padding: 0.3rem 0.75rem; font-size: 0.7rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.25em; }
.repo-link { font-size: 0.75rem; font-weight: 500; }
.border-cyan { border-color: rgba(34,211,238,0.3); }
.badge-cyan { background: rgba(34,211,238,0.15); color: #67e8f9; border-color: rgba(34,211,238,0.3); }
.card-cyan { background: linear-gradient(135deg, rgba(6,182,212,0.15), rgba(15,23,42,0.8)); }
.border-emerald { border-color: rgba(52,211,153,0.3); }
.badge-emerald { background: rgba(52,211,153,0.15); color: #6ee7b7; border-color: rgba(52,211,153,0.3); }
.card-emerald { background: linear-gradient(135deg, rgba(16,185,129,0.15), rgba(15,23,42,0.8)); }
.border-purple { border-color: rgba(192,132,252,0.3); }
.badge-purple { background: rgba(192,132,252,0.15); color: #d8b4fe; border-color: rgba(192,132,252,0.3); }
.card-purple { background: linear-gradient(135deg, rgba(168,85,247,0.15), rgba(15,23,42,0.8)); }
.contact-panel > p { max-width: 40rem; }
.contact-card { border: 1px solid rgba(56,189,248,0.2); border-radius: 0.5rem; background: rgba(56,189,248,0.05); }
.contact-link, .contact-card { display: block; }
.contact-link .contact-copy, .contact-card .contact-copy { display: inline-flex; flex-direction: column; }
.contact-card > *, .contact-link { padding: 0.75rem 1rem; }
.contact-kind { text-transform: uppercase; letter-spacing: 0.25em; font-size: 0.65rem; color: #38bdf8; }
.contact-value { color: #fff; font-size: 0.85rem; font-weight: 500; }
.site-footer { border-top: 1px solid rgba(56,189,248,0.1); margin-top: 2rem; padding-top: 2rem; padding-bottom: 3rem; font-size: 0.7rem; color: #64748b; }
@media (max-width: 768px) { .hero-panel, .cols-2, .cols-3 { grid-template-columns: minmax(0,1fr); } .nav-links { display: none; } }
";
