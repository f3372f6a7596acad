//! Site Content
//!
//! Typed records describing the portfolio owner: hero identity, about
//! narrative, tech stack, projects, contact details, and highlight cards.
//! The data is literal and immutable; `SiteContent::canonical()` builds it
//! once and the view layer only ever reads it.
//!
//! Schema problems (bad URL, duplicate title, empty skill list) are a
//! build/test-time concern: `validate()` runs before rendering in the
//! binary and in the test suite, never during rendering itself.

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

/// Icon reference used by tech categories, highlights, and contact cards.
/// Each variant maps to its lucide icon slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code2,
    Rocket,
    Workflow,
    Boxes,
    BadgeCheck,
    Target,
    Mail,
    Github,
    Linkedin,
}

impl Icon {
    pub fn slug(&self) -> &'static str {
        match self {
            Icon::Code2 => "code-2",
            Icon::Rocket => "rocket",
            Icon::Workflow => "workflow",
            Icon::Boxes => "boxes",
            Icon::BadgeCheck => "badge-check",
            Icon::Target => "target",
            Icon::Mail => "mail",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
        }
    }
}

/// Project classification driving the card color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTheme {
    Automation,
    Systems,
    Tooling,
}

impl ProjectTheme {
    pub const ALL: [ProjectTheme; 3] = [
        ProjectTheme::Automation,
        ProjectTheme::Systems,
        ProjectTheme::Tooling,
    ];

    /// Lowercase badge label, as shown on the project card.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectTheme::Automation => "automation",
            ProjectTheme::Systems => "systems",
            ProjectTheme::Tooling => "tooling",
        }
    }
}

/// Top-of-page identity statement.
#[derive(Debug, Clone)]
pub struct HeroInfo {
    pub name: String,
    pub role: String,
    /// May be empty; the hero badge is skipped when it is.
    pub aspiration: String,
    pub bio: String,
}

impl HeroInfo {
    /// The bare owner name, without the role suffix the full heading
    /// carries (`"Adrian Cancio - Cloud DevOps Engineer"` → `"Adrian Cancio"`).
    pub fn owner_name(&self) -> &str {
        self.name.split(" - ").next().unwrap_or(&self.name)
    }
}

/// The four about-section narrative blocks.
#[derive(Debug, Clone)]
pub struct AboutInfo {
    pub current_focus: String,
    pub career_vision: String,
    pub learning: String,
    pub value_proposition: String,
}

/// One grouping of skills in the stack section.
#[derive(Debug, Clone)]
pub struct TechCategory {
    pub title: String,
    pub icon: Icon,
    /// Optional focus subtitle under the category title.
    pub focus: Option<String>,
    pub items: Vec<String>,
}

/// One portfolio entry.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub repository: String,
    pub stack: Vec<String>,
    pub theme: ProjectTheme,
}

/// Reach-out details.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub email: String,
    pub github: String,
    pub linkedin: Option<String>,
    pub pronouns: String,
}

/// A trajectory callout card beside the hero.
#[derive(Debug, Clone)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

/// The whole content model, read-only after construction.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub hero: HeroInfo,
    pub about: AboutInfo,
    pub tech_stack: Vec<TechCategory>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub highlights: Vec<Highlight>,
    /// Canonical site URL, used by the metadata surface.
    pub site_url: String,
}

impl SiteContent {
    /// The canonical content set for the live site.
    pub fn canonical() -> Self {
        SiteContent {
            hero: HeroInfo {
                name: "Adrian Cancio - Cloud DevOps Engineer".to_string(),
                role: "Software Developer at Treelogic".to_string(),
                aspiration: "Aspiring Cloud/DevOps Engineer".to_string(),
                bio: "Full-stack developer grounded in Java/Spring Boot and Angular, \
                      driven by automation and a commitment to continuous improvement in \
                      systems architecture and DevSecOps pipelines. I specialize in \
                      building scalable applications, implementing CI/CD workflows, and \
                      automating infrastructure provisioning. My expertise spans backend \
                      services, modern frontend frameworks, and cloud automation tools \
                      including PowerShell, Python, and shell scripting."
                    .to_string(),
            },
            about: AboutInfo {
                current_focus: "Building production-grade applications across the Spring \
                      Boot and Angular stack while championing clean architectures and \
                      measurable delivery. I design RESTful APIs, implement CI/CD \
                      pipelines, and ensure code quality through automated testing and \
                      continuous integration practices. Every project is an opportunity \
                      to refine development workflows and elevate team productivity \
                      through better tooling and processes."
                    .to_string(),
                career_vision: "Transitioning into a Cloud/DevOps Engineer role where \
                      automation, Infrastructure as Code (IaC), and secure-by-design \
                      pipelines accelerate product impact. My goal is to build \
                      cloud-native platforms that empower development teams with \
                      self-service infrastructure, automated deployments, and \
                      comprehensive observability. I'm passionate about creating systems \
                      that scale efficiently while maintaining security and reliability \
                      at every layer."
                    .to_string(),
                learning: "Currently mastering PowerShell to deliver cross-platform \
                      automation that bridges cloud-native tooling with enterprise \
                      environments. I'm diving deep into container orchestration, \
                      Kubernetes deployments, and declarative infrastructure management \
                      with tools like Terraform and Ansible. This hands-on learning \
                      approach combines real-world projects with continuous \
                      experimentation to build practical expertise in modern DevOps \
                      practices."
                    .to_string(),
                value_proposition: "I bring an automation-first mindset to every project: \
                      designing resilient environments, codifying infrastructure, and \
                      weaving observability and security into delivery workflows. My \
                      approach combines software engineering best practices with \
                      infrastructure expertise to create robust, maintainable systems. \
                      Whether automating deployment pipelines, hardening security \
                      configurations, or optimizing cloud resource utilization, I focus \
                      on delivering measurable improvements in speed, reliability, and \
                      cost efficiency."
                    .to_string(),
            },
            tech_stack: vec![
                TechCategory {
                    title: "Languages".to_string(),
                    icon: Icon::Code2,
                    focus: Some("Polyglot foundations for resilient systems".to_string()),
                    items: vec![
                        "Java".to_string(),
                        "Python".to_string(),
                        "JavaScript".to_string(),
                        "TypeScript".to_string(),
                        "C#".to_string(),
                        "C/C++".to_string(),
                    ],
                },
                TechCategory {
                    title: "Web Frameworks".to_string(),
                    icon: Icon::Rocket,
                    focus: Some("Product delivery with full-stack ownership".to_string()),
                    items: vec![
                        "Spring Boot".to_string(),
                        "Angular".to_string(),
                        "REST APIs".to_string(),
                    ],
                },
                TechCategory {
                    title: "DevOps & Automation".to_string(),
                    icon: Icon::Workflow,
                    focus: Some("Automation-first, secure-by-default".to_string()),
                    items: vec![
                        "PowerShell (Deep Focus)".to_string(),
                        "Shell Scripting".to_string(),
                        "DevSecOps".to_string(),
                    ],
                },
                TechCategory {
                    title: "Other".to_string(),
                    icon: Icon::Boxes,
                    focus: Some("Versatile tooling to accelerate delivery".to_string()),
                    items: vec![
                        "Flutter (Dart)".to_string(),
                        "Object-Oriented Design".to_string(),
                        "Data Structures".to_string(),
                        "System Configuration (Lua/Neovim)".to_string(),
                        "Linux".to_string(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "Automation / Scripting".to_string(),
                    description: "Infrastructure bootstrap and environment hardening \
                          scripts spanning PowerShell and Bash to bring consistency to \
                          developer workstations and servers. These scripts automate \
                          software installation, system configuration, security \
                          hardening, and development environment setup across Windows, \
                          Linux, and macOS platforms. Built with modularity and \
                          reusability in mind, they serve as the foundation for \
                          reproducible infrastructure."
                        .to_string(),
                    repository: "https://github.com/adrian-cancio/PowerShell-Config".to_string(),
                    stack: vec![
                        "PowerShell".to_string(),
                        "Automation".to_string(),
                        "Infrastructure as Code".to_string(),
                    ],
                    theme: ProjectTheme::Automation,
                },
                Project {
                    title: "Root Utilities".to_string(),
                    description: "Workflow accelerators for repetitive operations, \
                          packaging guardrails for security-sensitive tasks. This \
                          collection of utilities streamlines common DevOps workflows \
                          including credential management, deployment automation, and \
                          system administration tasks. Each utility follows security \
                          best practices with input validation, error handling, and \
                          comprehensive logging to ensure safe execution in production \
                          environments."
                        .to_string(),
                    repository: "https://github.com/adrian-cancio/root-utils".to_string(),
                    stack: vec![
                        "PowerShell".to_string(),
                        "DevSecOps".to_string(),
                        "Tooling".to_string(),
                    ],
                    theme: ProjectTheme::Automation,
                },
                Project {
                    title: "PQC DevSecOps Pipeline".to_string(),
                    description: "Prototype CI/CD pipeline weaving post-quantum \
                          cryptography checks into automated delivery gates with Python \
                          automation scripts. This forward-looking project demonstrates \
                          how to integrate cryptographic agility into modern development \
                          workflows, ensuring applications are prepared for the \
                          post-quantum computing era. Includes automated security \
                          scanning, cryptographic library validation, and compliance \
                          reporting."
                        .to_string(),
                    repository: "https://github.com/adrian-cancio/pqc-devsecops-pipeline"
                        .to_string(),
                    stack: vec![
                        "Python".to_string(),
                        "CI/CD".to_string(),
                        "Security Automation".to_string(),
                    ],
                    theme: ProjectTheme::Automation,
                },
                Project {
                    title: "League Outcome Simulator".to_string(),
                    description: "Predictive analytics toolkit estimating tournament \
                          trajectories and scenario planning for stakeholders. Uses \
                          statistical modeling and simulation techniques to forecast \
                          competition outcomes based on historical performance data. \
                          Provides interactive visualizations and what-if analysis \
                          capabilities that help teams and analysts make data-driven \
                          strategic decisions."
                        .to_string(),
                    repository: "https://github.com/adrian-cancio/league-outcome-simulator"
                        .to_string(),
                    stack: vec![
                        "Python".to_string(),
                        "Data Simulation".to_string(),
                        "Analytics".to_string(),
                    ],
                    theme: ProjectTheme::Systems,
                },
                Project {
                    title: "Kickstart Neovim".to_string(),
                    description: "Lua-driven configuration balancing developer ergonomics \
                          with safe defaults for terminal-first workflows. This \
                          highly-optimized Neovim setup includes language server protocol \
                          (LSP) integration, intelligent code completion, syntax \
                          highlighting, and Git integration. Designed for developers who \
                          value keyboard-driven efficiency and want a modern IDE \
                          experience in the terminal."
                        .to_string(),
                    repository: "https://github.com/adrian-cancio/kickstart.nvim".to_string(),
                    stack: vec![
                        "Lua".to_string(),
                        "Developer Experience".to_string(),
                        "System Configuration".to_string(),
                    ],
                    theme: ProjectTheme::Tooling,
                },
            ],
            contact: ContactInfo {
                email: "adriancancio@duck.com".to_string(),
                github: "https://github.com/adrian-cancio".to_string(),
                linkedin: Some("https://www.linkedin.com/in/adrian-cancio".to_string()),
                pronouns: "He/Him".to_string(),
            },
            highlights: vec![
                Highlight {
                    title: "Cloud & DevOps Trajectory".to_string(),
                    description: "Advancing towards cloud-native delivery with \
                          Infrastructure as Code (IaC), container orchestration, and \
                          security-aware CI/CD pipelines. I'm building expertise in \
                          cloud platforms, Kubernetes, Docker, and automated deployment \
                          strategies that enable rapid, reliable software delivery at \
                          scale."
                        .to_string(),
                    icon: Icon::BadgeCheck,
                },
                Highlight {
                    title: "Automation at Scale".to_string(),
                    description: "Passionate about codifying repeatable, observable \
                          workflows that reduce operational toil for teams. From \
                          automated testing and deployment pipelines to infrastructure \
                          provisioning scripts, I create solutions that eliminate manual \
                          processes and empower teams to focus on innovation rather than \
                          repetitive tasks."
                        .to_string(),
                    icon: Icon::Workflow,
                },
                Highlight {
                    title: "Continuous Improvement".to_string(),
                    description: "Relentless focus on feedback loops, pairing metrics \
                          with retrospectives to evolve products and processes. I \
                          implement monitoring, logging, and observability solutions \
                          that provide actionable insights, enabling data-driven \
                          decisions that continuously improve system reliability and \
                          team velocity."
                        .to_string(),
                    icon: Icon::Rocket,
                },
            ],
            site_url: "https://adrian.cancio.info".to_string(),
        }
    }
}

/// Content schema violation, surfaced before rendering.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{field}: not an absolute http(s) URL: {value}")]
    InvalidUrl { field: String, value: String },

    #[error("not a valid email address: {0}")]
    InvalidEmail(String),

    #[error("duplicate {kind} title: {title}")]
    DuplicateTitle { kind: &'static str, title: String },

    #[error("tech category '{0}' has an empty skill list")]
    EmptySkillList(String),

    #[error("required field is empty: {0}")]
    EmptyField(&'static str),
}

/// Check the content model against its schema invariants.
///
/// Rendering itself has no failure path; this runs in the binary before
/// rendering and in the test suite.
pub fn validate(content: &SiteContent) -> Result<(), ContentError> {
    require_nonempty("hero.name", &content.hero.name)?;
    require_nonempty("hero.role", &content.hero.role)?;
    require_nonempty("about.current_focus", &content.about.current_focus)?;
    require_nonempty("about.career_vision", &content.about.career_vision)?;
    require_nonempty("about.learning", &content.about.learning)?;
    require_nonempty("about.value_proposition", &content.about.value_proposition)?;

    let mut category_titles = HashSet::new();
    for category in &content.tech_stack {
        if !category_titles.insert(category.title.as_str()) {
            return Err(ContentError::DuplicateTitle {
                kind: "tech category",
                title: category.title.clone(),
            });
        }
        if category.items.is_empty() {
            return Err(ContentError::EmptySkillList(category.title.clone()));
        }
    }

    let mut project_titles = HashSet::new();
    for project in &content.projects {
        if !project_titles.insert(project.title.as_str()) {
            return Err(ContentError::DuplicateTitle {
                kind: "project",
                title: project.title.clone(),
            });
        }
        require_absolute_url("project.repository", &project.repository)?;
    }

    require_absolute_url("contact.github", &content.contact.github)?;
    if let Some(linkedin) = &content.contact.linkedin {
        require_absolute_url("contact.linkedin", linkedin)?;
    }
    require_email(&content.contact.email)?;
    require_absolute_url("site_url", &content.site_url)?;

    for highlight in &content.highlights {
        if highlight.description.trim().is_empty() {
            return Err(ContentError::EmptyField("highlight.description"));
        }
    }

    Ok(())
}

fn require_nonempty(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField(field));
    }
    Ok(())
}

fn require_absolute_url(field: &str, value: &str) -> Result<(), ContentError> {
    let parsed = Url::parse(value).map_err(|_| ContentError::InvalidUrl {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ContentError::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn require_email(value: &str) -> Result<(), ContentError> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ContentError::InvalidEmail(value.to_string()));
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok {
        return Err(ContentError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_content_validates() {
        let content = SiteContent::canonical();
        validate(&content).unwrap();
    }

    #[test]
    fn canonical_content_shape() {
        let content = SiteContent::canonical();
        assert_eq!(content.tech_stack.len(), 4);
        assert_eq!(content.projects.len(), 5);
        assert_eq!(content.highlights.len(), 3);
        assert_eq!(content.contact.email, "adriancancio@duck.com");
        assert!(content.contact.linkedin.is_some());
    }

    #[test]
    fn rejects_relative_repository_url() {
        let mut content = SiteContent::canonical();
        content.projects[0].repository = "/adrian-cancio/root-utils".to_string();
        assert!(matches!(
            validate(&content),
            Err(ContentError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut content = SiteContent::canonical();
        content.contact.github = "ftp://github.com/adrian-cancio".to_string();
        assert!(matches!(
            validate(&content),
            Err(ContentError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut content = SiteContent::canonical();
        content.contact.email = "adriancancio.duck.com".to_string();
        assert!(matches!(
            validate(&content),
            Err(ContentError::InvalidEmail(_))
        ));
    }

    #[test]
    fn rejects_duplicate_project_title() {
        let mut content = SiteContent::canonical();
        let clone = content.projects[0].clone();
        content.projects.push(clone);
        assert!(matches!(
            validate(&content),
            Err(ContentError::DuplicateTitle { kind: "project", .. })
        ));
    }

    #[test]
    fn rejects_empty_skill_list() {
        let mut content = SiteContent::canonical();
        content.tech_stack[0].items.clear();
        assert!(matches!(
            validate(&content),
            Err(ContentError::EmptySkillList(_))
        ));
    }

    #[test]
    fn theme_labels_are_lowercase_slugs() {
        for theme in ProjectTheme::ALL {
            let label = theme.label();
            assert!(!label.is_empty());
            assert_eq!(label, label.to_lowercase());
        }
    }
}
