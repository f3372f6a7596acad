//! Render the portfolio site to a static HTML file.
//!
//! Run with: cargo run --bin generate_site [output_dir]
//! Defaults to writing dist/index.html.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use portfolio_site_rust::{content, SiteContent, SiteGenerator};

const DEFAULT_OUTPUT_DIR: &str = "dist";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_site_rust=info,info")),
        )
        .with_target(false)
        .compact()
        .init();

    let out_dir = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
    );

    let site_content = SiteContent::canonical();
    content::validate(&site_content).context("content validation failed")?;
    tracing::info!(
        projects = site_content.projects.len(),
        tech_categories = site_content.tech_stack.len(),
        "content validated"
    );

    let html = SiteGenerator::new().generate(&site_content);

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output dir {}", out_dir.display()))?;
    let index_path = out_dir.join("index.html");
    fs::write(&index_path, &html)
        .with_context(|| format!("failed to write {}", index_path.display()))?;

    tracing::info!(path = %index_path.display(), bytes = html.len(), "site rendered");
    Ok(())
}
