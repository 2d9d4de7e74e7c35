use crate::models::PageContext;
use crate::services::markdown::MarkdownRenderer;
use crate::{Config, TemplateRenderer};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(
    config_path: &Path,
    template: &Path,
    page: Option<&Path>,
    content: Option<&Path>,
    markdown: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let source = std::fs::read_to_string(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;

    let mut page = match page {
        Some(path) => PageContext::load(path)?,
        None => PageContext::default(),
    };
    if let Some(path) = content {
        page.content = Some(super::read_input(Some(path))?);
    }

    let name = template.to_string_lossy();
    let output = execute(config, &name, &source, page, markdown)?;
    print!("{}", output);
    Ok(())
}

pub fn execute(
    config: Config,
    name: &str,
    source: &str,
    mut page: PageContext,
    markdown: bool,
) -> Result<String> {
    if markdown || config.content.markdown {
        if let Some(body) = page.content.take() {
            page.content = Some(MarkdownRenderer::new().render(&body));
        }
    }

    tracing::info!("Rendering {}", name);
    let mut renderer = TemplateRenderer::new(config);
    renderer.render_str(name, source, &page)
}
