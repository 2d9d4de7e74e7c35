use crate::services::excerpt::extract_excerpt;
use crate::services::markdown::MarkdownRenderer;
use anyhow::Result;
use std::path::Path;

pub fn run(file: Option<&Path>, markdown: bool) -> Result<()> {
    let input = super::read_input(file)?;
    println!("{}", execute(&input, markdown)?);
    Ok(())
}

pub fn execute(input: &str, markdown: bool) -> Result<String> {
    let html = if markdown {
        MarkdownRenderer::new().render(input)
    } else {
        input.to_string()
    };
    Ok(extract_excerpt(&html)?)
}
