//! First-paragraph excerpts.
//!
//! The rendered post is parsed as a whole document, so loose markup such as
//! `<h1>..</h1><p>..</p>` ends up under an implied `<body>`. Only paragraphs
//! that are direct children of `<body>` count; a `<p>` inside a
//! `<blockquote>` or `<div>` is never the excerpt.

use crate::error::{FilterError, FilterResult};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TOP_LEVEL_PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body > p").expect("Invalid paragraph selector"));

/// Return the text content of the first top-level paragraph.
///
/// Tags are stripped and text nodes concatenated as-is; whitespace is not
/// collapsed.
pub fn extract_excerpt(html: &str) -> FilterResult<String> {
    let document = Html::parse_document(html);

    let paragraph = document.select(&TOP_LEVEL_PARAGRAPH).next().ok_or_else(|| {
        tracing::debug!("No top-level paragraph in {} bytes of HTML", html.len());
        FilterError::NotFound("no top-level paragraph in document".to_string())
    })?;

    Ok(paragraph.text().collect())
}

/// Like [`extract_excerpt`], but falls back to `fallback` when the document
/// has no top-level paragraph.
pub fn extract_excerpt_or(html: &str, fallback: &str) -> String {
    match extract_excerpt(html) {
        Ok(excerpt) => excerpt,
        Err(_) => fallback.to_string(),
    }
}
