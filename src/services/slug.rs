/// Derive a static directory name from a post title.
///
/// Every character outside `[a-zA-Z0-9]` becomes a single `_`, so the
/// result has exactly as many characters as the title.
pub fn generate_slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() {
        return false;
    }
    slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
