use crate::error::{FilterError, FilterResult};
use crate::services::slug::generate_slug;

/// Build `{files_url}/{segment}/{path}` for a post's static file.
///
/// `segment` is `static_dir` verbatim when present; the title is only
/// consulted otherwise. Nothing is escaped or normalized.
pub fn resolve_static_path(
    files_url: &str,
    static_dir: Option<&str>,
    title: Option<&str>,
    path: &str,
) -> FilterResult<String> {
    let segment = match (static_dir, title) {
        (Some(dir), _) => dir.to_string(),
        (None, Some(title)) => generate_slug(title),
        (None, None) => {
            return Err(FilterError::InvalidInput(format!(
                "cannot resolve static path '{}': page has neither a static directory nor a title",
                path
            )));
        }
    };

    Ok(format!("{}/{}/{}", files_url, segment, path))
}
