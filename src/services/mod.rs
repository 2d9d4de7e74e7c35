pub mod excerpt;
pub mod gravatar;
pub mod markdown;
pub mod slug;
pub mod static_path;

pub use excerpt::{extract_excerpt, extract_excerpt_or};
pub use gravatar::{gravatar_hash, gravatar_url};
pub use static_path::resolve_static_path;
