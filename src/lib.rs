pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod templates;


pub use config::Config;
pub use error::{FilterError, FilterResult};
pub use templates::TemplateRenderer;
