//! Tera registration for the post extensions.
//!
//! | name          | kind     | usage                                             |
//! |---------------|----------|---------------------------------------------------|
//! | `excerpt`     | filter   | `{{ page.content \| excerpt(default="") }}`        |
//! | `gravatar`    | filter   | `{{ "me@example.com" \| gravatar }}`               |
//! | `static_file` | function | `{{ static_file(path="img/a.png", page=page) }}`  |

use crate::models::PageContext;
use crate::services::{excerpt, gravatar, static_path};
use crate::Config;
use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Filter, Function, Tera, Value};

pub const EXCERPT_FILTER: &str = "excerpt";
pub const GRAVATAR_FILTER: &str = "gravatar";
pub const STATIC_FILE_FUNCTION: &str = "static_file";

/// Register every extension with `templates`.
pub fn register(templates: &mut Tera, config: &Config) {
    templates.register_filter(
        EXCERPT_FILTER,
        ExcerptFilter {
            fallback: config.content.excerpt_fallback.clone(),
        },
    );
    templates.register_filter(GRAVATAR_FILTER, gravatar_filter);
    templates.register_function(
        STATIC_FILE_FUNCTION,
        StaticFileFunction {
            files_url: config.site.files_url.clone(),
        },
    );
    tracing::debug!(
        "Registered {}, {} and {} with template engine",
        EXCERPT_FILTER,
        GRAVATAR_FILTER,
        STATIC_FILE_FUNCTION
    );
}

pub struct ExcerptFilter {
    fallback: Option<String>,
}

impl Filter for ExcerptFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let html = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("excerpt requires a string"))?;

        match excerpt::extract_excerpt(html) {
            Ok(text) => Ok(Value::String(text)),
            Err(err) => {
                let fallback = args
                    .get("default")
                    .and_then(|v| v.as_str())
                    .or(self.fallback.as_deref());
                match fallback {
                    Some(fallback) => Ok(Value::String(fallback.to_string())),
                    None => Err(err.into()),
                }
            }
        }
    }
}

fn gravatar_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let email = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("gravatar requires a string"))?;
    Ok(Value::String(gravatar::gravatar_url(email)))
}

pub struct StaticFileFunction {
    files_url: String,
}

impl Function for StaticFileFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let path = args
            .get("path")
            .and_then(|v| v.as_str())
            .ok_or_else(|| tera::Error::msg("static_file requires a `path` string argument"))?;

        let mut page = match args.get("page") {
            Some(value) => serde_json::from_value::<PageContext>(value.clone()).map_err(|e| {
                tera::Error::msg(format!("static_file: `page` is not a page object: {}", e))
            })?,
            None => PageContext::default(),
        };
        if let Some(dir) = string_arg(args, "static")? {
            page.static_dir = Some(dir);
        }
        if let Some(title) = string_arg(args, "title")? {
            page.title = Some(title);
        }

        let url = static_path::resolve_static_path(
            &self.files_url,
            page.static_dir.as_deref(),
            page.title.as_deref(),
            path,
        )?;
        Ok(Value::String(url))
    }
}

fn string_arg(args: &HashMap<String, Value>, name: &str) -> tera::Result<Option<String>> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(tera::Error::msg(format!(
            "static_file: `{}` must be a string",
            name
        ))),
    }
}

/// A Tera instance with the post extensions registered.
pub struct TemplateRenderer {
    config: Config,
    templates: Tera,
}

impl TemplateRenderer {
    pub fn new(config: Config) -> Self {
        let mut templates = Tera::default();
        // Extension output is inserted verbatim, URLs included.
        templates.autoescape_on(vec![]);
        register(&mut templates, &config);
        Self { config, templates }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.templates.add_raw_template(name, source)?;
        Ok(())
    }

    pub fn render(&self, name: &str, page: &PageContext) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("site", &self.config.site);
        ctx.insert("page", page);
        Ok(self.templates.render(name, &ctx)?)
    }

    pub fn render_str(&mut self, name: &str, source: &str, page: &PageContext) -> Result<String> {
        self.add_template(name, source)?;
        self.render(name, page)
    }
}
