use crate::models::StaticContext;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub fn run(
    config_path: &Path,
    path: &str,
    title: Option<&str>,
    static_dir: Option<&str>,
    files_url: Option<&str>,
) -> Result<()> {
    let files_url = match files_url {
        Some(url) => url.to_string(),
        None => Config::load(config_path)?.site.files_url,
    };
    println!("{}", execute(&files_url, path, title, static_dir)?);
    Ok(())
}

pub fn execute(
    files_url: &str,
    path: &str,
    title: Option<&str>,
    static_dir: Option<&str>,
) -> Result<String> {
    let ctx = StaticContext {
        files_url,
        static_dir,
        title,
    };
    Ok(ctx.resolve(path)?)
}
