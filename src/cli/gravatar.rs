use crate::services::gravatar::gravatar_url;
use anyhow::Result;

pub fn run(email: &str) -> Result<()> {
    tracing::debug!("Hashing email address for Gravatar");
    println!("{}", gravatar_url(email));
    Ok(())
}
