//! Gravatar avatar URLs.
//!
//! MD5 is what the avatar service keys on. It is not used for anything
//! security related here.

use md5::{Digest, Md5};

pub const GRAVATAR_BASE_URL: &str = "http://www.gravatar.com/avatar";

/// Lowercase hex MD5 of the trimmed, lowercased input.
pub fn gravatar_hash(input: &str) -> String {
    let email_address = input.trim().to_lowercase();
    hex::encode(Md5::digest(email_address.as_bytes()))
}

pub fn gravatar_url(input: &str) -> String {
    format!("{}/{}", GRAVATAR_BASE_URL, gravatar_hash(input))
}
