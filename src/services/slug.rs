//! Public identifiers derived from a record's integer id.

use super::hashids::Hashids;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ALPHABET: &str = "abcdefghijkmnopqrstuvwxyz23456789";
pub const DEFAULT_SALT: &str = "Django Spectator";
pub const DEFAULT_MIN_LENGTH: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("slugs can only be generated for positive ids, got {0}")]
    InvalidId(i64),
    #[error("slug alphabet needs at least {required} unique characters, found {found}")]
    AlphabetTooShort { found: usize, required: usize },
    #[error("slug alphabet cannot contain whitespace")]
    AlphabetHasWhitespace,
}

/// Changing any of these after slugs have been stored means new records get
/// slugs from a different mapping than old ones.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SlugConfig {
    pub alphabet: String,
    pub salt: String,
    pub min_length: usize,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            salt: DEFAULT_SALT.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl SlugConfig {
    pub fn hashids(&self) -> Result<Hashids, SlugError> {
        Hashids::new(&self.salt, self.min_length, &self.alphabet)
    }

    pub fn validate(&self) -> Result<(), SlugError> {
        self.hashids().map(|_| ())
    }
}

pub fn generate_slug(id: i64, config: &SlugConfig) -> Result<String, SlugError> {
    let value = u64::try_from(id)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(SlugError::InvalidId(id))?;
    Ok(config.hashids()?.encode(&[value]))
}

/// The id a slug was generated from, if it was generated with `config`.
pub fn decode_slug(slug: &str, config: &SlugConfig) -> Result<Option<i64>, SlugError> {
    let numbers = config.hashids()?.decode(slug);
    let id = match numbers.as_slice() {
        [number] => i64::try_from(*number).ok(),
        _ => None,
    };
    Ok(id)
}
