//! Slugs derived from titles, like "the-long-blondes".
//!
//! These are unrelated to the id-based slugs in [`crate::services::slug`]:
//! two records can share a title, so a text slug has to be checked against
//! what is already stored and given a numeric suffix when taken.

use thiserror::Error;

pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
const MAX_SLUG_LENGTH: usize = 200;

#[derive(Debug, Error)]
pub enum TextSlugError {
    #[error("cannot make a slug from text with no letters or digits")]
    Empty,
    #[error("no free slug for '{base}' after {attempts} attempts")]
    Exhausted { base: String, attempts: usize },
    #[error(transparent)]
    Lookup(#[from] anyhow::Error),
}

pub fn slugify(text: &str) -> String {
    ::slug::slugify(text)
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// `base`, then `base-2`, `base-3`, and so on.
pub fn slug_candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(base.to_string()).chain((2..).map(move |n| format!("{}-{}", base, n)))
}

/// The first candidate for `base` that `exists` reports as free.
pub fn find_unique<F>(base: &str, max_attempts: usize, mut exists: F) -> Result<String, TextSlugError>
where
    F: FnMut(&str) -> anyhow::Result<bool>,
{
    if base.is_empty() {
        return Err(TextSlugError::Empty);
    }

    for candidate in slug_candidates(base).take(max_attempts) {
        if !exists(&candidate)? {
            return Ok(candidate);
        }
    }

    Err(TextSlugError::Exhausted {
        base: base.to_string(),
        attempts: max_attempts,
    })
}
