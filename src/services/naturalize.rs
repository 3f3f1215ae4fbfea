//! Natural sort keys: strings that order the way a person would file them.
//!
//! "The Long Blondes" files under L as "long blondes, the", "David Foster
//! Wallace" under W as "wallace, david foster", and numbers are zero-padded
//! so "Vol. 2" sorts before "Vol. 11".

use crate::models::SortAs;
use crate::services::text::{truncate_string, TruncateOptions};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("Invalid digits regex pattern"));

const NUMBER_WIDTH: usize = 8;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    /// Leading words moved to the end of titles. Matched case-insensitively.
    pub articles: Vec<String>,
    /// Articles glued to the following word, like "l'" in "L'Impératrice".
    pub apostrophe_articles: Vec<String>,
    /// Capitalised name fragments kept with the surname. Matched exactly.
    pub particles: Vec<String>,
    /// Trailing name qualifiers. Matched case-insensitively.
    pub suffixes: Vec<String>,
    /// Keys longer than this are cut at a word boundary.
    pub max_length: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        let strings =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            articles: strings(&[
                "a", "an", "the", "un", "une", "le", "la", "les", "ein", "eine", "der", "die",
                "das", "una", "el", "los", "las",
            ]),
            apostrophe_articles: strings(&["l'", "l’"]),
            particles: strings(&["Le", "La", "Von", "Van", "Du", "De"]),
            suffixes: strings(&["Jr", "Jr.", "Sr", "Sr.", "I", "II", "III", "IV", "V"]),
            max_length: 255,
        }
    }
}

impl SortConfig {
    fn is_article(&self, word: &str) -> bool {
        self.articles
            .iter()
            .chain(self.apostrophe_articles.iter())
            .any(|a| a.to_lowercase() == word)
    }

    fn is_particle(&self, word: &str) -> bool {
        self.particles.iter().any(|p| p == word)
    }

    fn is_suffix(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.suffixes.iter().any(|s| s.to_lowercase() == word)
    }
}

/// Make the sort key for `text`, treating it as a name or a title depending
/// on `sort_as`.
pub fn naturalize(text: &str, sort_as: SortAs, config: &SortConfig) -> String {
    let text = text.trim();

    let key = match sort_as {
        // Particle detection depends on case, so lowercase afterwards.
        SortAs::Person => naturalize_person(text, config).to_lowercase(),
        SortAs::Thing => naturalize_thing(&text.to_lowercase(), config),
    };

    truncate_string(
        &key,
        &TruncateOptions {
            chars: config.max_length,
            at_word_boundary: true,
            ..Default::default()
        },
    )
}

/// Move a leading article to the end: "the long blondes" becomes
/// "long blondes, the". Expects lowercase input.
pub fn naturalize_thing(text: &str, config: &SortConfig) -> String {
    let mut parts: Vec<&str> = text.split(' ').collect();

    if let Some(first) = parts.first().copied() {
        for article in &config.apostrophe_articles {
            let article = article.to_lowercase();
            if let Some(rest) = first.strip_prefix(article.as_str()) {
                if !rest.is_empty() {
                    let split = first.len() - rest.len();
                    parts[0] = &first[..split];
                    parts.insert(1, rest);
                    break;
                }
            }
        }
    }

    let parentheses = take_parentheses(&mut parts);

    let mut key = match parts.as_slice() {
        [first, second, ..] if config.is_article(first) && first != second => {
            format!("{}, {}", parts[1..].join(" "), first)
        }
        _ => parts.join(" "),
    };

    if let Some(parentheses) = parentheses {
        key = format!("{} {}", key, parentheses);
    }

    naturalize_numbers(&key)
}

/// Put the surname first: "David Foster Wallace" becomes
/// "Wallace, David Foster". Case is preserved.
pub fn naturalize_person(text: &str, config: &SortConfig) -> String {
    let mut parts: Vec<&str> = text.split(' ').collect();

    let parentheses = take_parentheses(&mut parts);

    let has_suffix = parts.len() > 1 && parts.last().is_some_and(|p| config.is_suffix(p));
    let suffix = if has_suffix { parts.pop() } else { None };

    let mut key = if parts.len() > 1 {
        let mut surname_start = parts.len() - 1;
        if config.is_particle(parts[surname_start - 1]) {
            surname_start -= 1;
        }
        if surname_start == 0 {
            parts.join(" ")
        } else {
            format!(
                "{}, {}",
                parts[surname_start..].join(" "),
                parts[..surname_start].join(" ")
            )
        }
    } else {
        parts.join(" ")
    };

    if let Some(suffix) = suffix {
        key = format!("{} {}", key, suffix);
    }
    if let Some(parentheses) = parentheses {
        key = format!("{} {}", key, parentheses);
    }

    naturalize_numbers(&key)
}

/// Zero-pad every run of digits to eight places: "2" becomes "00000002".
/// Longer numbers keep all their significant digits.
pub fn naturalize_numbers(text: &str) -> String {
    DIGITS_REGEX
        .replace_all(text, |caps: &Captures| {
            let digits = caps[0].trim_start_matches('0');
            format!("{:0>width$}", digits, width = NUMBER_WIDTH)
        })
        .into_owned()
}

/// A trailing "(1)"-style disambiguator stays at the very end of the key.
fn take_parentheses<'a>(parts: &mut Vec<&'a str>) -> Option<&'a str> {
    if parts.len() > 1 && parts.last().is_some_and(|p| p.starts_with('(')) {
        parts.pop()
    } else {
        None
    }
}
