use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex pattern"));

/// Options for [`truncate_string`].
#[derive(Debug, Clone)]
pub struct TruncateOptions<'a> {
    pub strip_html: bool,
    /// Maximum number of characters to return.
    pub chars: usize,
    /// Appended when the text had to be shortened.
    pub truncate: &'a str,
    /// Only cut at a space, which usually gives something shorter than `chars`.
    pub at_word_boundary: bool,
}

impl Default for TruncateOptions<'_> {
    fn default() -> Self {
        Self {
            strip_html: true,
            chars: 255,
            truncate: "…",
            at_word_boundary: false,
        }
    }
}

/// Remove anything that looks like an HTML tag, keeping the text between them.
pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Shorten `text` to fit in `options.chars` characters.
///
/// Line breaks and runs of whitespace are always collapsed to single spaces,
/// whether or not the text ends up being shortened.
pub fn truncate_string(text: &str, options: &TruncateOptions<'_>) -> String {
    let text = if options.strip_html {
        strip_tags(text)
    } else {
        text.to_string()
    };
    let text = text.replace('\n', " ").replace('\r', "");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.chars().count() <= options.chars {
        return text;
    }

    if options.at_word_boundary {
        let head: String = text.chars().take(options.chars).collect();
        let head = match head.rsplit_once(' ') {
            Some((before, _)) => before.to_string(),
            None => head,
        };
        format!("{}{}", head, options.truncate)
    } else {
        let keep = options
            .chars
            .saturating_sub(options.truncate.chars().count());
        let head: String = text.chars().take(keep).collect();
        format!("{}{}", head, options.truncate)
    }
}
