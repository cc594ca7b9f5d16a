// Input sanitization helpers

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove tag-shaped `<...>` substrings and trim surrounding whitespace.
///
/// Best-effort stripping, not an HTML parser: an unterminated `<` with no
/// closing `>` is left in place. Output that ends up in HTML must still go
/// through [`escape_html`].
pub fn strip_tags(input: &str) -> String {
    TAG_RE.replace_all(input, "").trim().to_string()
}

/// Entity-encode markup characters so `input` renders literally when
/// embedded in HTML output.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
