//! Query-word escaping for the lookup URL path segment.
//!
//! The dictionary's router rejects a literal `/` or `%` in the word position,
//! so callers escape the word before building the URL and the translation
//! extractor undoes it on echoed text.

const SLASH: &str = "/";
const SLASH_TOKEN: &str = "<&>";
const PERCENT: &str = "%";
const PERCENT_TOKEN: &str = "<$>";

pub fn escape_word(word: &str) -> String {
    word.replace(SLASH, SLASH_TOKEN).replace(PERCENT, PERCENT_TOKEN)
}

pub fn unescape_word(text: &str) -> String {
    text.replace(SLASH_TOKEN, SLASH).replace(PERCENT_TOKEN, PERCENT)
}
