use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const DICT_ORIGIN: &str = "https://dict.youdao.com";

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href="([^"]*)""#).unwrap());
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// Rewrite relative `href`s in a markup fragment so they point at `origin`.
/// Anchor text and already-absolute links are left alone.
pub fn absolutize(fragment: &str, origin: &str) -> String {
    HREF_RE
        .replace_all(fragment, |caps: &Captures| {
            let href = &caps[1];
            if is_absolute(href) {
                caps[0].to_string()
            } else {
                format!(r#"href="{}""#, join(origin, href))
            }
        })
        .into_owned()
}

fn is_absolute(href: &str) -> bool {
    href.is_empty() || href.starts_with("//") || href.starts_with('#') || SCHEME_RE.is_match(href)
}

fn join(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
