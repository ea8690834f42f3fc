use crate::dom::Markup;
use crate::types::{NonCollinsExplain, NonCollinsExplainsResponse};

const LINES: &str = "#phrsListTab .trans-container li";
/// Separates the part-of-speech tag from the gloss, e.g. `n. 赤字`.
const TYPE_SEPARATOR: &str = ". ";

pub fn extract<M: Markup>(root: &M) -> NonCollinsExplainsResponse {
    NonCollinsExplainsResponse {
        word_info: super::title_info(root),
        explains: root
            .select(LINES)
            .iter()
            .map(|line| split_line(&line.text()))
            .collect(),
    }
}

/// Split at the first separator only. A line without one is all gloss.
pub fn split_line(line: &str) -> NonCollinsExplain {
    match line.split_once(TYPE_SEPARATOR) {
        Some((kind, explain)) => NonCollinsExplain {
            kind: kind.to_string(),
            explain: explain.to_string(),
        },
        None => NonCollinsExplain {
            kind: String::new(),
            explain: line.to_string(),
        },
    }
}
