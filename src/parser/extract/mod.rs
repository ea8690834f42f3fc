pub mod choices;
pub mod explain;
pub mod machine;
pub mod non_collins;

use crate::dom::Markup;
use crate::types::WordInfo;

/// Title block shared by every dictionary shape.
const TITLE: &str = ".wordbook-js";
const KEYWORD: &str = ".wordbook-js .keyword";
/// Both transcriptions; the first is the UK one.
const PHONETIC: &str = ".wordbook-js .pronounce .phonetic";
const PREFERRED_PHONETIC: usize = 1;

pub(crate) fn pronunciation<M: Markup>(root: &M) -> String {
    root.nth_text(PHONETIC, PREFERRED_PHONETIC)
}

/// Headword and pronunciation from the title block. No rating, rank or
/// pattern exists there.
pub(crate) fn title_info<M: Markup>(root: &M) -> WordInfo {
    if !root.exists(TITLE) {
        return WordInfo::default();
    }
    WordInfo {
        word: root.select_text(KEYWORD),
        pronunciation: pronunciation(root),
        ..WordInfo::default()
    }
}
