use crate::dom::Markup;
use crate::types::{Choice, ChoiceResponse};

const GROUPS: &str = "#phrsListTab .wordGroup";
const LABEL: &str = "span";
const HEADWORD_CLASS: &str = "contentTitle";
const HEADWORDS: &str = ".contentTitle";
const SEARCH_LINK: &str = ".search-js";

pub fn extract<M: Markup>(root: &M) -> ChoiceResponse {
    ChoiceResponse {
        choices: root.select(GROUPS).iter().map(choice).collect(),
    }
}

fn choice<M: Markup>(group: &M) -> Choice {
    // A group that opens straight into a headword has no part-of-speech label.
    let word_type = group
        .first(LABEL)
        .filter(|span| !span.has_class(HEADWORD_CLASS))
        .map(|span| span.text())
        .unwrap_or_default();

    let words = group
        .select(HEADWORDS)
        .iter()
        .map(|w| w.select_text(SEARCH_LINK))
        .collect();

    Choice { word_type, words }
}
