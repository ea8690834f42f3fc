//! Collins-style entries: headword metadata, senses with examples, and the
//! entry-wide synonym line.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::dom::Markup;
use crate::links;
use crate::types::{ExplainResponse, Meaning, MeaningExample, MeaningExplain, Synonyms, WordInfo};

static STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"star(\d)").unwrap());

const COLLINS: &str = ".collinsToggle";
const HEADING: &str = ".collinsToggle h4";
const ITEMS: &str = ".collinsToggle li";

const MAJOR_TRANS: &str = ".collinsMajorTrans";
const TYPE_TAG: &str = ".additional";
const GLOSS: &str = "p";
/// Inline indicators (type tag, Chinese hint) inside a gloss paragraph.
const GLOSS_INDICATORS: &str = "span";
const EXAMPLES: &str = ".exampleLists .examples p";

const SYNONYM_TYPE: &str = ".wt-container > .additional";
const SYNONYM_LINKS: &str = ".wt-container > a";

pub fn extract<M: Markup>(root: &M, origin: &str) -> ExplainResponse {
    let mut word_info = root
        .first(HEADING)
        .map(|h| heading_info(&h))
        .unwrap_or_default();
    word_info.pronunciation = super::pronunciation(root);

    let meanings = root
        .select(ITEMS)
        .iter()
        .filter_map(|item| meaning(item, origin))
        .collect();

    let synonyms = root
        .select(COLLINS)
        .iter()
        .fold(Synonyms::default(), |mut acc, block| {
            collect_synonyms(block, &mut acc);
            acc
        });

    ExplainResponse {
        word_info,
        synonyms,
        meanings,
    }
}

fn heading_info<M: Markup>(heading: &M) -> WordInfo {
    WordInfo {
        word: heading.select_text(".title"),
        pronunciation: String::new(),
        frequence: heading
            .first(".star")
            .and_then(|star| star.attr("class"))
            .and_then(|class| frequency(&class)),
        rank: heading.select_text(".rank"),
        additional_pattern: heading.select_text(".pattern"),
    }
}

/// Star rating from a class list such as `"star star3"`.
pub fn frequency(class: &str) -> Option<u8> {
    let caps = STAR_RE.captures(class)?;
    caps[1].parse::<u8>().ok().filter(|n| (1..=5).contains(n))
}

fn meaning<M: Markup>(item: &M, origin: &str) -> Option<Meaning> {
    let Some(trans) = item.first(MAJOR_TRANS) else {
        trace!("skipping collins row without a major translation");
        return None;
    };

    Some(Meaning {
        explain: meaning_explain(&trans, origin),
        example: MeaningExample {
            eng: item.nth_text(EXAMPLES, 0),
            ch: item.nth_text(EXAMPLES, 1),
        },
    })
}

fn meaning_explain<M: Markup>(trans: &M, origin: &str) -> MeaningExplain {
    let tag = trans.first(TYPE_TAG);
    let eng_explain = trans
        .first(GLOSS)
        .map(|p| p.inner_html_without(GLOSS_INDICATORS))
        .map(|html| links::absolutize(html.trim(), origin))
        .unwrap_or_default();

    MeaningExplain {
        kind: tag.as_ref().map(|t| t.text()).unwrap_or_default(),
        type_desc: tag.as_ref().and_then(|t| t.attr("title")).unwrap_or_default(),
        eng_explain,
    }
}

fn collect_synonyms<M: Markup>(block: &M, acc: &mut Synonyms) {
    acc.kind.push_str(&block.select_text(SYNONYM_TYPE));
    for anchor in block.select(SYNONYM_LINKS) {
        acc.push(anchor.text(), anchor.attr("href").unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::links::DICT_ORIGIN;
    use crate::parser::extract::fixtures;

    #[test]
    fn star_classes() {
        assert_eq!(frequency("star star3"), Some(3));
        assert_eq!(frequency("star5"), Some(5));
        assert_eq!(frequency("star"), None);
        assert_eq!(frequency("star star0"), None);
        assert_eq!(frequency("star star9"), None);
    }

    #[test]
    fn favorable_entry() {
        let doc = fixtures::load("favorable");
        let r = extract(&doc.root(), DICT_ORIGIN);

        assert_eq!(r.word_info.word, "favorable");
        assert_eq!(r.word_info.pronunciation, "[ˈfeɪvərəbl]");
        assert_eq!(r.word_info.frequence, Some(4));
        assert_eq!(r.word_info.rank, "CET4 TEM4");
        assert_eq!(r.word_info.additional_pattern, "");

        assert_eq!(r.synonyms.kind, "[美国英语]");
        assert_eq!(r.synonyms.words, vec!["favourable"]);
        assert!(r.synonyms.hrefs[0].ends_with("/w/favourable/?keyfrom=dict.collins"));
    }

    #[test]
    fn cross_reference_rows_are_skipped() {
        let doc = fixtures::load("favorable");
        let r = extract(&doc.root(), DICT_ORIGIN);
        assert_eq!(r.meanings.len(), 2);
        assert!(r.meanings.iter().all(|m| !m.explain.eng_explain.contains("favorably")));
    }

    #[test]
    fn meaning_fields() {
        let doc = fixtures::load("favorable");
        let r = extract(&doc.root(), DICT_ORIGIN);

        let first = &r.meanings[0];
        assert_eq!(first.explain.kind, "ADJ-GRADED");
        assert_eq!(first.explain.type_desc, "形容词");
        assert!(first.explain.eng_explain.starts_with("If your opinion"));
        assert!(first.explain.eng_explain.contains("<b>favorable</b>"));
        assert!(first
            .explain
            .eng_explain
            .contains(r#"href="https://dict.youdao.com/w/approve/#keyfrom=dict.collins""#));
        assert!(!first.explain.eng_explain.contains("ADJ-GRADED"));
        assert!(!first.explain.eng_explain.contains("赞同的"));
        assert_eq!(
            first.example.eng,
            "His recently launched book has received favorable reviews."
        );
        assert_eq!(first.example.ch, "他新近出版的书得到了好评。");

        // only one example paragraph
        let second = &r.meanings[1];
        assert_eq!(second.example.eng, "The weather was favorable for the harvest.");
        assert_eq!(second.example.ch, "");
    }

    #[test]
    fn dimensional_synonyms_without_type() {
        let doc = fixtures::load("dimensional");
        let r = extract(&doc.root(), DICT_ORIGIN);

        assert_eq!(r.synonyms.kind, "");
        assert_eq!(r.synonyms.words, vec!["two-dimensional", "three-dimensional"]);
        assert_eq!(
            r.synonyms.hrefs,
            vec![
                "/w/two-dimensional/?keyfrom=dict.collins",
                "/w/three-dimensional/?keyfrom=dict.collins",
            ]
        );
        assert_eq!(r.word_info.additional_pattern, "(comparative more dimensional)");
        assert_eq!(r.word_info.frequence, None);
    }

    #[test]
    fn no_star_no_synonyms() {
        let doc = fixtures::load("page");
        let r = extract(&doc.root(), DICT_ORIGIN);

        assert_eq!(r.word_info.word, "page");
        assert_eq!(r.word_info.frequence, None);
        assert_eq!(r.word_info.rank, "");
        assert_eq!(r.synonyms, Synonyms::default());
        assert_eq!(r.meanings.len(), 1);
        assert_eq!(r.meanings[0].explain.kind, "N-COUNT");
    }

    #[test]
    fn bare_collins_block_degrades_to_empty() {
        let doc = Document::parse(r#"<div class="collinsToggle"><ul><li>see also</li></ul></div>"#);
        let r = extract(&doc.root(), DICT_ORIGIN);
        assert_eq!(r, ExplainResponse::default());
    }

    #[test]
    fn major_translation_without_paragraph() {
        let doc = Document::parse(
            r#"<div class="collinsToggle"><ul><li>
                 <div class="collinsMajorTrans"><span class="additional">N</span></div>
               </li></ul></div>"#,
        );
        let r = extract(&doc.root(), DICT_ORIGIN);
        assert_eq!(r.meanings.len(), 1);
        assert_eq!(r.meanings[0].explain.kind, "N");
        assert_eq!(r.meanings[0].explain.type_desc, "");
        assert_eq!(r.meanings[0].explain.eng_explain, "");
        assert_eq!(r.meanings[0].example, MeaningExample::default());
    }
}
