pub mod classify;
pub mod extract;

use tracing::debug;

use crate::dom::{Document, Markup};
use crate::links::DICT_ORIGIN;
use crate::types::{ResponseType, WordResponse};

/// Page parser. Holds only the origin used to absolutize gloss links, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Parser {
    origin: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self::with_origin(DICT_ORIGIN)
    }
}

impl Parser {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Load, classify, then run the one extractor that matches.
    pub fn parse(&self, html: &str) -> WordResponse {
        let doc = Document::parse(html);
        self.parse_markup(&doc.root())
    }

    /// Same as [`Parser::parse`] over an already-loaded tree.
    pub fn parse_markup<M: Markup>(&self, root: &M) -> WordResponse {
        let kind = classify::classify(root);
        debug!(%kind, "classified page");

        match kind {
            ResponseType::Explain => {
                WordResponse::Explain(extract::explain::extract(root, &self.origin))
            }
            ResponseType::Choices => WordResponse::Choices(extract::choices::extract(root)),
            ResponseType::NonCollinsExplain => {
                WordResponse::NonCollinsExplain(extract::non_collins::extract(root))
            }
            ResponseType::MachineTranslation => {
                WordResponse::MachineTranslation(extract::machine::extract(root))
            }
            ResponseType::Error => WordResponse::Error,
        }
    }
}

/// Parse a result page with the default dictionary origin.
pub fn parse(html: &str) -> WordResponse {
    Parser::default().parse(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str) -> WordResponse {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
        parse(&html)
    }

    #[test]
    fn fixtures_land_on_their_shape() {
        let cases = [
            ("page", ResponseType::Explain),
            ("favorable", ResponseType::Explain),
            ("dimensional", ResponseType::Explain),
            ("choices", ResponseType::Choices),
            ("newest", ResponseType::NonCollinsExplain),
            ("deficits", ResponseType::NonCollinsExplain),
            ("sentence", ResponseType::MachineTranslation),
            ("noresponse", ResponseType::Error),
        ];
        for (name, expected) in cases {
            assert_eq!(page(name).response_type(), expected, "fixture {}", name);
        }
    }

    #[test]
    fn explain_page_has_all_word_info() {
        let WordResponse::Explain(r) = page("page") else {
            panic!("expected explain");
        };
        assert_eq!(r.word_info.word, "page");
        assert_eq!(r.word_info.frequence, None);
        assert!(!r.meanings.is_empty());
    }

    #[test]
    fn custom_origin_reaches_glosses() {
        let html = std::fs::read_to_string("tests/fixtures/favorable.html").unwrap();
        let WordResponse::Explain(r) = Parser::with_origin("http://localhost:8080").parse(&html)
        else {
            panic!("expected explain");
        };
        assert!(r.meanings[0]
            .explain
            .eng_explain
            .contains(r#"href="http://localhost:8080/w/approve/"#));
    }

    #[test]
    fn garbage_is_an_error_value() {
        for input in ["", "   ", "<<<>>>", "\u{0}\u{1}binary", "{\"json\": true}", "<div class="] {
            assert_eq!(parse(input), WordResponse::Error);
        }
    }

    #[test]
    fn deterministic() {
        let html = std::fs::read_to_string("tests/fixtures/favorable.html").unwrap();
        assert_eq!(parse(&html), parse(&html));
    }
}
