use tracing::trace;

use crate::dom::Markup;
use crate::types::ResponseType;

/// Marker selectors in priority order. The first one present on the page
/// decides its shape.
pub const MARKERS: &[(&str, ResponseType)] = &[
    (".collinsToggle", ResponseType::Explain),
    ("#phrsListTab .wordGroup", ResponseType::Choices),
    ("#phrsListTab .trans-container", ResponseType::NonCollinsExplain),
    ("#ydTrans .trans-container", ResponseType::MachineTranslation),
];

pub fn classify<M: Markup>(root: &M) -> ResponseType {
    MARKERS
        .iter()
        .find(|(css, _)| root.exists(css))
        .map(|(css, kind)| {
            trace!(marker = css, "page marker matched");
            *kind
        })
        .unwrap_or(ResponseType::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn kind(html: &str) -> ResponseType {
        classify(&Document::parse(html).root())
    }

    #[test]
    fn each_marker_alone() {
        assert_eq!(kind(r#"<div class="collinsToggle"></div>"#), ResponseType::Explain);
        assert_eq!(
            kind(r#"<div id="phrsListTab"><div class="wordGroup"></div></div>"#),
            ResponseType::Choices
        );
        assert_eq!(
            kind(r#"<div id="phrsListTab"><div class="trans-container"></div></div>"#),
            ResponseType::NonCollinsExplain
        );
        assert_eq!(
            kind(r#"<div id="ydTrans"><div class="trans-container"></div></div>"#),
            ResponseType::MachineTranslation
        );
    }

    #[test]
    fn earlier_marker_wins() {
        let html = r#"
            <div id="phrsListTab">
              <div class="trans-container"><p class="wordGroup">x</p></div>
            </div>
            <div class="collinsToggle"></div>
            <div id="ydTrans"><div class="trans-container"></div></div>"#;
        assert_eq!(kind(html), ResponseType::Explain);

        let html = r#"
            <div id="phrsListTab">
              <div class="trans-container"><p class="wordGroup">x</p></div>
            </div>"#;
        assert_eq!(kind(html), ResponseType::Choices);
    }

    #[test]
    fn container_outside_its_panel_does_not_count() {
        assert_eq!(kind(r#"<div class="trans-container"></div>"#), ResponseType::Error);
        assert_eq!(kind(r#"<div class="wordGroup"></div>"#), ResponseType::Error);
    }

    #[test]
    fn unknown_pages_are_errors() {
        assert_eq!(kind(""), ResponseType::Error);
        assert_eq!(kind("not html at all {{ <<"), ResponseType::Error);
        assert_eq!(kind("<html><body><h1>404</h1></body></html>"), ResponseType::Error);
    }
}
