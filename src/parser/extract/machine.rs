use crate::dom::Markup;
use crate::escape::unescape_word;
use crate::types::MachineTranslationResponse;

const PARAGRAPHS: &str = "#ydTrans .trans-container p";
/// Paragraph 0 echoes the source text.
const TRANSLATION: usize = 1;

pub fn extract<M: Markup>(root: &M) -> MachineTranslationResponse {
    MachineTranslationResponse {
        translation: unescape_word(&root.nth_text(PARAGRAPHS, TRANSLATION)),
    }
}
