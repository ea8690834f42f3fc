use serde::{Deserialize, Serialize};

/// Which page shape a document represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Explain,
    Choices,
    Error,
    NonCollinsExplain,
    MachineTranslation,
}

impl ResponseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Explain => "explain",
            ResponseType::Choices => "choices",
            ResponseType::Error => "error",
            ResponseType::NonCollinsExplain => "non_collins_explain",
            ResponseType::MachineTranslation => "machine_translation",
        }
    }
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    pub word: String,
    pub pronunciation: String,
    /// Usage-frequency stars, 1 to 5.
    pub frequence: Option<u8>,
    pub rank: String,
    pub additional_pattern: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningExplain {
    #[serde(rename = "type")]
    pub kind: String,
    pub type_desc: String,
    /// Markup fragment with links already absolutized.
    pub eng_explain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningExample {
    pub eng: String,
    pub ch: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub explain: MeaningExplain,
    pub example: MeaningExample,
}

/// Cross-references for the whole entry. `words` and `hrefs` are parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonyms {
    #[serde(rename = "type")]
    pub kind: String,
    pub words: Vec<String>,
    pub hrefs: Vec<String>,
}

impl Synonyms {
    pub fn push(&mut self, word: String, href: String) {
        self.words.push(word);
        self.hrefs.push(href);
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.hrefs.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub word_info: WordInfo,
    pub synonyms: Synonyms,
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub word_type: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonCollinsExplain {
    #[serde(rename = "type")]
    pub kind: String,
    pub explain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonCollinsExplainsResponse {
    pub word_info: WordInfo,
    pub explains: Vec<NonCollinsExplain>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineTranslationResponse {
    pub translation: String,
}

/// Everything a parse can produce. Serialized as
/// `{"type": "<tag>", "response": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "response", rename_all = "snake_case")]
pub enum WordResponse {
    Explain(ExplainResponse),
    Choices(ChoiceResponse),
    Error,
    NonCollinsExplain(NonCollinsExplainsResponse),
    MachineTranslation(MachineTranslationResponse),
}

impl WordResponse {
    pub fn response_type(&self) -> ResponseType {
        match self {
            WordResponse::Explain(_) => ResponseType::Explain,
            WordResponse::Choices(_) => ResponseType::Choices,
            WordResponse::Error => ResponseType::Error,
            WordResponse::NonCollinsExplain(_) => ResponseType::NonCollinsExplain,
            WordResponse::MachineTranslation(_) => ResponseType::MachineTranslation,
        }
    }

    /// Headword info, for the two shapes that carry one.
    pub fn word_info(&self) -> Option<&WordInfo> {
        match self {
            WordResponse::Explain(r) => Some(&r.word_info),
            WordResponse::NonCollinsExplain(r) => Some(&r.word_info),
            WordResponse::Choices(_)
            | WordResponse::Error
            | WordResponse::MachineTranslation(_) => None,
        }
    }
}
