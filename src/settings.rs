use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;
use crate::escape::escape_word;
use crate::links::DICT_ORIGIN;
use crate::parser::Parser;

pub const SEARCH_PREFIX: &str = "https://dict.youdao.com/w/eng/";

/// Where the dictionary lives. Read from `YOUDAO_ORIGIN` and
/// `YOUDAO_SEARCH_PREFIX`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub origin: String,
    pub search_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: DICT_ORIGIN.to_string(),
            search_prefix: SEARCH_PREFIX.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_source(Environment::with_prefix("YOUDAO"))
    }

    fn from_source(env: Environment) -> Result<Self> {
        let defaults = Settings::default();
        let settings = Config::builder()
            .set_default("origin", defaults.origin)?
            .set_default("search_prefix", defaults.search_prefix)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn parser(&self) -> Parser {
        Parser::with_origin(self.origin.as_str())
    }

    /// Lookup URL for a raw query word. The word is escaped here; callers
    /// must not escape it first.
    pub fn lookup_url(&self, word: &str) -> String {
        format!("{}{}", self.search_prefix, escape_word(word))
    }
}
