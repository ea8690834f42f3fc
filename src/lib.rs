//! Classify and extract Youdao dictionary result pages.
//!
//! ```
//! use youdao_page::{parse, WordResponse};
//!
//! assert_eq!(parse("<html></html>"), WordResponse::Error);
//! ```

pub mod dom;
pub mod error;
pub mod escape;
pub mod links;
pub mod parser;
pub mod settings;
pub mod types;

pub use error::{Error, Result};
pub use escape::{escape_word, unescape_word};
pub use parser::{parse, Parser};
pub use settings::Settings;
pub use types::*;

use std::path::Path;

/// Read and parse one page from disk.
pub fn parse_file(parser: &Parser, path: &Path) -> Result<WordResponse> {
    let html = std::fs::read_to_string(path).map_err(|source| Error::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parser.parse(&html))
}
