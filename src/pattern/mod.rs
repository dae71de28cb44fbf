mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

// Conforming format: YYYY-MM-DD-<id>-<title>.md
// Examples: "2024-01-01-005-hello.md", "2024-01-01-12-my-long-title.md"
static CONFORMING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})-([0-9]+)-(.*)\.md$").unwrap());

/// Markdown extension every processed entry must carry
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Check whether a filename already follows the `YYYY-MM-DD-ID-title.md` layout
pub fn is_conforming(name: &str) -> bool {
    CONFORMING_REGEX.is_match(name)
}

/// Check whether a filename carries the literal `.md` suffix
pub fn is_markdown(name: &str) -> bool {
    name.ends_with(MARKDOWN_SUFFIX)
}

/// Parse a conforming filename into its parts
pub fn parse_conforming(name: &str) -> Result<ConformingName, PatternError> {
    let captures = CONFORMING_REGEX
        .captures(name)
        .ok_or_else(|| PatternError::NotConforming(name.to_string()))?;

    let date = captures[1].to_string();
    let raw_id = &captures[2];
    let id: u64 = raw_id
        .parse()
        .map_err(|_| PatternError::IdOutOfRange(name.to_string()))?;
    let title = captures[3].to_string();

    Ok(ConformingName {
        date,
        id,
        title,
        original_name: name.to_string(),
    })
}
