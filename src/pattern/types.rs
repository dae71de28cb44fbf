use thiserror::Error;

/// A filename already in `YYYY-MM-DD-ID-title.md` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformingName {
    pub date: String,
    pub id: u64,
    pub title: String,
    pub original_name: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Filename does not match YYYY-MM-DD-ID-title.md: {0}")]
    NotConforming(String),

    #[error("Embedded ID does not fit a 64-bit counter: {0}")]
    IdOutOfRange(String),
}
