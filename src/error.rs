use thiserror::Error;

/// Errors that can occur during classification.
///
/// A payload failing to match a grammar is not an error; unmatched payloads
/// fall through to a plain-text result. Only configuration problems surface
/// here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("calendar rendering requires an event time formatter in the configuration")]
    MissingEventTimeFormatter,
}
