use thiserror::Error;
use whip_core::{CanonicalRecord, Extraction};

/// Completion events posted back to the interaction loop. Every spawned
/// worker produces exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LookupDone(Result<CanonicalRecord, LookupError>),
    ExtractDone(Result<Extraction, ExtractError>),
}

/// Failure during the canonical lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),
    #[error("lookup timed out")]
    Timeout,
    #[error("lookup service returned status {0}")]
    HttpStatus(u16),
    #[error("undecodable lookup response: {0}")]
    Decode(String),
}

/// Failure during the secondary page fetch. A page that loads fine but
/// carries no matching link is [`Extraction::NotFound`], not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("invalid canonical url: {0}")]
    InvalidUrl(String),
    #[error("refusing to fetch outside allowed domains: {0}")]
    DomainNotAllowed(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("extraction fetch timed out")]
    Timeout,
    #[error("page fetch returned status {0}")]
    HttpStatus(u16),
}
