//! Unified error types for font descriptor parsing and serialization.
//!
//! All descriptor parse failures are caller bugs (a malformed descriptor in
//! config or code), not transient conditions; there are no retry semantics.
use thiserror::Error;

/// Main error type for fontdesc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Descriptor string is empty or blank
    #[error("font descriptor is empty")]
    EmptyDescriptor,

    /// An opening single quote has no matching close
    #[error("missing closing \"'\" in font descriptor")]
    UnterminatedQuote,

    /// Font size token parsed to zero or a negative value
    #[error("font size must be greater than zero, got {0}")]
    InvalidSize(i64),

    /// Descriptor ended after the size token; family name must follow
    #[error("font family must follow size")]
    MissingFamily,

    /// Token before the size is not a known style keyword
    #[error("style keyword \"{0}\" not supported")]
    UnknownStyleKeyword(String),

    /// `#`-prefixed color token is not a valid hex RGB literal
    #[error("invalid color literal \"{0}\"")]
    InvalidColorLiteral(String),

    /// Named color is not in the resolver's table
    #[error("color \"{0}\" not supported")]
    UnknownColorName(String),

    /// Serialization requested on a record violating its invariants
    #[error("invalid font state: {0}")]
    InvalidStyleState(&'static str),

    /// IO error from the structured XML writer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fontdesc operations.
pub type Result<T> = std::result::Result<T, Error>;
