//! Parsing and validation of Semantic Versioning 2.0.0 version strings.
//!
//! On top of the strict grammar a few lenient forms are accepted:
//! - a leading `v` or `V` (e.g. "v1.2.3" parses as "1.2.3")
//! - minor and patch are optional and default to 0 (e.g. "1-rc.1" parses as "1.0.0-rc.1")
//! - leading zeros in major, minor and patch are kept as written (e.g. "001.2.3")
//!
//! Major, minor and patch are stored as digit strings so there is no upper bound on their size.

mod semantic;
mod shorthand;

pub use semantic::Semver;
use strum::{Display, EnumDiscriminants};
use thiserror::Error;

#[remain::sorted]
#[derive(Clone, Debug, EnumDiscriminants, Error, PartialEq)]
#[strum_discriminants(name(ErrorKind))]
#[strum_discriminants(derive(Display, Hash))]
pub enum VersioningError {
    #[error("Version text is empty")]
    EmptyInput,

    #[error("Invalid build metadata identifier \"{0}\"")]
    InvalidBuildMetadataIdentifier(String),

    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid numeric identifier \"{0}\"")]
    InvalidNumericIdentifier(String),

    #[error("Invalid pre-release identifier \"{0}\"")]
    InvalidPrereleaseIdentifier(String),

    #[error("Expected major[.minor[.patch]] but found \"{0}\"")]
    MalformedCore(String),

    #[error("Version must not be negative: {0}")]
    NegativeValue(String),
}

impl VersioningError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }
}

pub type VersioningResult<T> = Result<T, VersioningError>;

/// Parses `text` into a [`Semver`].
pub fn parse(text: &str) -> VersioningResult<Semver> {
    Semver::parse(text)
}
