//! Error types for acolyte-catalog
//!
//! Settings persistence, catalog construction and link opening each get
//! their own type. None is fatal to the page: the session layer recovers from
//! every `SettingsError` and `LinkError`, and the built-in catalogs never
//! produce a `CatalogError`.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while touching the backing file
    #[error("I/O error: {0}")]
    Io(String),

    /// Error while encoding a value or the settings document
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored data could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err.to_string())
    }
}

impl SettingsError {
    /// Create a new Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a new Deserialization error
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }
}

/// Errors raised when a catalog violates its invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A catalog must contain at least one demo
    #[error("catalog has no demos")]
    Empty,

    /// Two records share an id
    #[error("duplicate demo id: {0}")]
    DuplicateId(String),

    /// A record has no category links
    #[error("demo {0} has no categories")]
    NoCategories(String),

    /// A record lists the same category tag twice
    #[error("demo {demo} lists category {tag} more than once")]
    DuplicateCategory { demo: String, tag: String },
}

/// Errors raised when an outbound demo link cannot be opened
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to open {url}: {reason}")]
pub struct LinkError {
    pub url: String,
    pub reason: String,
}

impl LinkError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
