use std::fmt;

// === DecodeError ===

/// Errors raised while decoding a tab document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The document is not well-formed JSON, or not a JSON object.
    Malformed(String),
    /// A required key is absent from the document.
    MissingKey(&'static str),
    /// A key is present but its value has the wrong JSON type.
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed(msg) => write!(f, "Malformed tab document: {}", msg),
            DecodeError::MissingKey(key) => write!(f, "Missing key in tab document: {}", key),
            DecodeError::TypeMismatch { key, expected } => {
                write!(f, "Type mismatch for key {}: expected {}", key, expected)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

// === EncodeError ===

/// Errors raised while encoding a tab record to a document.
///
/// Practically unreachable with the fixed field set, but encoding faults
/// are surfaced to the caller rather than collapsed into an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// JSON serialization failed.
    Serialization(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Serialization(msg) => {
                write!(f, "Failed to encode tab document: {}", msg)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

// === TabStoreError ===

/// Errors raised by the tab data store.
#[derive(Debug)]
pub enum TabStoreError {
    /// The record's key (its `id`) is empty and cannot address a row.
    EmptyKey,
    /// Database operation failed.
    DatabaseError(String),
    /// Encoding a record for storage failed.
    EncodeError(EncodeError),
    /// Decoding a stored document failed.
    DecodeError(DecodeError),
}

impl fmt::Display for TabStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabStoreError::EmptyKey => write!(f, "Tab record has an empty key"),
            TabStoreError::DatabaseError(msg) => write!(f, "Tab store database error: {}", msg),
            TabStoreError::EncodeError(e) => write!(f, "Tab store encode error: {}", e),
            TabStoreError::DecodeError(e) => write!(f, "Tab store decode error: {}", e),
        }
    }
}

impl std::error::Error for TabStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TabStoreError::EncodeError(e) => Some(e),
            TabStoreError::DecodeError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EncodeError> for TabStoreError {
    fn from(e: EncodeError) -> Self {
        TabStoreError::EncodeError(e)
    }
}

impl From<DecodeError> for TabStoreError {
    fn from(e: DecodeError) -> Self {
        TabStoreError::DecodeError(e)
    }
}
