use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{DecodeError, EncodeError};

/// JSON key names for the persisted tab document. The wire format is fixed:
/// exactly these five keys, no versioning field, no optional keys.
pub const KEY_ID: &str = "id";
pub const KEY_TITLE: &str = "title";
pub const KEY_CURRENT_URL: &str = "current_url";
pub const KEY_CAN_GO_BACK: &str = "can_go_back";
pub const KEY_CAN_GO_FORWARD: &str = "can_go_forward";

/// Capability interface for anything that looks like a tab.
///
/// Lets a [`TabRecord`] be built from any producer exposing these five
/// accessors (a live webview tab, another record, a test double) without
/// coupling the persistence layer to a concrete tab type.
pub trait TabState {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn current_url(&self) -> &str;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
}

/// A browser tab's persisted state.
///
/// Plain mutable data with no owned resources. `id` doubles as the storage
/// key ([`TabRecord::key`]); the remaining fields carry no cross-field
/// constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRecord {
    pub id: String,
    pub title: String,
    pub current_url: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl TabRecord {
    /// Creates an empty record, fields to be populated later.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies a record out of any tab-like value.
    pub fn from_state(state: &dyn TabState) -> Self {
        Self {
            id: state.id().to_string(),
            title: state.title().to_string(),
            current_url: state.current_url().to_string(),
            can_go_back: state.can_go_back(),
            can_go_forward: state.can_go_forward(),
        }
    }

    /// Returns the storage key under which an external store addresses
    /// this record. Always exactly `id`, including when `id` is empty.
    pub fn key(&self) -> &str {
        &self.id
    }

    /// Encodes the record as a JSON document with the five fixed keys.
    ///
    /// # Errors
    /// Returns [`EncodeError`] if JSON serialization fails. With the fixed
    /// field set this is practically unreachable, but it is surfaced to the
    /// caller rather than swallowed into an empty string.
    pub fn encode(&self) -> Result<String, EncodeError> {
        serde_json::to_string(self).map_err(|e| EncodeError::Serialization(e.to_string()))
    }

    /// Decodes a JSON document, overwriting all five fields.
    ///
    /// All five keys must be present with the expected types. The overwrite
    /// is atomic: the document is parsed into a temporary first, so on any
    /// failure the record's prior fields are left untouched.
    ///
    /// # Errors
    /// Returns [`DecodeError`] when the document is not a JSON object, a
    /// required key is missing, or a value has the wrong type.
    pub fn decode(&mut self, document: &str) -> Result<(), DecodeError> {
        let parsed = Self::parse_document(document)?;
        *self = parsed;
        Ok(())
    }

    /// Parses a document into a fresh record without touching `self`.
    fn parse_document(document: &str) -> Result<Self, DecodeError> {
        let value: Value =
            serde_json::from_str(document).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| DecodeError::Malformed("document is not a JSON object".to_string()))?;

        Ok(Self {
            id: require_string(object, KEY_ID)?,
            title: require_string(object, KEY_TITLE)?,
            current_url: require_string(object, KEY_CURRENT_URL)?,
            can_go_back: require_bool(object, KEY_CAN_GO_BACK)?,
            can_go_forward: require_bool(object, KEY_CAN_GO_FORWARD)?,
        })
    }
}

impl TabState for TabRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }

    fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }
}

fn require_string(
    object: &serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<String, DecodeError> {
    match object.get(key) {
        None => Err(DecodeError::MissingKey(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::TypeMismatch {
            key,
            expected: "string",
        }),
    }
}

fn require_bool(
    object: &serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<bool, DecodeError> {
    match object.get(key) {
        None => Err(DecodeError::MissingKey(key)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(DecodeError::TypeMismatch {
            key,
            expected: "boolean",
        }),
    }
}
