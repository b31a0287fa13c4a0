use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// The `id` is assigned by the repository on creation and never changes.
/// The `description` is fixed at creation; only `done` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoEntry {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Done")]
    pub done: bool,
}

impl TodoEntry {
    /// Creates an entry that has not been completed yet.
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
        }
    }

    /// Sets the completion flag (useful for testing).
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// Body returned by every failing endpoint: `{"Err": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "Err")]
    pub err: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            err: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_not_done() {
        let entry = TodoEntry::new(1, "buy milk");
        assert_eq!(entry.id, 1);
        assert_eq!(entry.description, "buy milk");
        assert!(!entry.done);
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = TodoEntry::new(1, "buy milk").with_done(true);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Id": 1, "Description": "buy milk", "Done": true})
        );
    }

    #[test]
    fn test_error_envelope_wire_shape() {
        let envelope = ErrorEnvelope::new("Query failed: disk I/O error");
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"Err":"Query failed: disk I/O error"}"#);
    }
}
