//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User record stored in the `users` collection.
///
/// The username is intended to be unique, but that is enforced only by a
/// lookup before insert, not by the store itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document ID, generated by Firestore on insert
    #[serde(
        rename = "_id",
        alias = "_firestore_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display name chosen at signup
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_with_underscore_id() {
        let user = User {
            id: Some("abc123".to_string()),
            username: "fcc_test".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], "abc123");
        assert_eq!(json["username"], "fcc_test");
    }

    #[test]
    fn test_user_omits_missing_id() {
        let user = User {
            id: None,
            username: "fcc_test".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_user_reads_firestore_document_id() {
        let user: User =
            serde_json::from_str(r#"{"_firestore_id":"doc-1","username":"fcc_test"}"#).unwrap();
        assert_eq!(user.id.as_deref(), Some("doc-1"));
    }
}
