// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise model for storage and API.

use serde::{Deserialize, Serialize};

/// Exercise record stored in the `exercises` collection.
///
/// Every field besides the generated ID is optional. `user_id` is stored
/// exactly as supplied without checking that the user exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Document ID, generated by Firestore on insert
    #[serde(
        rename = "_id",
        alias = "_firestore_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Owning user's document ID (unchecked reference)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes, no range validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Date stored exactly as supplied, no normalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Exercise-log entry returned by the log endpoint.
///
/// Omits the document ID and the owning user reference from the stored
/// record.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_exercise() -> Exercise {
        Exercise {
            id: Some("ex-1".to_string()),
            user_id: Some("user-1".to_string()),
            description: Some("run".to_string()),
            duration: Some(30.0),
            date: Some("2023-01-01".to_string()),
        }
    }

    #[test]
    fn test_exercise_wire_field_names() {
        let json = serde_json::to_value(sample_exercise()).unwrap();

        assert_eq!(json["_id"], "ex-1");
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["description"], "run");
        assert_eq!(json["duration"], 30.0);
        assert_eq!(json["date"], "2023-01-01");
    }

    #[test]
    fn test_exercise_omits_absent_fields() {
        let exercise = Exercise {
            id: None,
            user_id: Some("user-1".to_string()),
            description: None,
            duration: None,
            date: None,
        };

        let json = serde_json::to_value(exercise).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert!(json.get("description").is_none());
        assert!(json.get("duration").is_none());
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_log_entry_excludes_id_and_user_reference() {
        let entry = LogEntry::from(sample_exercise());
        let json = serde_json::to_value(entry).unwrap();

        assert!(json.get("_id").is_none());
        assert!(json.get("userId").is_none());
        assert_eq!(json["description"], "run");
        assert_eq!(json["duration"], 30.0);
        assert_eq!(json["date"], "2023-01-01");
    }
}
