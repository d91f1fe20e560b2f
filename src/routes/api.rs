// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise API route handlers.
//!
//! Each handler catches store failures itself: validation and store errors
//! come back as 200-status JSON `{"error": ...}` bodies, except the log
//! endpoint which reports unexpected failures as a 500.

use crate::db::firestore::ExerciseFilter;
use crate::error::AppError;
use crate::extract::JsonOrForm;
use crate::models::{Exercise, LogEntry, User};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Exercise tracker routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercise/new-user", post(create_new_user))
        .route("/api/exercise/users", get(get_all_users))
        .route("/api/exercise/add", post(add_new_exercise))
        .route("/api/exercise/log", get(get_user_exercise_log))
}

// ─── Response helpers ────────────────────────────────────────

/// Plain `{"error": "<message>"}` body.
fn error_message(message: &str) -> Json<serde_json::Value> {
    Json(json!({ "error": message }))
}

/// `{"error": {...}}` body embedding the store error as an object rather
/// than a message string. Kept for wire compatibility.
fn store_error(err: &AppError) -> Json<serde_json::Value> {
    Json(json!({
        "error": {
            "name": "DatabaseError",
            "message": err.to_string(),
        }
    }))
}

/// 500 response used by the log endpoint for any unexpected failure.
fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_message("Internal server error"),
    )
        .into_response()
}

// ─── Create User ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct NewUserRequest {
    #[serde(default)]
    username: Option<String>,
}

/// Create a new user after checking the username is not already taken.
///
/// The lookup and the insert are separate store calls; two concurrent
/// requests with the same fresh username can both succeed.
async fn create_new_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(body): JsonOrForm<NewUserRequest>,
) -> Response {
    let username = match body.username.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return error_message("Username is not passed").into_response(),
    };

    let existing = match state.db.find_users_by_username(username).await {
        Ok(users) => users,
        Err(e) => {
            tracing::error!(error = %e, "Username lookup failed");
            return error_message("Internal server error").into_response();
        }
    };
    if !existing.is_empty() {
        return error_message("Username already taken").into_response();
    }

    let user = User {
        id: None,
        username: username.to_string(),
    };
    match state.db.create_user(&user).await {
        Ok(created) => {
            tracing::info!(username = %created.username, "User created");
            Json(json!({ "username": created.username, "_id": created.id })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "User creation failed");
            error_message("Internal server error").into_response()
        }
    }
}

// ─── List Users ──────────────────────────────────────────────

/// Return every user record, internal fields included.
async fn get_all_users(State(state): State<Arc<AppState>>) -> Response {
    match state.db.list_users().await {
        Ok(users) => Json(users).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "User listing failed");
            store_error(&e).into_response()
        }
    }
}

// ─── Add Exercise ────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddExerciseRequest {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    date: Option<String>,
}

/// Record an exercise and return the stored record.
///
/// No field is validated and `userId` is not checked against the users
/// collection.
async fn add_new_exercise(
    State(state): State<Arc<AppState>>,
    JsonOrForm(body): JsonOrForm<AddExerciseRequest>,
) -> Response {
    let exercise = Exercise {
        id: None,
        user_id: body.user_id,
        description: body.description,
        duration: body.duration,
        date: body.date,
    };

    match state.db.create_exercise(&exercise).await {
        Ok(created) => {
            tracing::debug!(user_id = ?created.user_id, "Exercise recorded");
            Json(created).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Exercise creation failed");
            store_error(&e).into_response()
        }
    }
}

// ─── Exercise Log ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogQuery {
    user_id: Option<String>,
    from: Option<String>,
    to: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogResponse {
    user_id: String,
    username: String,
    count: usize,
    log: Vec<LogEntry>,
}

/// Parse the `limit` query value. Anything that is not a positive integer
/// means "no limit".
fn parse_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse::<u32>().ok()).unwrap_or(0)
}

/// Query a user's exercise log with optional date-range and limit filters.
async fn get_user_exercise_log(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogQuery>,
) -> Response {
    let Some(user_id) = params.user_id else {
        return error_message("Required parameter is missing").into_response();
    };

    // The date range applies only when both bounds are present. Bounds are
    // compared exactly as supplied, using the store's native ordering.
    let date_range = match (params.from, params.to) {
        (Some(from), Some(to)) => Some((from, to)),
        _ => None,
    };
    let filter = ExerciseFilter {
        user_id: user_id.clone(),
        date_range,
    };
    let limit = parse_limit(params.limit.as_deref());

    let user = match state.db.get_user(&user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            // An unknown user surfaces as a plain 500, not a 404.
            tracing::error!(user_id = %user_id, "User not found for exercise log");
            return internal_error();
        }
        Err(e) => {
            tracing::error!(error = %e, "User lookup failed");
            return internal_error();
        }
    };

    let exercises = match state.db.find_exercises(&filter, limit).await {
        Ok(exercises) => exercises,
        Err(e) => {
            tracing::error!(error = %e, "Exercise query failed");
            return internal_error();
        }
    };

    let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();

    Json(LogResponse {
        user_id: user.id.unwrap_or(user_id),
        username: user.username,
        count: log.len(),
        log,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_positive() {
        assert_eq!(parse_limit(Some("2")), 2);
        assert_eq!(parse_limit(Some("100")), 100);
    }

    #[test]
    fn test_parse_limit_sentinel() {
        assert_eq!(parse_limit(None), 0);
        assert_eq!(parse_limit(Some("")), 0);
        assert_eq!(parse_limit(Some("abc")), 0);
        assert_eq!(parse_limit(Some("-3")), 0);
    }

    #[test]
    fn test_log_response_wire_shape() {
        let response = LogResponse {
            user_id: "user-1".to_string(),
            username: "fcc_test".to_string(),
            count: 1,
            log: vec![LogEntry {
                description: Some("run".to_string()),
                duration: Some(30.0),
                date: Some("2023-01-01".to_string()),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["username"], "fcc_test");
        assert_eq!(json["count"], 1);
        assert_eq!(json["log"][0]["description"], "run");
        assert!(json["log"][0].get("userId").is_none());
    }
}
