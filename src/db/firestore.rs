// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (account records)
//! - Exercises (logged workouts)
//!
//! Document IDs are generated by Firestore on insert and surfaced on the
//! models through the `_firestore_id` field alias.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Exercise, User};

/// Filter for exercise queries: owning user plus an optional inclusive
/// date range. Range bounds are compared as stored, without parsing.
#[derive(Debug, Clone)]
pub struct ExerciseFilter {
    pub user_id: String,
    pub date_range: Option<(String, String)>,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // A dummy token satisfies the SDK without real credentials.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by document ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find users with an exact username match.
    pub async fn find_users_by_username(&self, username: &str) -> Result<Vec<User>, AppError> {
        let username = username.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.field("username").eq(username.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List every user record.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a user with a generated document ID.
    ///
    /// Returns the stored record, ID populated.
    pub async fn create_user(&self, user: &User) -> Result<User, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::USERS)
            .generate_document_id()
            .object(user)
            .execute::<User>()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Create an exercise with a generated document ID.
    ///
    /// Returns the stored record, ID populated.
    pub async fn create_exercise(&self, exercise: &Exercise) -> Result<Exercise, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::EXERCISES)
            .generate_document_id()
            .object(exercise)
            .execute::<Exercise>()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find exercises matching the filter.
    ///
    /// A `limit` of zero means unlimited.
    pub async fn find_exercises(
        &self,
        filter: &ExerciseFilter,
        limit: u32,
    ) -> Result<Vec<Exercise>, AppError> {
        let query = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES);

        let user_id = filter.user_id.clone();
        let query = if let Some((from, to)) = filter.date_range.clone() {
            query.filter(move |q| {
                q.for_all([
                    q.field("userId").eq(user_id.clone()),
                    q.field("date").greater_than_or_equal(from.clone()),
                    q.field("date").less_than_or_equal(to.clone()),
                ])
            })
        } else {
            query.filter(move |q| q.field("userId").eq(user_id.clone()))
        };

        let query = if limit > 0 { query.limit(limit) } else { query };

        query
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
