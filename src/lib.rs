// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise Tracker API
//!
//! This crate provides a small REST backend for tracking users and the
//! exercises they log against their account, backed by Firestore.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
