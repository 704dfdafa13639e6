//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool and the session settings the auth routes use
//! when issuing cookies. All durable state lives in Postgres; nothing about
//! organizations or projects is cached in memory.

use sqlx::PgPool;

use crate::config::SessionSettings;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `PgPool` is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub session: SessionSettings,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, session: SessionSettings) -> Self {
        Self { pool, session }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
