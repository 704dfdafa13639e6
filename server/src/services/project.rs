//! Project service: projects scoped to one organization.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::access::{self, AccessError};
use super::fields;

pub const DEFAULT_PROJECT_STATUS: &str = "active";

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project name must not be blank")]
    InvalidName,
    #[error("organization not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AccessError> for ProjectError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotFound(id) | AccessError::Forbidden(id) => Self::NotFound(id),
            AccessError::Database(e) => Self::Database(e),
        }
    }
}

/// Row returned from project queries.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// List projects of an organization, ordered by name.
///
/// # Errors
///
/// Returns `NotFound` if the caller is not a member, or a database error.
pub async fn list_projects(pool: &PgPool, org_id: Uuid, user_id: Uuid) -> Result<Vec<ProjectRow>, ProjectError> {
    access::ensure_member(pool, org_id, user_id).await?;

    let rows = sqlx::query_as::<_, ProjectRow>(
        r#"SELECT id, organization_id, name, description, status,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
           FROM projects
           WHERE organization_id = $1
           ORDER BY name ASC, id ASC"#,
    )
    .bind(org_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Create a project inside an organization the caller belongs to.
///
/// # Errors
///
/// Returns `InvalidName` for a blank name, `NotFound` if the caller is not a
/// member, or a database error.
pub async fn create_project(
    pool: &PgPool,
    org_id: Uuid,
    user_id: Uuid,
    name: &str,
    description: Option<&str>,
) -> Result<ProjectRow, ProjectError> {
    let name = fields::normalize_name(name).ok_or(ProjectError::InvalidName)?;
    let description = fields::optional_trimmed(description);
    access::ensure_member(pool, org_id, user_id).await?;

    let row = sqlx::query_as::<_, ProjectRow>(
        r#"INSERT INTO projects (organization_id, name, description, status)
           VALUES ($1, $2, $3, $4)
           RETURNING id, organization_id, name, description, status,
                     to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                     to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at"#,
    )
    .bind(org_id)
    .bind(&name)
    .bind(&description)
    .bind(DEFAULT_PROJECT_STATUS)
    .fetch_one(pool)
    .await?;

    tracing::info!(%org_id, project_id = %row.id, %user_id, "project created");
    Ok(row)
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
