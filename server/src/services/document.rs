//! Document service: named content items inside a project.
//!
//! `encrypted_content` is stored exactly as received. Encryption and key
//! handling happen on the client, if at all.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::access::{self, AccessError};
use super::fields;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document name must not be blank")]
    InvalidName,
    #[error("project not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AccessError> for DocumentError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotFound(id) | AccessError::Forbidden(id) => Self::NotFound(id),
            AccessError::Database(e) => Self::Database(e),
        }
    }
}

/// Row returned from document queries.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub content: Option<String>,
    pub encrypted_content: Option<String>,
    pub created_by: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when inserting a document.
#[derive(Debug, Clone, Default)]
pub struct NewDocument<'a> {
    pub name: &'a str,
    pub content: Option<&'a str>,
    pub encrypted_content: Option<&'a str>,
}

/// List documents of a project, ordered by name.
///
/// # Errors
///
/// Returns `NotFound` if the project is not visible to the caller, or a
/// database error.
pub async fn list_documents(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<Vec<DocumentRow>, DocumentError> {
    access::ensure_project_access(pool, project_id, user_id).await?;

    let rows = sqlx::query_as::<_, DocumentRow>(
        r#"SELECT id, project_id, name, content, encrypted_content, created_by,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
           FROM documents
           WHERE project_id = $1
           ORDER BY name ASC, id ASC"#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Create a document. The creator is always the authenticated caller.
///
/// # Errors
///
/// Returns `InvalidName` for a blank name, `NotFound` if the project is not
/// visible to the caller, or a database error.
pub async fn create_document(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    doc: NewDocument<'_>,
) -> Result<DocumentRow, DocumentError> {
    let name = fields::normalize_name(doc.name).ok_or(DocumentError::InvalidName)?;
    let content = fields::optional_text(doc.content);
    let encrypted_content = fields::optional_text(doc.encrypted_content);
    access::ensure_project_access(pool, project_id, user_id).await?;

    let row = sqlx::query_as::<_, DocumentRow>(
        r#"INSERT INTO documents (project_id, name, content, encrypted_content, created_by)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING id, project_id, name, content, encrypted_content, created_by,
                     to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                     to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at"#,
    )
    .bind(project_id)
    .bind(&name)
    .bind(&content)
    .bind(&encrypted_content)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    tracing::info!(%project_id, document_id = %row.id, %user_id, "document created");
    Ok(row)
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
