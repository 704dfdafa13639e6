//! Project and document routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::document::{self, DocumentError, DocumentRow, NewDocument};
use crate::services::project::{self, ProjectError, ProjectRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateDocumentBody {
    pub name: String,
    pub content: Option<String>,
    pub encrypted_content: Option<String>,
}

pub(crate) fn project_error_to_status(err: ProjectError) -> StatusCode {
    match err {
        ProjectError::InvalidName => StatusCode::BAD_REQUEST,
        ProjectError::NotFound(_) => StatusCode::NOT_FOUND,
        ProjectError::Database(e) => {
            tracing::error!(error = %e, "project query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn document_error_to_status(err: DocumentError) -> StatusCode {
    match err {
        DocumentError::InvalidName => StatusCode::BAD_REQUEST,
        DocumentError::NotFound(_) => StatusCode::NOT_FOUND,
        DocumentError::Database(e) => {
            tracing::error!(error = %e, "document query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/organizations/:id/projects` — projects of one organization, ordered by name.
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(org_id): Path<Uuid>,
) -> Result<Json<Vec<ProjectRow>>, StatusCode> {
    let rows = project::list_projects(&state.pool, org_id, auth.user.id)
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/organizations/:id/projects` — create a project in the organization.
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(org_id): Path<Uuid>,
    Json(body): Json<CreateProjectBody>,
) -> Result<(StatusCode, Json<ProjectRow>), StatusCode> {
    let row = project::create_project(&state.pool, org_id, auth.user.id, &body.name, body.description.as_deref())
        .await
        .map_err(project_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/projects/:id/documents` — documents of one project, ordered by name.
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<DocumentRow>>, StatusCode> {
    let rows = document::list_documents(&state.pool, project_id, auth.user.id)
        .await
        .map_err(document_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/projects/:id/documents` — create a document authored by the caller.
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(body): Json<CreateDocumentBody>,
) -> Result<(StatusCode, Json<DocumentRow>), StatusCode> {
    let doc = NewDocument {
        name: &body.name,
        content: body.content.as_deref(),
        encrypted_content: body.encrypted_content.as_deref(),
    };
    let row = document::create_document(&state.pool, project_id, auth.user.id, doc)
        .await
        .map_err(document_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
