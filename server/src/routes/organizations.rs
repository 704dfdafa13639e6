//! Organization and membership routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::organization::{self, MemberRow, OrganizationError, OrganizationRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateOrganizationBody {
    pub name: String,
}

#[derive(Deserialize)]
pub struct AddMemberBody {
    pub email: String,
    pub role: Option<String>,
}

pub(crate) fn organization_error_to_status(err: OrganizationError) -> StatusCode {
    match err {
        OrganizationError::InvalidName | OrganizationError::InvalidRole(_) => StatusCode::BAD_REQUEST,
        OrganizationError::NotFound(_) | OrganizationError::UserNotFound(_) => StatusCode::NOT_FOUND,
        OrganizationError::Forbidden(_) => StatusCode::FORBIDDEN,
        OrganizationError::AlreadyMember => StatusCode::CONFLICT,
        OrganizationError::Database(e) => {
            tracing::error!(error = %e, "organization query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/organizations` — organizations visible to the caller, ordered by name.
pub async fn list_organizations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<OrganizationRow>>, StatusCode> {
    let rows = organization::list_organizations(&state.pool, auth.user.id)
        .await
        .map_err(organization_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/organizations` — create an organization owned by the caller.
pub async fn create_organization(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateOrganizationBody>,
) -> Result<(StatusCode, Json<OrganizationRow>), StatusCode> {
    let row = organization::create_organization(&state.pool, auth.user.id, &body.name)
        .await
        .map_err(organization_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/organizations/:id/members` — list members with their roles.
pub async fn list_members(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(org_id): Path<Uuid>,
) -> Result<Json<Vec<MemberRow>>, StatusCode> {
    let rows = organization::list_members(&state.pool, org_id, auth.user.id)
        .await
        .map_err(organization_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/organizations/:id/members` — add an existing user by email.
pub async fn add_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(org_id): Path<Uuid>,
    Json(body): Json<AddMemberBody>,
) -> Result<(StatusCode, Json<MemberRow>), StatusCode> {
    let row = organization::add_member(&state.pool, org_id, auth.user.id, &body.email, body.role.as_deref())
        .await
        .map_err(organization_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
#[path = "organizations_test.rs"]
mod tests;
