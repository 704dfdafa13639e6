//! Organization roles and the membership policy applied to every table query.
//!
//! DESIGN
//! ======
//! Each read or insert against organization-scoped rows first resolves the
//! caller's membership. Non-members get `NotFound` rather than `Forbidden`
//! so row existence is never disclosed across tenants; `Forbidden` is only
//! returned to members whose role is too low for the operation.

use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("not found: {0}")]
    NotFound(Uuid),
    #[error("insufficient role in organization: {0}")]
    Forbidden(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Role of a user within one organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgRole {
    Owner,
    Admin,
    Member,
}

impl OrgRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Parse a role string from a request body. Case-insensitive.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "owner" => Some(Self::Owner),
            "admin" => Some(Self::Admin),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Interpret a stored role column. Unrecognized values fall back to `Member`.
    #[must_use]
    pub fn from_db(raw: &str) -> Self {
        Self::from_str(raw).unwrap_or(Self::Member)
    }

    /// Owners and admins may add members.
    #[must_use]
    pub fn can_manage_members(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// Roles that may be granted through the members API. Ownership is only
    /// assigned to the creator of an organization.
    #[must_use]
    pub fn is_grantable(self) -> bool {
        !matches!(self, Self::Owner)
    }
}

/// Look up the caller's role in an organization.
pub async fn member_role(pool: &PgPool, org_id: Uuid, user_id: Uuid) -> Result<Option<OrgRole>, sqlx::Error> {
    let role: Option<String> =
        sqlx::query_scalar("SELECT role FROM organization_members WHERE organization_id = $1 AND user_id = $2")
            .bind(org_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(role.as_deref().map(OrgRole::from_db))
}

/// Require membership in an organization, returning the caller's role.
///
/// # Errors
///
/// Returns `AccessError::NotFound` when the caller is not a member (or the
/// organization does not exist), or a database error.
pub async fn ensure_member(pool: &PgPool, org_id: Uuid, user_id: Uuid) -> Result<OrgRole, AccessError> {
    member_role(pool, org_id, user_id)
        .await?
        .ok_or(AccessError::NotFound(org_id))
}

/// Require a role that can manage members.
///
/// # Errors
///
/// Returns `NotFound` for non-members, `Forbidden` for plain members.
pub async fn ensure_member_manager(pool: &PgPool, org_id: Uuid, user_id: Uuid) -> Result<OrgRole, AccessError> {
    let role = ensure_member(pool, org_id, user_id).await?;
    if !role.can_manage_members() {
        return Err(AccessError::Forbidden(org_id));
    }
    Ok(role)
}

/// Require membership in the organization owning a project. Returns the
/// organization ID.
///
/// # Errors
///
/// Returns `AccessError::NotFound` (keyed by project ID) when the project does
/// not exist or the caller is not a member of its organization.
pub async fn ensure_project_access(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<Uuid, AccessError> {
    let org_id: Option<Uuid> = sqlx::query_scalar(
        r"SELECT p.organization_id
          FROM projects p
          JOIN organization_members m ON m.organization_id = p.organization_id
          WHERE p.id = $1 AND m.user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    org_id.ok_or(AccessError::NotFound(project_id))
}

#[cfg(test)]
#[path = "access_test.rs"]
mod tests;
