//! Organization service: tenant listing, creation, and membership.
//!
//! DESIGN
//! ======
//! Listing is scoped by membership, so a user only ever sees organizations
//! they belong to. Creation inserts the organization and the creator's
//! `owner` membership in one transaction; without the membership row the new
//! organization would be invisible to the user who just created it.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::access::{self, AccessError, OrgRole};
use super::fields;

#[derive(Debug, thiserror::Error)]
pub enum OrganizationError {
    #[error("organization name must not be blank")]
    InvalidName,
    #[error("organization not found: {0}")]
    NotFound(Uuid),
    #[error("insufficient role in organization: {0}")]
    Forbidden(Uuid),
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("no user with email: {0}")]
    UserNotFound(String),
    #[error("user is already a member")]
    AlreadyMember,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AccessError> for OrganizationError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotFound(id) => Self::NotFound(id),
            AccessError::Forbidden(id) => Self::Forbidden(id),
            AccessError::Database(e) => Self::Database(e),
        }
    }
}

/// Row returned from organization queries.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct OrganizationRow {
    pub id: Uuid,
    pub name: String,
    pub settings: serde_json::Value,
    pub created_at: String,
    pub updated_at: String,
}

/// Membership row joined with the member's user profile.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MemberRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub created_at: String,
}

/// List organizations the user belongs to, ordered by name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_organizations(pool: &PgPool, user_id: Uuid) -> Result<Vec<OrganizationRow>, OrganizationError> {
    let rows = sqlx::query_as::<_, OrganizationRow>(
        r#"SELECT o.id, o.name, o.settings,
                  to_char(o.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  to_char(o.updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
           FROM organizations o
           JOIN organization_members m ON m.organization_id = o.id
           WHERE m.user_id = $1
           ORDER BY o.name ASC, o.id ASC"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Create an organization and make the creator its owner.
///
/// # Errors
///
/// Returns `InvalidName` for a blank name, or a database error.
pub async fn create_organization(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
) -> Result<OrganizationRow, OrganizationError> {
    let name = fields::normalize_name(name).ok_or(OrganizationError::InvalidName)?;

    let mut tx = pool.begin().await?;
    let row = sqlx::query_as::<_, OrganizationRow>(
        r#"INSERT INTO organizations (name)
           VALUES ($1)
           RETURNING id, name, settings,
                     to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                     to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at"#,
    )
    .bind(&name)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO organization_members (organization_id, user_id, role) VALUES ($1, $2, $3)")
        .bind(row.id)
        .bind(user_id)
        .bind(OrgRole::Owner.as_str())
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(org_id = %row.id, %user_id, "organization created");
    Ok(row)
}

/// List members of an organization the caller belongs to.
///
/// # Errors
///
/// Returns `NotFound` if the caller is not a member, or a database error.
pub async fn list_members(pool: &PgPool, org_id: Uuid, user_id: Uuid) -> Result<Vec<MemberRow>, OrganizationError> {
    access::ensure_member(pool, org_id, user_id).await?;

    let rows = sqlx::query_as::<_, MemberRow>(
        r#"SELECT m.id, m.organization_id, m.user_id, u.email, u.full_name, m.role,
                  to_char(m.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
           FROM organization_members m
           JOIN users u ON u.id = m.user_id
           WHERE m.organization_id = $1
           ORDER BY u.email ASC"#,
    )
    .bind(org_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Role to grant on `add_member`; absent means `member`, `owner` is never
/// grantable.
///
/// # Errors
///
/// Returns `InvalidRole` for an unknown or non-grantable role.
pub fn parse_grant_role(role: Option<&str>) -> Result<OrgRole, OrganizationError> {
    match role {
        None => Ok(OrgRole::Member),
        Some(raw) => OrgRole::from_str(raw)
            .filter(|r| r.is_grantable())
            .ok_or_else(|| OrganizationError::InvalidRole(raw.to_owned())),
    }
}

/// Add an existing user (by email) to an organization.
///
/// # Errors
///
/// The access check runs first, so non-members get `NotFound` whatever the
/// payload. Returns `NotFound`/`Forbidden` from the access policy, `InvalidRole` for an
/// unknown or non-grantable role, `UserNotFound` if no user has the email,
/// `AlreadyMember` on duplicate membership, or a database error.
pub async fn add_member(
    pool: &PgPool,
    org_id: Uuid,
    actor_id: Uuid,
    email: &str,
    role: Option<&str>,
) -> Result<MemberRow, OrganizationError> {
    access::ensure_member_manager(pool, org_id, actor_id).await?;
    let role = parse_grant_role(role)?;

    let email = super::auth::normalize_email(email).ok_or_else(|| OrganizationError::UserNotFound(email.to_owned()))?;
    let target: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    let target = target.ok_or_else(|| OrganizationError::UserNotFound(email.clone()))?;

    let row = sqlx::query_as::<_, MemberRow>(
        r#"WITH inserted AS (
               INSERT INTO organization_members (organization_id, user_id, role)
               VALUES ($1, $2, $3)
               RETURNING id, organization_id, user_id, role, created_at
           )
           SELECT i.id, i.organization_id, i.user_id, u.email, u.full_name, i.role,
                  to_char(i.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
           FROM inserted i
           JOIN users u ON u.id = i.user_id"#,
    )
    .bind(org_id)
    .bind(target)
    .bind(role.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
            OrganizationError::AlreadyMember
        } else {
            OrganizationError::Database(e)
        }
    })?;

    tracing::info!(%org_id, %actor_id, member_id = %target, role = role.as_str(), "organization member added");
    Ok(row)
}

#[cfg(test)]
#[path = "organization_test.rs"]
mod tests;
