use super::*;

#[test]
fn org_role_from_str_is_case_insensitive() {
    assert_eq!(OrgRole::from_str("Owner"), Some(OrgRole::Owner));
    assert_eq!(OrgRole::from_str(" ADMIN "), Some(OrgRole::Admin));
    assert_eq!(OrgRole::from_str("member"), Some(OrgRole::Member));
}

#[test]
fn org_role_from_str_rejects_unknown() {
    assert_eq!(OrgRole::from_str("superuser"), None);
    assert_eq!(OrgRole::from_str(""), None);
}

#[test]
fn org_role_as_str_round_trips() {
    for role in [OrgRole::Owner, OrgRole::Admin, OrgRole::Member] {
        assert_eq!(OrgRole::from_str(role.as_str()), Some(role));
    }
}

#[test]
fn org_role_from_db_defaults_to_member() {
    assert_eq!(OrgRole::from_db("viewer"), OrgRole::Member);
    assert_eq!(OrgRole::from_db("owner"), OrgRole::Owner);
}

#[test]
fn only_owner_and_admin_manage_members() {
    assert!(OrgRole::Owner.can_manage_members());
    assert!(OrgRole::Admin.can_manage_members());
    assert!(!OrgRole::Member.can_manage_members());
}

#[test]
fn owner_role_is_not_grantable() {
    assert!(!OrgRole::Owner.is_grantable());
    assert!(OrgRole::Admin.is_grantable());
    assert!(OrgRole::Member.is_grantable());
}
