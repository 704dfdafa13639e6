use super::*;

fn org(id: &str, name: &str) -> Organization {
    Organization {
        id: id.to_owned(),
        name: name.to_owned(),
        settings: serde_json::json!({}),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn project(id: &str, org_id: &str, name: &str, description: Option<&str>) -> Project {
    Project {
        id: id.to_owned(),
        organization_id: org_id.to_owned(),
        name: name.to_owned(),
        description: description.map(str::to_owned),
        status: "active".to_owned(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn first_fetch_selects_first_organization() {
    let mut state = DashboardState::default();
    let selected = state.apply_organizations(vec![org("a", "Acme"), org("b", "Beta")]);
    assert_eq!(selected.as_deref(), Some("a"));
    assert_eq!(state.selected_org.as_deref(), Some("a"));
}

#[test]
fn refetch_keeps_existing_selection() {
    let mut state = DashboardState::default();
    state.apply_organizations(vec![org("a", "Acme"), org("b", "Beta")]);
    state.select_organization("b");
    let selected = state.apply_organizations(vec![org("a", "Acme"), org("b", "Beta"), org("c", "Core")]);
    assert_eq!(selected, None);
    assert_eq!(state.selected_org.as_deref(), Some("b"));
    assert_eq!(state.organizations.len(), 3);
}

#[test]
fn empty_fetch_selects_nothing() {
    let mut state = DashboardState::default();
    assert_eq!(state.apply_organizations(Vec::new()), None);
    assert_eq!(state.selected_org, None);
}

#[test]
fn selecting_same_organization_is_noop() {
    let mut state = DashboardState::default();
    state.apply_organizations(vec![org("a", "Acme")]);
    state.apply_projects("a", vec![project("p1", "a", "Site", None)]);
    assert!(!state.select_organization("a"));
    assert_eq!(state.projects.len(), 1);
}

#[test]
fn selecting_a_then_b_shows_only_b_projects() {
    let mut state = DashboardState::default();
    state.apply_organizations(vec![org("a", "Acme"), org("b", "Beta")]);
    assert!(state.select_organization("b"));
    assert!(state.projects.is_empty());

    // A's late response arrives after B was selected.
    assert!(!state.apply_projects("a", vec![project("p1", "a", "A-Site", None)]));
    assert!(state.apply_projects("b", vec![project("p2", "b", "B-Site", None)]));
    assert_eq!(state.projects.len(), 1);
    assert!(state.projects.iter().all(|p| p.organization_id == "b"));
}

#[test]
fn project_target_is_none_without_selection() {
    let state = DashboardState::default();
    assert_eq!(state.project_target(), None);
}

#[test]
fn acme_site_scenario() {
    let mut state = DashboardState::default();
    state.apply_organizations(Vec::new());
    state.open_modal(Modal::NewOrganization);

    // Creation succeeded; the page closes the modal and re-fetches.
    state.close_modal();
    state.apply_organizations(vec![org("acme", "Acme")]);
    assert_eq!(state.selected_organization().map(|o| o.name.as_str()), Some("Acme"));

    let target = state.project_target();
    assert_eq!(target.as_deref(), Some("acme"));
    state.apply_projects("acme", vec![project("site", "acme", "Site", Some("v1"))]);
    assert_eq!(state.projects[0].name, "Site");
    assert_eq!(state.projects[0].description.as_deref(), Some("v1"));
}

#[test]
fn only_one_modal_is_open() {
    let mut state = DashboardState::default();
    state.open_modal(Modal::NewOrganization);
    state.open_modal(Modal::NewProject);
    assert!(state.is_open(&Modal::NewProject));
    assert!(!state.is_open(&Modal::NewOrganization));
    state.close_modal();
    assert_eq!(state.modal, None);
}

#[test]
fn document_modal_carries_project_id() {
    let mut state = DashboardState::default();
    assert_eq!(state.document_target(), None);
    state.open_document_modal("p-9");
    assert_eq!(state.document_target(), Some("p-9"));
}
