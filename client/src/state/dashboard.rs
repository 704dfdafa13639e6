//! Dashboard state: organizations, the selected organization, its projects,
//! and which creation modal is open.
//!
//! DESIGN
//! ======
//! Pure data transitions live here so the page component only wires network
//! calls to them. Every transition reports whether a follow-up fetch is due,
//! which keeps the selection/fetch rules testable without a browser.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Organization, Project};

/// The creation modal currently shown. At most one is open at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    NewOrganization,
    NewProject,
    /// Document creation targets a specific project.
    NewDocument { project_id: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub organizations: Vec<Organization>,
    pub selected_org: Option<String>,
    /// Projects of `selected_org` only; cleared whenever the selection moves.
    pub projects: Vec<Project>,
    pub modal: Option<Modal>,
}

impl DashboardState {
    /// Replace the organization list with a fresh fetch result.
    ///
    /// When nothing is selected yet, the first organization becomes selected
    /// and its id is returned so the caller can load its projects.
    pub fn apply_organizations(&mut self, organizations: Vec<Organization>) -> Option<String> {
        self.organizations = organizations;
        if self.selected_org.is_some() {
            return None;
        }
        let first = self.organizations.first()?.id.clone();
        self.selected_org = Some(first.clone());
        self.projects.clear();
        Some(first)
    }

    /// Select an organization. Returns `true` when the selection changed and
    /// projects must be re-fetched; re-selecting the current one is a no-op.
    pub fn select_organization(&mut self, org_id: &str) -> bool {
        if self.selected_org.as_deref() == Some(org_id) {
            return false;
        }
        self.selected_org = Some(org_id.to_owned());
        self.projects.clear();
        true
    }

    /// Store a project fetch result. Responses for an organization that is no
    /// longer selected are dropped and `false` is returned.
    pub fn apply_projects(&mut self, org_id: &str, projects: Vec<Project>) -> bool {
        if self.selected_org.as_deref() != Some(org_id) {
            return false;
        }
        self.projects = projects;
        true
    }

    /// Organization a new project would be created in. `None` means project
    /// creation must not be attempted.
    pub fn project_target(&self) -> Option<String> {
        self.selected_org.clone()
    }

    pub fn selected_organization(&self) -> Option<&Organization> {
        let id = self.selected_org.as_deref()?;
        self.organizations.iter().find(|o| o.id == id)
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn open_document_modal(&mut self, project_id: &str) {
        self.modal = Some(Modal::NewDocument { project_id: project_id.to_owned() });
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn is_open(&self, modal: &Modal) -> bool {
        self.modal.as_ref() == Some(modal)
    }

    /// Project targeted by the open document modal, if any.
    pub fn document_target(&self) -> Option<&str> {
        match &self.modal {
            Some(Modal::NewDocument { project_id }) => Some(project_id),
            _ => None,
        }
    }
}
