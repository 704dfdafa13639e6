//! Dashboard page: organization sidebar, project grid and creation modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads organizations once the
//! session is known, loads projects for the selected organization, and runs
//! the create->refresh->close flow for each modal.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and create failures are logged to the browser console and leave the
//! current lists and the open modal untouched.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::new_document_modal::NewDocumentModal;
use crate::components::new_organization_modal::NewOrganizationModal;
use crate::components::new_project_modal::NewProjectModal;
use crate::components::project_card::ProjectCard;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, Modal};
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/auth` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = RwSignal::new(DashboardState::default());
    install_unauth_redirect(auth, use_navigate());

    let requested_orgs = RwSignal::new(false);
    Effect::new(move || {
        if requested_orgs.get_untracked() || !auth.get().is_authenticated() {
            return;
        }
        requested_orgs.set(true);
        fetch_organizations(dashboard);
    });

    let select = move |org_id: String| {
        let mut changed = false;
        dashboard.update(|s| changed = s.select_organization(&org_id));
        if changed {
            fetch_projects(dashboard, org_id);
        }
    };

    let on_cancel = Callback::new(move |()| dashboard.update(DashboardState::close_modal));
    let on_org_create = Callback::new(move |name: String| create_organization(dashboard, name));
    let on_project_create = Callback::new(move |(name, description): (String, Option<String>)| {
        create_project(dashboard, name, description);
    });
    let on_document_create = Callback::new(move |(name, content): (String, Option<String>)| {
        let Some(project_id) = dashboard.with_untracked(|s| s.document_target().map(str::to_owned)) else {
            return;
        };
        create_document(dashboard, project_id, name, content);
    });
    let on_new_document = Callback::new(move |project_id: String| {
        dashboard.update(|s| s.open_document_modal(&project_id));
    });

    let selected_org_name = Signal::derive(move || {
        dashboard.with(|s| {
            s.selected_organization()
                .map(|o| o.name.clone())
                .unwrap_or_default()
        })
    });
    let document_project_name = Signal::derive(move || {
        dashboard.with(|s| {
            let id = s.document_target().unwrap_or_default();
            s.projects
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.clone())
                .unwrap_or_default()
        })
    });

    let user_label = move || {
        auth.get()
            .user
            .map(|u| u.display_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.set(AuthState::signed_out());
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to sign in..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Dashboard"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{user_label}</span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <div class="dashboard-page__body">
                    <aside class="org-list">
                        <div class="org-list__header">
                            <h2>"Organizations"</h2>
                            <button
                                class="btn org-list__new"
                                on:click=move |_| dashboard.update(|s| s.open_modal(Modal::NewOrganization))
                            >
                                "+ New"
                            </button>
                        </div>
                        <Show
                            when=move || dashboard.with(|s| !s.organizations.is_empty())
                            fallback=|| view! { <p class="org-list__empty">"No organizations yet."</p> }
                        >
                            <ul class="org-list__items">
                                {move || {
                                    dashboard
                                        .with(|s| s.organizations.clone())
                                        .into_iter()
                                        .map(|org| {
                                            let id = org.id.clone();
                                            let active_id = org.id.clone();
                                            view! {
                                                <li>
                                                    <button
                                                        class="org-list__item"
                                                        class:org-list__item--active=move || {
                                                            dashboard.with(|s| s.selected_org.as_deref() == Some(active_id.as_str()))
                                                        }
                                                        on:click=move |_| select(id.clone())
                                                    >
                                                        {org.name}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </aside>

                    <main class="project-pane">
                        <div class="project-pane__header">
                            <h2>{move || selected_org_name.get()}</h2>
                            <button
                                class="btn btn--primary project-pane__new"
                                disabled=move || dashboard.with(|s| s.selected_org.is_none())
                                on:click=move |_| dashboard.update(|s| s.open_modal(Modal::NewProject))
                            >
                                "+ New Project"
                            </button>
                        </div>
                        <div class="project-pane__cards">
                            {move || {
                                dashboard
                                    .with(|s| s.projects.clone())
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project on_new_document=on_new_document/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </main>
                </div>

                <Show when=move || dashboard.with(|s| s.is_open(&Modal::NewOrganization))>
                    <NewOrganizationModal on_create=on_org_create on_cancel=on_cancel/>
                </Show>
                <Show when=move || dashboard.with(|s| s.is_open(&Modal::NewProject))>
                    <NewProjectModal
                        organization_name=selected_org_name
                        on_create=on_project_create
                        on_cancel=on_cancel
                    />
                </Show>
                <Show when=move || dashboard.with(|s| s.document_target().is_some())>
                    <NewDocumentModal
                        project_name=document_project_name
                        on_create=on_document_create
                        on_cancel=on_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

fn fetch_organizations(dashboard: RwSignal<DashboardState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_organizations().await {
            Ok(organizations) => {
                let mut auto_selected = None;
                dashboard.update(|s| auto_selected = s.apply_organizations(organizations));
                if let Some(org_id) = auto_selected {
                    fetch_projects(dashboard, org_id);
                }
            }
            Err(e) => log::error!("fetch organizations: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = dashboard;
}

fn fetch_projects(dashboard: RwSignal<DashboardState>, org_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_projects(&org_id).await {
            Ok(projects) => {
                let mut applied = false;
                dashboard.update(|s| applied = s.apply_projects(&org_id, projects));
                if !applied {
                    log::debug!("dropped stale project list for organization {org_id}");
                }
            }
            Err(e) => log::error!("fetch projects for {org_id}: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (dashboard, org_id);
}

fn create_organization(dashboard: RwSignal<DashboardState>, name: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::create_organization(&name).await {
            Ok(_) => {
                dashboard.update(DashboardState::close_modal);
                fetch_organizations(dashboard);
            }
            Err(e) => log::error!("create organization: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (dashboard, name);
}

fn create_project(dashboard: RwSignal<DashboardState>, name: String, description: Option<String>) {
    let Some(org_id) = dashboard.with_untracked(DashboardState::project_target) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let body = crate::net::types::NewProject { name, description };
        match crate::net::api::create_project(&org_id, &body).await {
            Ok(_) => {
                dashboard.update(DashboardState::close_modal);
                fetch_projects(dashboard, org_id);
            }
            Err(e) => log::error!("create project: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (org_id, name, description);
}

fn create_document(dashboard: RwSignal<DashboardState>, project_id: String, name: String, content: Option<String>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let body = crate::net::types::NewDocument { name, content };
        match crate::net::api::create_document(&project_id, &body).await {
            Ok(_) => dashboard.update(DashboardState::close_modal),
            Err(e) => log::error!("create document: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (dashboard, project_id, name, content);
}
