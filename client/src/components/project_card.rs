//! Card for one project in the dashboard grid.

use leptos::prelude::*;

use crate::net::types::Project;

/// Shows name, status and description, with a button that asks the parent
/// to open the document dialog for this project.
#[component]
pub fn ProjectCard(project: Project, on_new_document: Callback<String>) -> impl IntoView {
    let id = project.id.clone();
    let description = project
        .description
        .map(|d| view! { <p class="project-card__description">{d}</p> });

    view! {
        <div class="project-card">
            <div class="project-card__header">
                <h3 class="project-card__name">{project.name}</h3>
                <span class="project-card__status">{project.status}</span>
            </div>
            {description}
            <button class="btn project-card__new-doc" on:click=move |_| on_new_document.run(id.clone())>
                "+ New Document"
            </button>
        </div>
    }
}
