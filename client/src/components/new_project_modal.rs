//! Modal dialog for creating a project in the selected organization.

use leptos::prelude::*;

use crate::util::form::{optional_trimmed, submit_with};

/// Name plus optional description. Both are trimmed; a blank description is
/// passed as `None`.
#[component]
pub fn NewProjectModal(
    #[prop(into)] organization_name: Signal<String>,
    on_create: Callback<(String, Option<String>)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let description = optional_trimmed(&description.get_untracked());
        submit_with(&name.get_untracked(), |n| on_create.run((n, description)));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Project"</h2>
                <p class="dialog__subtitle">{move || organization_name.get()}</p>
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__input--multiline"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
