//! Modal dialog for creating an organization.

use leptos::prelude::*;

use crate::util::form::submit_with;

/// Single-field dialog. `on_create` receives the trimmed name and is never
/// called for blank input.
#[component]
pub fn NewOrganizationModal(on_create: Callback<String>, on_cancel: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        submit_with(&name.get_untracked(), |n| on_create.run(n));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Organization"</h2>
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
