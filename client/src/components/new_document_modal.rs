//! Modal dialog for creating a document inside a project.

use leptos::prelude::*;

use crate::util::form::{optional_text, submit_with};

/// Name plus optional content. Blank content is passed as `None`.
#[component]
pub fn NewDocumentModal(
    #[prop(into)] project_name: Signal<String>,
    on_create: Callback<(String, Option<String>)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let content = optional_text(&content.get_untracked());
        submit_with(&name.get_untracked(), |n| on_create.run((n, content)));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Document"</h2>
                <p class="dialog__subtitle">{move || project_name.get()}</p>
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
                        "Content"
                        <textarea
                            class="dialog__input dialog__input--multiline"
                            rows="8"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
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
