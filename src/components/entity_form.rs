//! Entity Form Component
//!
//! Modal create/edit form for locations and items.

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::form::{EntityKind, FormInput, FormState};
use crate::store::AppStateStoreFields;

/// Overlay shown while a form is open
#[component]
pub fn EntityForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    // Only a changed form rebuilds the dialog; typed input survives other writes
    let form = Memo::new(move |_| store.form().get());

    move || form.get().map(|state| view! { <FormDialog form=state /> })
}

#[component]
fn FormDialog(form: FormState) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    let (name, set_name) = signal(form.name.clone());
    let (location, set_location) = signal(form.location.map(|id| id.to_string()).unwrap_or_default());
    let name_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = name_ref.get() {
            let _ = input.focus();
        }
    });

    let (placeholder, menu_label, none_label) = match form.entity {
        EntityKind::Location => ("e.g. Living Room", "Parent location", "— none (root)"),
        EntityKind::Item => ("e.g. HDMI cable", "Location", "— select —"),
    };
    let title = form.title();
    let preselected = form.location;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form(FormInput {
            name: name.get_untracked(),
            location: location.get_untracked().parse().ok(),
        });
    };

    view! {
        <div class="form-overlay visible" on:click=move |_| ctx.close_form()>
            <form class="form-panel" on:submit=submit on:click=|ev| ev.stop_propagation()>
                <div class="form-header">
                    <span class="form-title">{title}</span>
                    <button type="button" class="form-close" on:click=move |_| ctx.close_form()>"×"</button>
                </div>
                <div class="form-group">
                    <label class="form-label">"Name"</label>
                    <input
                        node_ref=name_ref
                        class="form-input"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">{menu_label}</label>
                    <select class="form-select" on:change=move |ev| set_location.set(event_target_value(&ev))>
                        <option value="" selected=preselected.is_none()>{none_label}</option>
                        {form.options.into_iter().map(|option| {
                            let is_selected = preselected == Some(option.id);
                            view! {
                                <option value=option.id.to_string() selected=is_selected>
                                    {option.path}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn" on:click=move |_| ctx.close_form()>"Cancel"</button>
                    <button type="submit" class="btn primary" disabled=move || store.submitting().get()>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
