//! Search Box Component

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Debounced search input; reloads the current tab when typing pauses
#[component]
pub fn SearchBox(input_ref: NodeRef<html::Input>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    view! {
        <input
            node_ref=input_ref
            class="search"
            type="search"
            placeholder="Search… (Ctrl+K)"
            prop:value=move || store.search().get()
            on:input=move |ev| ctx.search(event_target_value(&ev))
        />
    }
}
