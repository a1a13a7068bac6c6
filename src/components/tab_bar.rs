//! Tab Bar Component
//!
//! Switches between the locations tree and the items list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{AppStateStoreFields, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    view! {
        <nav class="tabs">
            {[Tab::Locations, Tab::Items].into_iter().map(|tab| {
                let tab_class = move || {
                    if store.tab().get() == tab { "tab active" } else { "tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.switch_tab(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
