//! Inventory Frontend App
//!
//! Main application component: list pane on the left, detail pane on the
//! right, form overlay and toast on top.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DetailPanel, EntityForm, ItemList, LocationTree, NoticeToast, SearchBox, TabBar};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, Tab};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    // The one mutator of the store
    let ctx = AppContext::new(store);
    provide_context(ctx);

    ctx.init();

    // Escape closes the form, Ctrl/Cmd+K jumps to search
    let search_ref = NodeRef::<html::Input>::new();
    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_form();
        }
        if (ev.meta_key() || ev.ctrl_key()) && ev.key() == "k" {
            ev.prevent_default();
            if let Some(input) = search_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    });

    let tab = Memo::new(move |_| store.tab().get());
    let detail_open = Memo::new(move |_| store.with(|s| s.detail_open()));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"cache"</h1>
                <TabBar />
                <button class="btn primary" on:click=move |_| ctx.open_create(None, None)>"+ New"</button>
            </header>

            <main class=move || if detail_open.get() { "detail-open" } else { "" }>
                // Left: search + list for the current tab
                <section class="list-pane">
                    <SearchBox input_ref=search_ref />
                    {move || match tab.get() {
                        Tab::Locations => view! { <LocationTree /> }.into_any(),
                        Tab::Items => view! { <ItemList /> }.into_any(),
                    }}
                </section>

                // Right: detail of the selection
                <section class="detail-pane">
                    <DetailPanel />
                </section>
            </main>

            <EntityForm />
            <NoticeToast />
        </div>
    }
}
