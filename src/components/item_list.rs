//! Item List Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Flat list of items with the name of the location holding each
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    let rows = Memo::new(move |_| store.with(|s| s.item_rows()));

    view! {
        <div class="item-list">
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <div class="list-empty">"no items"</div> }
            >
                <For
                    each=move || rows.get()
                    key=|row| (row.id, row.name.clone(), row.selected, row.subtitle.clone())
                    children=move |row| {
                        let id = row.id;
                        let row_class = if row.selected { "list-item active" } else { "list-item" };
                        view! {
                            <div
                                class=row_class
                                on:click=move |_| ctx.select(id)
                            >
                                <span class="list-item-name">{row.name}</span>
                                <span class="list-item-meta">{row.subtitle.unwrap_or_default()}</span>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
