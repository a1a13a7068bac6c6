//! Location Tree Component
//!
//! The locations tab: an expandable tree, or a flat list of matches with
//! their full paths while searching.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::ListRow;

#[component]
pub fn LocationTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    let rows = Memo::new(move |_| store.with(|s| s.location_rows()));

    view! {
        <div class="tree-view">
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <div class="list-empty">"no locations"</div> }
            >
                <For
                    each=move || rows.get()
                    key=|row| {
                        (
                            row.id,
                            row.depth,
                            row.name.clone(),
                            row.has_children,
                            row.expanded,
                            row.selected,
                            row.subtitle.clone(),
                        )
                    }
                    children=move |row| view! { <LocationRow row=row /> }
                />
            </Show>
        </div>
    }
}

/// A single location row
#[component]
fn LocationRow(row: ListRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let indent = row.depth * 16;
    let row_class = if row.selected { "list-item active" } else { "list-item" };

    view! {
        <div
            class=row_class
            style=format!("padding-left: {}px;", indent + 8)
            on:click=move |_| ctx.select(id)
        >
            // Toggle is shown whenever the node has children, expanded or not
            {if row.has_children {
                let toggle_class = if row.expanded { "tree-toggle open" } else { "tree-toggle" };
                view! {
                    <span class=toggle_class on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.toggle(id);
                    }>
                        "▶"
                    </span>
                }.into_any()
            } else {
                view! { <span class="tree-toggle-spacer"></span> }.into_any()
            }}

            <span class="list-item-name">
                {row.name}
                {row.subtitle.map(|path| view! { <span class="list-item-path">{path}</span> })}
            </span>
        </div>
    }
}
