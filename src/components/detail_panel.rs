//! Detail Panel Component
//!
//! Shows the selected location or item with its actions. A location's view
//! also lists the items stored in it once they have been fetched.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::form::EntityKind;
use crate::models::{fmt_date, Item, Location};
use crate::paths::PathResolver;
use crate::store::AppState;

/// A linked location: id plus its full path
type LocationLink = (u32, String);

#[derive(Clone, Debug, PartialEq)]
enum Detail {
    Empty,
    Location {
        location: Location,
        parent: Option<LocationLink>,
        items: Option<Vec<Item>>,
    },
    Item {
        item: Item,
        location: Option<LocationLink>,
    },
}

impl Detail {
    fn of(state: &AppState) -> Self {
        let resolver = PathResolver::new(&state.locations);
        let link = |id: u32| resolver.get(id).map(|loc| (loc.id, resolver.path(loc.id)));

        if let Some(location) = state.selected_location() {
            Detail::Location {
                location: location.clone(),
                parent: location.parent_id.and_then(link),
                items: state.location_items.clone(),
            }
        } else if let Some(item) = state.selected_item() {
            Detail::Item { item: item.clone(), location: link(item.location_id) }
        } else {
            Detail::Empty
        }
    }
}

#[component]
pub fn DetailPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    let detail = Memo::new(move |_| store.with(Detail::of));

    view! {
        <div class="detail">
            {move || match detail.get() {
                Detail::Empty => view! {
                    <div class="detail-empty">"← select an entry"</div>
                }.into_any(),
                Detail::Location { location, parent, items } => view! {
                    <LocationDetail location=location parent=parent items=items />
                }.into_any(),
                Detail::Item { item, location } => view! {
                    <ItemDetail item=item location=location />
                }.into_any(),
            }}
        </div>
    }
}

/// Back button, title and Edit/Delete actions shared by both detail kinds
#[component]
fn DetailHeader(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let title = name.clone();

    view! {
        <button class="btn-back" on:click=move |_| ctx.deselect()>"← back"</button>
        <div class="detail-top">
            <div class="detail-title">{title}</div>
            <div class="detail-actions">
                <button class="btn" on:click=move |_| ctx.open_edit()>"Edit"</button>
                <DeleteConfirmButton name=name on_confirm=move |_| ctx.delete_selected() />
            </div>
        </div>
    }
}

#[component]
fn TimestampFields(created: String, updated: String) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field-label">"Created"</span>
            <span class="field-value muted">{created}</span>
        </div>
        <div class="field">
            <span class="field-label">"Updated"</span>
            <span class="field-value muted">{updated}</span>
        </div>
    }
}

#[component]
fn LocationDetail(
    location: Location,
    parent: Option<LocationLink>,
    items: Option<Vec<Item>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = location.id;

    view! {
        <div class="detail-content">
            <DetailHeader name=location.name.clone() />
            <div class="detail-fields">
                <div class="field">
                    <span class="field-label">"Parent"</span>
                    <span class="field-value">
                        {match parent {
                            Some((parent_id, path)) => view! {
                                <a class="loc-link" on:click=move |_| ctx.show_location(parent_id)>{path}</a>
                            }.into_any(),
                            None => view! { <span class="muted">"— root"</span> }.into_any(),
                        }}
                    </span>
                </div>
                <TimestampFields
                    created=fmt_date(&location.created_at)
                    updated=fmt_date(&location.updated_at)
                />
            </div>
            <div class="quick-create">
                <button class="btn" on:click=move |_| ctx.open_create(Some(EntityKind::Location), Some(id))>
                    "+ Sub-location here"
                </button>
                <button class="btn" on:click=move |_| ctx.open_create(Some(EntityKind::Item), Some(id))>
                    "+ Item here"
                </button>
            </div>
            // Nothing until the contextual fetch for this selection resolves
            {items.map(|items| view! {
                <div class="items-section">
                    <div class="section-title">"Items here"</div>
                    <div class="loc-items">
                        {if items.is_empty() {
                            view! { <p class="muted">"No items here."</p> }.into_any()
                        } else {
                            items.into_iter().map(|item| {
                                let item_id = item.id;
                                view! {
                                    <span class="item-chip" on:click=move |_| ctx.show_item(item_id)>
                                        "◈ " {item.name}
                                    </span>
                                }
                            }).collect_view().into_any()
                        }}
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
fn ItemDetail(item: Item, location: Option<LocationLink>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="detail-content">
            <DetailHeader name=item.name.clone() />
            <div class="detail-fields">
                <div class="field">
                    <span class="field-label">"Location"</span>
                    <span class="field-value">
                        {match location {
                            Some((location_id, path)) => view! {
                                <a class="loc-link" on:click=move |_| ctx.show_location(location_id)>{path}</a>
                            }.into_any(),
                            None => view! { <span>"—"</span> }.into_any(),
                        }}
                    </span>
                </div>
                <TimestampFields
                    created=fmt_date(&item.created_at)
                    updated=fmt_date(&item.updated_at)
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Tab;
    use crate::tree::tests::{house, make_location};

    #[test]
    fn test_detail_of_location_links_parent_path() {
        let mut state = AppState { locations: house(), ..AppState::new() };
        assert_eq!(Detail::of(&state), Detail::Empty);

        state.select(3);
        match Detail::of(&state) {
            Detail::Location { location, parent, items } => {
                assert_eq!(location.name, "Drawer");
                assert_eq!(parent, Some((2, "House › Kitchen".to_string())));
                assert_eq!(items, None);
            }
            other => panic!("expected location detail, got {:?}", other),
        }

        state.select(1);
        assert!(matches!(Detail::of(&state), Detail::Location { parent: None, .. }));
    }

    #[test]
    fn test_detail_of_search_result_shows_real_parent() {
        let mut state = AppState { locations: house(), ..AppState::new() };
        state.set_search("drawer".into());
        state.attach_location_matches("drawer", vec![make_location(3, "Drawer", Some(2))]);
        state.select(3);

        match Detail::of(&state) {
            Detail::Location { parent, .. } => assert_eq!(parent, Some((2, "House › Kitchen".to_string()))),
            other => panic!("expected location detail, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_of_item_with_missing_location() {
        let at = chrono::Utc::now();
        let mut state = AppState {
            locations: house(),
            items: vec![Item { id: 5, name: "Torch".into(), location_id: 404, created_at: at, updated_at: at }],
            ..AppState::new()
        };
        state.switch_tab(Tab::Items);
        state.select(5);
        assert!(matches!(Detail::of(&state), Detail::Item { location: None, .. }));
    }
}
