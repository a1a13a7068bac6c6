//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The methods on
//! [`AppState`] are the only state transitions; they are synchronous and
//! DOM-free, and `AppContext` wraps them with the backend calls.

use leptos::prelude::*;
use reactive_stores::Store;
use std::collections::HashSet;

use crate::debounce::{Debouncer, Ticket};
use crate::form::{EntityKind, FormState};
use crate::models::{Item, Location};
use crate::paths::PathResolver;
use crate::tree::{build_tree, descendant_closure, flatten_visible};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Locations,
    Items,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Locations => "Locations",
            Tab::Items => "Items",
        }
    }

    fn entity(self) -> EntityKind {
        match self {
            Tab::Locations => EntityKind::Location,
            Tab::Items => EntityKind::Item,
        }
    }
}

/// The single selection slot, by id into the current flat lists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Location(u32),
    Item(u32),
}

/// Issued for each contextual item fetch. Only the newest ticket may attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailTicket {
    pub location_id: u32,
    generation: u64,
}

/// Transient toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    seq: u64,
}

/// One rendered list row
#[derive(Clone, Debug, PartialEq)]
pub struct ListRow {
    pub id: u32,
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
    /// Full path while searching locations, location name for items
    pub subtitle: Option<String>,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub tab: Tab,
    /// Every location; lookups, paths and menus resolve against this
    pub locations: Vec<Location>,
    /// Backend matches for the active location search
    pub location_matches: Option<Vec<Location>>,
    /// Last loaded items
    pub items: Vec<Item>,
    pub search: String,
    pub search_debounce: Debouncer,
    /// Expanded location ids; session only
    pub expanded: HashSet<u32>,
    pub selection: Option<Selection>,
    /// Items inside the selected location, once fetched
    pub location_items: Option<Vec<Item>>,
    pub detail_generation: u64,
    pub form: Option<FormState>,
    /// A create/update request is in flight
    pub submitting: bool,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn selected_location(&self) -> Option<&Location> {
        match self.selection {
            Some(Selection::Location(id)) => self.locations.iter().find(|l| l.id == id),
            _ => None,
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        match self.selection {
            Some(Selection::Item(id)) => self.items.iter().find(|i| i.id == id),
            _ => None,
        }
    }

    /// The detail panel is open while the selection resolves to a record
    pub fn detail_open(&self) -> bool {
        self.selected_location().is_some() || self.selected_item().is_some()
    }

    // ========================
    // Selection
    // ========================

    /// Select by id on the current tab.
    ///
    /// Selecting a location reveals it in the tree and returns the ticket for
    /// fetching its items. An unknown id clears the selection.
    pub fn select(&mut self, id: u32) -> Option<DetailTicket> {
        self.clear_selection();
        match self.tab {
            Tab::Locations => {
                let chain = PathResolver::new(&self.locations).ancestors_and_self(id);
                if chain.is_empty() {
                    return None;
                }
                self.expanded.extend(chain);
                self.selection = Some(Selection::Location(id));
                Some(DetailTicket { location_id: id, generation: self.detail_generation })
            }
            Tab::Items => {
                if self.items.iter().any(|i| i.id == id) {
                    self.selection = Some(Selection::Item(id));
                }
                None
            }
        }
    }

    /// Attach fetched items if `ticket` is still the latest selection
    pub fn attach_location_items(&mut self, ticket: DetailTicket, items: Vec<Item>) -> bool {
        let current = ticket.generation == self.detail_generation
            && self.selection == Some(Selection::Location(ticket.location_id));
        if current {
            self.location_items = Some(items);
        }
        current
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.location_items = None;
        self.detail_generation += 1;
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.search.clear();
        self.location_matches = None;
        self.search_debounce.bump();
        self.clear_selection();
    }

    // ========================
    // Tree
    // ========================

    /// Expand, or collapse the node together with all of its descendants
    pub fn toggle(&mut self, id: u32) {
        if self.expanded.contains(&id) {
            for collapsed in descendant_closure(&self.locations, [id]) {
                self.expanded.remove(&collapsed);
            }
        } else {
            self.expanded.insert(id);
        }
    }

    /// Tree rows, or a flat list with full paths while searching
    pub fn location_rows(&self) -> Vec<ListRow> {
        let selected = match self.selection {
            Some(Selection::Location(id)) => Some(id),
            _ => None,
        };

        if self.is_searching() {
            let resolver = PathResolver::new(&self.locations);
            let matches = self.location_matches.as_deref().unwrap_or(&self.locations);
            return matches
                .iter()
                .map(|loc| ListRow {
                    id: loc.id,
                    name: loc.name.clone(),
                    depth: 0,
                    has_children: false,
                    expanded: false,
                    selected: selected == Some(loc.id),
                    subtitle: Some(resolver.path(loc.id)),
                })
                .collect();
        }

        let tree = build_tree(&self.locations);
        flatten_visible(&tree, &self.expanded)
            .into_iter()
            .map(|row| ListRow {
                id: row.location.id,
                name: row.location.name.clone(),
                depth: row.depth,
                has_children: row.has_children,
                expanded: self.expanded.contains(&row.location.id),
                selected: selected == Some(row.location.id),
                subtitle: None,
            })
            .collect()
    }

    /// Flat item rows annotated with their location's name
    pub fn item_rows(&self) -> Vec<ListRow> {
        let selected = match self.selection {
            Some(Selection::Item(id)) => Some(id),
            _ => None,
        };
        let resolver = PathResolver::new(&self.locations);
        self.items
            .iter()
            .map(|item| ListRow {
                id: item.id,
                name: item.name.clone(),
                depth: 0,
                has_children: false,
                expanded: false,
                selected: selected == Some(item.id),
                subtitle: resolver.get(item.location_id).map(|loc| loc.name.clone()),
            })
            .collect()
    }

    // ========================
    // Search
    // ========================

    pub fn set_search(&mut self, text: String) -> Ticket {
        self.search = text;
        if !self.is_searching() {
            self.location_matches = None;
        }
        self.search_debounce.bump()
    }

    /// Keep search results only if they answer the current query
    pub fn attach_location_matches(&mut self, query: &str, matches: Vec<Location>) -> bool {
        let current = self.is_searching() && self.search_query() == query;
        if current {
            self.location_matches = Some(matches);
        }
        current
    }

    pub fn search_query(&self) -> String {
        self.search.trim().to_string()
    }

    // ========================
    // Forms
    // ========================

    /// Marks a submit as in flight. False while another one is still pending.
    pub fn begin_submit(&mut self) -> bool {
        !std::mem::replace(&mut self.submitting, true)
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Open a create form; the entity defaults to the current tab's
    pub fn open_create_form(&mut self, entity: Option<EntityKind>, default_location: Option<u32>) {
        let entity = entity.unwrap_or(self.tab.entity());
        self.form = Some(FormState::create(entity, default_location, &self.locations));
    }

    /// Open an edit form for the selection. Returns false when nothing is selected.
    pub fn open_edit_form(&mut self) -> bool {
        let form = if let Some(loc) = self.selected_location() {
            FormState::edit_location(loc, &self.locations)
        } else if let Some(item) = self.selected_item() {
            FormState::edit_item(item, &self.locations)
        } else {
            return false;
        };
        self.form = Some(form);
        true
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    // ========================
    // Notices
    // ========================

    /// Show a notice and return its sequence number for later dismissal
    pub fn push_notice(&mut self, text: impl Into<String>, is_error: bool) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { text: text.into(), is_error, seq: self.notice_seq });
        self.notice_seq
    }

    /// Hide the notice unless a newer one replaced it
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
