//! Application Context
//!
//! The single controller provided via Leptos Context API. Components
//! dispatch intents here; it runs the backend calls and applies the
//! resulting transitions to the store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Display;

use crate::api;
use crate::config::config;
use crate::debounce::quiet_period;
use crate::error::ApiError;
use crate::form::{EntityKind, FormInput, Mutation};
use crate::store::{AppState, AppStore, Selection, Tab};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    fn read<U>(&self, f: impl FnOnce(&AppState) -> U) -> U {
        self.store.with_untracked(f)
    }

    // ========================
    // Notices
    // ========================

    /// Show a toast that hides itself after the configured delay
    pub fn notify(&self, text: impl Into<String>, is_error: bool) {
        let seq = self.store.write().push_notice(text, is_error);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(config().notice_ms).await;
            store.write().dismiss_notice(seq);
        });
    }

    fn report(&self, err: &impl Display) {
        log::warn!("{}", err);
        self.notify(err.to_string(), true);
    }

    // ========================
    // Loading
    // ========================

    async fn load_locations(&self) -> Result<(), ApiError> {
        let loaded = api::list_locations("").await?;
        log::info!("Loaded {} locations", loaded.len());
        self.store.write().locations = loaded;
        Ok(())
    }

    async fn load_location_matches(&self, query: &str) -> Result<(), ApiError> {
        let matches = api::list_locations(query).await?;
        log::info!("Found {} locations (q={:?})", matches.len(), query);
        if !self.store.write().attach_location_matches(query, matches) {
            log::debug!("Discarded location matches for outdated query {:?}", query);
        }
        Ok(())
    }

    /// Refresh the full list, and the matches too while a search is active
    async fn reload_locations(&self, query: &str) -> Result<(), ApiError> {
        self.load_locations().await?;
        if query.is_empty() {
            Ok(())
        } else {
            self.load_location_matches(query).await
        }
    }

    async fn load_items(&self, query: &str) -> Result<(), ApiError> {
        let loaded = api::list_items(query).await?;
        log::info!("Loaded {} items (q={:?})", loaded.len(), query);
        self.store.write().items = loaded;
        Ok(())
    }

    /// Load both lists unfiltered; items are needed for lookups on either tab
    async fn load_all(&self) {
        if let Err(err) = self.load_locations().await {
            self.report(&err);
        }
        if let Err(err) = self.load_items("").await {
            self.report(&err);
        }
    }

    /// Reload the current tab's list with the current search text
    async fn reload_current(&self) {
        let (tab, query) = self.read(|s| (s.tab, s.search_query()));
        let result = match tab {
            Tab::Locations if query.is_empty() => self.load_locations().await,
            Tab::Locations => self.load_location_matches(&query).await,
            Tab::Items => self.load_items(&query).await,
        };
        if let Err(err) = result {
            self.report(&err);
        }
    }

    pub fn init(&self) {
        let ctx = *self;
        spawn_local(async move { ctx.load_all().await });
    }

    // ========================
    // Selection
    // ========================

    /// Select and, for a location, fetch the items it holds
    async fn select_now(&self, id: u32) {
        let Some(ticket) = self.store.write().select(id) else { return };
        match api::list_items_in(ticket.location_id).await {
            Ok(items) => {
                if !self.store.write().attach_location_items(ticket, items) {
                    log::debug!("Discarded items for superseded location {}", ticket.location_id);
                }
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn select(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move { ctx.select_now(id).await });
    }

    pub fn deselect(&self) {
        self.store.write().clear_selection();
    }

    pub fn toggle(&self, id: u32) {
        self.store.write().toggle(id);
    }

    pub fn switch_tab(&self, tab: Tab) {
        if self.read(|s| s.tab == tab && !s.is_searching() && s.selection.is_none()) {
            return;
        }
        self.store.write().switch_tab(tab);
        let ctx = *self;
        spawn_local(async move {
            if let Err(err) = ctx.load_locations().await {
                ctx.report(&err);
            }
            if tab == Tab::Items {
                if let Err(err) = ctx.load_items("").await {
                    ctx.report(&err);
                }
            }
        });
    }

    /// Jump from a location's detail to one of its items
    pub fn show_item(&self, id: u32) {
        self.store.write().switch_tab(Tab::Items);
        let ctx = *self;
        spawn_local(async move {
            if let Err(err) = ctx.load_items("").await {
                ctx.report(&err);
            }
            ctx.store.write().select(id);
        });
    }

    /// Jump to a location from any detail view
    pub fn show_location(&self, id: u32) {
        if self.read(|s| s.tab == Tab::Locations && !s.is_searching()) {
            self.select(id);
            return;
        }
        self.store.write().switch_tab(Tab::Locations);
        let ctx = *self;
        spawn_local(async move {
            if let Err(err) = ctx.load_locations().await {
                ctx.report(&err);
            }
            ctx.select_now(id).await;
        });
    }

    // ========================
    // Search
    // ========================

    /// Record the search text and reload once typing pauses
    pub fn search(&self, text: String) {
        let ticket = self.store.write().set_search(text);
        let ctx = *self;
        spawn_local(async move {
            quiet_period(config().search_debounce_ms).await;
            if ctx.read(|s| s.search_debounce.is_current(ticket)) {
                ctx.reload_current().await;
            }
        });
    }

    // ========================
    // Forms
    // ========================

    pub fn open_create(&self, entity: Option<EntityKind>, default_location: Option<u32>) {
        self.store.write().open_create_form(entity, default_location);
    }

    pub fn open_edit(&self) {
        if !self.store.write().open_edit_form() {
            log::debug!("Edit requested with nothing selected");
        }
    }

    pub fn close_form(&self) {
        self.store.write().close_form();
    }

    /// Validate locally, then send. The form stays open on any failure.
    pub fn submit_form(&self, input: FormInput) {
        let Some(form) = self.read(|s| s.form.clone()) else { return };
        let mutation = match form.build(&input) {
            Ok(mutation) => mutation,
            Err(err) => {
                self.notify(err.to_string(), true);
                return;
            }
        };
        if !self.store.write().begin_submit() {
            log::debug!("Submit ignored while another is pending");
            return;
        }
        let return_to = form.return_to();

        let ctx = *self;
        spawn_local(async move {
            let applied = apply(&mutation).await;
            ctx.store.write().finish_submit();
            if let Err(err) = applied {
                ctx.report(&err);
                return;
            }
            ctx.notify(mutation.success_notice(), false);

            let query = ctx.read(|s| s.search_query());
            let reloaded = match mutation.entity() {
                EntityKind::Location => ctx.reload_locations(&query).await,
                EntityKind::Item => ctx.load_items(&query).await,
            };
            if let Err(err) = reloaded {
                ctx.report(&err);
            }
            ctx.close_form();

            match return_to {
                Some(location_id) => {
                    ctx.store.write().switch_tab(Tab::Locations);
                    ctx.load_all().await;
                    ctx.select_now(location_id).await;
                }
                None => ctx.deselect(),
            }
        });
    }

    // ========================
    // Delete
    // ========================

    pub fn delete_selected(&self) {
        let Some(selection) = self.read(|s| s.selection) else { return };
        let ctx = *self;
        spawn_local(async move {
            let result = match selection {
                Selection::Location(id) => api::delete_location(id).await,
                Selection::Item(id) => api::delete_item(id).await,
            };
            if let Err(err) = result {
                ctx.report(&err);
                return;
            }
            log::info!("Deleted {:?}", selection);

            let query = ctx.read(|s| s.search_query());
            let reloaded = match selection {
                Selection::Location(_) => match ctx.reload_locations(&query).await {
                    // Contained items may be gone too
                    Ok(()) => ctx.load_items("").await,
                    Err(err) => Err(err),
                },
                Selection::Item(_) => ctx.load_items(&query).await,
            };
            ctx.deselect();
            if let Err(err) = reloaded {
                ctx.report(&err);
            }
            ctx.notify("Deleted", false);
        });
    }
}

async fn apply(mutation: &Mutation) -> Result<(), ApiError> {
    match mutation {
        Mutation::CreateLocation(payload) => api::create_location(payload).await.map(|_| ()),
        Mutation::UpdateLocation(id, payload) => api::update_location(*id, payload).await.map(|_| ()),
        Mutation::CreateItem(payload) => api::create_item(payload).await.map(|_| ()),
        Mutation::UpdateItem(id, payload) => api::update_item(*id, payload).await.map(|_| ()),
    }
}
