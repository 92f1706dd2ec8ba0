//! A fetched resource collection plus its loading and error flags.
//!
//! Every directory and admin page holds one of these. `load` always fetches
//! the whole collection again; a failure leaves the items empty and sets
//! `error`.

use super::http;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use mep_contracts::domain::common::{RecordId, Resource};
use mep_contracts::shared::admin_crud::remove_by_id;
use mep_contracts::shared::api::{ApiCall, Endpoint};

pub struct RemoteCollection<T: Resource + Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Resource + Send + Sync + 'static> Clone for RemoteCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource + Send + Sync + 'static> Copy for RemoteCollection<T> {}

impl<T: Resource + Send + Sync + 'static> RemoteCollection<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// New collection that starts loading right away
    pub fn fetched() -> Self {
        let collection = Self::new();
        collection.load();
        collection
    }

    /// `GET /{resource}`
    pub fn load(&self) {
        self.load_with(Endpoint::list(T::KIND));
    }

    /// Fetch the collection through a custom list call (server-side filters)
    pub fn load_with(&self, call: ApiCall) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            match http::fetch_json::<Vec<T>>(&call).await {
                Ok(items) => {
                    log::debug!("loaded {} {}", items.len(), T::KIND.path());
                    this.items.set(items);
                }
                Err(e) => {
                    this.items.set(Vec::new());
                    this.error.set(Some(e.user_message()));
                }
            }
            this.loading.set(false);
        });
    }

    /// Drop one record locally after a successful delete
    pub fn remove(&self, id: &RecordId) {
        self.items.update(|items| remove_by_id(items, id));
    }

    /// Look up a loaded record, e.g. to prefill an edit form
    pub fn find(&self, id: &RecordId) -> Option<T> {
        self.items
            .with_untracked(|items| items.iter().find(|r| r.id() == id).cloned())
    }
}

impl<T: Resource + Send + Sync + 'static> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
