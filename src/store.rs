//! Collection Store
//!
//! Local, possibly stale copy of one backend collection, owned by a single
//! manager component and mutated only by its handlers.

use leptos::prelude::*;

use crate::filters;
use crate::models::{ClientScoped, Entity};

/// Collection plus its loading/error flags
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerState<T> {
    pub records: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Ticket of the most recent load; older answers are dropped
    latest_load: u64,
    /// Records merged while a load was in flight, tagged with that load's ticket
    merged_during_load: Vec<(u64, T)>,
}

/// Coarse state of a collection, for pages that gate on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Failed(String),
    Ready,
}

impl<T> Default for ManagerState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
            latest_load: 0,
            merged_during_load: Vec::new(),
        }
    }
}

impl<T: Entity> ManagerState<T> {
    /// State for a collection whose load is about to start
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Start a load and return its ticket
    pub fn begin_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.loading = true;
        self.latest_load
    }

    fn is_stale(&self, ticket: u64) -> bool {
        ticket != self.latest_load
    }

    /// Replace the collection with the backend's answer to load `ticket`.
    /// Records merged after that load started are kept when the snapshot
    /// predates them. Returns false, changing nothing, when a newer load exists.
    pub fn finish_load(&mut self, ticket: u64, mut records: Vec<T>) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        let merged = std::mem::take(&mut self.merged_during_load);
        for (_, record) in merged.into_iter().filter(|(started, _)| *started >= ticket) {
            if !records.iter().any(|r| r.id() == record.id()) {
                records.insert(0, record);
            }
        }
        self.records = records;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record the failure of load `ticket`; the collection is left as it was
    pub fn fail_load(&mut self, ticket: u64, message: String) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.merged_during_load.clear();
        self.loading = false;
        self.error = Some(message);
        true
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Put a record returned by the backend in front, or replace the one with its id
    pub fn merge_created(&mut self, record: T) {
        if self.loading {
            self.merged_during_load.push((self.latest_load, record.clone()));
        }
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.records.insert(0, record),
        }
    }

    /// Update a record in place by id. Returns false when no record matched.
    pub fn update_record(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }

    /// Remove a record by id. Returns false when no record matched.
    pub fn remove_record(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    pub fn phase(&self) -> LoadPhase {
        if self.loading {
            LoadPhase::Loading
        } else if let Some(message) = &self.error {
            LoadPhase::Failed(message.clone())
        } else {
            LoadPhase::Ready
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity + ClientScoped> ManagerState<T> {
    /// Records shown for the current client selection (empty selection shows all)
    pub fn visible_for(&self, selected_client: &str) -> Vec<T> {
        filters::visible_for(&self.records, selected_client)
    }
}

/// Write access to a manager's state that refuses updates once the owner is gone
pub trait StateHandle<T> {
    /// Run `f` against the state, or return `None` if the component was unmounted
    fn apply<R>(&self, f: impl FnOnce(&mut ManagerState<T>) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateHandle<T> for RwSignal<ManagerState<T>> {
    fn apply<R>(&self, f: impl FnOnce(&mut ManagerState<T>) -> R) -> Option<R> {
        // Disposed signals return None instead of panicking
        self.try_update(f)
    }
}
