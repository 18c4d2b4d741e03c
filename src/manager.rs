//! Manager Flows
//!
//! Fetch-on-mount and create-then-merge, shared by every manager component.
//! All state writes go through a `StateHandle`, so results that arrive after
//! the component is gone are dropped.

use crate::api::{ApiError, ApiResult, Resource};
use crate::models::{Draft, Entity};
use crate::store::StateHandle;

/// How a successful create reached local state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    /// The backend returned the record and it was merged in
    Merged,
    /// The backend returned nothing usable, so the collection was reloaded
    Reloaded,
}

/// Presence check run before any network call
pub fn validate<D: Draft>(draft: &D) -> ApiResult<()> {
    match draft.missing_field() {
        Some(field) => Err(ApiError::Validation { field }),
        None => Ok(()),
    }
}

/// Fetch the whole collection into state. An answer overtaken by a newer
/// load is dropped. Returns false when the owning component was already gone.
pub async fn load<R, S>(resource: &R, state: &S) -> bool
where
    R: Resource,
    S: StateHandle<R::Record>,
{
    let Some(ticket) = state.apply(|s| s.begin_load()) else {
        return false;
    };

    let applied = match resource.list().await {
        Ok(records) => {
            log::info!("[Manager] loaded {} {}", records.len(), resource.label());
            state.apply(|s| s.finish_load(ticket, records))
        }
        Err(e) => {
            log::error!("[Manager] {}", e);
            let message = format!("Unable to load {}. Please try again.", resource.label());
            state.apply(|s| s.fail_load(ticket, message))
        }
    };

    match applied {
        Some(false) => {
            log::info!("[Manager] dropped an outdated answer for {}", resource.label());
            true
        }
        Some(true) => true,
        None => false,
    }
}

/// Validate, POST, then merge the returned record or reload when there is none
pub async fn create<R, S>(resource: &R, state: &S, draft: &R::Draft) -> ApiResult<Created>
where
    R: Resource,
    S: StateHandle<R::Record>,
{
    if let Err(e) = validate(draft) {
        log::warn!("[Manager] not adding to {}: {}", resource.label(), e);
        return Err(e);
    }

    match resource.create(draft).await {
        Ok(Some(record)) => {
            log::info!("[Manager] added {} to {}", record.id(), resource.label());
            state.apply(move |s| {
                s.clear_error();
                s.merge_created(record);
            });
            Ok(Created::Merged)
        }
        Ok(None) => {
            log::info!("[Manager] added to {} without a record back, reloading", resource.label());
            load(resource, state).await;
            Ok(Created::Reloaded)
        }
        Err(e) => {
            log::error!("[Manager] {}", e);
            let message = format!("Unable to add to {}. Please try again.", resource.label());
            state.apply(|s| s.error = Some(message));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, ClientDraft, ClientStatus, Task, TaskDraft};
    use crate::store::ManagerState;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Component state that can be "unmounted"
    struct Mounted<T> {
        state: RefCell<ManagerState<T>>,
        alive: Cell<bool>,
    }

    impl<T: Entity> Mounted<T> {
        fn new(records: Vec<T>) -> Self {
            Self {
                state: RefCell::new(ManagerState::with_records(records)),
                alive: Cell::new(true),
            }
        }

        fn snapshot(&self) -> ManagerState<T> {
            self.state.borrow().clone()
        }
    }

    impl<T: Entity> StateHandle<T> for Mounted<T> {
        fn apply<R>(&self, f: impl FnOnce(&mut ManagerState<T>) -> R) -> Option<R> {
            if !self.alive.get() {
                return None;
            }
            Some(f(&mut self.state.borrow_mut()))
        }
    }

    /// In-memory backend assigning sequential ids
    struct FakeBackend<T, D> {
        records: RefCell<Vec<T>>,
        /// Per-call answers for `list`: yields before answering, then the snapshot
        scripted_lists: RefCell<VecDeque<(usize, Vec<T>)>>,
        next_id: Cell<u32>,
        list_calls: Cell<usize>,
        create_calls: Cell<usize>,
        fail_list: bool,
        fail_create: bool,
        echo_record: bool,
        build: fn(&D, String) -> T,
    }

    impl<T: Entity, D> FakeBackend<T, D> {
        fn new(records: Vec<T>, build: fn(&D, String) -> T) -> Self {
            let next_id = records.len() as u32 + 1;
            Self {
                records: RefCell::new(records),
                scripted_lists: RefCell::new(VecDeque::new()),
                next_id: Cell::new(next_id),
                list_calls: Cell::new(0),
                create_calls: Cell::new(0),
                fail_list: false,
                fail_create: false,
                echo_record: true,
                build,
            }
        }
    }

    #[async_trait(?Send)]
    impl<T: Entity, D: Draft + 'static> Resource for FakeBackend<T, D> {
        type Record = T;
        type Draft = D;

        fn label(&self) -> &str {
            "records"
        }

        async fn list(&self) -> ApiResult<Vec<T>> {
            self.list_calls.set(self.list_calls.get() + 1);
            let scripted = self.scripted_lists.borrow_mut().pop_front();
            let (yields, snapshot) = scripted.unwrap_or_else(|| (1, self.records.borrow().clone()));
            for _ in 0..yields {
                tokio::task::yield_now().await;
            }
            if self.fail_list {
                return Err(ApiError::Status { action: "fetching", collection: "records".into(), status: 503 });
            }
            Ok(snapshot)
        }

        async fn create(&self, draft: &D) -> ApiResult<Option<T>> {
            self.create_calls.set(self.create_calls.get() + 1);
            tokio::task::yield_now().await;
            if self.fail_create {
                return Err(ApiError::Status { action: "adding", collection: "records".into(), status: 500 });
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let record = (self.build)(draft, id.to_string());
            self.records.borrow_mut().insert(0, record.clone());
            Ok(self.echo_record.then_some(record))
        }
    }

    fn task_from(draft: &TaskDraft, id: String) -> Task {
        Task {
            id,
            title: draft.title.clone(),
            client_id: draft.client_id.clone(),
            completed: draft.completed,
            due_date: draft.due_date.clone(),
            priority: draft.priority.clone(),
        }
    }

    fn client_from(draft: &ClientDraft, id: String) -> Client {
        Client {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            company: draft.company.clone(),
            phone: draft.phone.clone(),
            status: draft.status.clone(),
            address: draft.address.clone(),
        }
    }

    fn task_draft(title: &str, client_id: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            client_id: client_id.to_string(),
            ..Default::default()
        }
    }

    fn existing_client() -> Client {
        Client {
            id: "1".to_string(),
            name: "Jean".to_string(),
            email: "jean@x.com".to_string(),
            company: "ABC".to_string(),
            phone: String::new(),
            status: ClientStatus::Prospect,
            address: String::new(),
        }
    }

    #[tokio::test]
    async fn test_load_populates_collection() {
        let backend = FakeBackend::new(vec![task_from(&task_draft("Call", "a"), "1".into())], task_from);
        let mounted = Mounted::<Task>::new(vec![]);

        assert!(load(&backend, &mounted).await);

        let state = mounted.snapshot();
        assert_eq!(backend.list_calls.get(), 1);
        assert_eq!(state.records.len(), 1);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_failed_load_sets_error_and_leaves_collection_empty() {
        let mut backend = FakeBackend::new(vec![], task_from);
        backend.fail_list = true;
        let mounted = Mounted::<Task>::new(vec![]);

        assert!(load(&backend, &mounted).await);

        let state = mounted.snapshot();
        assert!(state.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Unable to load records. Please try again."));
    }

    #[tokio::test]
    async fn test_missing_field_skips_network_and_state() {
        let backend = FakeBackend::new(vec![], task_from);
        let mounted = Mounted::new(vec![task_from(&task_draft("Call", "a"), "1".into())]);
        let before = mounted.snapshot();

        let result = create(&backend, &mounted, &task_draft("   ", "a")).await;
        assert_eq!(result, Err(ApiError::Validation { field: "title" }));

        let result = create(&backend, &mounted, &task_draft("Call", "")).await;
        assert_eq!(result, Err(ApiError::Validation { field: "client" }));

        assert_eq!(backend.create_calls.get(), 0);
        assert_eq!(mounted.snapshot(), before);
    }

    #[tokio::test]
    async fn test_created_client_is_prepended_with_server_id() {
        let backend = FakeBackend::new(vec![existing_client()], client_from);
        let mounted = Mounted::new(vec![existing_client()]);
        let draft = ClientDraft {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        };

        let result = create(&backend, &mounted, &draft).await.unwrap();

        let state = mounted.snapshot();
        assert_eq!(result, Created::Merged);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records[0].id, "2");
        assert_eq!(state.records[0].name, "Alice");
        assert_eq!(state.records[0].email, "a@x.com");
        assert_eq!(state.records[0].company, "Acme");
        assert_eq!(state.records[1], existing_client());
        assert_eq!(backend.list_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_ambiguous_create_reloads() {
        let mut backend = FakeBackend::new(vec![], task_from);
        backend.echo_record = false;
        let mounted = Mounted::<Task>::new(vec![]);

        let result = create(&backend, &mounted, &task_draft("Call", "a")).await;

        assert_eq!(result, Ok(Created::Reloaded));
        assert_eq!(backend.list_calls.get(), 1);
        let state = mounted.snapshot();
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].id, "1");
    }

    #[tokio::test]
    async fn test_failed_create_keeps_collection() {
        let mut backend = FakeBackend::new(vec![], task_from);
        backend.fail_create = true;
        let mounted = Mounted::new(vec![task_from(&task_draft("Call", "a"), "1".into())]);

        let result = create(&backend, &mounted, &task_draft("Visit", "a")).await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        let state = mounted.snapshot();
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Unable to add to records. Please try again."));
    }

    #[tokio::test]
    async fn test_concurrent_creates_both_land() {
        let backend = FakeBackend::new(vec![], task_from);
        let mounted = Mounted::<Task>::new(vec![]);
        let first = task_draft("First", "a");
        let second = task_draft("Second", "a");

        let (a, b) = tokio::join!(
            create(&backend, &mounted, &first),
            create(&backend, &mounted, &second),
        );

        assert!(a.is_ok() && b.is_ok());
        let mut titles: Vec<_> = mounted.snapshot().records.into_iter().map(|t| t.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_concurrent_reloads_answered_out_of_order() {
        let mut backend = FakeBackend::new(vec![], task_from);
        backend.echo_record = false;
        let first = task_from(&task_draft("First", "a"), "1".into());
        let second = task_from(&task_draft("Second", "a"), "2".into());
        // The first reload sees only the first task and answers last
        backend.scripted_lists.borrow_mut().extend([
            (5, vec![first.clone()]),
            (0, vec![second.clone(), first.clone()]),
        ]);
        let mounted = Mounted::<Task>::new(vec![]);
        let (a, b) = (task_draft("First", "a"), task_draft("Second", "a"));

        let (ra, rb) = tokio::join!(create(&backend, &mounted, &a), create(&backend, &mounted, &b));

        assert_eq!(ra, Ok(Created::Reloaded));
        assert_eq!(rb, Ok(Created::Reloaded));
        assert_eq!(backend.list_calls.get(), 2);
        let state = mounted.snapshot();
        assert!(!state.loading);
        let ids: Vec<_> = state.records.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_merged_record_survives_reload_started_before_it() {
        let backend = FakeBackend::new(vec![], task_from);
        let mounted = Mounted::<Task>::new(vec![]);
        // A reload whose snapshot predates the create
        backend.scripted_lists.borrow_mut().push_back((5, vec![]));

        let draft = task_draft("Call", "a");
        let (loaded, created) = tokio::join!(load(&backend, &mounted), create(&backend, &mounted, &draft));

        assert!(loaded);
        assert_eq!(created, Ok(Created::Merged));
        let state = mounted.snapshot();
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].title, "Call");
    }

    #[tokio::test]
    async fn test_unmounted_component_is_not_touched() {
        let backend = FakeBackend::new(vec![task_from(&task_draft("Call", "a"), "1".into())], task_from);
        let mounted = Mounted::<Task>::new(vec![]);
        mounted.alive.set(false);

        assert!(!load(&backend, &mounted).await);
        assert_eq!(backend.list_calls.get(), 0);

        // The write still reaches the backend, the stale result is dropped
        let result = create(&backend, &mounted, &task_draft("Visit", "a")).await;
        assert_eq!(result, Ok(Created::Merged));
        assert_eq!(backend.create_calls.get(), 1);
        assert!(mounted.snapshot().is_empty());
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(&task_draft("Call", "a")), Ok(()));
        assert_eq!(validate(&task_draft("", "a")), Err(ApiError::Validation { field: "title" }));
    }
}
