//! Derived Views
//!
//! Pure functions recomputed from component state on every render.

use crate::models::{Client, ClientScoped, Task, TaskPriority};

/// Records attached to `client_id`, in their original relative order
pub fn by_client<T: ClientScoped + Clone>(records: &[T], client_id: &str) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.client_id() == client_id)
        .cloned()
        .collect()
}

/// Like `by_client`, but an empty selection shows every record
pub fn visible_for<T: ClientScoped + Clone>(records: &[T], selected_client: &str) -> Vec<T> {
    if selected_client.is_empty() {
        records.to_vec()
    } else {
        by_client(records, selected_client)
    }
}

/// Display name for a client id, for lists that only carry the id
pub fn client_name<'a>(clients: &'a [Client], client_id: &str) -> Option<&'a str> {
    clients
        .iter()
        .find(|c| c.id == client_id)
        .map(|c| c.name.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    #[default]
    All,
    Open,
    Done,
}

impl Completion {
    pub const ALL: [Completion; 3] = [Completion::All, Completion::Open, Completion::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Completion::All => "all",
            Completion::Open => "open",
            Completion::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Completion::All => "All",
            Completion::Open => "To do",
            Completion::Done => "Done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "open" => Completion::Open,
            "done" => Completion::Done,
            _ => Completion::All,
        }
    }
}

/// Extra narrowing of the task list: completion, priority, free-text search
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskFilter {
    pub completion: Completion,
    pub priority: Option<TaskPriority>,
    pub query: String,
}

impl TaskFilter {
    pub fn is_active(&self) -> bool {
        self.completion != Completion::All || self.priority.is_some() || !self.query.trim().is_empty()
    }

    /// Search is case-insensitive over the title and the client's name
    pub fn matches(&self, task: &Task, clients: &[Client]) -> bool {
        match self.completion {
            Completion::Open if task.completed => return false,
            Completion::Done if !task.completed => return false,
            _ => {}
        }

        if let Some(priority) = &self.priority {
            if task.priority.as_ref() != Some(priority) {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&query)
            || client_name(clients, &task.client_id)
                .map(|name| name.to_lowercase().contains(&query))
                .unwrap_or(false)
    }

    pub fn apply(&self, tasks: &[Task], clients: &[Client]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|t| self.matches(t, clients))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Appointment, ClientStatus};

    fn rdv(id: &str, client_id: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            title: format!("Rdv {}", id),
            client_id: client_id.to_string(),
            date: "2024-05-01T10:00".to_string(),
            location: None,
            description: None,
        }
    }

    fn task(id: &str, title: &str, client_id: &str, completed: bool, priority: Option<TaskPriority>) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            client_id: client_id.to_string(),
            completed,
            due_date: None,
            priority,
        }
    }

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@x.com", id),
            company: "Acme".to_string(),
            phone: String::new(),
            status: ClientStatus::Active,
            address: String::new(),
        }
    }

    #[test]
    fn test_by_client_keeps_relative_order() {
        let records = vec![rdv("1", "X"), rdv("2", "Y"), rdv("3", "X"), rdv("4", "Z")];
        let filtered = by_client(&records, "X");
        let ids: Vec<_> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_by_client_unknown_is_empty() {
        let records = vec![rdv("1", "X")];
        assert!(by_client(&records, "Q").is_empty());
    }

    #[test]
    fn test_empty_selection_shows_all() {
        let records = vec![rdv("1", "X"), rdv("2", "Y")];
        assert_eq!(visible_for(&records, ""), records);
        assert_eq!(visible_for(&records, "Y").len(), 1);
    }

    #[test]
    fn test_task_filter_completion_and_priority() {
        let tasks = vec![
            task("1", "Call", "a", false, Some(TaskPriority::High)),
            task("2", "Quote", "a", true, Some(TaskPriority::High)),
            task("3", "Visit", "b", false, Some(TaskPriority::Low)),
            task("4", "Email", "b", false, None),
        ];

        let open = TaskFilter { completion: Completion::Open, ..Default::default() };
        assert_eq!(open.apply(&tasks, &[]).len(), 3);

        let done_high = TaskFilter {
            completion: Completion::Done,
            priority: Some(TaskPriority::High),
            ..Default::default()
        };
        let ids: Vec<_> = done_high.apply(&tasks, &[]).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["2"]);

        assert!(!TaskFilter::default().is_active());
        assert!(done_high.is_active());
    }

    #[test]
    fn test_task_search_matches_title_and_client_name() {
        let clients = vec![client("a", "Jean Dupont"), client("b", "Marie Martin")];
        let tasks = vec![
            task("1", "Prepare deck", "a", false, None),
            task("2", "Send quote", "b", false, None),
        ];

        let by_title = TaskFilter { query: "DECK".to_string(), ..Default::default() };
        assert_eq!(by_title.apply(&tasks, &clients)[0].id, "1");

        let by_name = TaskFilter { query: "martin".to_string(), ..Default::default() };
        assert_eq!(by_name.apply(&tasks, &clients)[0].id, "2");

        let nothing = TaskFilter { query: "zzz".to_string(), ..Default::default() };
        assert!(nothing.apply(&tasks, &clients).is_empty());
    }

    #[test]
    fn test_client_name_lookup() {
        let clients = vec![client("a", "Jean")];
        assert_eq!(client_name(&clients, "a"), Some("Jean"));
        assert_eq!(client_name(&clients, "b"), None);
    }

    #[test]
    fn test_completion_from_str() {
        assert_eq!(Completion::from_str("done"), Completion::Done);
        assert_eq!(Completion::from_str("whatever"), Completion::All);
    }
}
