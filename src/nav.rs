//! Navigation
//!
//! Route table and sidebar configuration. The sidebar receives its
//! configuration as a value so several layouts can coexist.

use crate::api::encode_segment;

/// Pages reachable from the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Clients,
    Appointments,
    Notes,
    Tasks,
    ClientProfile,
}

impl Page {
    /// Route pattern as registered with the router
    pub fn path(&self) -> &'static str {
        match self {
            Page::Clients => "/",
            Page::Appointments => "/rdv",
            Page::Notes => "/note",
            Page::Tasks => "/tasks",
            Page::ClientProfile => "/clients/:id",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Clients => "Client management",
            Page::Appointments => "Appointments",
            Page::Notes => "Notes",
            Page::Tasks => "Tasks",
            Page::ClientProfile => "Client profile",
        }
    }

    /// Resolve a location pathname (no query string) to its page
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Page::Clients),
            "/rdv" => Some(Page::Appointments),
            "/note" => Some(Page::Notes),
            "/tasks" => Some(Page::Tasks),
            _ => {
                let id = trimmed.strip_prefix("/clients/")?;
                (!id.is_empty() && !id.contains('/')).then_some(Page::ClientProfile)
            }
        }
    }
}

/// Link target for one client's profile
pub fn client_profile_path(client_id: &str) -> String {
    format!("/clients/{}", encode_segment(client_id))
}

/// Sections of the client profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Interactions,
    Tasks,
    Notes,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Interactions, ProfileTab::Tasks, ProfileTab::Notes];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Interactions => "Interactions",
            ProfileTab::Tasks => "Tasks",
            ProfileTab::Notes => "Notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: String,
    pub page: Page,
    pub icon: String,
}

impl NavItem {
    pub fn new(title: &str, page: Page, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            page,
            icon: icon.to_string(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.page.path()
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        Page::from_path(current_path) == Some(self.page)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarConfig {
    pub brand: String,
    /// Image shown next to the brand
    pub logo: Option<String>,
    pub items: Vec<NavItem>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            brand: "CapRelation".to_string(),
            logo: Some("/Logo.jpg".to_string()),
            items: vec![
                NavItem::new("Clients", Page::Clients, "📄"),
                NavItem::new("Appointments", Page::Appointments, "📅"),
                NavItem::new("Notes", Page::Notes, "📓"),
                NavItem::new("Tasks", Page::Tasks, "📋"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(Page::from_path("/"), Some(Page::Clients));
        assert_eq!(Page::from_path(""), Some(Page::Clients));
        assert_eq!(Page::from_path("/rdv"), Some(Page::Appointments));
        assert_eq!(Page::from_path("/note/"), Some(Page::Notes));
        assert_eq!(Page::from_path("/tasks"), Some(Page::Tasks));
        assert_eq!(Page::from_path("/clients/42"), Some(Page::ClientProfile));
        assert_eq!(Page::from_path("/clients/"), None);
        assert_eq!(Page::from_path("/clients/42/notes"), None);
        assert_eq!(Page::from_path("/palette"), None);
    }

    #[test]
    fn test_every_page_path_resolves_back() {
        for page in [Page::Clients, Page::Appointments, Page::Notes, Page::Tasks] {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path(&client_profile_path("a b")), Some(Page::ClientProfile));
    }

    #[test]
    fn test_default_sidebar() {
        let sidebar = SidebarConfig::default();
        let paths: Vec<_> = sidebar.items.iter().map(NavItem::path).collect();
        assert_eq!(paths, vec!["/", "/rdv", "/note", "/tasks"]);
        let active: Vec<_> = sidebar.items.iter().filter(|i| i.is_active("/note")).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Notes");
        assert!(sidebar.items.iter().all(|i| !i.is_active("/clients/3")));
    }

    #[test]
    fn test_alternate_sidebar_config() {
        let sidebar = SidebarConfig {
            brand: "Field team".to_string(),
            logo: None,
            items: vec![NavItem::new("My tasks", Page::Tasks, "✓")],
        };
        assert!(!sidebar.items[0].is_active("/"));
        assert!(sidebar.items[0].is_active("/tasks/"));
    }

    #[test]
    fn test_profile_path_encodes_id() {
        assert_eq!(client_profile_path("7"), "/clients/7");
        assert_eq!(client_profile_path("a/b"), "/clients/a%2Fb");
    }
}
