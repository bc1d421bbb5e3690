//! Mount Point Registry
//!
//! The page shell gets one section pane per navigation entry that names a
//! known section. Navigation and home are required mounts; the rest are
//! optional and skipped quietly when the configuration leaves them out.

use crate::models::NavItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mount {
    Navigation,
    Home,
    About,
    Portfolio,
    Blog,
    Contact,
}

impl Mount {
    pub const ALL: [Mount; 6] = [
        Mount::Navigation,
        Mount::Home,
        Mount::About,
        Mount::Portfolio,
        Mount::Blog,
        Mount::Contact,
    ];

    /// Section anchor id; the navigation mount has none
    pub fn section_id(self) -> Option<&'static str> {
        match self {
            Mount::Navigation => None,
            Mount::Home => Some("home"),
            Mount::About => Some("about"),
            Mount::Portfolio => Some("portfolio"),
            Mount::Blog => Some("blog"),
            Mount::Contact => Some("contact"),
        }
    }

    pub fn for_section(id: &str) -> Option<Mount> {
        Self::ALL.into_iter().find(|m| m.section_id() == Some(id))
    }

    pub fn is_required(self) -> bool {
        matches!(self, Mount::Navigation | Mount::Home)
    }
}

/// Mounts present in the shell built from the navigation list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MountRegistry {
    present: Vec<Mount>,
    panes: Vec<NavItem>,
}

impl MountRegistry {
    pub fn from_navigation(navigation: &[NavItem]) -> Self {
        let mut present = Vec::new();
        if !navigation.is_empty() {
            present.push(Mount::Navigation);
        }
        let mut panes = Vec::new();
        for item in navigation {
            match Mount::for_section(&item.id) {
                Some(mount) => {
                    present.push(mount);
                    panes.push(item.clone());
                }
                None => log::warn!("Navigation entry '{}' has no section to show", item.id),
            }
        }
        Self { present, panes }
    }

    pub fn contains(&self, mount: Mount) -> bool {
        self.present.contains(&mount)
    }

    /// Navigation entries that get a section pane, in menu order
    pub fn panes(&self) -> &[NavItem] {
        &self.panes
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.panes.iter().map(|item| item.id.clone()).collect()
    }

    pub fn missing(&self) -> Vec<Mount> {
        Mount::ALL.into_iter().filter(|m| !self.contains(*m)).collect()
    }

    /// Log absent mounts. Returns `false` when a required mount is missing.
    pub fn report(&self) -> bool {
        let mut complete = true;
        for mount in self.missing() {
            if mount.is_required() {
                log::error!("Required mount {:?} is missing from the configuration", mount);
                complete = false;
            } else {
                log::debug!("Optional mount {:?} not configured, skipping", mount);
            }
        }
        complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(ids: &[&str]) -> Vec<NavItem> {
        ids.iter()
            .map(|id| NavItem {
                id: id.to_string(),
                icon: String::new(),
                label: id.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_panes_follow_known_sections() {
        let registry = MountRegistry::from_navigation(&nav(&["home", "talks", "contact"]));
        assert_eq!(registry.section_ids(), vec!["home".to_string(), "contact".to_string()]);
        assert!(registry.contains(Mount::Navigation));
        assert!(registry.contains(Mount::Contact));
        assert!(!registry.contains(Mount::Portfolio));
    }

    #[test]
    fn test_optional_mounts_missing_is_complete() {
        let registry = MountRegistry::from_navigation(&nav(&["home"]));
        assert_eq!(
            registry.missing(),
            vec![Mount::About, Mount::Portfolio, Mount::Blog, Mount::Contact]
        );
        assert!(registry.report());
    }

    #[test]
    fn test_required_mount_missing() {
        assert!(!MountRegistry::from_navigation(&nav(&["about"])).report());
        assert!(!MountRegistry::from_navigation(&[]).report());
    }

    #[test]
    fn test_for_section() {
        assert_eq!(Mount::for_section("portfolio"), Some(Mount::Portfolio));
        assert_eq!(Mount::for_section("nav"), None);
        assert!(Mount::Navigation.is_required());
        assert!(!Mount::Blog.is_required());
    }
}
