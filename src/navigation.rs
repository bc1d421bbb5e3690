//! Section Navigation State Machine
//!
//! Tracks the single active section, the section being left (back-section
//! marker) and the mobile drawer flag. Every transition is persisted under
//! one storage key and restored at startup.

use crate::models::NavItem;
use crate::settings::{DRAWER_BREAKPOINT_PX, SECTION_STORAGE_KEY};
use crate::storage::KeyValueStore;

/// Result of one navigation click
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub drawer_toggled: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionState {
    /// Navigation link ids in menu order
    links: Vec<String>,
    /// Section ids that exist in the page shell
    sections: Vec<String>,
    current: String,
    back_section: Option<String>,
    drawer_open: bool,
}

impl SectionState {
    /// Start on the first navigation entry
    pub fn new(navigation: &[NavItem], sections: Vec<String>) -> Self {
        let links: Vec<String> = navigation.iter().map(|item| item.id.clone()).collect();
        let current = links.first().cloned().unwrap_or_default();
        Self {
            links,
            sections,
            current,
            back_section: None,
            drawer_open: false,
        }
    }

    /// Start on the persisted section when it still has both a link and a
    /// section; otherwise fall back to the default start.
    pub fn restore(navigation: &[NavItem], sections: Vec<String>, storage: &dyn KeyValueStore) -> Self {
        let mut state = Self::new(navigation, sections);
        match storage.get(SECTION_STORAGE_KEY) {
            Some(saved) if state.has_link(&saved) && state.has_section(&saved) => {
                log::debug!("Restoring section '{}'", saved);
                state.current = saved;
            }
            Some(saved) => log::debug!("Ignoring saved section '{}'", saved),
            None => {}
        }
        state
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn back_section(&self) -> Option<&str> {
        self.back_section.as_deref()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn has_link(&self, id: &str) -> bool {
        self.links.iter().any(|link| link == id)
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section == id)
    }

    /// Follow a navigation link.
    ///
    /// Order: the section being left becomes the back-section, the active
    /// marker moves to `target`, the id is persisted, and narrow viewports
    /// toggle the drawer. Ids without a navigation link are ignored.
    pub fn navigate(&mut self, target: &str, viewport_width: f64, storage: &dyn KeyValueStore) -> Option<Transition> {
        if !self.has_link(target) {
            log::debug!("Ignoring navigation to unknown section '{}'", target);
            return None;
        }

        let from = std::mem::replace(&mut self.current, target.to_string());
        self.back_section = Some(from.clone()).filter(|id| !id.is_empty());
        storage.set(SECTION_STORAGE_KEY, target);

        let drawer_toggled = viewport_width < DRAWER_BREAKPOINT_PX;
        if drawer_toggled {
            self.toggle_drawer();
        }

        Some(Transition {
            from,
            to: target.to_string(),
            drawer_toggled,
        })
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn is_link_active(&self, id: &str) -> bool {
        self.current() == id
    }

    /// Class list for a section element
    pub fn section_class(&self, id: &str) -> String {
        let mut classes = vec!["section"];
        if self.is_link_active(id) && self.has_section(id) {
            classes.push("active");
        }
        if self.back_section() == Some(id) {
            classes.push("back-section");
        }
        if self.drawer_open {
            classes.push("open");
        }
        classes.join(" ")
    }
}
