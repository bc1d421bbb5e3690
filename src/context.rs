//! Application Context
//!
//! Interaction state shared via Leptos Context API.

use leptos::prelude::*;

use crate::dom;
use crate::gallery::{Lightbox, PortfolioFilter};
use crate::models::SiteConfig;
use crate::mount::MountRegistry;
use crate::navigation::SectionState;
use crate::storage::LocalStorage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active section, back-section and drawer flag - read
    pub sections: ReadSignal<SectionState>,
    /// Active section, back-section and drawer flag - write
    set_sections: WriteSignal<SectionState>,
    /// Portfolio filter selection - read
    pub filter: ReadSignal<PortfolioFilter>,
    /// Portfolio filter selection - write
    set_filter: WriteSignal<PortfolioFilter>,
    /// Lightbox position - read
    pub lightbox: ReadSignal<Lightbox>,
    /// Lightbox position - write
    set_lightbox: WriteSignal<Lightbox>,
}

impl AppContext {
    pub fn new(
        sections: (ReadSignal<SectionState>, WriteSignal<SectionState>),
        filter: (ReadSignal<PortfolioFilter>, WriteSignal<PortfolioFilter>),
        lightbox: (ReadSignal<Lightbox>, WriteSignal<Lightbox>),
    ) -> Self {
        Self {
            sections: sections.0,
            set_sections: sections.1,
            filter: filter.0,
            set_filter: filter.1,
            lightbox: lightbox.0,
            set_lightbox: lightbox.1,
        }
    }

    /// Initial interaction state once the configuration is known
    pub fn start(&self, config: &SiteConfig, mounts: &MountRegistry) {
        self.set_sections.set(SectionState::restore(
            &config.navigation,
            mounts.section_ids(),
            &LocalStorage,
        ));
        self.set_filter.set(PortfolioFilter::new(&config.portfolio.filters));
        self.set_lightbox.set(Lightbox::new(config.portfolio.items.len()));
    }

    /// Follow a navigation link to `target`
    pub fn navigate(&self, target: &str) {
        let width = dom::viewport_width();
        self.set_sections.update(|state| {
            if let Some(transition) = state.navigate(target, width, &LocalStorage) {
                log::debug!("Section {} -> {}", transition.from, transition.to);
            }
        });
    }

    pub fn toggle_drawer(&self) {
        self.set_sections.update(|state| state.toggle_drawer());
    }

    pub fn select_filter(&self, filter_id: &str) {
        self.set_filter.update(|filter| filter.select(filter_id));
    }

    pub fn open_lightbox(&self, index: usize) {
        self.set_lightbox.update(|lightbox| {
            lightbox.open_at(index);
        });
    }

    pub fn next_item(&self) {
        self.set_lightbox.update(|lightbox| lightbox.next());
    }

    pub fn previous_item(&self) {
        self.set_lightbox.update(|lightbox| lightbox.previous());
    }

    pub fn close_lightbox(&self) {
        self.set_lightbox.update(|lightbox| lightbox.close());
    }
}
