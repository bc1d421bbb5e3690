//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::blog::BlogIndex;
use crate::models::SiteConfig;
use crate::mount::MountRegistry;

/// Loaded site data with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Validated configuration; `None` until loaded (or when loading failed)
    pub config: Option<SiteConfig>,
    /// Mount points built from the navigation list
    pub mounts: MountRegistry,
    /// Blog index, newest first
    pub blogs: BlogIndex,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
