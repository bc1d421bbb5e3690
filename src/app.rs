//! Portfolio App
//!
//! Root component: loads the configuration and blog index, then builds the
//! page shell with one section pane per configured section.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::blog::BlogIndex;
use crate::components::{Aside, LightboxOverlay, Preloader, SectionPane};
use crate::config::ConfigStore;
use crate::context::AppContext;
use crate::gallery::{Lightbox, PortfolioFilter};
use crate::mount::MountRegistry;
use crate::navigation::SectionState;
use crate::settings::{BLOG_INDEX_PATH, CONFIG_PATH};
use crate::dom;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(
        signal(SectionState::default()),
        signal(PortfolioFilter::default()),
        signal(Lightbox::default()),
    );
    provide_context(ctx);

    // Configuration first; nothing renders until it resolves
    Effect::new(move |_| {
        spawn_local(async move {
            let mut config_store = ConfigStore::new(CONFIG_PATH);
            let Some(config) = config_store.load().await.cloned() else {
                log::error!("Failed to load configuration");
                return;
            };

            if let Some(name) = config_store.get("home.name").and_then(|v| v.as_str()) {
                dom::set_document_title(name);
            }

            let mounts = MountRegistry::from_navigation(&config.navigation);
            if !mounts.report() {
                log::error!("Required mount points missing, page not rendered");
                return;
            }
            ctx.start(&config, &mounts);

            *store.mounts().write() = mounts;
            *store.config().write() = Some(config);
            log::info!("App initialized successfully");
        });
    });

    // Blog index is independent of the configuration
    Effect::new(move |_| {
        spawn_local(async move {
            let index = BlogIndex::load(BLOG_INDEX_PATH).await;
            *store.blogs().write() = index;
        });
    });

    let loaded = move || store.config().with(|c| c.is_some());

    view! {
        <Preloader />
        <div class="main-container">
            <Aside />
            <div class="main-content">
                <Show when=loaded>
                    <For
                        each=move || store.mounts().with(|m| m.panes().to_vec())
                        key=|item| item.id.clone()
                        children=move |item| view! { <SectionPane item=item /> }
                    />
                </Show>
            </div>
        </div>
        <LightboxOverlay />
    }
}
