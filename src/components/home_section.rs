//! Home Section Component
//!
//! Renders the home fragment and starts the typing effect once it is in place.

use leptos::prelude::*;

use crate::render::{render_home, TYPING_TARGET_CLASS};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::typing;

#[component]
pub fn HomeSection() -> impl IntoView {
    let store = use_app_store();
    let container = NodeRef::<leptos::html::Div>::new();

    let markup = Memo::new(move |_| {
        store.config().with(|c| c.as_ref().map(|c| render_home(&c.home)).unwrap_or_default())
    });

    // Runs after the markup has been applied
    Effect::new(move |_| {
        markup.track();
        let Some(home) = store.config().with(|c| c.as_ref().map(|c| c.home.clone())) else {
            return;
        };
        let Some(container) = container.get() else {
            return;
        };
        let selector = format!(".{}", TYPING_TARGET_CLASS);
        if let Ok(Some(target)) = container.query_selector(&selector) {
            typing::start(&target, &home);
        }
    });

    view! {
        <div node_ref=container inner_html=move || markup.get()></div>
    }
}
