//! Aside Navigation Component
//!
//! Drawer with the rendered navigation menu and the mobile toggler.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::dom;
use crate::render::render_navigation;
use crate::settings::DEFAULT_SECTION;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Aside() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let nav_markup = Memo::new(move |_| {
        ctx.sections.with(|sections| {
            store.config().with(|config| {
                config
                    .as_ref()
                    .map(|c| render_navigation(&c.navigation, |id| sections.is_link_active(id)))
                    .unwrap_or_default()
            })
        })
    });

    let logo = Memo::new(move |_| {
        store.config().with(|config| config.as_ref().map(|c| c.home.name.clone()).unwrap_or_default())
    });

    // Links are injected markup, so clicks are delegated from the list
    let on_nav_click = move |ev: web_sys::MouseEvent| {
        let Some(href) = dom::closest_attribute(&ev, "a[href]", "href") else {
            return;
        };
        ev.prevent_default();
        if let Some(target) = dom::href_target(&href) {
            ctx.navigate(target);
        }
    };

    let on_logo_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(DEFAULT_SECTION);
    };

    let drawer_open = move || ctx.sections.with(|s| s.drawer_open());

    view! {
        <div class=move || if drawer_open() { "aside open" } else { "aside" }>
            <div class="logo">
                <a href=format!("#{}", DEFAULT_SECTION) on:click=on_logo_click>
                    {move || logo.get()}
                </a>
            </div>
            <div
                class=move || if drawer_open() { "nav-toggler open" } else { "nav-toggler" }
                on:click=move |_| ctx.toggle_drawer()
            >
                <span></span>
            </div>
            <ul class="nav" inner_html=move || nav_markup.get() on:click=on_nav_click></ul>
        </div>
    }
}
