//! Portfolio Section Component
//!
//! Filter buttons and cards; clicks are delegated to the filter and lightbox.
//! The markup is built once and filter changes toggle classes on the
//! existing elements so CSS transitions run on the same nodes.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::dom;
use crate::gallery::{ItemMarker, PortfolioFilter};
use crate::render::render_portfolio;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let container = NodeRef::<leptos::html::Div>::new();

    let markup = Memo::new(move |_| {
        let filter = ctx.filter.get_untracked();
        store.config().with(|c| {
            c.as_ref()
                .map(|c| render_portfolio(&c.portfolio, &filter))
                .unwrap_or_default()
        })
    });

    Effect::new(move |_| {
        let filter = ctx.filter.get();
        if let Some(root) = container.get() {
            apply_filter(&root, &filter);
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(filter_id) = dom::closest_attribute(&ev, ".portfolio-filter [data-filter]", "data-filter") {
            ctx.select_filter(&filter_id);
            return;
        }
        let index = dom::closest_attribute(&ev, ".portfolio-item", "data-index")
            .and_then(|i| i.parse::<usize>().ok());
        if let Some(index) = index {
            ctx.open_lightbox(index);
        }
    };

    view! {
        <div
            class="portfolio-content"
            node_ref=container
            inner_html=move || markup.get()
            on:click=on_click
        ></div>
    }
}

/// Move the `active` highlight and the show/hide markers onto the rendered nodes
fn apply_filter(root: &web_sys::Element, filter: &PortfolioFilter) {
    for button in dom::query_all(root, "[data-filter]") {
        let id = button.get_attribute("data-filter").unwrap_or_default();
        dom::set_class(&button, "active", filter.is_highlighted(&id));
    }

    for card in dom::query_all(root, ".portfolio-item[data-category]") {
        let category = card.get_attribute("data-category").unwrap_or_default();
        let Some(marker) = filter.marker(&category) else {
            continue;
        };
        dom::set_class(&card, ItemMarker::Show.as_class(), marker == ItemMarker::Show);
        dom::set_class(&card, ItemMarker::Hide.as_class(), marker == ItemMarker::Hide);
    }
}
