//! Lightbox Overlay Component
//!
//! Shows one portfolio image with caption and counter. Closes on the close
//! control or the backdrop; clicks elsewhere inside keep it open.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::dom;
use crate::models::PortfolioItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LightboxOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let current = Memo::new(move |_| {
        let index = ctx.lightbox.with(|l| l.index());
        store.config().with(|c| {
            c.as_ref()
                .and_then(|c| c.portfolio.items.get(index).cloned())
        })
    });
    let image = move || current.get().map(|item: PortfolioItem| item.image).unwrap_or_default();
    let alt = move || current.get().map(|item| item.alt).unwrap_or_default();
    let caption = move || current.get().map(|item| item.title).unwrap_or_default();
    let counter = move || ctx.lightbox.with(|l| l.counter());

    let on_click = move |ev: web_sys::MouseEvent| {
        if dom::target_matches(&ev, ".lightbox, .lightbox-close") {
            ctx.close_lightbox();
        }
    };

    view! {
        <div
            class=move || if ctx.lightbox.with(|l| l.is_open()) { "lightbox open" } else { "lightbox" }
            on:click=on_click
        >
            <div class="lightbox-content">
                <div class="lightbox-close">"×"</div>
                <img src=image alt=alt class="lightbox-img" />
                <div class="lightbox-caption">
                    <div class="caption-text">{caption}</div>
                    <div class="caption-counter">{counter}</div>
                </div>
            </div>
            <div class="lightbox-controls">
                <div class="prev-item" on:click=move |_| ctx.previous_item()>
                    <i class="fa fa-angle-left"></i>
                </div>
                <div class="next-item" on:click=move |_| ctx.next_item()>
                    <i class="fa fa-angle-right"></i>
                </div>
            </div>
        </div>
    }
}
