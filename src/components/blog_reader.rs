//! Blog Reader Component
//!
//! Blog list with a collapsible detail view. Each open gets a fetch token so
//! a slow response cannot replace a newer one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::blog::{BlogReader as ReaderState, ReaderView};
use crate::dom;
use crate::fetch;
use crate::models::BlogPost;
use crate::render::{render_blog_error, render_blog_list, render_blog_post};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BlogReader() -> impl IntoView {
    let store = use_app_store();
    let (reader, set_reader) = signal(ReaderState::default());

    let list_markup = Memo::new(move |_| store.blogs().with(|index| render_blog_list(index.list())));

    let detail_markup = move || {
        reader.with(|r| match r.view() {
            ReaderView::List | ReaderView::Loading => String::new(),
            ReaderView::Post(post) => render_blog_post(post),
            ReaderView::Failed => render_blog_error(),
        })
    };

    let open = move |ev: web_sys::MouseEvent| {
        let Some(file) = dom::closest_attribute(&ev, ".blog-item", "data-blog") else {
            return;
        };
        let mut token = None;
        set_reader.update(|r| token = Some(r.begin()));
        let Some(token) = token else {
            return;
        };

        spawn_local(async move {
            let result = fetch::fetch_json::<BlogPost>(&file).await;
            if let Err(err) = &result {
                log::error!("Error loading blog content: {}", err);
            }
            set_reader.update(|r| {
                if !r.finish(token, result) {
                    log::debug!("Dropping stale response for {}", file);
                }
            });
        });
    };

    let back = move |ev: web_sys::MouseEvent| {
        if dom::closest(&ev, "#back-to-list").is_some() {
            set_reader.update(|r| r.back());
        }
    };

    view! {
        <div
            id="blog-list"
            class="row blog-list"
            style:display=move || if reader.with(|r| r.list_visible()) { "flex" } else { "none" }
            inner_html=move || list_markup.get()
            on:click=open
        ></div>
        <div
            id="blog-content"
            class="blog-content"
            style:display=move || if reader.with(|r| r.detail_visible()) { "block" } else { "none" }
            inner_html=detail_markup
            on:click=back
        ></div>
    }
}
