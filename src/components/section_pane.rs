//! Section Pane Component
//!
//! One anchor-addressable section of the page with its mount point.

use leptos::prelude::*;

use crate::components::{BlogReader, HomeSection, PortfolioSection};
use crate::context::AppContext;
use crate::models::NavItem;
use crate::mount::Mount;
use crate::render::{render_about, render_contact};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SectionPane(item: NavItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id.clone();
    let class = {
        let id = id.clone();
        move || ctx.sections.with(|s| s.section_class(&id))
    };

    let content = match Mount::for_section(&id) {
        Some(Mount::Home) => view! { <HomeSection /> }.into_any(),
        Some(Mount::Portfolio) => view! { <PortfolioSection /> }.into_any(),
        Some(Mount::Blog) => view! { <BlogReader /> }.into_any(),
        Some(Mount::About) => {
            let markup = move || {
                store.config().with(|c| c.as_ref().map(|c| render_about(&c.about)).unwrap_or_default())
            };
            view! { <div inner_html=markup></div> }.into_any()
        }
        Some(Mount::Contact) => {
            let markup = move || {
                store.config().with(|c| c.as_ref().and_then(|c| c.contact.as_ref()).map(render_contact).unwrap_or_default())
            };
            view! { <div inner_html=markup></div> }.into_any()
        }
        Some(Mount::Navigation) | None => view! { <div></div> }.into_any(),
    };

    let title = (Mount::for_section(&id) != Some(Mount::Home)).then(|| {
        view! {
            <div class="row">
                <div class="section-title padd-15">
                    <h2>{item.label.clone()}</h2>
                </div>
            </div>
        }
    });

    view! {
        <section class=class id=id>
            <div class="container">
                {title}
                {content}
            </div>
        </section>
    }
}
