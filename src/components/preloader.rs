//! Preloader Component
//!
//! Fades out once the app is mounted, then leaves the layout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::settings::PRELOADER_FADE_MS;

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Visible,
    Fading,
    Hidden,
}

#[component]
pub fn Preloader() -> impl IntoView {
    let (stage, set_stage) = signal(Stage::Visible);

    Effect::new(move |_| {
        set_stage.set(Stage::Fading);
        spawn_local(async move {
            TimeoutFuture::new(PRELOADER_FADE_MS).await;
            set_stage.set(Stage::Hidden);
        });
    });

    view! {
        <div
            class=move || if stage.get() == Stage::Visible { "preloader" } else { "preloader opacity-0" }
            style:display=move || if stage.get() == Stage::Hidden { "none" } else { "block" }
        >
            <div class="box">
                <div></div>
                <div></div>
                <div></div>
            </div>
        </div>
    }
}
