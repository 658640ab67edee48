use leptos::{either::EitherOf3, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::catalog::{CatalogProvider, StaticCatalog};
use crate::config::{CATALOG_LOAD_DELAY, PAGE_HEADING, PAGE_TAGLINE};
use crate::page::PageState;
use crate::player::PlayerRegistry;

use super::video_card::VideoCard;

#[component]
pub fn VideoFeed() -> impl IntoView {
    let state = RwSignal::new(PageState::Loading);
    provide_context(RwSignal::new(PlayerRegistry::new()));

    // the timeout is cleared if the feed is torn down first
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let result = StaticCatalog.fetch_catalog();
            if let Err(e) = &result {
                log::warn!("catalog failed to load: {e}");
            }
            state.try_update(|s| *s = std::mem::take(s).resolve(result));
        },
        CATALOG_LOAD_DELAY.as_millis() as f64,
    );
    Effect::new(move |_| start(()));

    view! {
        <Title text="Videos" />
        {move || match state.get() {
            PageState::Loading => EitherOf3::A(view! { <Spinner /> }),
            PageState::Ready(videos) => {
                EitherOf3::B(
                    view! {
                        <div class="min-h-screen bg-gray-50 py-8 px-4">
                            <div class="max-w-4xl mx-auto">
                                <header class="text-center mb-8">
                                    <h1 class="text-3xl font-bold text-ulster-blue mb-2">
                                        {PAGE_HEADING}
                                    </h1>
                                    <p class="text-ulster-gray">{PAGE_TAGLINE}</p>
                                </header>
                                <div class="space-y-6">
                                    <For
                                        each=move || videos.clone()
                                        key=|video| video.id.clone()
                                        children=|video| {
                                            view! { <VideoCard video_id=video.id title=video.title /> }
                                        }
                                    />
                                </div>
                            </div>
                        </div>
                    },
                )
            }
            PageState::Failed(reason) => {
                EitherOf3::C(
                    view! {
                        <div class="min-h-screen flex items-center justify-center">
                            <p class="text-red-500">{reason}</p>
                        </div>
                    },
                )
            }
        }}
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div
                role="status"
                aria-label="Loading videos"
                class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-ulster-blue"
            ></div>
        </div>
    }
}
