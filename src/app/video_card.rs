use leptos::{prelude::*, task::spawn_local};

use crate::catalog::{embed_url, VideoDescriptor};
use crate::config::PLAYER_ALLOW;
use crate::interaction::CardState;
use crate::player::PlayerRegistry;
use crate::share::{plan_share, SharePlatform};

use super::browser;
use super::toaster::use_notifier;

const MENU_PLATFORMS: [(SharePlatform, &str); 3] = [
    (SharePlatform::Email, "✉"),
    (SharePlatform::Facebook, "f"),
    (SharePlatform::Instagram, "◎"),
];

#[component]
pub fn VideoCard(#[prop(into)] video_id: String, #[prop(into)] title: String) -> impl IntoView {
    let notifier = use_notifier();
    let players = expect_context::<RwSignal<PlayerRegistry>>();
    let video = StoredValue::new(VideoDescriptor::new(video_id, title));

    let key = players.update_untracked(|r| r.register());
    on_cleanup(move || {
        players.try_update_untracked(|r| r.unregister(key));
    });

    let (state, set_state) = signal(CardState::new());
    let (menu_open, set_menu_open) = signal(false);
    let playing = Memo::new(move |_| players.with(|r| r.is_playing(key)));

    let on_like = move |_| {
        if let Some(notice) = set_state.try_update(|s| s.toggle_like()) {
            notifier.notify(notice);
        }
    };

    let on_follow = move |_| {
        if let Some(notice) = set_state.try_update(|s| s.toggle_follow()) {
            notifier.notify(notice);
        }
    };

    let on_player_click = move |_| {
        if let Some(res) = players.try_update(|r| r.toggle(key)) {
            log::debug!(
                "{} playing={} stopped={:?}",
                video.with_value(|v| v.id.clone()),
                res.now_playing,
                res.stopped
            );
        }
    };

    let share = move |platform: SharePlatform| {
        set_menu_open.set(false);
        let action = video.with_value(|v| plan_share(platform, &v.id, &v.title));
        spawn_local(async move {
            match browser::perform(action).await {
                Ok(Some(notice)) => notifier.notify(notice),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("share via {} failed: {e}", platform.label());
                    notifier.notify(e.notice());
                }
            }
        });
    };

    let title = video.with_value(|v| v.title.clone());

    view! {
        <article class="relative w-full max-w-2xl mx-auto bg-white rounded-lg shadow-lg mb-6 animate-video-scroll">
            <div class="aspect-video rounded-t-lg overflow-hidden" on:click=on_player_click>
                <iframe
                    width="100%"
                    height="100%"
                    src=move || video.with_value(|v| embed_url(&v.id, playing.get()))
                    title=title.clone()
                    allow=PLAYER_ALLOW
                    allowfullscreen=true
                    class="w-full h-full"
                ></iframe>
            </div>

            <div class="p-4">
                <h3 class="text-lg font-semibold text-ulster-gray mb-3 line-clamp-2">{title}</h3>

                <div class="flex justify-between items-center">
                    <div class="flex gap-4">
                        <button
                            type="button"
                            aria-pressed=move || state.get().liked.to_string()
                            class=move || {
                                format!(
                                    "flex items-center gap-2 px-3 py-1.5 rounded-md text-sm hover:bg-gray-100 {}",
                                    state.get().like_class(),
                                )
                            }
                            on:click=on_like
                        >
                            <span aria-hidden="true">
                                {move || if state.get().liked { "♥" } else { "♡" }}
                            </span>
                            "Like"
                        </button>

                        <div class="relative">
                            <button
                                type="button"
                                aria-haspopup="menu"
                                aria-expanded=move || menu_open.get().to_string()
                                class="flex items-center gap-2 px-3 py-1.5 rounded-md text-sm text-ulster-gray hover:bg-gray-100"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                <span aria-hidden="true">"⤴"</span>
                                "Share"
                            </button>
                            <Show when=move || menu_open.get()>
                                <ul
                                    role="menu"
                                    class="absolute left-0 z-10 mt-1 w-40 rounded-md border border-gray-200 bg-white py-1 shadow-lg"
                                >
                                    {MENU_PLATFORMS
                                        .into_iter()
                                        .map(|(platform, icon)| {
                                            view! {
                                                <li
                                                    role="menuitem"
                                                    class="flex items-center gap-2 px-3 py-2 text-sm cursor-pointer hover:bg-gray-100"
                                                    on:click=move |_| share(platform)
                                                >
                                                    <span aria-hidden="true" class="w-4 text-center">
                                                        {icon}
                                                    </span>
                                                    <span>{platform.label()}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </Show>
                        </div>
                    </div>

                    <button
                        type="button"
                        aria-pressed=move || state.get().following.to_string()
                        class=move || {
                            format!(
                                "flex items-center gap-2 px-3 py-1.5 rounded-md text-sm font-medium {}",
                                state.get().follow_appearance().class(),
                            )
                        }
                        on:click=on_follow
                    >
                        <span aria-hidden="true">"👤"</span>
                        {move || state.get().follow_appearance().label()}
                    </button>
                </div>
            </div>
        </article>
    }
}
