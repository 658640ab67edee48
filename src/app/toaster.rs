use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::notice::{LiveNotice, Notice, NoticeQueue};

/// Handle for showing transient notices, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
}

impl Notifier {
    pub fn notify(&self, notice: Notice) {
        log::debug!("notice: {}", notice.title);
        // may fire after an async share finished on a torn-down page
        self.queue.try_update(|q| q.push(notice));
    }

    fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier {
        queue: RwSignal::new(NoticeQueue::new()),
    };
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    view! {
        <div
            class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-72"
            aria-live="polite"
        >
            <For
                each=move || notifier.queue.with(|q| q.live().to_vec())
                key=|item| item.id
                children=|item| view! { <Toast item /> }
            />
        </div>
    }
}

#[component]
fn Toast(item: LiveNotice) -> impl IntoView {
    let notifier = use_notifier();
    let id = item.id;
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| notifier.dismiss(id),
        item.notice.duration.as_millis() as f64,
    );
    Effect::new(move |_| start(()));

    view! {
        <div
            role="status"
            class="rounded-md bg-white px-4 py-3 text-sm font-medium text-ulster-gray shadow-lg border border-gray-200"
        >
            {item.notice.title}
        </div>
    }
}
