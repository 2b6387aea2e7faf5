use std::{sync::Arc, time::Duration};

use leptos::{ev, html, prelude::*, task::spawn_local};
use wasm_bindgen_futures::JsFuture;

use crate::media::{
    crossfade_transition, Backdrop, BackgroundController, MediaHost, PageHost, PlayCallback,
    PlaybackError,
};

/// `HTMLMediaElement.HAVE_CURRENT_DATA`
const HAVE_CURRENT_DATA: u16 = 2;

pub struct WebMedia {
    video: NodeRef<html::Video>,
}

impl MediaHost for WebMedia {
    fn silence(&self) {
        if let Some(el) = self.video.get_untracked() {
            el.set_muted(true);
            el.set_volume(0.0);
        }
    }

    fn play(&self, done: PlayCallback) {
        let Some(el) = self.video.get_untracked() else {
            done(Err(PlaybackError::Detached));
            return;
        };
        match el.play() {
            Ok(promise) => spawn_local(async move {
                let res = JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| PlaybackError::Rejected(format!("{e:?}")));
                done(res);
            }),
            Err(e) => done(Err(PlaybackError::Rejected(format!("{e:?}")))),
        }
    }

    fn has_current_data(&self) -> bool {
        self.video
            .get_untracked()
            .is_some_and(|el| el.ready_state() >= HAVE_CURRENT_DATA)
    }
}

pub struct WebPage;

impl PageHost for WebPage {
    type Listener = [WindowListenerHandle; 2];

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) {
        set_timeout(task, delay);
    }

    fn on_first_interaction(
        &self,
        handler: Arc<dyn Fn() + Send + Sync>,
    ) -> Option<Self::Listener> {
        let on_click = {
            let handler = handler.clone();
            window_event_listener(ev::click, move |_| handler())
        };
        let on_touch = window_event_listener(ev::touchstart, move |_| handler());
        Some([on_click, on_touch])
    }

    fn release(&self, listener: Self::Listener) {
        for handle in listener {
            handle.remove();
        }
    }
}

pub type WebController = BackgroundController<WebMedia, WebPage>;

/// Reactive handle on the page's background media, shared through context.
#[derive(Clone, Copy)]
pub struct BackgroundMedia {
    pub backdrop: ReadSignal<Backdrop>,
    video: NodeRef<html::Video>,
    controller: StoredValue<WebController>,
}

impl BackgroundMedia {
    pub fn play_now(&self) {
        self.controller.with_value(|c| {
            c.manual_play();
        });
    }

    fn loaded(&self) {
        self.controller.with_value(|c| c.on_loaded_data());
    }

    fn errored(&self) {
        self.controller.with_value(|c| c.on_error());
    }
}

/// Creates the controller for the current view. It is mounted once the view
/// is live in the browser and unmounted with the view.
pub fn use_background_media() -> BackgroundMedia {
    let video = NodeRef::<html::Video>::new();
    let (backdrop, set_backdrop) = signal(Backdrop::default());
    let controller = StoredValue::new(BackgroundController::new(
        WebMedia { video },
        WebPage,
        move |b| set_backdrop.set(b),
    ));

    Effect::watch(
        || (),
        move |_, _, _| controller.with_value(|c| c.mount()),
        true,
    );
    on_cleanup(move || {
        controller.try_with_value(|c| c.unmount());
    });

    BackgroundMedia {
        backdrop,
        video,
        controller,
    }
}

#[component]
pub fn VideoBackground(#[prop(into)] src: String) -> impl IntoView {
    let media = expect_context::<BackgroundMedia>();
    let transition = crossfade_transition();

    view! {
        <div class="video-background">
            <video
                node_ref=media.video
                class="background-video"
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                preload="auto"
                style:transition=transition.clone()
                style:opacity=move || media.backdrop.get().video_opacity().to_string()
                on:loadeddata=move |_| media.loaded()
                on:error=move |_| media.errored()
            >
                <source src=src type="video/mp4" />
            </video>
            <div
                class="animated-bg-fallback"
                style:transition=transition
                style:opacity=move || media.backdrop.get().fallback_opacity().to_string()
            />
        </div>
        <div class="video-overlay"></div>
    }
}
