//! Background media sequencing.
//!
//! The page shows a looping, muted video behind its content and an animated
//! gradient underneath it. Both layers are always present; which one
//! dominates is decided by [`Backdrop`], and the [`BackgroundController`]
//! moves between the two variants as the media element and the user react.
//!
//! The controller never touches the DOM directly. It talks to the page through
//! [`MediaHost`] and [`PageHost`] so it can be driven by the browser in
//! `app::backdrop` and by plain structs in tests.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use thiserror::Error;

/// Delay between mounting and the first autoplay attempt.
pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(100);
/// Length of the opacity transition between the two layers.
pub const CROSSFADE: Duration = Duration::from_secs(2);

/// Which background layer is currently dominant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    ShowingFallback,
    ShowingVideo,
}

/// Terminal outcomes reported by the media element or a playback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSignal {
    Playing,
    PlayRejected,
    LoadedData,
    LoadError,
}

impl Backdrop {
    pub fn next(self, signal: MediaSignal) -> Self {
        match signal {
            MediaSignal::Playing | MediaSignal::LoadedData => Self::ShowingVideo,
            MediaSignal::LoadError => Self::ShowingFallback,
            MediaSignal::PlayRejected => self,
        }
    }

    pub fn is_video_ready(self) -> bool {
        self == Self::ShowingVideo
    }

    pub fn video_opacity(self) -> u8 {
        match self {
            Self::ShowingVideo => 1,
            Self::ShowingFallback => 0,
        }
    }

    pub fn fallback_opacity(self) -> u8 {
        1 - self.video_opacity()
    }

    /// The manual "play" affordance is only offered while the video is not
    /// showing.
    pub fn offers_manual_play(self) -> bool {
        !self.is_video_ready()
    }
}

/// CSS `transition` value shared by both layers.
pub fn crossfade_transition() -> String {
    format!("opacity {}s ease", CROSSFADE.as_secs())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("playback request rejected: {0}")]
    Rejected(String),
    #[error("media element is not attached")]
    Detached,
}

/// What caused a call to [`BackgroundController::attempt_play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayTrigger {
    Scheduled,
    Interaction,
    Manual,
}

pub type PlayCallback = Box<dyn FnOnce(Result<(), PlaybackError>) + Send>;

/// The media element the backdrop plays.
pub trait MediaHost {
    /// Mute the element and drop its volume to zero. Browsers refuse
    /// programmatic playback of audible media without a gesture.
    fn silence(&self);
    /// Request playback. `done` runs once the request settles, possibly
    /// before `play` returns.
    fn play(&self, done: PlayCallback);
    /// Whether the element already has a frame to render.
    fn has_current_data(&self) -> bool;
}

/// The page hosting the backdrop: timers and page-wide listeners.
pub trait PageHost {
    type Listener: Send;

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce() + Send>);
    /// Listen for the first pointer or touch interaction anywhere on the page.
    /// Returns `None` when there is nothing to listen on.
    fn on_first_interaction(&self, handler: Arc<dyn Fn() + Send + Sync>)
        -> Option<Self::Listener>;
    fn release(&self, listener: Self::Listener);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

struct Inner<L> {
    backdrop: Backdrop,
    lifecycle: Lifecycle,
    nudge: Option<L>,
}

/// Drives [`Backdrop`] from media events, one delayed autoplay attempt and a
/// single interaction-triggered retry.
pub struct BackgroundController<M: MediaHost, P: PageHost> {
    media: Arc<M>,
    page: Arc<P>,
    inner: Arc<Mutex<Inner<P::Listener>>>,
    observer: Arc<dyn Fn(Backdrop) + Send + Sync>,
}

impl<M: MediaHost, P: PageHost> Clone for BackgroundController<M, P> {
    fn clone(&self) -> Self {
        Self {
            media: self.media.clone(),
            page: self.page.clone(),
            inner: self.inner.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<M, P> BackgroundController<M, P>
where
    M: MediaHost + Send + Sync + 'static,
    P: PageHost + Send + Sync + 'static,
{
    pub fn new(media: M, page: P, observer: impl Fn(Backdrop) + Send + Sync + 'static) -> Self {
        Self {
            media: Arc::new(media),
            page: Arc::new(page),
            inner: Arc::new(Mutex::new(Inner {
                backdrop: Backdrop::default(),
                lifecycle: Lifecycle::Created,
                nudge: None,
            })),
            observer: Arc::new(observer),
        }
    }

    pub fn backdrop(&self) -> Backdrop {
        self.inner.lock().backdrop
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.lock().lifecycle == Lifecycle::Mounted
    }

    pub fn has_pending_nudge(&self) -> bool {
        self.inner.lock().nudge.is_some()
    }

    /// Schedule the first autoplay attempt and arm the interaction nudge.
    /// Mounting twice is a no-op.
    pub fn mount(&self) {
        {
            let mut inner = self.inner.lock();
            if inner.lifecycle != Lifecycle::Created {
                return;
            }
            inner.lifecycle = Lifecycle::Mounted;
        }

        if self.media.has_current_data() {
            self.apply(MediaSignal::LoadedData);
        }

        let scheduled = self.clone();
        self.page.defer(
            AUTOPLAY_DELAY,
            Box::new(move || scheduled.attempt_play(PlayTrigger::Scheduled)),
        );

        let nudged = self.clone();
        let listener = self
            .page
            .on_first_interaction(Arc::new(move || nudged.on_interaction()));
        match listener {
            Some(listener) => self.inner.lock().nudge = Some(listener),
            None => log::debug!("no interaction target for background video"),
        }
    }

    /// Release the interaction listener. Anything arriving afterwards is
    /// ignored.
    pub fn unmount(&self) {
        let listener = {
            let mut inner = self.inner.lock();
            inner.lifecycle = Lifecycle::Unmounted;
            inner.nudge.take()
        };
        if let Some(listener) = listener {
            self.page.release(listener);
        }
    }

    pub fn attempt_play(&self, trigger: PlayTrigger) {
        if self.inner.lock().lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.media.silence();
        let controller = self.clone();
        self.media.play(Box::new(move |res| match res {
            Ok(()) => {
                log::debug!("background video playing ({trigger:?})");
                controller.apply(MediaSignal::Playing);
            }
            Err(err) => {
                log::warn!("background video did not start ({trigger:?}): {err}");
                controller.apply(MediaSignal::PlayRejected);
            }
        }));
    }

    /// Retry playback from a direct user action. Returns `false` when the
    /// video is already showing and the affordance should not exist.
    pub fn manual_play(&self) -> bool {
        if !self.backdrop().offers_manual_play() {
            return false;
        }
        // the gesture that got us here also counts as the first interaction
        self.spend_nudge();
        self.attempt_play(PlayTrigger::Manual);
        true
    }

    pub fn on_loaded_data(&self) {
        log::debug!("background video loaded");
        self.apply(MediaSignal::LoadedData);
    }

    pub fn on_error(&self) {
        log::warn!("background video failed to load, keeping fallback");
        self.apply(MediaSignal::LoadError);
    }

    fn on_interaction(&self) {
        if self.spend_nudge() {
            self.attempt_play(PlayTrigger::Interaction);
        }
    }

    /// Release the interaction listener if it is still armed.
    fn spend_nudge(&self) -> bool {
        let listener = self.inner.lock().nudge.take();
        let Some(listener) = listener else {
            return false;
        };
        self.page.release(listener);
        true
    }

    fn apply(&self, signal: MediaSignal) {
        let changed = {
            let mut inner = self.inner.lock();
            if inner.lifecycle == Lifecycle::Unmounted {
                return;
            }
            let next = inner.backdrop.next(signal);
            let changed = next != inner.backdrop;
            inner.backdrop = next;
            changed.then_some(next)
        };
        if let Some(backdrop) = changed {
            (self.observer)(backdrop);
        }
    }
}
