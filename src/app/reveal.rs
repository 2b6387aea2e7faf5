use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// How entrance animations behave across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOptions {
    pub duration: Duration,
    /// Reveal once and stay revealed.
    pub once: bool,
    /// Distance from the bottom of the viewport an element must cross.
    pub offset_px: u32,
}

pub const REVEAL: RevealOptions = RevealOptions {
    duration: Duration::from_millis(1000),
    once: true,
    offset_px: 100,
};

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.offset_px)
    }

    pub fn transition(&self, delay_ms: u32) -> String {
        let ms = self.duration.as_millis();
        format!("opacity {ms}ms ease {delay_ms}ms, transform {ms}ms ease {delay_ms}ms")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealEffect {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    ZoomIn,
}

impl RevealEffect {
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal-fade-up",
            Self::FadeLeft => "reveal-fade-left",
            Self::FadeRight => "reveal-fade-right",
            Self::ZoomIn => "reveal-zoom-in",
        }
    }

    /// Timeline entries alternate sides.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Self::FadeRight
        } else {
            Self::FadeLeft
        }
    }
}

#[component]
pub fn Reveal(
    #[prop(optional)] effect: RevealEffect,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (shown, set_shown) = signal(false);

    // always false on the server, where effects don't run anyway
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let visible = entries.iter().any(|e| e.is_intersecting());
            if visible {
                set_shown.set(true);
            } else if !REVEAL.once {
                set_shown.set(false);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(REVEAL.root_margin()),
    );

    Effect::watch(
        move || shown.get(),
        move |shown, _, _| {
            if *shown && REVEAL.once {
                stop();
            }
        },
        false,
    );
    Effect::watch(
        move || is_supported.get(),
        move |supported, _, _| {
            if !*supported {
                log::debug!("IntersectionObserver unavailable, revealing immediately");
                set_shown.set(true);
            }
        },
        true,
    );

    let class = format!("reveal {} {class}", effect.class());
    view! {
        <div
            node_ref=target
            class=class
            class:revealed=move || shown.get()
            style:transition=REVEAL.transition(delay_ms)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_config() {
        assert_eq!(REVEAL.duration, Duration::from_millis(1000));
        assert!(REVEAL.once);
        assert_eq!(REVEAL.root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn test_transition_includes_delay() {
        assert_eq!(
            REVEAL.transition(0),
            "opacity 1000ms ease 0ms, transform 1000ms ease 0ms"
        );
        assert_eq!(
            REVEAL.transition(300),
            "opacity 1000ms ease 300ms, transform 1000ms ease 300ms"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_render_starts_hidden() {
        let html = Owner::new().with(|| {
            view! {
                <Reveal effect=RevealEffect::ZoomIn delay_ms=200 class="skill-item">
                    "Python"
                </Reveal>
            }
            .to_html()
        });
        assert!(html.contains("reveal reveal-zoom-in skill-item"));
        assert!(html.contains("Python"));
        assert!(!html.contains("revealed"));
    }

    #[test]
    fn test_alternating_effects() {
        assert_eq!(RevealEffect::alternating(0), RevealEffect::FadeRight);
        assert_eq!(RevealEffect::alternating(1), RevealEffect::FadeLeft);
        assert_eq!(RevealEffect::alternating(4), RevealEffect::FadeRight);
        assert_eq!(RevealEffect::default().class(), "reveal-fade-up");
    }
}
