use leptos::prelude::*;

use super::{
    backdrop::BackgroundMedia,
    nav::{scroll_to_section, Section},
    reveal::Reveal,
};

#[component]
pub fn Hero(
    #[prop(into)] name: String,
    #[prop(into)] headline: String,
    #[prop(into)] summary: String,
) -> impl IntoView {
    let media = expect_context::<BackgroundMedia>();

    view! {
        <section id=Section::Home.id() class="hero-section min-h-screen flex items-center">
            <div class="mx-auto max-w-5xl px-4 text-center">
                <Reveal>
                    <h1 class="hero-title luxury-title">{name}</h1>
                    <h2 class="hero-subtitle luxury-subtitle">{headline}</h2>
                    <p class="hero-description luxury-subtitle">{summary}</p>
                    <div class="hero-buttons flex flex-wrap justify-center gap-3">
                        <button
                            class="btn btn-luxury"
                            on:click=move |_| scroll_to_section(Section::Contact)
                        >
                            "Get In Touch"
                        </button>
                        <button
                            class="btn btn-outline-luxury"
                            on:click=move |_| scroll_to_section(Section::Experience)
                        >
                            "View Experience"
                        </button>
                        <Show when=move || media.backdrop.get().offers_manual_play()>
                            <button
                                class="btn btn-warning"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    media.play_now();
                                }
                            >
                                "🎬 Play Video"
                            </button>
                        </Show>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
