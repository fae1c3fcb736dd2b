//! Image/video slideshow

use agora_types::view::Carousel;
use agora_types::{MediaItem, MediaKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEFAULT_INTERVAL_MS: u32 = 5000;

/// Renders nothing for an empty list. With `autoplay` the slide advances
/// every `interval_ms` until the component unmounts.
#[component]
pub fn MediaCarousel(
    #[prop(into)] media: Signal<Vec<MediaItem>>,
    #[prop(optional)] autoplay: bool,
    #[prop(default = DEFAULT_INTERVAL_MS)] interval_ms: u32,
    #[prop(default = "400px")] height: &'static str,
) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(media.with_untracked(Vec::len)));

    // Keep the index valid when the list changes (e.g. a photo is removed).
    Effect::new(move |_| {
        let len = media.with(Vec::len);
        carousel.update(|c| {
            if c.len() != len {
                let index = c.index();
                *c = Carousel::new(len);
                c.go_to(index.min(len.saturating_sub(1)));
            }
        });
    });

    if autoplay {
        spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(interval_ms).await;
                if carousel.try_update(Carousel::next).is_none() {
                    break;
                }
            }
        });
    }

    let current = move || {
        let index = carousel.with(Carousel::index);
        media.with(|items| items.get(index).cloned())
    };

    view! {
        <Show when=move || !media.with(Vec::is_empty)>
            <div class="media-carousel">
                <div class="carousel-slide" style=format!("height: {}", height)>
                    {move || current().map(|item| match item.kind {
                        MediaKind::Image => view! {
                            <img src=item.src alt=item.alt.unwrap_or_else(|| "Media".to_string()) />
                        }.into_any(),
                        MediaKind::Video => view! {
                            <video src=item.src controls=true preload="metadata">
                                "Your browser does not support video."
                            </video>
                        }.into_any(),
                    })}
                </div>

                <Show when=move || { media.with(Vec::len) > 1 }>
                    <button class="carousel-nav carousel-nav--prev" on:click=move |_| carousel.update(Carousel::prev)>
                        "‹"
                    </button>
                    <button class="carousel-nav carousel-nav--next" on:click=move |_| carousel.update(Carousel::next)>
                        "›"
                    </button>
                    <div class="carousel-dots">
                        {move || (0..media.with(Vec::len)).map(|i| view! {
                            <button
                                class=move || format!("carousel-dot {}", if carousel.with(Carousel::index) == i { "active" } else { "" })
                                on:click=move |_| carousel.update(|c| c.go_to(i))
                            />
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
