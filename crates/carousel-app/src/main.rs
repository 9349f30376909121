use carousel_app::{
    Carousel, CarouselNext, CarouselPrevious, CarouselSlide, CarouselSlideList, Direction,
    use_carousel_context,
};
use dioxus::prelude::*;

const SLIDES: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

fn main() {
    // Set up better panic messages for wasm
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // Must happen before dioxus::launch so dioxus skips its own init
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        let _ = set_global_default(Registry::default().with(wasm_layer));
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut last_clicked = use_signal(|| None::<&'static str>);

    rsx! {
        main {
            h1 { "Carousel" }
            Carousel {
                aria_label: "Demo slides",
                CarouselSlideList {
                    for label in SLIDES {
                        CarouselSlide {
                            key: "{label}",
                            onclick: move |_| last_clicked.set(Some(label)),
                            div { class: "demo-slide", "{label}" }
                        }
                    }
                }
                div { class: "carousel-controls",
                    CarouselPrevious { "PREV" }
                    SlideCounter {}
                    CarouselNext { "NEXT" }
                }
            }
            if let Some(label) = last_clicked() {
                p { "Clicked slide {label}" }
            }
        }
    }
}

/// "slide N of M", where N is the first slide currently in view.
#[component]
fn SlideCounter() -> Element {
    let ctx = use_carousel_context("SlideCounter");
    let total = ctx.slide_count();
    let current = ctx
        .first_visible(Direction::Prev)
        .map(|index| index + 1)
        .unwrap_or(0);
    let in_view = ctx.visible_slides().len();

    rsx! {
        span { class: "carousel-counter", "slide {current} of {total} ({in_view} in view)" }
    }
}
