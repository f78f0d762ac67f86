use yew::prelude::*;

use crate::config;
use crate::data::TESTIMONIALS;
use crate::hooks::use_interval;
use crate::state::carousel::{CarouselAction, CarouselState};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| CarouselState::new(TESTIMONIALS.len()));

    {
        let on_tick = {
            let carousel = carousel.clone();
            Callback::from(move |_: ()| carousel.dispatch(CarouselAction::Tick))
        };
        use_interval(config::CAROUSEL_INTERVAL_MS, carousel.epoch(), on_tick);
    }

    let current = &TESTIMONIALS[carousel.index()];
    let fade_css = r#"
        .testimonial-slide {
            animation: testimonial-in 0.4s ease-out both;
        }
        @keyframes testimonial-in {
            from { opacity: 0; transform: translateY(8px); }
            to { opacity: 1; transform: translateY(0); }
        }
    "#;

    html! {
        <section id="testimonials" class="section">
            <style>{fade_css}</style>
            <div class="container narrow centered">
                <h2 class="section-title">{"What clients say"}</h2>
                // Keyed on the index so the slide remounts and replays its fade
                <div key={carousel.index()} class="testimonial-slide" aria-live="polite">
                    <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", current.quote)}</p>
                    <div class="testimonial-author">{format!("\u{2014} {}, {}", current.name, current.role)}</div>
                </div>
                <div class="carousel-dots">
                    { for (0..TESTIMONIALS.len()).map(|i| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(i)))
                        };
                        html! {
                            <button
                                key={i}
                                class={classes!("carousel-dot", (i == carousel.index()).then_some("active"))}
                                aria-label={format!("Show testimonial {}", i + 1)}
                                {onclick}
                            ></button>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
