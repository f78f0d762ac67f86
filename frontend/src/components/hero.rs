use yew::prelude::*;

use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero" aria-label="Hero">
            <div class="hero-scene">
                // Rendered by the spline-viewer module loaded in index.html
                <spline-viewer url={config::get_hero_scene_url()} loading-anim-type="none"></spline-viewer>
            </div>
            <div class="hero-overlay"></div>
            <div class="hero-content container">
                <div class="hero-copy">
                    <h1 class="hero-title reveal">{"Web Design Art"}</h1>
                    <p class="hero-subtitle reveal delay-1">
                        {"Modern, minimalist websites with a blue-on-white visual rhythm. Smooth motion, clear hierarchy, and delightful micro-interactions."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#portfolio" class="button primary arrow-link">
                            {"View Work"}<i class="fas fa-arrow-right"></i>
                        </a>
                        <a href="#contact" class="button outline">{"Start a Project"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
