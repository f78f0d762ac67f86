use yew::prelude::*;

use crate::data::ABOUT_STATS;

const GRID_CELLS: usize = 36;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="container two-column">
                <div class="reveal">
                    <h2 class="section-title">{"Design that feels effortless"}</h2>
                    <p class="section-lead">
                        {"I balance negative space with a bold blue accent to guide attention. Every interaction is purposeful: fast, accessible, and delightful."}
                    </p>
                    <div class="stat-grid">
                        { for ABOUT_STATS.iter().map(|stat| html! {
                            <div key={stat.caption} class="stat-card">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-caption">{stat.caption}</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="about-panel reveal delay-1">
                    <div class="about-grid">
                        { for (0..GRID_CELLS).map(|i| html! {
                            <div key={i} class="about-cell" style={format!("animation-delay: {}ms;", i * 10)}></div>
                        }) }
                    </div>
                    <p class="about-panel-text">
                        {"Interactive patterns, subtle parallax, and carefully tuned easing curves keep the experience lively without noise."}
                    </p>
                </div>
            </div>
        </section>
    }
}
