use yew::prelude::*;

use crate::data::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section">
            <div class="container">
                <h2 class="section-title">{"Services"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="service-card reveal">
                            <div class="service-icon"><i class={service.icon}></i></div>
                            <h3 class="card-title">{service.title}</h3>
                            <p class="card-text">{service.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
