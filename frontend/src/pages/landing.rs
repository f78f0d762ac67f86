use yew::prelude::*;

use crate::components::about::About;
use crate::components::blog::Blog;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::portfolio::Portfolio;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <Hero />
            <About />
            <Portfolio />
            <Services />
            <Blog />
            <Testimonials />
            <Contact />
        </main>
    }
}
