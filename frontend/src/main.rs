use yew::prelude::*;

mod components;
mod config;
mod data;
mod error;
mod hooks;
mod pages;
mod state;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_util;
mod utils;

use components::footer::Footer;
use components::nav::Nav;
use hooks::use_theme;
use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    let theme = use_theme();

    html! {
        <div class="site">
            <Nav theme={theme.theme} on_toggle_theme={theme.toggle.clone()} />
            <Landing />
            <Footer />
        </div>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting Web Design Art");
    yew::Renderer::<App>::new().render();
}
