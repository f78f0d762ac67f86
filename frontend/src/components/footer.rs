use yew::prelude::*;

use crate::data::NAV_LINKS;
use crate::utils::dom::current_year;

fn link_column(title: &'static str, links: Html) -> Html {
    html! {
        <div>
            <div class="footer-heading">{title}</div>
            <ul class="footer-list">{links}</ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo(|_| current_year(), ());

    let explore = NAV_LINKS
        .iter()
        .take(4)
        .map(|link| html! { <li key={link.href}><a href={link.href}>{link.label}</a></li> })
        .collect::<Html>();
    let resources = ["Brand Kit", "Press", "Case Studies"]
        .into_iter()
        .map(|label| html! { <li key={label}><a href="#">{label}</a></li> })
        .collect::<Html>();
    let legal = ["Terms", "Privacy"]
        .into_iter()
        .map(|label| html! { <li key={label}><a href="#">{label}</a></li> })
        .collect::<Html>();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <div>
                        <div class="footer-brand">{"Web Design Art"}</div>
                        <p class="footer-tagline">{"Minimal aesthetics, meaningful motion."}</p>
                    </div>
                    <div class="footer-social">
                        <a href="#" aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                        <a href="#" aria-label="GitHub"><i class="fab fa-github"></i></a>
                        <a href="#" aria-label="LinkedIn"><i class="fab fa-linkedin"></i></a>
                    </div>
                </div>
                <div class="footer-columns">
                    { link_column("Explore", explore) }
                    { link_column("Resources", resources) }
                    { link_column("Legal", legal) }
                    { link_column("Contact", html! {
                        <>
                            <li>{"hello@studio.com"}</li>
                            <li>{"+1 (555) 123-4567"}</li>
                        </>
                    }) }
                </div>
                <div class="footer-copyright">
                    {format!("\u{a9} {} Web Design Art. All rights reserved.", *year)}
                </div>
            </div>
        </footer>
    }
}
