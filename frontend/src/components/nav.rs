use yew::prelude::*;

use crate::data::NAV_LINKS;
use crate::hooks::use_window_event;
use crate::state::navigation::{NavAction, NavigationState};
use crate::state::theme::ThemePreference;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: ThemePreference,
    pub on_toggle_theme: Callback<()>,
}

fn theme_icon(theme: ThemePreference) -> Html {
    if theme.is_dark() {
        html! { <i class="fas fa-sun"></i> }
    } else {
        html! { <i class="fas fa-moon"></i> }
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_reducer(NavigationState::default);

    // Following an anchor should never leave the mobile menu covering the section
    {
        let menu = menu.clone();
        use_window_event("hashchange", true, move |_| menu.dispatch(NavAction::Close));
    }

    let on_theme_click = props.on_toggle_theme.reform(|_: MouseEvent| ());
    let on_menu_click = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Toggle))
    };
    let on_link_click = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Close))
    };

    html! {
        <header class="site-header">
            <nav class="nav-bar container">
                <a href="#" class="nav-brand">
                    <span class="brand-dot"></span>
                    <span>{"Web Design Art"}</span>
                </a>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.href} href={link.href} class="nav-link">{link.label}</a>
                    }) }
                    <button aria-label="Toggle theme" class="icon-button round" onclick={on_theme_click.clone()}>
                        { theme_icon(props.theme) }
                    </button>
                </div>
                <div class="nav-mobile-controls">
                    <button aria-label="Toggle theme" class="icon-button round" onclick={on_theme_click}>
                        { theme_icon(props.theme) }
                    </button>
                    <button
                        aria-label="Open menu"
                        aria-expanded={menu.is_open().to_string()}
                        class="icon-button"
                        onclick={on_menu_click}
                    >
                        if menu.is_open() {
                            <i class="fas fa-xmark"></i>
                        } else {
                            <i class="fas fa-bars"></i>
                        }
                    </button>
                </div>
            </nav>
            if menu.is_open() {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.href} href={link.href} class="mobile-link" onclick={on_link_click.clone()}>
                            {link.label}
                        </a>
                    }) }
                </div>
            }
        </header>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::test_util::{click, find, fire_window_event, mount_point, settle};

    async fn mount_with_open_menu() -> web_sys::Element {
        let root = mount_point();
        let props = NavProps {
            theme: ThemePreference::Light,
            on_toggle_theme: Callback::from(|_: ()| ()),
        };
        yew::Renderer::<Nav>::with_root_and_props(root.clone(), props).render();
        settle().await;
        assert!(find(&root, ".mobile-menu").is_none());

        click(&root, "button[aria-label='Open menu']");
        settle().await;
        assert!(find(&root, ".mobile-menu").is_some());
        root
    }

    #[wasm_bindgen_test]
    async fn hashchange_closes_mobile_menu() {
        let root = mount_with_open_menu().await;
        fire_window_event(&web_sys::Event::new("hashchange").unwrap());
        settle().await;
        assert!(find(&root, ".mobile-menu").is_none());
    }

    #[wasm_bindgen_test]
    async fn following_a_menu_link_closes_it() {
        let root = mount_with_open_menu().await;
        click(&root, ".mobile-menu .mobile-link");
        settle().await;
        assert!(find(&root, ".mobile-menu").is_none());
    }
}
