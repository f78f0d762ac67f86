use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::state::theme::{ThemeController, ThemePreference};
use crate::utils::dom::{self, DocumentRoot};
use crate::utils::storage::LocalStore;

#[derive(Clone, PartialEq)]
pub struct UseThemeHandle {
    pub theme: ThemePreference,
    pub toggle: Callback<()>,
}

/// Page-wide theme: resolved once on mount, kept in sync with the OS color
/// scheme until the visitor picks one, persisted on every change.
#[hook]
pub fn use_theme() -> UseThemeHandle {
    let controller = use_mut_ref(|| {
        ThemeController::new(
            LocalStore::new(config::THEME_STORAGE_KEY),
            DocumentRoot::new(config::DARK_CLASS),
            dom::system_prefers_dark(),
        )
    });
    let theme = use_state_eq(|| controller.borrow().theme());

    {
        let controller = controller.clone();
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(query) = dom::prefers_dark_query() {
                    let callback = Closure::<dyn Fn()>::new({
                        let query = query.clone();
                        move || {
                            let next = controller.borrow_mut().system_preference_changed(query.matches());
                            theme.set(next);
                        }
                    });
                    match query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
                        Ok(()) => Box::new(move || {
                            if let Err(e) = query
                                .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                            {
                                log::warn!("Failed to remove color scheme listener: {:?}", e);
                            }
                        }),
                        Err(e) => {
                            log::warn!("Color scheme changes will not be followed: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = controller.borrow_mut().toggle();
            log::info!("Theme toggled to {}", next);
            theme.set(next);
        })
    };

    UseThemeHandle {
        theme: *theme,
        toggle,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::test_util::{click, mount_point, settle};

    #[function_component(ThemeSwitch)]
    fn theme_switch() -> Html {
        let theme = use_theme();
        let onclick = theme.toggle.reform(|_: MouseEvent| ());
        html! { <button class="switch" data-theme={theme.theme.as_str()} {onclick}></button> }
    }

    fn storage() -> web_sys::Storage {
        web_sys::window().unwrap().local_storage().unwrap().unwrap()
    }

    fn root_is_dark() -> bool {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .document_element()
            .unwrap()
            .class_list()
            .contains(config::DARK_CLASS)
    }

    #[wasm_bindgen_test]
    async fn stored_choice_applies_and_toggle_persists() {
        storage().set_item(config::THEME_STORAGE_KEY, "light").unwrap();
        let root = mount_point();
        let app = yew::Renderer::<ThemeSwitch>::with_root(root.clone()).render();
        settle().await;
        assert!(!root_is_dark());

        click(&root, ".switch");
        settle().await;
        assert!(root_is_dark());
        assert_eq!(
            storage().get_item(config::THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("dark")
        );

        // unmount runs the color-scheme listener teardown
        app.destroy();
        settle().await;
        storage().remove_item(config::THEME_STORAGE_KEY).unwrap();
    }
}
