use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::project_modal::ProjectModal;
use crate::config;
use crate::data::gallery_items;
use crate::hooks::use_window_event;
use crate::state::gallery::{CategoryFilter, GalleryAction, GalleryFilterState, GalleryItem};
use crate::state::modal::{ModalAction, ModalState};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let gallery = use_reducer(|| GalleryFilterState::new(gallery_items(config::GALLERY_SIZE)));
    let modal = use_reducer(ModalState::default);

    // A selection whose item left the list is closed, not just hidden
    {
        let modal = modal.clone();
        use_effect_with_deps(
            move |items: &std::rc::Rc<[GalleryItem]>| {
                modal.dispatch(ModalAction::Prune(items.clone()));
                || ()
            },
            gallery.shared_items(),
        );
    }

    let modal_open = modal.selected_in(gallery.items()).is_some();
    {
        let modal = modal.clone();
        use_window_event("keydown", modal_open, move |e: web_sys::Event| {
            let is_escape = e
                .dyn_ref::<web_sys::KeyboardEvent>()
                .map(|k| k.key() == "Escape")
                .unwrap_or(false);
            if is_escape {
                modal.dispatch(ModalAction::Close);
            }
        });
    }

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    html! {
        <section id="portfolio" class="section">
            <div class="container">
                <div class="portfolio-header">
                    <h2 class="section-title">{"Portfolio"}</h2>
                    <div class="filter-bar" role="group" aria-label="Filter projects">
                        { for CategoryFilter::OPTIONS.iter().map(|&filter| {
                            let onclick = {
                                let gallery = gallery.clone();
                                Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::SetActive(filter)))
                            };
                            let active = gallery.active() == filter;
                            html! {
                                <button
                                    key={filter.label()}
                                    class={classes!("filter-pill", active.then_some("active"))}
                                    aria-pressed={active.to_string()}
                                    {onclick}
                                >
                                    {filter.label()}
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <div class="card-grid">
                    { for gallery.visible_items().map(|item| {
                        let onclick = {
                            let modal = modal.clone();
                            let item = item.clone();
                            Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Open(item.clone())))
                        };
                        html! {
                            <button key={item.id} class="project-card reveal" {onclick}>
                                <img src={item.image_ref.clone()} alt={item.title.clone()} loading="lazy" />
                                <div class="project-card-shade"></div>
                                <div class="project-card-caption">
                                    <div>
                                        <div class="project-card-title">{ item.title.clone() }</div>
                                        <div class="project-card-category">{item.category.label()}</div>
                                    </div>
                                    <i class="fas fa-chevron-right"></i>
                                </div>
                            </button>
                        }
                    }) }
                </div>
            </div>
            if let Some(item) = modal.selected_in(gallery.items()) {
                <ProjectModal item={item.clone()} {on_close} />
            }
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{KeyboardEvent, KeyboardEventInit};

    use super::*;
    use crate::test_util::{click, find, fire_window_event, mount_point, settle};

    fn key_down(key: &str) -> web_sys::Event {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .unwrap()
            .into()
    }

    #[wasm_bindgen_test]
    async fn escape_closes_the_open_project() {
        let root = mount_point();
        yew::Renderer::<Portfolio>::with_root(root.clone()).render();
        settle().await;

        click(&root, ".project-card");
        settle().await;
        assert!(find(&root, ".modal-backdrop").is_some());

        fire_window_event(&key_down("Enter"));
        settle().await;
        assert!(find(&root, ".modal-backdrop").is_some());

        fire_window_event(&key_down("Escape"));
        settle().await;
        assert!(find(&root, ".modal-backdrop").is_none());
    }

    #[wasm_bindgen_test]
    async fn filter_pill_limits_cards() {
        let root = mount_point();
        yew::Renderer::<Portfolio>::with_root(root.clone()).render();
        settle().await;
        assert_eq!(root.query_selector_all(".project-card").unwrap().length(), 9);

        click(&root, ".filter-pill:nth-child(4)");
        settle().await;
        assert_eq!(root.query_selector_all(".project-card").unwrap().length(), 2);
    }
}
