use yew::prelude::*;

use crate::state::gallery::GalleryItem;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub item: GalleryItem,
    pub on_close: Callback<()>,
}

/// Detail overlay for one project. Clicking the backdrop closes it; clicks
/// inside the panel are stopped before they reach the backdrop.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let item = &props.item;

    html! {
        <div class="modal-backdrop" role="dialog" aria-modal="true" aria-label={item.title.clone()} onclick={close.clone()}>
            <div class="modal-panel" onclick={keep_open}>
                <img src={item.image_ref.clone()} alt={item.title.clone()} class="modal-image" />
                <div class="modal-body">
                    <h3 class="modal-title">{ item.title.clone() }</h3>
                    <div class="modal-category">{item.category.label()}</div>
                    <p class="modal-text">
                        {"A modern, minimal interface exploring white space and blue accents. Built with performance and accessibility in mind."}
                    </p>
                    <div class="modal-actions">
                        <a href="#" class="button primary small">{"Visit"}</a>
                        <button class="button outline small" onclick={close}>{"Close"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::data::gallery_items;
    use crate::test_util::{click, mount_point, settle};

    async fn mount() -> (web_sys::Element, Rc<Cell<u32>>) {
        let root = mount_point();
        let closes = Rc::new(Cell::new(0));
        let props = ProjectModalProps {
            item: gallery_items(1).remove(0),
            on_close: {
                let closes = closes.clone();
                Callback::from(move |_: ()| closes.set(closes.get() + 1))
            },
        };
        yew::Renderer::<ProjectModal>::with_root_and_props(root.clone(), props).render();
        settle().await;
        (root, closes)
    }

    #[wasm_bindgen_test]
    async fn clicks_inside_the_panel_do_not_close() {
        let (root, closes) = mount().await;
        click(&root, ".modal-text");
        click(&root, ".modal-image");
        assert_eq!(closes.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn backdrop_click_closes() {
        let (root, closes) = mount().await;
        click(&root, ".modal-backdrop");
        assert_eq!(closes.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn close_button_closes_once() {
        let (root, closes) = mount().await;
        click(&root, ".modal-actions button");
        assert_eq!(closes.get(), 1);
    }
}
