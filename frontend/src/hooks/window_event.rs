use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Listens for `event` on `window` while `active` is true.
///
/// The listener is removed when `active` turns false or the component unmounts.
#[hook]
pub fn use_window_event<F>(event: &'static str, active: bool, handler: F)
where
    F: Fn(web_sys::Event) + 'static,
{
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) if active => {
                    let callback = Closure::<dyn Fn(web_sys::Event)>::new(handler);
                    match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                        Ok(()) => Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                if let Err(e) = win
                                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                                {
                                    log::warn!("Failed to remove {} listener: {:?}", event, e);
                                }
                            }
                        }),
                        Err(e) => {
                            log::warn!("Failed to add {} listener: {:?}", event, e);
                            Box::new(|| ())
                        }
                    }
                }
                _ => Box::new(|| ()),
            };
            move || {
                destructor();
            }
        },
        (event, active),
    );
}
