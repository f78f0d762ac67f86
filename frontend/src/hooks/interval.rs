use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Emits `on_tick` every `millis` ms. The timer is rebuilt whenever `restart`
/// changes and cancelled on unmount.
#[hook]
pub fn use_interval<D>(millis: u32, restart: D, on_tick: Callback<()>)
where
    D: PartialEq + 'static,
{
    use_effect_with_deps(
        move |_| {
            let interval = Interval::new(millis, move || on_tick.emit(()));
            move || drop(interval)
        },
        restart,
    );
}
