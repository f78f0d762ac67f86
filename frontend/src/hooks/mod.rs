mod interval;
mod theme;
mod window_event;

pub use interval::use_interval;
pub use theme::use_theme;
pub use window_event::use_window_event;
