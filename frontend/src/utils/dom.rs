use web_sys::{window, Element, MediaQueryList};

use crate::config;
use crate::state::theme::{ModeTarget, ThemePreference};

/// The `<html>` element; carries the dark class.
pub struct DocumentRoot {
    class: &'static str,
}

impl DocumentRoot {
    pub fn new(class: &'static str) -> Self {
        Self { class }
    }

    fn element() -> Option<Element> {
        window()?.document()?.document_element()
    }
}

impl ModeTarget for DocumentRoot {
    fn apply(&mut self, theme: ThemePreference) {
        match Self::element() {
            Some(root) => {
                if let Err(e) = root.class_list().toggle_with_force(self.class, theme.is_dark()) {
                    log::warn!("Failed to set theme class: {:?}", e);
                }
            }
            None => log::warn!("No document root to apply theme {} to", theme),
        }
    }
}

pub fn prefers_dark_query() -> Option<MediaQueryList> {
    window()?.match_media(config::PREFERS_DARK_QUERY).ok().flatten()
}

pub fn system_prefers_dark() -> bool {
    prefers_dark_query().map(|mq| mq.matches()).unwrap_or(false)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
