use std::fmt;

use crate::error::StoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Only the exact strings `"light"` and `"dark"` are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the theme for a fresh session. A valid stored choice always wins over
/// the system preference; anything else stored is ignored.
pub fn resolve_initial_theme(stored: Option<&str>, system_prefers_dark: bool) -> ThemePreference {
    stored
        .and_then(ThemePreference::parse)
        .unwrap_or_else(|| ThemePreference::from_system(system_prefers_dark))
}

/// Key-value slot the theme choice is persisted in.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&mut self, value: &str) -> Result<(), StoreError>;
}

/// Receives the visual mode flag (the `dark` class on the document root in the browser).
pub trait ModeTarget {
    fn apply(&mut self, theme: ThemePreference);
}

/// Owns the current theme and runs the document/store commit after every change.
pub struct ThemeController<S, T> {
    theme: ThemePreference,
    store: S,
    target: T,
    user_chose: bool,
}

impl<S: PreferenceStore, T: ModeTarget> ThemeController<S, T> {
    pub fn new(store: S, target: T, system_prefers_dark: bool) -> Self {
        let stored = read_stored(&store);
        let theme = resolve_initial_theme(stored.as_deref(), system_prefers_dark);
        log::debug!(
            "Resolved initial theme {} (stored: {:?}, system dark: {})",
            theme,
            stored,
            system_prefers_dark
        );
        let mut controller = Self {
            theme,
            store,
            target,
            user_chose: false,
        };
        controller.commit();
        controller
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.user_chose = true;
        self.change_to(self.theme.toggled());
        self.theme
    }

    /// Follows an OS color-scheme change unless an explicit choice exists,
    /// either stored or made in this session.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> ThemePreference {
        if self.user_chose {
            return self.theme;
        }
        let stored = read_stored(&self.store);
        let resolved = resolve_initial_theme(stored.as_deref(), prefers_dark);
        if resolved != self.theme {
            log::info!("System color scheme changed, switching to {}", resolved);
            self.change_to(resolved);
        }
        self.theme
    }

    fn change_to(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.commit();
    }

    fn commit(&mut self) {
        self.target.apply(self.theme);
        if let Err(e) = self.store.save(self.theme.as_str()) {
            log::warn!("Theme {} applied but not persisted: {}", self.theme, e);
        }
    }
}

fn read_stored<S: PreferenceStore>(store: &S) -> Option<String> {
    match store.load() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Falling back to system theme: {}", e);
            None
        }
    }
}
