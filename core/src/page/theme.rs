//! Light/dark theme toggle with persistence

use tracing::debug;
use trinity_types::Theme;

/// Storage key for the chosen theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Where the chosen theme is remembered between visits.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;

    fn save(&self, value: &str);
}

/// Current theme plus the store it is persisted to.
#[derive(Debug, Clone)]
pub struct ThemeState<S: ThemeStore> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Read the stored theme. Missing or unrecognised values mean `Light`.
    pub fn load(store: S) -> Self {
        let theme = store
            .load()
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default();
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to the other theme and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(theme.as_str());
        debug!(theme = theme.as_str(), "theme changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::MemoryThemeStore;

    #[test]
    fn defaults_to_light() {
        let state = ThemeState::load(MemoryThemeStore::new());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_reads_as_light() {
        let state = ThemeState::load(MemoryThemeStore::with_value("solarized"));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let store = MemoryThemeStore::new();
        let mut state = ThemeState::load(store.clone());

        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));

        let reloaded = ThemeState::load(store.clone());
        assert_eq!(reloaded.theme(), Theme::Dark);

        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(store.value().as_deref(), Some("light"));
    }
}
