//! Theme State
//!
//! Light/dark mode context. Initialized from the stored preference, falling
//! back to the system preference (which is then persisted), and flipped only
//! through [`ThemeState::toggle`]. Independent of fetch state.

use leptos::*;

/// Local storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Theme context provided to all components
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        self.mode.get() == ThemeMode::Dark
    }

    /// Flip the mode and persist the new preference.
    pub fn toggle(&self) {
        let next = self.mode.get_untracked().flipped();
        self.mode.set(next);
        persist(next);
    }
}

/// Provide the theme context to the component tree.
pub fn provide_theme() {
    let initial = stored_mode().unwrap_or_else(|| {
        let mode = system_mode();
        persist(mode);
        mode
    });

    provide_context(ThemeState {
        mode: create_rw_signal(initial),
    });
}

fn stored_mode() -> Option<ThemeMode> {
    let storage = window().local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    ThemeMode::parse(&value)
}

fn system_mode() -> ThemeMode {
    let prefers_dark = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);

    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

fn persist(mode: ThemeMode) {
    if let Ok(Some(storage)) = window().local_storage() {
        let _ = storage.set_item(STORAGE_KEY, mode.as_str());
    }
}
