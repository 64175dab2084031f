//! Browser side of the color theme.
//!
//! The saved choice lives in `localStorage`; without one the system color
//! scheme decides. Server builds read and write nothing, so server-rendered
//! HTML is always light and the saved theme lands after hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "arbifreelance_theme";

/// Theme to start with: the saved choice, else the system scheme.
pub fn load() -> Theme {
    Theme::resolve(saved().as_deref(), system_prefers_dark())
}

/// Set `data-theme` and the `dark` class on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|doc| doc.document_element()) else {
            return;
        };
        if root.set_attribute("data-theme", theme.as_str()).is_err()
            || root.class_list().toggle_with_force("dark", theme == Theme::Dark).is_err()
        {
            leptos::logging::warn!("could not apply {} theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Remember `theme` for the next visit.
pub fn save(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let stored = storage().is_some_and(|storage| storage.set_item(STORAGE_KEY, theme.as_str()).is_ok());
        if !stored {
            leptos::logging::warn!("theme preference not saved");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

fn saved() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
