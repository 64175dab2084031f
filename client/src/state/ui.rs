//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (theme, open dialogs) out of the
//! marketplace models so pages can toggle them without touching domain data.
//! Reading and writing the browser copy of the theme lives in `util::theme`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme, applied as `data-theme` on `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// A saved choice wins; otherwise follow the system color scheme.
    pub fn resolve(stored: Option<&str>, system_dark: bool) -> Self {
        match stored.and_then(Self::from_stored) {
            Some(theme) => theme,
            None if system_dark => Self::Dark,
            None => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Nav button glyph for switching away from this theme.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// UI state for theme and the global Post Job dialog.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// Post Job dialog is open. The dialog is reachable from the nav bar and
    /// from the Jobs page.
    pub post_job_open: bool,
}

impl UiState {
    pub fn open_post_job(&mut self) {
        self.post_job_open = true;
    }

    pub fn close_post_job(&mut self) {
        self.post_job_open = false;
    }

    /// Switch theme and return the new one for the browser to apply.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
