//! Process-wide theme state provided from `App`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light/dark theme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl ThemeState {
    /// Value for the `data-theme` attribute on `<html>`.
    pub fn attribute(self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }

    /// Glyph for the toggle button: shows the theme it switches to.
    pub fn toggle_glyph(self) -> &'static str {
        if self.dark_mode { "☀" } else { "☾" }
    }
}
