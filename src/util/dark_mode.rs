//! Dark mode initialization and toggle.
//!
//! Reads the system color-scheme preference and applies a `data-theme`
//! attribute to the `<html>` element. The choice is not stored anywhere; a
//! new session starts from the system preference again.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeState;

/// Whether the system prefers a dark color scheme.
pub fn read_system_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.attribute());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip dark mode and apply the result.
pub fn toggle(current: ThemeState) -> ThemeState {
    let next = ThemeState { dark_mode: !current.dark_mode };
    apply(next);
    log::debug!("theme switched to {}", next.attribute());
    next
}
