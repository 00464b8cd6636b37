//! Navigation helpers for the layout shell and wizard pages.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Whether the nav link `href` should be highlighted at `current_path`.
///
/// `/` is active only on `/`. Any other link is active on itself and on its
/// sub-paths, matching whole segments only.
pub fn is_active(current_path: &str, href: &str) -> bool {
    let current = normalize(current_path);
    let href = normalize(href);
    if href == "/" {
        return current == "/";
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// Strip the query, fragment and trailing slash from a path.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Go back one entry in the browser history.
///
/// Used when "Back" is pressed on the first step of a wizard.
pub fn go_back() {
    #[cfg(feature = "csr")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

/// Route parameter `name` as a memo; empty when the segment is absent.
pub fn use_route_param(name: &'static str) -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get(name).unwrap_or_default())
}

/// Navigate to `href()` once `condition()` becomes true.
///
/// Wizard pages use this to leave after a successful submit and the login
/// page after a verified passcode.
pub fn redirect_when<C, H>(condition: C, href: H)
where
    C: Fn() -> bool + 'static,
    H: Fn() -> String + 'static,
{
    let navigate = use_navigate();
    Effect::new(move || {
        if condition() {
            navigate(&href(), NavigateOptions::default());
        }
    });
}
