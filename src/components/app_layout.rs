//! Navigation chrome wrapped around every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell reads the router location to highlight the active section and
//! owns the theme toggle. Pages render into the `<main>` slot.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, primary_nav};
use crate::state::theme::ThemeState;
use crate::util::class_merge::{merge_class_fragments, when};
use crate::util::dark_mode;

/// Header, navigation and footer around the routed page.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let pathname = use_location().pathname;

    let links = primary_nav()
        .into_iter()
        .map(|link| {
            let href = link.route.href();
            let label = link.label;
            let active = Memo::new(move |_| link.is_active_at(&pathname.get()));
            let class = move || {
                merge_class_fragments([
                    Some("app-nav__link px-3 py-2 rounded text-sm text-slate-600"),
                    when(active.get(), "app-nav__link--active bg-slate-900 text-white"),
                ])
            };
            view! {
                <a class=class href=href aria-current=move || active.get().then_some("page")>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let on_toggle_theme = move |_: leptos::ev::MouseEvent| {
        theme.update(|t| *t = dark_mode::toggle(*t));
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <a class="app-header__brand" href=AppRoute::Home.href()>
                    <span class="app-header__logo" aria-hidden="true">"♞"</span>
                    "ChessCircle"
                </a>
                <nav class="app-nav">{links}</nav>
                <div class="app-header__actions">
                    <button class="btn app-header__theme" on:click=on_toggle_theme title="Toggle dark mode">
                        {move || theme.get().toggle_glyph()}
                    </button>
                    <a class="btn" href=AppRoute::Profile.href()>"Profile"</a>
                    <a class="btn btn--primary" href=AppRoute::Login.href()>"Sign in"</a>
                </div>
            </header>
            <main class="app-main">{children()}</main>
            <footer class="app-footer">
                <span>"ChessCircle: find a board, a club, a tournament."</span>
                <a href=AppRoute::Partner.href()>"Host events with us"</a>
            </footer>
        </div>
    }
}
