//! Fallback for paths outside the route table.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    log::warn!("no route for {}", pathname.get_untracked());

    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>{move || format!("Nothing lives at {}.", pathname.get())}</p>
            <a class="btn btn--primary" href=AppRoute::Home.href()>"Back to discovery"</a>
        </div>
    }
}
