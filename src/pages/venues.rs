//! Venue list filtered by the shared discovery filters.

use leptos::prelude::*;

use crate::components::venue_card::VenueCard;
use crate::pages::home::filtered_venues;
use crate::state::discovery::DiscoveryState;

#[component]
pub fn VenuesPage() -> impl IntoView {
    let discovery = expect_context::<RwSignal<DiscoveryState>>();

    view! {
        <div class="list-page venues-page">
            <h1>"Venues"</h1>
            <input
                class="field__input"
                type="search"
                placeholder="Search by name or address"
                prop:value=move || discovery.with(|d| d.query.clone())
                on:input=move |ev| discovery.update(|d| d.set_query(event_target_value(&ev)))
            />
            <p class="list-page__count">
                {move || {
                    let city = discovery.with(|d| d.city.clone());
                    format!("{} venues · {city}", discovery.with(filtered_venues).len())
                }}
            </p>
            <div class="card-grid">
                {move || {
                    discovery
                        .with(filtered_venues)
                        .into_iter()
                        .map(|venue| view! { <VenueCard venue=venue/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
