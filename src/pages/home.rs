//! Home page: discovery feed of events and venues.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters live in the session-wide `DiscoveryState` context so they survive
//! a round trip through a detail page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::tournament_card::TournamentCard;
use crate::components::venue_card::VenueCard;
use crate::mock::catalog;
use crate::mock::types::{Event, EventCategory, Tournament, TournamentStatus, Venue};
use crate::routes::AppRoute;
use crate::state::discovery::{DiscoveryState, city_options};
use crate::util::class_merge::{merge_class_fragments, when};

/// Events passing the current filters, soonest first.
pub fn filtered_events(filters: &DiscoveryState) -> Vec<Event> {
    let mut events: Vec<Event> = catalog::events().into_iter().filter(|e| filters.matches_event(e)).collect();
    events.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));
    events
}

pub fn filtered_venues(filters: &DiscoveryState) -> Vec<Venue> {
    catalog::venues().into_iter().filter(|v| filters.matches_venue(v)).collect()
}

/// Tournaments still taking entries, limited to the selected city.
pub fn open_tournaments(filters: &DiscoveryState) -> Vec<Tournament> {
    catalog::tournaments()
        .into_iter()
        .filter(|t| t.status == TournamentStatus::RegistrationOpen)
        .filter(|t| filters.city == crate::config::DEFAULT_CITY || filters.city.eq_ignore_ascii_case(&t.city))
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let discovery = expect_context::<RwSignal<DiscoveryState>>();
    let cities = city_options(&catalog::venues());

    let city_select = cities
        .into_iter()
        .map(|city| {
            let value = city.clone();
            let selected_city = city.clone();
            view! {
                <option value=value selected=move || discovery.with(|d| d.city == selected_city)>
                    {city}
                </option>
            }
        })
        .collect::<Vec<_>>();

    let category_chips = EventCategory::ALL
        .into_iter()
        .map(|category| {
            let class = move || {
                merge_class_fragments([
                    Some("chip px-3 py-1 rounded-full bg-slate-100"),
                    when(discovery.with(|d| d.category == Some(category)), "chip--active bg-slate-900 text-white"),
                ])
            };
            view! {
                <button type="button" class=class on:click=move |_| discovery.update(|d| d.toggle_category(category))>
                    {category.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Find your next game"</h1>
                <p>"Meetups, clubs, venues and rated events near you."</p>
            </section>

            <section class="filters flex flex-wrap gap-2">
                <input
                    class="field__input"
                    type="search"
                    placeholder="Search events and venues"
                    prop:value=move || discovery.with(|d| d.query.clone())
                    on:input=move |ev| discovery.update(|d| d.set_query(event_target_value(&ev)))
                />
                <select
                    class="field__input"
                    on:change=move |ev| discovery.update(|d| d.set_city(event_target_value(&ev)))
                >
                    {city_select}
                </select>
                <div class="chip-row">{category_chips}</div>
                <Show when=move || discovery.with(DiscoveryState::is_filtered)>
                    <button type="button" class="btn btn--ghost" on:click=move |_| discovery.update(DiscoveryState::clear)>
                        "Clear filters"
                    </button>
                </Show>
            </section>

            <section class="home-section">
                <h2>"Upcoming events"</h2>
                {move || {
                    let events = discovery.with(filtered_events);
                    if events.is_empty() {
                        view! { <p class="empty-state">"No events match these filters."</p> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {events.into_iter().map(|event| view! { <EventCard event=event/> }).collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="home-section">
                <div class="section-header">
                    <h2>"Open tournaments"</h2>
                    <a href=AppRoute::Tournaments.href()>"All tournaments"</a>
                </div>
                <div class="card-grid">
                    {move || {
                        discovery
                            .with(open_tournaments)
                            .into_iter()
                            .map(|tournament| view! { <TournamentCard tournament=tournament/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="home-section">
                <div class="section-header">
                    <h2>"Places to play"</h2>
                    <a href=AppRoute::Venues.href()>"All venues"</a>
                </div>
                <div class="card-grid">
                    {move || {
                        discovery
                            .with(filtered_venues)
                            .into_iter()
                            .map(|venue| view! { <VenueCard venue=venue compact=true/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}
