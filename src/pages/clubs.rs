//! Club list, limited to the selected discovery city.

#[cfg(test)]
#[path = "clubs_test.rs"]
mod clubs_test;

use leptos::prelude::*;

use crate::components::club_card::ClubCard;
use crate::config::DEFAULT_CITY;
use crate::mock::catalog;
use crate::mock::types::Club;
use crate::state::discovery::DiscoveryState;

/// Clubs in `city`, largest first. [`DEFAULT_CITY`] lists every club.
pub fn clubs_in(city: &str) -> Vec<Club> {
    let mut clubs: Vec<Club> =
        catalog::clubs().into_iter().filter(|c| city == DEFAULT_CITY || c.city.eq_ignore_ascii_case(city)).collect();
    clubs.sort_by(|a, b| b.member_ids.len().cmp(&a.member_ids.len()).then_with(|| a.name.cmp(&b.name)));
    clubs
}

#[component]
pub fn ClubsPage() -> impl IntoView {
    let discovery = expect_context::<RwSignal<DiscoveryState>>();

    view! {
        <div class="list-page clubs-page">
            <h1>"Clubs"</h1>
            <div class="card-grid">
                {move || {
                    let clubs = discovery.with(|d| clubs_in(&d.city));
                    if clubs.is_empty() {
                        view! { <p class="empty-state">"No clubs in this city yet."</p> }.into_any()
                    } else {
                        clubs.into_iter().map(|club| view! { <ClubCard club=club/> }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </div>
    }
}
