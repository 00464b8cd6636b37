//! Card for a venue in discovery lists.

use leptos::prelude::*;

use crate::mock::types::Venue;
use crate::routes::AppRoute;
use crate::util::class_merge::{merge_class_fragments, when};
use crate::util::format;

/// A clickable card linking to the venue detail page.
#[component]
pub fn VenueCard(venue: Venue, #[prop(optional)] compact: bool) -> impl IntoView {
    let href = AppRoute::Venue { id: venue.id.clone() }.href();
    let class = merge_class_fragments([Some("card venue-card p-4 rounded-lg"), when(compact, "venue-card--compact p-2")]);
    let amenities = venue
        .amenities
        .iter()
        .map(|a| view! { <li class="chip">{a.clone()}</li> })
        .collect::<Vec<_>>();

    view! {
        <a class=class href=href>
            <span class="venue-card__name">{venue.name}</span>
            <span class="venue-card__meta">
                {format!("{} · {} boards · ★ {}", venue.city, venue.boards, format::stars(venue.rating_tenths))}
            </span>
            {(!compact).then(|| view! { <span class="venue-card__address">{venue.address}</span> })}
            <ul class="chip-row">{amenities}</ul>
        </a>
    }
}
