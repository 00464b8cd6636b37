//! Venue detail: address, hours, amenities, upcoming events and resident clubs.

use leptos::prelude::*;

use crate::components::club_card::ClubCard;
use crate::components::event_card::EventCard;
use crate::mock::catalog;
use crate::routes::AppRoute;
use crate::util::{format, nav};

#[component]
pub fn VenueDetailPage() -> impl IntoView {
    let id = nav::use_route_param("id");

    move || {
        let venue = catalog::venue(&id.get());
        let events = catalog::events_at_venue(&venue.id)
            .into_iter()
            .map(|event| view! { <EventCard event=event/> })
            .collect::<Vec<_>>();
        let clubs = catalog::clubs()
            .into_iter()
            .filter(|c| c.venue_id == venue.id)
            .map(|club| view! { <ClubCard club=club/> })
            .collect::<Vec<_>>();
        let amenities = venue.amenities.iter().map(|a| view! { <li class="chip">{a.clone()}</li> }).collect::<Vec<_>>();

        view! {
            <div class="detail-page venue-detail">
                <a class="detail-page__back" href=AppRoute::Venues.href()>"← All venues"</a>
                <h1>{venue.name}</h1>
                <p class="detail-page__meta">{format!("{} · {}", venue.address, venue.city)}</p>
                <dl class="facts">
                    <dt>"Hours"</dt>
                    <dd>{venue.open_hours}</dd>
                    <dt>"Boards"</dt>
                    <dd>{venue.boards}</dd>
                    <dt>"Rating"</dt>
                    <dd>{format!("★ {}", format::stars(venue.rating_tenths))}</dd>
                </dl>
                <ul class="chip-row">{amenities}</ul>
                <section>
                    <h2>"Upcoming here"</h2>
                    <div class="card-grid">{events}</div>
                </section>
                <section>
                    <h2>"Clubs meeting here"</h2>
                    <div class="card-grid">{clubs}</div>
                </section>
            </div>
        }
    }
}
