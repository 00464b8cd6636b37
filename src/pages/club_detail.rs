//! Club detail with About / Members / Events tabs.
//!
//! The tab lives in page state only; club links always open on "About".

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::tab_bar::TabBar;
use crate::mock::catalog;
use crate::routes::AppRoute;
use crate::state::tabs::{ClubTab, TabSelection};
use crate::util::nav;

#[component]
pub fn ClubDetailPage() -> impl IntoView {
    let id = nav::use_route_param("id");
    let selection = RwSignal::new(TabSelection::<ClubTab>::default());
    let club = Memo::new(move |_| catalog::club(&id.get()));

    let about = move || {
        let club = club.get();
        let venue = catalog::venue(&club.venue_id);
        let venue_href = AppRoute::Venue { id: venue.id.clone() }.href();
        view! {
            <p>{club.description}</p>
            <dl class="facts">
                <dt>"Meets"</dt>
                <dd>{club.meeting_schedule}</dd>
                <dt>"Where"</dt>
                <dd><a href=venue_href>{venue.name}</a></dd>
                <dt>"Founded"</dt>
                <dd>{club.founded}</dd>
            </dl>
        }
    };

    let members = move || {
        let mut members = club.with(|c| catalog::players_by_ids(&c.member_ids));
        members.sort_by(|a, b| b.rating.cmp(&a.rating));
        let rows = members
            .into_iter()
            .map(|p| {
                view! {
                    <li class="member-row">
                        <span>{p.display_name()}</span>
                        <span class="member-row__rating">{p.rating}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! { <ul class="member-list">{rows}</ul> }
    };

    let events = move || {
        let events = club.with(|c| catalog::events_at_venue(&c.venue_id));
        if events.is_empty() {
            return view! { <p class="empty-state">"Nothing scheduled."</p> }.into_any();
        }
        view! {
            <div class="card-grid">
                {events.into_iter().map(|event| view! { <EventCard event=event/> }).collect::<Vec<_>>()}
            </div>
        }
            .into_any()
    };

    view! {
        <div class="detail-page club-detail">
            <a class="detail-page__back" href=AppRoute::Clubs.href()>"← All clubs"</a>
            <h1>{move || club.with(|c| c.name.clone())}</h1>
            <p class="detail-page__meta">
                {move || club.with(|c| format!("{} · {} members", c.city, c.member_ids.len()))}
            </p>
            <TabBar selection=selection/>
            <div class="tab-panel">
                {move || match selection.with(TabSelection::active) {
                    ClubTab::About => about().into_any(),
                    ClubTab::Members => members().into_any(),
                    ClubTab::Events => events().into_any(),
                }}
            </div>
        </div>
    }
}
