//! Card for a club in lists.

use leptos::prelude::*;

use crate::mock::types::Club;
use crate::routes::AppRoute;

#[component]
pub fn ClubCard(club: Club) -> impl IntoView {
    let href = AppRoute::Club { id: club.id.clone() }.href();
    let members = club.member_ids.len();

    view! {
        <a class="card club-card" href=href>
            <span class="club-card__name">{club.name}</span>
            <span class="club-card__meta">{format!("{} · {} · {members} members", club.city, club.meeting_schedule)}</span>
            <p class="club-card__description">{club.description}</p>
        </a>
    }
}
