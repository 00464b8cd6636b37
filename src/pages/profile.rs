//! Profile page for the signed-in player.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::tournament_card::TournamentCard;
use crate::mock::catalog;
use crate::mock::types::{Player, Tournament};
use crate::routes::AppRoute;

/// Tournaments the player is entered in, newest first.
pub fn tournaments_for(player: &Player) -> Vec<Tournament> {
    let mut entered: Vec<Tournament> =
        catalog::tournaments().into_iter().filter(|t| t.player_ids.contains(&player.id)).collect();
    entered.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    entered
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let player = catalog::current_player();
    let club = player.club_id.as_deref().map(catalog::club);
    let entered = tournaments_for(&player)
        .into_iter()
        .map(|tournament| view! { <TournamentCard tournament=tournament/> })
        .collect::<Vec<_>>();

    view! {
        <div class="profile-page">
            <section class="profile-header">
                <h1>{player.display_name()}</h1>
                <p class="profile-header__meta">{format!("{} · {} · Rating {}", player.city, player.federation, player.rating)}</p>
                {club.map(|club| {
                    let href = AppRoute::Club { id: club.id.clone() }.href();
                    view! {
                        <p class="profile-header__club">
                            "Member of " <a href=href>{club.name}</a>
                        </p>
                    }
                })}
            </section>
            <section>
                <h2>"Tournaments"</h2>
                <div class="card-grid">{entered}</div>
            </section>
        </div>
    }
}
