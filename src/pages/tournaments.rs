//! Tournament list grouped by status.

use leptos::prelude::*;

use crate::components::tournament_card::TournamentCard;
use crate::mock::catalog;
use crate::mock::types::TournamentStatus;

#[component]
pub fn TournamentsPage() -> impl IntoView {
    let all = catalog::tournaments();
    let groups = [TournamentStatus::RegistrationOpen, TournamentStatus::InProgress, TournamentStatus::Finished]
        .into_iter()
        .map(|status| {
            let cards = all
                .iter()
                .filter(|t| t.status == status)
                .cloned()
                .map(|tournament| view! { <TournamentCard tournament=tournament/> })
                .collect::<Vec<_>>();
            view! {
                <section class="tournament-group">
                    <h2>{status.label()}</h2>
                    <div class="card-grid">{cards}</div>
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="list-page tournaments-page">
            <h1>"Tournaments"</h1>
            {groups}
        </div>
    }
}
