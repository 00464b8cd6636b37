//! Card for a tournament in lists.

use leptos::prelude::*;

use crate::mock::types::{Tournament, TournamentStatus};
use crate::routes::AppRoute;
use crate::util::class_merge::{merge_class_fragments, when};
use crate::util::format;

#[component]
pub fn TournamentCard(tournament: Tournament) -> impl IntoView {
    let href = AppRoute::Tournament { id: tournament.id.clone() }.href();
    let open = tournament.status == TournamentStatus::RegistrationOpen;
    let status_class = merge_class_fragments([
        Some("status-pill text-xs px-2 rounded-full bg-slate-100"),
        when(open, "status-pill--open bg-emerald-100"),
        when(tournament.status == TournamentStatus::InProgress, "status-pill--live bg-amber-100"),
    ]);

    view! {
        <a class="card tournament-card" href=href>
            <span class=status_class>{tournament.status.label()}</span>
            <span class="tournament-card__name">{tournament.name}</span>
            <span class="tournament-card__meta">
                {format!(
                    "{} · {} · {} rounds · {}",
                    tournament.city,
                    format::date_range(&tournament.start_date, &tournament.end_date),
                    tournament.rounds,
                    tournament.time_control,
                )}
            </span>
            <span class="tournament-card__fees">
                {format!(
                    "Entry {} · Prizes {}",
                    format::money_short(tournament.entry_fee_cents),
                    format::money_short(tournament.prize_pool_cents),
                )}
            </span>
        </a>
    }
}
