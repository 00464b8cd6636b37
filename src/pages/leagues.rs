//! League list with season progress.

use leptos::prelude::*;

use crate::mock::catalog;
use crate::routes::AppRoute;
use crate::util::format;

#[component]
pub fn LeaguesPage() -> impl IntoView {
    let cards = catalog::leagues()
        .into_iter()
        .map(|league| {
            let href = AppRoute::Leaderboard { id: league.id.clone() }.href();
            let progress = f64::from(league.rounds_played) / f64::from(league.total_rounds.max(1));
            view! {
                <a class="card league-card" href=href>
                    <span class="league-card__name">{league.name}</span>
                    <span class="league-card__meta">{format!("{} · {}", league.city, league.season)}</span>
                    <div class="step-progress__track">
                        <div class="step-progress__bar" style=format::percent_width(progress)></div>
                    </div>
                    <span class="league-card__rounds">
                        {format!("Round {} of {}", league.rounds_played, league.total_rounds)}
                    </span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="list-page leagues-page">
            <h1>"Leagues"</h1>
            <div class="card-grid">{cards}</div>
        </div>
    }
}
