//! League leaderboard with Standings / Rounds / Stats tabs mirrored into `?tab=`.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use leptos::prelude::*;

use crate::components::tab_bar::{TabBar, use_tab_query};
use crate::mock::catalog;
use crate::mock::types::{RoundSummary, Standing};
use crate::routes::AppRoute;
use crate::state::tabs::{LeaderboardTab, TabSelection};
use crate::util::{format, nav};

/// Season totals shown on the Stats tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueStats {
    pub games: u16,
    pub decisive: u16,
    /// Share of drawn games, rounded down to a whole percent.
    pub draw_percent: u8,
    pub upsets: usize,
    /// Player id and rating of the best tournament performance.
    pub best_performance: Option<(String, u16)>,
}

pub fn league_stats(standings: &[Standing], rounds: &[RoundSummary]) -> LeagueStats {
    let games: u16 = rounds.iter().map(|r| u16::from(r.games)).sum();
    let decisive: u16 = rounds.iter().map(|r| u16::from(r.decisive.min(r.games))).sum();
    let draw_percent = if games == 0 {
        0
    } else {
        u8::try_from(u32::from(games - decisive) * 100 / u32::from(games)).unwrap_or(100)
    };
    LeagueStats {
        games,
        decisive,
        draw_percent,
        upsets: rounds.iter().filter(|r| r.upset.is_some()).count(),
        best_performance: standings
            .iter()
            .max_by_key(|s| s.performance)
            .map(|s| (s.player_id.clone(), s.performance)),
    }
}

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let id = nav::use_route_param("id");
    let selection = use_tab_query::<LeaderboardTab>();
    let league = Memo::new(move |_| catalog::league(&id.get()));

    let standings = move || {
        let rows = league
            .with(|l| catalog::standings(&l.id))
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let player = catalog::player_by_id(&s.player_id);
                view! {
                    <tr>
                        <td>{i + 1}</td>
                        <td>{player.display_name()}</td>
                        <td class="table__score">{format::score(s.half_points)}</td>
                        <td>{format!("{}/{}/{}", s.wins, s.draws, s.losses)}</td>
                        <td>{s.performance}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="table">
                <thead>
                    <tr><th>"#"</th><th>"Player"</th><th>"Score"</th><th>"W/D/L"</th><th>"Perf."</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    let rounds = move || {
        let rows = league
            .with(|l| catalog::round_summaries(&l.id))
            .into_iter()
            .map(|r| {
                view! {
                    <li class="round-row">
                        <span class="round-row__title">{format!("Round {} · {}", r.round, r.date)}</span>
                        <span>{format!("{} games, {} decisive", r.games, r.decisive)}</span>
                        {r.upset.map(|upset| view! { <span class="chip">{upset}</span> })}
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! { <ul class="round-list">{rows}</ul> }
    };

    let stats = move || {
        let stats = league.with(|l| league_stats(&catalog::standings(&l.id), &catalog::round_summaries(&l.id)));
        let best = stats.best_performance.map(|(player_id, rating)| {
            format!("{} ({rating})", catalog::player_by_id(&player_id).display_name())
        });
        view! {
            <dl class="facts">
                <dt>"Games played"</dt>
                <dd>{stats.games}</dd>
                <dt>"Decisive"</dt>
                <dd>{stats.decisive}</dd>
                <dt>"Draw rate"</dt>
                <dd>{format!("{}%", stats.draw_percent)}</dd>
                <dt>"Upsets"</dt>
                <dd>{stats.upsets}</dd>
                <dt>"Best performance"</dt>
                <dd>{best.unwrap_or_else(|| "-".to_owned())}</dd>
            </dl>
        }
    };

    view! {
        <div class="detail-page leaderboard">
            <a class="detail-page__back" href=AppRoute::Leagues.href()>"← All leagues"</a>
            <h1>{move || league.with(|l| l.name.clone())}</h1>
            <p class="detail-page__meta">
                {move || league.with(|l| format!("{} · round {} of {}", l.season, l.rounds_played, l.total_rounds))}
            </p>
            <TabBar selection=selection/>
            <div class="tab-panel">
                {move || match selection.with(TabSelection::active) {
                    LeaderboardTab::Standings => standings().into_any(),
                    LeaderboardTab::Rounds => rounds().into_any(),
                    LeaderboardTab::Stats => stats().into_any(),
                }}
            </div>
        </div>
    }
}
