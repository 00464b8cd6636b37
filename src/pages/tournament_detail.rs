//! Tournament detail with deep-linkable tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active tab is mirrored into `?tab=` so links such as
//! `/tournament/t-1?tab=pairings` open on the right panel. Registration,
//! sponsor and result-report flows link back here with a tab preselected.

#[cfg(test)]
#[path = "tournament_detail_test.rs"]
mod tournament_detail_test;

use leptos::prelude::*;

use crate::components::tab_bar::{TabBar, use_tab_query};
use crate::mock::catalog;
use crate::mock::types::{GameResult, Match, Player, Tournament, TournamentStatus};
use crate::routes::AppRoute;
use crate::state::tabs::{TabSelection, TournamentTab};
use crate::util::{format, nav};

/// Entered players, strongest first.
pub fn seeded_players(tournament: &Tournament) -> Vec<Player> {
    let mut players = catalog::players_by_ids(&tournament.player_ids);
    players.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.name.cmp(&b.name)));
    players
}

/// Whether a result can still be reported for this pairing.
pub fn is_reportable(tournament: &Tournament, pairing: &Match) -> bool {
    tournament.status == TournamentStatus::InProgress || pairing.result == GameResult::Pending
}

#[component]
pub fn TournamentDetailPage() -> impl IntoView {
    let id = nav::use_route_param("id");
    let selection = use_tab_query::<TournamentTab>();
    let tournament = Memo::new(move |_| catalog::tournament(&id.get()));

    let overview = move || {
        let t = tournament.get();
        let venue = catalog::venue(&t.venue_id);
        let venue_href = AppRoute::Venue { id: venue.id.clone() }.href();
        let register_href = AppRoute::TournamentRegister { id: t.id.clone() }.href();
        let open = t.status == TournamentStatus::RegistrationOpen;
        let sections = t.sections.iter().map(|s| view! { <li class="chip">{s.clone()}</li> }).collect::<Vec<_>>();
        view! {
            <dl class="facts">
                <dt>"Dates"</dt>
                <dd>{format::date_range(&t.start_date, &t.end_date)}</dd>
                <dt>"Venue"</dt>
                <dd><a href=venue_href>{venue.name}</a></dd>
                <dt>"Time control"</dt>
                <dd>{t.time_control}</dd>
                <dt>"Rounds"</dt>
                <dd>{t.rounds}</dd>
                <dt>"Entry fee"</dt>
                <dd>{format::money_short(t.entry_fee_cents)}</dd>
                <dt>"Prize fund"</dt>
                <dd>{format::money_short(t.prize_pool_cents)}</dd>
                <dt>"Organizer"</dt>
                <dd>{t.organizer}</dd>
            </dl>
            <ul class="chip-row">{sections}</ul>
            {open.then(|| view! { <a class="btn btn--primary" href=register_href>"Register"</a> })}
        }
    };

    let players = move || {
        let rows = tournament
            .with(seeded_players)
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                view! {
                    <tr>
                        <td>{i + 1}</td>
                        <td>{p.display_name()}</td>
                        <td>{p.rating}</td>
                        <td>{p.city}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="table">
                <thead>
                    <tr><th>"#"</th><th>"Player"</th><th>"Rating"</th><th>"City"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    let pairings = move || {
        let t = tournament.get();
        let rows = catalog::matches(&t.id)
            .into_iter()
            .map(|m| {
                let white = catalog::player_by_id(&m.white_id).display_name();
                let black = catalog::player_by_id(&m.black_id).display_name();
                let report = is_reportable(&t, &m).then(|| {
                    let href = AppRoute::MatchReport { tournament_id: t.id.clone(), match_id: m.id.clone() }.href();
                    view! { <a class="btn btn--small" href=href>"Report result"</a> }
                });
                view! {
                    <tr>
                        <td>{m.board}</td>
                        <td>{white}</td>
                        <td class="table__result">{m.result.notation()}</td>
                        <td>{black}</td>
                        <td>{report}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <p class="tab-panel__note">{format!("Round {} pairings", catalog::matches(&t.id).first().map_or(1, |m| m.round))}</p>
            <table class="table">
                <thead>
                    <tr><th>"Board"</th><th>"White"</th><th>"Result"</th><th>"Black"</th><th></th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    let sponsors = move || {
        let t = tournament.get();
        let add_href = AppRoute::SponsorAdd { tournament_id: t.id.clone() }.href();
        let cards = catalog::sponsors_by_ids(&t.sponsor_ids)
            .into_iter()
            .map(|s| {
                let href = AppRoute::Sponsor { tournament_id: t.id.clone(), sponsor_id: s.id.clone() }.href();
                view! {
                    <a class="card sponsor-card" href=href>
                        <span class="sponsor-card__tier">{s.tier.label()}</span>
                        <span class="sponsor-card__name">{s.name}</span>
                        <p>{s.blurb}</p>
                    </a>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="card-grid">{cards}</div>
            <a class="btn" href=add_href>"Become a sponsor"</a>
        }
    };

    view! {
        <div class="detail-page tournament-detail">
            <a class="detail-page__back" href=AppRoute::Tournaments.href()>"← All tournaments"</a>
            <span class="status-pill">{move || tournament.with(|t| t.status.label())}</span>
            <h1>{move || tournament.with(|t| t.name.clone())}</h1>
            <p class="detail-page__meta">{move || tournament.with(|t| format!("{} · {}", t.city, t.time_control))}</p>
            <TabBar selection=selection/>
            <div class="tab-panel">
                {move || match selection.with(TabSelection::active) {
                    TournamentTab::Overview => overview().into_any(),
                    TournamentTab::Players => players().into_any(),
                    TournamentTab::Pairings => pairings().into_any(),
                    TournamentTab::Sponsors => sponsors().into_any(),
                }}
            </div>
        </div>
    }
}
