//! Match result report wizard.
//!
//! Steps: scan the board QR code (simulated), enter the result, confirm.
//! Scanning identifies the pairing; the result step only offers decisive or
//! drawn outcomes.

#[cfg(test)]
#[path = "match_report_test.rs"]
mod match_report_test;

use leptos::prelude::*;

use crate::components::step_progress::StepProgress;
use crate::components::wizard_field::{WizardCheckbox, WizardChoice};
use crate::components::wizard_footer::WizardFooter;
use crate::config::AppConfig;
use crate::mock::catalog;
use crate::mock::types::{GameResult, Match};
use crate::routes::AppRoute;
use crate::state::simulation::SimulatedAction;
use crate::state::tabs::TournamentTab;
use crate::state::wizard::{FieldMap, FieldValue, WizardFlow, WizardState};
use crate::util::{nav, simulate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportField {
    BoardScanned,
    Result,
    OpponentAgrees,
}

pub struct MatchReportFlow;

impl WizardFlow for MatchReportFlow {
    type Field = ReportField;

    const NAME: &'static str = "match-report";
    const TOTAL_STEPS: u8 = 3;

    fn default_fields() -> Vec<(ReportField, FieldValue)> {
        vec![
            (ReportField::BoardScanned, false.into()),
            (ReportField::Result, "".into()),
            (ReportField::OpponentAgrees, false.into()),
        ]
    }

    fn step_title(step: u8) -> &'static str {
        match step {
            1 => "Scan board",
            2 => "Enter result",
            _ => "Confirm",
        }
    }

    fn step_ready(step: u8, fields: &FieldMap<ReportField>) -> bool {
        match step {
            1 => fields.flag(ReportField::BoardScanned),
            2 => reported_result(fields).is_some(),
            _ => fields.flag(ReportField::OpponentAgrees),
        }
    }
}

/// The chosen result, if it is one a player may report.
pub fn reported_result(fields: &FieldMap<ReportField>) -> Option<GameResult> {
    GameResult::from_key(fields.text(ReportField::Result)).filter(|r| GameResult::REPORTABLE.contains(r))
}

/// Result choices labelled with player names, e.g. `"1-0 · Lena Hartmann wins"`.
pub fn result_options(pairing: &Match) -> Vec<(String, String)> {
    let white = catalog::player_by_id(&pairing.white_id).name;
    let black = catalog::player_by_id(&pairing.black_id).name;
    GameResult::REPORTABLE
        .into_iter()
        .map(|result| {
            let outcome = match result {
                GameResult::WhiteWins => format!("{white} wins"),
                GameResult::BlackWins => format!("{black} wins"),
                _ => "Draw".to_owned(),
            };
            (result.key().to_owned(), format!("{} · {outcome}", result.notation()))
        })
        .collect()
}

#[component]
pub fn MatchReportPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let tournament_id = nav::use_route_param("id");
    let match_id = nav::use_route_param("matchId");
    let pairing = Memo::new(move |_| catalog::match_by_id(&match_id.get()));
    let wizard = RwSignal::new(WizardState::<MatchReportFlow>::new(config.wizard_policy()));
    let scan = RwSignal::new(SimulatedAction::new("board scan", config.scan_delay()));
    let step = move || wizard.with(WizardState::step);

    Effect::new(move || {
        if scan.with(SimulatedAction::is_resolved) {
            wizard.update(|w| w.set_field(ReportField::BoardScanned, true));
        }
    });
    nav::redirect_when(
        move || wizard.with(WizardState::is_completed),
        move || AppRoute::Tournament { id: tournament_id.get() }.href_with_tab(TournamentTab::Pairings),
    );

    let players = move || {
        pairing.with(|m| {
            format!(
                "Board {}: {} vs {}",
                m.board,
                catalog::player_by_id(&m.white_id).display_name(),
                catalog::player_by_id(&m.black_id).display_name(),
            )
        })
    };

    let scan_step = move || {
        let on_scan = move |_: leptos::ev::MouseEvent| {
            simulate::trigger(scan);
        };
        view! {
            <div class="scanner">
                <div class=move || {
                    if scan.with(SimulatedAction::is_pending) { "scanner__frame scanner__frame--busy" } else { "scanner__frame" }
                }>
                    {move || match (scan.with(SimulatedAction::is_pending), scan.with(SimulatedAction::is_resolved)) {
                        (true, _) => "Hold steady...".to_owned(),
                        (_, true) => players(),
                        _ => "Point your camera at the QR code on the board.".to_owned(),
                    }}
                </div>
                <button
                    class="btn"
                    type="button"
                    on:click=on_scan
                    disabled=move || scan.with(|a| a.is_pending() || a.is_resolved())
                >
                    "Scan"
                </button>
            </div>
        }
    };

    let result_step = move || {
        let options = pairing.with(result_options);
        view! {
            <p>{players}</p>
            <fieldset class="choices">
                <legend>"Result"</legend>
                <WizardChoice wizard=wizard field=ReportField::Result name="result" options=options/>
            </fieldset>
        }
    };

    let confirm_step = move || {
        view! {
            <p>{players}</p>
            <p class="summary__total">
                {move || wizard.with(|w| reported_result(w.fields()).map_or("-", GameResult::notation))}
            </p>
            <WizardCheckbox wizard=wizard field=ReportField::OpponentAgrees label="My opponent agrees with this result"/>
        }
    };

    view! {
        <div class="wizard-page match-report">
            <h1>"Report a result"</h1>
            <StepProgress wizard=wizard/>
            <div class="wizard-page__body">
                {move || match step() {
                    1 => scan_step().into_any(),
                    2 => result_step().into_any(),
                    _ => confirm_step().into_any(),
                }}
            </div>
            <WizardFooter
                wizard=wizard
                on_exit=Callback::new(|()| nav::go_back())
                busy=Signal::derive(move || scan.with(SimulatedAction::is_pending))
                submit_label="Submit result"
            />
        </div>
    }
}
