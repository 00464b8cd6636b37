//! Tournament registration wizard.
//!
//! Steps: section, player details, payment summary, review. Payment is a
//! summary only; nothing is charged.

#[cfg(test)]
#[path = "tournament_register_test.rs"]
mod tournament_register_test;

use leptos::prelude::*;

use crate::components::step_progress::StepProgress;
use crate::components::wizard_field::{WizardCheckbox, WizardChoice, WizardTextInput};
use crate::components::wizard_footer::WizardFooter;
use crate::config::AppConfig;
use crate::mock::catalog;
use crate::mock::types::Tournament;
use crate::routes::AppRoute;
use crate::state::tabs::TournamentTab;
use crate::state::wizard::{FieldMap, FieldValue, WizardFlow, WizardState};
use crate::util::{format, nav, validate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryField {
    Section,
    Name,
    Email,
    Rating,
    PayAtVenue,
    AcceptRules,
}

/// Flat fee added to online entries.
pub const ONLINE_FEE_CENTS: u32 = 150;

pub struct TournamentEntryFlow;

impl WizardFlow for TournamentEntryFlow {
    type Field = EntryField;

    const NAME: &'static str = "tournament-entry";
    const TOTAL_STEPS: u8 = 4;

    /// Player details start from the signed-in profile.
    fn default_fields() -> Vec<(EntryField, FieldValue)> {
        let player = catalog::current_player();
        vec![
            (EntryField::Section, "".into()),
            (EntryField::Name, player.name.into()),
            (EntryField::Email, "".into()),
            (EntryField::Rating, player.rating.to_string().into()),
            (EntryField::PayAtVenue, false.into()),
            (EntryField::AcceptRules, false.into()),
        ]
    }

    fn step_title(step: u8) -> &'static str {
        match step {
            1 => "Choose a section",
            2 => "Player details",
            3 => "Payment",
            _ => "Review",
        }
    }

    fn step_ready(step: u8, fields: &FieldMap<EntryField>) -> bool {
        match step {
            1 => fields.is_filled(EntryField::Section),
            2 => fields.is_filled(EntryField::Name) && validate::is_valid_email(fields.text(EntryField::Email)),
            4 => fields.flag(EntryField::AcceptRules),
            _ => true,
        }
    }
}

/// Amount due now: entry fee plus the online fee, or nothing when paying at
/// the venue.
pub fn amount_due_cents(tournament: &Tournament, pay_at_venue: bool) -> u32 {
    if pay_at_venue { 0 } else { tournament.entry_fee_cents + ONLINE_FEE_CENTS }
}

/// Sections the player's rating qualifies for. `"U1800"` admits ratings
/// below 1800; any other section is open to all.
pub fn eligible_sections(tournament: &Tournament, rating: Option<u16>) -> Vec<String> {
    tournament
        .sections
        .iter()
        .filter(|section| match (section.strip_prefix('U').and_then(|cap| cap.parse::<u16>().ok()), rating) {
            (Some(cap), Some(rating)) => rating < cap,
            _ => true,
        })
        .cloned()
        .collect()
}

#[component]
pub fn TournamentRegisterPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let id = nav::use_route_param("id");
    let tournament = Memo::new(move |_| catalog::tournament(&id.get()));
    let wizard = RwSignal::new(WizardState::<TournamentEntryFlow>::new(config.wizard_policy()));
    let step = move || wizard.with(WizardState::step);
    let text = move |field| wizard.with(|w| w.fields().text(field).to_owned());
    let due = move || tournament.with(|t| amount_due_cents(t, wizard.with(|w| w.fields().flag(EntryField::PayAtVenue))));

    nav::redirect_when(
        move || wizard.with(WizardState::is_completed),
        move || AppRoute::Tournament { id: id.get() }.href_with_tab(TournamentTab::Players),
    );

    let section = move || {
        let rating = text(EntryField::Rating).trim().parse::<u16>().ok();
        let options = tournament
            .with(|t| eligible_sections(t, rating))
            .into_iter()
            .map(|s| (s.clone(), s))
            .collect::<Vec<_>>();
        view! {
            <fieldset class="choices">
                <legend>"Section"</legend>
                <WizardChoice wizard=wizard field=EntryField::Section name="section" options=options/>
            </fieldset>
        }
    };

    let details = move || {
        view! {
            <WizardTextInput wizard=wizard field=EntryField::Name label="Name as on your federation ID"/>
            <WizardTextInput wizard=wizard field=EntryField::Email label="Email for pairings" input_type="email"/>
            <WizardTextInput wizard=wizard field=EntryField::Rating label="Rating" input_type="number"/>
        }
    };

    let payment = move || {
        let fee = tournament.with(|t| t.entry_fee_cents);
        view! {
            <dl class="summary">
                <dt>"Entry fee"</dt>
                <dd>{format::money(fee)}</dd>
                <dt>"Online processing"</dt>
                <dd>{format::money(ONLINE_FEE_CENTS)}</dd>
                <dt>"Due now"</dt>
                <dd class="summary__total">{move || format::money(due())}</dd>
            </dl>
            <WizardCheckbox wizard=wizard field=EntryField::PayAtVenue label="Pay cash at the venue instead"/>
        }
    };

    let review = move || {
        view! {
            <dl class="summary">
                <dt>"Tournament"</dt>
                <dd>{move || tournament.with(|t| t.name.clone())}</dd>
                <dt>"Section"</dt>
                <dd>{move || text(EntryField::Section)}</dd>
                <dt>"Player"</dt>
                <dd>{move || format!("{} ({})", text(EntryField::Name), text(EntryField::Rating))}</dd>
                <dt>"Email"</dt>
                <dd>{move || text(EntryField::Email)}</dd>
                <dt>"Due now"</dt>
                <dd>{move || format::money(due())}</dd>
            </dl>
            <WizardCheckbox wizard=wizard field=EntryField::AcceptRules label="I agree to the tournament rules and fair-play policy"/>
        }
    };

    view! {
        <div class="wizard-page tournament-register">
            <h1>{move || tournament.with(|t| format!("Register for {}", t.name))}</h1>
            <StepProgress wizard=wizard/>
            <div class="wizard-page__body">
                {move || match step() {
                    1 => section().into_any(),
                    2 => details().into_any(),
                    3 => payment().into_any(),
                    _ => review().into_any(),
                }}
            </div>
            <WizardFooter wizard=wizard on_exit=Callback::new(|()| nav::go_back()) submit_label="Confirm entry"/>
        </div>
    }
}
