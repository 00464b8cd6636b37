//! Sponsor sign-up wizard for one tournament.
//!
//! Steps: company, tier and perks, review. The last step sends a simulated
//! invite to the sponsor contact; submit is only available once it is sent.

#[cfg(test)]
#[path = "sponsor_add_test.rs"]
mod sponsor_add_test;

use leptos::prelude::*;

use crate::components::step_progress::StepProgress;
use crate::components::wizard_field::{WizardCheckbox, WizardChoice, WizardTextInput};
use crate::components::wizard_footer::WizardFooter;
use crate::config::AppConfig;
use crate::mock::catalog;
use crate::mock::types::SponsorTier;
use crate::routes::AppRoute;
use crate::state::simulation::SimulatedAction;
use crate::state::tabs::TournamentTab;
use crate::state::wizard::{FieldMap, FieldValue, WizardFlow, WizardState};
use crate::util::{format, nav, simulate, validate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SponsorField {
    Company,
    Website,
    ContactEmail,
    Tier,
    ContributionDollars,
    PerkLogo,
    PerkBooth,
    PerkPrize,
    InviteSent,
    InviteReference,
}

const PERKS: [(SponsorField, &str); 3] = [
    (SponsorField::PerkLogo, "Logo on boards and wall charts"),
    (SponsorField::PerkBooth, "Table in the skittles room"),
    (SponsorField::PerkPrize, "Named prize"),
];

pub struct SponsorAddFlow;

impl WizardFlow for SponsorAddFlow {
    type Field = SponsorField;

    const NAME: &'static str = "sponsor-add";
    const TOTAL_STEPS: u8 = 3;

    fn default_fields() -> Vec<(SponsorField, FieldValue)> {
        let bronze = SponsorTier::Bronze;
        vec![
            (SponsorField::Company, "".into()),
            (SponsorField::Website, "".into()),
            (SponsorField::ContactEmail, "".into()),
            (SponsorField::Tier, bronze.key().into()),
            (SponsorField::ContributionDollars, (bronze.minimum_cents() / 100).to_string().into()),
            (SponsorField::PerkLogo, true.into()),
            (SponsorField::PerkBooth, false.into()),
            (SponsorField::PerkPrize, false.into()),
            (SponsorField::InviteSent, false.into()),
            (SponsorField::InviteReference, "".into()),
        ]
    }

    fn step_title(step: u8) -> &'static str {
        match step {
            1 => "Company",
            2 => "Tier and perks",
            _ => "Review and invite",
        }
    }

    fn step_ready(step: u8, fields: &FieldMap<SponsorField>) -> bool {
        match step {
            1 => {
                fields.is_filled(SponsorField::Company)
                    && validate::is_valid_email(fields.text(SponsorField::ContactEmail))
            }
            2 => SponsorTier::from_key(fields.text(SponsorField::Tier)).is_some_and(|tier| {
                contribution_cents(fields.text(SponsorField::ContributionDollars))
                    .is_some_and(|cents| cents >= tier.minimum_cents())
            }),
            _ => fields.flag(SponsorField::InviteSent),
        }
    }
}

/// Whole-dollar amount typed by the user, in cents.
pub fn contribution_cents(raw: &str) -> Option<u32> {
    raw.trim().trim_start_matches('$').replace(',', "").parse::<u32>().ok()?.checked_mul(100)
}

/// Labels of the perks ticked in `fields`.
pub fn selected_perks(fields: &FieldMap<SponsorField>) -> Vec<&'static str> {
    PERKS.iter().filter(|(field, _)| fields.flag(*field)).map(|(_, label)| *label).collect()
}

/// Drop a sent or pending invite after the contact email changed.
pub fn revoke_invite(wizard: &mut WizardState<SponsorAddFlow>, invite: &mut SimulatedAction) {
    invite.reset();
    wizard.set_field(SponsorField::InviteSent, false);
    wizard.set_field(SponsorField::InviteReference, "");
}

#[component]
pub fn SponsorAddPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let id = nav::use_route_param("id");
    let tournament = Memo::new(move |_| catalog::tournament(&id.get()));
    let wizard = RwSignal::new(WizardState::<SponsorAddFlow>::new(config.wizard_policy()));
    let invite = RwSignal::new(SimulatedAction::new("sponsor invite", config.invite_delay()));
    let step = move || wizard.with(WizardState::step);
    let text = move |field| wizard.with(|w| w.fields().text(field).to_owned());

    Effect::new(move || {
        if !invite.with(SimulatedAction::is_resolved) {
            return;
        }
        if wizard.with_untracked(|w| w.fields().flag(SponsorField::InviteSent)) {
            return;
        }
        let reference = format::invite_reference(uuid::Uuid::new_v4());
        log::info!("sponsor invite {reference} sent");
        wizard.update(|w| {
            w.set_field(SponsorField::InviteSent, true);
            w.set_field(SponsorField::InviteReference, reference);
        });
    });
    Effect::new(move |previous: Option<String>| {
        let email = wizard.with(|w| w.fields().text(SponsorField::ContactEmail).to_owned());
        if previous.is_some_and(|previous| previous != email) {
            invite.update(|a| wizard.update(|w| revoke_invite(w, a)));
        }
        email
    });
    nav::redirect_when(
        move || wizard.with(WizardState::is_completed),
        move || AppRoute::Tournament { id: id.get() }.href_with_tab(TournamentTab::Sponsors),
    );

    let company = move || {
        view! {
            <WizardTextInput wizard=wizard field=SponsorField::Company label="Company name"/>
            <WizardTextInput wizard=wizard field=SponsorField::Website label="Website" input_type="url" placeholder="https://"/>
            <WizardTextInput wizard=wizard field=SponsorField::ContactEmail label="Contact email" input_type="email"/>
        }
    };

    let tier = move || {
        let options = SponsorTier::ALL
            .into_iter()
            .map(|tier| {
                let label = match tier.minimum_cents() {
                    0 => tier.label().to_owned(),
                    cents => format!("{} (from {})", tier.label(), format::money_short(cents)),
                };
                (tier.key().to_owned(), label)
            })
            .collect::<Vec<_>>();
        let perks = PERKS
            .iter()
            .map(|(field, label)| view! { <WizardCheckbox wizard=wizard field=*field label=*label/> })
            .collect::<Vec<_>>();
        view! {
            <fieldset class="choices">
                <legend>"Tier"</legend>
                <WizardChoice wizard=wizard field=SponsorField::Tier name="tier" options=options/>
            </fieldset>
            <WizardTextInput wizard=wizard field=SponsorField::ContributionDollars label="Contribution (USD)" input_type="number"/>
            <fieldset class="choices">
                <legend>"Perks"</legend>
                {perks}
            </fieldset>
        }
    };

    let review = move || {
        let on_send = move |_: leptos::ev::MouseEvent| {
            simulate::trigger(invite);
        };
        view! {
            <dl class="summary">
                <dt>"Tournament"</dt>
                <dd>{move || tournament.with(|t| t.name.clone())}</dd>
                <dt>"Company"</dt>
                <dd>{move || text(SponsorField::Company)}</dd>
                <dt>"Tier"</dt>
                <dd>
                    {move || SponsorTier::from_key(&text(SponsorField::Tier)).map_or("", SponsorTier::label)}
                </dd>
                <dt>"Contribution"</dt>
                <dd>
                    {move || contribution_cents(&text(SponsorField::ContributionDollars)).map(format::money_short)}
                </dd>
                <dt>"Perks"</dt>
                <dd>{move || wizard.with(|w| selected_perks(w.fields()).join(", "))}</dd>
            </dl>
            <button
                class="btn"
                type="button"
                on:click=on_send
                disabled=move || invite.with(|a| a.is_pending() || a.is_resolved())
            >
                {move || if invite.with(SimulatedAction::is_pending) { "Sending..." } else { "Send invite" }}
            </button>
            <Show when=move || wizard.with(|w| w.fields().flag(SponsorField::InviteSent))>
                <p class="field__hint field__hint--ok">
                    {move || format!("Invite {} sent to {}.", text(SponsorField::InviteReference), text(SponsorField::ContactEmail))}
                </p>
            </Show>
        }
    };

    view! {
        <div class="wizard-page sponsor-add">
            <h1>{move || tournament.with(|t| format!("Sponsor {}", t.name))}</h1>
            <StepProgress wizard=wizard/>
            <div class="wizard-page__body">
                {move || match step() {
                    1 => company().into_any(),
                    2 => tier().into_any(),
                    _ => review().into_any(),
                }}
            </div>
            <WizardFooter
                wizard=wizard
                on_exit=Callback::new(|()| nav::go_back())
                busy=Signal::derive(move || invite.with(SimulatedAction::is_pending))
                submit_label="Add sponsor"
            />
        </div>
    }
}
