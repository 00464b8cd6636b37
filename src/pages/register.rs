//! Player sign-up wizard.
//!
//! Four steps: account, chess profile, phone verification and preferences.
//! The phone step is only ready once the simulated passcode check resolves.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::step_progress::StepProgress;
use crate::components::wizard_field::{WizardCheckbox, WizardTextInput};
use crate::components::wizard_footer::WizardFooter;
use crate::config::AppConfig;
use crate::routes::AppRoute;
use crate::state::simulation::SimulatedAction;
use crate::state::wizard::{FieldMap, FieldValue, WizardFlow, WizardState};
use crate::util::{nav, simulate, validate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Name,
    Email,
    Password,
    Rating,
    City,
    Phone,
    Code,
    PhoneVerified,
    Newsletter,
    Terms,
}

/// Minimum password length accepted by the account step.
pub const MIN_PASSWORD_LEN: usize = 8;

pub struct PlayerSignupFlow;

impl WizardFlow for PlayerSignupFlow {
    type Field = SignupField;

    const NAME: &'static str = "player-signup";
    const TOTAL_STEPS: u8 = 4;

    fn default_fields() -> Vec<(SignupField, FieldValue)> {
        vec![
            (SignupField::Name, "".into()),
            (SignupField::Email, "".into()),
            (SignupField::Password, "".into()),
            (SignupField::Rating, "".into()),
            (SignupField::City, "Austin".into()),
            (SignupField::Phone, "".into()),
            (SignupField::Code, "".into()),
            (SignupField::PhoneVerified, false.into()),
            (SignupField::Newsletter, true.into()),
            (SignupField::Terms, false.into()),
        ]
    }

    fn step_title(step: u8) -> &'static str {
        match step {
            1 => "Account",
            2 => "Chess profile",
            3 => "Verify phone",
            _ => "Preferences",
        }
    }

    fn step_ready(step: u8, fields: &FieldMap<SignupField>) -> bool {
        match step {
            1 => {
                fields.is_filled(SignupField::Name)
                    && validate::is_valid_email(fields.text(SignupField::Email))
                    && fields.text(SignupField::Password).chars().count() >= MIN_PASSWORD_LEN
            }
            2 => fields.is_filled(SignupField::City) && rating_is_valid(fields.text(SignupField::Rating)),
            3 => fields.flag(SignupField::PhoneVerified),
            _ => fields.flag(SignupField::Terms),
        }
    }
}

/// Rating is optional; when given it must be a plausible Elo number.
pub fn rating_is_valid(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw.parse::<u16>().is_ok_and(|r| (100..=3000).contains(&r))
}

/// Phone number and code a verification was checked against.
pub fn verification_input(fields: &FieldMap<SignupField>) -> (String, String) {
    (fields.text(SignupField::Phone).to_owned(), fields.text(SignupField::Code).to_owned())
}

/// Forget a finished or in-flight verification after its input was edited.
pub fn revoke_verification(wizard: &mut WizardState<PlayerSignupFlow>, otp: &mut SimulatedAction) {
    otp.reset();
    wizard.set_field(SignupField::PhoneVerified, false);
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let wizard = RwSignal::new(WizardState::<PlayerSignupFlow>::new(config.wizard_policy()));
    let otp = RwSignal::new(SimulatedAction::new("signup otp", config.otp_delay()));
    let step = move || wizard.with(WizardState::step);
    let text = move |field| wizard.with(|w| w.fields().text(field).to_owned());

    Effect::new(move || {
        if otp.with(SimulatedAction::is_resolved) {
            wizard.update(|w| w.set_field(SignupField::PhoneVerified, true));
        }
    });
    Effect::new(move |previous: Option<(String, String)>| {
        let current = wizard.with(|w| verification_input(w.fields()));
        if previous.is_some_and(|previous| previous != current) {
            otp.update(|a| wizard.update(|w| revoke_verification(w, a)));
        }
        current
    });
    nav::redirect_when(move || wizard.with(WizardState::is_completed), || AppRoute::Profile.href());

    let phone_ok = move || validate::normalize_phone(&text(SignupField::Phone)).is_some();
    let can_verify = move || {
        phone_ok()
            && validate::is_valid_otp(&text(SignupField::Code))
            && otp.with(|a| !a.is_pending() && !a.is_resolved())
    };
    let on_verify = move |_: leptos::ev::MouseEvent| {
        if can_verify() {
            simulate::trigger(otp);
        }
    };

    let account = move || {
        view! {
            <WizardTextInput wizard=wizard field=SignupField::Name label="Full name"/>
            <WizardTextInput wizard=wizard field=SignupField::Email label="Email" input_type="email" placeholder="you@example.com"/>
            <WizardTextInput wizard=wizard field=SignupField::Password label="Password" input_type="password"/>
            <p class="field__hint">{format!("At least {MIN_PASSWORD_LEN} characters.")}</p>
        }
    };

    let profile = move || {
        view! {
            <WizardTextInput wizard=wizard field=SignupField::Rating label="Rating (optional)" input_type="number" placeholder="1500"/>
            <WizardTextInput wizard=wizard field=SignupField::City label="Home city"/>
        }
    };

    let verify = move || {
        view! {
            <WizardTextInput wizard=wizard field=SignupField::Phone label="Mobile number" input_type="tel"/>
            <WizardTextInput wizard=wizard field=SignupField::Code label="6-digit code" placeholder="123456"/>
            <button class="btn" type="button" on:click=on_verify disabled=move || !can_verify()>
                {move || if otp.with(SimulatedAction::is_pending) { "Verifying..." } else { "Verify code" }}
            </button>
            <Show when=move || otp.with(SimulatedAction::is_resolved)>
                <p class="field__hint field__hint--ok">"Phone verified."</p>
            </Show>
        }
    };

    let preferences = move || {
        view! {
            <WizardCheckbox wizard=wizard field=SignupField::Newsletter label="Email me about events near me"/>
            <WizardCheckbox wizard=wizard field=SignupField::Terms label="I accept the community guidelines"/>
            <dl class="summary">
                <dt>"Name"</dt><dd>{move || text(SignupField::Name)}</dd>
                <dt>"Email"</dt><dd>{move || text(SignupField::Email)}</dd>
                <dt>"City"</dt><dd>{move || text(SignupField::City)}</dd>
            </dl>
        }
    };

    view! {
        <div class="wizard-page register-page">
            <h1>"Create your player profile"</h1>
            <StepProgress wizard=wizard/>
            <div class="wizard-page__body">
                {move || match step() {
                    1 => account().into_any(),
                    2 => profile().into_any(),
                    3 => verify().into_any(),
                    _ => preferences().into_any(),
                }}
            </div>
            <WizardFooter
                wizard=wizard
                on_exit=Callback::new(|()| nav::go_back())
                busy=Signal::derive(move || otp.with(SimulatedAction::is_pending))
                submit_label="Create profile"
            />
        </div>
    }
}
