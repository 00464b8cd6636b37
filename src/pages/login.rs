//! Login page: phone number plus a simulated one-time passcode.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::routes::AppRoute;
use crate::state::simulation::SimulatedAction;
use crate::util::{nav, simulate, validate};

/// Whether "Verify" should be enabled.
pub fn can_verify(code_sent: bool, code: &str, action: &SimulatedAction) -> bool {
    code_sent && validate::is_valid_otp(code) && !action.is_pending() && !action.is_resolved()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let sent_to = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());
    let otp = RwSignal::new(SimulatedAction::new("login otp", config.otp_delay()));

    nav::redirect_when(move || otp.with(SimulatedAction::is_resolved), || AppRoute::Profile.href());

    let on_send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(normalized) = validate::normalize_phone(&phone.get()) else {
            info.set("Enter a phone number with 10 to 15 digits.".to_owned());
            return;
        };
        info.set(format!("Code sent to {}.", validate::mask_phone(&normalized)));
        sent_to.set(Some(normalized));
        code.set(String::new());
        otp.update(SimulatedAction::reset);
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !otp.with(|a| can_verify(sent_to.with(Option::is_some), &code.get(), a)) {
            return;
        }
        if simulate::trigger(otp) {
            info.set("Verifying code...".to_owned());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"We text you a 6-digit code. No password needed."</p>
                <form class="login-form" on:submit=on_send_code>
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="(512) 555-0199"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || otp.with(SimulatedAction::is_pending)>
                        {move || if sent_to.with(Option::is_some) { "Resend code" } else { "Send code" }}
                    </button>
                </form>
                <Show when=move || sent_to.with(Option::is_some)>
                    <form class="login-form" on:submit=on_verify>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <button
                            class="login-button"
                            type="submit"
                            disabled=move || !otp.with(|a| can_verify(true, &code.get(), a))
                        >
                            {move || if otp.with(SimulatedAction::is_pending) { "Verifying..." } else { "Verify" }}
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? " <a href=AppRoute::Register.href()>"Create a player profile"</a>
                </p>
            </div>
        </div>
    }
}
