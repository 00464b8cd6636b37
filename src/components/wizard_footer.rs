//! Back / Next / Submit controls for wizard pages.

use leptos::prelude::*;

use crate::state::wizard::{Retreat, WizardFlow, WizardState};

/// Navigation footer bound to one wizard.
///
/// `on_exit` runs when "Back" is pressed on the first step under the exit
/// floor policy. Submit marks the wizard completed; pages watch
/// `is_completed` to move on.
#[component]
pub fn WizardFooter<W>(
    wizard: RwSignal<WizardState<W>>,
    on_exit: Callback<()>,
    #[prop(optional)] busy: Option<Signal<bool>>,
    #[prop(default = "Submit")] submit_label: &'static str,
) -> impl IntoView
where
    W: WizardFlow,
{
    let busy = move || busy.is_some_and(|b| b.get());
    let is_last = move || wizard.with(WizardState::is_last);

    let on_back = move |_: leptos::ev::MouseEvent| {
        let mut outcome = Retreat::Stayed;
        wizard.update(|w| outcome = w.retreat());
        if outcome == Retreat::Exit {
            on_exit.run(());
        }
    };

    let on_next = move |_: leptos::ev::MouseEvent| {
        wizard.maybe_update(WizardState::advance);
    };

    let on_submit = move |_: leptos::ev::MouseEvent| {
        wizard.maybe_update(WizardState::complete);
    };

    view! {
        <div class="wizard-footer flex justify-between gap-2">
            <button class="btn btn--ghost" type="button" on:click=on_back disabled=busy>
                "Back"
            </button>
            {move || {
                if is_last() {
                    view! {
                        <button
                            class="btn btn--primary"
                            type="button"
                            on:click=on_submit
                            disabled=move || busy() || !wizard.with(WizardState::can_complete)
                        >
                            {submit_label}
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            class="btn btn--primary"
                            type="button"
                            on:click=on_next
                            disabled=move || busy() || !wizard.with(WizardState::can_advance)
                        >
                            "Next"
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
