//! Progress header for wizard pages.

use leptos::prelude::*;

use crate::state::wizard::{WizardFlow, WizardState};
use crate::util::class_merge::{merge_class_fragments, when};
use crate::util::format;

/// Step counter, step title, progress bar and step dots.
#[component]
pub fn StepProgress<W>(wizard: RwSignal<WizardState<W>>) -> impl IntoView
where
    W: WizardFlow,
{
    let step = move || wizard.with(WizardState::step);
    let dots = (1..=W::TOTAL_STEPS)
        .map(|n| {
            let class = move || {
                merge_class_fragments([
                    Some("step-dot size-2 rounded-full bg-slate-200"),
                    when(n < step(), "step-dot--done bg-slate-500"),
                    when(n == step(), "step-dot--current bg-slate-900"),
                ])
            };
            view! { <span class=class title=W::step_title(n)></span> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="step-progress">
            <div class="step-progress__label">
                <span class="step-progress__count">{move || format!("Step {} of {}", step(), W::TOTAL_STEPS)}</span>
                <span class="step-progress__title">{move || wizard.with(WizardState::title)}</span>
            </div>
            <div class="step-progress__track" role="progressbar" aria-valuemin="1" aria-valuemax=W::TOTAL_STEPS.to_string() aria-valuenow=move || step().to_string()>
                <div class="step-progress__bar" style=move || format::percent_width(wizard.with(WizardState::progress_fraction))></div>
            </div>
            <div class="step-progress__dots">{dots}</div>
        </div>
    }
}
