//! Form inputs bound to a wizard field.

use leptos::prelude::*;

use crate::state::wizard::{WizardFlow, WizardState};

/// Labelled text input writing into `field` on every keystroke.
#[component]
pub fn WizardTextInput<W>(
    wizard: RwSignal<WizardState<W>>,
    field: W::Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView
where
    W: WizardFlow,
{
    view! {
        <label class="field flex flex-col gap-1">
            <span class="field__label text-sm">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || wizard.with(|w| w.fields().text(field).to_owned())
                on:input=move |ev| wizard.update(|w| w.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Labelled checkbox writing a flag into `field`.
#[component]
pub fn WizardCheckbox<W>(wizard: RwSignal<WizardState<W>>, field: W::Field, label: &'static str) -> impl IntoView
where
    W: WizardFlow,
{
    view! {
        <label class="field field--check flex items-center gap-2">
            <input
                type="checkbox"
                prop:checked=move || wizard.with(|w| w.fields().flag(field))
                on:change=move |ev| wizard.update(|w| w.set_field(field, event_target_checked(&ev)))
            />
            <span>{label}</span>
        </label>
    }
}

/// One radio button per option; the selected option's key is stored as text.
#[component]
pub fn WizardChoice<W>(
    wizard: RwSignal<WizardState<W>>,
    field: W::Field,
    name: &'static str,
    options: Vec<(String, String)>,
) -> impl IntoView
where
    W: WizardFlow,
{
    options
        .into_iter()
        .map(|(key, label)| {
            let checked_key = key.clone();
            let value_key = key.clone();
            view! {
                <label class="choice flex items-center gap-2">
                    <input
                        type="radio"
                        name=name
                        value=key
                        prop:checked=move || wizard.with(|w| w.fields().text(field) == checked_key)
                        on:change=move |_| wizard.update(|w| w.set_field(field, value_key.clone()))
                    />
                    <span>{label}</span>
                </label>
            }
        })
        .collect::<Vec<_>>()
}
