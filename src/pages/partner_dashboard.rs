//! Partner dashboard: hosted events, sponsorships and invitations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tabs are mirrored into `?tab=`. Invites are simulated: sending waits the
//! configured delay, then the invite is appended to the page-local list with
//! a fresh reference. Nothing leaves the browser.

#[cfg(test)]
#[path = "partner_dashboard_test.rs"]
mod partner_dashboard_test;

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::tab_bar::{TabBar, use_tab_query};
use crate::config::AppConfig;
use crate::mock::catalog;
use crate::mock::types::{InviteStatus, PartnerInvite};
use crate::routes::AppRoute;
use crate::state::simulation::SimulatedAction;
use crate::state::tabs::{PartnerTab, TabSelection};
use crate::util::{format, simulate, validate};

/// Whether `email` can be invited: well formed and not already on the list.
pub fn can_invite(email: &str, existing: &[PartnerInvite]) -> bool {
    let email = email.trim();
    validate::is_valid_email(email) && !existing.iter().any(|i| i.email.eq_ignore_ascii_case(email))
}

pub fn new_invite(email: &str, id: uuid::Uuid) -> PartnerInvite {
    PartnerInvite {
        reference: format::invite_reference(id),
        email: email.trim().to_owned(),
        status: InviteStatus::Sent,
    }
}

/// Sum of all sponsorship contributions in cents.
pub fn sponsorship_total_cents(sponsor_ids: &[String]) -> u32 {
    catalog::sponsors_by_ids(sponsor_ids).iter().map(|s| s.contribution_cents).sum()
}

#[component]
pub fn PartnerDashboardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let partner = catalog::partner();
    let selection = use_tab_query::<PartnerTab>();
    let invites = RwSignal::new(catalog::partner_invites());
    let email = RwSignal::new(String::new());
    let pending_email = RwSignal::new(None::<String>);
    let sending = RwSignal::new(SimulatedAction::new("partner invite", config.invite_delay()));

    Effect::new(move || {
        if !sending.with(SimulatedAction::is_resolved) {
            return;
        }
        if let Some(address) = pending_email.get_untracked() {
            let invite = new_invite(&address, uuid::Uuid::new_v4());
            log::info!("partner invite {} sent", invite.reference);
            invites.update(|list| list.insert(0, invite));
            pending_email.set(None);
        }
        sending.update(SimulatedAction::reset);
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        if !invites.with(|list| can_invite(&address, list)) {
            return;
        }
        if simulate::trigger(sending) {
            pending_email.set(Some(address));
            email.set(String::new());
        }
    };

    let event_ids = partner.event_ids.clone();
    let sponsorship_ids = partner.sponsorship_ids.clone();

    let overview = {
        let partner = partner.clone();
        move || {
            let accepted = invites.with(|list| list.iter().filter(|i| i.status == InviteStatus::Accepted).count());
            view! {
                <dl class="facts">
                    <dt>"Monthly visitors"</dt>
                    <dd>{partner.monthly_visitors}</dd>
                    <dt>"Hosted events"</dt>
                    <dd>{partner.event_ids.len()}</dd>
                    <dt>"Sponsorships"</dt>
                    <dd>{format::money_short(sponsorship_total_cents(&partner.sponsorship_ids))}</dd>
                    <dt>"Accepted invites"</dt>
                    <dd>{accepted}</dd>
                </dl>
            }
        }
    };

    let events = move || {
        catalog::events()
            .into_iter()
            .filter(|e| event_ids.contains(&e.id))
            .map(|event| view! { <EventCard event=event/> })
            .collect::<Vec<_>>()
    };

    let sponsorships = move || {
        catalog::sponsors_by_ids(&sponsorship_ids)
            .into_iter()
            .map(|s| {
                let tournament = catalog::tournaments().into_iter().find(|t| t.sponsor_ids.contains(&s.id));
                let link = tournament.map(|t| {
                    let href = AppRoute::Sponsor { tournament_id: t.id.clone(), sponsor_id: s.id.clone() }.href();
                    view! { <a href=href>{t.name}</a> }
                });
                view! {
                    <li class="sponsorship-row">
                        <span>{format!("{} · {}", s.tier.label(), format::money_short(s.contribution_cents))}</span>
                        {link}
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let invite_panel = move || {
        let rows = invites.with(|list| {
            list.iter()
                .map(|i| {
                    view! {
                        <tr>
                            <td>{i.reference.clone()}</td>
                            <td>{i.email.clone()}</td>
                            <td>{i.status.label()}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        });
        view! {
            <form class="invite-form flex gap-2" on:submit=on_send>
                <input
                    class="field__input"
                    type="email"
                    placeholder="organizer@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || sending.with(SimulatedAction::is_pending) || !invites.with(|list| can_invite(&email.get(), list))
                >
                    {move || if sending.with(SimulatedAction::is_pending) { "Sending..." } else { "Send invite" }}
                </button>
            </form>
            <table class="table">
                <thead>
                    <tr><th>"Reference"</th><th>"Email"</th><th>"Status"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    view! {
        <div class="detail-page partner-dashboard">
            <h1>{partner.name.clone()}</h1>
            <p class="detail-page__meta">{partner.contact_email.clone()}</p>
            <TabBar selection=selection/>
            <div class="tab-panel">
                {move || match selection.with(TabSelection::active) {
                    PartnerTab::Overview => overview().into_any(),
                    PartnerTab::Events => view! { <div class="card-grid">{events()}</div> }.into_any(),
                    PartnerTab::Sponsorships => view! { <ul class="sponsorship-list">{sponsorships()}</ul> }.into_any(),
                    PartnerTab::Invites => invite_panel().into_any(),
                }}
            </div>
        </div>
    }
}
