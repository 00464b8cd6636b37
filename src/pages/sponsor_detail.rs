//! Sponsor profile within a tournament.

use leptos::prelude::*;

use crate::mock::catalog;
use crate::routes::AppRoute;
use crate::state::tabs::TournamentTab;
use crate::util::{format, nav};

#[component]
pub fn SponsorDetailPage() -> impl IntoView {
    let tournament_id = nav::use_route_param("id");
    let sponsor_id = nav::use_route_param("sponsorId");

    move || {
        let tournament = catalog::tournament(&tournament_id.get());
        let sponsor = catalog::sponsor(&sponsor_id.get());
        let back_href = AppRoute::Tournament { id: tournament.id.clone() }.href_with_tab(TournamentTab::Sponsors);
        let website = sponsor.website.clone();
        let perks = sponsor.perks.iter().map(|p| view! { <li>{p.clone()}</li> }).collect::<Vec<_>>();

        view! {
            <div class="detail-page sponsor-detail">
                <a class="detail-page__back" href=back_href>{format!("← {}", tournament.name)}</a>
                <span class="sponsor-card__tier">{format!("{} sponsor", sponsor.tier.label())}</span>
                <h1>{sponsor.name}</h1>
                <p>{sponsor.blurb}</p>
                <dl class="facts">
                    <dt>"Contribution"</dt>
                    <dd>{format::money_short(sponsor.contribution_cents)}</dd>
                    <dt>"Website"</dt>
                    <dd><a href=website target="_blank" rel="noopener">{sponsor.website}</a></dd>
                </dl>
                <h2>"Perks"</h2>
                <ul class="perk-list">{perks}</ul>
            </div>
        }
    }
}
