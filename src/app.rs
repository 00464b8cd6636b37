//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::config::AppConfig;
use crate::pages::{
    club_detail::ClubDetailPage, clubs::ClubsPage, home::HomePage, leaderboard::LeaderboardPage,
    leagues::LeaguesPage, login::LoginPage, match_report::MatchReportPage, not_found::NotFoundPage,
    partner_dashboard::PartnerDashboardPage, profile::ProfilePage, register::RegisterPage,
    sponsor_add::SponsorAddPage, sponsor_detail::SponsorDetailPage, tournament_detail::TournamentDetailPage,
    tournament_register::TournamentRegisterPage, tournaments::TournamentsPage, venue_detail::VenueDetailPage,
    venues::VenuesPage,
};
use crate::state::{discovery::DiscoveryState, theme::ThemeState};
use crate::util::dark_mode;

/// Root application component.
///
/// Provides configuration and the session-wide theme and discovery state,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let theme = RwSignal::new(ThemeState { dark_mode: dark_mode::read_system_preference() });
    let discovery = RwSignal::new(DiscoveryState::with_city(&config.default_city));
    dark_mode::apply(theme.get_untracked());

    provide_context(config);
    provide_context(theme);
    provide_context(discovery);

    view! {
        <Title text="ChessCircle"/>

        <Router>
            <AppLayout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("venues") view=VenuesPage/>
                    <Route path=(StaticSegment("venues"), ParamSegment("id")) view=VenueDetailPage/>
                    <Route path=StaticSegment("clubs") view=ClubsPage/>
                    <Route path=(StaticSegment("clubs"), ParamSegment("id")) view=ClubDetailPage/>
                    <Route path=StaticSegment("tournaments") view=TournamentsPage/>
                    <Route path=(StaticSegment("tournament"), ParamSegment("id")) view=TournamentDetailPage/>
                    <Route
                        path=(StaticSegment("tournament"), ParamSegment("id"), StaticSegment("register"))
                        view=TournamentRegisterPage
                    />
                    <Route
                        path=(StaticSegment("tournament"), ParamSegment("id"), StaticSegment("add-sponsor"))
                        view=SponsorAddPage
                    />
                    <Route
                        path=(
                            StaticSegment("tournament"),
                            ParamSegment("id"),
                            StaticSegment("sponsors"),
                            ParamSegment("sponsorId"),
                        )
                        view=SponsorDetailPage
                    />
                    <Route
                        path=(
                            StaticSegment("tournament"),
                            ParamSegment("id"),
                            StaticSegment("matches"),
                            ParamSegment("matchId"),
                            StaticSegment("report"),
                        )
                        view=MatchReportPage
                    />
                    <Route path=StaticSegment("leagues") view=LeaguesPage/>
                    <Route
                        path=(StaticSegment("leagues"), StaticSegment("leaderboard"), ParamSegment("id"))
                        view=LeaderboardPage
                    />
                    <Route path=StaticSegment("partner") view=PartnerDashboardPage/>
                </Routes>
            </AppLayout>
        </Router>
    }
}
