//! Static records for players, venues, clubs, events, tournaments, sponsors,
//! leagues and the partner account.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::types::{
    Club, Event, EventCategory, GameResult, InviteStatus, League, Match, Partner, PartnerInvite, Player,
    RoundSummary, Sponsor, SponsorTier, Standing, Tournament, TournamentStatus, Venue,
};

/// Pick the record whose id matches, or the first (featured) record.
///
/// Catalog collections are literals and never empty.
fn lookup<T>(mut items: Vec<T>, id: &str, id_of: fn(&T) -> &str) -> T {
    let index = items.iter().position(|item| id_of(item) == id).unwrap_or_else(|| {
        log::debug!("mock lookup miss for id '{id}', using featured record");
        0
    });
    items.swap_remove(index)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

// =============================================================
// Players
// =============================================================

fn player(id: &str, name: &str, rating: u16, title: Option<&str>, city: &str, club_id: Option<&str>) -> Player {
    Player {
        id: id.into(),
        name: name.into(),
        rating,
        title: title.map(str::to_owned),
        federation: "USA".into(),
        city: city.into(),
        club_id: club_id.map(str::to_owned),
    }
}

pub fn players() -> Vec<Player> {
    vec![
        player("p-1", "Mira Okafor", 2315, Some("FM"), "Austin", Some("c-1")),
        player("p-2", "Tomas Reyes", 2188, None, "Austin", Some("c-1")),
        player("p-3", "Lena Hartmann", 2402, Some("IM"), "Austin", Some("c-2")),
        player("p-4", "Dev Patel", 1975, None, "Houston", Some("c-3")),
        player("p-5", "Sofia Marin", 2050, None, "Dallas", Some("c-4")),
        player("p-6", "Kwame Asante", 1820, None, "Austin", Some("c-1")),
        player("p-7", "Yuki Tanaka", 2260, Some("WFM"), "Houston", Some("c-3")),
        player("p-8", "Ivan Petrov", 2124, None, "Dallas", Some("c-4")),
    ]
}

pub fn player_by_id(id: &str) -> Player {
    lookup(players(), id, |p| p.id.as_str())
}

/// The signed-in player shown on the profile page.
pub fn current_player() -> Player {
    player_by_id("p-2")
}

/// Players for `ids`, skipping unknown ids.
pub fn players_by_ids(ids: &[String]) -> Vec<Player> {
    let all = players();
    ids.iter()
        .filter_map(|id| all.iter().find(|p| &p.id == id).cloned())
        .collect()
}

// =============================================================
// Venues
// =============================================================

pub fn venues() -> Vec<Venue> {
    vec![
        Venue {
            id: "v-1".into(),
            name: "Rook & Roast Café".into(),
            city: "Austin".into(),
            address: "1204 Congress Ave".into(),
            boards: 24,
            amenities: strings(&["Coffee bar", "Clocks provided", "Wi-Fi"]),
            rating_tenths: 47,
            open_hours: "Daily 7am to 11pm".into(),
        },
        Venue {
            id: "v-2".into(),
            name: "Eastside Library Hall".into(),
            city: "Austin".into(),
            address: "88 Chicon St".into(),
            boards: 60,
            amenities: strings(&["Quiet room", "Accessible", "Parking"]),
            rating_tenths: 44,
            open_hours: "Tue to Sat 10am to 8pm".into(),
        },
        Venue {
            id: "v-3".into(),
            name: "Bayou Board Room".into(),
            city: "Houston".into(),
            address: "415 Westheimer Rd".into(),
            boards: 32,
            amenities: strings(&["Clocks provided", "Demo board", "Snacks"]),
            rating_tenths: 45,
            open_hours: "Wed to Sun 4pm to midnight".into(),
        },
        Venue {
            id: "v-4".into(),
            name: "Deep Ellum Commons".into(),
            city: "Dallas".into(),
            address: "2700 Main St".into(),
            boards: 40,
            amenities: strings(&["Outdoor tables", "Food trucks"]),
            rating_tenths: 42,
            open_hours: "Daily noon to 10pm".into(),
        },
    ]
}

pub fn venue(id: &str) -> Venue {
    lookup(venues(), id, |v| v.id.as_str())
}

// =============================================================
// Clubs
// =============================================================

pub fn clubs() -> Vec<Club> {
    vec![
        Club {
            id: "c-1".into(),
            name: "Congress Ave Knights".into(),
            city: "Austin".into(),
            venue_id: "v-1".into(),
            description: "Casual club with a weekly rated blitz ladder and a coffee habit.".into(),
            meeting_schedule: "Thursdays 6:30pm".into(),
            member_ids: strings(&["p-1", "p-2", "p-6"]),
            founded: 2014,
        },
        Club {
            id: "c-2".into(),
            name: "UT Chess Society".into(),
            city: "Austin".into(),
            venue_id: "v-2".into(),
            description: "Student-run club fielding teams in the collegiate league.".into(),
            meeting_schedule: "Mondays and Wednesdays 7pm".into(),
            member_ids: strings(&["p-3"]),
            founded: 1961,
        },
        Club {
            id: "c-3".into(),
            name: "Bayou City Chess".into(),
            city: "Houston".into(),
            venue_id: "v-3".into(),
            description: "Classical-first club with monthly lectures from titled players.".into(),
            meeting_schedule: "Saturdays 2pm".into(),
            member_ids: strings(&["p-4", "p-7"]),
            founded: 2008,
        },
        Club {
            id: "c-4".into(),
            name: "Deep Ellum Chess Club".into(),
            city: "Dallas".into(),
            venue_id: "v-4".into(),
            description: "Outdoor boards, street blitz, and everyone welcome.".into(),
            meeting_schedule: "Sundays from noon".into(),
            member_ids: strings(&["p-5", "p-8"]),
            founded: 2019,
        },
    ]
}

pub fn club(id: &str) -> Club {
    lookup(clubs(), id, |c| c.id.as_str())
}

// =============================================================
// Events
// =============================================================

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    category: EventCategory,
    venue_id: &str,
    city: &str,
    date: &str,
    start_time: &str,
    spots_left: u16,
    host: &str,
) -> Event {
    Event {
        id: id.into(),
        title: title.into(),
        category,
        venue_id: venue_id.into(),
        city: city.into(),
        date: date.into(),
        start_time: start_time.into(),
        spots_left,
        host: host.into(),
    }
}

pub fn events() -> Vec<Event> {
    vec![
        event("e-1", "Thursday Blitz Ladder", EventCategory::Blitz, "v-1", "Austin", "2026-10-22", "18:30", 12, "Congress Ave Knights"),
        event("e-2", "Beginner Openings Workshop", EventCategory::Lesson, "v-2", "Austin", "2026-10-24", "11:00", 8, "UT Chess Society"),
        event("e-3", "Sunday Park Meetup", EventCategory::Meetup, "v-4", "Dallas", "2026-10-25", "12:00", 30, "Deep Ellum Chess Club"),
        event("e-4", "Bayou Rapid Classic", EventCategory::Tournament, "v-3", "Houston", "2026-10-31", "10:00", 14, "Bayou City Chess"),
        event("e-5", "Endgame Study Circle", EventCategory::Lesson, "v-3", "Houston", "2026-11-01", "14:00", 6, "Bayou City Chess"),
        event("e-6", "Austin Autumn Open", EventCategory::Tournament, "v-2", "Austin", "2026-11-07", "09:30", 40, "Rook & Roast Café"),
        event("e-7", "Café Casual Night", EventCategory::Meetup, "v-1", "Austin", "2026-11-12", "19:00", 20, "Rook & Roast Café"),
    ]
}

pub fn events_at_venue(venue_id: &str) -> Vec<Event> {
    events().into_iter().filter(|e| e.venue_id == venue_id).collect()
}

// =============================================================
// Tournaments
// =============================================================

pub fn tournaments() -> Vec<Tournament> {
    vec![
        Tournament {
            id: "t-1".into(),
            name: "Austin Autumn Open".into(),
            city: "Austin".into(),
            venue_id: "v-2".into(),
            time_control: "90+30".into(),
            start_date: "2026-11-07".into(),
            end_date: "2026-11-08".into(),
            rounds: 5,
            entry_fee_cents: 4_500,
            prize_pool_cents: 250_000,
            sections: strings(&["Open", "U1800", "U1400"]),
            status: TournamentStatus::RegistrationOpen,
            player_ids: strings(&["p-1", "p-2", "p-3", "p-6"]),
            sponsor_ids: strings(&["s-1", "s-2", "s-4"]),
            organizer: "Rook & Roast Café".into(),
        },
        Tournament {
            id: "t-2".into(),
            name: "Bayou Rapid Classic".into(),
            city: "Houston".into(),
            venue_id: "v-3".into(),
            time_control: "15+10".into(),
            start_date: "2026-10-31".into(),
            end_date: "2026-10-31".into(),
            rounds: 7,
            entry_fee_cents: 3_000,
            prize_pool_cents: 120_000,
            sections: strings(&["Open", "U1600"]),
            status: TournamentStatus::InProgress,
            player_ids: strings(&["p-4", "p-7", "p-5", "p-8"]),
            sponsor_ids: strings(&["s-3"]),
            organizer: "Bayou City Chess".into(),
        },
        Tournament {
            id: "t-3".into(),
            name: "Deep Ellum Summer Swiss".into(),
            city: "Dallas".into(),
            venue_id: "v-4".into(),
            time_control: "45+15".into(),
            start_date: "2026-07-18".into(),
            end_date: "2026-07-19".into(),
            rounds: 5,
            entry_fee_cents: 2_500,
            prize_pool_cents: 80_000,
            sections: strings(&["Open"]),
            status: TournamentStatus::Finished,
            player_ids: strings(&["p-5", "p-8", "p-2"]),
            sponsor_ids: Vec::new(),
            organizer: "Deep Ellum Chess Club".into(),
        },
    ]
}

pub fn tournament(id: &str) -> Tournament {
    lookup(tournaments(), id, |t| t.id.as_str())
}

// =============================================================
// Sponsors
// =============================================================

pub fn sponsors() -> Vec<Sponsor> {
    vec![
        Sponsor {
            id: "s-1".into(),
            name: "Knightly Coffee".into(),
            tier: SponsorTier::Gold,
            website: "https://knightly.example".into(),
            contribution_cents: 600_000,
            perks: strings(&["Logo on every board", "Free coffee for players", "Named top prize"]),
            blurb: "Local roaster fueling late-round comebacks since 2011.".into(),
        },
        Sponsor {
            id: "s-2".into(),
            name: "Pawnstar Boards".into(),
            tier: SponsorTier::Silver,
            website: "https://pawnstar.example".into(),
            contribution_cents: 300_000,
            perks: strings(&["Tournament sets on loan", "Booth in the skittles room"]),
            blurb: "Handmade walnut boards and weighted pieces.".into(),
        },
        Sponsor {
            id: "s-3".into(),
            name: "Endgame Books".into(),
            tier: SponsorTier::Bronze,
            website: "https://endgamebooks.example".into(),
            contribution_cents: 120_000,
            perks: strings(&["Book prizes for each section"]),
            blurb: "Independent bookshop with the best chess shelf in Texas.".into(),
        },
        Sponsor {
            id: "s-4".into(),
            name: "Eastside Makers".into(),
            tier: SponsorTier::Community,
            website: "https://eastsidemakers.example".into(),
            contribution_cents: 20_000,
            perks: strings(&["Volunteer arbiters"]),
            blurb: "Neighborhood makerspace lending a hand.".into(),
        },
    ]
}

pub fn sponsor(id: &str) -> Sponsor {
    lookup(sponsors(), id, |s| s.id.as_str())
}

/// Sponsors for `ids`, best tier first.
pub fn sponsors_by_ids(ids: &[String]) -> Vec<Sponsor> {
    let mut found: Vec<Sponsor> = sponsors().into_iter().filter(|s| ids.contains(&s.id)).collect();
    found.sort_by_key(|s| s.tier);
    found
}

// =============================================================
// Matches
// =============================================================

fn pairing(id: &str, tournament_id: &str, board: u8, white: &str, black: &str, result: GameResult) -> Match {
    Match {
        id: id.into(),
        tournament_id: tournament_id.into(),
        round: 1,
        board,
        white_id: white.into(),
        black_id: black.into(),
        result,
    }
}

fn all_matches() -> Vec<Match> {
    vec![
        pairing("m-1", "t-1", 1, "p-3", "p-2", GameResult::Pending),
        pairing("m-2", "t-1", 2, "p-1", "p-6", GameResult::Pending),
        pairing("m-3", "t-2", 1, "p-7", "p-5", GameResult::WhiteWins),
        pairing("m-4", "t-2", 2, "p-8", "p-4", GameResult::Draw),
        pairing("m-5", "t-3", 1, "p-5", "p-2", GameResult::BlackWins),
    ]
}

/// Current-round pairings for a tournament.
pub fn matches(tournament_id: &str) -> Vec<Match> {
    all_matches().into_iter().filter(|m| m.tournament_id == tournament_id).collect()
}

pub fn match_by_id(id: &str) -> Match {
    lookup(all_matches(), id, |m| m.id.as_str())
}

// =============================================================
// Leagues
// =============================================================

pub fn leagues() -> Vec<League> {
    vec![
        League {
            id: "l-1".into(),
            name: "Central Texas League".into(),
            season: "Fall 2026".into(),
            city: "Austin".into(),
            rounds_played: 4,
            total_rounds: 9,
        },
        League {
            id: "l-2".into(),
            name: "Gulf Coast Rapid League".into(),
            season: "Fall 2026".into(),
            city: "Houston".into(),
            rounds_played: 6,
            total_rounds: 8,
        },
    ]
}

pub fn league(id: &str) -> League {
    lookup(leagues(), id, |l| l.id.as_str())
}

fn standing(player_id: &str, half_points: u16, wins: u8, draws: u8, losses: u8, performance: u16) -> Standing {
    Standing { player_id: player_id.into(), half_points, wins, draws, losses, performance }
}

/// Leaderboard rows, highest score first.
pub fn standings(league_id: &str) -> Vec<Standing> {
    let mut rows = match league_id {
        "l-2" => vec![
            standing("p-7", 10, 5, 0, 1, 2340),
            standing("p-4", 8, 3, 2, 1, 2105),
            standing("p-5", 7, 3, 1, 2, 2060),
            standing("p-8", 5, 2, 1, 3, 1990),
        ],
        _ => vec![
            standing("p-3", 7, 3, 1, 0, 2480),
            standing("p-1", 6, 3, 0, 1, 2350),
            standing("p-2", 5, 2, 1, 1, 2205),
            standing("p-6", 2, 1, 0, 3, 1760),
        ],
    };
    rows.sort_by(|a, b| b.half_points.cmp(&a.half_points).then(b.performance.cmp(&a.performance)));
    rows
}

pub fn round_summaries(league_id: &str) -> Vec<RoundSummary> {
    let played = league(league_id).rounds_played;
    (1..=played)
        .map(|round| RoundSummary {
            round,
            date: format!("2026-09-{:02}", 1 + (u16::from(round) - 1) * 3),
            games: 6,
            decisive: 4 + round % 2,
            upset: (round % 3 == 0).then(|| "Board 4 underdog win".to_owned()),
        })
        .collect()
}

// =============================================================
// Partner
// =============================================================

pub fn partner() -> Partner {
    Partner {
        id: "pa-1".into(),
        name: "Rook & Roast Café".into(),
        contact_email: "events@rookandroast.example".into(),
        event_ids: strings(&["e-1", "e-6", "e-7"]),
        sponsorship_ids: strings(&["s-1"]),
        monthly_visitors: 1_840,
    }
}

pub fn partner_invites() -> Vec<PartnerInvite> {
    vec![
        PartnerInvite {
            reference: "inv-2c1f".into(),
            email: "arbiter@example.com".into(),
            status: InviteStatus::Accepted,
        },
        PartnerInvite {
            reference: "inv-77ab".into(),
            email: "coach@example.com".into(),
            status: InviteStatus::Sent,
        },
        PartnerInvite {
            reference: "inv-90de".into(),
            email: "old-contact@example.com".into(),
            status: InviteStatus::Expired,
        },
    ]
}
