//! Read-only records standing in for backend data.
//!
//! DESIGN
//! ======
//! Shapes mirror what a real API would return so pages can later switch to
//! fetched data without touching their markup. Nothing mutates these values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Classical rating.
    pub rating: u16,
    /// Title abbreviation (`"GM"`, `"IM"`, `"FM"`, ...), if any.
    pub title: Option<String>,
    pub federation: String,
    pub city: String,
    pub club_id: Option<String>,
}

impl Player {
    /// Name with title prefix, e.g. `"IM Ada Lovelace"`.
    pub fn display_name(&self) -> String {
        match &self.title {
            Some(title) => format!("{title} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A place that hosts games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    /// Number of boards that can be set up at once.
    pub boards: u16,
    pub amenities: Vec<String>,
    /// Average visitor rating in tenths of a star (0..=50).
    pub rating_tenths: u8,
    pub open_hours: String,
}

/// A chess club.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub city: String,
    pub venue_id: String,
    pub description: String,
    pub meeting_schedule: String,
    pub member_ids: Vec<String>,
    pub founded: u16,
}

/// Kind of community event shown in the discovery feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Meetup,
    Blitz,
    Lesson,
    Tournament,
}

impl EventCategory {
    pub const ALL: [Self; 4] = [Self::Meetup, Self::Blitz, Self::Lesson, Self::Tournament];

    pub fn label(self) -> &'static str {
        match self {
            Self::Meetup => "Meetup",
            Self::Blitz => "Blitz night",
            Self::Lesson => "Lesson",
            Self::Tournament => "Tournament",
        }
    }
}

/// A dated community event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub category: EventCategory,
    pub venue_id: String,
    pub city: String,
    /// ISO date, e.g. `"2026-11-07"`.
    pub date: String,
    pub start_time: String,
    pub spots_left: u16,
    pub host: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    RegistrationOpen,
    InProgress,
    Finished,
}

impl TournamentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::RegistrationOpen => "Registration open",
            Self::InProgress => "In progress",
            Self::Finished => "Finished",
        }
    }
}

/// A rated tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub city: String,
    pub venue_id: String,
    /// Time control, e.g. `"90+30"`.
    pub time_control: String,
    pub start_date: String,
    pub end_date: String,
    pub rounds: u8,
    pub entry_fee_cents: u32,
    pub prize_pool_cents: u32,
    pub sections: Vec<String>,
    pub status: TournamentStatus,
    pub player_ids: Vec<String>,
    pub sponsor_ids: Vec<String>,
    pub organizer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorTier {
    Gold,
    Silver,
    Bronze,
    Community,
}

impl SponsorTier {
    pub const ALL: [Self; 4] = [Self::Gold, Self::Silver, Self::Bronze, Self::Community];

    pub fn key(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::Community => "community",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
            Self::Community => "Community",
        }
    }

    /// Suggested minimum contribution for the tier.
    pub fn minimum_cents(self) -> u32 {
        match self {
            Self::Gold => 500_000,
            Self::Silver => 250_000,
            Self::Bronze => 100_000,
            Self::Community => 0,
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.key() == raw)
    }
}

/// A tournament sponsor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub tier: SponsorTier,
    pub website: String,
    pub contribution_cents: u32,
    pub perks: Vec<String>,
    pub blurb: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Pending,
}

impl GameResult {
    pub const REPORTABLE: [Self; 3] = [Self::WhiteWins, Self::Draw, Self::BlackWins];

    /// Score notation, e.g. `"1-0"`.
    pub fn notation(self) -> &'static str {
        match self {
            Self::WhiteWins => "1-0",
            Self::BlackWins => "0-1",
            Self::Draw => "½-½",
            Self::Pending => "-",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::WhiteWins => "white",
            Self::BlackWins => "black",
            Self::Draw => "draw",
            Self::Pending => "pending",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        [Self::WhiteWins, Self::BlackWins, Self::Draw, Self::Pending]
            .into_iter()
            .find(|result| result.key() == raw)
    }
}

/// One pairing within a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub tournament_id: String,
    pub round: u8,
    pub board: u8,
    pub white_id: String,
    pub black_id: String,
    pub result: GameResult,
}

/// A season-long league.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub season: String,
    pub city: String,
    pub rounds_played: u8,
    pub total_rounds: u8,
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: String,
    /// Score in half points so draws stay integral.
    pub half_points: u16,
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
    /// Tournament performance rating.
    pub performance: u16,
}

/// Summary of a past league round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u8,
    pub date: String,
    pub games: u8,
    pub decisive: u8,
    pub upset: Option<String>,
}

/// An organization running events or sponsoring them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub contact_email: String,
    pub event_ids: Vec<String>,
    pub sponsorship_ids: Vec<String>,
    pub monthly_visitors: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    Sent,
    Accepted,
    Expired,
}

impl InviteStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Accepted => "Accepted",
            Self::Expired => "Expired",
        }
    }
}

/// An invitation sent by a partner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerInvite {
    pub reference: String,
    pub email: String,
    pub status: InviteStatus,
}
