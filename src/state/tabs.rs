//! Mutually exclusive tab selection, optionally mirrored into `?tab=`.
//!
//! DESIGN
//! ======
//! Each tabbed page owns a small enum implementing [`TabSet`]. The UI can only
//! emit enum members, so `set_tab` is total; values arriving from a URL go
//! through [`TabSelection::from_query`], which falls back to the enum default
//! instead of producing an undefined tab.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use std::fmt;

/// Query-string parameter used for tab deep links.
pub const TAB_QUERY_PARAM: &str = "tab";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab '{0}'")]
pub struct UnknownTab(pub String);

/// A fixed set of tabs for one page.
pub trait TabSet: Copy + Eq + Default + fmt::Debug + Send + Sync + 'static {
    /// Every tab, in display order.
    const ALL: &'static [Self];

    /// Stable identifier used in the query string.
    fn key(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Look up a tab by its query key (case-insensitive, trimmed).
    fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|tab| tab.key().eq_ignore_ascii_case(raw))
    }
}

/// Active tab for one mounted page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabSelection<T: TabSet> {
    active: T,
}

impl<T: TabSet> TabSelection<T> {
    pub fn new(active: T) -> Self {
        Self { active }
    }

    /// Selection from an optional `tab` query value; unknown values fall back
    /// to the default tab.
    pub fn from_query(raw: Option<&str>) -> Self {
        let active = match raw {
            None => T::default(),
            Some(raw) => T::from_key(raw).unwrap_or_else(|| {
                log::warn!("unrecognized tab '{raw}', using {:?}", T::default());
                T::default()
            }),
        };
        Self { active }
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    /// Select `tab`. Returns whether the selection changed.
    pub fn set_tab(&mut self, tab: T) -> bool {
        if self.active == tab {
            return false;
        }
        log::debug!("tab changed: {:?} -> {tab:?}", self.active);
        self.active = tab;
        true
    }

    /// Query value to mirror into the URL; `None` for the default tab so
    /// canonical URLs stay clean.
    pub fn query_value(&self) -> Option<&'static str> {
        (self.active != T::default()).then(|| self.active.key())
    }
}

/// Implements [`TabSet`], `Display` and `FromStr` for a tab enum.
macro_rules! tab_set {
    ($ty:ident { $($variant:ident => ($key:literal, $label:literal)),+ $(,)? }) => {
        impl $crate::state::tabs::TabSet for $ty {
            const ALL: &'static [Self] = &[$($ty::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $($ty::$variant => $key),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::state::tabs::TabSet::label(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::state::tabs::UnknownTab;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <Self as $crate::state::tabs::TabSet>::from_key(raw)
                    .ok_or_else(|| $crate::state::tabs::UnknownTab(raw.to_owned()))
            }
        }
    };
}

/// Tournament detail tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TournamentTab {
    #[default]
    Overview,
    Players,
    Pairings,
    Sponsors,
}

tab_set!(TournamentTab {
    Overview => ("overview", "Overview"),
    Players => ("players", "Players"),
    Pairings => ("pairings", "Pairings"),
    Sponsors => ("sponsors", "Sponsors"),
});

/// League leaderboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardTab {
    #[default]
    Standings,
    Rounds,
    Stats,
}

tab_set!(LeaderboardTab {
    Standings => ("standings", "Standings"),
    Rounds => ("rounds", "Rounds"),
    Stats => ("stats", "Stats"),
});

/// Partner dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartnerTab {
    #[default]
    Overview,
    Events,
    Sponsorships,
    Invites,
}

tab_set!(PartnerTab {
    Overview => ("overview", "Overview"),
    Events => ("events", "Events"),
    Sponsorships => ("sponsorships", "Sponsorships"),
    Invites => ("invites", "Invites"),
});

/// Club detail tabs. Not mirrored into the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClubTab {
    #[default]
    About,
    Members,
    Events,
}

tab_set!(ClubTab {
    About => ("about", "About"),
    Members => ("members", "Members"),
    Events => ("events", "Events"),
});
