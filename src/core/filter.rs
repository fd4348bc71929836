//! Stop-count filtering.
//!
//! The selection is modelled as either "all stops" or an explicit set of
//! stop flags, so the five checkbox booleans can never disagree with each
//! other. An explicit empty set is a legal state and matches nothing.

use crate::domain::model::Ticket;
use crate::utils::error::BoardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StopFlag {
    NonStop,
    OneStop,
    TwoStops,
    ThreeStops,
}

impl StopFlag {
    pub const ALL: [StopFlag; 4] = [
        StopFlag::NonStop,
        StopFlag::OneStop,
        StopFlag::TwoStops,
        StopFlag::ThreeStops,
    ];

    /// Number of stops this flag stands for.
    pub fn stops(self) -> u32 {
        match self {
            StopFlag::NonStop => 0,
            StopFlag::OneStop => 1,
            StopFlag::TwoStops => 2,
            StopFlag::ThreeStops => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StopFlag::NonStop => "nonStop",
            StopFlag::OneStop => "oneStop",
            StopFlag::TwoStops => "twoStops",
            StopFlag::ThreeStops => "threeStops",
        }
    }
}

impl fmt::Display for StopFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StopFlag {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "nonstop" | "0" => Ok(StopFlag::NonStop),
            "onestop" | "1" => Ok(StopFlag::OneStop),
            "twostops" | "2" => Ok(StopFlag::TwoStops),
            "threestops" | "3" => Ok(StopFlag::ThreeStops),
            _ => Err(BoardError::UnknownStopFlag {
                name: s.to_string(),
            }),
        }
    }
}

/// User action on the stop filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopAction {
    SelectAll,
    Toggle(StopFlag),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StopSelection {
    #[default]
    All,
    Only(BTreeSet<StopFlag>),
}

impl StopSelection {
    pub fn only<I: IntoIterator<Item = StopFlag>>(flags: I) -> Self {
        StopSelection::Only(flags.into_iter().collect())
    }

    /// Pure transition: selecting "all" resets every flag, toggling a flag
    /// leaves all-mode and flips just that flag. Toggling the last active
    /// flag off yields an empty selection; there is no fallback to all.
    pub fn apply(&self, action: StopAction) -> StopSelection {
        match action {
            StopAction::SelectAll => StopSelection::All,
            StopAction::Toggle(flag) => {
                let mut flags = match self {
                    StopSelection::All => BTreeSet::new(),
                    StopSelection::Only(flags) => flags.clone(),
                };
                if !flags.remove(&flag) {
                    flags.insert(flag);
                }
                StopSelection::Only(flags)
            }
        }
    }

    /// The degenerate selection with every flag off.
    pub fn none() -> Self {
        StopSelection::Only(BTreeSet::new())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StopSelection::All)
    }

    pub fn is_active(&self, flag: StopFlag) -> bool {
        match self {
            StopSelection::All => false,
            StopSelection::Only(flags) => flags.contains(&flag),
        }
    }

    pub fn matches(&self, stops: u32) -> bool {
        match self {
            StopSelection::All => true,
            StopSelection::Only(flags) => flags.iter().any(|flag| flag.stops() == stops),
        }
    }

    pub fn flags(&self) -> StopFlags {
        StopFlags {
            all: self.is_all(),
            non_stop: self.is_active(StopFlag::NonStop),
            one_stop: self.is_active(StopFlag::OneStop),
            two_stops: self.is_active(StopFlag::TwoStops),
            three_stops: self.is_active(StopFlag::ThreeStops),
        }
    }
}

impl fmt::Display for StopSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopSelection::All => f.write_str("all"),
            StopSelection::Only(flags) if flags.is_empty() => f.write_str("none"),
            StopSelection::Only(flags) => {
                let names: Vec<&str> = flags.iter().map(|flag| flag.name()).collect();
                f.write_str(&names.join(","))
            }
        }
    }
}

/// Checkbox view of a selection, shaped like the five flags of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopFlags {
    pub all: bool,
    pub non_stop: bool,
    pub one_stop: bool,
    pub two_stops: bool,
    pub three_stops: bool,
}

impl From<StopFlags> for StopSelection {
    fn from(flags: StopFlags) -> Self {
        if flags.all {
            return StopSelection::All;
        }
        StopSelection::only(
            [
                (flags.non_stop, StopFlag::NonStop),
                (flags.one_stop, StopFlag::OneStop),
                (flags.two_stops, StopFlag::TwoStops),
                (flags.three_stops, StopFlag::ThreeStops),
            ]
            .into_iter()
            .filter_map(|(on, flag)| on.then_some(flag)),
        )
    }
}

/// Parses filter names as given on the command line or in config.
/// `all` anywhere in the list wins.
pub fn parse_selection<S: AsRef<str>>(names: &[S]) -> Result<StopSelection, BoardError> {
    if names.is_empty() {
        return Ok(StopSelection::All);
    }

    let mut selection = StopSelection::none();
    for name in names {
        let name = name.as_ref();
        if name.trim().eq_ignore_ascii_case("all") {
            return Ok(StopSelection::All);
        }
        let flag: StopFlag = name.parse()?;
        if !selection.is_active(flag) {
            selection = selection.apply(StopAction::Toggle(flag));
        }
    }
    Ok(selection)
}

/// Tickets matching the selection, in their original order.
pub fn filter_tickets<'a>(tickets: &'a [Ticket], selection: &StopSelection) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|ticket| selection.matches(ticket.stops))
        .collect()
}

/// Same as [`filter_tickets`] but yields positions into `tickets`.
pub fn filter_indices(tickets: &[Ticket], selection: &StopSelection) -> Vec<usize> {
    tickets
        .iter()
        .enumerate()
        .filter(|(_, ticket)| selection.matches(ticket.stops))
        .map(|(index, _)| index)
        .collect()
}
