//! MatchContext, BracketType, and RoundStage for one recorded set.

use crate::error::InputError;
use crate::models::player::UNKNOWN_CHARACTER;
use std::fmt;
use std::str::FromStr;

/// Which part of the bracket the set was played in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BracketType {
    Winners,
    Losers,
    Pools,
}

impl BracketType {
    pub const ALL: [BracketType; 3] = [
        BracketType::Winners,
        BracketType::Losers,
        BracketType::Pools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BracketType::Winners => "Winners",
            BracketType::Losers => "Losers",
            BracketType::Pools => "Pools",
        }
    }

    /// Winners and Losers sets carry a round detail; pools do not.
    pub fn has_rounds(self) -> bool {
        !matches!(self, BracketType::Pools)
    }
}

impl fmt::Display for BracketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BracketType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BracketType::ALL
            .into_iter()
            .find(|b| b.as_str().to_lowercase() == wanted)
            .ok_or_else(|| InputError::UnknownBracket(s.to_string()))
    }
}

/// Bracket plus normalized stage, e.g. Winners / "Grand Finals".
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundStage {
    pub bracket: BracketType,
    /// Empty for pools or when no detail was given.
    pub stage: String,
}

impl RoundStage {
    pub fn new(bracket: BracketType, stage: impl Into<String>) -> Self {
        Self {
            bracket,
            stage: stage.into(),
        }
    }

    /// "Winners Grand Finals", "Losers Round 3", or just "Pools".
    pub fn label(&self) -> String {
        if self.stage.is_empty() {
            self.bracket.to_string()
        } else {
            format!("{} {}", self.bracket, self.stage)
        }
    }
}

impl fmt::Display for RoundStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

fn lead(chars: &[String]) -> &str {
    chars.first().map(String::as_str).unwrap_or(UNKNOWN_CHARACTER)
}

/// Players, characters, and event for the set being uploaded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchContext {
    pub player1: String,
    pub player2: String,
    /// Characters in slot order; may contain "Unknown".
    pub chars1: Vec<String>,
    pub chars2: Vec<String>,
    pub event_name: String,
    pub event_number: u32,
}

impl MatchContext {
    /// First chosen character for each player, or "Unknown".
    pub fn lead_characters(&self) -> (&str, &str) {
        (lead(&self.chars1), lead(&self.chars2))
    }

    /// "{event_name} #{event_number}".
    pub fn event_title(&self) -> String {
        format!("{} #{}", self.event_name, self.event_number)
    }
}
