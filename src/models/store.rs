//! DataStore: everything persisted between runs.

use crate::models::alias::AliasTable;
use crate::models::event::EventRegistry;
use crate::models::player::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Players, events, and character configuration.
///
/// Loaded once at the start of a run, mutated in memory, saved once at the end.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DataStore {
    /// Keyed by lowercase player name; saved in key order.
    #[serde(default)]
    pub players: BTreeMap<String, Player>,
    #[serde(default)]
    pub events: EventRegistry,
    /// Known character names, offered when a player has no history.
    #[serde(default)]
    pub character_list: Vec<String>,
    #[serde(default)]
    pub character_aliases: AliasTable,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a player case-insensitively.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(&Player::key_for(name))
    }

    /// Look up a player, creating one with `input` as display name on first use.
    pub fn player_entry(&mut self, input: &str) -> &mut Player {
        self.players
            .entry(Player::key_for(input))
            .or_insert_with(|| {
                log::debug!("New player {}", input);
                Player::new(input)
            })
    }

    /// Display names of all known players (for completion).
    pub fn player_names(&self) -> Vec<String> {
        self.players.values().map(|p| p.display_name.clone()).collect()
    }
}
