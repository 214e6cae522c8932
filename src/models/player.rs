//! Player and CharacterUsage data structures.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder character used when nothing is known or chosen.
pub const UNKNOWN_CHARACTER: &str = "Unknown";

/// How many ranked characters are offered per player.
pub const TOP_CHARACTER_LIMIT: usize = 10;

/// Play counts per character, in the order characters were first recorded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CharacterUsage {
    entries: Vec<(String, u32)>,
}

impl CharacterUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Times `character` has been played; zero if never recorded.
    pub fn count(&self, character: &str) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| c == character)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Add one play. New characters are appended, keeping tie order stable.
    pub fn increment(&mut self, character: &str) -> u32 {
        match self.entries.iter_mut().find(|(c, _)| c == character) {
            Some((_, n)) => {
                *n += 1;
                *n
            }
            None => {
                self.entries.push((character.to_string(), 1));
                1
            }
        }
    }

    /// Characters by descending count, ties in insertion order, at most `limit`.
    pub fn ranked(&self, limit: usize) -> Vec<(String, u32)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(limit);
        sorted
    }
}

impl Serialize for CharacterUsage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (character, count) in &self.entries {
            map.serialize_entry(character, count)?;
        }
        map.end()
    }
}

struct CharacterUsageVisitor;

impl<'de> Visitor<'de> for CharacterUsageVisitor {
    type Value = CharacterUsage;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of character names to play counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<CharacterUsage, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, u32>()? {
            entries.push(entry);
        }
        Ok(CharacterUsage { entries })
    }
}

impl<'de> Deserialize<'de> for CharacterUsage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CharacterUsageVisitor)
    }
}

/// On-disk shape of a player: `[display_name, {character: count}]`.
type PlayerRecord = (String, CharacterUsage);

/// A player seen in at least one recorded match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerRecord", into = "PlayerRecord")]
pub struct Player {
    /// Casing as first entered; never changed afterwards.
    pub display_name: String,
    pub characters: CharacterUsage,
}

impl Player {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            characters: CharacterUsage::new(),
        }
    }

    /// Lookup key for a typed player name.
    pub fn key_for(input: &str) -> String {
        input.to_lowercase()
    }

    /// Top characters for prompting and auto-selection.
    pub fn top_characters(&self) -> Vec<(String, u32)> {
        self.characters.ranked(TOP_CHARACTER_LIMIT)
    }

    /// Record one play of `character`. The "Unknown" placeholder is never counted.
    pub fn record_play(&mut self, character: &str) {
        if character == UNKNOWN_CHARACTER {
            return;
        }
        let count = self.characters.increment(character);
        log::debug!("{} has now played {} {} time(s)", self.display_name, character, count);
    }
}

impl From<PlayerRecord> for Player {
    fn from((display_name, characters): PlayerRecord) -> Self {
        Self {
            display_name,
            characters,
        }
    }
}

impl From<Player> for PlayerRecord {
    fn from(p: Player) -> Self {
        (p.display_name, p.characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_is_descending_with_stable_ties() {
        let mut usage = CharacterUsage::new();
        for c in ["Luigi", "Mario", "Peach", "Mario", "Peach", "Mario"] {
            usage.increment(c);
        }
        usage.increment("Daisy");
        let ranked = usage.ranked(10);
        assert_eq!(
            ranked,
            vec![
                ("Mario".to_string(), 3),
                ("Peach".to_string(), 2),
                ("Luigi".to_string(), 1),
                ("Daisy".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_characters_capped_at_ten() {
        let mut p = Player::new("Sparg0");
        for i in 0..15 {
            p.record_play(&format!("Fighter {i}"));
        }
        assert_eq!(p.top_characters().len(), TOP_CHARACTER_LIMIT);
    }

    #[test]
    fn unknown_is_never_counted() {
        let mut p = Player::new("Alice");
        p.record_play(UNKNOWN_CHARACTER);
        assert!(p.characters.is_empty());
    }

    #[test]
    fn serializes_as_positional_pair() {
        let mut p = Player::new("MkLeo");
        p.record_play("Byleth");
        p.record_play("Byleth");
        p.record_play("Joker");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"["MkLeo",{"Byleth":2,"Joker":1}]"#);
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn key_is_lowercase() {
        assert_eq!(Player::key_for("MkLeo"), "mkleo");
    }
}
