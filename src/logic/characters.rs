//! Character selection: rank a player's history and fill each slot.

use crate::error::InputError;
use crate::models::{DataStore, Player, UNKNOWN_CHARACTER};
use std::collections::HashSet;

/// How one character slot was filled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SlotChoice {
    /// Typed by the operator.
    Explicit(String),
    /// Next most-played character not used yet this session.
    Auto(String),
    /// Nothing typed and no history left.
    Unknown,
}

impl SlotChoice {
    pub fn name(&self) -> &str {
        match self {
            SlotChoice::Explicit(name) | SlotChoice::Auto(name) => name,
            SlotChoice::Unknown => UNKNOWN_CHARACTER,
        }
    }
}

/// Fills character slots for one player, one at a time.
///
/// The ranking is taken once, before any slot is counted, so picks made in this
/// session do not reorder the auto-selection.
pub struct CharacterPicker<'a> {
    player: &'a mut Player,
    ranked: Vec<(String, u32)>,
    used: HashSet<String>,
    chosen: Vec<String>,
}

impl<'a> CharacterPicker<'a> {
    pub fn new(player: &'a mut Player) -> Self {
        let ranked = player.top_characters();
        Self {
            player,
            ranked,
            used: HashSet::new(),
            chosen: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.player.display_name
    }

    /// Ranked characters and counts as they stood before this session.
    pub fn ranked(&self) -> &[(String, u32)] {
        &self.ranked
    }

    /// Fill the next slot and count the play immediately.
    ///
    /// An explicit name is used verbatim, even if already chosen. Otherwise the
    /// highest-ranked unused character is taken, or "Unknown" when none remain.
    pub fn pick(&mut self, explicit: Option<&str>) -> SlotChoice {
        let choice = match explicit.filter(|s| !s.is_empty()) {
            Some(name) => SlotChoice::Explicit(name.to_string()),
            None => self
                .ranked
                .iter()
                .find(|(c, _)| !self.used.contains(c))
                .map(|(c, _)| SlotChoice::Auto(c.clone()))
                .unwrap_or(SlotChoice::Unknown),
        };
        let name = choice.name().to_string();
        self.player.record_play(&name);
        self.used.insert(name.clone());
        self.chosen.push(name);
        choice
    }

    /// Display name and chosen characters in slot order.
    pub fn finish(self) -> (String, Vec<String>) {
        (self.player.display_name.clone(), self.chosen)
    }
}

/// Parse "how many characters" input: blank means 1, zero or less is rejected.
pub fn parse_character_count(raw: &str) -> Result<usize, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(1);
    }
    let n: i64 = raw
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;
    if n <= 0 {
        return Err(InputError::NotPositive);
    }
    usize::try_from(n).map_err(|_| InputError::NotANumber(raw.to_string()))
}

/// Completion candidates for a player's character slots: their ranked history,
/// or the store's full character list when they have none.
pub fn character_candidates(store: &DataStore, player_input: &str) -> Vec<String> {
    let top: Vec<String> = store
        .player(player_input)
        .map(|p| p.top_characters().into_iter().map(|(c, _)| c).collect())
        .unwrap_or_default();
    if top.is_empty() {
        store.character_list.clone()
    } else {
        top
    }
}

/// Select characters for a player, creating the player on first reference.
///
/// `slots` holds one entry per character played; `None` asks for auto-selection.
/// Every chosen character other than "Unknown" has its count raised by one.
pub fn select_characters(
    store: &mut DataStore,
    player_input: &str,
    slots: &[Option<String>],
) -> (String, Vec<String>) {
    let mut picker = CharacterPicker::new(store.player_entry(player_input));
    for slot in slots {
        picker.pick(slot.as_deref());
    }
    picker.finish()
}
