//! Recurring events: name, highest sequence number, and optional links.

use serde::{Deserialize, Serialize};

/// Default event offered when it already exists in the registry.
pub const PREFERRED_EVENT_NAME: &str = "PVL Weekly";

/// One recurring event. Names are unique case-insensitively.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// Highest sequence number recorded so far.
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist: Option<String>,
    /// Bracket or results page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket: Option<String>,
}

fn is_unset(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Event {
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            number,
            playlist: None,
            bracket: None,
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn needs_playlist(&self) -> bool {
        is_unset(&self.playlist)
    }

    pub fn needs_bracket(&self) -> bool {
        is_unset(&self.bracket)
    }

    /// Fill in links that are not set yet. Existing non-empty values are kept and
    /// blank input is ignored. Returns whether anything changed.
    pub fn attach_links(&mut self, playlist: Option<&str>, bracket: Option<&str>) -> bool {
        let mut updated = false;
        if let (true, Some(link)) = (self.needs_playlist(), supplied(playlist)) {
            self.playlist = Some(link.to_string());
            updated = true;
        }
        if let (true, Some(link)) = (self.needs_bracket(), supplied(bracket)) {
            self.bracket = Some(link.to_string());
            updated = true;
        }
        updated
    }
}

/// All known events. Grows by upsert only; records are never removed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRegistry {
    events: Vec<Event>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.matches_name(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.matches_name(name))
    }

    /// Highest stored number for `name`; a fresh event starts at 1.
    pub fn latest_number(&self, name: &str) -> u32 {
        self.events
            .iter()
            .filter(|e| e.matches_name(name))
            .map(|e| e.number)
            .max()
            .unwrap_or(1)
    }

    /// Create the event, or raise its stored number to `number`. Never lowers it.
    pub fn record_if_new(&mut self, name: &str, number: u32) {
        match self.get_mut(name) {
            Some(event) => {
                if number > event.number {
                    log::debug!("{}: latest number {} -> {}", event.name, event.number, number);
                    event.number = number;
                }
            }
            None => {
                log::debug!("New event {} #{}", name, number);
                self.events.push(Event::new(name, number));
            }
        }
    }

    /// Exact name and number match first, then any record with the same name.
    ///
    /// Only one record per name ever exists, so the name-only fallback is what
    /// normally answers once a later number has been recorded.
    pub fn find_by_name_and_number(&self, name: &str, number: u32) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| e.matches_name(name) && e.number == number)
            .or_else(|| self.get(name))
    }

    pub fn find_by_name_and_number_mut(&mut self, name: &str, number: u32) -> Option<&mut Event> {
        let idx = self
            .events
            .iter()
            .position(|e| e.matches_name(name) && e.number == number)
            .or_else(|| self.events.iter().position(|e| e.matches_name(name)))?;
        self.events.get_mut(idx)
    }

    /// Distinct names, sorted case-insensitively.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for e in &self.events {
            if !names.contains(&e.name) {
                names.push(e.name.clone());
            }
        }
        names.sort_by_key(|n| n.to_lowercase());
        names
    }

    /// "PVL Weekly" when known, else the first name alphabetically, else empty.
    pub fn default_name(&self) -> String {
        let names = self.names();
        if names.iter().any(|n| n == PREFERRED_EVENT_NAME) {
            return PREFERRED_EVENT_NAME.to_string();
        }
        names.into_iter().next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_number_defaults_to_one() {
        let reg = EventRegistry::new();
        assert_eq!(reg.latest_number("Weekly"), 1);
    }

    #[test]
    fn record_never_lowers() {
        let mut reg = EventRegistry::new();
        reg.record_if_new("Weekly", 5);
        reg.record_if_new("weekly", 3);
        reg.record_if_new("WEEKLY", 5);
        assert_eq!(reg.latest_number("Weekly"), 5);
        reg.record_if_new("Weekly", 6);
        assert_eq!(reg.latest_number("weekly"), 6);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn stored_name_keeps_first_casing() {
        let mut reg = EventRegistry::new();
        reg.record_if_new("Smash Night", 1);
        reg.record_if_new("SMASH NIGHT", 2);
        assert_eq!(reg.get("smash night").unwrap().name, "Smash Night");
    }

    #[test]
    fn find_falls_back_to_name_only() {
        let mut reg = EventRegistry::new();
        reg.record_if_new("Weekly", 4);
        assert_eq!(reg.find_by_name_and_number("weekly", 4).unwrap().number, 4);
        assert_eq!(reg.find_by_name_and_number("Weekly", 2).unwrap().number, 4);
        assert!(reg.find_by_name_and_number("Monthly", 4).is_none());
    }

    #[test]
    fn attach_links_only_fills_missing() {
        let mut e = Event::new("Weekly", 1);
        assert!(e.attach_links(Some("https://youtube.com/playlist"), None));
        assert!(!e.attach_links(Some("https://other"), Some("  ")));
        assert_eq!(e.playlist.as_deref(), Some("https://youtube.com/playlist"));
        assert!(e.bracket.is_none());
        assert!(e.attach_links(None, Some("https://start.gg/weekly")));
        assert_eq!(e.bracket.as_deref(), Some("https://start.gg/weekly"));
    }

    #[test]
    fn empty_stored_link_counts_as_missing() {
        let mut e = Event::new("Weekly", 1);
        e.playlist = Some(String::new());
        assert!(e.needs_playlist());
        assert!(e.attach_links(Some("https://pl"), None));
    }

    #[test]
    fn default_name_prefers_pvl_weekly() {
        let mut reg = EventRegistry::new();
        assert_eq!(reg.default_name(), "");
        reg.record_if_new("Zeta Cup", 1);
        reg.record_if_new("alpha series", 1);
        assert_eq!(reg.default_name(), "alpha series");
        reg.record_if_new("PVL Weekly", 9);
        assert_eq!(reg.default_name(), "PVL Weekly");
        assert_eq!(reg.names(), ["alpha series", "PVL Weekly", "Zeta Cup"]);
    }

    #[test]
    fn links_omitted_from_json_when_absent() {
        let e = Event::new("Weekly", 2);
        assert_eq!(serde_json::to_string(&e).unwrap(), r#"{"name":"Weekly","number":2}"#);
    }
}
