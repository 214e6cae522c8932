//! Video title: event, round, players, and lead characters.

use crate::logic::rounds::normalize_round;
use crate::models::{BracketType, DataStore, MatchContext, RoundStage};

/// A generated title and the round stage it was built from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComposedTitle {
    pub title: String,
    pub round: RoundStage,
    /// Grand Finals was requested outside Winners and replaced with Finals.
    pub downgraded: bool,
}

/// Build the title for a set and record the event in the registry.
///
/// `"{event} #{n} {bracket} {stage} - {p1} ({c1}) vs {p2} ({c2}) - SSBU"`, where the
/// characters are the first picks canonicalized through the alias table. The event
/// is upserted whenever its name is non-empty.
pub fn compose_title(
    store: &mut DataStore,
    ctx: &MatchContext,
    bracket: BracketType,
    round_detail: &str,
) -> ComposedTitle {
    let resolution = normalize_round(round_detail, bracket);

    let (lead1, lead2) = ctx.lead_characters();
    let aliases = &store.character_aliases;
    let title = format!(
        "{} {} - {} ({}) vs {} ({}) - SSBU",
        ctx.event_title(),
        resolution.round.label(),
        ctx.player1,
        aliases.canonicalize(lead1),
        ctx.player2,
        aliases.canonicalize(lead2),
    );

    if !ctx.event_name.is_empty() {
        store.events.record_if_new(&ctx.event_name, ctx.event_number);
    }

    ComposedTitle {
        title,
        round: resolution.round,
        downgraded: resolution.downgraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> MatchContext {
        MatchContext {
            player1: "Alice".into(),
            player2: "Bob".into(),
            chars1: vec![],
            chars2: vec!["Mario".into()],
            event_name: "Weekly".into(),
            event_number: 1,
        }
    }

    #[test]
    fn winners_grand_finals_title() {
        let mut store = DataStore::new();
        let out = compose_title(&mut store, &ctx(), BracketType::Winners, "gf");
        assert_eq!(
            out.title,
            "Weekly #1 Winners Grand Finals - Alice (Unknown) vs Bob (Mario) - SSBU"
        );
        assert_eq!(out.round.label(), "Winners Grand Finals");
        assert_eq!(store.events.latest_number("weekly"), 1);
    }

    #[test]
    fn pools_title_has_no_stage() {
        let mut store = DataStore::new();
        let out = compose_title(&mut store, &ctx(), BracketType::Pools, "");
        assert_eq!(out.title, "Weekly #1 Pools - Alice (Unknown) vs Bob (Mario) - SSBU");
    }

    #[test]
    fn lead_character_is_canonicalized() {
        let mut store = DataStore::new();
        store.character_aliases.add_group("ROB", ["R.O.B."]);
        let mut c = ctx();
        c.chars1 = vec!["R.O.B.".into(), "Kirby".into()];
        let out = compose_title(&mut store, &c, BracketType::Losers, "gf");
        assert!(out.downgraded);
        assert_eq!(out.title, "Weekly #1 Losers Finals - Alice (ROB) vs Bob (Mario) - SSBU");
    }

    #[test]
    fn empty_event_name_is_not_recorded() {
        let mut store = DataStore::new();
        let mut c = ctx();
        c.event_name.clear();
        compose_title(&mut store, &c, BracketType::Winners, "r1");
        assert!(store.events.is_empty());
    }

    #[test]
    fn higher_number_raises_registry() {
        let mut store = DataStore::new();
        store.events.record_if_new("Weekly", 3);
        let mut c = ctx();
        c.event_number = 7;
        compose_title(&mut store, &c, BracketType::Winners, "r1");
        assert_eq!(store.events.latest_number("Weekly"), 7);
    }
}
