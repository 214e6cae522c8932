//! Video description: match details, links, and hashtags.

use crate::models::{AliasTable, Event, MatchContext, RoundStage};

pub const GAME_NAME: &str = "Super Smash Bros. Ultimate";
pub const PLAYLIST_PLACEHOLDER: &str = "[insert playlist link]";

/// Round labels played as best-of-5 (compared case-insensitively).
const BEST_OF_FIVE_ROUNDS: [&str; 4] = [
    "losers semifinals",
    "losers finals",
    "winners finals",
    "winners grand finals",
];

/// "Best-of-5" for late bracket rounds, "Best-of-3" otherwise.
pub fn match_format(round: &RoundStage) -> &'static str {
    let label = round.label().to_lowercase();
    if BEST_OF_FIVE_ROUNDS.contains(&label.as_str()) {
        "Best-of-5"
    } else {
        "Best-of-3"
    }
}

fn hashtag(s: &str) -> String {
    s.replace(' ', "")
}

/// Multi-line description for a set.
///
/// The playlist line falls back to a placeholder; the bracket line is only present
/// when the event has a bracket link.
pub fn compose_description(
    ctx: &MatchContext,
    event: Option<&Event>,
    round: &RoundStage,
    aliases: &AliasTable,
) -> String {
    let (lead1, lead2) = ctx.lead_characters();
    let c1 = aliases.canonicalize(lead1);
    let c2 = aliases.canonicalize(lead2);
    let p1 = &ctx.player1;
    let p2 = &ctx.player2;
    let event_title = ctx.event_title();

    let playlist = event
        .and_then(|e| e.playlist.as_deref())
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(PLAYLIST_PLACEHOLDER);
    let bracket = event
        .and_then(|e| e.bracket.as_deref())
        .filter(|l| !l.trim().is_empty());

    let mut lines = vec![
        format!("{event_title} – {p1} vs {p2} – {GAME_NAME}\n"),
        format!(
            "This is a recorded match from {event_title}, part of our ongoing weekly {GAME_NAME} series. \
             In this set, {p1} and {p2} face off using {c1} and {c2} respectively.\n"
        ),
        "Match Details:".to_string(),
        format!("Game: {GAME_NAME}"),
        format!("Event: {event_title}"),
        format!("Players: {p1} vs {p2}"),
        format!("Characters: {c1} vs {c2}"),
        format!("Format: {}", match_format(round)),
        String::new(),
        format!("Watch more matches from {event_title} in the full playlist: {playlist}"),
    ];
    if let Some(link) = bracket {
        lines.push(format!("Full bracket and results: {link}"));
    }
    lines.push(format!(
        "\nSubscribe for more competitive {GAME_NAME} content, including full sets, \
         tournament highlights, and weekly uploads.\n"
    ));

    let hashtags = [
        "#SuperSmashBrosUltimate".to_string(),
        format!("#{}Vs{}", hashtag(c1), hashtag(c2)),
        "#SmashUltimateTournament".to_string(),
        format!("#{}", hashtag(p1)),
        format!("#{}", hashtag(p2)),
        format!("#{}{}", hashtag(&ctx.event_name), ctx.event_number),
    ];
    lines.push(hashtags.join(" "));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BracketType;

    fn ctx() -> MatchContext {
        MatchContext {
            player1: "Alice".into(),
            player2: "Big Bob".into(),
            chars1: vec!["R.O.B.".into()],
            chars2: vec!["Donkey Kong".into()],
            event_name: "PVL Weekly".into(),
            event_number: 12,
        }
    }

    fn aliases() -> AliasTable {
        let mut t = AliasTable::new();
        t.add_group("ROB", ["R.O.B."]);
        t
    }

    #[test]
    fn format_by_round() {
        let five = [
            RoundStage::new(BracketType::Losers, "Semifinals"),
            RoundStage::new(BracketType::Losers, "Finals"),
            RoundStage::new(BracketType::Winners, "Finals"),
            RoundStage::new(BracketType::Winners, "grand finals"),
        ];
        for r in &five {
            assert_eq!(match_format(r), "Best-of-5", "{}", r);
        }
        assert_eq!(match_format(&RoundStage::new(BracketType::Winners, "Semifinals")), "Best-of-3");
        assert_eq!(match_format(&RoundStage::new(BracketType::Pools, "")), "Best-of-3");
        assert_eq!(match_format(&RoundStage::new(BracketType::Losers, "Round 2")), "Best-of-3");
    }

    #[test]
    fn placeholder_playlist_and_no_bracket_line() {
        let round = RoundStage::new(BracketType::Winners, "Round 1");
        let desc = compose_description(&ctx(), None, &round, &aliases());
        assert!(desc.contains("in the full playlist: [insert playlist link]"));
        assert!(!desc.contains("Full bracket and results"));
        assert!(desc.contains("Characters: ROB vs Donkey Kong"));
        assert!(desc.contains("Format: Best-of-3"));
    }

    #[test]
    fn links_and_hashtags() {
        let mut event = Event::new("PVL Weekly", 12);
        event.playlist = Some("https://youtube.com/pl".into());
        event.bracket = Some("https://start.gg/pvl-12".into());
        let round = RoundStage::new(BracketType::Winners, "Grand Finals");
        let desc = compose_description(&ctx(), Some(&event), &round, &aliases());

        let lines: Vec<&str> = desc.lines().collect();
        assert_eq!(lines[0], "PVL Weekly #12 – Alice vs Big Bob – Super Smash Bros. Ultimate");
        assert!(desc.contains(
            "Watch more matches from PVL Weekly #12 in the full playlist: https://youtube.com/pl"
        ));
        assert!(desc.contains("\nFull bracket and results: https://start.gg/pvl-12\n"));
        assert!(desc.contains("Format: Best-of-5"));
        assert_eq!(
            *lines.last().unwrap(),
            "#SuperSmashBrosUltimate #ROBVsDonkeyKong #SmashUltimateTournament #Alice #BigBob #PVLWeekly12"
        );
    }

    #[test]
    fn unknown_characters_without_picks() {
        let mut c = ctx();
        c.chars1.clear();
        c.chars2.clear();
        let round = RoundStage::new(BracketType::Pools, "");
        let desc = compose_description(&c, None, &round, &AliasTable::new());
        assert!(desc.contains("face off using Unknown and Unknown respectively."));
        assert!(desc.contains("#UnknownVsUnknown"));
    }
}
