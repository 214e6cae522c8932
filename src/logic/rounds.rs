//! Round detail normalization: shorthand tokens to canonical stage names.

use crate::models::{BracketType, RoundStage};

pub const QUARTERFINALS: &str = "Quarterfinals";
pub const SEMIFINALS: &str = "Semifinals";
pub const FINALS: &str = "Finals";
pub const GRAND_FINALS: &str = "Grand Finals";

/// Notice shown when Grand Finals is requested outside the winners bracket.
pub const GRAND_FINALS_NOTICE: &str =
    "Grand Finals only allowed in Winners bracket → using Finals.";

/// Result of normalizing a round detail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundResolution {
    pub round: RoundStage,
    /// Grand Finals was requested outside Winners and replaced with Finals.
    pub downgraded: bool,
}

/// Completion candidates for the round detail prompt.
pub fn round_detail_options() -> Vec<String> {
    (1..100)
        .map(|i| format!("r{i}"))
        .chain(
            ["qf", "sf", "f", "gf", QUARTERFINALS, SEMIFINALS, FINALS, GRAND_FINALS]
                .into_iter()
                .map(String::from),
        )
        .collect()
}

fn canonical_stage(token: &str) -> Option<&'static str> {
    match token {
        "qf" | "quarterfinals" => Some(QUARTERFINALS),
        "sf" | "semifinals" => Some(SEMIFINALS),
        "f" | "final" | "finals" => Some(FINALS),
        "gf" | "grandfinals" | "grand finals" => Some(GRAND_FINALS),
        _ => None,
    }
}

/// `r7` / `R07` -> "7". Kept as text so any digit run is accepted.
fn round_number(token: &str) -> Option<&str> {
    let digits = token.strip_prefix('r')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match digits.trim_start_matches('0') {
        "" => Some("0"),
        n => Some(n),
    }
}

/// Capitalize the first letter of each alphabetic run and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Map a raw round token to its stage name for the given bracket.
///
/// 1. An empty token has no stage. The bracket only matters for Grand Finals.
/// 2. `rN` becomes `Round N`.
/// 3. Known shorthands map to their canonical names; Grand Finals outside
///    Winners is downgraded to Finals.
/// 4. Anything else is kept, title-cased.
pub fn normalize_round(raw: &str, bracket: BracketType) -> RoundResolution {
    let token = raw.trim().to_lowercase();
    let mut downgraded = false;

    let stage = if token.is_empty() {
        String::new()
    } else if let Some(n) = round_number(&token) {
        format!("Round {n}")
    } else if let Some(stage) = canonical_stage(&token) {
        if stage == GRAND_FINALS && bracket != BracketType::Winners {
            log::debug!("{} requested in {}", GRAND_FINALS, bracket);
            downgraded = true;
            FINALS.to_string()
        } else {
            stage.to_string()
        }
    } else {
        title_case(raw.trim())
    };

    RoundResolution {
        round: RoundStage::new(bracket, stage),
        downgraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(raw: &str, bracket: BracketType) -> String {
        normalize_round(raw, bracket).round.stage
    }

    #[test]
    fn shorthand_tokens() {
        assert_eq!(stage("QF", BracketType::Winners), "Quarterfinals");
        assert_eq!(stage(" sf ", BracketType::Losers), "Semifinals");
        assert_eq!(stage("final", BracketType::Losers), "Finals");
        assert_eq!(stage("Grand Finals", BracketType::Winners), "Grand Finals");
        assert_eq!(stage("grandfinals", BracketType::Winners), "Grand Finals");
    }

    #[test]
    fn numbered_rounds() {
        assert_eq!(stage("r7", BracketType::Winners), "Round 7");
        assert_eq!(stage("R7", BracketType::Losers), "Round 7");
        assert_eq!(stage("r07", BracketType::Winners), "Round 7");
        assert_eq!(stage("r", BracketType::Winners), "R");
        assert_eq!(stage("r000", BracketType::Winners), "Round 0");
    }

    #[test]
    fn long_round_numbers_are_kept() {
        assert_eq!(
            stage("r0123456789012345678901234", BracketType::Winners),
            "Round 123456789012345678901234"
        );
    }

    #[test]
    fn bracket_does_not_change_numbered_rounds() {
        for bracket in BracketType::ALL {
            assert_eq!(stage("r7", bracket), "Round 7");
        }
    }

    #[test]
    fn grand_finals_downgraded_outside_winners() {
        let res = normalize_round("gf", BracketType::Losers);
        assert_eq!(res.round.stage, "Finals");
        assert!(res.downgraded);
        let res = normalize_round("gf", BracketType::Winners);
        assert_eq!(res.round.stage, "Grand Finals");
        assert!(!res.downgraded);
    }

    #[test]
    fn unknown_tokens_are_title_cased() {
        assert_eq!(stage("top 8", BracketType::Winners), "Top 8");
        assert_eq!(stage("semi-finals", BracketType::Losers), "Semi-Finals");
        assert_eq!(stage("TOP eight", BracketType::Winners), "Top Eight");
    }

    #[test]
    fn empty_token_has_no_stage() {
        assert_eq!(stage("", BracketType::Winners), "");
        assert_eq!(stage("   ", BracketType::Losers), "");
        assert_eq!(normalize_round("", BracketType::Pools).round.label(), "Pools");
    }

    #[test]
    fn pools_tokens_are_normalized() {
        assert_eq!(stage("qf", BracketType::Pools), "Quarterfinals");
        let res = normalize_round("gf", BracketType::Pools);
        assert_eq!(res.round.stage, "Finals");
        assert!(res.downgraded);
    }

    #[test]
    fn detail_options_cover_rounds_and_shorthands() {
        let opts = round_detail_options();
        assert_eq!(opts.first().map(String::as_str), Some("r1"));
        assert!(opts.contains(&"r99".to_string()));
        assert!(opts.contains(&"gf".to_string()));
    }
}
