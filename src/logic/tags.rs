//! Tag list: base tags, alias-expanded matchups, and player tags within the length limit.

use crate::models::{AliasTable, MatchContext};
use std::collections::HashSet;

/// Maximum length of the joined tag string, commas included.
pub const MAX_TAGS_LEN: usize = 400;

/// Fixed tags placed ahead of everything else.
pub const BASE_TAGS: [&str; 6] = [
    "ssbu",
    "Super Smash Bros. Ultimate",
    "tournament",
    "ssbu gameplay",
    "competitive smash",
    "smash ultimate 2025",
];

/// All tags in priority order, before deduplication.
///
/// 1. Base tags, "{event} {n}", both players.
/// 2. For each player 1 character and each player 2 character: every pairing of
///    their aliases as "{a1} vs {a2}", then "{p1} {a1}" for each alias of the first.
///    After each player 1 character, "{p2} {a2}" for every player 2 alias.
/// 3. "{p1} vs {p2}" and "{p2} vs {p1}".
pub fn candidate_tags(ctx: &MatchContext, aliases: &AliasTable) -> Vec<String> {
    let p1 = &ctx.player1;
    let p2 = &ctx.player2;

    let mut tags: Vec<String> = BASE_TAGS.iter().map(|t| t.to_string()).collect();
    tags.push(format!("{} {}", ctx.event_name, ctx.event_number));
    tags.push(p1.clone());
    tags.push(p2.clone());

    let expanded1: Vec<Vec<String>> = ctx.chars1.iter().map(|c| aliases.expand(c)).collect();
    let expanded2: Vec<Vec<String>> = ctx.chars2.iter().map(|c| aliases.expand(c)).collect();

    for names1 in &expanded1 {
        for names2 in &expanded2 {
            for a1 in names1 {
                for a2 in names2 {
                    tags.push(format!("{a1} vs {a2}"));
                }
            }
            tags.extend(names1.iter().map(|a1| format!("{p1} {a1}")));
        }
        for names2 in &expanded2 {
            tags.extend(names2.iter().map(|a2| format!("{p2} {a2}")));
        }
    }

    tags.push(format!("{p1} vs {p2}"));
    tags.push(format!("{p2} vs {p1}"));
    tags
}

/// Drop case-insensitive duplicates, keeping the first occurrence.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|t| seen.insert(t.to_lowercase()))
        .collect()
}

/// Longest prefix of `tags` whose joined length stays within `limit`.
///
/// Each tag costs its length plus one for the separator.
pub fn fit_tags(tags: &[String], limit: usize) -> Vec<&str> {
    let mut total = 0;
    let mut out = Vec::new();
    for tag in tags {
        let cost = tag.chars().count() + 1;
        if total + cost > limit {
            break;
        }
        total += cost;
        out.push(tag.as_str());
    }
    out
}

/// Comma-joined, deduplicated tag string of at most `MAX_TAGS_LEN` characters.
pub fn compose_tags(ctx: &MatchContext, aliases: &AliasTable) -> String {
    let unique = dedup_tags(candidate_tags(ctx, aliases));
    let kept = fit_tags(&unique, MAX_TAGS_LEN);
    if kept.len() < unique.len() {
        log::debug!("Tag limit reached: kept {} of {} tags", kept.len(), unique.len());
    }
    kept.join(",")
}
