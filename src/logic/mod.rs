//! Metadata generation: character selection, rounds, title, tags, description.

mod characters;
mod description;
mod rounds;
mod tags;
mod title;

pub use characters::{
    character_candidates, parse_character_count, select_characters, CharacterPicker, SlotChoice,
};
pub use description::{compose_description, match_format, GAME_NAME, PLAYLIST_PLACEHOLDER};
pub use rounds::{
    normalize_round, round_detail_options, title_case, RoundResolution, FINALS, GRAND_FINALS,
    GRAND_FINALS_NOTICE, QUARTERFINALS, SEMIFINALS,
};
pub use tags::{candidate_tags, compose_tags, dedup_tags, fit_tags, BASE_TAGS, MAX_TAGS_LEN};
pub use title::{compose_title, ComposedTitle};
