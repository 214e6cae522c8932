//! Smash tournament VOD helper: library with models, metadata generation, and the interactive flow.

pub mod error;
pub mod logic;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{InputError, StoreError};
pub use logic::{
    candidate_tags, character_candidates, compose_description, compose_tags, compose_title,
    match_format, normalize_round, parse_character_count, select_characters, CharacterPicker,
    ComposedTitle, RoundResolution, SlotChoice, MAX_TAGS_LEN,
};
pub use models::{
    AliasGroup, AliasTable, BracketType, CharacterUsage, DataStore, Event, EventRegistry,
    MatchContext, Player, RoundStage, UNKNOWN_CHARACTER,
};
pub use session::{run_session, Prompter, SessionOutput, TerminalPrompter};
