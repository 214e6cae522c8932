//! Data structures: players, events, alias groups, and the per-run match context.

mod alias;
mod event;
mod matchup;
mod player;
mod store;

pub use alias::{AliasGroup, AliasTable};
pub use event::{Event, EventRegistry, PREFERRED_EVENT_NAME};
pub use matchup::{BracketType, MatchContext, RoundStage};
pub use player::{CharacterUsage, Player, TOP_CHARACTER_LIMIT, UNKNOWN_CHARACTER};
pub use store::DataStore;
