//! Refactor Game Engine
//!
//! Platform-agnostic core logic for REFACTOR, a thirty-day narrative game
//! about quitting the force for a keyboard. This crate provides the stat
//! ledger, day cycle, random encounters, scheduled story beats, and ending
//! rules without any terminal or audio dependencies.

pub mod activity;
pub mod audio;
pub mod boss;
pub mod constants;
pub mod data;
pub mod day;
pub mod events;
pub mod mentor;
pub mod rng;
pub mod seed;
pub mod state;

// Re-export commonly used types
pub use activity::{Activity, ActivityReport, CodingMode, perform};
pub use audio::{Cue, CueError, NullCuePlayer};
pub use boss::{
    AttackCheck, AttackDef, BossFight, BossPrompt, BossScript, BossScriptError, BossTurn,
};
pub use data::{Effects, EventBranch, EventChoice, EventDataError, EventDef, EventSet, Outcome};
pub use day::{DayReport, Happening, advance, salary_for_hatred};
pub use events::{EventReport, draw, resolve, skill_chance};
pub use mentor::{MentorMeeting, MentorOutcome, MentorPrompt, MentorTurn};
pub use rng::{boss_stream, derive_stream_seed};
pub use seed::{
    ShareCodeError, decode_to_seed, encode_friendly, generate_code_from_entropy, parse_seed,
    parse_share_code,
};
pub use state::{BossBuff, Ending, GameState, Ledger};

/// Trait for abstracting audio cue playback
/// Platform-specific implementations should provide this
pub trait CuePlayer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Play one cue
    ///
    /// # Errors
    ///
    /// Returns an error if the cue cannot be located or the platform
    /// player cannot start. Callers log the failure and keep playing;
    /// audio never interrupts the game.
    fn play(&self, cue: Cue) -> Result<(), Self::Error>;
}

/// Builds a fresh playthrough over the embedded narrative data.
#[must_use]
pub fn new_game(seed: u64) -> GameState {
    GameState::default().with_seed(seed, EventSet::default_set())
}
