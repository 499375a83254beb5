//! Audio cue vocabulary. The core names the moments that carry a sound;
//! a platform [`CuePlayer`](crate::CuePlayer) decides how, or whether,
//! they are heard. Playback failure never interrupts play.

use std::convert::Infallible;
use thiserror::Error;

/// Story beats that carry a sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Title,
    Payday,
    MentorDinner,
    Showdown,
    Glitch,
    TrueEnding,
    BadEnding,
}

impl Cue {
    pub const ALL: [Cue; 7] = [
        Cue::Title,
        Cue::Payday,
        Cue::MentorDinner,
        Cue::Showdown,
        Cue::Glitch,
        Cue::TrueEnding,
        Cue::BadEnding,
    ];

    /// File name looked up under the platform's audio directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Cue::Title => "title.ogg",
            Cue::Payday => "payday.ogg",
            Cue::MentorDinner => "dinner.ogg",
            Cue::Showdown => "showdown.ogg",
            Cue::Glitch => "glitch.ogg",
            Cue::TrueEnding => "wide_awake.ogg",
            Cue::BadEnding => "flatline.ogg",
        }
    }
}

/// Why a cue failed to play.
#[derive(Debug, Error)]
pub enum CueError {
    #[error("cue file not found: {path}")]
    Missing { path: String },
    #[error("cue file unreadable: {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("audio player failed to start: {0}")]
    PlayerSpawn(std::io::Error),
}

/// Player that swallows every cue. Muted runs and tests use it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCuePlayer;

impl crate::CuePlayer for NullCuePlayer {
    type Error = Infallible;

    fn play(&self, _cue: Cue) -> Result<(), Self::Error> {
        Ok(())
    }
}
