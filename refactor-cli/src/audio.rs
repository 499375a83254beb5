//! Filesystem cue playback. Resolves cue files under an executable-aware
//! assets directory and optionally hands them to an external player
//! program. Every failure is reported, none of them stop the game.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use refactor_game::{Cue, CueError, CuePlayer};

/// Cue player backed by `.ogg` files on disk.
pub struct FsCuePlayer {
    base: PathBuf,
    player_cmd: Option<String>,
    muted: bool,
}

impl FsCuePlayer {
    #[must_use]
    pub fn new(assets: Option<PathBuf>, player_cmd: Option<String>, muted: bool) -> Self {
        let base = assets.unwrap_or_else(default_base);
        Self {
            base,
            player_cmd,
            muted,
        }
    }

    fn cue_path(&self, cue: Cue) -> PathBuf {
        self.base.join(cue.file_name())
    }
}

/// `assets/audio` next to the executable, or under the working directory
/// when the executable path cannot be resolved.
fn default_base() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("assets")
        .join("audio")
}

impl CuePlayer for FsCuePlayer {
    type Error = CueError;

    fn play(&self, cue: Cue) -> Result<(), CueError> {
        if self.muted {
            return Ok(());
        }
        let path = self.cue_path(cue);
        if !path.is_file() {
            return Err(CueError::Missing {
                path: path.display().to_string(),
            });
        }
        File::open(&path).map_err(|source| CueError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        if let Some(cmd) = &self.player_cmd {
            // Fire and forget; the clip outlives the next prompt anyway.
            Command::new(cmd)
                .arg(&path)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(CueError::PlayerSpawn)?;
        } else {
            log::debug!("cue {} ready at {}", cue.file_name(), path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_assets(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "refactor-audio-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).expect("create temp assets dir");
        dir
    }

    #[test]
    fn muted_player_skips_the_lookup_entirely() {
        let player = FsCuePlayer::new(Some(PathBuf::from("/definitely/not/here")), None, true);
        assert!(player.play(Cue::Title).is_ok());
    }

    #[test]
    fn missing_cue_names_the_path() {
        let dir = temp_assets("missing");
        let player = FsCuePlayer::new(Some(dir), None, false);
        match player.play(Cue::Showdown) {
            Err(CueError::Missing { path }) => assert!(path.ends_with("showdown.ogg")),
            other => panic!("expected a missing-cue error, got {other:?}"),
        }
    }

    #[test]
    fn present_cue_passes_the_open_check() {
        let dir = temp_assets("present");
        std::fs::write(dir.join(Cue::Payday.file_name()), b"not real ogg bytes")
            .expect("write cue file");
        let player = FsCuePlayer::new(Some(dir), None, false);
        assert!(player.play(Cue::Payday).is_ok());
    }

    #[test]
    fn default_base_points_at_the_audio_directory() {
        assert!(default_base().ends_with("assets/audio"));
    }
}
