mod app;
mod audio;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use refactor_game::{BossScript, EventSet, decode_to_seed, generate_code_from_entropy, parse_seed};

use app::App;
use audio::FsCuePlayer;

#[derive(Debug, Parser)]
#[command(name = "refactor", version = "0.3.0")]
#[command(about = "REFACTOR - thirty days between the badge and the build")]
struct Args {
    /// Replay a run: a share code like RF-STACK42 or a bare integer seed
    #[arg(long)]
    seed: Option<String>,

    /// Suppress audio cues entirely
    #[arg(long)]
    mute: bool,

    /// External program handed each cue file (e.g. mpv, afplay)
    #[arg(long)]
    audio_player: Option<String>,

    /// Override the cue directory (default: assets/audio next to the binary)
    #[arg(long)]
    assets: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    EventSet::load_default().context("embedded event roster is broken")?;
    BossScript::load_default().context("embedded confrontation script is broken")?;

    let (seed, share_code) = resolve_seed(args.seed.as_deref())?;
    let player = FsCuePlayer::new(args.assets, args.audio_player, args.mute);
    App::new(seed, share_code, player).run()
}

/// Turns `--seed` into a numeric seed plus the label shown on the title
/// screen. Fresh runs draw a share code from the clock.
fn resolve_seed(arg: Option<&str>) -> Result<(u64, String)> {
    match arg {
        Some(input) => {
            let seed = parse_seed(input)
                .with_context(|| format!("'{input}' is neither a number nor an RF- share code"))?;
            Ok((seed, input.trim().to_ascii_uppercase()))
        }
        None => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            let entropy = now.as_secs().wrapping_mul(1_000_000_007) ^ u64::from(now.subsec_nanos());
            let code = generate_code_from_entropy(entropy);
            let seed = decode_to_seed(&code).context("generated share code must decode")?;
            Ok((seed, code))
        }
    }
}
