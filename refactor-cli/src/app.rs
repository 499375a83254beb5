//! The interactive session: menu router, story-beat drivers, and the
//! ending exits. All randomness lives in the engine; this layer only
//! relays prompts and answers.

use anyhow::Result;
use log::warn;

use refactor_game::{
    Activity, BossFight, BossScript, BossTurn, CodingMode, Cue, CuePlayer, Ending, EventSet,
    GameState, Happening, MentorMeeting, MentorTurn, advance, new_game, perform, resolve,
};

use crate::audio::FsCuePlayer;
use crate::input;
use crate::render;

/// One terminal playthrough. Lives until an ending or EOF.
pub struct App {
    state: GameState,
    player: FsCuePlayer,
    share_code: String,
}

impl App {
    #[must_use]
    pub fn new(seed: u64, share_code: String, player: FsCuePlayer) -> Self {
        Self {
            state: new_game(seed),
            player,
            share_code,
        }
    }

    /// Runs the menu loop until an ending is recorded or stdin closes.
    /// Both paths return cleanly; endings are the designed exits.
    pub fn run(&mut self) -> Result<()> {
        render::title(&self.share_code);
        self.cue(Cue::Title);

        loop {
            if let Some(ending) = self.state.evaluate_ending() {
                self.finish(ending);
                return Ok(());
            }
            render::menu(&self.state);
            let Some(pick) = input::read_pick(4)? else {
                render::farewell();
                return Ok(());
            };
            let keep_going = match pick {
                0 => {
                    render::stats(&self.state);
                    true
                }
                1 => self.run_activity()?,
                2 => {
                    render::contacts();
                    true
                }
                _ => self.end_day()?,
            };
            if !keep_going {
                render::farewell();
                return Ok(());
            }
        }
    }

    /// Evening activity submenu. `Ok(false)` means stdin closed.
    fn run_activity(&mut self) -> Result<bool> {
        render::activity_menu();
        let Some(pick) = input::read_pick(5)? else {
            return Ok(false);
        };
        let activity = match pick {
            0 => Activity::Gym,
            1 => Activity::Therapy,
            2 => Activity::NightShift,
            3 => {
                render::coding_menu();
                let Some(sub) = input::read_pick(4)? else {
                    return Ok(false);
                };
                match sub {
                    0 => Activity::Coding(CodingMode::Tutorials),
                    1 => Activity::Coding(CodingMode::SideProject),
                    2 => Activity::Coding(CodingMode::Freelance),
                    _ => return Ok(true),
                }
            }
            _ => return Ok(true),
        };
        let report = perform(&mut self.state, activity);
        render::lines(&report.lines);
        Ok(true)
    }

    /// Turns the day over, re-advancing when an encounter swallows the
    /// next one. `Ok(false)` means stdin closed mid-story.
    fn end_day(&mut self) -> Result<bool> {
        if !self.state.activity_done {
            render::confirm_idle();
            let Some(pick) = input::read_pick(2)? else {
                return Ok(false);
            };
            if pick == 1 {
                return Ok(true);
            }
        }
        let events = EventSet::default_set();
        loop {
            let report = advance(&mut self.state, events);
            render::day_header(&report);
            match report.happening {
                Happening::Quiet => {}
                Happening::Salary { .. } => self.cue(Cue::Payday),
                Happening::Mentor => return self.run_mentor(),
                Happening::Boss => return self.run_boss(),
                Happening::Event(def) => {
                    render::event(def);
                    let Some(pick) = input::read_pick(def.choices.len())? else {
                        return Ok(false);
                    };
                    if let Some(outcome) = resolve(&mut self.state, def, pick) {
                        render::lines(&outcome.lines);
                        if outcome.consumed_day {
                            continue;
                        }
                    }
                }
            }
            return Ok(true);
        }
    }

    fn run_mentor(&mut self) -> Result<bool> {
        self.cue(Cue::MentorDinner);
        let (mut meeting, mut prompt) = MentorMeeting::begin();
        loop {
            render::mentor_prompt(&prompt);
            let Some(pick) = input::read_pick(prompt.options.len())? else {
                return Ok(false);
            };
            match meeting.answer(&mut self.state, pick) {
                Some(MentorTurn::Next { lines, prompt: next }) => {
                    render::lines(&lines);
                    prompt = next;
                }
                Some(MentorTurn::Done { lines, .. }) => {
                    render::lines(&lines);
                    return Ok(true);
                }
                None => {}
            }
        }
    }

    fn run_boss(&mut self) -> Result<bool> {
        self.cue(Cue::Showdown);
        let script = BossScript::default_script();
        let (mut fight, mut prompt) = BossFight::begin(&self.state, script);
        loop {
            render::boss_prompt(&prompt, fight.player_hp(), fight.boss_hp());
            let Some(pick) = input::read_pick(prompt.options.len())? else {
                return Ok(false);
            };
            match fight.advance(&mut self.state, pick) {
                Some(BossTurn::Round { lines, prompt: next }) => {
                    render::lines(&lines);
                    prompt = next;
                }
                Some(BossTurn::Over { lines, won }) => {
                    render::lines(&lines);
                    if won {
                        return self.run_glitch();
                    }
                    return Ok(true);
                }
                None => {}
            }
        }
    }

    /// The win path's corrupted epilogue. Loops until the player takes
    /// the one option that still works.
    fn run_glitch(&mut self) -> Result<bool> {
        self.cue(Cue::Glitch);
        render::glitch_intro();
        loop {
            render::glitch_menu();
            let Some(pick) = input::read_pick(3)? else {
                return Ok(false);
            };
            if pick == 2 {
                self.state.set_ending(Ending::Awakened);
                return Ok(true);
            }
            render::glitch_refusal();
        }
    }

    fn finish(&mut self, ending: Ending) {
        if ending.is_victory() {
            self.cue(Cue::TrueEnding);
        } else {
            self.cue(Cue::BadEnding);
        }
        render::epilogue(ending);
        render::summary(&self.state);
    }

    /// Cues never interrupt play; a failed one is a warning, not an error.
    fn cue(&self, cue: Cue) {
        if let Err(err) = self.player.play(cue) {
            warn!("cue {} skipped: {err}", cue.file_name());
        }
    }
}
