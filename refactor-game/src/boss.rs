//! The final confrontation: resignation day in the chief's office. Two
//! fixed exchanges open the fight, then a shuffled deck of his attacks
//! plays out. Your resolve and his grip are the two pools; whoever still
//! has more standing when the deck runs dry takes the room.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{
    BOSS_ATTACKS_MAX, BOSS_START_HP, COMPOSED_CHANCE_BONUS, RATTLED_CHANCE_MALUS,
};
use crate::rng::boss_stream;
use crate::state::{BossBuff, Ending, GameState};

const DEFAULT_BOSS_DATA: &str = include_str!("../data/boss.json");

/// Success-chance formula for one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttackCheck {
    /// `min(max, base + coding_skill * per_point)`.
    StatLinear { base: i32, per_point: i32, max: i32 },
    /// Automatic success while the matching buff is held, otherwise a
    /// fixed fallback chance.
    BuffGated { buff: BossBuff, fallback_pct: i32 },
}

/// One of the chief's attacks and your scripted counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackDef {
    pub id: String,
    pub name: String,
    pub text: String,
    pub counter: String,
    pub check: AttackCheck,
    pub damage: i32,
    pub backfire: i32,
    pub success_text: String,
    pub failure_text: String,
}

/// The embedded fight script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BossScript {
    pub attacks: Vec<AttackDef>,
}

#[derive(Debug, Error)]
pub enum BossScriptError {
    #[error("boss script is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("attack roster holds {found} entries, expected 1..={max}")]
    RosterSize { found: usize, max: usize },
    #[error("attack '{id}' uses chance {pct} outside 0..=100")]
    ChanceRange { id: String, pct: i32 },
}

impl BossScript {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            attacks: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BossScriptError> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load_default() -> Result<Self, BossScriptError> {
        Self::from_json(DEFAULT_BOSS_DATA)
    }

    /// Embedded script, falling back to an empty roster if the build
    /// carries corrupt data.
    pub fn default_script() -> &'static Self {
        static SCRIPT: OnceLock<BossScript> = OnceLock::new();
        SCRIPT.get_or_init(|| Self::load_default().unwrap_or_else(|_| Self::empty()))
    }

    pub fn validate(&self) -> Result<(), BossScriptError> {
        if self.attacks.is_empty() || self.attacks.len() > BOSS_ATTACKS_MAX {
            return Err(BossScriptError::RosterSize {
                found: self.attacks.len(),
                max: BOSS_ATTACKS_MAX,
            });
        }
        for attack in &self.attacks {
            match attack.check {
                AttackCheck::StatLinear { base, max, .. } => {
                    for pct in [base, max] {
                        if !(0..=100).contains(&pct) {
                            return Err(BossScriptError::ChanceRange {
                                id: attack.id.clone(),
                                pct,
                            });
                        }
                    }
                }
                AttackCheck::BuffGated { fallback_pct, .. } => {
                    if !(0..=100).contains(&fallback_pct) {
                        return Err(BossScriptError::ChanceRange {
                            id: attack.id.clone(),
                            pct: fallback_pct,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

struct SetupRound {
    question: &'static str,
    options: [&'static str; 2],
    replies: [&'static str; 2],
    exchange: &'static str,
    player_hit: i32,
    boss_hit: i32,
}

const SETUP_ROUNDS: [SetupRound; 2] = [
    SetupRound {
        question: "He reads the letter twice, sets it down, and asks: 'Is this a joke, detective?'",
        options: [
            "'No, sir. Effective the thirtieth.'",
            "Say nothing and hold his stare",
        ],
        replies: [
            "Your voice comes out level. Somewhere behind your ribs, something unclenches.",
            "The silence stretches until he is the one who has to fill it.",
        ],
        exchange: "He leans back. The chair creaks like a warning shot. 'Sit down. We are going to talk about this.'",
        player_hit: 10,
        boss_hit: 15,
    },
    SetupRound {
        question: "He picks up the phone. 'I can have the union rep here in ten minutes to talk sense into you.'",
        options: ["'The rep already knows, sir.'", "'This is not a negotiation.'"],
        replies: [
            "The receiver hovers, then goes back down. Point taken.",
            "A muscle in his jaw does something complicated.",
        ],
        exchange: "'Fine,' he says, in the tone of a man racking a shotgun. 'Then we do this the hard way.'",
        player_hit: 15,
        boss_hit: 10,
    },
];

const OPENING: [&str; 3] = [
    "The chief's office smells like burnt coffee and thirty years of closed cases.",
    "The resignation letter is in your jacket. It weighs roughly one career.",
    "You put it on his desk face up, the way Maya told you to.",
];

/// A question put to the player mid-fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossPrompt {
    pub intro: Vec<String>,
    pub question: String,
    pub options: Vec<String>,
}

/// Where the fight stands after one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BossTurn {
    /// Resolution of the last exchange, then the next prompt.
    Round {
        lines: Vec<String>,
        prompt: BossPrompt,
    },
    /// The fight is over. A win leads to the glitch epilogue; a loss has
    /// already recorded the defeat ending.
    Over { lines: Vec<String>, won: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Setup(usize),
    Attack(usize),
    Over,
}

/// Step machine for the confrontation. Construct with
/// [`BossFight::begin`], then feed validated answers through
/// [`BossFight::advance`] until a [`BossTurn::Over`] comes back.
pub struct BossFight<'a> {
    script: &'a BossScript,
    queue: SmallVec<[usize; BOSS_ATTACKS_MAX]>,
    phase: Phase,
    player_hp: i32,
    boss_hp: i32,
    buff: Option<BossBuff>,
    rng: ChaCha20Rng,
}

impl<'a> BossFight<'a> {
    #[must_use]
    pub fn begin(state: &GameState, script: &'a BossScript) -> (Self, BossPrompt) {
        let mut rng = boss_stream(state.seed);
        let mut queue: SmallVec<[usize; BOSS_ATTACKS_MAX]> =
            (0..script.attacks.len()).collect();
        queue.shuffle(&mut rng);

        let fight = Self {
            script,
            queue,
            phase: Phase::Setup(0),
            player_hp: BOSS_START_HP,
            boss_hp: BOSS_START_HP,
            buff: state.ledger.boss_buff,
            rng,
        };
        let round = &SETUP_ROUNDS[0];
        let prompt = BossPrompt {
            intro: OPENING.iter().map(|s| (*s).to_string()).collect(),
            question: round.question.to_string(),
            options: round.options.iter().map(|s| (*s).to_string()).collect(),
        };
        (fight, prompt)
    }

    #[must_use]
    pub fn player_hp(&self) -> i32 {
        self.player_hp
    }

    #[must_use]
    pub fn boss_hp(&self) -> i32 {
        self.boss_hp
    }

    /// Applies one answer. Out-of-range picks yield `None` and leave the
    /// fight where it was; so does answering a finished fight.
    pub fn advance(&mut self, state: &mut GameState, choice: usize) -> Option<BossTurn> {
        match self.phase {
            Phase::Setup(i) => self.advance_setup(state, i, choice),
            Phase::Attack(k) => self.advance_attack(state, k, choice),
            Phase::Over => None,
        }
    }

    fn advance_setup(
        &mut self,
        state: &mut GameState,
        i: usize,
        choice: usize,
    ) -> Option<BossTurn> {
        let round = &SETUP_ROUNDS[i];
        let reply = *round.replies.get(choice)?;

        let mut lines = vec![reply.to_string(), round.exchange.to_string()];
        self.boss_hp -= round.boss_hit;
        self.player_hp -= round.player_hit;
        lines.push(format!(
            "His grip slips by {}; your resolve takes {}.",
            round.boss_hit, round.player_hit
        ));
        if let Some(turn) = self.check_exit(state, &mut lines) {
            return Some(turn);
        }

        let next = i + 1;
        if next < SETUP_ROUNDS.len() {
            self.phase = Phase::Setup(next);
            let round = &SETUP_ROUNDS[next];
            return Some(BossTurn::Round {
                lines,
                prompt: BossPrompt {
                    intro: Vec::new(),
                    question: round.question.to_string(),
                    options: round.options.iter().map(|s| (*s).to_string()).collect(),
                },
            });
        }
        self.enter_attacks(state, lines)
    }

    fn advance_attack(
        &mut self,
        state: &mut GameState,
        k: usize,
        choice: usize,
    ) -> Option<BossTurn> {
        if choice != 0 {
            return None;
        }
        let script = self.script;
        let attack = &script.attacks[self.queue[k]];

        let mut lines = Vec::new();
        let hit = match attack_chance(&attack.check, state.ledger.coding_skill, self.buff) {
            None => true,
            Some(chance) => self.rng.random_range(0..100) < chance,
        };
        if hit {
            self.boss_hp -= attack.damage;
            lines.push(attack.success_text.clone());
            lines.push(format!("His grip slips by {}.", attack.damage));
        } else {
            self.player_hp -= attack.backfire;
            lines.push(attack.failure_text.clone());
            lines.push(format!("Your resolve takes {}.", attack.backfire));
        }
        if let Some(turn) = self.check_exit(state, &mut lines) {
            return Some(turn);
        }

        let next = k + 1;
        if next < self.queue.len() {
            self.phase = Phase::Attack(next);
            return Some(BossTurn::Round {
                lines,
                prompt: self.attack_prompt(next),
            });
        }
        Some(self.resolve_stalemate(state, lines))
    }

    fn attack_prompt(&self, k: usize) -> BossPrompt {
        let attack = &self.script.attacks[self.queue[k]];
        BossPrompt {
            intro: vec![attack.name.clone(), attack.text.clone()],
            question: "Your move.".to_string(),
            options: vec![attack.counter.clone()],
        }
    }

    fn enter_attacks(&mut self, state: &mut GameState, lines: Vec<String>) -> Option<BossTurn> {
        if self.queue.is_empty() {
            return Some(self.resolve_stalemate(state, lines));
        }
        self.phase = Phase::Attack(0);
        Some(BossTurn::Round {
            lines,
            prompt: self.attack_prompt(0),
        })
    }

    fn check_exit(&mut self, state: &mut GameState, lines: &mut Vec<String>) -> Option<BossTurn> {
        if self.boss_hp <= 0 {
            lines.push(
                "He stops mid-sentence, looks at the letter, and signs it without another word."
                    .to_string(),
            );
            return Some(self.finish(state, std::mem::take(lines), true));
        }
        if self.player_hp <= 0 {
            lines.push("You hear yourself asking for the letter back.".to_string());
            return Some(self.finish(state, std::mem::take(lines), false));
        }
        None
    }

    /// Queue exhausted with both still standing. Equal or better resolve
    /// wins the room; there is no mirror-image rescue for the player.
    fn resolve_stalemate(&mut self, state: &mut GameState, mut lines: Vec<String>) -> BossTurn {
        lines.push("Both of you are out of ammunition. The office is very quiet.".to_string());
        if self.player_hp >= self.boss_hp {
            self.boss_hp = 0;
            lines.push(
                "He studies you for a long moment, then reaches for the pen. 'The thirtieth, then.'"
                    .to_string(),
            );
            self.finish(state, lines, true)
        } else {
            lines.push(
                "'Sleep on it,' he says, sliding the letter into a drawer, and you let him."
                    .to_string(),
            );
            self.finish(state, lines, false)
        }
    }

    fn finish(&mut self, state: &mut GameState, lines: Vec<String>, won: bool) -> BossTurn {
        self.phase = Phase::Over;
        state.boss_done = true;
        if won {
            state.log("handed in the badge and it stuck");
        } else {
            state.set_ending(Ending::Defeat);
            state.log("the chief talked you back into the uniform");
        }
        BossTurn::Over { lines, won }
    }
}

/// `None` means automatic success; `Some(pct)` is rolled. `Composed`
/// helps and `Rattled` hurts every rolled attack.
fn attack_chance(check: &AttackCheck, coding_skill: i32, buff: Option<BossBuff>) -> Option<i32> {
    let base = match *check {
        AttackCheck::StatLinear {
            base,
            per_point,
            max,
        } => (base + coding_skill * per_point).min(max),
        AttackCheck::BuffGated {
            buff: wanted,
            fallback_pct,
        } => {
            if buff == Some(wanted) {
                return None;
            }
            fallback_pct
        }
    };
    let shifted = match buff {
        Some(BossBuff::Composed) => base + COMPOSED_CHANCE_BONUS,
        Some(BossBuff::Rattled) => base - RATTLED_CHANCE_MALUS,
        _ => base,
    };
    Some(shifted.clamp(0, 100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EventSet;

    fn seeded(seed: u64) -> GameState {
        GameState::default().with_seed(seed, EventSet::default_set())
    }

    fn stub_attack(id: &str, check: AttackCheck, damage: i32, backfire: i32) -> AttackDef {
        AttackDef {
            id: id.to_string(),
            name: "Stub".to_string(),
            text: "He says something cutting.".to_string(),
            counter: "Answer him".to_string(),
            check,
            damage,
            backfire,
            success_text: "It lands.".to_string(),
            failure_text: "It does not.".to_string(),
        }
    }

    fn drive(state: &mut GameState, script: &BossScript) -> (Vec<(i32, i32)>, bool) {
        let (mut fight, _prompt) = BossFight::begin(state, script);
        let mut turn = fight.advance(state, 0).expect("round one accepts 0");
        let mut trajectory = Vec::new();
        loop {
            trajectory.push((fight.player_hp(), fight.boss_hp()));
            match turn {
                BossTurn::Round { .. } => {
                    turn = fight.advance(state, 0).expect("fight continues");
                }
                BossTurn::Over { won, .. } => return (trajectory, won),
            }
        }
    }

    #[test]
    fn shipped_script_is_valid() {
        let script = BossScript::load_default().expect("embedded script parses");
        assert!(!script.attacks.is_empty());
        assert!(script.attacks.len() <= BOSS_ATTACKS_MAX);
        assert!(!BossScript::default_script().attacks.is_empty());
    }

    #[test]
    fn roster_size_bounds_are_enforced() {
        let check = AttackCheck::StatLinear {
            base: 50,
            per_point: 1,
            max: 90,
        };
        let oversized = BossScript {
            attacks: (0..8)
                .map(|i| stub_attack(&format!("a{i}"), check, 10, 10))
                .collect(),
        };
        assert!(matches!(
            oversized.validate(),
            Err(BossScriptError::RosterSize { found: 8, .. })
        ));
        assert!(matches!(
            BossScript::empty().validate(),
            Err(BossScriptError::RosterSize { found: 0, .. })
        ));
    }

    #[test]
    fn out_of_range_chances_are_rejected() {
        let script = BossScript {
            attacks: vec![stub_attack(
                "hot",
                AttackCheck::BuffGated {
                    buff: BossBuff::Inspired,
                    fallback_pct: 130,
                },
                10,
                10,
            )],
        };
        assert!(matches!(
            script.validate(),
            Err(BossScriptError::ChanceRange { pct: 130, .. })
        ));
    }

    #[test]
    fn chance_formula_scales_and_clamps() {
        let linear = AttackCheck::StatLinear {
            base: 30,
            per_point: 2,
            max: 90,
        };
        assert_eq!(attack_chance(&linear, 10, None), Some(50));
        assert_eq!(attack_chance(&linear, 40, None), Some(90));
        assert_eq!(attack_chance(&linear, 10, Some(BossBuff::Composed)), Some(60));
        assert_eq!(attack_chance(&linear, 10, Some(BossBuff::Rattled)), Some(40));

        let gated = AttackCheck::BuffGated {
            buff: BossBuff::Inspired,
            fallback_pct: 5,
        };
        assert_eq!(attack_chance(&gated, 0, Some(BossBuff::Inspired)), None);
        assert_eq!(attack_chance(&gated, 0, None), Some(5));
        assert_eq!(attack_chance(&gated, 0, Some(BossBuff::Rattled)), Some(0));
    }

    #[test]
    fn setup_rounds_whittle_both_sides() {
        let mut state = seeded(1);
        let script = BossScript::default_script();
        let (mut fight, prompt) = BossFight::begin(&state, script);
        assert_eq!(prompt.options.len(), 2);

        fight.advance(&mut state, 0).expect("round one");
        assert_eq!(fight.player_hp(), 90);
        assert_eq!(fight.boss_hp(), 85);

        fight.advance(&mut state, 1).expect("round two");
        assert_eq!(fight.player_hp(), 75);
        assert_eq!(fight.boss_hp(), 75);
    }

    #[test]
    fn stalemate_on_equal_footing_still_signs_the_letter() {
        let mut state = seeded(2);
        let script = BossScript::empty();
        let (mut fight, _prompt) = BossFight::begin(&state, &script);

        fight.advance(&mut state, 0).expect("round one");
        let turn = fight.advance(&mut state, 0).expect("round two");
        assert!(matches!(turn, BossTurn::Over { won: true, .. }));
        assert_eq!(fight.boss_hp(), 0);
        assert!(state.ending.is_none());
        assert!(state.boss_done);
    }

    #[test]
    fn stalemate_with_more_resolve_forces_the_signature() {
        let mut state = seeded(3);
        let script = BossScript::empty();
        let (mut fight, _prompt) = BossFight::begin(&state, &script);
        fight.advance(&mut state, 0).expect("round one");
        fight.player_hp = 95;
        fight.boss_hp = 60;

        let turn = fight.advance(&mut state, 0).expect("round two");
        assert_eq!(fight.player_hp(), 80);
        assert!(matches!(turn, BossTurn::Over { won: true, .. }));
        assert_eq!(fight.boss_hp(), 0);
    }

    #[test]
    fn stalemate_with_less_resolve_is_a_loss() {
        let mut state = seeded(4);
        let script = BossScript::empty();
        let (mut fight, _prompt) = BossFight::begin(&state, &script);
        fight.advance(&mut state, 0).expect("round one");
        fight.player_hp = 45;
        fight.boss_hp = 90;

        let turn = fight.advance(&mut state, 0).expect("round two");
        assert_eq!(fight.player_hp(), 30);
        assert!(matches!(turn, BossTurn::Over { won: false, .. }));
        // The drawer keeps the letter; nobody zeroes his grip on a loss.
        assert_eq!(fight.boss_hp(), 80);
        assert_eq!(state.ending, Some(Ending::Defeat));
    }

    #[test]
    fn chief_collapse_ends_the_fight_early() {
        let check = AttackCheck::BuffGated {
            buff: BossBuff::Inspired,
            fallback_pct: 0,
        };
        let script = BossScript {
            attacks: vec![
                stub_attack("a", check, 40, 10),
                stub_attack("b", check, 40, 10),
                stub_attack("c", check, 40, 10),
            ],
        };
        let mut state = seeded(5);
        state.ledger.boss_buff = Some(BossBuff::Inspired);

        let (trajectory, won) = drive(&mut state, &script);
        assert!(won);
        // Two setup rounds plus two auto-wins; the third attack never runs.
        assert_eq!(trajectory.len(), 4);
        assert!(trajectory.last().expect("nonempty").1 <= 0);
        assert!(state.ending.is_none());
    }

    #[test]
    fn player_collapse_records_the_defeat() {
        let check = AttackCheck::StatLinear {
            base: 0,
            per_point: 0,
            max: 0,
        };
        let script = BossScript {
            attacks: vec![
                stub_attack("a", check, 5, 40),
                stub_attack("b", check, 5, 40),
                stub_attack("c", check, 5, 40),
            ],
        };
        let mut state = seeded(6);

        let (trajectory, won) = drive(&mut state, &script);
        assert!(!won);
        assert_eq!(trajectory.len(), 4);
        assert!(trajectory.last().expect("nonempty").0 <= 0);
        assert_eq!(state.ending, Some(Ending::Defeat));
    }

    #[test]
    fn same_seed_replays_the_same_fight() {
        let script = BossScript::default_script();
        let mut first = seeded(0xABCD);
        let mut second = seeded(0xABCD);

        let (trajectory_a, won_a) = drive(&mut first, script);
        let (trajectory_b, won_b) = drive(&mut second, script);
        assert_eq!(trajectory_a, trajectory_b);
        assert_eq!(won_a, won_b);
    }

    #[test]
    fn shuffle_order_is_seed_stable() {
        let script = BossScript::default_script();
        let state = seeded(0x51AB);
        let (fight_a, _) = BossFight::begin(&state, script);
        let (fight_b, _) = BossFight::begin(&state, script);
        assert_eq!(fight_a.queue, fight_b.queue);
    }

    #[test]
    fn out_of_range_answers_leave_the_fight_in_place() {
        let mut state = seeded(7);
        let script = BossScript::default_script();
        let (mut fight, _prompt) = BossFight::begin(&state, script);

        assert!(fight.advance(&mut state, 9).is_none());
        assert_eq!(fight.player_hp(), 100);
        assert!(fight.advance(&mut state, 0).is_some());
    }

    #[test]
    fn finished_fight_rejects_further_answers() {
        let mut state = seeded(8);
        let script = BossScript::empty();
        let (mut fight, _prompt) = BossFight::begin(&state, &script);
        fight.advance(&mut state, 0);
        fight.advance(&mut state, 0);
        assert!(fight.advance(&mut state, 0).is_none());
    }
}
