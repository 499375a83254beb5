use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    BOSS_DAY_LATE, BREAKDOWN_HATRED, HOMELESS_MONEY, STARTING_CODING, STARTING_HATRED,
    STARTING_MONEY,
};
use crate::data::EventSet;

/// Edge granted by the mentor meeting and consumed by the final confrontation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossBuff {
    Inspired,
    Composed,
    Rattled,
}

impl BossBuff {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            BossBuff::Inspired => "Inspired",
            BossBuff::Composed => "Composed",
            BossBuff::Rattled => "Rattled",
        }
    }
}

impl fmt::Display for BossBuff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    Breakdown,
    Homeless,
    Defeat,
    Awakened,
}

impl Ending {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Ending::Breakdown => "Mental Breakdown",
            Ending::Homeless => "Evicted",
            Ending::Defeat => "Still a Cop",
            Ending::Awakened => "Wide Awake",
        }
    }

    /// Whether this ending counts as reaching the new life.
    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(self, Ending::Awakened)
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The player's three counters plus the transient flags events hang off them.
///
/// Mutations are synchronous and single-threaded; exactly one ledger exists
/// per playthrough and nothing persists past process exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub money: i32,
    pub coding_skill: i32,
    pub hatred: i32,
    #[serde(default)]
    pub daily_passive_income: i32,
    #[serde(default)]
    pub automation_buff: bool,
    #[serde(default)]
    pub bootcamp_buff: bool,
    #[serde(default = "Ledger::default_boss_day")]
    pub scheduled_boss_day: u32,
    #[serde(default)]
    pub boss_buff: Option<BossBuff>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            coding_skill: STARTING_CODING,
            hatred: STARTING_HATRED,
            daily_passive_income: 0,
            automation_buff: false,
            bootcamp_buff: false,
            scheduled_boss_day: BOSS_DAY_LATE,
            boss_buff: None,
        }
    }
}

impl Ledger {
    const fn default_boss_day() -> u32 {
        BOSS_DAY_LATE
    }

    /// Unconstrained add; money may go negative until the ending check runs.
    pub fn increment_money(&mut self, delta: i32) {
        self.money += delta;
    }

    pub fn increment_coding(&mut self, delta: i32) {
        self.coding_skill += delta;
    }

    /// Unconstrained add; the floor applies to `set_hatred` only.
    pub fn increment_hatred(&mut self, delta: i32) {
        self.hatred += delta;
    }

    /// Direct write with a floor of zero. Increments never clamp.
    pub fn set_hatred(&mut self, value: i32) {
        self.hatred = value.max(0);
    }

    /// Deduct `amount` iff the balance covers it. Single-threaded
    /// check-then-act; insufficient funds is a signal, not an error.
    #[must_use]
    pub fn try_spend(&mut self, amount: i32) -> bool {
        if self.money >= amount {
            self.money -= amount;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub day: u32,
    pub ledger: Ledger,
    /// Ids of random events that have not fired yet.
    #[serde(default)]
    pub event_pool: Vec<String>,
    #[serde(default)]
    pub activity_done: bool,
    #[serde(default)]
    pub mentor_done: bool,
    #[serde(default)]
    pub boss_done: bool,
    #[serde(default)]
    pub ending: Option<Ending>,
    pub logs: Vec<String>,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            seed: 0,
            day: 1,
            ledger: Ledger::default(),
            event_pool: Vec::new(),
            activity_done: false,
            mentor_done: false,
            boss_done: false,
            ending: None,
            logs: Vec::new(),
            rng: None,
        }
    }
}

impl GameState {
    /// Seed the RNG and load the event roster into the shuffle-bag.
    #[must_use]
    pub fn with_seed(mut self, seed: u64, events: &EventSet) -> Self {
        self.seed = seed;
        self.rng = Some(ChaCha20Rng::from_seed(Self::seed_bytes(seed)));
        self.event_pool = events.ids();
        self.log("thirty days left on the badge");
        self
    }

    fn seed_bytes(s: u64) -> [u8; 32] {
        let lanes = [
            s,
            s.rotate_left(13) ^ 0xA5A5_A5A5_A5A5_A5A5,
            s.rotate_left(29) ^ 0x3C3C_3C3C_3C3C_3C3C,
            s.wrapping_mul(0x9E37_79B9_7F4A_7C15),
        ];
        let mut bytes = [0u8; 32];
        for (i, lane) in lanes.iter().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&lane.to_le_bytes());
        }
        bytes
    }

    /// Advance the day counter by exactly one. No upper bound; the counter
    /// holds no policy about when advancing is appropriate.
    pub fn next_day(&mut self) {
        self.day += 1;
    }

    /// Record an ending; the first one recorded wins.
    pub fn set_ending(&mut self, ending: Ending) {
        if self.ending.is_none() {
            self.ending = Some(ending);
        }
    }

    /// Threshold check run at the top of every menu render. Hatred is
    /// always checked before money.
    pub fn evaluate_ending(&mut self) -> Option<Ending> {
        if self.ending.is_some() {
            return self.ending;
        }
        if self.ledger.hatred >= BREAKDOWN_HATRED {
            self.set_ending(Ending::Breakdown);
        } else if self.ledger.money <= HOMELESS_MONEY {
            self.set_ending(Ending::Homeless);
        }
        self.ending
    }

    /// Append a dated line to the playthrough history.
    pub fn log(&mut self, line: impl AsRef<str>) {
        let day = self.day;
        self.logs.push(format!("Day {day}: {}", line.as_ref()));
    }

    /// Uniform roll in 0..100, or 0 when unseeded.
    pub fn next_pct(&mut self) -> i32 {
        match self.rng.as_mut() {
            Some(rng) => rng.random_range(0..100),
            None => 0,
        }
    }

    /// True when a fresh percentage roll lands under `chance`.
    pub fn roll_under(&mut self, chance: i32) -> bool {
        if chance <= 0 {
            return false;
        }
        self.next_pct() < chance
    }

    /// Inclusive roll used by ranged payouts.
    pub fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        match self.rng.as_mut() {
            Some(rng) => rng.random_range(min..=max),
            None => min,
        }
    }
}
