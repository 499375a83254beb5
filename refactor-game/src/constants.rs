//! Centralized balance and tuning constants for REFACTOR game logic.
//!
//! These values define the deterministic math for the day loop. Keeping
//! them together ensures that gameplay can only be adjusted via code
//! changes reviewed in version control, rather than through external
//! JSON assets.

// Starting ledger ----------------------------------------------------------
pub(crate) const STARTING_MONEY: i32 = 20_000;
pub(crate) const STARTING_CODING: i32 = 0;
pub(crate) const STARTING_HATRED: i32 = 0;

// Calendar -----------------------------------------------------------------
pub(crate) const SALARY_DAY: u32 = 14;
pub(crate) const MENTOR_DAY: u32 = 24;
pub(crate) const BOSS_DAY_EARLY: u32 = 25;
pub(crate) const BOSS_DAY_LATE: u32 = 30;

// Ending thresholds --------------------------------------------------------
pub(crate) const BREAKDOWN_HATRED: i32 = 100;
pub(crate) const HOMELESS_MONEY: i32 = 0;

// Nightly passives ---------------------------------------------------------
pub(crate) const AUTOMATION_DAILY_INCOME: i32 = 800;
pub(crate) const BOOTCAMP_DAILY_SKILL: i32 = 1;

// Salary tiers (day 14, keyed on hatred) -----------------------------------
pub(crate) const SALARY_CALM_MAX_HATRED: i32 = 25;
pub(crate) const SALARY_CALM_PAY: i32 = 40_000;
pub(crate) const SALARY_TENSE_MAX_HATRED: i32 = 50;
pub(crate) const SALARY_TENSE_PAY: i32 = 30_000;
pub(crate) const SALARY_BURNED_PAY: i32 = 20_000;

// Random events ------------------------------------------------------------
pub(crate) const EVENT_TRIGGER_PCT: i32 = 40;
pub(crate) const EVENT_POOL_MIN: usize = 7;
pub(crate) const EVENT_POOL_MAX: usize = 14;
pub(crate) const SKILL_CHECK_PER_POINT: i32 = 2;

// Activities ---------------------------------------------------------------
pub(crate) const GYM_COST: i32 = 500;
pub(crate) const GYM_HATRED_RELIEF: i32 = 10;
pub(crate) const THERAPY_COST: i32 = 1_500;
pub(crate) const THERAPY_HATRED_RELIEF: i32 = 25;
pub(crate) const NIGHT_SHIFT_PAY: (i32, i32) = (2_500, 4_000);
pub(crate) const NIGHT_SHIFT_HATRED: (i32, i32) = (8, 12);
pub(crate) const TUTORIAL_SKILL_GAIN: i32 = 1;
pub(crate) const PROJECT_BREAKTHROUGH_PCT: i32 = 80;
pub(crate) const PROJECT_SKILL_BREAKTHROUGH: i32 = 2;
pub(crate) const PROJECT_SKILL_GRIND: i32 = 1;
pub(crate) const FREELANCE_PAY: i32 = 1_500;
pub(crate) const FREELANCE_SKILL_GAIN: i32 = 1;
pub(crate) const FREELANCE_FAIL_HATRED: i32 = 5;

// Mentor meeting (day 24) --------------------------------------------------
pub(crate) const MENTOR_SUIT_COST: i32 = 2_000;
pub(crate) const MENTOR_GOOD_MIN: i32 = 8;
pub(crate) const MENTOR_NEUTRAL_MIN: i32 = 5;

// Boss fight ---------------------------------------------------------------
pub(crate) const BOSS_START_HP: i32 = 100;
pub(crate) const COMPOSED_CHANCE_BONUS: i32 = 10;
pub(crate) const RATTLED_CHANCE_MALUS: i32 = 10;
pub(crate) const BOSS_ATTACKS_MAX: usize = 7;
