//! Player-initiated daily activities. One per day, enforced here so the
//! front end only ever renders the refusal.

use crate::constants::{
    FREELANCE_FAIL_HATRED, FREELANCE_PAY, FREELANCE_SKILL_GAIN, GYM_COST, GYM_HATRED_RELIEF,
    NIGHT_SHIFT_HATRED, NIGHT_SHIFT_PAY, PROJECT_BREAKTHROUGH_PCT, PROJECT_SKILL_BREAKTHROUGH,
    PROJECT_SKILL_GRIND, THERAPY_COST, THERAPY_HATRED_RELIEF, TUTORIAL_SKILL_GAIN,
};
use crate::events::skill_chance;
use crate::state::GameState;

/// What the player spends the day's free hours on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Gym,
    Therapy,
    NightShift,
    Coding(CodingMode),
}

/// Sub-modes of an evening at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingMode {
    Tutorials,
    SideProject,
    Freelance,
}

impl Activity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Activity::Gym => "the gym",
            Activity::Therapy => "the therapist",
            Activity::NightShift => "a night security shift",
            Activity::Coding(CodingMode::Tutorials) => "coding tutorials",
            Activity::Coding(CodingMode::SideProject) => "the side project",
            Activity::Coding(CodingMode::Freelance) => "a freelance ticket",
        }
    }
}

/// Outcome of one activity attempt, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityReport {
    pub lines: Vec<String>,
    /// False when the attempt was refused (slot used, or unaffordable);
    /// a refused attempt does not burn the day's slot.
    pub performed: bool,
}

pub fn perform(state: &mut GameState, activity: Activity) -> ActivityReport {
    if state.activity_done {
        return ActivityReport {
            lines: vec![
                "You already burned today's free hours. The badge owns the rest.".to_string(),
            ],
            performed: false,
        };
    }

    let mut lines = Vec::new();
    let performed = match activity {
        Activity::Gym => gym(state, &mut lines),
        Activity::Therapy => therapy(state, &mut lines),
        Activity::NightShift => night_shift(state, &mut lines),
        Activity::Coding(mode) => coding(state, mode, &mut lines),
    };
    if performed {
        state.activity_done = true;
        state.log(format!("evening spent on {}", activity.label()));
    }
    ActivityReport { lines, performed }
}

fn gym(state: &mut GameState, lines: &mut Vec<String>) -> bool {
    if !state.ledger.try_spend(GYM_COST) {
        lines.push(format!(
            "The day pass costs {GYM_COST} and your card knows better."
        ));
        return false;
    }
    let target = state.ledger.hatred - GYM_HATRED_RELIEF;
    state.ledger.set_hatred(target);
    lines.push("An hour of iron and nobody talks to you. The static quiets down.".to_string());
    lines.push(format!("-{GYM_HATRED_RELIEF} hatred, -{GYM_COST} money"));
    true
}

fn therapy(state: &mut GameState, lines: &mut Vec<String>) -> bool {
    if !state.ledger.try_spend(THERAPY_COST) {
        lines.push(format!(
            "Dr. Okafor's rate is {THERAPY_COST} a session. Not this week."
        ));
        return false;
    }
    let target = state.ledger.hatred - THERAPY_HATRED_RELIEF;
    state.ledger.set_hatred(target);
    lines.push(
        "Fifty minutes where someone asks how you are and waits for the answer.".to_string(),
    );
    lines.push(format!("-{THERAPY_HATRED_RELIEF} hatred, -{THERAPY_COST} money"));
    true
}

fn night_shift(state: &mut GameState, lines: &mut Vec<String>) -> bool {
    let (pay_min, pay_max) = NIGHT_SHIFT_PAY;
    let (strain_min, strain_max) = NIGHT_SHIFT_HATRED;
    let pay = state.roll_range(pay_min, pay_max);
    let strain = state.roll_range(strain_min, strain_max);
    state.ledger.increment_money(pay);
    state.ledger.increment_hatred(strain);
    lines.push("Twelve hours guarding a warehouse nobody wants to rob.".to_string());
    lines.push(format!("+{pay} money, +{strain} hatred"));
    true
}

fn coding(state: &mut GameState, mode: CodingMode, lines: &mut Vec<String>) -> bool {
    match mode {
        CodingMode::Tutorials => {
            state.ledger.increment_coding(TUTORIAL_SKILL_GAIN);
            lines.push("Another chapter, another exercise that finally clicks.".to_string());
            lines.push(format!("+{TUTORIAL_SKILL_GAIN} coding skill"));
        }
        CodingMode::SideProject => {
            if state.roll_under(PROJECT_BREAKTHROUGH_PCT) {
                state.ledger.increment_coding(PROJECT_SKILL_BREAKTHROUGH);
                lines.push(
                    "The patrol-route optimizer takes real map data for the first time. Breakthrough night."
                        .to_string(),
                );
                lines.push(format!("+{PROJECT_SKILL_BREAKTHROUGH} coding skill"));
            } else {
                state.ledger.increment_coding(PROJECT_SKILL_GRIND);
                lines.push(
                    "Three hours lost to a dependency conflict. You learn, grudgingly.".to_string(),
                );
                lines.push(format!("+{PROJECT_SKILL_GRIND} coding skill"));
            }
        }
        CodingMode::Freelance => {
            let chance = skill_chance(state.ledger.coding_skill);
            if state.roll_under(chance) {
                state.ledger.increment_money(FREELANCE_PAY);
                state.ledger.increment_coding(FREELANCE_SKILL_GAIN);
                lines.push("The overflow ticket closes clean and the invoice clears.".to_string());
                lines.push(format!(
                    "+{FREELANCE_PAY} money, +{FREELANCE_SKILL_GAIN} coding skill"
                ));
            } else {
                state.ledger.increment_hatred(FREELANCE_FAIL_HATRED);
                lines.push(
                    "The client wants it cheaper, sooner, and in a framework that does not exist."
                        .to_string(),
                );
                lines.push(format!("+{FREELANCE_FAIL_HATRED} hatred"));
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EventSet;

    fn seeded(seed: u64) -> GameState {
        GameState::default().with_seed(seed, EventSet::default_set())
    }

    #[test]
    fn therapy_from_a_fresh_start_cannot_push_hatred_negative() {
        let mut state = seeded(1);
        assert_eq!(state.ledger.money, 20_000);
        assert_eq!(state.ledger.hatred, 0);

        let report = perform(&mut state, Activity::Therapy);
        assert!(report.performed);
        assert_eq!(state.ledger.money, 18_500);
        assert_eq!(state.ledger.hatred, 0);
    }

    #[test]
    fn therapy_works_down_real_hatred() {
        let mut state = seeded(2);
        state.ledger.hatred = 40;
        perform(&mut state, Activity::Therapy);
        assert_eq!(state.ledger.hatred, 15);
    }

    #[test]
    fn gym_refuses_without_the_cover_charge() {
        let mut state = seeded(3);
        state.ledger.money = 100;

        let report = perform(&mut state, Activity::Gym);
        assert!(!report.performed);
        assert_eq!(state.ledger.money, 100);
        assert!(!state.activity_done);
    }

    #[test]
    fn gym_trades_money_for_calm() {
        let mut state = seeded(4);
        state.ledger.hatred = 30;

        let report = perform(&mut state, Activity::Gym);
        assert!(report.performed);
        assert_eq!(state.ledger.money, 19_500);
        assert_eq!(state.ledger.hatred, 20);
    }

    #[test]
    fn night_shift_rolls_inside_its_ranges() {
        let mut state = seeded(5);
        perform(&mut state, Activity::NightShift);
        let pay = state.ledger.money - 20_000;
        assert!((2_500..=4_000).contains(&pay), "pay {pay}");
        assert!((8..=12).contains(&state.ledger.hatred), "strain {}", state.ledger.hatred);
    }

    #[test]
    fn tutorials_always_teach_something() {
        let mut state = seeded(6);
        perform(&mut state, Activity::Coding(CodingMode::Tutorials));
        assert_eq!(state.ledger.coding_skill, 1);
    }

    #[test]
    fn side_project_grants_one_of_the_two_tiers() {
        let mut state = seeded(7);
        perform(&mut state, Activity::Coding(CodingMode::SideProject));
        assert!((1..=2).contains(&state.ledger.coding_skill));
    }

    #[test]
    fn freelance_at_zero_skill_only_stings() {
        let mut state = seeded(8);
        let report = perform(&mut state, Activity::Coding(CodingMode::Freelance));
        assert!(report.performed);
        assert_eq!(state.ledger.money, 20_000);
        assert_eq!(state.ledger.hatred, 5);
        assert_eq!(state.ledger.coding_skill, 0);
    }

    #[test]
    fn freelance_at_high_skill_always_pays() {
        let mut state = seeded(9);
        state.ledger.coding_skill = 50;

        perform(&mut state, Activity::Coding(CodingMode::Freelance));
        assert_eq!(state.ledger.money, 21_500);
        assert_eq!(state.ledger.coding_skill, 51);
        assert_eq!(state.ledger.hatred, 0);
    }

    #[test]
    fn second_activity_in_a_day_is_refused() {
        let mut state = seeded(10);
        let first = perform(&mut state, Activity::Coding(CodingMode::Tutorials));
        assert!(first.performed);

        let second = perform(&mut state, Activity::Therapy);
        assert!(!second.performed);
        assert_eq!(state.ledger.money, 20_000);

        // A new dawn frees the slot again.
        state.activity_done = false;
        let third = perform(&mut state, Activity::Therapy);
        assert!(third.performed);
    }

    #[test]
    fn refused_attempt_is_not_logged() {
        let mut state = seeded(11);
        let before = state.logs.len();
        state.ledger.money = 0;
        perform(&mut state, Activity::Gym);
        assert_eq!(state.logs.len(), before);
    }
}
