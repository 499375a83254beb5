//! Random encounter pool: uniform draw without replacement and outcome
//! resolution against the ledger.

use crate::constants::SKILL_CHECK_PER_POINT;
use crate::data::{Effects, EventDef, EventSet, Outcome};
use crate::state::GameState;

/// Display payload produced by resolving one event choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventReport {
    /// Narration plus stat deltas, in display order.
    pub lines: Vec<String>,
    /// The encounter ate the whole day; the caller owes a second advance.
    pub consumed_day: bool,
}

/// Success chance for a skill-gated branch: two points per skill level,
/// saturating at a sure thing.
#[must_use]
pub fn skill_chance(coding_skill: i32) -> i32 {
    (coding_skill * SKILL_CHECK_PER_POINT).min(100)
}

/// Draws one event uniformly from the remaining pool, removing it so it
/// can never fire twice. An exhausted pool yields `None`.
pub fn draw<'a>(state: &mut GameState, events: &'a EventSet) -> Option<&'a EventDef> {
    if state.event_pool.is_empty() {
        return None;
    }
    let last = state.event_pool.len() - 1;
    let idx = state.roll_range(0, last as i32) as usize;
    let id = state.event_pool.remove(idx);
    events.get(&id)
}

/// Resolves the picked choice, mutating the ledger. Out-of-range picks
/// yield `None` and leave the state untouched.
pub fn resolve(state: &mut GameState, event: &EventDef, choice: usize) -> Option<EventReport> {
    let picked = event.choices.get(choice)?;
    let mut lines = Vec::new();
    match &picked.outcome {
        Outcome::Flat { text, effects } => {
            lines.push(text.clone());
            apply_effects(state, effects, &mut lines);
        }
        Outcome::Chance {
            pct,
            success,
            failure,
        } => {
            let branch = if state.roll_under(*pct) { success } else { failure };
            lines.push(branch.text.clone());
            apply_effects(state, &branch.effects, &mut lines);
        }
        Outcome::SkillCheck { success, failure } => {
            let chance = skill_chance(state.ledger.coding_skill);
            let branch = if state.roll_under(chance) { success } else { failure };
            lines.push(branch.text.clone());
            apply_effects(state, &branch.effects, &mut lines);
        }
    }
    state.log(format!("{} ({})", event.title, picked.label));
    Some(EventReport {
        lines,
        consumed_day: event.consumes_day,
    })
}

/// Applies one effect block. Hatred relief goes through the setter so the
/// zero floor holds; everything else is an unconstrained increment.
fn apply_effects(state: &mut GameState, fx: &Effects, lines: &mut Vec<String>) {
    if fx.money != 0 {
        state.ledger.increment_money(fx.money);
        lines.push(delta_line(fx.money, "money"));
    }
    if fx.coding_skill != 0 {
        state.ledger.increment_coding(fx.coding_skill);
        lines.push(delta_line(fx.coding_skill, "coding skill"));
    }
    if fx.hatred < 0 {
        let target = state.ledger.hatred + fx.hatred;
        state.ledger.set_hatred(target);
        lines.push(delta_line(fx.hatred, "hatred"));
    } else if fx.hatred > 0 {
        state.ledger.increment_hatred(fx.hatred);
        lines.push(delta_line(fx.hatred, "hatred"));
    }
    if fx.daily_income != 0 {
        state.ledger.daily_passive_income += fx.daily_income;
        lines.push(format!(
            "Passive income is now {} a day.",
            state.ledger.daily_passive_income
        ));
    }
    if fx.automation {
        state.ledger.automation_buff = true;
        lines.push("The paperwork macro is live.".to_string());
    }
    if fx.bootcamp {
        state.ledger.bootcamp_buff = true;
        lines.push("Bootcamp evenings start tomorrow.".to_string());
    }
}

fn delta_line(delta: i32, what: &str) -> String {
    if delta > 0 {
        format!("+{delta} {what}")
    } else {
        format!("{delta} {what}")
    }
}
