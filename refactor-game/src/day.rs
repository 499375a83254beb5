//! Nightly turnover: advances the calendar, applies passive effects, and
//! dispatches whatever the new day brings.

use crate::constants::{
    AUTOMATION_DAILY_INCOME, BOOTCAMP_DAILY_SKILL, EVENT_TRIGGER_PCT, MENTOR_DAY,
    SALARY_BURNED_PAY, SALARY_CALM_MAX_HATRED, SALARY_CALM_PAY, SALARY_DAY,
    SALARY_TENSE_MAX_HATRED, SALARY_TENSE_PAY,
};
use crate::data::{EventDef, EventSet};
use crate::events::draw;
use crate::state::GameState;

/// What dawn brought. The caller renders the lines, then drives any
/// interactive happening to completion.
#[derive(Debug)]
pub enum Happening<'a> {
    /// Nothing beyond the usual grind.
    Quiet,
    /// Payday arrived; the ledger already reflects it.
    Salary { pay: i32 },
    /// The mentor dinner is tonight; run the meeting flow.
    Mentor,
    /// The resignation lands today; run the confrontation.
    Boss,
    /// A random encounter fired; present it and resolve one choice.
    Event(&'a EventDef),
}

/// Summary of one day advance.
#[derive(Debug)]
pub struct DayReport<'a> {
    pub day: u32,
    pub lines: Vec<String>,
    pub happening: Happening<'a>,
}

/// Turns the day over once. A resolved encounter that consumed the day
/// obliges the caller to advance again, so one bad night can cost two
/// calendar days.
pub fn advance<'a>(state: &mut GameState, events: &'a EventSet) -> DayReport<'a> {
    state.next_day();
    state.activity_done = false;

    let mut lines = Vec::new();
    apply_passives(state, &mut lines);
    let happening = dispatch(state, events, &mut lines);

    DayReport {
        day: state.day,
        lines,
        happening,
    }
}

/// Salary tier lookup. The angrier the month, the thinner the envelope.
#[must_use]
pub fn salary_for_hatred(hatred: i32) -> i32 {
    if hatred <= SALARY_CALM_MAX_HATRED {
        SALARY_CALM_PAY
    } else if hatred <= SALARY_TENSE_MAX_HATRED {
        SALARY_TENSE_PAY
    } else {
        SALARY_BURNED_PAY
    }
}

fn apply_passives(state: &mut GameState, lines: &mut Vec<String>) {
    let ledger = &mut state.ledger;
    if ledger.daily_passive_income != 0 {
        ledger.increment_money(ledger.daily_passive_income);
        lines.push(format!(
            "Overflow tickets pay out {}.",
            ledger.daily_passive_income
        ));
    }
    if ledger.automation_buff {
        ledger.increment_money(AUTOMATION_DAILY_INCOME);
        lines.push(format!("The macro quietly earns {AUTOMATION_DAILY_INCOME}."));
    }
    if ledger.bootcamp_buff {
        ledger.increment_coding(BOOTCAMP_DAILY_SKILL);
        lines.push("Bootcamp homework sharpens you a little.".to_string());
    }
}

fn dispatch<'a>(
    state: &mut GameState,
    events: &'a EventSet,
    lines: &mut Vec<String>,
) -> Happening<'a> {
    if state.day == SALARY_DAY {
        let pay = salary_for_hatred(state.ledger.hatred);
        state.ledger.increment_money(pay);
        state.log(format!("payday, {pay}"));
        lines.push(salary_line(state.ledger.hatred, pay));
        return Happening::Salary { pay };
    }
    if state.day == MENTOR_DAY && !state.mentor_done {
        return Happening::Mentor;
    }
    if state.day == state.ledger.scheduled_boss_day && !state.boss_done {
        return Happening::Boss;
    }
    if !state.event_pool.is_empty()
        && state.roll_under(EVENT_TRIGGER_PCT)
        && let Some(event) = draw(state, events)
    {
        return Happening::Event(event);
    }
    Happening::Quiet
}

fn salary_line(hatred: i32, pay: i32) -> String {
    if hatred <= SALARY_CALM_MAX_HATRED {
        format!("Payday. Full month, full {pay}. The clerk even smiles at you.")
    } else if hatred <= SALARY_TENSE_MAX_HATRED {
        format!("Payday. {pay}, after what the captain calls 'performance adjustments'.")
    } else {
        format!("Payday. {pay}. Somebody upstairs is docking you on purpose now.")
    }
}
