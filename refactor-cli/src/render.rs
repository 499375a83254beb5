//! Terminal rendering. Everything the player reads funnels through here
//! so the app logic stays free of escape codes.

use colored::{ColoredString, Colorize};
use refactor_game::{BossPrompt, DayReport, Ending, EventDef, GameState, MentorPrompt};

/// History entries shown on the stats screen before the tail cuts off.
const HISTORY_TAIL: usize = 8;

pub fn title(code: &str) {
    println!();
    println!("{}", "  R E F A C T O R".bright_cyan().bold());
    println!(
        "{}",
        "  thirty days between the badge and the build".cyan()
    );
    println!();
    println!("  Share code: {}", code.bright_yellow());
    println!("  {}", "Replay this exact month with --seed.".dimmed());
}

pub fn menu(state: &GameState) {
    println!();
    println!("{}", format!("Day {} of 30", state.day).bold());
    println!("  1) Stats");
    println!("  2) Evening activity");
    println!("  3) Contacts");
    println!("  4) End the day");
}

pub fn stats(state: &GameState) {
    let ledger = &state.ledger;
    println!();
    println!("{}", "Where you stand".bold());
    println!("  Money         {}", ledger.money.to_string().bright_green());
    println!(
        "  Coding skill  {}",
        ledger.coding_skill.to_string().bright_cyan()
    );
    println!("  Hatred        {}", hatred_tone(ledger.hatred));
    if ledger.daily_passive_income > 0 {
        println!("  Side income   {} a day", ledger.daily_passive_income);
    }
    if ledger.automation_buff {
        println!("  {}", "The paperwork macro hums along.".dimmed());
    }
    if ledger.bootcamp_buff {
        println!("  {}", "Bootcamp evenings on the calendar.".dimmed());
    }
    if let Some(buff) = ledger.boss_buff {
        println!("  After dinner: {}", buff.to_string().bright_magenta());
    }
    println!();
    println!("{}", "The month so far".bold());
    let skip = state.logs.len().saturating_sub(HISTORY_TAIL);
    if skip > 0 {
        println!("  {}", format!("({skip} earlier entries in the file.)").dimmed());
    }
    for line in &state.logs[skip..] {
        println!("  {}", line.dimmed());
    }
}

fn hatred_tone(hatred: i32) -> ColoredString {
    let text = hatred.to_string();
    if hatred >= 75 {
        text.bright_red()
    } else if hatred >= 40 {
        text.yellow()
    } else {
        text.green()
    }
}

pub fn activity_menu() {
    println!();
    println!("{}", "The evening is yours. Once.".bold());
    println!("  1) Gym (500)");
    println!("  2) Therapy (1500)");
    println!("  3) Night shift overtime");
    println!("  4) Coding practice");
    println!("  5) Never mind");
}

pub fn coding_menu() {
    println!();
    println!("{}", "Open the laptop.".bold());
    println!("  1) Tutorials");
    println!("  2) Side project");
    println!("  3) Freelance gig");
    println!("  4) Never mind");
}

pub fn contacts() {
    println!();
    println!(
        "{}",
        "Your phone is full of cops. None of them can review a pull request.".dimmed()
    );
    println!("{}", "(Nobody new to call yet.)".dimmed());
}

pub fn confirm_idle() {
    println!();
    println!("Turn in without doing anything tonight?");
    println!("  1) Sleep anyway");
    println!("  2) Stay up");
}

pub fn day_header(report: &DayReport<'_>) {
    println!();
    println!("{}", format!("Day {}", report.day).bright_white().bold());
    for line in &report.lines {
        println!("{line}");
    }
}

pub fn lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn event(def: &EventDef) {
    println!();
    println!("{}", def.title.bright_yellow().bold());
    println!("{}", def.text);
    for (i, choice) in def.choices.iter().enumerate() {
        println!("  {}) {}", i + 1, choice.label);
    }
}

pub fn mentor_prompt(prompt: &MentorPrompt) {
    println!();
    for line in &prompt.intro {
        println!("{line}");
    }
    println!("{}", prompt.question.bright_cyan());
    for (i, option) in prompt.options.iter().enumerate() {
        println!("  {}) {option}", i + 1);
    }
}

pub fn boss_prompt(prompt: &BossPrompt, player_hp: i32, boss_hp: i32) {
    println!();
    println!(
        "{}   {}",
        format!("your resolve {player_hp:>3}").bright_green(),
        format!("his grip {boss_hp:>3}").bright_red()
    );
    for line in &prompt.intro {
        println!("{line}");
    }
    println!("{}", prompt.question.bright_red().bold());
    for (i, option) in prompt.options.iter().enumerate() {
        println!("  {}) {option}", i + 1);
    }
}

pub fn glitch_intro() {
    println!();
    println!("{}", "The letter sits on the desk, signed.".italic());
    println!(
        "{}",
        "The office lights flicker. The case board tears into static.".italic()
    );
    println!();
    println!("{}", "d a y   3 1   n o t   f o u n d".bright_green().on_black());
    println!(
        "{}",
        "the badge was never issued. the precinct was never built.".bright_green().on_black()
    );
    println!("{}", "you have been here before.".bright_green().on_black());
}

pub fn glitch_menu() {
    println!();
    println!("{}", "what do you do?".bright_green().on_black());
    println!("  1) {}", "go back on patrol".strikethrough());
    println!("  2) {}", "re-read the letter".strikethrough());
    println!("  3) {}", "wake up".bright_white().bold());
}

pub fn glitch_refusal() {
    println!("{}", "that door does not open anymore.".bright_green().on_black());
}

pub fn epilogue(ending: Ending) {
    println!();
    println!("{}", format!("*** {} ***", ending.title()).bold());
    match ending {
        Ending::Breakdown => {
            println!("The dispatcher's voice turns into static that never stops.");
            println!("They find you in the locker room, polishing a badge that is not there.");
            println!("The departure was real. The destination never loaded.");
        }
        Ending::Homeless => {
            println!("The landlord's note is short. The box by the door is shorter.");
            println!("You still have the laptop. The library opens at nine.");
        }
        Ending::Defeat => {
            println!("The chief slides the letter back across the desk, unsigned.");
            println!("'See you Monday, detective.' And he does. Every Monday.");
        }
        Ending::Awakened => {
            println!("Morning. A standing desk, a second monitor, a mug with a compiler joke.");
            println!("The badge is in a drawer somewhere, under the spare cables.");
            println!(
                "{}",
                "You open the editor. The first ticket of the day looks easy.".bright_cyan()
            );
        }
    }
}

pub fn summary(state: &GameState) {
    let ledger = &state.ledger;
    println!();
    println!("{}", "Run summary".bold());
    println!("  Days on the clock  {}", state.day);
    println!("  Money              {}", ledger.money);
    println!("  Coding skill       {}", ledger.coding_skill);
    println!("  Hatred             {}", ledger.hatred);
    if let Some(ending) = state.ending {
        println!("  Ending             {}", ending.title());
    }
}

pub fn farewell() {
    println!();
    println!(
        "{}",
        "The story waits where you left it. (It does not. Nothing is saved.)".dimmed()
    );
}
