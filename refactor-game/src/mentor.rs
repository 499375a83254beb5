//! The day-24 mentor dinner. Maya, a staff engineer who left the force
//! years ago, sizes you up over one long meal and decides how hard to
//! vouch for you. Every answer moves her affection score; the final
//! bucket decides your buff and when the resignation lands.

use crate::constants::{
    BOSS_DAY_EARLY, BOSS_DAY_LATE, MENTOR_GOOD_MIN, MENTOR_NEUTRAL_MIN, MENTOR_SUIT_COST,
};
use crate::state::{BossBuff, GameState};

/// A question put to the player, with its numbered options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorPrompt {
    pub intro: Vec<String>,
    pub question: String,
    pub options: Vec<String>,
}

/// Where the meeting stands after one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentorTurn {
    /// Reaction to the answer, then the next question.
    Next {
        lines: Vec<String>,
        prompt: MentorPrompt,
    },
    /// Dinner is over; the resignation day is booked and the buff is set.
    Done {
        lines: Vec<String>,
        outcome: MentorOutcome,
    },
}

/// Final verdict of the dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentorOutcome {
    pub affection: i32,
    pub buff: BossBuff,
    pub boss_day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Outfit,
    Topic,
    Motivation,
    Timing,
    Finished,
}

/// Step machine for the dinner. Construct with [`MentorMeeting::begin`],
/// then feed validated answers through [`MentorMeeting::answer`] until a
/// [`MentorTurn::Done`] comes back.
#[derive(Debug)]
pub struct MentorMeeting {
    step: Step,
    affection: i32,
}

impl MentorMeeting {
    #[must_use]
    pub fn begin() -> (Self, MentorPrompt) {
        let meeting = Self {
            step: Step::Outfit,
            affection: 0,
        };
        let prompt = MentorPrompt {
            intro: vec![
                "Maya picked the restaurant. White tablecloths, menus without prices."
                    .to_string(),
                "You have an hour before you need to be there.".to_string(),
            ],
            question: "What do you wear?".to_string(),
            options: vec![
                format!("Buy a decent suit on the way ({MENTOR_SUIT_COST})"),
                "The pressed dress uniform".to_string(),
                "Hoodie and jeans, come as you are".to_string(),
            ],
        };
        (meeting, prompt)
    }

    /// Current affection score. Buckets resolve at the end of the meal.
    #[must_use]
    pub fn affection(&self) -> i32 {
        self.affection
    }

    /// Applies one answer. Out-of-range picks yield `None` and leave the
    /// meeting where it was.
    pub fn answer(&mut self, state: &mut GameState, choice: usize) -> Option<MentorTurn> {
        match self.step {
            Step::Outfit => self.answer_outfit(state, choice),
            Step::Topic => self.answer_topic(state, choice),
            Step::Motivation => self.answer_motivation(choice),
            Step::Timing => self.answer_timing(state, choice),
            Step::Finished => None,
        }
    }

    fn answer_outfit(&mut self, state: &mut GameState, choice: usize) -> Option<MentorTurn> {
        let mut lines = Vec::new();
        match choice {
            0 => {
                if state.ledger.try_spend(MENTOR_SUIT_COST) {
                    self.affection += 2;
                    lines.push(
                        "The tailor works fast. You look like someone with a future."
                            .to_string(),
                    );
                } else {
                    lines.push(
                        "Your card declines at the register. You wear what you own."
                            .to_string(),
                    );
                }
            }
            1 => {
                self.affection += 1;
                lines.push(
                    "The uniform still fits. Maya raises an eyebrow but says nothing."
                        .to_string(),
                );
            }
            2 => {
                lines.push("Comfortable, at least. The waiter is less convinced.".to_string());
            }
            _ => return None,
        }
        lines.push("She is already seated when you arrive, reading the wine list like a code review.".to_string());
        self.step = Step::Topic;
        Some(MentorTurn::Next {
            lines,
            prompt: MentorPrompt {
                intro: Vec::new(),
                question: "The small talk runs out fast. What do you open with?".to_string(),
                options: vec![
                    "Ask how she really got out".to_string(),
                    "Talk shop, the cases she would remember".to_string(),
                    "Vent about the captain".to_string(),
                ],
            },
        })
    }

    fn answer_topic(&mut self, state: &mut GameState, choice: usize) -> Option<MentorTurn> {
        let mut lines = Vec::new();
        match choice {
            0 => {
                self.affection += 2;
                lines.push(
                    "She tells it straight: three years of nights, one bad exam, one good one."
                        .to_string(),
                );
            }
            1 => {
                self.affection += 1;
                lines.push("Old war stories. She laughs once, for real.".to_string());
            }
            2 => {
                self.affection -= 1;
                lines.push(
                    "She lets you finish, then says, quietly, that she did not come to hear this."
                        .to_string(),
                );
            }
            _ => return None,
        }

        // Forced beat: the confession comes out whether you planned it or not.
        lines.push("Somewhere between courses it spills out of you: you want out, for good.".to_string());
        let hatred = state.ledger.hatred;
        if hatred <= 25 {
            self.affection += 2;
            lines.push(
                "It comes out steady, almost rehearsed. She nods like she has been waiting."
                    .to_string(),
            );
        } else if hatred <= 50 {
            self.affection += 1;
            lines.push("Your voice catches halfway through. She pours you water.".to_string());
        } else {
            self.affection -= 1;
            lines.push(
                "It comes out as a rant about everyone who ever wore a stripe. She studies her plate."
                    .to_string(),
            );
        }

        // Two reality checks. She is not grading your answers, she is
        // grading what you have actually built and banked.
        let mut intro = vec![
            "Then the kindness drops away and the interviewer appears.".to_string(),
            "'Walk me through the last thing you built. No, the terminal is fine, use my laptop.'"
                .to_string(),
        ];
        intro.push(coding_check(self, state.ledger.coding_skill));
        intro.push(
            "'And the runway question. How long can you eat if nobody hires you?'".to_string(),
        );
        intro.push(money_check(self, state.ledger.money));

        self.step = Step::Motivation;
        Some(MentorTurn::Next {
            lines,
            prompt: MentorPrompt {
                intro,
                question: "She folds her hands. 'Last one. Why do you want this?'".to_string(),
                options: vec![
                    "I want to build things instead of filing them".to_string(),
                    "I want a life where I sleep at night".to_string(),
                    "The money looks better every year".to_string(),
                    "Anything that is not this".to_string(),
                    "To prove every doubter wrong".to_string(),
                ],
            },
        })
    }

    fn answer_motivation(&mut self, choice: usize) -> Option<MentorTurn> {
        let (delta, reaction) = match choice {
            0 => (3, "She smiles like she just won an argument with someone who is not here."),
            1 => (2, "She says that is the only answer that lasts past the first layoff."),
            2 => (1, "Honest, she allows. Not enough on its own."),
            3 => (0, "Running from is not running toward, she says. You know that already."),
            4 => (-2, "She winces. Spite compiles, she says, but it does not ship."),
            _ => return None,
        };
        self.affection += delta;
        self.step = Step::Timing;
        Some(MentorTurn::Next {
            lines: vec![reaction.to_string()],
            prompt: MentorPrompt {
                intro: vec![
                    "Over coffee she slides her phone across the table: an offer letter, your name on it, platform team.".to_string(),
                    "'The job is yours. All that is left is walking into the chief's office and saying so.'".to_string(),
                ],
                question: "When do you face him?".to_string(),
                options: vec![
                    format!("Day {BOSS_DAY_EARLY}, before I lose my nerve"),
                    format!("Day {BOSS_DAY_LATE}, give me the extra week to steady up"),
                ],
            },
        })
    }

    fn answer_timing(&mut self, state: &mut GameState, choice: usize) -> Option<MentorTurn> {
        let boss_day = match choice {
            0 => BOSS_DAY_EARLY,
            1 => {
                self.affection += 1;
                BOSS_DAY_LATE
            }
            _ => return None,
        };

        let buff = verdict_buff(self.affection);
        let mut lines = vec![format!(
            "She nods once and puts the phone away. 'Day {boss_day}, then. Rehearse it twice. He will not make it easy.'"
        )];
        lines.extend(verdict_lines(buff));

        state.ledger.scheduled_boss_day = boss_day;
        state.ledger.boss_buff = Some(buff);
        state.mentor_done = true;
        state.log(format!(
            "dinner with Maya, resignation set for day {boss_day}"
        ));

        self.step = Step::Finished;
        Some(MentorTurn::Done {
            lines,
            outcome: MentorOutcome {
                affection: self.affection,
                buff,
                boss_day,
            },
        })
    }
}

fn coding_check(meeting: &mut MentorMeeting, skill: i32) -> String {
    let (delta, line) = if skill >= 40 {
        (3, "You refactor her sample on the spot and explain the tradeoff. She stops typing notes.")
    } else if skill >= 25 {
        (2, "You get it working and can say why. She nods along.")
    } else if skill >= 15 {
        (1, "Halting, but honest work. 'Junior, with mileage,' she says, not unkindly.")
    } else if skill >= 5 {
        (0, "You talk around the gaps. She notices every one of them.")
    } else {
        (-2, "There is nothing to show. The silence goes on a beat too long.")
    };
    meeting.affection += delta;
    line.to_string()
}

fn money_check(meeting: &mut MentorMeeting, money: i32) -> String {
    let (delta, line) = if money >= 40_000 {
        (3, "Months of runway. 'Good. Desperation interviews terribly.'")
    } else if money >= 30_000 {
        (2, "Enough to breathe. She approves.")
    } else if money >= 20_000 {
        (1, "Tight but workable, she figures, if nothing breaks.")
    } else if money >= 10_000 {
        (0, "She frowns at the number and moves on.")
    } else {
        (-2, "'That is not a runway, that is a cliff.' She says it gently. It still lands.")
    };
    meeting.affection += delta;
    line.to_string()
}

fn verdict_buff(affection: i32) -> BossBuff {
    if affection >= MENTOR_GOOD_MIN {
        BossBuff::Inspired
    } else if affection >= MENTOR_NEUTRAL_MIN {
        BossBuff::Composed
    } else {
        BossBuff::Rattled
    }
}

fn verdict_lines(buff: BossBuff) -> Vec<String> {
    match buff {
        BossBuff::Inspired => vec![
            "On the sidewalk she grips your shoulder. 'You are readier than you think.'"
                .to_string(),
            "'Walk in there like you already work for us. Because you do.'".to_string(),
        ],
        BossBuff::Composed => vec![
            "She shakes your hand, warm enough. 'Rehearse, sleep, keep your voice level.'"
                .to_string(),
            "'You will be fine if you keep your head.'".to_string(),
        ],
        BossBuff::Rattled => vec![
            "The goodbye is polite and brief. 'The offer stands either way. The rest is on you.'"
                .to_string(),
            "The drive home is very quiet.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EventSet;

    fn seeded() -> GameState {
        GameState::default().with_seed(0xCAFE, EventSet::default_set())
    }

    fn run_to_done(state: &mut GameState, picks: [usize; 4]) -> MentorOutcome {
        let (mut meeting, _prompt) = MentorMeeting::begin();
        for (i, pick) in picks.into_iter().enumerate() {
            match meeting.answer(state, pick) {
                Some(MentorTurn::Next { .. }) => assert!(i < 3, "meeting ended early"),
                Some(MentorTurn::Done { outcome, .. }) => {
                    assert_eq!(i, 3, "meeting ended early");
                    return outcome;
                }
                None => panic!("valid pick rejected at step {i}"),
            }
        }
        unreachable!("meeting never finished");
    }

    #[test]
    fn warm_dinner_lands_in_the_good_bucket() {
        let mut state = seeded();
        state.ledger.money = 42_000;
        state.ledger.coding_skill = 40;
        state.ledger.hatred = 10;

        // Suit +2, path question +2, calm confession +2, skill tier +3,
        // money tier (40k after the suit) +3, motivation +3, patience +1.
        let outcome = run_to_done(&mut state, [0, 0, 0, 1]);
        assert_eq!(outcome.affection, 16);
        assert_eq!(outcome.buff, BossBuff::Inspired);
        assert_eq!(outcome.boss_day, 30);
        assert_eq!(state.ledger.boss_buff, Some(BossBuff::Inspired));
        assert_eq!(state.ledger.scheduled_boss_day, 30);
        assert!(state.mentor_done);
    }

    #[test]
    fn cold_dinner_lands_in_the_bad_bucket() {
        let mut state = seeded();
        state.ledger.money = 5_000;
        state.ledger.coding_skill = 0;
        state.ledger.hatred = 80;

        // Hoodie 0, venting -1, bitter confession -1, no skill -2,
        // no runway -2, spite -2, rushing 0.
        let outcome = run_to_done(&mut state, [2, 2, 4, 0]);
        assert_eq!(outcome.affection, -8);
        assert_eq!(outcome.buff, BossBuff::Rattled);
        assert_eq!(outcome.boss_day, 25);
        assert_eq!(state.ledger.scheduled_boss_day, 25);
    }

    #[test]
    fn middling_dinner_is_composed() {
        let mut state = seeded();
        state.ledger.money = 20_000;
        state.ledger.coding_skill = 15;
        state.ledger.hatred = 30;

        // Uniform +1, shop talk +1, shaky confession +1, skill tier +1,
        // money tier +1, honest-about-money +1, rushing 0. Total 6.
        let outcome = run_to_done(&mut state, [1, 1, 2, 0]);
        assert_eq!(outcome.affection, 6);
        assert_eq!(outcome.buff, BossBuff::Composed);
    }

    #[test]
    fn affection_buckets_break_at_eight_and_five() {
        assert_eq!(verdict_buff(8), BossBuff::Inspired);
        assert_eq!(verdict_buff(7), BossBuff::Composed);
        assert_eq!(verdict_buff(5), BossBuff::Composed);
        assert_eq!(verdict_buff(4), BossBuff::Rattled);
        assert_eq!(verdict_buff(-3), BossBuff::Rattled);
    }

    #[test]
    fn suit_purchase_needs_the_money() {
        let mut state = seeded();
        state.ledger.money = 1_000;

        let (mut meeting, _prompt) = MentorMeeting::begin();
        let turn = meeting.answer(&mut state, 0).expect("outfit pick is valid");
        assert!(matches!(turn, MentorTurn::Next { .. }));
        assert_eq!(state.ledger.money, 1_000);
        assert_eq!(meeting.affection(), 0);
    }

    #[test]
    fn suit_purchase_spends_and_scores() {
        let mut state = seeded();

        let (mut meeting, _prompt) = MentorMeeting::begin();
        meeting.answer(&mut state, 0).expect("outfit pick is valid");
        assert_eq!(state.ledger.money, 18_000);
        assert_eq!(meeting.affection(), 2);
    }

    #[test]
    fn confession_tone_follows_hatred_boundaries() {
        for (hatred, expected) in [(25, 3), (26, 2), (51, 0)] {
            let mut state = seeded();
            state.ledger.hatred = hatred;
            state.ledger.coding_skill = 5;
            state.ledger.money = 10_000;

            let (mut meeting, _prompt) = MentorMeeting::begin();
            meeting.answer(&mut state, 2).expect("outfit");
            // Shop talk +1 plus the confession, checks land at tier zero.
            meeting.answer(&mut state, 1).expect("topic");
            assert_eq!(meeting.affection(), expected, "hatred {hatred}");
        }
    }

    #[test]
    fn out_of_range_answer_keeps_the_meeting_in_place() {
        let mut state = seeded();
        let (mut meeting, _prompt) = MentorMeeting::begin();

        assert!(meeting.answer(&mut state, 9).is_none());
        assert_eq!(state.ledger.money, 20_000);
        let turn = meeting.answer(&mut state, 1).expect("still on the outfit step");
        assert!(matches!(turn, MentorTurn::Next { .. }));
    }

    #[test]
    fn finished_meeting_rejects_further_answers() {
        let mut state = seeded();
        run_to_done(&mut state, [2, 1, 3, 0]);
        let (mut meeting, _prompt) = MentorMeeting::begin();
        meeting.step = Step::Finished;
        assert!(meeting.answer(&mut state, 0).is_none());
    }
}
