//! Fixed questions for each paradox and the answer key behind them.
//!
//! The answer key is not hand-written: each entry is derived from the
//! probability engine the first time it is asked for, then reused for every
//! session in the process. Grading a guess is a lookup against that key.

use std::sync::OnceLock;

use tracing::debug;

use crate::paradox_engine::{
    models::{AnswerKey, MontyHallOdds, ParadoxKind, Question},
    probability::{
        birthday_series, find_threshold, kidney_stone_strata, monty_hall_odds,
        simpson_analysis, DAYS_IN_YEAR,
    },
};

// ---------------------------------------------------------------------------
// Option labels
// ---------------------------------------------------------------------------

pub const BIRTHDAY_UNDER_25: &str = "Less than 25";
pub const BIRTHDAY_AROUND_90: &str = "Around 90";
pub const BIRTHDAY_AROUND_182: &str = "Around 182";
pub const BIRTHDAY_OVER_200: &str = "More than 200";

pub const CERTAIN_50_TO_100: &str = "Between 50 to 100";
pub const CERTAIN_100_TO_150: &str = "Between 100 to 150";
pub const CERTAIN_150_TO_365: &str = "Between 150 to 365";
pub const CERTAIN_AT_366: &str = "At 366 People";
pub const CERTAIN_NEVER: &str = "It never becomes exactly 100%";

pub const MONTY_SWITCH: &str = "Switch";
pub const MONTY_STAY: &str = "Stay";
pub const MONTY_NO_DIFFERENCE: &str = "It doesn't matter";

pub const MONTY_ONE_IN_THREE: &str = "1 in 3";
pub const MONTY_ONE_IN_TWO: &str = "1 in 2";
pub const MONTY_TWO_IN_THREE: &str = "2 in 3";

pub const SIMPSON_MUST_HOLD: &str = "Yes, A must be better overall";
pub const SIMPSON_CAN_FLIP: &str = "Not necessarily";

pub const SIMPSON_NOISE: &str = "Random noise in small samples";
pub const SIMPSON_LURKING: &str = "A lurking variable that changes group sizes";
pub const SIMPSON_ARITHMETIC: &str = "An arithmetic mistake in the pooled rates";

const CLASSIC_DOORS: u32 = 3;

fn question(prompt: &str, options: &[&str]) -> Question {
    Question {
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

/// The intuition check asked before any explanation is shown.
pub fn guess_question(kind: ParadoxKind) -> Question {
    match kind {
        ParadoxKind::Birthday => question(
            "In a group of how many people does the probability of at least two \
             sharing a birthday exceed 50%?",
            &[BIRTHDAY_UNDER_25, BIRTHDAY_AROUND_90, BIRTHDAY_AROUND_182, BIRTHDAY_OVER_200],
        ),
        ParadoxKind::MontyHall => question(
            "You pick door 1 of 3. The host, who knows where the car is, opens \
             door 3 and shows a goat. Should you switch to door 2?",
            &[MONTY_SWITCH, MONTY_STAY, MONTY_NO_DIFFERENCE],
        ),
        ParadoxKind::Simpson => question(
            "Treatment A cures a higher share of patients than treatment B for \
             both small and large kidney stones. Does A also cure a higher share \
             of all patients combined?",
            &[SIMPSON_MUST_HOLD, SIMPSON_CAN_FLIP],
        ),
    }
}

/// The follow-up asked after the answer is revealed.
pub fn concept_question(kind: ParadoxKind) -> Question {
    match kind {
        ParadoxKind::Birthday => question(
            "At how many people does the probability of at least one shared \
             birthday become exactly 100%?",
            &[
                CERTAIN_50_TO_100,
                CERTAIN_100_TO_150,
                CERTAIN_150_TO_365,
                CERTAIN_AT_366,
                CERTAIN_NEVER,
            ],
        ),
        ParadoxKind::MontyHall => question(
            "With three doors, how often does always switching win the car?",
            &[MONTY_ONE_IN_THREE, MONTY_ONE_IN_TWO, MONTY_TWO_IN_THREE],
        ),
        ParadoxKind::Simpson => question(
            "What makes the combined result point the other way?",
            &[SIMPSON_NOISE, SIMPSON_LURKING, SIMPSON_ARITHMETIC],
        ),
    }
}

/// Bucket of the Birthday guess that contains `group_size`.
pub fn birthday_guess_bucket(group_size: u32) -> &'static str {
    match group_size {
        0..=24    => BIRTHDAY_UNDER_25,
        25..=135  => BIRTHDAY_AROUND_90,
        136..=200 => BIRTHDAY_AROUND_182,
        _         => BIRTHDAY_OVER_200,
    }
}

/// Bucket of the Birthday concept check for the first certain group size.
pub fn certainty_bucket(group_size: Option<u32>) -> &'static str {
    match group_size {
        None            => CERTAIN_NEVER,
        Some(0..=100)   => CERTAIN_50_TO_100,
        Some(101..=150) => CERTAIN_100_TO_150,
        Some(151..=365) => CERTAIN_150_TO_365,
        Some(_)         => CERTAIN_AT_366,
    }
}

fn strategy_label(odds: &MontyHallOdds) -> &'static str {
    if odds.switch > odds.stay {
        MONTY_SWITCH
    } else if odds.stay > odds.switch {
        MONTY_STAY
    } else {
        MONTY_NO_DIFFERENCE
    }
}

fn nearest_fraction_label(p: f64) -> &'static str {
    let candidates = [
        (MONTY_ONE_IN_THREE, 1.0 / 3.0),
        (MONTY_ONE_IN_TWO, 1.0 / 2.0),
        (MONTY_TWO_IN_THREE, 2.0 / 3.0),
    ];
    candidates
        .iter()
        .min_by(|a, b| (a.1 - p).abs().total_cmp(&(b.1 - p).abs()))
        .map_or(MONTY_ONE_IN_TWO, |c| c.0)
}

fn birthday_key() -> AnswerKey {
    // The scan runs one past the calendar, where pigeonhole guarantees a hit.
    let past_calendar = DAYS_IN_YEAR + 1;
    let half = find_threshold(birthday_series(1, past_calendar), 0.5).unwrap_or(past_calendar);
    let certain = find_threshold(birthday_series(1, past_calendar), 1.0).ok();
    debug!(half, ?certain, "derived birthday answer key");
    AnswerKey {
        guess: birthday_guess_bucket(half).to_string(),
        concept: certainty_bucket(certain).to_string(),
    }
}

fn monty_hall_key() -> AnswerKey {
    let odds = monty_hall_odds(CLASSIC_DOORS).ok();
    debug!(?odds, "derived monty hall answer key");
    AnswerKey {
        guess: odds.as_ref().map_or(MONTY_NO_DIFFERENCE, strategy_label).to_string(),
        concept: nearest_fraction_label(odds.map_or(0.5, |o| o.switch)).to_string(),
    }
}

fn simpson_key() -> AnswerKey {
    let reversal = simpson_analysis(&kidney_stone_strata()).is_ok_and(|r| r.reversal);
    debug!(reversal, "derived simpson answer key");
    AnswerKey {
        guess: if reversal { SIMPSON_CAN_FLIP } else { SIMPSON_MUST_HOLD }.to_string(),
        // Not a computed quantity: the reversal is explained by stone size.
        concept: SIMPSON_LURKING.to_string(),
    }
}

/// Correct options for `kind`, computed on first use.
pub fn answer_key(kind: ParadoxKind) -> &'static AnswerKey {
    static BIRTHDAY: OnceLock<AnswerKey> = OnceLock::new();
    static MONTY_HALL: OnceLock<AnswerKey> = OnceLock::new();
    static SIMPSON: OnceLock<AnswerKey> = OnceLock::new();

    match kind {
        ParadoxKind::Birthday  => BIRTHDAY.get_or_init(birthday_key),
        ParadoxKind::MontyHall => MONTY_HALL.get_or_init(monty_hall_key),
        ParadoxKind::Simpson   => SIMPSON.get_or_init(simpson_key),
    }
}

/// Message shown next to the revealed answer.
pub fn guess_feedback(kind: ParadoxKind, correct: bool) -> &'static str {
    match (kind, correct) {
        (ParadoxKind::Birthday, true) =>
            "You trusted your intuition and got it right!",
        (ParadoxKind::Birthday, false) =>
            "This is a very common intuitive mistake. The probability exceeds 50% at just 23 people.",
        (ParadoxKind::MontyHall, true) =>
            "Right: switching wins whenever your first pick was wrong, which is 2 times in 3.",
        (ParadoxKind::MontyHall, false) =>
            "Most people say it doesn't matter, but the host's choice carries information.",
        (ParadoxKind::Simpson, true) =>
            "Right: pooled rates can reverse the trend seen inside every group.",
        (ParadoxKind::Simpson, false) =>
            "A wins in each group, yet B wins overall once the groups are combined.",
    }
}

/// Message shown after the concept check.
pub fn concept_feedback(kind: ParadoxKind, correct: bool) -> &'static str {
    match (kind, correct) {
        (ParadoxKind::Birthday, true) =>
            "Correct! With 366 people the pigeonhole principle guarantees a shared birthday.",
        (ParadoxKind::Birthday, false) =>
            "The answer is 366 people and beyond. Only then is a shared birthday guaranteed.",
        (ParadoxKind::MontyHall, true) =>
            "Correct! Switching loses only when the first pick was the car.",
        (ParadoxKind::MontyHall, false) =>
            "Switching wins 2 in 3: it loses only when the first pick (1 in 3) was right.",
        (ParadoxKind::Simpson, true) =>
            "Correct! B was mostly given the easy small-stone cases.",
        (ParadoxKind::Simpson, false) =>
            "The cause is stone size: B mostly treated small stones, which are easier to cure.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_entry_is_an_offered_option() {
        for kind in ParadoxKind::ALL {
            let key = answer_key(kind);
            assert!(guess_question(kind).has_option(&key.guess), "{kind:?} guess key");
            assert!(concept_question(kind).has_option(&key.concept), "{kind:?} concept key");
        }
    }

    #[test]
    fn derived_keys_match_known_answers() {
        assert_eq!(answer_key(ParadoxKind::Birthday).guess, BIRTHDAY_UNDER_25);
        assert_eq!(answer_key(ParadoxKind::Birthday).concept, CERTAIN_AT_366);
        assert_eq!(answer_key(ParadoxKind::MontyHall).guess, MONTY_SWITCH);
        assert_eq!(answer_key(ParadoxKind::MontyHall).concept, MONTY_TWO_IN_THREE);
        assert_eq!(answer_key(ParadoxKind::Simpson).guess, SIMPSON_CAN_FLIP);
    }

    #[test]
    fn key_is_computed_once() {
        let a: *const AnswerKey = answer_key(ParadoxKind::Birthday);
        let b: *const AnswerKey = answer_key(ParadoxKind::Birthday);
        assert_eq!(a, b);
    }

    #[test]
    fn buckets_cover_boundaries() {
        assert_eq!(birthday_guess_bucket(23), BIRTHDAY_UNDER_25);
        assert_eq!(birthday_guess_bucket(25), BIRTHDAY_AROUND_90);
        assert_eq!(birthday_guess_bucket(182), BIRTHDAY_AROUND_182);
        assert_eq!(birthday_guess_bucket(201), BIRTHDAY_OVER_200);
        assert_eq!(certainty_bucket(Some(366)), CERTAIN_AT_366);
        assert_eq!(certainty_bucket(None), CERTAIN_NEVER);
    }
}
