//! # paradox_explorer
//!
//! The core of an interactive explainer for classic probability paradoxes:
//! the Birthday paradox, Monty Hall, and Simpson's paradox.
//!
//! The crate has two halves. The **probability engine** is a set of pure
//! functions that compute exact (and, where it helps, simulated) results for
//! each paradox. The **guided reveal** is a small forward-only state machine
//! that walks a user from a gut-feeling guess to the explanation, the chart,
//! the answer, and a final concept check. Rendering is left to the caller:
//! [`to_view_state`] turns a session into a JSON snapshot for any UI.
//!
//! ## How it works
//!
//! 1. Create a [`ParadoxSession`] for one paradox (optionally with an
//!    [`ExplorerConfig`] loaded from JSON).
//! 2. Feed it user actions: `submit_guess`, `advance_to_graph`, `reveal`,
//!    `submit_concept_answer`. Each returns a [`StepOutcome`] with the new
//!    stage and whatever was computed. Actions that do not fit the current
//!    stage are ignored.
//! 3. Entering the graph stage runs the engine; the reveal grades the guess
//!    against an answer key that was itself derived from the engine once.
//!
//! ## Quick start
//!
//! ```rust
//! use paradox_explorer::{
//!     birthday_probability, birthday_series, find_threshold, ParadoxKind, ParadoxSession, Stage,
//! };
//!
//! assert!(birthday_probability(23) >= 0.5);
//! assert_eq!(find_threshold(birthday_series(1, 100), 0.5), Ok(23));
//!
//! let mut session = ParadoxSession::new(ParadoxKind::Birthday);
//! session.submit_guess("Less than 25");
//! session.advance_to_graph();
//! let outcome = session.reveal();
//! assert_eq!(outcome.stage, Stage::AnswerRevealed);
//! assert_eq!(outcome.guess_correct, Some(true));
//! ```

pub mod paradox_engine;

// Convenience re-exports so callers can use `paradox_explorer::birthday_probability`
// directly without reaching into `paradox_engine::`.
pub use paradox_engine::{
    birthday_probability, birthday_probability_checked, birthday_series, find_threshold,
    kidney_stone_strata, monty_hall_odds, shared_birthday_probability, simpson_analysis,
    to_view_state, transition, Action, AnswerKey, BirthdaySeries, ConfigError, EngineError,
    ExplorerConfig, Findings, MontyHallOdds, ParadoxKind, ParadoxSession, ProbabilityPoint,
    Question, SimpsonReport, Stage, StepOutcome, Stratum, StratumRates, Tally, DAYS_IN_YEAR,
};
