//! Core paradox engine — probability math, simulation, and the guided reveal.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: stages, actions, probability points, findings |
//! | `error`       | `EngineError` and `ConfigError` |
//! | `config`      | `ExplorerConfig`, loadable from JSON |
//! | `probability` | Exact Birthday, Monty Hall and Simpson computations |
//! | `simulation`  | Seeded Monte-Carlo runs of the same paradoxes |
//! | `quiz`        | Questions, options, and the engine-derived answer key |
//! | `session`     | `transition()` and the per-page `ParadoxSession` |
//! | `view`        | JSON snapshot of a session for the presentation layer |

pub mod config;
pub mod error;
pub mod models;
pub mod probability;
pub mod quiz;
pub mod session;
pub mod simulation;
pub mod view;

// Re-export the public API surface so callers can use
// `paradox_engine::birthday_probability` without reaching into sub-modules.
pub use config::ExplorerConfig;
pub use error::{ConfigError, EngineError};
pub use models::{
    Action, AnswerKey, Findings, MontyHallOdds, ParadoxKind, ProbabilityPoint, Question,
    SimpsonReport, Stage, StepOutcome, Stratum, StratumRates, Tally,
};
pub use probability::{
    birthday_probability, birthday_probability_checked, birthday_series, find_threshold,
    kidney_stone_strata, monty_hall_odds, shared_birthday_probability, simpson_analysis,
    BirthdaySeries, DAYS_IN_YEAR,
};
pub use session::{transition, ParadoxSession};
pub use view::to_view_state;
