use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Paradoxes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParadoxKind {
    Birthday,
    MontyHall,
    Simpson,
}

impl ParadoxKind {
    pub const ALL: [ParadoxKind; 3] = [
        ParadoxKind::Birthday,
        ParadoxKind::MontyHall,
        ParadoxKind::Simpson,
    ];
}

impl fmt::Display for ParadoxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParadoxKind::Birthday  => "Birthday Paradox",
            ParadoxKind::MontyHall => "Monty Hall Paradox",
            ParadoxKind::Simpson   => "Simpson's Paradox",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Engine outputs
// ---------------------------------------------------------------------------

/// One point on the shared-birthday curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPoint {
    pub group_size: u32,
    /// Always within `[0, 1]`.
    pub probability: f64,
}

/// Exact win probabilities for the two Monty Hall strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MontyHallOdds {
    pub doors: u32,
    pub stay: f64,
    pub switch: f64,
}

/// Successes out of trials for one treatment in one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub successes: u32,
    pub trials: u32,
}

impl Tally {
    pub const fn new(successes: u32, trials: u32) -> Self {
        Tally { successes, trials }
    }

    /// Success rate; 0 for an empty tally.
    pub fn rate(self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.trials)
        }
    }
}

/// A subgroup of a Simpson's paradox dataset, e.g. "Small stones".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stratum {
    pub label: String,
    pub treatment_a: Tally,
    pub treatment_b: Tally,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StratumRates {
    pub label: String,
    pub rate_a: f64,
    pub rate_b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpsonReport {
    pub strata: Vec<StratumRates>,
    pub aggregate_a: f64,
    pub aggregate_b: f64,
    /// The per-group winner is the aggregate loser.
    pub reversal: bool,
}

/// Everything the engine computed for a session, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Findings {
    Birthday {
        series: Vec<ProbabilityPoint>,
        /// `None` when the curve never reaches the target inside the series.
        threshold: Option<u32>,
        target: f64,
        /// Group size the simulation ran at: the threshold, or the end of the series.
        simulated_group_size: u32,
        simulated_rate: f64,
        trials: u32,
    },
    MontyHall {
        odds: MontyHallOdds,
        simulated_stay: f64,
        simulated_switch: f64,
        trials: u32,
    },
    Simpson(SimpsonReport),
}

// ---------------------------------------------------------------------------
// Guided reveal
// ---------------------------------------------------------------------------

/// Stages of the guided reveal, in the only order they can be visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    AwaitingGuess,
    ExplanationShown,
    GraphShown,
    AnswerRevealed,
    ConceptChecked,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        self == Stage::ConceptChecked
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::AwaitingGuess    => "Awaiting Guess",
            Stage::ExplanationShown => "Explanation Shown",
            Stage::GraphShown       => "Graph Shown",
            Stage::AnswerRevealed   => "Answer Revealed",
            Stage::ConceptChecked   => "Concept Checked",
        };
        write!(f, "{}", s)
    }
}

/// A user action issued by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SubmitGuess(String),
    AdvanceToGraph,
    Reveal,
    SubmitConceptAnswer(String),
}

// ---------------------------------------------------------------------------
// Quiz content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|o| o == choice)
    }
}

/// Correct options for one paradox, derived once from engine results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    pub guess: String,
    pub concept: String,
}

/// What a session action produced, for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub stage: Stage,
    /// `false` when the action was ignored.
    pub transitioned: bool,
    /// Set from `AnswerRevealed` onwards.
    pub guess_correct: Option<bool>,
    /// Set once the concept check is answered.
    pub concept_correct: Option<bool>,
    pub findings: Option<Findings>,
}
