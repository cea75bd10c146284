//! Guided reveal: question → explanation → graph → answer → concept check.
//!
//! [`transition`] is the whole state machine. [`ParadoxSession`] owns one
//! paradox page's state, feeds actions through `transition`, and records the
//! guess, the engine findings and the concept answer as stages are entered.
//!
//! Out-of-order actions are ignored, not rejected: the presentation layer only
//! offers the action of the current stage, so anything else is a stale click
//! or a replay. They are logged at `debug` and the outcome reports
//! `transitioned: false`.

use tracing::{debug, warn};

use crate::paradox_engine::{
    config::ExplorerConfig,
    error::{ConfigError, EngineError},
    models::{Action, Findings, ParadoxKind, ProbabilityPoint, Stage, StepOutcome},
    probability::{find_threshold, kidney_stone_strata, monty_hall_odds, simpson_analysis, BirthdaySeries},
    quiz::{answer_key, concept_question, guess_question},
    simulation::{make_rng, simulate_birthday, simulate_monty_hall},
};

/// Next stage for `action` taken in `stage`; `stage` itself when the action
/// does not apply.
pub fn transition(stage: Stage, action: &Action) -> Stage {
    match (stage, action) {
        (Stage::AwaitingGuess, Action::SubmitGuess(choice)) if !choice.is_empty() =>
            Stage::ExplanationShown,
        (Stage::ExplanationShown, Action::AdvanceToGraph) =>
            Stage::GraphShown,
        (Stage::GraphShown, Action::Reveal) =>
            Stage::AnswerRevealed,
        (Stage::AnswerRevealed, Action::SubmitConceptAnswer(choice)) if !choice.is_empty() =>
            Stage::ConceptChecked,
        _ => stage,
    }
}

#[derive(Debug, Clone)]
pub struct ParadoxSession {
    paradox: ParadoxKind,
    config: ExplorerConfig,
    stage: Stage,
    user_guess: Option<String>,
    findings: Option<Findings>,
    concept_answer: Option<String>,
}

impl ParadoxSession {
    /// Fresh session with the default config.
    pub fn new(paradox: ParadoxKind) -> Self {
        ParadoxSession {
            paradox,
            config: ExplorerConfig::default(),
            stage: Stage::AwaitingGuess,
            user_guess: None,
            findings: None,
            concept_answer: None,
        }
    }

    pub fn with_config(paradox: ParadoxKind, config: ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(ParadoxSession { config, ..ParadoxSession::new(paradox) })
    }

    /// Back to `AwaitingGuess`, forgetting everything but paradox and config.
    pub fn reset(&mut self) {
        debug!(paradox = ?self.paradox, "session reset");
        *self = ParadoxSession {
            config: std::mem::take(&mut self.config),
            ..ParadoxSession::new(self.paradox)
        };
    }

    pub fn paradox(&self) -> ParadoxKind {
        self.paradox
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn user_guess(&self) -> Option<&str> {
        self.user_guess.as_deref()
    }

    pub fn concept_answer(&self) -> Option<&str> {
        self.concept_answer.as_deref()
    }

    pub fn findings(&self) -> Option<&Findings> {
        self.findings.as_ref()
    }

    /// The Birthday curve, once the graph stage has been reached.
    pub fn series(&self) -> Option<&[ProbabilityPoint]> {
        match &self.findings {
            Some(Findings::Birthday { series, .. }) => Some(series.as_slice()),
            _ => None,
        }
    }

    /// Whether the guess matches the answer key. `None` before the reveal.
    pub fn guess_correct(&self) -> Option<bool> {
        if self.stage < Stage::AnswerRevealed {
            return None;
        }
        let key = answer_key(self.paradox);
        self.user_guess.as_deref().map(|g| g == key.guess)
    }

    /// Whether the concept answer matches the answer key. `None` until answered.
    pub fn concept_correct(&self) -> Option<bool> {
        let key = answer_key(self.paradox);
        self.concept_answer.as_deref().map(|c| c == key.concept)
    }

    pub fn submit_guess(&mut self, choice: impl Into<String>) -> StepOutcome {
        self.apply(Action::SubmitGuess(choice.into()))
    }

    pub fn advance_to_graph(&mut self) -> StepOutcome {
        self.apply(Action::AdvanceToGraph)
    }

    pub fn reveal(&mut self) -> StepOutcome {
        self.apply(Action::Reveal)
    }

    pub fn submit_concept_answer(&mut self, choice: impl Into<String>) -> StepOutcome {
        self.apply(Action::SubmitConceptAnswer(choice.into()))
    }

    /// Run one action through the state machine.
    pub fn apply(&mut self, action: Action) -> StepOutcome {
        let from = self.stage;
        let to = transition(from, &action);
        if to == from || !self.is_offered_choice(&action) {
            debug!(paradox = ?self.paradox, stage = ?from, ?action, "ignored action");
            return self.outcome(false);
        }

        match action {
            Action::SubmitGuess(choice) => self.user_guess = Some(choice),
            Action::AdvanceToGraph => match self.compute_findings() {
                Ok(findings) => self.findings = Some(findings),
                Err(e) => {
                    warn!(paradox = ?self.paradox, %e, "could not compute findings");
                    return self.outcome(false);
                }
            },
            // Findings were computed on entering GraphShown.
            Action::Reveal => {}
            Action::SubmitConceptAnswer(choice) => self.concept_answer = Some(choice),
        }

        debug!(paradox = ?self.paradox, ?from, ?to, "stage transition");
        self.stage = to;
        self.outcome(true)
    }

    fn is_offered_choice(&self, action: &Action) -> bool {
        match action {
            Action::SubmitGuess(choice) => guess_question(self.paradox).has_option(choice),
            Action::SubmitConceptAnswer(choice) => concept_question(self.paradox).has_option(choice),
            Action::AdvanceToGraph | Action::Reveal => true,
        }
    }

    fn compute_findings(&self) -> Result<Findings, EngineError> {
        let cfg = &self.config;
        match self.paradox {
            ParadoxKind::Birthday => {
                let series: Vec<ProbabilityPoint> =
                    BirthdaySeries::with_days(cfg.series_start, cfg.series_end, cfg.calendar_days)
                        .collect();
                let threshold = match find_threshold(&series, cfg.threshold_target) {
                    Ok(n) => Some(n),
                    Err(EngineError::ThresholdNotFound { .. }) => None,
                    Err(e) => return Err(e),
                };
                let simulated_group_size = threshold.unwrap_or(cfg.series_end);
                let mut rng = make_rng(cfg.rng_seed);
                let tally = simulate_birthday(
                    &mut rng,
                    simulated_group_size,
                    cfg.calendar_days,
                    cfg.simulation_trials,
                );
                Ok(Findings::Birthday {
                    series,
                    threshold,
                    target: cfg.threshold_target,
                    simulated_group_size,
                    simulated_rate: tally.rate(),
                    trials: tally.trials,
                })
            }
            ParadoxKind::MontyHall => {
                let odds = monty_hall_odds(cfg.monty_hall_doors)?;
                let mut rng = make_rng(cfg.rng_seed);
                let tally = simulate_monty_hall(&mut rng, cfg.monty_hall_doors, cfg.simulation_trials)?;
                Ok(Findings::MontyHall {
                    odds,
                    simulated_stay: tally.stay_rate(),
                    simulated_switch: tally.switch_rate(),
                    trials: tally.trials,
                })
            }
            ParadoxKind::Simpson => Ok(Findings::Simpson(simpson_analysis(&kidney_stone_strata())?)),
        }
    }

    fn outcome(&self, transitioned: bool) -> StepOutcome {
        StepOutcome {
            stage: self.stage,
            transitioned,
            guess_correct: self.guess_correct(),
            concept_correct: self.concept_correct(),
            findings: self.findings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_transition_table() {
        let guess = Action::SubmitGuess("x".into());
        let concept = Action::SubmitConceptAnswer("y".into());
        assert_eq!(transition(Stage::AwaitingGuess, &guess), Stage::ExplanationShown);
        assert_eq!(transition(Stage::ExplanationShown, &Action::AdvanceToGraph), Stage::GraphShown);
        assert_eq!(transition(Stage::GraphShown, &Action::Reveal), Stage::AnswerRevealed);
        assert_eq!(transition(Stage::AnswerRevealed, &concept), Stage::ConceptChecked);
    }

    #[test]
    fn empty_choices_do_not_advance() {
        assert_eq!(
            transition(Stage::AwaitingGuess, &Action::SubmitGuess(String::new())),
            Stage::AwaitingGuess
        );
        assert_eq!(
            transition(Stage::AnswerRevealed, &Action::SubmitConceptAnswer(String::new())),
            Stage::AnswerRevealed
        );
    }

    #[test]
    fn terminal_stage_absorbs_everything() {
        for action in [
            Action::SubmitGuess("x".into()),
            Action::AdvanceToGraph,
            Action::Reveal,
            Action::SubmitConceptAnswer("y".into()),
        ] {
            assert_eq!(transition(Stage::ConceptChecked, &action), Stage::ConceptChecked);
        }
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = ExplorerConfig { monty_hall_doors: 2, ..ExplorerConfig::default() };
        assert!(ParadoxSession::with_config(ParadoxKind::MontyHall, config).is_err());
    }
}
