//! JSON snapshot of a session for the presentation layer.
//!
//! The page renders whatever [`to_view_state`] returns: which sections are
//! visible, which radios and buttons still accept input, the chart rows and
//! simulation results, and the feedback messages once answers are graded.

use serde_json::{json, Value};

use crate::paradox_engine::{
    models::{Findings, ProbabilityPoint, Question, Stage},
    quiz::{concept_feedback, concept_question, guess_feedback, guess_question},
    session::ParadoxSession,
};

/// Chart rows in the shape the line chart expects.
fn chart_rows(series: &[ProbabilityPoint]) -> Value {
    Value::Array(
        series
            .iter()
            .map(|p| json!({ "n": p.group_size, "probability": p.probability }))
            .collect(),
    )
}

/// A radio group: its options, what was picked, and whether it still accepts input.
fn radio(question: &Question, selected: Option<&str>, disabled: bool) -> Value {
    json!({
        "prompt": question.prompt,
        "options": question.options,
        "selected": selected,
        "disabled": disabled
    })
}

fn findings_block(findings: &Findings) -> Value {
    match findings {
        Findings::Birthday {
            series,
            threshold,
            target,
            simulated_group_size,
            simulated_rate,
            trials,
        } => json!({
            "kind": "Birthday",
            "chart": chart_rows(series),
            "target": target,
            // null tells the page not to claim a crossing point.
            "threshold": threshold,
            "crosses_in_range": threshold.is_some(),
            "simulated": {
                "group_size": simulated_group_size,
                "rate": simulated_rate,
                "trials": trials
            }
        }),
        Findings::MontyHall { odds, simulated_stay, simulated_switch, trials } => json!({
            "kind": "MontyHall",
            "doors": odds.doors,
            "exact": { "stay": odds.stay, "switch": odds.switch },
            "simulated": { "stay": simulated_stay, "switch": simulated_switch, "trials": trials }
        }),
        Findings::Simpson(report) => json!({
            "kind": "Simpson",
            "strata": report.strata,
            "aggregate": { "a": report.aggregate_a, "b": report.aggregate_b },
            "reversal": report.reversal
        }),
    }
}

/// Snapshot of everything the page should render for `session`.
///
/// Visibility and disabled flags are pure functions of the stage: a control
/// is disabled once its stage has been left, never by separate bookkeeping.
pub fn to_view_state(session: &ParadoxSession) -> Value {
    let stage = session.stage();
    let kind = session.paradox();
    let at_least = |s: Stage| stage >= s;

    let guess_feedback_msg = session.guess_correct().map(|ok| {
        json!({ "correct": ok, "message": guess_feedback(kind, ok) })
    });
    let concept_feedback_msg = session.concept_correct().map(|ok| {
        json!({ "correct": ok, "message": concept_feedback(kind, ok) })
    });

    json!({
        "paradox": kind.to_string(),
        "stage": stage,
        "sections": {
            "question": true,
            "explanation": at_least(Stage::ExplanationShown),
            "graph": at_least(Stage::GraphShown),
            "answer": at_least(Stage::AnswerRevealed),
            "concept_check": at_least(Stage::AnswerRevealed)
        },
        "guess": radio(
            &guess_question(kind),
            session.user_guess(),
            at_least(Stage::ExplanationShown),
        ),
        "concept": radio(
            &concept_question(kind),
            session.concept_answer(),
            at_least(Stage::ConceptChecked),
        ),
        "buttons": {
            "submit_guess": stage == Stage::AwaitingGuess,
            "advance_to_graph": stage == Stage::ExplanationShown,
            "reveal": stage == Stage::GraphShown,
            "check_concept": stage == Stage::AnswerRevealed
        },
        "findings": session.findings().map(findings_block),
        "guess_feedback": guess_feedback_msg,
        "concept_feedback": concept_feedback_msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paradox_engine::models::ParadoxKind;

    #[test]
    fn fresh_session_only_offers_the_guess() {
        let view = to_view_state(&ParadoxSession::new(ParadoxKind::Birthday));
        assert_eq!(view["stage"], "AwaitingGuess");
        assert_eq!(view["guess"]["disabled"], false);
        assert_eq!(view["buttons"]["submit_guess"], true);
        assert_eq!(view["buttons"]["reveal"], false);
        assert_eq!(view["sections"]["graph"], false);
        assert!(view["findings"].is_null());
    }

    #[test]
    fn guess_control_locks_after_submission() {
        let mut session = ParadoxSession::new(ParadoxKind::Birthday);
        session.submit_guess("Around 182");
        let view = to_view_state(&session);
        assert_eq!(view["guess"]["disabled"], true);
        assert_eq!(view["guess"]["selected"], "Around 182");
        assert_eq!(view["buttons"]["advance_to_graph"], true);
    }

    #[test]
    fn graph_stage_exposes_chart_and_threshold() {
        let mut session = ParadoxSession::new(ParadoxKind::Birthday);
        session.submit_guess("Less than 25");
        session.advance_to_graph();
        let view = to_view_state(&session);
        assert_eq!(view["findings"]["threshold"], 23);
        assert_eq!(view["findings"]["crosses_in_range"], true);
        assert_eq!(view["findings"]["chart"].as_array().map(Vec::len), Some(100));
        assert_eq!(view["findings"]["simulated"]["group_size"], 23);
        assert_eq!(view["findings"]["simulated"]["trials"], 10_000);
        assert!(view["findings"]["simulated"]["rate"].is_f64());
        assert!(view["guess_feedback"].is_null());
    }

    #[test]
    fn revealed_view_carries_feedback() {
        let mut session = ParadoxSession::new(ParadoxKind::Simpson);
        session.submit_guess("Yes, A must be better overall");
        session.advance_to_graph();
        session.reveal();
        let view = to_view_state(&session);
        assert_eq!(view["guess_feedback"]["correct"], false);
        assert_eq!(view["findings"]["reversal"], true);
        assert_eq!(view["sections"]["concept_check"], true);
        assert_eq!(view["concept"]["disabled"], false);
    }

    #[test]
    fn concept_control_locks_after_answer() {
        let mut session = ParadoxSession::new(ParadoxKind::Birthday);
        session.submit_guess("Less than 25");
        session.advance_to_graph();
        session.reveal();
        session.submit_concept_answer("At 366 People");
        let view = to_view_state(&session);
        assert_eq!(view["stage"], "ConceptChecked");
        assert_eq!(view["concept"]["disabled"], true);
        assert_eq!(view["concept"]["selected"], "At 366 People");
        assert_eq!(view["buttons"]["check_concept"], false);
        assert_eq!(view["concept_feedback"]["correct"], true);
        for button in ["submit_guess", "advance_to_graph", "reveal", "check_concept"] {
            assert_eq!(view["buttons"][button], false, "{button} still offered at the end");
        }
    }
}
