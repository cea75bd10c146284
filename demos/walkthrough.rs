//! Guided walkthrough of all three paradoxes.
//!
//! Run with: `cargo run --example walkthrough`
//!
//! This example plays the part of the presentation layer:
//!
//! 1. **Birthday curve** — prints a few points of the shared-birthday curve and
//!    the group size where it crosses 50%.
//! 2. **Guided reveal** — drives one session per paradox through every stage
//!    and prints the outcome of each action, including an out-of-order click
//!    that the session ignores.
//! 3. **View snapshot** — dumps the JSON a UI would render for the final state.
//!
//! Set `rng_seed` in the config to make the Monty Hall simulation repeatable.

use paradox_explorer::{
    birthday_series, find_threshold, paradox_engine::quiz, to_view_state, ExplorerConfig,
    Findings, ParadoxKind, ParadoxSession, StepOutcome,
};

fn print_outcome(label: &str, out: &StepOutcome) {
    let marker = if out.transitioned { "→" } else { "·" };
    print!("  {marker} {label:<22} stage: {}", out.stage);
    if let Some(ok) = out.guess_correct {
        print!("  guess correct: {ok}");
    }
    if let Some(ok) = out.concept_correct {
        print!("  concept correct: {ok}");
    }
    println!();
}

fn print_findings(findings: &Findings) {
    match findings {
        Findings::Birthday { threshold, target, simulated_group_size, simulated_rate, trials, .. } => {
            match threshold {
                Some(n) => println!("    crosses {:.0}% at n = {n}", target * 100.0),
                None    => println!("    never crosses {:.0}% in range", target * 100.0),
            }
            println!("    simulated at n = {simulated_group_size}: {simulated_rate:.3}  ({trials} groups)");
        }
        Findings::MontyHall { odds, simulated_stay, simulated_switch, trials } => {
            println!("    exact:     stay {:.3}  switch {:.3}", odds.stay, odds.switch);
            println!("    simulated: stay {simulated_stay:.3}  switch {simulated_switch:.3}  ({trials} games)");
        }
        Findings::Simpson(report) => {
            for s in &report.strata {
                println!("    {:<13} A {:.1}%  B {:.1}%", s.label, s.rate_a * 100.0, s.rate_b * 100.0);
            }
            println!(
                "    {:<13} A {:.1}%  B {:.1}%  reversal: {}",
                "Overall", report.aggregate_a * 100.0, report.aggregate_b * 100.0, report.reversal
            );
        }
    }
}

fn walk(kind: ParadoxKind, config: &ExplorerConfig, guess: &str) -> Result<ParadoxSession, Box<dyn std::error::Error>> {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {kind}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut session = ParadoxSession::with_config(kind, config.clone())?;

    print_outcome("reveal (too early)", &session.reveal());
    print_outcome(&format!("guess \"{guess}\""), &session.submit_guess(guess));
    let out = session.advance_to_graph();
    print_outcome("advance to graph", &out);
    if let Some(findings) = &out.findings {
        print_findings(findings);
    }
    print_outcome("reveal", &session.reveal());
    let concept = quiz::answer_key(kind).concept.clone();
    print_outcome("check concept", &session.submit_concept_answer(concept));
    println!();
    Ok(session)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // ── Birthday curve ───────────────────────────────────────────────────────
    println!();
    println!("══ Birthday curve ══");
    for p in birthday_series(1, 100).filter(|p| p.group_size % 10 == 0 || p.group_size == 23) {
        println!("  n = {:>3}  p = {:.4}", p.group_size, p.probability);
    }
    println!("  50% crossing: n = {}", find_threshold(birthday_series(1, 100), 0.5)?);
    println!();

    // ── Guided reveal ────────────────────────────────────────────────────────
    let config = ExplorerConfig::from_json_str(r#"{ "rng_seed": 42, "simulation_trials": 5000 }"#)?;
    println!("══ Guided reveal ══");
    println!();
    walk(ParadoxKind::Birthday, &config, quiz::BIRTHDAY_UNDER_25)?;
    walk(ParadoxKind::MontyHall, &config, quiz::MONTY_NO_DIFFERENCE)?;
    let last = walk(ParadoxKind::Simpson, &config, quiz::SIMPSON_CAN_FLIP)?;

    // ── View snapshot ────────────────────────────────────────────────────────
    println!("══ View snapshot (Simpson, final stage) ══");
    println!("{}", serde_json::to_string_pretty(&to_view_state(&last))?);
    Ok(())
}
