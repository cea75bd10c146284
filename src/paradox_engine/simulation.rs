//! Monte-Carlo counterparts of the exact computations in `probability`.
//!
//! All functions take the RNG by `&mut` so callers choose between a seeded
//! `StdRng` (reproducible runs, tests) and entropy.

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::paradox_engine::error::EngineError;

/// Build the session RNG: seeded when `seed` is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTally {
    pub successes: u32,
    pub trials: u32,
}

impl SimulationTally {
    pub fn rate(self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.trials)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MontyHallTally {
    pub stay_wins: u32,
    pub switch_wins: u32,
    pub trials: u32,
}

impl MontyHallTally {
    pub fn stay_rate(self) -> f64 {
        SimulationTally { successes: self.stay_wins, trials: self.trials }.rate()
    }

    pub fn switch_rate(self) -> f64 {
        SimulationTally { successes: self.switch_wins, trials: self.trials }.rate()
    }
}

/// Seat `group_size` people on random days `trials` times and count the
/// groups where two people share a day.
pub fn simulate_birthday<R: Rng>(
    rng: &mut R,
    group_size: u32,
    days: u32,
    trials: u32,
) -> SimulationTally {
    let mut successes = 0;
    if group_size > days {
        // Pigeonhole: every trial collides.
        successes = trials;
    } else {
        // Grows with the days actually drawn, not with the calendar size.
        let mut taken: HashSet<u32> = HashSet::new();
        for _ in 0..trials {
            taken.clear();
            let collided = (0..group_size).any(|_| !taken.insert(rng.gen_range(0..days)));
            if collided {
                successes += 1;
            }
        }
    }
    trace!(group_size, days, trials, successes, "simulated birthdays");
    SimulationTally { successes, trials }
}

/// Uniform pick among `0..doors` skipping the doors in `excluded`.
fn pick_door<R: Rng>(rng: &mut R, doors: u32, excluded: &[u32]) -> u32 {
    let candidates: Vec<u32> = (0..doors).filter(|d| !excluded.contains(d)).collect();
    candidates[rng.gen_range(0..candidates.len())]
}

/// Play `trials` Monty Hall games and score both strategies on each one.
///
/// The host knows where the car is and opens one goat door that is not the
/// contestant's pick. The switcher moves to a random remaining closed door.
pub fn simulate_monty_hall<R: Rng>(
    rng: &mut R,
    doors: u32,
    trials: u32,
) -> Result<MontyHallTally, EngineError> {
    if doors < 3 {
        return Err(EngineError::invalid(
            "door count",
            format!("need at least 3 doors, got {doors}"),
        ));
    }

    let mut tally = MontyHallTally { stay_wins: 0, switch_wins: 0, trials };
    for _ in 0..trials {
        let car = rng.gen_range(0..doors);
        let pick = rng.gen_range(0..doors);
        let opened = pick_door(rng, doors, &[pick, car]);
        let switched = pick_door(rng, doors, &[pick, opened]);
        if pick == car {
            tally.stay_wins += 1;
        }
        if switched == car {
            tally.switch_wins += 1;
        }
    }
    trace!(
        doors,
        trials,
        stay_wins = tally.stay_wins,
        switch_wins = tally.switch_wins,
        "simulated monty hall"
    );
    Ok(tally)
}
