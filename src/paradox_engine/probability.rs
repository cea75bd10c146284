use std::borrow::Borrow;
use std::ops::RangeInclusive;

use tracing::trace;

use crate::paradox_engine::{
    error::EngineError,
    models::{MontyHallOdds, ProbabilityPoint, SimpsonReport, Stratum, StratumRates, Tally},
};

/// Calendar size used by the Birthday paradox. Leap days are ignored.
pub const DAYS_IN_YEAR: u32 = 365;

// ---------------------------------------------------------------------------
// Birthday paradox
// ---------------------------------------------------------------------------

/// Probability that at least two of `n` people share a birthday in a 365-day year.
pub fn birthday_probability(n: u32) -> f64 {
    shared_birthday_probability(n, DAYS_IN_YEAR)
}

/// Like [`birthday_probability`] but for untrusted signed input.
/// Negative group sizes are rejected instead of being clamped.
pub fn birthday_probability_checked(n: i64) -> Result<f64, EngineError> {
    if n < 0 {
        return Err(EngineError::invalid("group size", format!("{n} is negative")));
    }
    // Anything past the calendar size is a certain collision, so saturating is exact.
    let n = u32::try_from(n).unwrap_or(u32::MAX);
    Ok(birthday_probability(n))
}

/// Probability that at least two of `n` people share one of `days` equally likely days.
///
/// `1 - Π_{i=0}^{n-1} (days - i) / days`, with `n > days` pinned to exactly 1
/// (pigeonhole) and the result clamped to `[0, 1]`.
pub fn shared_birthday_probability(n: u32, days: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if n > days {
        return 1.0;
    }
    let d = f64::from(days);
    let all_distinct: f64 = (0..n).map(|i| f64::from(days - i) / d).product();
    // 1 - Π rounds to 1.0 from n = 153 on, but only n > days is certain.
    let p = clamp_unit(1.0 - all_distinct).min(BELOW_ONE);
    trace!(n, days, p, "shared birthday probability");
    p
}

/// Largest f64 strictly below 1.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

fn clamp_unit(p: f64) -> f64 {
    // `<=` also folds -0.0 into +0.0.
    if p <= 0.0 {
        0.0
    } else if p >= 1.0 {
        1.0
    } else {
        p
    }
}

/// Lazy series of [`ProbabilityPoint`]s over an inclusive range of group sizes.
///
/// Nothing is cached: each point is computed when pulled. Clone the series (or
/// build a new one) to walk it again.
#[derive(Debug, Clone)]
pub struct BirthdaySeries {
    sizes: RangeInclusive<u32>,
    days: u32,
}

impl BirthdaySeries {
    pub fn with_days(n_min: u32, n_max: u32, days: u32) -> Self {
        BirthdaySeries { sizes: n_min..=n_max, days }
    }
}

impl Iterator for BirthdaySeries {
    type Item = ProbabilityPoint;

    fn next(&mut self) -> Option<ProbabilityPoint> {
        let n = self.sizes.next()?;
        Some(ProbabilityPoint {
            group_size: n,
            probability: shared_birthday_probability(n, self.days),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

/// Birthday curve for group sizes `n_min..=n_max`. Empty when `n_min > n_max`.
pub fn birthday_series(n_min: u32, n_max: u32) -> BirthdaySeries {
    BirthdaySeries::with_days(n_min, n_max, DAYS_IN_YEAR)
}

/// Smallest group size whose probability reaches `target`.
///
/// Linear scan, first match wins. A series that never reaches the target is an
/// error: callers report whether the crossing lies inside the computed range.
pub fn find_threshold<I>(series: I, target: f64) -> Result<u32, EngineError>
where
    I: IntoIterator,
    I::Item: Borrow<ProbabilityPoint>,
{
    if !(0.0..=1.0).contains(&target) {
        return Err(EngineError::invalid("threshold target", format!("{target} is outside [0, 1]")));
    }
    let mut searched_up_to = None;
    for item in series {
        let point: &ProbabilityPoint = item.borrow();
        if point.probability >= target {
            return Ok(point.group_size);
        }
        searched_up_to = Some(point.group_size);
    }
    Err(EngineError::ThresholdNotFound { target, searched_up_to })
}

// ---------------------------------------------------------------------------
// Monty Hall
// ---------------------------------------------------------------------------

/// Exact odds when the host knowingly opens one goat door other than the pick.
pub fn monty_hall_odds(doors: u32) -> Result<MontyHallOdds, EngineError> {
    if doors < 3 {
        return Err(EngineError::invalid(
            "door count",
            format!("need at least 3 doors, got {doors}"),
        ));
    }
    let n = f64::from(doors);
    // Initial pick wrong with (n-1)/n, then one of the n-2 closed doors hides the car.
    Ok(MontyHallOdds {
        doors,
        stay: 1.0 / n,
        switch: (n - 1.0) / (n * (n - 2.0)),
    })
}

// ---------------------------------------------------------------------------
// Simpson's paradox
// ---------------------------------------------------------------------------

/// The kidney-stone treatment study: A wins in both groups, B wins overall.
pub fn kidney_stone_strata() -> Vec<Stratum> {
    vec![
        Stratum {
            label: "Small stones".to_string(),
            treatment_a: Tally::new(81, 87),
            treatment_b: Tally::new(234, 270),
        },
        Stratum {
            label: "Large stones".to_string(),
            treatment_a: Tally::new(192, 263),
            treatment_b: Tally::new(55, 80),
        },
    ]
}

fn check_tally(label: &str, tally: Tally) -> Result<(), EngineError> {
    if tally.trials == 0 {
        return Err(EngineError::invalid("stratum", format!("'{label}' has no trials")));
    }
    if tally.successes > tally.trials {
        return Err(EngineError::invalid(
            "stratum",
            format!("'{label}' has {} successes out of {} trials", tally.successes, tally.trials),
        ));
    }
    Ok(())
}

/// Per-group and pooled success rates, and whether pooling flips the winner.
pub fn simpson_analysis(strata: &[Stratum]) -> Result<SimpsonReport, EngineError> {
    if strata.is_empty() {
        return Err(EngineError::invalid("strata", "no groups given"));
    }

    // Pooled in u64: per-stratum counts are u32, their sum may not fit.
    let mut pooled_a = (0u64, 0u64);
    let mut pooled_b = (0u64, 0u64);
    let mut rates = Vec::with_capacity(strata.len());

    for s in strata {
        check_tally(&s.label, s.treatment_a)?;
        check_tally(&s.label, s.treatment_b)?;
        pooled_a.0 += u64::from(s.treatment_a.successes);
        pooled_a.1 += u64::from(s.treatment_a.trials);
        pooled_b.0 += u64::from(s.treatment_b.successes);
        pooled_b.1 += u64::from(s.treatment_b.trials);
        rates.push(StratumRates {
            label: s.label.clone(),
            rate_a: s.treatment_a.rate(),
            rate_b: s.treatment_b.rate(),
        });
    }

    // Every stratum has trials > 0, so neither pooled denominator is zero.
    let aggregate_a = pooled_a.0 as f64 / pooled_a.1 as f64;
    let aggregate_b = pooled_b.0 as f64 / pooled_b.1 as f64;
    let a_wins_everywhere = rates.iter().all(|r| r.rate_a > r.rate_b);
    let b_wins_everywhere = rates.iter().all(|r| r.rate_b > r.rate_a);
    let reversal = (a_wins_everywhere && aggregate_b > aggregate_a)
        || (b_wins_everywhere && aggregate_a > aggregate_b);

    trace!(aggregate_a, aggregate_b, reversal, "simpson analysis");
    Ok(SimpsonReport { strata: rates, aggregate_a, aggregate_b, reversal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_people_collide_one_day_in_365() {
        let p = birthday_probability(2);
        assert!((p - 1.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn small_calendar_matches_hand_computation() {
        // 3 people, 4 days: 1 - (4*3*2)/(4^3) = 1 - 24/64
        let p = shared_birthday_probability(3, 4);
        assert!((p - 40.0 / 64.0).abs() < 1e-12);
        assert_eq!(shared_birthday_probability(5, 4), 1.0);
    }

    #[test]
    fn only_a_full_calendar_plus_one_is_certain() {
        assert!(birthday_probability(200) < 1.0);
        assert!(birthday_probability(365) < 1.0);
        assert_eq!(birthday_probability(366), 1.0);
        assert_eq!(find_threshold(birthday_series(1, 400), 1.0), Ok(366));
    }

    #[test]
    fn one_day_calendar() {
        assert_eq!(shared_birthday_probability(1, 1), 0.0);
        assert_eq!(shared_birthday_probability(2, 1), 1.0);
    }

    #[test]
    fn checked_entry_point_rejects_negative_sizes() {
        assert!(matches!(
            birthday_probability_checked(-1),
            Err(EngineError::InvalidInput { .. })
        ));
        assert_eq!(birthday_probability_checked(0), Ok(0.0));
        assert_eq!(birthday_probability_checked(i64::MAX), Ok(1.0));
    }

    #[test]
    fn series_is_restartable() {
        let series = birthday_series(1, 10);
        let first: Vec<_> = series.clone().collect();
        let second: Vec<_> = series.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].group_size, 1);
    }

    #[test]
    fn inverted_range_gives_empty_series() {
        assert_eq!(birthday_series(10, 1).count(), 0);
    }

    #[test]
    fn threshold_accepts_slices() {
        let points: Vec<_> = birthday_series(1, 100).collect();
        assert_eq!(find_threshold(&points, 0.5), Ok(23));
    }

    #[test]
    fn threshold_outside_range_reports_last_scanned_size() {
        let err = find_threshold(birthday_series(1, 20), 0.5).unwrap_err();
        assert_eq!(
            err,
            EngineError::ThresholdNotFound { target: 0.5, searched_up_to: Some(20) }
        );
        let err = find_threshold(birthday_series(5, 1), 0.5).unwrap_err();
        assert_eq!(err, EngineError::ThresholdNotFound { target: 0.5, searched_up_to: None });
    }

    #[test]
    fn threshold_rejects_nonsense_targets() {
        assert!(matches!(
            find_threshold(birthday_series(1, 10), f64::NAN),
            Err(EngineError::InvalidInput { .. })
        ));
        assert!(find_threshold(birthday_series(1, 10), -0.1).is_err());
    }

    #[test]
    fn monty_hall_classic_odds() {
        let odds = monty_hall_odds(3).unwrap();
        assert!((odds.stay - 1.0 / 3.0).abs() < 1e-12);
        assert!((odds.switch - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn monty_hall_switching_still_wins_with_more_doors() {
        let odds = monty_hall_odds(10).unwrap();
        assert!(odds.switch > odds.stay);
        assert!(monty_hall_odds(2).is_err());
    }

    #[test]
    fn kidney_stones_reverse_when_pooled() {
        let report = simpson_analysis(&kidney_stone_strata()).unwrap();
        assert!(report.strata.iter().all(|r| r.rate_a > r.rate_b));
        assert!(report.aggregate_b > report.aggregate_a);
        assert!(report.reversal);
        assert!((report.aggregate_a - 273.0 / 350.0).abs() < 1e-12);
    }

    #[test]
    fn pooled_counts_past_u32_do_not_overflow() {
        let strata = vec![
            Stratum {
                label: "Huge".to_string(),
                treatment_a: Tally::new(1, u32::MAX),
                treatment_b: Tally::new(1, 2),
            },
            Stratum {
                label: "Also huge".to_string(),
                treatment_a: Tally::new(u32::MAX, u32::MAX),
                treatment_b: Tally::new(1, 2),
            },
        ];
        let report = simpson_analysis(&strata).unwrap();
        let expected = (1.0 + f64::from(u32::MAX)) / (2.0 * f64::from(u32::MAX));
        assert!((report.aggregate_a - expected).abs() < 1e-12);
        assert!((report.aggregate_b - 0.5).abs() < 1e-12);
    }

    #[test]
    fn consistent_data_has_no_reversal() {
        let strata = vec![Stratum {
            label: "All".to_string(),
            treatment_a: Tally::new(9, 10),
            treatment_b: Tally::new(5, 10),
        }];
        assert!(!simpson_analysis(&strata).unwrap().reversal);
    }

    #[test]
    fn malformed_strata_are_rejected() {
        assert!(simpson_analysis(&[]).is_err());
        let empty = vec![Stratum {
            label: "Empty".to_string(),
            treatment_a: Tally::new(0, 0),
            treatment_b: Tally::new(1, 2),
        }];
        assert!(simpson_analysis(&empty).is_err());
        let overfull = vec![Stratum {
            label: "Overfull".to_string(),
            treatment_a: Tally::new(3, 2),
            treatment_b: Tally::new(1, 2),
        }];
        assert!(simpson_analysis(&overfull).is_err());
    }
}
