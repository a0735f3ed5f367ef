//! # Stress testing
//!
//! Every problem has a slow reference next to its fast solution. Given a
//! range of seeds, inputs are generated, both sides are run, and the first
//! disagreement (lowest seed) is reported with its input.

use crate::cooldown_schedule::{self, Schedule, Violation};
use crate::problems::{self, UnknownProblem};
use crate::{interval_bonus, rotating_sum, subtraction_trace, ticket_game};
use indicatif::ProgressBar;
use itertools::Itertools;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Mismatch {
    #[error("fast answer {fast} differs from reference {reference}")]
    Answer { fast: String, reference: String },
    #[error("invalid schedule: {0}")]
    Schedule(#[from] Violation),
    #[error("schedule emitted although no valid schedule exists")]
    Unsound,
}

#[derive(Debug)]
pub struct Failure {
    pub seed: u64,
    pub input: String,
    pub mismatch: Mismatch,
}

fn same<T: PartialEq + std::fmt::Debug>(fast: T, reference: T) -> Result<(), Mismatch> {
    if fast == reference {
        Ok(())
    } else {
        Err(Mismatch::Answer {
            fast: format!("{:?}", fast),
            reference: format!("{:?}", reference),
        })
    }
}

/// Checks one input of problem `name` against its reference.
pub fn check(name: &str, input: &str) -> Result<Result<(), Mismatch>, UnknownProblem> {
    let problem = problems::find_problem(name)?;
    Ok(match problem.problem_name {
        "abc425_c" => {
            let input = rotating_sum::parse(input);
            same(rotating_sum::solve(&input), rotating_sum::brute(&input))
        }
        "cf102348_d" => {
            let input = ticket_game::parse(input);
            same(ticket_game::solve(&input), ticket_game::brute(&input))
        }
        "cf102348_e" => {
            let input = cooldown_schedule::parse(input);
            match cooldown_schedule::solve(&input) {
                Schedule::Infeasible => Ok(()),
                Schedule::Slots(slots) => cooldown_schedule::verify(&input, &slots)
                    .map_err(Mismatch::from)
                    .and_then(|()| {
                        if cooldown_schedule::brute_feasible(&input) {
                            Ok(())
                        } else {
                            Err(Mismatch::Unsound)
                        }
                    }),
            }
        }
        "cf2169_c" => {
            let cases = interval_bonus::parse(input);
            let reference = cases.iter().map(|a| interval_bonus::brute(a)).collect_vec();
            same(interval_bonus::solve(&cases), reference)
        }
        "xcp" => {
            let n = subtraction_trace::parse(input);
            // Writing into a sink cannot fail.
            let traced = subtraction_trace::fun(n, 0, &mut std::io::sink()).unwrap_or(i64::MIN);
            same(subtraction_trace::outcome(n), traced)
        }
        other => return Err(UnknownProblem(other.to_string())),
    })
}

/// Runs seeds `0..seeds` in parallel and returns the lowest failing seed, if any.
pub fn run(name: &str, seeds: u64, progress: bool) -> Result<Option<Failure>, UnknownProblem> {
    let problem = problems::find_problem(name)?;
    let bar = if progress {
        ProgressBar::new(seeds)
    } else {
        ProgressBar::hidden()
    };
    let failures: Vec<Failure> = (0..seeds)
        .into_par_iter()
        .filter_map(|seed| {
            let input = (problem.generate)(Some(seed));
            let result = check(problem.problem_name, &input);
            bar.inc(1);
            match result {
                Ok(Err(mismatch)) => Some(Failure {
                    seed,
                    input,
                    mismatch,
                }),
                _ => None,
            }
        })
        .collect();
    bar.finish_and_clear();
    Ok(failures.into_iter().min_by_key(|f| f.seed))
}

/// Stress input for `name` from an explicit seed, for reproducing a failure.
pub fn input_for(name: &str, seed: u64) -> Result<String, UnknownProblem> {
    Ok((problems::find_problem(name)?.generate)(Some(seed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casegen::random;

    #[test]
    fn every_problem_passes_a_short_run() {
        for p in problems::all_problems() {
            let failure = run(p.problem_name, 64, false).unwrap();
            assert!(failure.is_none(), "{}: {:?}", p.problem_name, failure);
        }
    }

    #[test]
    fn detects_wrong_answers() {
        assert_eq!(same(1, 1), Ok(()));
        assert!(matches!(same(1, 2), Err(Mismatch::Answer { .. })));
    }

    #[test]
    fn check_rejects_unknown_problem() {
        assert!(check("nope", "").is_err());
        assert!(run("nope", 1, false).is_err());
    }

    #[test]
    fn input_for_is_reproducible() {
        assert_eq!(
            input_for("cf2169_c", 11).unwrap(),
            random::interval_bonus(Some(11))
        );
    }
}
