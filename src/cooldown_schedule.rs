//! # Scheduling with a run-length cap
//!
//! `n` slots are filled with jobs `1..=m`, job `i` available `counts[i]`
//! times, and no job may occupy more than `k` consecutive slots. The greedy
//! always takes the job with the most remaining copies, skipping it only
//! when it has just hit the cap.

use itertools::Itertools;
use proconio::input;
use proconio::source::once::OnceSource;
use std::collections::BinaryHeap;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct Input {
    pub n: usize,
    pub k: usize,
    pub counts: Vec<usize>,
}

pub fn parse(text: &str) -> Input {
    let mut src = OnceSource::from(text);
    input! { from &mut src,
        n: usize,
        m: usize,
        k: usize,
        counts: [usize; m],
    }
    Input { n, k, counts }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Schedule {
    Infeasible,
    /// 1-indexed job ids, one per slot.
    Slots(Vec<usize>),
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Schedule::Infeasible => write!(f, "-1"),
            Schedule::Slots(slots) => write!(f, "{}", slots.iter().join(" ")),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("expected {expected} slots, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("slot {slot}: unknown job {job}")]
    UnknownJob { slot: usize, job: usize },
    #[error("job {job} used {used} times but only {available} available")]
    OverUsed {
        job: usize,
        used: usize,
        available: usize,
    },
    #[error("slot {slot}: job {job} runs longer than {limit}")]
    RunTooLong { slot: usize, job: usize, limit: usize },
}

/// The most frequent job needs `ceil(max / k)` runs, separated by at least
/// one other slot each.
pub fn precheck(n: usize, k: usize, counts: &[usize]) -> bool {
    let max_a = counts.iter().copied().max().unwrap_or(0);
    let blocks = max_a.div_ceil(k);
    n >= (max_a + blocks).saturating_sub(1)
}

pub fn solve(input: &Input) -> Schedule {
    let Input { n, k, ref counts } = *input;
    if !precheck(n, k, counts) {
        return Schedule::Infeasible;
    }

    let mut pq: BinaryHeap<(usize, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(i, &c)| (c, i + 1))
        .collect();

    let mut slots = Vec::with_capacity(n);
    let mut last_color = 0;
    let mut consec = 0;

    for _ in 0..n {
        let mut held = vec![];
        let mut chosen = None;
        while let Some((count, color)) = pq.pop() {
            if color == last_color && consec == k {
                held.push((count, color));
                continue;
            }
            chosen = Some((count, color));
            break;
        }
        let Some((count, color)) = chosen else {
            return Schedule::Infeasible;
        };
        pq.extend(held);

        if color == last_color {
            consec += 1;
        } else {
            last_color = color;
            consec = 1;
        }

        slots.push(color);
        if count > 1 {
            pq.push((count - 1, color));
        }
    }

    Schedule::Slots(slots)
}

pub fn verify(input: &Input, slots: &[usize]) -> Result<(), Violation> {
    if slots.len() != input.n {
        return Err(Violation::WrongLength {
            expected: input.n,
            actual: slots.len(),
        });
    }
    let m = input.counts.len();
    let mut used = vec![0; m + 1];
    let mut run = 0;
    for (slot, &job) in slots.iter().enumerate() {
        if job == 0 || job > m {
            return Err(Violation::UnknownJob { slot, job });
        }
        used[job] += 1;
        if used[job] > input.counts[job - 1] {
            return Err(Violation::OverUsed {
                job,
                used: used[job],
                available: input.counts[job - 1],
            });
        }
        run = if slot > 0 && slots[slot - 1] == job {
            run + 1
        } else {
            1
        };
        if run > input.k {
            return Err(Violation::RunTooLong {
                slot,
                job,
                limit: input.k,
            });
        }
    }
    Ok(())
}

/// Reference: tries every sequence of length `n`.
pub fn brute_feasible(input: &Input) -> bool {
    let mut remaining = input.counts.clone();
    extend(input.n, input.k, &mut remaining, 0, 0)
}

fn extend(left: usize, k: usize, remaining: &mut [usize], last: usize, run: usize) -> bool {
    if left == 0 {
        return true;
    }
    for job in 1..=remaining.len() {
        if remaining[job - 1] == 0 || (job == last && run == k) {
            continue;
        }
        remaining[job - 1] -= 1;
        let next_run = if job == last { run + 1 } else { 1 };
        let found = extend(left - 1, k, remaining, job, next_run);
        remaining[job - 1] += 1;
        if found {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casegen::random;

    #[test]
    fn single_slot() {
        assert_eq!(
            solve(&parse("1 1 1\n1\n")),
            Schedule::Slots(vec![1])
        );
    }

    #[test]
    fn precheck_rejects_long_run() {
        // max_a = 3, blocks = 3, so at least 5 slots are needed.
        assert!(!precheck(3, 1, &[3]));
        assert_eq!(solve(&parse("3 1 1\n3\n")), Schedule::Infeasible);
        assert_eq!(solve(&parse("3 1 1\n3\n")).to_string(), "-1");
    }

    #[test]
    fn interleaves_dominant_job() {
        let input = parse("7 2 2\n5 2\n");
        let schedule = solve(&input);
        assert_eq!(schedule, Schedule::Slots(vec![1, 1, 2, 1, 1, 2, 1]));
        assert_eq!(schedule.to_string(), "1 1 2 1 1 2 1");
    }

    #[test]
    fn ties_prefer_larger_id() {
        let input = parse("4 2 1\n2 2\n");
        assert_eq!(solve(&input), Schedule::Slots(vec![2, 1, 2, 1]));
    }

    #[test]
    fn heap_exhaustion_reports_infeasible() {
        // Passes the precheck but the only job cannot follow itself.
        let input = parse("2 1 1\n1\n");
        assert!(precheck(2, 1, &input.counts));
        assert_eq!(solve(&input), Schedule::Infeasible);
    }

    #[test]
    fn verify_reports_violations() {
        let input = parse("3 2 1\n2 1\n");
        assert_eq!(verify(&input, &[1, 2, 1]), Ok(()));
        assert_eq!(
            verify(&input, &[1, 1, 2]),
            Err(Violation::RunTooLong {
                slot: 1,
                job: 1,
                limit: 1
            })
        );
        assert_eq!(
            verify(&input, &[2, 1, 2]),
            Err(Violation::OverUsed {
                job: 2,
                used: 2,
                available: 1
            })
        );
        assert_eq!(
            verify(&input, &[1, 3, 1]),
            Err(Violation::UnknownJob { slot: 1, job: 3 })
        );
        assert_eq!(
            verify(&input, &[1, 2]),
            Err(Violation::WrongLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn greedy_is_sound() {
        for seed in 0..300 {
            let text = random::cooldown_schedule(Some(seed));
            let input = parse(&text);
            let feasible = brute_feasible(&input);
            match solve(&input) {
                Schedule::Slots(slots) => {
                    assert_eq!(verify(&input, &slots), Ok(()), "seed {}\n{}", seed, text);
                    assert!(feasible, "seed {}\n{}", seed, text);
                }
                Schedule::Infeasible => {}
            }
            if !precheck(input.n, input.k, &input.counts) {
                assert!(!feasible, "precheck rejected a feasible input\n{}", text);
            }
        }
    }
}
