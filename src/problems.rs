use crate::casegen::random;
use crate::{cooldown_schedule, interval_bonus, rotating_sum, subtraction_trace, ticket_game};
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub problem_name: &'static str,
    /// Where the problem was set.
    pub source: &'static str,
    pub title: &'static str,
    /// Parses an input and returns the answer text, without a trailing newline.
    pub solve: fn(&str) -> String,
    pub generate: fn(Option<u64>) -> String,
}

#[derive(Debug, Error)]
#[error("Unknown problem: {0}")]
pub struct UnknownProblem(pub String);

fn solve_rotating_sum(text: &str) -> String {
    rotating_sum::solve(&rotating_sum::parse(text))
        .iter()
        .join("\n")
}

fn solve_ticket_game(text: &str) -> String {
    ticket_game::solve(&ticket_game::parse(text)).to_string()
}

fn solve_cooldown_schedule(text: &str) -> String {
    cooldown_schedule::solve(&cooldown_schedule::parse(text)).to_string()
}

fn solve_interval_bonus(text: &str) -> String {
    interval_bonus::solve(&interval_bonus::parse(text))
        .iter()
        .join("\n")
}

fn solve_subtraction_trace(text: &str) -> String {
    let mut buf = vec![];
    // Writing into a Vec cannot fail.
    let _ = subtraction_trace::run(subtraction_trace::parse(text), &mut buf);
    String::from_utf8_lossy(&buf).trim_end().to_string()
}

const PROBLEMS_DATA: &[Problem] = &[
    Problem {
        problem_name: "abc425_c",
        source: "AtCoder ABC425 C",
        title: "Rotate and Sum Query",
        solve: solve_rotating_sum,
        generate: random::rotating_sum,
    },
    Problem {
        problem_name: "cf102348_d",
        source: "Codeforces Gym 102348 D",
        title: "Ticket Game",
        solve: solve_ticket_game,
        generate: random::ticket_game,
    },
    Problem {
        problem_name: "cf102348_e",
        source: "Codeforces Gym 102348 E",
        title: "Cooldown Schedule",
        solve: solve_cooldown_schedule,
        generate: random::cooldown_schedule,
    },
    Problem {
        problem_name: "cf2169_c",
        source: "Codeforces 2169 C",
        title: "Interval Bonus",
        solve: solve_interval_bonus,
        generate: random::interval_bonus,
    },
    Problem {
        problem_name: "xcp",
        source: "coursework",
        title: "Bounded Subtraction Trace",
        solve: solve_subtraction_trace,
        generate: random::subtraction_trace,
    },
];

pub fn all_problems() -> &'static [Problem] {
    PROBLEMS_DATA
}

// Build a name -> problem map once for O(1) lookup.
static PROBLEM_MAP: Lazy<HashMap<&'static str, &'static Problem>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for p in PROBLEMS_DATA.iter() {
        m.insert(p.problem_name, p);
    }
    m
});

pub fn get_problem(name: &str) -> Option<&'static Problem> {
    PROBLEM_MAP.get(name).copied()
}

pub fn find_problem(name: &str) -> Result<&'static Problem, UnknownProblem> {
    get_problem(name).ok_or_else(|| UnknownProblem(name.to_string()))
}

/// Solves `input` as problem `name` in-process.
pub fn run(name: &str, input: &str) -> Result<String, UnknownProblem> {
    let problem = find_problem(name)?;
    Ok((problem.solve)(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_problems_contains_expected_entries() {
        let all = all_problems();
        assert_eq!(all.len(), 5);
        let names: Vec<&str> = all.iter().map(|p| p.problem_name).collect();
        assert_eq!(
            names,
            vec!["abc425_c", "cf102348_d", "cf102348_e", "cf2169_c", "xcp"]
        );
    }

    #[test]
    fn get_problem_returns_expected() {
        let p = get_problem("cf102348_d").expect("cf102348_d should exist");
        assert_eq!(p.title, "Ticket Game");
        assert!(get_problem("unknown").is_none());
        assert!(run("unknown", "").is_err());
    }

    #[test]
    fn run_formats_answers() {
        assert_eq!(
            run("abc425_c", "5 4\n1 2 3 4 5\n2 1 5\n1 2\n2 1 5\n2 1 1\n").unwrap(),
            "15\n15\n3"
        );
        assert_eq!(run("cf102348_d", "2\n1?\n").unwrap(), "Monocarp");
        assert_eq!(run("cf102348_e", "3 1 1\n3\n").unwrap(), "-1");
        assert_eq!(run("cf2169_c", "2\n1\n5\n3\n0 0 0\n").unwrap(), "5\n12");
        assert_eq!(run("xcp", "3\n").unwrap(), "fun(3)\nreturning 3\n3");
    }

    #[test]
    fn generated_inputs_are_solvable() {
        for p in all_problems() {
            for seed in 0..10 {
                let input = (p.generate)(Some(seed));
                assert!(!(p.solve)(&input).is_empty(), "{} seed {}", p.problem_name, seed);
            }
        }
    }
}
