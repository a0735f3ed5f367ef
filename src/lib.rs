// # judgebox: contest solutions and the tools around them
//
// Every problem lives in its own module with a `parse` function for the judge's
// input format, the fast `solve`, and a slow reference used by tests and the
// stress tool. The binaries under `src/bin` are thin wrappers that read stdin.

use anyhow::Context;

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// Reads the whole of stdin into a string.
///
/// Solutions parse from the returned text with `proconio::source::once::OnceSource`,
/// so the same parsing code serves stdin, files and in-memory test inputs.
pub fn read_stdin() -> anyhow::Result<String> {
    use std::io::Read;
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

/// Reads an input either from the given file or, if `None`, from stdin.
pub fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("No such input: {}", path))
        }
        None => read_stdin(),
    }
}


/// AtCoder ABC425 C: range sums over a rotating array.
pub mod rotating_sum;

/// Codeforces gym 102348 D: the ticket fill game.
pub mod ticket_game;

/// Codeforces gym 102348 E: greedy schedule with a run-length cap.
pub mod cooldown_schedule;

/// Codeforces 2169 C: best interval replacement with a quadratic bonus.
pub mod interval_bonus;

/// Recursive subtraction game with an indented call trace.
pub mod subtraction_trace;

/// Names and metadata of the solved problems, and in-process dispatch.
pub mod problems;

/// Local judging: case files, output comparison and `!log` reporting.
pub mod judge;

/// Tools for generating problem inputs.
pub mod casegen {
    /// Seeded random inputs for every problem.
    pub mod random;
}

/// Fast-versus-reference comparison over many generated inputs.
pub mod stress;
