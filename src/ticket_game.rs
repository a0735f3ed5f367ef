//! # Ticket fill game
//!
//! Monocarp and Bicarp alternately replace a `?` of an even-length ticket
//! with a digit, Monocarp first. Bicarp wins if the two halves end up with
//! equal digit sums. Under optimal play every `?` Monocarp fills on one side
//! is mirrored by Bicarp on the other, so each unmatched pair of `?` on the
//! right is worth exactly 9 to the right half. The winner is decided by
//! comparing the known-digit deficit against that value.

use proconio::input;
use proconio::marker::Bytes;
use proconio::source::once::OnceSource;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Monocarp,
    Bicarp,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Monocarp => write!(f, "Monocarp"),
            Winner::Bicarp => write!(f, "Bicarp"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Input {
    pub ticket: Vec<u8>,
}

pub fn parse(text: &str) -> Input {
    let mut src = OnceSource::from(text);
    input! { from &mut src,
        n: usize,
        ticket: Bytes,
    }
    debug_assert_eq!(ticket.len(), n);
    Input { ticket }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HalfSummary {
    pub sum: i32,
    pub unknown: i32,
}

impl HalfSummary {
    pub fn scan(half: &[u8]) -> Self {
        let mut summary = Self::default();
        for &c in half {
            if c == b'?' {
                summary.unknown += 1;
            } else {
                summary.sum += (c - b'0') as i32;
            }
        }
        summary
    }
}

pub fn solve(input: &Input) -> Winner {
    let (left, right) = input.ticket.split_at(input.ticket.len() / 2);
    let left = HalfSummary::scan(left);
    let right = HalfSummary::scan(right);
    let diff = left.sum - right.sum;
    let unknown_diff = right.unknown - left.unknown;
    if diff == unknown_diff * 9 / 2 {
        Winner::Bicarp
    } else {
        Winner::Monocarp
    }
}

/// Reference: plays the game out with memoized minimax.
///
/// Only the counts of remaining `?` per half and the running difference of
/// the sums matter, so those form the state.
pub fn brute(input: &Input) -> Winner {
    let (left, right) = input.ticket.split_at(input.ticket.len() / 2);
    let left = HalfSummary::scan(left);
    let right = HalfSummary::scan(right);
    let mut memo = HashMap::new();
    if bicarp_wins(
        left.unknown,
        right.unknown,
        left.sum - right.sum,
        true,
        &mut memo,
    ) {
        Winner::Bicarp
    } else {
        Winner::Monocarp
    }
}

fn bicarp_wins(
    ql: i32,
    qr: i32,
    diff: i32,
    monocarp_to_move: bool,
    memo: &mut HashMap<(i32, i32, i32, bool), bool>,
) -> bool {
    if ql == 0 && qr == 0 {
        return diff == 0;
    }
    let key = (ql, qr, diff, monocarp_to_move);
    if let Some(&won) = memo.get(&key) {
        return won;
    }
    let mut outcomes = vec![];
    for d in 0..=9 {
        if ql > 0 {
            outcomes.push(bicarp_wins(ql - 1, qr, diff + d, !monocarp_to_move, memo));
        }
        if qr > 0 {
            outcomes.push(bicarp_wins(ql, qr - 1, diff - d, !monocarp_to_move, memo));
        }
    }
    let won = if monocarp_to_move {
        outcomes.iter().all(|&w| w)
    } else {
        outcomes.iter().any(|&w| w)
    };
    memo.insert(key, won);
    won
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casegen::random;

    #[test]
    fn fully_known_tickets() {
        assert_eq!(solve(&parse("2\n11\n")), Winner::Bicarp);
        assert_eq!(solve(&parse("4\n0523\n")), Winner::Bicarp);
        assert_eq!(solve(&parse("4\n1234\n")), Winner::Monocarp);
    }

    #[test]
    fn single_unknown_never_balances() {
        assert_eq!(solve(&parse("2\n1?\n")), Winner::Monocarp);
        assert_eq!(solve(&parse("2\n?1\n")), Winner::Monocarp);
    }

    #[test]
    fn pairs_of_unknowns() {
        assert_eq!(solve(&parse("2\n??\n")), Winner::Bicarp);
        // Two unknowns on the right must make up exactly 9.
        assert_eq!(solve(&parse("4\n90??\n")), Winner::Bicarp);
        assert_eq!(solve(&parse("4\n80??\n")), Winner::Monocarp);
        assert_eq!(solve(&parse("8\n?054??0?\n")), Winner::Bicarp);
        assert_eq!(solve(&parse("6\n???00?\n")), Winner::Monocarp);
    }

    #[test]
    fn summary_counts_digits_and_unknowns() {
        let s = HalfSummary::scan(b"9?0?7");
        assert_eq!(s, HalfSummary { sum: 16, unknown: 2 });
    }

    #[test]
    fn closed_form_matches_game() {
        for seed in 0..300 {
            let text = random::ticket_game(Some(seed));
            let input = parse(&text);
            assert_eq!(solve(&input), brute(&input), "seed {}\n{}", seed, text);
        }
    }
}
