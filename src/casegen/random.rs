//! # Random Input Generation
//!
//! Each generator returns a complete input in the judge's text format. Sizes
//! are kept small so that the slow reference solutions finish quickly; the
//! inputs are meant for stress testing, not for timing.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Array of up to 8 values and a mix of rotate and sum queries.
pub fn rotating_sum(seed: Option<u64>) -> String {
    let mut rng = rng_from(seed);
    let n = rng.random_range(1..=8usize);
    let q = rng.random_range(1..=10usize);
    let values = (0..n)
        .map(|_| rng.random_range(-1_000_000_000i64..=1_000_000_000))
        .collect_vec();
    let mut out = format!("{} {}\n{}\n", n, q, values.iter().join(" "));
    for i in 0..q {
        // The last query always asks for a sum.
        if i + 1 < q && rng.random_bool(0.4) {
            let c: u64 = rng.random_range(1..=1_000_000_000);
            out += &format!("1 {}\n", c);
        } else {
            let l = rng.random_range(1..=n);
            let r = rng.random_range(l..=n);
            out += &format!("2 {} {}\n", l, r);
        }
    }
    out
}

/// Ticket of length at most 8 with an even number of `?`.
pub fn ticket_game(seed: Option<u64>) -> String {
    let mut rng = rng_from(seed);
    let n = 2 * rng.random_range(1..=4usize);
    let mut ticket: Vec<u8> = (0..n)
        .map(|_| {
            if rng.random_bool(0.4) {
                b'?'
            } else {
                b'0' + rng.random_range(0..10u8)
            }
        })
        .collect();
    if ticket.iter().filter(|&&c| c == b'?').count() % 2 == 1 {
        let i = rng.random_range(0..n);
        ticket[i] = if ticket[i] == b'?' {
            b'0' + rng.random_range(0..10u8)
        } else {
            b'?'
        };
    }
    format!("{}\n{}\n", n, String::from_utf8_lossy(&ticket))
}

/// Up to 3 jobs whose counts add up to the number of slots (at most 9).
pub fn cooldown_schedule(seed: Option<u64>) -> String {
    let mut rng = rng_from(seed);
    let m = rng.random_range(1..=3usize);
    let k = rng.random_range(1..=3usize);
    let counts = (0..m).map(|_| rng.random_range(1..=3usize)).collect_vec();
    let n: usize = counts.iter().sum();
    format!("{} {} {}\n{}\n", n, m, k, counts.iter().join(" "))
}

/// Up to 3 test cases of up to 10 values; small values make replacing worthwhile.
pub fn interval_bonus(seed: Option<u64>) -> String {
    let mut rng = rng_from(seed);
    let t = rng.random_range(1..=3);
    let mut out = format!("{}\n", t);
    for _ in 0..t {
        let n = rng.random_range(1..=10usize);
        let hi: i64 = if rng.random_bool(0.5) { 20 } else { 1_000_000_000 };
        let a = (0..n).map(|_| rng.random_range(0..=hi)).collect_vec();
        out += &format!("{}\n{}\n", n, a.iter().join(" "));
    }
    out
}

pub fn subtraction_trace(seed: Option<u64>) -> String {
    let mut rng = rng_from(seed);
    format!("{}\n", rng.random_range(0..=15))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_input() {
        assert_eq!(rotating_sum(Some(7)), rotating_sum(Some(7)));
        assert_eq!(interval_bonus(Some(7)), interval_bonus(Some(7)));
    }

    #[test]
    fn tickets_have_even_unknowns() {
        for seed in 0..100 {
            let input = crate::ticket_game::parse(&ticket_game(Some(seed)));
            assert_eq!(input.ticket.len() % 2, 0);
            assert_eq!(input.ticket.iter().filter(|&&c| c == b'?').count() % 2, 0);
        }
    }

    #[test]
    fn schedule_counts_fill_every_slot() {
        for seed in 0..100 {
            let input = crate::cooldown_schedule::parse(&cooldown_schedule(Some(seed)));
            assert_eq!(input.counts.iter().sum::<usize>(), input.n);
            assert!(input.counts.iter().all(|&c| c > 0));
        }
    }
}
