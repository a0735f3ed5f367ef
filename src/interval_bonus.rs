//! # Interval replacement with a quadratic bonus
//!
//! At most once, every element of some interval `[l, r]` (1-indexed) may be
//! replaced with `l + r`. Replacing `[l, r]` changes the sum by
//!
//! ```text
//! (r - l + 1)(l + r) - (prefix[r] - prefix[l - 1])
//!   = (r^2 + r - prefix[r]) + (-l^2 + l + prefix[l - 1])
//! ```
//!
//! so for each right end only the best left term seen so far matters.

use crate::SetMinMax;
use proconio::input;
use proconio::source::once::OnceSource;

/// Parses all test cases.
pub fn parse(text: &str) -> Vec<Vec<i64>> {
    let mut src = OnceSource::from(text);
    input! { from &mut src, t: usize }
    let mut cases = Vec::with_capacity(t);
    for _ in 0..t {
        input! { from &mut src,
            n: usize,
            a: [i64; n],
        }
        cases.push(a);
    }
    cases
}

pub fn solve(cases: &[Vec<i64>]) -> Vec<i64> {
    cases.iter().map(|a| best_sum(a)).collect()
}

/// Largest reachable sum of `a` (stored 0-indexed, positions count from 1).
pub fn best_sum(a: &[i64]) -> i64 {
    let n = a.len();
    let mut prefix = vec![0i64; n + 1];
    for i in 1..=n {
        prefix[i] = prefix[i - 1] + a[i - 1];
    }
    let total_sum = prefix[n];

    let mut max_f = i64::MIN;
    let mut max_delta = 0i64;
    for r in 1..=n {
        let x = r as i64;
        max_f.setmax(-x * x + x + prefix[r - 1]);
        max_delta.setmax(max_f + x * x + x - prefix[r]);
    }
    total_sum + max_delta
}

/// Reference: tries every interval.
pub fn brute(a: &[i64]) -> i64 {
    let n = a.len();
    let total: i64 = a.iter().sum();
    let mut best = total;
    for l in 1..=n {
        for r in l..=n {
            let replaced: i64 = a[l - 1..r].iter().sum();
            let value = (l + r) as i64;
            best.setmax(total - replaced + value * (r - l + 1) as i64);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casegen::random;

    #[test]
    fn single_element_keeps_large_value() {
        // f[1] = 0, delta[1] = 0 + 1 + 1 - 5 < 0
        assert_eq!(best_sum(&[5]), 5);
    }

    #[test]
    fn small_values_are_replaced() {
        // Replacing the whole array with 1 + 3 gives 12.
        assert_eq!(best_sum(&[0, 0, 0]), 12);
        assert_eq!(best_sum(&[1]), 2);
    }

    #[test]
    fn multiple_cases_print_in_order() {
        let cases = parse("3\n1\n5\n3\n0 0 0\n2\n100 0\n");
        assert_eq!(solve(&cases), vec![5, 12, 104]);
    }

    #[test]
    fn matches_quadratic_reference() {
        for seed in 0..300 {
            let text = random::interval_bonus(Some(seed));
            for a in parse(&text) {
                assert_eq!(best_sum(&a), brute(&a), "seed {}: {:?}", seed, a);
            }
        }
    }
}
