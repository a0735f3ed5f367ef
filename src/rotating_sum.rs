//! # Range sums over a rotating array
//!
//! The array is never moved. A single offset records how far it has been
//! rotated to the left, and every range query is translated back onto the
//! original positions, where a prefix-sum table answers it in O(1). A range
//! that crosses the end of the original array after translation is split
//! into a suffix and a prefix.

use proconio::input;
use proconio::source::once::OnceSource;
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// `1 c`: move the first `c` elements to the back.
    Rotate(u64),
    /// `2 l r`: sum of positions `l..=r` (1-indexed) of the current array.
    Sum(usize, usize),
}

#[derive(Clone, Debug)]
pub struct Input {
    pub values: Vec<i64>,
    pub queries: Vec<Query>,
}

pub fn parse(text: &str) -> Input {
    let mut src = OnceSource::from(text);
    input! { from &mut src,
        n: usize,
        q: usize,
        values: [i64; n],
    }
    let mut queries = Vec::with_capacity(q);
    for _ in 0..q {
        input! { from &mut src, kind: u8 }
        if kind == 1 {
            input! { from &mut src, c: u64 }
            queries.push(Query::Rotate(c));
        } else {
            input! { from &mut src, l: usize, r: usize }
            queries.push(Query::Sum(l, r));
        }
    }
    Input { values, queries }
}

/// `pfx[i]` is the sum of the first `i` values.
#[derive(Clone, Debug)]
pub struct PrefixSums {
    pfx: Vec<i64>,
}

impl PrefixSums {
    pub fn new(values: &[i64]) -> Self {
        let mut pfx = vec![0; values.len() + 1];
        for (i, &v) in values.iter().enumerate() {
            pfx[i + 1] = pfx[i] + v;
        }
        Self { pfx }
    }

    /// Sum over the half-open range `l..r`.
    pub fn range(&self, l: usize, r: usize) -> i64 {
        self.pfx[r] - self.pfx[l]
    }

    pub fn total(&self) -> i64 {
        self.pfx[self.pfx.len() - 1]
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.pfx
    }
}

pub struct RotatingArray {
    pfx: PrefixSums,
    n: usize,
    shift: usize,
}

impl RotatingArray {
    pub fn new(values: &[i64]) -> Self {
        Self {
            pfx: PrefixSums::new(values),
            n: values.len(),
            shift: 0,
        }
    }

    pub fn rotate(&mut self, c: u64) {
        let n = self.n as u64;
        self.shift = ((self.shift as u64 + c % n) % n) as usize;
    }

    /// Sum of positions `l..=r` (1-indexed, `l <= r`) of the rotated array.
    pub fn sum(&self, l: usize, r: usize) -> i64 {
        let l = (l - 1 + self.shift) % self.n;
        let r = (r - 1 + self.shift) % self.n;
        if l > r {
            self.pfx.total() - self.pfx.range(0, l) + self.pfx.range(0, r + 1)
        } else {
            self.pfx.range(l, r + 1)
        }
    }
}

/// Answers of all sum queries, in order.
pub fn solve(input: &Input) -> Vec<i64> {
    let mut array = RotatingArray::new(&input.values);
    let mut answers = vec![];
    for query in &input.queries {
        match *query {
            Query::Rotate(c) => array.rotate(c),
            Query::Sum(l, r) => answers.push(array.sum(l, r)),
        }
    }
    answers
}

/// Reference: rotates an actual deque and sums the requested slice.
pub fn brute(input: &Input) -> Vec<i64> {
    let mut deque: VecDeque<i64> = input.values.iter().copied().collect();
    let n = deque.len() as u64;
    let mut answers = vec![];
    for query in &input.queries {
        match *query {
            Query::Rotate(c) => deque.rotate_left((c % n) as usize),
            Query::Sum(l, r) => answers.push(deque.range(l - 1..r).sum()),
        }
    }
    answers
}
