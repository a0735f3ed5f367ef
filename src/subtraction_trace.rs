//! # Bounded subtraction with a call trace
//!
//! `fun(n)` returns a move `i` in `1..=5` that leaves the opponent in a
//! position whose value is negative, `-1` if there is none, and `n` itself
//! once `n <= 5`. Every call and return is written out, indented by depth.

use proconio::input;
use proconio::source::once::OnceSource;
use std::io::{self, Write};

const NUM: i64 = 5;
const INDENT: &str = "| ";

pub fn parse(text: &str) -> i64 {
    let mut src = OnceSource::from(text);
    input! { from &mut src, n: i64 }
    n
}

fn indent<W: Write>(out: &mut W, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        write!(out, "{}", INDENT)?;
    }
    Ok(())
}

pub fn fun<W: Write>(n: i64, depth: usize, out: &mut W) -> io::Result<i64> {
    indent(out, depth)?;
    writeln!(out, "fun({})", n)?;
    if n <= NUM {
        indent(out, depth)?;
        writeln!(out, "returning {}", n)?;
        return Ok(n);
    }
    for i in 1..=NUM {
        indent(out, depth)?;
        writeln!(out, "i={}", i)?;
        if fun(n - i, depth + 1, out)? < 0 {
            indent(out, depth)?;
            writeln!(out, "returning {}", i)?;
            return Ok(i);
        }
    }
    indent(out, depth)?;
    writeln!(out, "returning {}", -1)?;
    Ok(-1)
}

/// Writes the trace of `fun(n)` followed by its value.
pub fn run<W: Write>(n: i64, out: &mut W) -> io::Result<()> {
    let value = fun(n, 0, out)?;
    writeln!(out, "{}", value)
}

/// Value of `fun(n)` without the trace, bottom-up.
pub fn outcome(n: i64) -> i64 {
    if n <= NUM {
        return n;
    }
    let n = n as usize;
    let mut value = vec![0i64; n + 1];
    for m in 0..=n {
        let v = if m as i64 <= NUM {
            m as i64
        } else {
            (1..=NUM as usize)
                .find(|&i| value[m - i] < 0)
                .map_or(-1, |i| i as i64)
        };
        value[m] = v;
    }
    value[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(n: i64) -> String {
        let mut buf = vec![];
        run(n, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn base_case_returns_immediately() {
        assert_eq!(trace(3), "fun(3)\nreturning 3\n3\n");
        assert_eq!(trace(-2), "fun(-2)\nreturning -2\n-2\n");
    }

    #[test]
    fn losing_position_tries_every_move() {
        let expected = "\
fun(6)
i=1
| fun(5)
| returning 5
i=2
| fun(4)
| returning 4
i=3
| fun(3)
| returning 3
i=4
| fun(2)
| returning 2
i=5
| fun(1)
| returning 1
returning -1
-1
";
        assert_eq!(trace(6), expected);
    }

    #[test]
    fn winning_position_stops_at_first_move() {
        let out = trace(7);
        assert!(out.starts_with("fun(7)\ni=1\n| fun(6)\n| i=1\n| | fun(5)\n"));
        assert!(out.ends_with("| returning -1\nreturning 1\n1\n"));
        assert!(!out.contains("\ni=2\n"));
    }

    #[test]
    fn outcome_matches_traced_value() {
        for n in -3..=24 {
            let value = fun(n, 0, &mut io::sink()).unwrap();
            assert_eq!(outcome(n), value, "n = {}", n);
        }
    }

    #[test]
    fn multiples_of_six_lose() {
        for n in (6..=60).step_by(6) {
            assert_eq!(outcome(n), -1);
            assert_eq!(outcome(n + 2), 2);
        }
    }
}
