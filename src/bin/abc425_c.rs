use std::io::{BufWriter, Write as _};

use anyhow::Result;
use judgebox::rotating_sum;

fn main() -> Result<()> {
    let input = rotating_sum::parse(&judgebox::read_stdin()?);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for ans in rotating_sum::solve(&input) {
        writeln!(out, "{}", ans)?;
    }
    Ok(())
}
