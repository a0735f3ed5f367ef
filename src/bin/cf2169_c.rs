use std::io::{BufWriter, Write as _};

use anyhow::Result;
use judgebox::interval_bonus;

fn main() -> Result<()> {
    let cases = interval_bonus::parse(&judgebox::read_stdin()?);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for ans in interval_bonus::solve(&cases) {
        writeln!(out, "{}", ans)?;
    }
    Ok(())
}
