use std::io::BufWriter;

use anyhow::Result;
use judgebox::subtraction_trace;

fn main() -> Result<()> {
    let n = subtraction_trace::parse(&judgebox::read_stdin()?);
    let stdout = std::io::stdout();
    subtraction_trace::run(n, &mut BufWriter::new(stdout.lock()))?;
    Ok(())
}
