use anyhow::{Result, bail};
use clap::Parser;
use judgebox::judge::{self, CaseFile, External, InProcess, Runner};

/// Judges every case of a JSON case file.
#[derive(Parser, Debug)]
struct Cli {
    /// Case file: {"problem": ..., "cases": [{"input": ..., "expected": ...}]}
    #[arg(short = 'c', long = "cases")]
    cases: String,
    /// Judge this shell command instead of the built-in solution
    #[arg(long = "cmd")]
    cmd: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let file = CaseFile::load(&cli.cases)?;
    let mut runner: Box<dyn Runner> = match &cli.cmd {
        Some(cmd) => Box::new(External::new(cmd)),
        None => Box::new(InProcess::new(&file.problem)?),
    };
    eprintln!("judging {} ({} cases)", runner.name(), file.cases.len());
    let verdicts = judge::judge_cases(runner.as_mut(), &file.cases)?;
    let failed = verdicts.iter().filter(|v| !v.is_accepted()).count();
    if failed > 0 {
        bail!("{} of {} cases failed", failed, verdicts.len());
    }
    Ok(())
}
