use anyhow::Result;
use clap::Parser;
use judgebox::problems;

#[derive(Parser)]
struct Cli {
    #[clap(long, short = 'p')]
    problem: String,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// Also write the expected output of this crate's solution to this file
    #[clap(long, short = 'e')]
    expected: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let problem = problems::find_problem(&args.problem)?;
    let input = (problem.generate)(args.seed);
    if let Some(path) = &args.expected {
        std::fs::write(path, format!("{}\n", (problem.solve)(&input)))?;
    }
    print!("{}", input);
    Ok(())
}
