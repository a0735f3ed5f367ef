use anyhow::{Context, Result};
use clap::Parser;
use judgebox::problems;

/// Solves any known problem in-process.
#[derive(Parser, Debug)]
struct Cli {
    /// Problem name, e.g. abc425_c
    #[arg(short = 'p', long = "problem", required_unless_present = "list")]
    problem: Option<String>,
    #[arg(
        short = 'i',
        long = "input",
        help = "Read input from file instead of stdin"
    )]
    input: Option<String>,
    /// List the known problems and exit
    #[arg(short = 'l', long = "list", default_value_t = false)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.list {
        for p in problems::all_problems() {
            println!("{}\t{}\t{}", p.problem_name, p.source, p.title);
        }
        return Ok(());
    }
    let name = cli.problem.context("--problem is required")?;
    let input = judgebox::read_input(cli.input.as_deref())?;
    println!("{}", problems::run(&name, &input)?);
    Ok(())
}
