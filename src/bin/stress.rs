use anyhow::{Result, bail};
use clap::Parser;
use judgebox::stress;

/// Compares fast solutions against their references on generated inputs.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short = 'p', long = "problem")]
    problem: String,
    /// Number of seeds to try, starting from 0
    #[arg(short = 'n', long = "seeds", default_value_t = 1000)]
    seeds: u64,
    /// Worker threads (defaults to the number of CPUs)
    #[arg(short = 't', long = "threads")]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }
    match stress::run(&cli.problem, cli.seeds, true)? {
        None => {
            eprintln!("!log status AC");
            eprintln!("!log seeds {}", cli.seeds);
            Ok(())
        }
        Some(failure) => {
            eprintln!("!log status WA");
            eprintln!("!log seed {}", failure.seed);
            eprint!("{}", failure.input);
            bail!("seed {}: {}", failure.seed, failure.mismatch)
        }
    }
}
