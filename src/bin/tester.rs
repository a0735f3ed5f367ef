use anyhow::{Context, Result};
use clap::Parser;
use judgebox::judge::{self, External, Runner};

/// Tester tool for running a command with input/output redirection.
#[derive(Parser, Debug)]
struct Cli {
    /// The shell command to run (e.g., the solution binary)
    cmd: String,
    /// Path to the input file
    input: String,
    /// Path to the output file (will be created)
    output: String,
    /// Path to the expected output; when given, the output is judged
    #[arg(short = 'e', long = "expected")]
    expected: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input =
        std::fs::read_to_string(&cli.input).with_context(|| format!("No such input: {}", cli.input))?;
    let output = External::new(&cli.cmd).run(&input)?;
    std::fs::write(&cli.output, &output).with_context(|| format!("Cannot create {}", cli.output))?;
    if let Some(path) = &cli.expected {
        let expected =
            std::fs::read_to_string(path).with_context(|| format!("No such file: {}", path))?;
        let verdict = judge::compare(&expected, &output);
        eprintln!("!log status {}", verdict.status());
        if let judge::Verdict::WrongAnswer {
            index,
            expected,
            actual,
        } = verdict
        {
            eprintln!(
                "token {}: expected {}, actual {}",
                index,
                expected.as_deref().unwrap_or("<eof>"),
                actual.as_deref().unwrap_or("<eof>")
            );
        }
    }
    Ok(())
}
