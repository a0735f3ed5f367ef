use anyhow::Result;
use judgebox::cooldown_schedule::{self, Schedule};

fn main() -> Result<()> {
    let input = cooldown_schedule::parse(&judgebox::read_stdin()?);
    let schedule = cooldown_schedule::solve(&input);
    if schedule == Schedule::Infeasible {
        eprintln!("!log schedule infeasible");
    }
    println!("{}", schedule);
    Ok(())
}
