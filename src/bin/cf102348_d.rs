use anyhow::Result;
use judgebox::ticket_game;

fn main() -> Result<()> {
    let input = ticket_game::parse(&judgebox::read_stdin()?);
    println!("{}", ticket_game::solve(&input));
    Ok(())
}
