//! Blocking stdin prompts. Every read loops until it gets a legal
//! answer; EOF means the player closed the pipe and the caller should
//! wind the session down quietly.

use std::io::{self, BufRead, Write};

/// Maps one raw line onto a 0-based pick, or `None` when it is not a
/// number between 1 and `max`.
fn parse_pick(line: &str, max: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Reads a 1-based menu pick and returns it 0-based. Re-prompts with a
/// hint until the answer is legal. `Ok(None)` is EOF.
pub fn read_pick(max: usize) -> io::Result<Option<usize>> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_pick(&line, max) {
            Some(pick) => return Ok(Some(pick)),
            None => println!("Pick a number from 1 to {max}."),
        }
    }
}
