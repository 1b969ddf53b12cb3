//
// This file is part of tictac.
//
// tictac is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tictac is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tictac. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2026 The tictac Developers
//

//! Console tic-tac-toe.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tictac::agent::MoveInput;
use tictac::util::JKiss32Rng;
use tictac::{new_game, Board, Difficulty, Error, Game, Mark, Mode, Result, Status};

/// Play tic-tac-toe against another person or the computer.
#[derive(Parser, Debug)]
#[command(name = "tictac", version, about, long_about = None)]
struct Cli {
    /// Who plays.  Asked interactively if not given.
    #[arg(long, value_enum, env = "TICTAC_MODE")]
    mode: Option<Mode>,

    /// Strength of the computer.  Asked interactively if the mode needs it.
    #[arg(long, value_enum, env = "TICTAC_DIFFICULTY")]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices, to replay a game.
    #[arg(long, env = "TICTAC_SEED")]
    seed: Option<u64>,
}

/// Reads moves as `row col` from a line-oriented reader.
struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W> where
    R: BufRead,
    W: Write {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")));
        }
        Ok(line.trim().to_string())
    }

    fn read_choice(&mut self, prompt: &str) -> Result<Option<u32>> {
        Ok(self.read_line(prompt)?.parse().ok())
    }
}

impl<R, W> MoveInput for Console<R, W> where
    R: BufRead,
    W: Write {
    fn request_move(&mut self, _board: &Board, mark: Mark) -> Result<usize> {
        loop {
            let line = self.read_line(&format!("{} to move (row col): ", mark))?;
            let coordinates = line.split_whitespace().map(str::parse::<usize>).collect::<Vec<_>>();

            match coordinates.as_slice() {
                [Ok(row), Ok(col)] if *row < 3 && *col < 3 => return Ok(row * 3 + col),
                _ => writeln!(self.writer, "Enter a row and a column, each 0, 1, or 2.")?,
            }
        }
    }

    fn reject(&mut self, error: &Error) -> Result<()> {
        writeln!(self.writer, "{}", error)?;
        Ok(())
    }
}

fn choose_mode<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Mode> {
    writeln!(console.writer, "Choose a mode:")?;
    writeln!(console.writer, "1. Human vs Human")?;
    writeln!(console.writer, "2. Human vs Machine")?;

    Ok(match console.read_choice("> ")? {
        Some(1) => Mode::HumanVsHuman,
        _ => Mode::HumanVsMachine,
    })
}

fn choose_difficulty<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Difficulty> {
    writeln!(console.writer, "Choose the machine's difficulty:")?;
    writeln!(console.writer, "1. Easy")?;
    writeln!(console.writer, "2. Medium")?;
    writeln!(console.writer, "3. Hard")?;

    Ok(match console.read_choice("> ")? {
        Some(2) => Difficulty::Medium,
        Some(3) => Difficulty::Hard,
        _ => Difficulty::Easy,
    })
}

fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console {
        reader: stdin.lock(),
        writer: io::stdout(),
    };

    let mode = match cli.mode {
        Some(mode) => mode,
        None => choose_mode(&mut console)?,
    };

    let difficulty = match (mode, cli.difficulty) {
        (Mode::HumanVsHuman, _) => None,
        (_, Some(difficulty)) => Some(difficulty),
        (_, None) => Some(choose_difficulty(&mut console)?),
    };

    let mut rng = match cli.seed {
        Some(seed) => JKiss32Rng::seed_from_u64(seed),
        None => JKiss32Rng::new(),
    };

    info!(?mode, ?difficulty, seed = ?cli.seed, "starting");

    let (first, second) = new_game(mode, difficulty);
    let mut game = Game::new(first, second);

    let status = loop {
        writeln!(console.writer, "{}", game.board())?;

        let agent = *game.next_agent();
        if !agent.is_human() {
            writeln!(console.writer, "{} is thinking...", agent)?;
        }

        let status = game.step(&mut rng, &mut console)?;
        if status.is_terminal() {
            break status;
        }
    };

    writeln!(console.writer, "{}", game.board())?;
    match status {
        Status::Win(mark) => writeln!(console.writer, "Player {} wins!", mark)?,
        Status::Draw => writeln!(console.writer, "Draw!")?,
        Status::Ongoing => (),
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        error!(%error, "game aborted");
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use tictac::error::IllegalReason;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console {
            reader: Cursor::new(input.as_bytes().to_vec()),
            writer: Vec::new(),
        }
    }

    fn output(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.writer).into_owned()
    }

    #[test]
    fn test_request_move_asks_until_in_range() {
        let mut console = console("3 0\nmiddle\n1\n1 2\n");
        assert_eq!(console.request_move(&Board::new(), Mark::X).unwrap(), 5);
        assert_eq!(output(&console).matches("Enter a row and a column").count(), 3);
    }

    #[test]
    fn test_request_move_on_closed_input() {
        match console("").request_move(&Board::new(), Mark::O) {
            Err(Error::Io(error)) => assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected closed input, got {:?}", other),
        }
    }

    #[test]
    fn test_reject_reports_the_error() {
        let mut console = console("");
        let error = Error::IllegalMove { index: 4, reason: IllegalReason::Occupied };
        console.reject(&error).unwrap();
        assert_eq!(output(&console), format!("{}\n", error));
    }

    #[test]
    fn test_menus() {
        assert_eq!(choose_mode(&mut console("1\n")).unwrap(), Mode::HumanVsHuman);
        assert_eq!(choose_mode(&mut console("x\n")).unwrap(), Mode::HumanVsMachine);
        assert_eq!(choose_difficulty(&mut console("3\n")).unwrap(), Difficulty::Hard);
        assert_eq!(choose_difficulty(&mut console("7\n")).unwrap(), Difficulty::Easy);
    }
}
