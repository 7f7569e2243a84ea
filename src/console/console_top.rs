//! Interactive stdio front-end and command loop.
//!
//! Parses line-oriented commands, forwards them to the rule engine, and
//! prints the rendered board and outcomes. All game logic stays in the
//! library; this loop only formats and forwards.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::game_state::game_state::GameState;
use crate::game_state::kwazam_types::Coord;
use crate::utils::render_game_state::render_game_state;
use crate::utils::save_file::{load_game_from_file, save_game_to_file};

const HELP_TEXT: &str = "\
Commands:
  show                     render the current board
  moves <row> <col>        list legal destinations for a square
  move <r1> <c1> <r2> <c2> submit a move
  save [file]              save the game (default: timestamped .txt)
  load <file>              load a saved game
  restart                  start over from the initial layout
  help                     show this text
  quit                     leave";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = ConsoleSession::new();

    writeln!(stdout, "{}", render_game_state(&session.game_state))?;
    writeln!(stdout, "{HELP_TEXT}")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(line.trim(), &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct ConsoleSession {
    game_state: GameState,
}

impl ConsoleSession {
    fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
        }
    }

    /// Handles one command line. Returns `Ok(true)` when the loop should
    /// exit.
    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            return Ok(false);
        };

        match command {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "show" => writeln!(out, "{}", render_game_state(&self.game_state))?,
            "restart" => {
                self.game_state.restart();
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "moves" => self.handle_moves(args, out)?,
            "move" => self.handle_move(args, out)?,
            "save" => self.handle_save(args, out)?,
            "load" => self.handle_load(args, out)?,
            _ => writeln!(out, "Unknown command '{command}'. Try 'help'.")?,
        }

        Ok(false)
    }

    fn handle_moves(&self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let Some(from) = parse_coord(args) else {
            writeln!(out, "Usage: moves <row> <col>")?;
            return Ok(());
        };

        let destinations = self.game_state.legal_destinations(from);
        if destinations.is_empty() {
            writeln!(out, "No legal destinations from ({}, {}).", from.row, from.col)?;
        } else {
            let listed: Vec<String> = destinations
                .iter()
                .map(|coord| format!("({}, {})", coord.row, coord.col))
                .collect();
            writeln!(out, "Legal destinations: {}", listed.join(" "))?;
        }
        Ok(())
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let (Some(from), Some(to)) = (parse_coord(args), parse_coord(args.get(2..).unwrap_or(&[])))
        else {
            writeln!(out, "Usage: move <from-row> <from-col> <to-row> <to-col>")?;
            return Ok(());
        };

        if self.game_state.submit_move(from, to) {
            writeln!(out, "{}", render_game_state(&self.game_state))?;
            if let Some(winner) = self.game_state.winner() {
                writeln!(out, "Team {winner:?} wins by capturing the Sau!")?;
            }
        } else {
            writeln!(
                out,
                "Illegal move ({}, {}) -> ({}, {}).",
                from.row, from.col, to.row, to.col
            )?;
        }
        Ok(())
    }

    fn handle_save(&self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let mut file_name = match args.first() {
            Some(name) => (*name).to_owned(),
            None => format!("kwazam_{}.txt", Local::now().format("%Y%m%d_%H%M%S")),
        };
        if !file_name.to_lowercase().ends_with(".txt") {
            file_name.push_str(".txt");
        }

        match save_game_to_file(&self.game_state, &file_name) {
            Ok(()) => writeln!(out, "Game saved to {file_name}.")?,
            Err(err) => writeln!(out, "Save failed: {err:?}")?,
        }
        Ok(())
    }

    fn handle_load(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let Some(file_name) = args.first() else {
            writeln!(out, "Usage: load <file>")?;
            return Ok(());
        };

        // The current game is replaced only on a fully successful decode.
        match load_game_from_file(file_name) {
            Ok(loaded) => {
                self.game_state = loaded;
                writeln!(out, "Game loaded from {file_name}.")?;
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            Err(err) => writeln!(out, "Load failed: {err:?}")?,
        }
        Ok(())
    }
}

fn parse_coord(args: &[&str]) -> Option<Coord> {
    let row = args.first()?.parse::<usize>().ok()?;
    let col = args.get(1)?.parse::<usize>().ok()?;
    Some(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::ConsoleSession;

    fn run(session: &mut ConsoleSession, line: &str) -> String {
        let mut out = Vec::new();
        session
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("output is utf-8")
    }

    #[test]
    fn move_command_round_trips_through_the_engine() {
        let mut session = ConsoleSession::new();

        let accepted = run(&mut session, "move 1 0 2 0");
        assert!(accepted.contains("Turn 2"));
        assert_eq!(session.game_state.turn_count(), 2);

        let rejected = run(&mut session, "move 1 0 1 1");
        assert!(rejected.contains("Illegal move"));
    }

    #[test]
    fn moves_command_lists_destinations() {
        let mut session = ConsoleSession::new();
        let listing = run(&mut session, "moves 1 0");
        assert!(listing.contains("(2, 0)"));

        let empty = run(&mut session, "moves 4 4");
        assert!(empty.contains("No legal destinations"));
    }

    #[test]
    fn unknown_and_malformed_commands_do_not_mutate_state() {
        let mut session = ConsoleSession::new();
        let before = session.game_state.clone();

        run(&mut session, "teleport 0 0");
        run(&mut session, "move 1 0");
        run(&mut session, "moves x y");

        assert_eq!(session.game_state, before);
    }
}
