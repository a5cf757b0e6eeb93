//! Terminal front end: prints the board to stdout and reads moves from stdin.
//!
//! Commands:
//! - `<row> <col>`: place a stone (0-based, `,` also accepted as separator)
//! - `reset`: start a new game
//! - `quit`: exit

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gomoku::{Board, BoardView, GameConfig, Player, Position, Session, Status, DEFAULT_BOARD_SIZE};

/// Play five-in-a-row in the terminal.
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player five-in-a-row in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Side length of the board
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Who moves first
    #[arg(long, value_enum, default_value_t = FirstPlayer::Black)]
    first: FirstPlayer,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayer {
    Black,
    White,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Black => Player::Black,
            FirstPlayer::White => Player::White,
        }
    }
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(usize, usize),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "reset" | "r" => return Ok(Command::Reset),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        anyhow::bail!("expected `<row> <col>`, `reset` or `quit`");
    };
    let row = row.parse().with_context(|| format!("invalid row `{row}`"))?;
    let col = col.parse().with_context(|| format!("invalid column `{col}`"))?;
    Ok(Command::Place(row, col))
}

const LABELS: [&str; 2] = ["Black", "White"];
const GLYPHS: [char; 2] = ['X', 'O'];

fn player_label(player: Player) -> &'static str {
    LABELS[player.index()]
}

fn status_line(status: Status) -> String {
    match status {
        Status::Turn(player) => format!("{}'s Turn", player_label(player)),
        Status::Won(player) => format!("{} wins!", player_label(player)),
        Status::Draw => "It's a draw!".to_string(),
    }
}

fn stone_glyph(player: Player) -> char {
    GLYPHS[player.index()]
}

/// Text rendering of the board. Keeps its own copy of the glyphs so a
/// placed stone can be drawn without access to the game.
struct TerminalView<W> {
    out: W,
    size: usize,
    glyphs: Vec<char>,
}

impl<W: Write> TerminalView<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            size: 0,
            glyphs: Vec::new(),
        }
    }

    fn render(&self) -> String {
        let width = self.size.saturating_sub(1).to_string().len();
        let mut text = format!("{:width$} ", "");
        for col in 0..self.size {
            text.push_str(&format!(" {col:>width$}"));
        }
        text.push('\n');
        for (row, cells) in self.glyphs.chunks(self.size.max(1)).enumerate() {
            text.push_str(&format!("{row:>width$} "));
            for &glyph in cells {
                text.push_str(&format!(" {glyph:>width$}"));
            }
            text.push('\n');
        }
        text
    }

    fn write(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!(%err, "failed to write to terminal");
        }
    }
}

impl<W: Write> BoardView for TerminalView<W> {
    fn draw_board(&mut self, board: &Board) {
        self.size = board.size();
        self.glyphs = board
            .cells()
            .map(|(_, cell)| cell.player().map_or('.', stone_glyph))
            .collect();
    }

    fn draw_stone(&mut self, pos: Position, player: Player) {
        self.glyphs[pos.row * self.size + pos.col] = stone_glyph(player);
    }

    fn show_status(&mut self, status: Status) {
        let text = format!("{}{}\n", self.render(), status_line(status));
        self.write(&text);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::default()
        .with_board_size(cli.size)
        .with_first_player(cli.first.into());

    info!(size = config.board_size, first = ?config.first_player, "starting game");
    let mut session = Session::new(config, TerminalView::new(io::stdout()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Place(row, col)) => {
                if let Err(err) = session.select_cell(row, col) {
                    eprintln!("{err}");
                }
            }
            Ok(Command::Reset) => session.reset(),
            Ok(Command::Quit) => break,
            Err(err) => eprintln!("{err:#}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("3 4").unwrap(), Command::Place(3, 4));
        assert_eq!(parse_command(" 10,18 ").unwrap(), Command::Place(10, 18));
        assert_eq!(parse_command("RESET").unwrap(), Command::Reset);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert!(parse_command("3").is_err());
        assert!(parse_command("3 4 5").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("-1 2").is_err());
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(Status::Turn(Player::Black)), "Black's Turn");
        assert_eq!(status_line(Status::Won(Player::White)), "White wins!");
        assert_eq!(status_line(Status::Draw), "It's a draw!");
    }

    #[test]
    fn test_terminal_view_renders_moves() {
        let mut session =
            Session::new(GameConfig::new(3), TerminalView::new(Vec::new())).unwrap();
        session.select_cell(1, 1).unwrap();

        let output = String::from_utf8(session.view().out.clone()).unwrap();
        assert!(output.contains("Black's Turn"));
        assert!(output.ends_with("   0 1 2\n0  . . .\n1  . X .\n2  . . .\nWhite's Turn\n"));
    }

    #[test]
    fn test_status_follows_board_without_blank_line() {
        let mut view = TerminalView::new(Vec::new());
        view.draw_board(&Board::new(2));
        view.draw_stone(Position::new(0, 1), Player::White);
        view.show_status(Status::Won(Player::White));

        let output = String::from_utf8(view.out).unwrap();
        assert_eq!(output, "   0 1\n0  . O\n1  . .\nWhite wins!\n");
        assert!(!output.contains("\n\n"));
    }

    #[test]
    fn test_labels_and_glyphs_per_player() {
        assert_eq!(player_label(Player::Black), "Black");
        assert_eq!(player_label(Player::White), "White");
        assert_eq!(stone_glyph(Player::Black), 'X');
        assert_eq!(stone_glyph(Player::White), 'O');
    }
}
