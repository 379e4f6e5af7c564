#![cfg(feature = "std")]

//! Terminal front end: renders the grid, parses typed gestures such as
//! `A1 A9`, and reports round events as text.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    common::{Cell, RejectReason, RoundEvent},
    game::WordSearch,
    presenter::{self, Presenter},
    round::RoundState,
};

/// Largest grid whose columns can be labelled A-Z.
pub const MAX_TERMINAL_GRID: usize = 26;

fn column_label(col: usize) -> char {
    if col < MAX_TERMINAL_GRID {
        (b'A' + col as u8) as char
    } else {
        '?'
    }
}

/// Format a cell as column letter plus 1-based row, e.g. `(4, 0)` -> `A5`.
pub fn coord_to_string(cell: Cell) -> String {
    format!("{}{}", column_label(cell.1), cell.0 + 1)
}

/// Parse `A5`-style input for a `size`×`size` grid.
pub fn parse_coord(input: &str, size: usize) -> Result<Cell, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let last_col = column_label(size.saturating_sub(1).min(MAX_TERMINAL_GRID - 1));
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

/// Parse a typed gesture: one or two coordinates separated by space or `-`.
pub fn parse_gesture(input: &str, size: usize) -> Result<(Cell, Cell), String> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [only] => {
            let cell = parse_coord(only, size)?;
            Ok((cell, cell))
        }
        [from, to] => Ok((parse_coord(from, size)?, parse_coord(to, size)?)),
        _ => Err("Enter a start and end cell, e.g. A1 A9".to_string()),
    }
}

/// Draw the grid with column letters and row numbers. Found cells are shown
/// in lowercase and `selection` is bracketed. With `reveal`, letters outside
/// every placement are hidden.
pub fn render_grid(round: &RoundState, selection: &[Cell], reveal: bool) -> String {
    let grid = round.grid();
    let size = grid.size();
    let found_cells: Vec<Cell> = round
        .found()
        .iter()
        .filter_map(|w| round.placement(w))
        .flat_map(|p| p.cells().iter().copied())
        .collect();

    let mut out = String::new();
    let _ = write!(out, "    ");
    for c in 0..size {
        let _ = write!(out, " {} ", column_label(c));
    }
    let _ = writeln!(out);
    for r in 0..size {
        let _ = write!(out, " {:2} ", r + 1);
        for c in 0..size {
            let cell = (r, c);
            let mut ch = grid.get(cell).unwrap_or(' ');
            if found_cells.contains(&cell) {
                ch = ch.to_ascii_lowercase();
            } else if reveal && !round.placements().iter().any(|p| p.contains(cell)) {
                ch = '.';
            }
            if selection.contains(&cell) {
                let _ = write!(out, "[{}]", ch);
            } else {
                let _ = write!(out, " {} ", ch);
            }
        }
        let _ = writeln!(out);
    }
    out
}

/// Found words listed under each sponsor.
pub fn render_buckets(game: &WordSearch) -> String {
    let mut out = String::new();
    for bucket in game.found_by_sponsor() {
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            bucket.sponsor.name,
            bucket.sponsor.color,
            if bucket.words.is_empty() {
                "-".to_string()
            } else {
                bucket.words.join(", ")
            }
        );
    }
    out
}

/// Presenter that turns events into lines of text for the terminal.
#[derive(Default)]
pub struct TerminalPresenter {
    lines: Vec<String>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lines produced since the last call.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Presenter for TerminalPresenter {
    fn round_started(&mut self, round: &RoundState) {
        let words: Vec<&str> = round.words().iter().map(|e| e.word()).collect();
        self.lines.push(format!("Find: {}", words.join(", ")));
    }

    fn word_found(&mut self, word: &str, cells: &[Cell], sponsors: &[String]) {
        let (first, last) = match (cells.first(), cells.last()) {
            (Some(&a), Some(&b)) => (coord_to_string(a), coord_to_string(b)),
            _ => (String::new(), String::new()),
        };
        self.lines.push(format!(
            "Found {} ({}-{}) for {}",
            word,
            first,
            last,
            sponsors.join(" & ")
        ));
    }

    fn selection_rejected(&mut self, reason: RejectReason) {
        self.lines.push(format!("Not quite: {}", reason));
    }

    fn round_complete(&mut self) {
        self.lines.push("All core values found!".to_string());
    }
}

const HELP: &str = "Commands: <from> <to> (e.g. A1 A9), shuffle, reveal, help, quit";

/// Interactive loop reading gestures from `input` until `quit` or EOF.
pub fn run_interactive<R, I, W>(
    game: &mut WordSearch,
    rng: &mut R,
    input: I,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut presenter = TerminalPresenter::new();
    presenter.round_started(game.round());
    let mut reveal = false;
    write!(out, "{}", render_grid(game.round(), &[], reveal))?;
    flush_lines(&mut presenter, out)?;
    writeln!(out, "{}", HELP)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{} > ", game.progress())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();
        match command.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "shuffle" | "again" => {
                game.restart(rng).map_err(|e| anyhow::anyhow!(e))?;
                presenter.round_started(game.round());
                write!(out, "{}", render_grid(game.round(), &[], reveal))?;
            }
            "reveal" => {
                reveal = !reveal;
                write!(out, "{}", render_grid(game.round(), &[], reveal))?;
            }
            _ => match parse_gesture(command, game.round().grid().size()) {
                Ok((from, to)) => {
                    game.pointer_down(Some(from));
                    game.pointer_move(Some(to));
                    let path = game.selection().to_vec();
                    let events = game.pointer_up();
                    presenter::dispatch(&mut presenter, &events);
                    write!(out, "{}", render_grid(game.round(), &path, reveal))?;
                    if events.contains(&RoundEvent::RoundComplete) {
                        flush_lines(&mut presenter, out)?;
                        write!(out, "{}", render_buckets(game))?;
                        writeln!(out, "Type 'again' to play another round or 'quit' to leave.")?;
                    }
                }
                Err(msg) => writeln!(out, "{}", msg)?,
            },
        }
        flush_lines(&mut presenter, out)?;
    }
    Ok(())
}

fn flush_lines<W: Write>(presenter: &mut TerminalPresenter, out: &mut W) -> std::io::Result<()> {
    for line in presenter.drain() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
