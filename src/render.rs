use crate::board::Board;
use crate::solver::Outcome;
use crossterm::style::{style, Color, Stylize};
use std::io::{self, Write};

/// Writes every board of a solution followed by the move count, or a
/// single line when there is none.
///
/// With `highlight`, each board is preceded by the slide that produced it
/// and the tile that moved is coloured.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, highlight: bool) -> io::Result<()> {
    let solution = match outcome {
        Outcome::Solved(solution) => solution,
        Outcome::Unsolvable => return writeln!(out, "No solution possible"),
    };

    let mut previous: Option<&Board> = None;
    for (index, board) in solution.boards().iter().enumerate() {
        if highlight {
            if let Some(step) = index.checked_sub(1).map(|i| solution.steps()[i]) {
                writeln!(out, "{}", style(format!("Move {index}: {step}")).bold())?;
            }
            write_highlighted(out, board, previous.and_then(|before| moved_tile(before, board)))?;
        } else {
            write!(out, "{board}")?;
        }
        writeln!(out)?;
        previous = Some(board);
    }

    writeln!(out, "Minimum number of moves = {}", solution.moves())
}

/// The tile that slid into the blank of `before` to give `after`.
pub fn moved_tile(before: &Board, after: &Board) -> Option<u32> {
    if before.size() != after.size() {
        return None;
    }
    let (row, col) = before.blank_position();
    let tile = after.tile(row, col);
    (tile != 0).then_some(tile)
}

fn write_highlighted<W: Write>(out: &mut W, board: &Board, moved: Option<u32>) -> io::Result<()> {
    let width = board.field_width();
    writeln!(out, "{}", board.size())?;
    for row in board.tiles().chunks(board.size()) {
        for &val in row {
            let cell = format!("{:width$}", val);
            if Some(val) == moved {
                write!(out, "{} ", style(cell).with(Color::Yellow).bold())?;
            } else if val == 0 {
                write!(out, "{} ", style(cell).dark_grey())?;
            } else {
                write!(out, "{} ", cell)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
