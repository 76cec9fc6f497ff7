use std::io::{self, Write};

use super::game_view::status_text;
use crate::game::Game;

/// Play a scripted list of columns and write a plain-text transcript.
///
/// Rejected moves are reported and skipped, so a script may keep going after
/// a full column. Ends with the board and the game status.
pub fn play<W: Write>(game: &mut Game, columns: &[usize], out: &mut W) -> io::Result<()> {
    for &column in columns {
        match game.drop_piece(column) {
            Ok(result) => writeln!(
                out,
                "{}: column {} -> row {}",
                result.player, result.column, result.row
            )?,
            Err(err) => writeln!(out, "column {column}: rejected, {err}")?,
        }
    }

    writeln!(out)?;
    write!(out, "{}", game.board())?;
    writeln!(out, "{}", status_text(game))?;
    Ok(())
}
