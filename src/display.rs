use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Cell, StandardBoard, HEIGHT, WIDTH};

/// Draws the board top row first, followed by the column numbers
pub fn display(board: &StandardBoard) -> Result<()> {
    let mut stdout = stdout();

    for row in (0..HEIGHT).rev() {
        stdout.queue(PrintStyledContent(style("|")))?;
        for column in 0..WIDTH {
            let cell = board.get(row, column);
            let symbol = cell.player().map_or(' ', |player| player.symbol());
            stdout
                .queue(PrintStyledContent(
                    style(symbol).attribute(Attribute::Bold).with(match cell {
                        Cell::Human => Color::Red,
                        Cell::Ai => Color::Yellow,
                        Cell::Empty => Color::Reset,
                    }),
                ))?
                .queue(PrintStyledContent(style("|")))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }

    let cols: String = (1..=WIDTH).map(|x| format!(" {}", x)).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    stdout.flush()?;
    Ok(())
}
