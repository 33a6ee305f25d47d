use crate::game::Game;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{style, Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// Queues one full frame and flushes it: status line, every on-screen word,
/// then the score. Words that have fallen past the edges are simply skipped.
pub fn draw(stdout: &mut Stdout, game: &Game) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All))?;

    let (columns, rows) = game.bounds();

    queue!(
        stdout,
        MoveTo(0, rows.saturating_sub(1)),
        PrintStyledContent(style(game.display_text()).green().bold())
    )?;

    for word in game.words() {
        let position = word.position();
        if position.x < 0
            || position.y < 0
            || position.x >= columns as i32
            || position.y >= rows as i32
        {
            continue;
        }
        queue!(
            stdout,
            MoveTo(position.x as u16, position.y as u16),
            Print(word.text())
        )?;
    }

    queue!(
        stdout,
        MoveTo(0, 0),
        PrintStyledContent(style(format!("Score: {}", game.score())).yellow().bold())
    )?;

    stdout.flush()
}
