use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{self, Clear, ClearType},
};
use std::{
    io::{stdout, Write},
    thread,
};
use wordfall::{
    constants::{FRAME_LENGTH, LIBRARY},
    game::Game,
    input, render,
};

fn main() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;

    // Get initial terminal size
    let (columns, rows) = terminal::size()?;

    let mut stdout = stdout();

    queue!(stdout, Hide, Clear(ClearType::All))?;
    stdout.flush()?;

    let mut game = Game::new(columns, rows, LIBRARY.as_slice(), fastrand::Rng::new());

    while game.running() {
        let symbol = input::poll_symbol()?;
        game.tick(symbol);
        render::draw(&mut stdout, &game)?;
        thread::sleep(FRAME_LENGTH);
    }

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0), Show)?;
    terminal::disable_raw_mode()?;

    if game.won() {
        println!("ok you won! Go away now");
    }

    Ok(())
}
