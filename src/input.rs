use crate::constants::{BACKSPACE_SYMBOL, QUIT_SYMBOL, SUBMIT_SYMBOL};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::{io, time::Duration};

/// Grabs at most one pending keypress without ever blocking the tick.
///
/// Enter, Backspace and Esc come back as the reserved symbols; plain
/// characters pass through untouched. Anything else is dropped.
pub fn poll_symbol() -> io::Result<Option<char>> {
    if !event::poll(Duration::from_millis(0))? {
        return Ok(None);
    }

    let symbol = match event::read()? {
        Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }) => Some(c),
        Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
        }) => Some(SUBMIT_SYMBOL),
        Event::Key(KeyEvent {
            code: KeyCode::Backspace,
            modifiers: KeyModifiers::NONE,
        }) => Some(BACKSPACE_SYMBOL),
        Event::Key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
        }) => Some(QUIT_SYMBOL),
        _ => None,
    };

    Ok(symbol)
}
