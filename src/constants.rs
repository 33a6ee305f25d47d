use lazy_static::lazy_static;
use std::time::Duration;

pub const FRAME_LENGTH: Duration = Duration::from_millis(66);

pub const WIN_SCORE: i32 = 1000;
pub const STARTING_WORDS: usize = 5;
pub const POINTS_PER_CHAR: i32 = 10;

/// Rows above the bottom edge that respawned words never start in.
pub const BOTTOM_MARGIN: i32 = 5;

// Reserved input symbols; everything else goes into the entry buffer.
pub const SUBMIT_SYMBOL: char = '\n';
pub const BACKSPACE_SYMBOL: char = '\u{8}';
pub const QUIT_SYMBOL: char = '\u{1b}';

lazy_static! {
    /// The fixed catalog every falling word is drawn from.
    pub static ref LIBRARY: Vec<&'static str> = include_str!("../words.txt")
        .lines()
        .filter(|line| !line.is_empty())
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_is_not_empty() {
        assert!(!LIBRARY.is_empty());
        assert!(LIBRARY.iter().all(|word| !word.is_empty()));
    }
}
