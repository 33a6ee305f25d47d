use crate::constants::{BACKSPACE_SYMBOL, QUIT_SYMBOL, SUBMIT_SYMBOL, WIN_SCORE};
use crate::entry::Entry;
use crate::pool::WordPool;
use crate::score::Score;
use crate::types::Actor;

/// The whole game state, advanced one fixed tick at a time.
///
/// Each tick applies at most one input symbol, steps every word down the
/// screen and re-evaluates the win condition. Rendering and frame pacing live
/// with the caller, so the frame it draws always shows the post-descent state.
pub struct Game {
    entry: Entry,
    pool: WordPool,
    score: Score,
    running: bool,
    won: bool,
}

impl Game {
    pub fn new(
        columns: u16,
        rows: u16,
        library: &'static [&'static str],
        rng: fastrand::Rng,
    ) -> Self {
        Self {
            entry: Entry::new(),
            pool: WordPool::new(columns, rows, library, rng),
            score: Score::new(),
            running: true,
            won: false,
        }
    }

    pub fn tick(&mut self, symbol: Option<char>) {
        if let Some(symbol) = symbol {
            self.apply(symbol);
        }

        self.pool.descend();

        if self.score.value() >= WIN_SCORE {
            self.running = false;
            self.won = true;
        }
    }

    fn apply(&mut self, symbol: char) {
        match symbol {
            SUBMIT_SYMBOL => {
                let submitted = self.entry.submit();
                let (matched, points) = self.pool.check(&submitted);
                if matched {
                    self.score.add_points(points);
                } else {
                    self.score.subtract_points(points);
                }
            }
            BACKSPACE_SYMBOL => self.entry.backspace(),
            QUIT_SYMBOL => self.running = false,
            other => self.entry.append(other),
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn score(&self) -> i32 {
        self.score.value()
    }

    pub fn display_text(&self) -> String {
        self.entry.display_text()
    }

    pub fn words(&self) -> &[Actor] {
        self.pool.words()
    }

    pub fn bounds(&self) -> (u16, u16) {
        self.pool.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(library: &'static [&'static str]) -> Game {
        Game::new(80, 24, library, fastrand::Rng::with_seed(42))
    }

    fn type_word(game: &mut Game, word: &str) {
        for c in word.chars() {
            game.tick(Some(c));
        }
    }

    #[test]
    fn characters_accumulate_in_the_status_line() {
        let mut game = game_with(&["cat"]);
        type_word(&mut game, "ca");
        assert_eq!(game.display_text(), "Word: ca");

        game.tick(Some(BACKSPACE_SYMBOL));
        assert_eq!(game.display_text(), "Word: c");

        game.tick(Some(SUBMIT_SYMBOL));
        assert_eq!(game.display_text(), "Word: ");
    }

    #[test]
    fn matched_submission_awards_points() {
        // Single-entry library, so the backlog is guaranteed to hold "cat".
        let mut game = game_with(&["cat"]);
        type_word(&mut game, "cat");
        game.tick(Some(SUBMIT_SYMBOL));

        assert_eq!(game.score(), 30);
        assert!(game.running());
    }

    #[test]
    fn missed_submission_deducts_points() {
        let mut game = game_with(&["cat"]);
        type_word(&mut game, "xyz");
        game.tick(Some(SUBMIT_SYMBOL));

        assert_eq!(game.score(), -30);
        assert!(game.running());
    }

    #[test]
    fn every_tick_descends_the_pool() {
        let mut game = game_with(&["cat"]);
        let before: Vec<i32> = game.words().iter().map(|w| w.position().y).collect();

        game.tick(None);
        game.tick(Some('c'));

        for (word, old) in game.words().iter().zip(before) {
            assert_eq!(word.position().y, old + 2);
        }
    }

    #[test]
    fn quit_symbol_stops_the_loop_without_winning() {
        let mut game = game_with(&["cat"]);
        game.tick(Some(QUIT_SYMBOL));

        assert!(!game.running());
        assert!(!game.won());
    }

    #[test]
    fn crossing_the_threshold_sets_the_win_flag() {
        let mut game = game_with(&["cat"]);

        // Each matched "cat" is worth 30; the hundredth-ish submit crosses
        // 1000 and the loop must refuse further ticks.
        while game.running() {
            type_word(&mut game, "cat");
            game.tick(Some(SUBMIT_SYMBOL));
        }

        assert!(game.won());
        assert!(game.score() >= 1000);
        assert!(game.score() < 1000 + 30);
    }
}
