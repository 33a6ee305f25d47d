use crate::constants::{BOTTOM_MARGIN, POINTS_PER_CHAR, STARTING_WORDS};
use crate::types::{Actor, Point};

/// Owns the visible falling words and the backlog of strings backing them.
///
/// The backlog is parallel to the visible set: entry `i` is the text of the
/// word at index `i`. Submissions are matched against the backlog, never
/// against whatever happens to be rendered.
pub struct WordPool {
    words: Vec<Actor>,
    backlog: Vec<String>,
    library: &'static [&'static str],
    rng: fastrand::Rng,
    columns: u16,
    rows: u16,
}

impl WordPool {
    pub fn new(
        columns: u16,
        rows: u16,
        library: &'static [&'static str],
        rng: fastrand::Rng,
    ) -> Self {
        let mut pool = Self {
            words: Vec::with_capacity(STARTING_WORDS),
            backlog: Vec::with_capacity(STARTING_WORDS),
            library,
            rng,
            columns,
            rows,
        };

        // The opening set all starts from the top edge.
        for _ in 0..STARTING_WORDS {
            let text = pool.sample();
            let x = pool.rng.i32(0..pool.columns.max(1) as i32);
            pool.words
                .push(Actor::new(text, Point::new(x, 0), Point::new(0, 1)));
            pool.backlog.push(text.to_owned());
        }

        pool
    }

    /// Draws one candidate from the library. The bound is upper-exclusive, so
    /// the draw can never land past the end of the catalog.
    fn sample(&self) -> &'static str {
        self.library[self.rng.usize(0..self.library.len())]
    }

    /// Puts a fresh word somewhere in the upper region of the screen, falling
    /// one row per tick.
    fn spawn(&mut self, text: &str) {
        let x = self.rng.i32(0..self.columns.max(1) as i32);
        let y = self.rng.i32(0..(self.rows as i32 - BOTTOM_MARGIN).max(1));
        self.words
            .push(Actor::new(text, Point::new(x, y), Point::new(0, 1)));
    }

    /// Advances every visible word by its velocity. Words that fall past the
    /// bottom edge stay in the pool; the renderer just stops drawing them.
    pub fn descend(&mut self) {
        for word in &mut self.words {
            word.advance();
        }
    }

    /// Resolves a submission against the backlog. The point value always comes
    /// from the submitted text's length, matched or not.
    ///
    /// On a match the word and its backlog entry are removed together and a
    /// freshly sampled replacement is appended to both, keeping the two lists
    /// in lockstep.
    pub fn check(&mut self, submitted: &str) -> (bool, i32) {
        let points = POINTS_PER_CHAR * submitted.chars().count() as i32;

        match self.backlog.iter().position(|entry| entry == submitted) {
            Some(index) => {
                self.words.remove(index);
                self.backlog.remove(index);

                let replacement = self.sample();
                self.backlog.push(replacement.to_owned());
                self.spawn(replacement);

                (true, points)
            }
            None => (false, points),
        }
    }

    pub fn words(&self) -> &[Actor] {
        &self.words
    }

    pub fn bounds(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    #[cfg(test)]
    pub fn backlog(&self) -> &[String] {
        &self.backlog
    }
}
