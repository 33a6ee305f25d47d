/// The player's in-progress submission.
#[derive(Debug, Default)]
pub struct Entry {
    buffer: String,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Drops the trailing character; does nothing on an empty buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Hands back the typed text and clears the buffer for the next attempt.
    pub fn submit(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn display_text(&self) -> String {
        format!("Word: {}", self.buffer)
    }
}
