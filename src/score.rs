/// Running point total. Unbounded in both directions.
#[derive(Debug, Default)]
pub struct Score {
    points: i32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_points(&mut self, points: i32) {
        self.points += points;
    }

    pub fn subtract_points(&mut self, points: i32) {
        self.points -= points;
    }

    pub fn value(&self) -> i32 {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_and_subtracts() {
        let mut score = Score::new();
        score.add_points(30);
        assert_eq!(score.value(), 30);

        score.subtract_points(10);
        assert_eq!(score.value(), 20);
    }

    #[test]
    fn may_go_negative() {
        let mut score = Score::new();
        score.subtract_points(40);
        assert_eq!(score.value(), -40);
    }
}
