#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// A named, drawable thing with a position and a velocity.
#[derive(Debug, Clone)]
pub struct Actor {
    text: String,
    position: Point,
    velocity: Point,
}

impl Actor {
    pub fn new(text: impl Into<String>, position: Point, velocity: Point) -> Self {
        Self {
            text: text.into(),
            position,
            velocity,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Point) {
        self.velocity = velocity;
    }

    /// Advances the position by one velocity step.
    pub fn advance(&mut self) {
        self.position = self.position.add(self.velocity);
    }
}
