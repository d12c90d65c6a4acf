use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn unit_vector(self) -> (f64, f64) {
        match self {
            Up => (0.0, -1.0),
            Down => (0.0, 1.0),
            Left => (-1.0, 0.0),
            Right => (1.0, 0.0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// The wrap-around domain every position lives in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Self {
        Field { width, height }
    }

    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(wrap(pos.x, self.width), wrap(pos.y, self.height))
    }
}

/// Euclidean modulo floored onto whole units. Always lands in `[0, b)` for `b > 0`,
/// negative `a` included.
pub fn wrap(a: f64, b: f64) -> f64 {
    (((a % b) + b) % b).floor()
}

/// Outcome of a single movement step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub new_head: Position,
    /// Where the tail was before the shift.
    pub vacated: Position,
}

pub struct Player {
    // Head first, never empty.
    body: Vec<Position>,
    size: f64,
    speed: f64,
    direction: Direction,
}

impl Player {
    pub fn new(head: Position, size: f64, speed: f64) -> Self {
        debug_assert!(size > 0.0 && speed > 0.0);
        Player { body: vec![head], size, speed, direction: Left }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Moves the head `dt` seconds along the active direction and drags the rest
    /// of the chain one slot forward.
    pub fn advance(&mut self, dt: f64, field: &Field) -> Step {
        let (vx, vy) = self.direction.unit_vector();
        let head = self.head();
        let dist = self.speed * dt;
        let new_head = field.wrap(Position::new(head.x + vx * dist, head.y + vy * dist));

        let vacated = self.shift_to(new_head);
        Step { new_head, vacated }
    }

    /// Appends a segment at the tail.
    pub fn grow(&mut self, at: Position) {
        self.body.push(at);
    }

    fn shift_to(&mut self, new_head: Position) -> Position {
        // Rotating brings the old tail to the front, where the new head overwrites it
        self.body.rotate_right(1);
        let vacated = self.body[0];
        self.body[0] = new_head;
        vacated
    }

    #[cfg(test)]
    pub fn with_body(body: Vec<Position>, size: f64, speed: f64) -> Self {
        assert!(!body.is_empty());
        Player { body, size, speed, direction: Left }
    }
}
