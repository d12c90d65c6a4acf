use crate::config::Config;
use crate::snake::{Direction, Field, Player, Position, Step};

use rand::Rng;
use rand::rngs::ThreadRng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pickup {
    pub pos: Position,
    pub size: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Advance {
    pub step: Step,
    pub consumed: bool,
}

/// Everything one game session mutates. The frame driver owns it and is the only caller.
pub struct World<R = ThreadRng> {
    field: Field,
    player: Player,
    pickup: Pickup,
    contact_eps: f64,
    rng: R,
}

impl World<ThreadRng> {
    pub fn new(config: &Config) -> Self {
        World::new_with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> World<R> {
    pub fn new_with_rng(config: &Config, mut rng: R) -> Self {
        let field = Field::new(config.field_width, config.field_height);

        let head = Position::new(rng.gen::<f64>() * field.width, rng.gen::<f64>() * field.height);
        let player = Player::new(head, config.segment_size, config.speed);

        let pickup_pos = Position::new(
            (rng.gen::<f64>() * field.width).floor(),
            (rng.gen::<f64>() * field.height).floor(),
        );
        let pickup = Pickup { pos: pickup_pos, size: config.pickup_size };

        World { field, player, pickup, contact_eps: config.contact_eps, rng }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pickup(&self) -> &Pickup {
        &self.pickup
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.player.set_direction(direction);
    }

    /// Runs one frame of simulation, `dt` seconds long.
    pub fn advance(&mut self, dt: f64) -> Advance {
        let step = self.player.advance(dt, &self.field);

        let consumed = self.head_touches_pickup();
        if consumed {
            self.relocate_pickup();
            self.player.grow(step.vacated);
        }

        Advance { step, consumed }
    }

    fn head_touches_pickup(&self) -> bool {
        let head = self.player.head();
        (head.x - self.pickup.pos.x).abs() <= self.contact_eps
            && (head.y - self.pickup.pos.y).abs() <= self.contact_eps
    }

    fn relocate_pickup(&mut self) {
        let Field { width, height } = self.field;
        let size = self.pickup.size;
        self.pickup.pos = Position::new(
            (self.rng.gen::<f64>() * width).min(width - size),
            (self.rng.gen::<f64>() * height).min(height - size),
        );
    }

    #[cfg(test)]
    fn with_parts(config: &Config, player: Player, pickup_pos: Position, rng: R) -> Self {
        World {
            field: Field::new(config.field_width, config.field_height),
            player,
            pickup: Pickup { pos: pickup_pos, size: config.pickup_size },
            contact_eps: config.contact_eps,
            rng,
        }
    }
}
