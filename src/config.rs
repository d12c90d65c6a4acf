use std::time::Duration;

/// Fixed tuning of a game session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub field_width: f64,
    pub field_height: f64,
    pub segment_size: f64,
    /// Units per second.
    pub speed: f64,
    pub pickup_size: f64,
    /// Max per-axis distance between head and pickup that counts as contact.
    pub contact_eps: f64,
    pub frame_interval: Duration,
}

const FIELD_WIDTH: f64 = 800.0;
const FIELD_HEIGHT: f64 = 600.0;
const SEGMENT_SIZE: f64 = 20.0;
const INITIAL_SPEED: f64 = 500.0;
const PICKUP_SIZE: f64 = 20.0;
const FRAME_INTERVAL_MS: u64 = 16;

impl Default for Config {
    fn default() -> Self {
        Config {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            segment_size: SEGMENT_SIZE,
            speed: INITIAL_SPEED,
            pickup_size: PICKUP_SIZE,
            contact_eps: SEGMENT_SIZE,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        }
    }
}
