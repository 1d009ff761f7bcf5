use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Discrete paddle command for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Stay,
    Up,
    Down,
}

impl Action {
    pub const COUNT: usize = 3;
    pub const ALL: [Action; Self::COUNT] = [Action::Stay, Action::Up, Action::Down];

    pub fn index(self) -> usize {
        match self {
            Action::Stay => 0,
            Action::Up => 1,
            Action::Down => 2,
        }
    }

    /// Out-of-range indices decode to `Stay`.
    pub fn from_index(index: usize) -> Action {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn one_hot(self) -> [u8; Self::COUNT] {
        let mut encoded = [0; Self::COUNT];
        encoded[self.index()] = 1;
        encoded
    }

    /// Decode a one-hot selection. Anything that is not exactly one `1`
    /// among zeros is treated as `Stay`.
    pub fn from_one_hot(encoded: [u8; Self::COUNT]) -> Action {
        match encoded {
            [1, 0, 0] => Action::Stay,
            [0, 1, 0] => Action::Up,
            [0, 0, 1] => Action::Down,
            _ => Action::Stay,
        }
    }
}

impl From<[u8; Action::COUNT]> for Action {
    fn from(encoded: [u8; Action::COUNT]) -> Self {
        Action::from_one_hot(encoded)
    }
}

/// Paddle component. `y` is the top edge; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32, // units per tick
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            speed,
        }
    }

    /// Paddle centred vertically at its side's fixed x
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(
            side,
            config.paddle_x(side),
            config.paddle_spawn_y(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        )
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move one step. Bounds are the caller's business.
    pub fn shift(&mut self, up: bool) {
        if up {
            self.y -= self.speed;
        } else {
            self.y += self.speed;
        }
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Signed serve speed: the sign is the serve direction, the magnitude
    /// caps the vertical deflection off a paddle.
    pub max_vel: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, max_vel: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            max_vel,
        }
    }

    /// Fresh ball at the centre, served flat toward a random side
    pub fn spawn(config: &Config, rng: &mut GameRng) -> Self {
        let direction = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let max_vel = config.ball_max_speed * direction;
        Self::new(
            config.ball_spawn(),
            Vec2::new(max_vel, 0.0),
            config.ball_radius,
            max_vel,
        )
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub action: Action,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
