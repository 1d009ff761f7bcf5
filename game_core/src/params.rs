use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Side;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = Self::ARENA_HEIGHT / 30.0;
    pub const PADDLE_HEIGHT: f32 = Self::ARENA_WIDTH / 8.0;
    pub const PADDLE_SPEED: f32 = Self::ARENA_HEIGHT / 75.0; // units per tick
    pub const PADDLE_MARGIN: f32 = 10.0; // back edge to side wall

    // Ball
    pub const BALL_RADIUS: f32 = Self::ARENA_WIDTH / 80.0;
    pub const BALL_MAX_SPEED: f32 = Self::ARENA_WIDTH / 80.0;

    // Score
    pub const WIN_SCORE: u32 = 7;

    // Rewards
    pub const HIT_REWARD_BASE: f32 = 3.0;
    pub const HIT_REWARD_SCALE: f32 = 4.0;
    pub const MISS_PENALTY: f32 = -10.0;
    pub const LOSS_PENALTY: f32 = -20.0;

    // Playback pacing (ticks per wall-clock second)
    pub const TICK_RATE: u32 = 40;
    pub const MIN_TICK_RATE: u32 = 10;
    pub const MAX_TICK_RATE: u32 = 200;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },
    #[error("paddles overlap: margin {margin} + width {width} on both sides exceeds arena width {arena}")]
    PaddlesOverlap { margin: f32, width: f32, arena: f32 },
    #[error("ball diameter {diameter} does not fit in arena height {arena}")]
    BallTooLarge { diameter: f32, arena: f32 },
    #[error("winning score must be at least 1")]
    ZeroWinningScore,
    #[error("tick rate {0} outside {min}..={max}", min = Params::MIN_TICK_RATE, max = Params::MAX_TICK_RATE)]
    TickRateOutOfRange(u32),
}

/// Immutable match geometry and rules, handed to the arena at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_max_speed: f32,
    pub winning_score: u32,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_max_speed: Params::BALL_MAX_SPEED,
            winning_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the geometry describes a playable arena.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_max_speed", self.ball_max_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.paddle_margin.is_finite() && self.paddle_margin >= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "paddle_margin",
                value: self.paddle_margin,
            });
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.arena_width {
            return Err(ConfigError::PaddlesOverlap {
                margin: self.paddle_margin,
                width: self.paddle_width,
                arena: self.arena_width,
            });
        }
        if 2.0 * self.ball_radius >= self.arena_height {
            return Err(ConfigError::BallTooLarge {
                diameter: 2.0 * self.ball_radius,
                arena: self.arena_height,
            });
        }
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        if !(Params::MIN_TICK_RATE..=Params::MAX_TICK_RATE).contains(&self.tick_rate) {
            return Err(ConfigError::TickRateOutOfRange(self.tick_rate));
        }
        Ok(())
    }

    /// Left edge of a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge of a freshly centred paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Lowest legal top edge for a paddle
    pub fn paddle_max_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Clamp a paddle's top edge to the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// X coordinate of the goal line guarding `side`.
    ///
    /// Goal lines sit on the paddles' back edges; a ball whose leading edge
    /// crosses one scores for the opponent.
    pub fn goal_line(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin,
        }
    }
}
