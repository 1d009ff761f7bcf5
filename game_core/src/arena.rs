use glam::Vec2;
use hecs::World;

use crate::systems::*;
use crate::{
    create_ball, create_paddle, Action, Ball, Config, ConfigError, Events, GameRng, Paddle,
    Params, Score, Side, Snapshot, StepOutcome,
};

/// Owns every piece of physical game state and is its only mutator.
///
/// Geometry is fixed at construction. A goal triggers a point reset (new
/// ball, paddles recentred); reaching the winning score triggers a full
/// match reset inside the same `step` call.
pub struct Arena {
    world: World,
    config: Config,
    score: Score,
    hits: Score,
    events: Events,
    rng: GameRng,
    tick: u64,
    tick_rate: u32,
}

impl Arena {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut arena = Self {
            world: World::new(),
            tick_rate: config.tick_rate,
            config,
            score: Score::new(),
            hits: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            tick: 0,
        };
        arena.spawn_entities();
        Ok(arena)
    }

    fn spawn_entities(&mut self) {
        for side in Side::BOTH {
            create_paddle(&mut self.world, Paddle::spawn(side, &self.config));
        }
        let ball = Ball::spawn(&self.config, &mut self.rng);
        create_ball(&mut self.world, ball);
    }

    /// Full match reset: scores, hits, paddles and ball. Geometry, tick rate
    /// and the random stream carry over.
    pub fn reset(&mut self) {
        self.world.clear();
        self.score = Score::new();
        self.hits = Score::new();
        self.tick = 0;
        self.spawn_entities();
    }

    /// Advance the game by one tick
    pub fn step(&mut self, left: Action, right: Action) -> StepOutcome {
        self.events.clear();
        self.tick += 1;

        // 1. Paddles, each clamped to the arena
        ingest_actions(&mut self.world, left, right);
        move_paddles(&mut self.world, &self.config);

        // 2. Ball
        move_ball(&mut self.world);

        // 3. Walls, then the paddle the ball is heading for
        check_collisions(&mut self.world, &self.config, &mut self.hits, &mut self.events);

        // 4. Goals
        check_scoring(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        let mut rewards = shape_rewards(&self.events);
        let winner = self.score.has_winner(self.config.winning_score);
        if let Some(winner) = winner {
            rewards[winner.opponent().index()] = Params::LOSS_PENALTY;
            self.events.match_winner = Some(winner);
        }

        let outcome = StepOutcome {
            reward_left: rewards[Side::Left.index()],
            reward_right: rewards[Side::Right.index()],
            terminal: winner.is_some(),
            score_left: self.score.left,
            score_right: self.score.right,
            accuracy_left: accuracy(self.hits.left, self.score.right),
            accuracy_right: accuracy(self.hits.right, self.score.left),
        };

        if let Some(winner) = winner {
            tracing::debug!(
                winner = ?winner,
                left = outcome.score_left,
                right = outcome.score_right,
                ticks = self.tick,
                "match over"
            );
            self.reset();
        }

        outcome
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn hits(&self) -> Score {
        self.hits
    }

    /// Events raised by the most recent `step`
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Ticks played in the current match
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Playback pacing in ticks per second. Has no effect on physics.
    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn adjust_tick_rate(&mut self, delta: i32) -> u32 {
        let rate = (self.tick_rate as i64 + delta as i64).clamp(
            Params::MIN_TICK_RATE as i64,
            Params::MAX_TICK_RATE as i64,
        );
        self.tick_rate = rate as u32;
        self.tick_rate
    }

    /// Copy out paddle and ball positions plus the running tallies
    pub fn snapshot(&self) -> Snapshot {
        let mut left = Paddle::spawn(Side::Left, &self.config);
        let mut right = Paddle::spawn(Side::Right, &self.config);
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = *paddle,
                Side::Right => right = *paddle,
            }
        }

        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| {
                Ball::new(
                    self.config.ball_spawn(),
                    Vec2::ZERO,
                    self.config.ball_radius,
                    self.config.ball_max_speed,
                )
            });

        Snapshot {
            arena_width: self.config.arena_width,
            arena_height: self.config.arena_height,
            left,
            right,
            ball,
            score: self.score,
            hits: self.hits,
        }
    }

    /// Replace the ball outright
    pub fn place_ball(&mut self, ball: Ball) {
        for (_e, current) in self.world.query_mut::<&mut Ball>() {
            *current = ball;
        }
    }

    /// Move a paddle's top edge, clamped to the arena
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}
