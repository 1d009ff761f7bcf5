use crate::{Ball, Config, Events, GameRng, Paddle, PaddleHit, Params, Score, Side};
use hecs::World;

/// Check if the ball crossed a goal line.
///
/// On a goal the opponent scores, a fresh ball replaces the old one and both
/// paddles recentre. Scores and hit counts carry over.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut conceded = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - ball.radius < config.goal_line(Side::Left) {
            conceded = Some(Side::Left);
        } else if ball.pos.x + ball.radius > config.goal_line(Side::Right) {
            conceded = Some(Side::Right);
        }

        if conceded.is_some() {
            *ball = Ball::spawn(config, rng);
        }
    }

    if let Some(side) = conceded {
        score.increment(side.opponent());
        events.goal_conceded = Some(side);
        recenter_paddles(world, config);
        tracing::debug!(
            conceded = ?side,
            left = score.left,
            right = score.right,
            "point scored"
        );
    }
}

pub fn recenter_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.paddle_spawn_y();
    }
}

/// Reward for intercepting the ball: 3 off the paddle centre, rising
/// linearly to 7 at either edge.
pub fn hit_reward(hit: &PaddleHit) -> f32 {
    hit.offset * Params::HIT_REWARD_SCALE + Params::HIT_REWARD_BASE
}

/// Per-side rewards for a tick, indexed by `Side::index`.
///
/// A conceded goal overrides any hit reward for that side; the scorer gets
/// nothing extra.
pub fn shape_rewards(events: &Events) -> [f32; 2] {
    let mut rewards = [0.0; 2];
    if let Some(hit) = &events.paddle_hit {
        rewards[hit.side.index()] = hit_reward(hit);
    }
    if let Some(side) = events.goal_conceded {
        rewards[side.index()] = Params::MISS_PENALTY;
    }
    rewards
}

/// Share of the balls that reached a side which it returned, as a whole
/// percentage. Zero when nothing has reached it yet.
pub fn accuracy(hits: u32, conceded: u32) -> u32 {
    let total = hits + conceded;
    if total == 0 {
        return 0;
    }
    (hits as f64 / total as f64 * 100.0).round() as u32
}
