use crate::{Action, Ball, Config, Paddle, PaddleIntent, Side};
use hecs::World;

/// Record this tick's action on each paddle
pub fn ingest_actions(world: &mut World, left: Action, right: Action) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.action = match paddle.side {
            Side::Left => left,
            Side::Right => right,
        };
    }
}

/// Apply paddle movement based on intents.
///
/// A step that would leave the arena is dropped whole rather than clamped.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        match intent.action {
            Action::Up => {
                if paddle.y - paddle.speed >= 0.0 {
                    paddle.shift(true);
                }
            }
            Action::Down => {
                if paddle.y + paddle.speed + paddle.height <= config.arena_height {
                    paddle.shift(false);
                }
            }
            Action::Stay => {}
        }
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}
