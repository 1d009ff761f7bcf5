use crate::{Ball, Config, Events, Paddle, PaddleHit, Score, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, hits: &mut Score, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Floor and ceiling; at most one can trigger per tick
        if ball.pos.y + ball.radius >= config.arena_height || ball.pos.y - ball.radius <= 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Only the paddle the ball is travelling toward can intercept it
        let facing = if ball.vel.x < 0.0 { Side::Left } else { Side::Right };
        let Some(paddle) = paddles.iter().find(|p| p.side == facing) else {
            continue;
        };

        if let Some(hit) = deflect(ball, paddle) {
            hits.increment(hit.side);
            events.paddle_hit = Some(hit);
            tracing::trace!(side = ?hit.side, offset = hit.offset, "paddle hit");
        }
    }
}

/// Bounce `ball` off `paddle` if they are in contact.
///
/// Contact needs the ball centre within the paddle's vertical span and the
/// leading edge at or past the paddle's near face. The return angle depends
/// only on where the ball meets the paddle: flat off the centre, vertical
/// speed `|max_vel|` off either edge, heading away from the centre.
pub fn deflect(ball: &mut Ball, paddle: &Paddle) -> Option<PaddleHit> {
    if ball.pos.y < paddle.y || ball.pos.y > paddle.bottom() {
        return None;
    }
    let touching = match paddle.side {
        Side::Left => ball.pos.x - ball.radius <= paddle.x + paddle.width,
        Side::Right => ball.pos.x + ball.radius >= paddle.x,
    };
    if !touching {
        return None;
    }

    let half_height = paddle.height / 2.0;
    let relative = (ball.pos.y - paddle.center_y()) / half_height;

    ball.vel.x = -ball.vel.x;
    ball.vel.y = relative * ball.max_vel.abs();

    Some(PaddleHit {
        side: paddle.side,
        offset: relative.abs(),
    })
}
