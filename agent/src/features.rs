use game_core::{Arena, Side, Snapshot};

pub const FEATURES: usize = 10;

/// Binary view of the arena from one paddle's point of view
pub type State = [f32; FEATURES];

/// Build the 10 indicators for `side`, each 0.0 or 1.0:
///
/// | idx | meaning                                           |
/// |-----|---------------------------------------------------|
/// | 0   | ball above the paddle's top edge                  |
/// | 1   | ball below the paddle's bottom edge               |
/// | 2   | ball more than half a paddle above the top edge   |
/// | 3   | ball more than half a paddle below the top edge   |
/// | 4   | ball in the left half                             |
/// | 5   | ball in the right half                            |
/// | 6   | ball moving right                                 |
/// | 7   | ball moving down                                  |
/// | 8   | opponent paddle lower than ours                   |
/// | 9   | opponent paddle level with or higher than ours    |
pub fn featurize(snapshot: &Snapshot, side: Side) -> State {
    let paddle = snapshot.paddle(side);
    let opponent = snapshot.paddle(side.opponent());
    let ball = &snapshot.ball;
    let half = paddle.height / 2.0;

    let ball_in_left = ball.pos.x < snapshot.arena_width / 2.0;
    let opponent_below = opponent.y > paddle.y;

    let flags = [
        ball.pos.y < paddle.y,
        ball.pos.y > paddle.bottom(),
        ball.pos.y < paddle.y - half,
        ball.pos.y > paddle.y + half,
        ball_in_left,
        !ball_in_left,
        ball.vel.x > 0.0,
        ball.vel.y > 0.0,
        opponent_below,
        !opponent_below,
    ];
    flags.map(|flag| if flag { 1.0 } else { 0.0 })
}

pub fn featurize_arena(arena: &Arena, side: Side) -> State {
    featurize(&arena.snapshot(), side)
}
