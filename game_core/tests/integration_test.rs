use game_core::*;
use glam::Vec2;
use rand::{Rng, SeedableRng};

fn arena_with(config: Config) -> Arena {
    Arena::new(config, 2024).unwrap()
}

fn random_action(rng: &mut rand::rngs::StdRng) -> Action {
    Action::from_index(rng.gen_range(0..Action::COUNT))
}

#[test]
fn test_center_hit_worked_example() {
    // 800x600 arena, paddle height 100 at y=250, ball served flat from the
    // centre toward the left paddle.
    let mut arena = arena_with(Config::new());
    arena.place_paddle(Side::Left, 250.0);
    arena.place_ball(Ball::new(
        Vec2::new(400.0, 300.0),
        Vec2::new(-10.0, 0.0),
        10.0,
        -10.0,
    ));

    let mut contact = None;
    for _ in 0..100 {
        let outcome = arena.step(Action::Stay, Action::Stay);
        if arena.events().paddle_hit.is_some() {
            contact = Some(outcome);
            break;
        }
    }

    let outcome = contact.expect("ball should reach the left paddle");
    assert_eq!(outcome.reward_left, 3.0);
    assert_eq!(outcome.reward_right, 0.0);
    let ball = arena.snapshot().ball;
    assert!(ball.vel.x > 0.0, "x velocity should flip");
    assert_eq!(ball.vel.y, 0.0, "centre hit leaves flat");
    assert_eq!(arena.hits().left, 1);
}

#[test]
fn test_edge_hit_reward_approaches_seven() {
    let mut arena = arena_with(Config::new());
    arena.place_paddle(Side::Right, 250.0);
    // Lands just inside the bottom edge after one tick
    arena.place_ball(Ball::new(
        Vec2::new(750.0, 349.5),
        Vec2::new(10.0, 0.0),
        10.0,
        10.0,
    ));

    let outcome = arena.step(Action::Stay, Action::Stay);

    assert!(outcome.reward_right > 6.9 && outcome.reward_right <= 7.0);
    assert!(arena.snapshot().ball.vel.y > 9.0);
}

#[test]
fn test_left_goal_scores_for_right() {
    let mut arena = arena_with(Config::new());
    arena.place_paddle(Side::Left, 0.0);
    arena.place_ball(Ball::new(
        Vec2::new(25.0, 500.0),
        Vec2::new(-10.0, 0.0),
        10.0,
        -10.0,
    ));

    let outcome = arena.step(Action::Stay, Action::Stay);

    assert_eq!(outcome.score_right, 1);
    assert_eq!(outcome.score_left, 0);
    assert_eq!(outcome.reward_left, Params::MISS_PENALTY);
    assert_eq!(outcome.reward_right, 0.0);
    assert!(!outcome.terminal);

    // Point reset only: ball and paddles back in the middle, score kept
    let snap = arena.snapshot();
    assert_eq!(snap.ball.pos, arena.config().ball_spawn());
    assert_eq!(snap.left.y, arena.config().paddle_spawn_y());
    assert_eq!(snap.score.right, 1);
}

#[test]
fn test_match_end_penalises_loser_and_resets() {
    let config = Config {
        winning_score: 1,
        ..Config::default()
    };
    let mut arena = arena_with(config);
    arena.place_paddle(Side::Right, 0.0);
    arena.place_ball(Ball::new(
        Vec2::new(775.0, 500.0),
        Vec2::new(10.0, 0.0),
        10.0,
        10.0,
    ));

    let outcome = arena.step(Action::Stay, Action::Stay);

    assert!(outcome.terminal);
    assert_eq!(outcome.score_left, 1, "final score is reported");
    assert_eq!(outcome.reward_right, Params::LOSS_PENALTY);
    assert_eq!(outcome.winner(), Some(Side::Left));
    assert_eq!(arena.events().match_winner, Some(Side::Left));

    let snap = arena.snapshot();
    assert_eq!(snap.score, Score::new(), "scores read zero after the match");
    assert_eq!(snap.hits, Score::new());
}

#[test]
fn test_accuracy_reported_per_side() {
    let mut arena = arena_with(Config::new());
    // Left returns one ball...
    arena.place_paddle(Side::Left, 250.0);
    arena.place_ball(Ball::new(
        Vec2::new(50.0, 300.0),
        Vec2::new(-10.0, 0.0),
        10.0,
        -10.0,
    ));
    let outcome = arena.step(Action::Stay, Action::Stay);
    assert_eq!(outcome.accuracy_left, 100);

    // ...then concedes one
    arena.place_paddle(Side::Left, 0.0);
    arena.place_ball(Ball::new(
        Vec2::new(25.0, 500.0),
        Vec2::new(-10.0, 0.0),
        10.0,
        -10.0,
    ));
    let outcome = arena.step(Action::Stay, Action::Stay);
    assert_eq!(outcome.accuracy_left, 50);
    assert_eq!(outcome.accuracy_right, 0);
}

#[test]
fn test_paddles_stay_in_bounds_under_random_play() {
    let mut arena = arena_with(Config::new());
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let max_y = arena.config().paddle_max_y();

    for _ in 0..20_000 {
        arena.step(random_action(&mut rng), random_action(&mut rng));
        let snap = arena.snapshot();
        for side in Side::BOTH {
            let y = snap.paddle(side).y;
            assert!((0.0..=max_y).contains(&y), "paddle {side:?} left bounds: {y}");
        }
    }
}

#[test]
fn test_ball_stays_within_one_step_of_walls() {
    let mut arena = arena_with(Config::new());
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);
    let height = arena.config().arena_height;
    let step = arena.config().ball_max_speed + 1e-3;

    for _ in 0..20_000 {
        arena.step(random_action(&mut rng), random_action(&mut rng));
        let y = arena.snapshot().ball.pos.y;
        assert!(y >= -step && y <= height + step, "ball escaped vertically: {y}");
    }
}

#[test]
fn test_tallies_never_decrease_within_a_match() {
    let mut arena = arena_with(Config::new());
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let mut last = arena.snapshot();

    for _ in 0..20_000 {
        let outcome = arena.step(random_action(&mut rng), random_action(&mut rng));
        let snap = arena.snapshot();
        if outcome.terminal {
            assert_eq!(snap.score, Score::new());
        } else {
            for side in Side::BOTH {
                assert!(snap.score.get(side) >= last.score.get(side));
                assert!(snap.hits.get(side) >= last.hits.get(side));
            }
        }
        last = snap;
    }
}

#[test]
fn test_same_seed_same_match() {
    let mut a = arena_with(Config::new());
    let mut b = arena_with(Config::new());
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);

    for _ in 0..5_000 {
        let (left, right) = (random_action(&mut rng), random_action(&mut rng));
        assert_eq!(a.step(left, right), b.step(left, right));
    }
}

#[test]
fn test_malformed_action_does_not_move_paddle() {
    let mut arena = arena_with(Config::new());
    let before = arena.snapshot().left.y;
    arena.step(Action::from_one_hot([1, 1, 0]), Action::Stay);
    assert_eq!(arena.snapshot().left.y, before);
}
