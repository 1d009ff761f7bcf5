use game_core::Action;
use rand::Rng;

use crate::{QFunction, QValues, State};

/// Exploration draws are made on `0..EXPLORATION_SCALE`; an epsilon of 30
/// means a 30/200 chance of a random move.
pub const EXPLORATION_SCALE: u32 = 200;

/// Maps the number of finished episodes to an exploration threshold on the
/// `0..EXPLORATION_SCALE` scale.
pub trait ExplorationSchedule {
    fn epsilon(&self, episodes: u32) -> f32;
}

impl<F> ExplorationSchedule for F
where
    F: Fn(u32) -> f32,
{
    fn epsilon(&self, episodes: u32) -> f32 {
        self(episodes)
    }
}

/// `max(0, base - episodes)`: exploration fades out after `base` matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDecay {
    pub base: f32,
}

impl LinearDecay {
    pub const DEFAULT_BASE: f32 = 30.0;

    pub fn new(base: f32) -> Self {
        Self { base }
    }
}

impl Default for LinearDecay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }
}

impl ExplorationSchedule for LinearDecay {
    fn epsilon(&self, episodes: u32) -> f32 {
        (self.base - episodes as f32).max(0.0)
    }
}

/// Random move with probability `epsilon / EXPLORATION_SCALE`, otherwise the
/// approximator's best-scoring move.
#[derive(Debug, Clone, Default)]
pub struct EpsilonGreedy<S> {
    schedule: S,
}

impl<S: ExplorationSchedule> EpsilonGreedy<S> {
    pub fn new(schedule: S) -> Self {
        Self { schedule }
    }

    pub fn epsilon(&self, episodes: u32) -> f32 {
        self.schedule.epsilon(episodes)
    }

    pub fn select(
        &self,
        q: &impl QFunction,
        state: &State,
        episodes: u32,
        rng: &mut impl Rng,
    ) -> Action {
        let draw = rng.gen_range(0..EXPLORATION_SCALE) as f32;
        if draw < self.epsilon(episodes) {
            Action::from_index(rng.gen_range(0..Action::COUNT))
        } else {
            Action::from_index(argmax(&q.predict(state)))
        }
    }
}

/// Index of the largest score; ties go to the first. NaNs are skipped.
pub fn argmax(values: &QValues) -> usize {
    let mut best: Option<(usize, f32)> = None;
    for (i, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgentError, Transition};
    use rand::SeedableRng;

    struct Fixed(QValues);

    impl QFunction for Fixed {
        fn predict(&self, _state: &State) -> QValues {
            self.0
        }

        fn train_step(&mut self, _batch: &[&Transition], _gamma: f32) -> Result<f32, AgentError> {
            Ok(0.0)
        }
    }

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(17)
    }

    #[test]
    fn test_linear_decay_bottoms_out() {
        let schedule = LinearDecay::default();
        assert_eq!(schedule.epsilon(0), 30.0);
        assert_eq!(schedule.epsilon(10), 20.0);
        assert_eq!(schedule.epsilon(30), 0.0);
        assert_eq!(schedule.epsilon(500), 0.0);
    }

    #[test]
    fn test_closure_schedule() {
        let halving = |episodes: u32| 200.0 / 2f32.powi(episodes as i32);
        assert_eq!(halving.epsilon(0), 200.0);
        assert_eq!(halving.epsilon(2), 50.0);
    }

    #[test]
    fn test_argmax_first_tie_wins() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0]), 1);
        assert_eq!(argmax(&[2.0, 2.0, 2.0]), 0);
        assert_eq!(argmax(&[-1.0, -5.0, 0.5]), 2);
        assert_eq!(argmax(&[f32::NAN, -1.0, -2.0]), 1);
        assert_eq!(argmax(&[f32::NAN; 3]), 0);
    }

    #[test]
    fn test_greedy_once_exploration_is_spent() {
        let policy = EpsilonGreedy::new(LinearDecay::default());
        let q = Fixed([0.0, 0.0, 1.0]);
        let mut rng = rng();
        for _ in 0..500 {
            assert_eq!(policy.select(&q, &[0.0; 10], 30, &mut rng), Action::Down);
        }
    }

    #[test]
    fn test_full_exploration_covers_every_action() {
        let policy = EpsilonGreedy::new(|_episodes: u32| EXPLORATION_SCALE as f32);
        let q = Fixed([0.0, 0.0, 1.0]);
        let mut rng = rng();
        let mut seen = [false; Action::COUNT];
        for _ in 0..300 {
            seen[policy.select(&q, &[0.0; 10], 0, &mut rng).index()] = true;
        }
        assert_eq!(seen, [true; Action::COUNT]);
    }
}
