use std::collections::VecDeque;

use game_core::Action;
use rand::Rng;

use crate::State;

/// One recorded step of experience
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: State,
    pub action: [u8; Action::COUNT], // one-hot
    pub reward: f32,
    pub next_state: State,
    pub done: bool,
}

impl Transition {
    pub fn new(state: State, action: Action, reward: f32, next_state: State, done: bool) -> Self {
        Self {
            state,
            action: action.one_hot(),
            reward,
            next_state,
            done,
        }
    }

    pub fn action(&self) -> Action {
        Action::from_one_hot(self.action)
    }
}

/// Bounded FIFO of transitions.
///
/// Once full, every push evicts exactly the oldest entry. Stored entries are
/// never modified.
#[derive(Debug, Clone)]
pub struct ReplayMemory {
    buffer: VecDeque<Transition>,
    capacity: usize,
}

impl ReplayMemory {
    pub const DEFAULT_CAPACITY: usize = 100_000;

    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn push(&mut self, transition: Transition) {
        if self.capacity == 0 {
            return;
        }
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(transition);
    }

    /// Up to `n` distinct transitions chosen uniformly at random.
    ///
    /// When `n` covers the whole memory every entry is returned, oldest
    /// first.
    pub fn sample(&self, n: usize, rng: &mut impl Rng) -> Vec<&Transition> {
        if self.buffer.len() <= n {
            return self.buffer.iter().collect();
        }
        rand::seq::index::sample(rng, self.buffer.len(), n)
            .into_iter()
            .map(|i| &self.buffer[i])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.buffer.iter()
    }
}

impl Default for ReplayMemory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn transition(tag: f32) -> Transition {
        Transition::new([tag; 10], Action::Up, tag, [tag; 10], false)
    }

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_push_evicts_oldest_at_capacity() {
        let mut memory = ReplayMemory::new(3);
        for i in 0..5 {
            memory.push(transition(i as f32));
            assert!(memory.len() <= 3);
        }
        let rewards: Vec<f32> = memory.iter().map(|t| t.reward).collect();
        assert_eq!(rewards, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_sample_small_memory_returns_everything() {
        let mut memory = ReplayMemory::new(10);
        for i in 0..4 {
            memory.push(transition(i as f32));
        }
        let batch = memory.sample(8, &mut rng());
        let rewards: Vec<f32> = batch.iter().map(|t| t.reward).collect();
        assert_eq!(rewards, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sample_is_without_replacement() {
        let mut memory = ReplayMemory::new(100);
        for i in 0..100 {
            memory.push(transition(i as f32));
        }
        let batch = memory.sample(40, &mut rng());
        assert_eq!(batch.len(), 40);
        let distinct: HashSet<u32> = batch.iter().map(|t| t.reward as u32).collect();
        assert_eq!(distinct.len(), 40);
    }

    #[test]
    fn test_sample_does_not_mutate() {
        let mut memory = ReplayMemory::new(20);
        for i in 0..20 {
            memory.push(transition(i as f32));
        }
        let before: Vec<Transition> = memory.iter().copied().collect();
        let _ = memory.sample(5, &mut rng());
        let after: Vec<Transition> = memory.iter().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut memory = ReplayMemory::new(0);
        memory.push(transition(1.0));
        assert!(memory.is_empty());
        assert!(memory.sample(4, &mut rng()).is_empty());
    }

    #[test]
    fn test_transition_keeps_one_hot_action() {
        let t = Transition::new([0.0; 10], Action::Down, 1.5, [1.0; 10], true);
        assert_eq!(t.action, [0, 0, 1]);
        assert_eq!(t.action(), Action::Down);
    }
}
