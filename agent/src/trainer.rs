use game_core::{Action, Arena, GameRng, Side};

use crate::{
    featurize_arena, AgentConfig, AgentError, EpsilonGreedy, ExplorationSchedule, LinearDecay,
    QFunction, QNet, ReplayMemory, State, Transition,
};

/// One learning paddle.
///
/// Owns its approximator, replay memory and random stream outright; two
/// agents in the same match share nothing.
pub struct Agent<Q, S = LinearDecay> {
    q: Q,
    policy: EpsilonGreedy<S>,
    memory: ReplayMemory,
    gamma: f32,
    batch_size: usize,
    episodes: u32,
    rng: GameRng,
}

impl Agent<QNet, LinearDecay> {
    /// Reference agent: a fresh `QNet` with linear epsilon decay
    pub fn from_config(config: &AgentConfig, seed: u64) -> Result<Self, AgentError> {
        config.validate()?;
        let q = QNet::new(config.hidden_size, config.learning_rate, seed);
        let schedule = LinearDecay::new(config.exploration_base);
        Ok(Self::new(q, schedule, config, seed.wrapping_add(1)))
    }
}

impl<Q: QFunction, S: ExplorationSchedule> Agent<Q, S> {
    pub fn new(q: Q, schedule: S, config: &AgentConfig, seed: u64) -> Self {
        Self {
            q,
            policy: EpsilonGreedy::new(schedule),
            memory: ReplayMemory::new(config.memory_capacity),
            gamma: config.gamma,
            batch_size: config.batch_size,
            episodes: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Featurize the arena from `side` and choose a move
    pub fn observe_and_act(&mut self, arena: &Arena, side: Side) -> (State, Action) {
        let state = featurize_arena(arena, side);
        let action = self.act(&state);
        (state, action)
    }

    pub fn act(&mut self, state: &State) -> Action {
        self.policy
            .select(&self.q, state, self.episodes, &mut self.rng.0)
    }

    /// Store the transition and take a short-memory training step on it
    pub fn apply_outcome(
        &mut self,
        state: State,
        action: Action,
        reward: f32,
        next_state: State,
        done: bool,
    ) -> Result<f32, AgentError> {
        let transition = Transition::new(state, action, reward, next_state, done);
        self.memory.push(transition);
        self.q.train_step(&[&transition], self.gamma)
    }

    /// Close out a match: count it and take a long-memory training step on
    /// a random batch of stored experience.
    pub fn end_episode(&mut self) -> Result<f32, AgentError> {
        self.episodes += 1;
        if self.memory.is_empty() {
            return Ok(0.0);
        }
        let batch = self.memory.sample(self.batch_size, &mut self.rng.0);
        let loss = self.q.train_step(&batch, self.gamma)?;
        tracing::debug!(
            episodes = self.episodes,
            batch = batch.len(),
            memory = self.memory.len(),
            epsilon = self.epsilon(),
            loss,
            "long-memory step"
        );
        Ok(loss)
    }

    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    /// Current exploration threshold on the 0..200 scale
    pub fn epsilon(&self) -> f32 {
        self.policy.epsilon(self.episodes)
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn memory(&self) -> &ReplayMemory {
        &self.memory
    }

    pub fn q(&self) -> &Q {
        &self.q
    }
}
