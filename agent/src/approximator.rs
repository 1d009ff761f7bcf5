use game_core::Action;

use crate::{AgentError, State, Transition};

/// Per-action value estimates for a state
pub type QValues = [f32; Action::COUNT];

/// The function approximator an agent learns with.
///
/// `predict` must not change any state; `train_step` is the only mutating
/// call. Implementations apply the one-step target from [`td_target`] to
/// every transition in the batch.
pub trait QFunction {
    fn predict(&self, state: &State) -> QValues;

    /// One parameter update over `batch`. Returns the mean squared error
    /// before the update.
    fn train_step(&mut self, batch: &[&Transition], gamma: f32) -> Result<f32, AgentError>;
}

/// `reward` on a terminal transition, otherwise
/// `reward + gamma * max_a' Q(next_state, a')`.
pub fn td_target(q: &impl QFunction, transition: &Transition, gamma: f32) -> f32 {
    if transition.done {
        return transition.reward;
    }
    let next_best = q
        .predict(&transition.next_state)
        .into_iter()
        .fold(f32::NEG_INFINITY, f32::max);
    transition.reward + gamma * next_best
}
