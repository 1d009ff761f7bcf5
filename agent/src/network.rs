// Reference Q-network: FEATURES -> hidden (ReLU) -> one output per action,
// trained with plain SGD on the squared TD error of the action taken.
//
//   state[10] --W1,b1--> relu(h)[hidden] --W2,b2--> q[3]
//
// Only the taken action's output receives gradient; the other two outputs
// are left where they are, as if their targets equalled their predictions.

use game_core::{Action, GameRng};
use rand::Rng;

use crate::{td_target, AgentError, QFunction, QValues, State, Transition, FEATURES};

#[derive(Debug, Clone)]
pub struct QNet {
    hidden: usize,
    learning_rate: f32,
    w1: Vec<[f32; FEATURES]>, // [hidden]
    b1: Vec<f32>,             // [hidden]
    w2: [Vec<f32>; Action::COUNT], // [action][hidden]
    b2: QValues,
}

/// Gradient accumulator with the same shape as the network
struct Gradients {
    w1: Vec<[f32; FEATURES]>,
    b1: Vec<f32>,
    w2: [Vec<f32>; Action::COUNT],
    b2: QValues,
}

impl Gradients {
    fn zeros(hidden: usize) -> Self {
        Self {
            w1: vec![[0.0; FEATURES]; hidden],
            b1: vec![0.0; hidden],
            w2: std::array::from_fn(|_| vec![0.0; hidden]),
            b2: [0.0; Action::COUNT],
        }
    }
}

impl QNet {
    pub const DEFAULT_HIDDEN: usize = 256;
    pub const DEFAULT_LEARNING_RATE: f32 = 0.001;

    /// Weights start uniform in `±1/sqrt(fan_in)`.
    pub fn new(hidden: usize, learning_rate: f32, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let bound1 = 1.0 / (FEATURES as f32).sqrt();
        let bound2 = 1.0 / (hidden.max(1) as f32).sqrt();

        let w1 = (0..hidden)
            .map(|_| std::array::from_fn(|_| rng.0.gen_range(-bound1..=bound1)))
            .collect();
        let b1 = (0..hidden)
            .map(|_| rng.0.gen_range(-bound1..=bound1))
            .collect();
        let w2 = std::array::from_fn(|_| {
            (0..hidden)
                .map(|_| rng.0.gen_range(-bound2..=bound2))
                .collect()
        });
        let b2 = std::array::from_fn(|_| rng.0.gen_range(-bound2..=bound2));

        Self {
            hidden,
            learning_rate,
            w1,
            b1,
            w2,
            b2,
        }
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn hidden_activations(&self, state: &State) -> Vec<f32> {
        self.w1
            .iter()
            .zip(&self.b1)
            .map(|(row, bias)| {
                let z: f32 = row.iter().zip(state).map(|(w, x)| w * x).sum::<f32>() + bias;
                z.max(0.0)
            })
            .collect()
    }

    fn output(&self, activations: &[f32]) -> QValues {
        std::array::from_fn(|a| {
            self.w2[a]
                .iter()
                .zip(activations)
                .map(|(w, h)| w * h)
                .sum::<f32>()
                + self.b2[a]
        })
    }

    fn apply(&mut self, grads: &Gradients) {
        let lr = self.learning_rate;
        for (row, grad_row) in self.w1.iter_mut().zip(&grads.w1) {
            for (w, g) in row.iter_mut().zip(grad_row) {
                *w -= lr * g;
            }
        }
        for (b, g) in self.b1.iter_mut().zip(&grads.b1) {
            *b -= lr * g;
        }
        for (row, grad_row) in self.w2.iter_mut().zip(&grads.w2) {
            for (w, g) in row.iter_mut().zip(grad_row) {
                *w -= lr * g;
            }
        }
        for (b, g) in self.b2.iter_mut().zip(&grads.b2) {
            *b -= lr * g;
        }
    }
}

impl Default for QNet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HIDDEN, Self::DEFAULT_LEARNING_RATE, 0)
    }
}

impl QFunction for QNet {
    fn predict(&self, state: &State) -> QValues {
        self.output(&self.hidden_activations(state))
    }

    fn train_step(&mut self, batch: &[&Transition], gamma: f32) -> Result<f32, AgentError> {
        if batch.is_empty() {
            return Err(AgentError::EmptyBatch);
        }

        // Targets come from the pre-update network
        let targets: Vec<f32> = batch.iter().map(|t| td_target(&*self, t, gamma)).collect();

        let scale = 2.0 / batch.len() as f32;
        let mut grads = Gradients::zeros(self.hidden);
        let mut loss = 0.0;

        for (transition, target) in batch.iter().zip(&targets) {
            let activations = self.hidden_activations(&transition.state);
            let q = self.output(&activations);
            let a = transition.action().index();
            let error = q[a] - target;
            loss += error * error;

            let d_out = scale * error;
            grads.b2[a] += d_out;
            for (j, h) in activations.iter().enumerate() {
                grads.w2[a][j] += d_out * h;
                if *h > 0.0 {
                    let d_hidden = d_out * self.w2[a][j];
                    grads.b1[j] += d_hidden;
                    for (g, x) in grads.w1[j].iter_mut().zip(&transition.state) {
                        *g += d_hidden * x;
                    }
                }
            }
        }

        let loss = loss / batch.len() as f32;
        if !loss.is_finite() {
            return Err(AgentError::NonFiniteLoss(loss));
        }
        self.apply(&grads);
        Ok(loss)
    }
}
