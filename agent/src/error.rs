use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("training loss is not finite: {0}")]
    NonFiniteLoss(f32),
    #[error("cannot train on an empty batch")]
    EmptyBatch,
    #[error("invalid agent config: {0}")]
    InvalidConfig(String),
}
