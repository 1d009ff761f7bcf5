//! Learning side of self-play Pong.
//!
//! Each [`Agent`] featurizes the arena from its own side, picks an action
//! epsilon-greedily against its [`QFunction`], and trains on single
//! transitions every tick plus a replayed batch after every match.

pub mod approximator;
pub mod config;
pub mod error;
pub mod features;
pub mod memory;
pub mod network;
pub mod policy;
pub mod trainer;

pub use approximator::*;
pub use config::*;
pub use error::*;
pub use features::*;
pub use memory::*;
pub use network::*;
pub use policy::*;
pub use trainer::*;
