//! Deterministic Pong physics for two learning agents.
//!
//! The [`Arena`] owns both paddles and the ball in a `hecs` world and
//! advances them one fixed tick at a time, returning shaped rewards for
//! each side.

pub mod arena;
pub mod components;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use params::*;
pub use resources::*;

use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
