//! Self-play driver: two independent agents learn Pong against each other.

use std::path::PathBuf;
use std::time::Duration;

use agent::{featurize_arena, Agent, QNet};
use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Arena, Side};
use tracing_subscriber::EnvFilter;

mod settings;
mod stats;

use settings::Settings;
use stats::MatchLog;

#[derive(Parser, Debug)]
#[command(name = "pong-trainer", about = "Train two Q-learning paddles by self-play")]
struct Args {
    /// Matches to play; 0 runs until interrupted
    #[arg(long, default_value_t = 100)]
    matches: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// JSON file with `arena` and `agent` sections
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace ticks at the arena tick rate instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,
    #[arg(long)]
    hidden: Option<usize>,
    #[arg(long)]
    lr: Option<f32>,
    #[arg(long)]
    gamma: Option<f32>,
    #[arg(long)]
    batch_size: Option<usize>,
    #[arg(long)]
    memory: Option<usize>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let agent = &mut settings.agent;
        if let Some(hidden) = self.hidden {
            agent.hidden_size = hidden;
        }
        if let Some(lr) = self.lr {
            agent.learning_rate = lr;
        }
        if let Some(gamma) = self.gamma {
            agent.gamma = gamma;
        }
        if let Some(batch_size) = self.batch_size {
            agent.batch_size = batch_size;
        }
        if let Some(memory) = self.memory {
            agent.memory_capacity = memory;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let settings = args.settings()?;

    let mut arena = Arena::new(settings.arena.clone(), args.seed).context("building arena")?;
    // Distinct seeds keep the two learners from mirroring each other
    let mut left = Agent::from_config(&settings.agent, args.seed.wrapping_add(100))
        .context("building left agent")?;
    let mut right = Agent::from_config(&settings.agent, args.seed.wrapping_add(200))
        .context("building right agent")?;

    tracing::info!(
        matches = args.matches,
        seed = args.seed,
        hidden = settings.agent.hidden_size,
        gamma = settings.agent.gamma,
        "starting self-play"
    );

    let mut log = MatchLog::new();
    while args.matches == 0 || log.matches() < args.matches as usize {
        play_match(&mut arena, &mut left, &mut right, &mut log, args.realtime)?;
    }

    println!("{log}");
    Ok(())
}

/// Run ticks until the arena reports a finished match
fn play_match(
    arena: &mut Arena,
    left: &mut Agent<QNet>,
    right: &mut Agent<QNet>,
    log: &mut MatchLog,
    realtime: bool,
) -> Result<()> {
    loop {
        let (left_state, left_action) = left.observe_and_act(arena, Side::Left);
        let (right_state, right_action) = right.observe_and_act(arena, Side::Right);

        let outcome = arena.step(left_action, right_action);

        let left_next = featurize_arena(arena, Side::Left);
        let right_next = featurize_arena(arena, Side::Right);
        left.apply_outcome(
            left_state,
            left_action,
            outcome.reward_left,
            left_next,
            outcome.terminal,
        )
        .context("left short-memory step")?;
        right
            .apply_outcome(
                right_state,
                right_action,
                outcome.reward_right,
                right_next,
                outcome.terminal,
            )
            .context("right short-memory step")?;

        if realtime {
            std::thread::sleep(Duration::from_secs_f64(1.0 / arena.tick_rate() as f64));
        }

        if outcome.terminal {
            let winner = log.record(&outcome);
            let left_loss = left.end_episode().context("left long-memory step")?;
            let right_loss = right.end_episode().context("right long-memory step")?;
            tracing::info!(
                game = log.matches(),
                winner = ?winner,
                score = %format!("{}-{}", outcome.score_left, outcome.score_right),
                accuracy_left = outcome.accuracy_left,
                accuracy_right = outcome.accuracy_right,
                epsilon = left.epsilon(),
                left_loss,
                right_loss,
                "match over"
            );
            return Ok(());
        }
    }
}
