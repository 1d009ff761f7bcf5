use std::fmt;

use game_core::{Side, StepOutcome};

/// Per-match results across a training run
#[derive(Debug, Default, Clone)]
pub struct MatchLog {
    accuracy: [Vec<u32>; 2],
    wins: [u32; 2],
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a terminal tick. Non-terminal outcomes are ignored.
    pub fn record(&mut self, outcome: &StepOutcome) -> Option<Side> {
        let winner = outcome.winner()?;
        self.wins[winner.index()] += 1;
        for side in Side::BOTH {
            self.accuracy[side.index()].push(outcome.accuracy(side));
        }
        Some(winner)
    }

    pub fn matches(&self) -> usize {
        self.accuracy[0].len()
    }

    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side.index()]
    }

    pub fn accuracy_history(&self, side: Side) -> &[u32] {
        &self.accuracy[side.index()]
    }

    /// Mean accuracy over the last `window` matches
    pub fn recent_accuracy(&self, side: Side, window: usize) -> f32 {
        let history = self.accuracy_history(side);
        let recent = &history[history.len().saturating_sub(window)..];
        if recent.is_empty() {
            return 0.0;
        }
        recent.iter().sum::<u32>() as f32 / recent.len() as f32
    }

    pub fn best_accuracy(&self, side: Side) -> u32 {
        self.accuracy_history(side).iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for MatchLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} matches", self.matches())?;
        for side in Side::BOTH {
            writeln!(
                f,
                "  {:<5} wins {:>4}  accuracy last10 {:>5.1}%  best {:>3}%",
                format!("{side:?}"),
                self.wins(side),
                self.recent_accuracy(side, 10),
                self.best_accuracy(side),
            )?;
        }
        Ok(())
    }
}
