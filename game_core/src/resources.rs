use crate::components::{Ball, Paddle, Side};

/// Per-side counter, used for both points and successful paddle hits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// A paddle intercepting the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    pub side: Side,
    /// Distance of the contact point from the paddle centre, in half-heights
    /// (0 at the centre, 1 at either edge).
    pub offset: f32,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hit: Option<PaddleHit>,
    /// Side whose goal line the ball crossed
    pub goal_conceded: Option<Side>,
    pub match_winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.paddle_hit = None;
        self.goal_conceded = None;
        self.match_winner = None;
    }
}

/// Result of one `Arena::step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub reward_left: f32,
    pub reward_right: f32,
    pub terminal: bool,
    pub score_left: u32,
    pub score_right: u32,
    pub accuracy_left: u32,  // percent
    pub accuracy_right: u32, // percent
}

impl StepOutcome {
    pub fn reward(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.reward_left,
            Side::Right => self.reward_right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    pub fn accuracy(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.accuracy_left,
            Side::Right => self.accuracy_right,
        }
    }

    /// Side holding the higher score on a terminal tick
    pub fn winner(&self) -> Option<Side> {
        if !self.terminal {
            return None;
        }
        match self.score_left.cmp(&self.score_right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Read-only copy of everything a renderer or featurizer needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub arena_width: f32,
    pub arena_height: f32,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub hits: Score,
}

impl Snapshot {
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.get(Side::Left), 2);
        assert_eq!(score.get(Side::Right), 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..6 {
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(7), None, "No winner below threshold");
        score.increment(Side::Right);
        assert_eq!(score.has_winner(7), Some(Side::Right));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.paddle_hit = Some(PaddleHit {
            side: Side::Left,
            offset: 0.5,
        });
        events.goal_conceded = Some(Side::Right);
        events.match_winner = Some(Side::Left);

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_outcome_winner_only_on_terminal() {
        let mut outcome = StepOutcome {
            reward_left: 0.0,
            reward_right: -20.0,
            terminal: false,
            score_left: 7,
            score_right: 3,
            accuracy_left: 0,
            accuracy_right: 0,
        };
        assert_eq!(outcome.winner(), None);
        outcome.terminal = true;
        assert_eq!(outcome.winner(), Some(Side::Left));
    }
}
