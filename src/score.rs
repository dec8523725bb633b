/// Session-wide win/loss counters. Owned by the session and passed by
/// reference into the engine; survives every "play again" and is only reset
/// by starting a new process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    wins: u32,
    losses: u32,
}

impl ScoreBoard {
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let score = ScoreBoard::default();
        assert_eq!(score.wins(), 0);
        assert_eq!(score.losses(), 0);
    }

    #[test]
    fn test_counters_accumulate_independently() {
        let mut score = ScoreBoard::default();
        score.add_win();
        score.add_win();
        score.add_loss();
        assert_eq!(score.wins(), 2);
        assert_eq!(score.losses(), 1);
    }
}
