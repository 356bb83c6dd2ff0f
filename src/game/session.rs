//! Tallies across the rounds of one play session

use super::RoundStatus;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl SessionStats {
    /// Count a finished round; unfinished rounds are ignored
    pub fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won => {
                self.rounds_played += 1;
                self.rounds_won += 1;
            }
            RoundStatus::Lost => self.rounds_played += 1,
            RoundStatus::InProgress => {}
        }
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}
