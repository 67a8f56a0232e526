//! Round scoring and session summaries.

use std::fmt;

/// Fraction-correct score of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    /// Questions answered exactly right.
    pub correct: usize,
    /// Questions asked in the round.
    pub total: usize,
}

impl RoundScore {
    /// Tally a round's outcomes, in the order they were asked.
    pub fn from_outcomes(outcomes: &[bool]) -> Self {
        Self {
            correct: outcomes.iter().filter(|&&ok| ok).count(),
            total: outcomes.len(),
        }
    }

    /// Score as a percentage. A round with no questions scores 0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn missed(&self) -> usize {
        self.total - self.correct
    }

    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

impl fmt::Display for RoundScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.2}%)",
            self.correct,
            self.total,
            self.percentage()
        )
    }
}

/// Scores of every round played in one session, first round first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: Vec<RoundScore>,
}

impl SessionSummary {
    /// Score of the first round, before any requiz.
    pub fn first_round(&self) -> Option<&RoundScore> {
        self.rounds.first()
    }

    /// Whether the last round played had no misses.
    pub fn finished_clean(&self) -> bool {
        self.rounds.last().is_some_and(RoundScore::is_perfect)
    }

    /// Total number of questions asked across all rounds.
    pub fn questions_asked(&self) -> usize {
        self.rounds.iter().map(|r| r.total).sum()
    }
}
