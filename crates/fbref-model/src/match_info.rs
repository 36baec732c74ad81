//! Match-level metadata attached to every statistics row.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Home or away designation within one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a match from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Lose,
    Draw,
}

impl MatchResult {
    /// Derives the (home, away) result pair from the two final scores.
    ///
    /// Exactly one side wins and the other loses, or both draw.
    pub fn pair_from_scores(home_score: i64, away_score: i64) -> (MatchResult, MatchResult) {
        match home_score.cmp(&away_score) {
            Ordering::Greater => (MatchResult::Win, MatchResult::Lose),
            Ordering::Less => (MatchResult::Lose, MatchResult::Win),
            Ordering::Equal => (MatchResult::Draw, MatchResult::Draw),
        }
    }

    /// Returns the label written into the `Result` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Win => "Win",
            MatchResult::Lose => "Lose",
            MatchResult::Draw => "Draw",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Teams, results and kick-off text of one match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub home_team: String,
    pub away_team: String,
    pub home_result: MatchResult,
    pub away_result: MatchResult,
    /// Match time exactly as it appears in the page title.
    pub match_time_raw: String,
    /// Match time after the year-token cleanup.
    pub match_time: String,
}

impl MatchMetadata {
    /// `"{home} vs {away}"`, shared by both sides' rows.
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn result(&self, side: Side) -> MatchResult {
        match side {
            Side::Home => self.home_result,
            Side::Away => self.away_result,
        }
    }
}
