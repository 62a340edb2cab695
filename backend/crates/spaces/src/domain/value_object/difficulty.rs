//! Difficulty Ranking Value Objects
//!
//! AI-derived difficulty classification for posts. Ranking arrives
//! asynchronously after post creation; until it lands (and forever if it
//! never does) posts keep the `Unranked`/score-0 defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum difficulty score the ranking service may assign
pub const MAX_DIFFICULTY_SCORE: i32 = 100;

/// Post difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum DifficultyLevel {
    /// Ranking not yet computed (or the ranking service failed)
    #[default]
    Unranked = 0,

    /// Basic recall or single-step question
    Easy = 1,

    /// Multi-step question within the covered material
    Medium = 2,

    /// Question requiring synthesis beyond the covered material
    Hard = 3,
}

impl DifficultyLevel {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unranked => "unranked",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Check if the ranking service has classified this post
    #[inline]
    pub const fn is_ranked(&self) -> bool {
        !matches!(self, Self::Unranked)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Unranked),
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "unranked" => Some(Self::Unranked),
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A complete ranking as delivered by the AI service
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyRanking {
    pub level: DifficultyLevel,
    /// Score in 0..=100
    pub score: i32,
    /// Topics the ranking service identified in the question
    pub knowledge_points: Vec<String>,
}

impl DifficultyRanking {
    /// Validate score bounds and build a ranking
    pub fn new(level: DifficultyLevel, score: i32, knowledge_points: Vec<String>) -> Option<Self> {
        if !(0..=MAX_DIFFICULTY_SCORE).contains(&score) {
            return None;
        }
        Some(Self {
            level,
            score,
            knowledge_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(DifficultyLevel::from_id(0), Some(DifficultyLevel::Unranked));
        assert_eq!(DifficultyLevel::from_id(1), Some(DifficultyLevel::Easy));
        assert_eq!(DifficultyLevel::from_id(2), Some(DifficultyLevel::Medium));
        assert_eq!(DifficultyLevel::from_id(3), Some(DifficultyLevel::Hard));
        assert_eq!(DifficultyLevel::from_id(42), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            DifficultyLevel::from_code("unranked"),
            Some(DifficultyLevel::Unranked)
        );
        assert_eq!(
            DifficultyLevel::from_code("easy"),
            Some(DifficultyLevel::Easy)
        );
        assert_eq!(
            DifficultyLevel::from_code("hard"),
            Some(DifficultyLevel::Hard)
        );
        assert_eq!(DifficultyLevel::from_code("extreme"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DifficultyLevel::Unranked.to_string(), "unranked");
        assert_eq!(DifficultyLevel::Medium.to_string(), "medium");
    }

    #[test]
    fn test_is_ranked() {
        assert!(!DifficultyLevel::Unranked.is_ranked());
        assert!(DifficultyLevel::Easy.is_ranked());
        assert!(DifficultyLevel::Hard.is_ranked());
    }

    #[test]
    fn test_default() {
        assert_eq!(DifficultyLevel::default(), DifficultyLevel::Unranked);
    }

    #[test]
    fn test_ranking_score_bounds() {
        assert!(DifficultyRanking::new(DifficultyLevel::Easy, 0, vec![]).is_some());
        assert!(DifficultyRanking::new(DifficultyLevel::Hard, 100, vec![]).is_some());
        assert!(DifficultyRanking::new(DifficultyLevel::Easy, -1, vec![]).is_none());
        assert!(DifficultyRanking::new(DifficultyLevel::Hard, 101, vec![]).is_none());
    }
}
