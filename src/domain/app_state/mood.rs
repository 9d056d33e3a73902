//! Mood log: append-only, newest first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// A mood rating on the 1 (struggling) to 5 (great) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a MoodLevel, returning error if outside 1–5.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "mood",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Struggling",
            2 => "Low",
            3 => "Okay",
            4 => "Good",
            _ => "Great",
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One mood submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub mood: MoodLevel,
    pub note: String,
}

impl MoodEntry {
    pub fn new(date: impl Into<String>, mood: MoodLevel, note: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            mood,
            note: note.into(),
        }
    }

    /// Entry dated today, as the mood check-in form creates it.
    pub fn today(mood: MoodLevel, note: impl Into<String>) -> Self {
        Self::new(Timestamp::now().to_short_date(), mood, note)
    }
}

/// Direction of recent moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Up,
    Down,
    Neutral,
}

/// Number of recent entries the trend averages over.
const TREND_WINDOW: usize = 3;

/// Ordered mood history, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry. No deduplication, no cap.
    pub fn add(&mut self, entry: MoodEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Trend over the three most recent entries.
    ///
    /// Fewer than two entries is neutral. Otherwise an average of at least 4
    /// is up and at most 2 is down.
    pub fn trend(&self) -> MoodTrend {
        if self.entries.len() < 2 {
            return MoodTrend::Neutral;
        }
        let recent: Vec<u32> = self
            .entries
            .iter()
            .take(TREND_WINDOW)
            .map(|e| u32::from(e.mood.value()))
            .collect();
        let sum: u32 = recent.iter().sum();
        let count = recent.len() as u32;

        // avg >= 4  <=>  sum >= 4 * count
        if sum >= 4 * count {
            MoodTrend::Up
        } else if sum <= 2 * count {
            MoodTrend::Down
        } else {
            MoodTrend::Neutral
        }
    }
}
