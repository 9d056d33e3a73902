//! Mental health support: daily affirmation, mood check-in, self-care tips.

use rand::Rng;

use crate::domain::app_state::{MoodEntry, MoodLevel, MoodLog, MoodTrend};

/// A short self-care activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfCareTip {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

pub static SELF_CARE_TIPS: [SelfCareTip; 5] = [
    SelfCareTip {
        id: "breathing",
        title: "Deep Breathing",
        description: "Practice 4-7-8 breathing: Inhale for 4 seconds, hold for 7, exhale for 8. Repeat 4 times.",
        duration: "5 min",
    },
    SelfCareTip {
        id: "journaling",
        title: "Gratitude Journaling",
        description: "Write down 3 things you are grateful for today. Focus on small moments of joy.",
        duration: "10 min",
    },
    SelfCareTip {
        id: "music",
        title: "Mood-Lifting Playlist",
        description: "Listen to uplifting music. Music can significantly impact your mood and reduce stress.",
        duration: "15 min",
    },
    SelfCareTip {
        id: "tea",
        title: "Calming Tea Ritual",
        description: "Brew a cup of chamomile or green tea. Take time to enjoy each sip mindfully.",
        duration: "10 min",
    },
    SelfCareTip {
        id: "stretch",
        title: "Gentle Stretching",
        description: "Do some light stretches to release tension. Focus on your neck, shoulders, and back.",
        duration: "10 min",
    },
];

pub static AFFIRMATIONS: [&str; 6] = [
    "I am doing my best, and that is enough.",
    "My body is working hard for me every day.",
    "I deserve compassion and kindness from myself.",
    "Progress, not perfection, is my goal.",
    "I am more than my diagnosis.",
    "Today I choose to focus on what I can control.",
];

pub const SUPPORT_NOTE: &str = "If you are experiencing severe anxiety or depression, please reach out to a mental health professional. You are not alone in this journey.";

/// Entries shown in the recent mood strip.
pub const MOOD_HISTORY_LEN: usize = 7;

/// Badge text for a mood trend.
pub fn trend_label(trend: MoodTrend) -> &'static str {
    match trend {
        MoodTrend::Up => "Improving",
        MoodTrend::Down => "Needs attention",
        MoodTrend::Neutral => "Stable",
    }
}

/// The most recent entries, newest first.
pub fn recent_moods(log: &MoodLog) -> &[MoodEntry] {
    let entries = log.entries();
    &entries[..entries.len().min(MOOD_HISTORY_LEN)]
}

/// One visit to the mental health screen.
///
/// The affirmation is drawn once when the visit starts and stays fixed
/// until the next visit.
#[derive(Debug, Clone)]
pub struct MentalHealthVisit {
    affirmation: usize,
    selected_mood: Option<MoodLevel>,
    note: String,
}

impl MentalHealthVisit {
    /// Starts a visit, drawing the affirmation from `rng`.
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_affirmation(rng.gen_range(0..AFFIRMATIONS.len()))
    }

    /// Starts a visit showing the affirmation at `index` (wrapped).
    pub fn with_affirmation(index: usize) -> Self {
        Self {
            affirmation: index % AFFIRMATIONS.len(),
            selected_mood: None,
            note: String::new(),
        }
    }

    pub fn affirmation(&self) -> &'static str {
        AFFIRMATIONS[self.affirmation]
    }

    pub fn selected_mood(&self) -> Option<MoodLevel> {
        self.selected_mood
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn select_mood(&mut self, mood: MoodLevel) {
        self.selected_mood = Some(mood);
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Builds today's entry and resets the form.
    ///
    /// Returns `None` while no mood is selected. The caller hands the entry
    /// to `AppStore::add_mood_entry`.
    pub fn submit(&mut self) -> Option<MoodEntry> {
        let mood = self.selected_mood.take()?;
        let note = std::mem::take(&mut self.note);
        Some(MoodEntry::today(mood, note))
    }
}
