//! Derived views over the journal: writing streaks and the mood palette.

use crate::journal_entry::JournalEntry;
use crate::mood::Mood;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;

/// Bars on the palette screen never shrink below this width, in percent.
pub const MIN_BAR_PERCENT: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub entries_this_month: usize,
    pub last_entry: Option<NaiveDate>,
}

impl StreakStats {
    pub fn compute(entries: &[JournalEntry], today: NaiveDate) -> Self {
        let days: BTreeSet<NaiveDate> = entries
            .iter()
            .map(|e| e.created_at.date_naive())
            .collect();

        let entries_this_month = entries
            .iter()
            .map(|e| e.created_at.date_naive())
            .filter(|d| d.year() == today.year() && d.month() == today.month())
            .count();

        let mut longest = 0u32;
        let mut run = 0u32;
        let mut prev: Option<NaiveDate> = None;
        for day in &days {
            run = match prev {
                Some(p) if *day - p == Duration::days(1) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(*day);
        }

        // A streak survives until the end of the day after the last entry.
        let mut cursor = if days.contains(&today) {
            Some(today)
        } else {
            today.pred_opt().filter(|d| days.contains(d))
        };
        let mut current = 0u32;
        while let Some(day) = cursor.filter(|d| days.contains(d)) {
            current += 1;
            cursor = day.pred_opt();
        }

        StreakStats {
            current_streak: current,
            longest_streak: longest,
            entries_this_month,
            last_entry: days.iter().next_back().copied(),
        }
    }

    pub fn encouragement(&self) -> &'static str {
        match self.current_streak {
            0 => "Every streak starts with a single entry. Write a few lines today.",
            1..=2 => "A good start. Come back tomorrow to keep it going.",
            _ => "Keep going! You're building a positive habit. One entry at a time makes a difference.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    pub weight: f64,
}

impl MoodShare {
    pub fn bar_percent(&self) -> f64 {
        (self.weight * 100.0).max(MIN_BAR_PERCENT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodPalette {
    pub shares: Vec<MoodShare>,
    pub tagged: usize,
}

impl MoodPalette {
    pub fn compute(entries: &[JournalEntry]) -> Self {
        let tagged = entries.iter().filter(|e| e.mood.is_some()).count();
        let shares = Mood::ALL
            .iter()
            .map(|&mood| {
                let count = entries.iter().filter(|e| e.mood == Some(mood)).count();
                let weight = if tagged == 0 {
                    0.0
                } else {
                    count as f64 / tagged as f64
                };
                MoodShare {
                    mood,
                    count,
                    weight,
                }
            })
            .collect();
        MoodPalette { shares, tagged }
    }

    /// Moods sorted by frequency, ties in palette order, zero counts dropped.
    pub fn dominant(&self) -> Vec<Mood> {
        let mut ranked: Vec<&MoodShare> = self.shares.iter().filter(|s| s.count > 0).collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.into_iter().map(|s| s.mood).collect()
    }

    pub fn summary(&self) -> String {
        let dominant = self.dominant();
        match dominant.as_slice() {
            [] => "Tag a few entries with a mood to see your palette take shape.".to_string(),
            [only] => format!(
                "Your last {} entries expressed mostly {} emotions.",
                self.tagged,
                only.label().to_lowercase()
            ),
            [first, second, rest @ ..] => {
                let mut line = format!(
                    "Your last {} entries expressed mostly {} and {} emotions",
                    self.tagged,
                    first.label().to_lowercase(),
                    second.label().to_lowercase()
                );
                if !rest.is_empty() {
                    let others: Vec<String> =
                        rest.iter().map(|m| m.label().to_lowercase()).collect();
                    line.push_str(&format!(", with moments of {}", others.join(" and ")));
                }
                line.push('.');
                line
            }
        }
    }
}
