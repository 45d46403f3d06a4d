use crate::mood::Mood;
use chrono::{DateTime, Local};

pub const DATE_LABEL_FORMAT: &str = "%b %-d · %-I:%M %p";

#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date_label: String,
    pub created_at: DateTime<Local>,
    pub mood: Option<Mood>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFilter {
    Emotion,
    Date,
    #[default]
    Keywords,
}

impl SearchFilter {
    pub const ALL: [SearchFilter; 3] = [SearchFilter::Emotion, SearchFilter::Date, SearchFilter::Keywords];

    pub fn label(self) -> &'static str {
        match self {
            SearchFilter::Emotion => "Emotion",
            SearchFilter::Date => "Date",
            SearchFilter::Keywords => "Keywords",
        }
    }

    pub fn next(self) -> SearchFilter {
        match self {
            SearchFilter::Emotion => SearchFilter::Date,
            SearchFilter::Date => SearchFilter::Keywords,
            SearchFilter::Keywords => SearchFilter::Emotion,
        }
    }
}

impl JournalEntry {
    pub fn new(
        id: String,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Local>,
        mood: Option<Mood>,
    ) -> Self {
        JournalEntry {
            id,
            title: title.into(),
            content: content.into(),
            date_label: date_label(&created_at),
            created_at,
            mood,
        }
    }

    pub fn mood_label(&self) -> &str {
        self.mood.map(Mood::label).unwrap_or("")
    }

    /// First line of the content, cut to `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> String {
        let first = self.content.lines().next().unwrap_or("");
        if first.chars().count() <= max_chars {
            return first.to_string();
        }
        let mut cut: String = first.chars().take(max_chars.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }

    /// `needle` must already be trimmed and lowercased.
    pub fn matches(&self, needle: &str, filter: SearchFilter) -> bool {
        if needle.is_empty() {
            return true;
        }
        let haystack = match filter {
            SearchFilter::Keywords => {
                format!("{} {} {}", self.title, self.content, self.mood_label())
            }
            SearchFilter::Emotion => self.mood_label().to_string(),
            SearchFilter::Date => self.date_label.clone(),
        };
        haystack.to_lowercase().contains(needle)
    }
}

pub fn date_label(at: &DateTime<Local>) -> String {
    at.format(DATE_LABEL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(content: &str, mood: Option<Mood>) -> JournalEntry {
        let at = Local.with_ymd_and_hms(2024, 11, 16, 21, 30, 0).unwrap();
        JournalEntry::new("1".into(), "Evening reflection", content, at, mood)
    }

    #[test]
    fn date_label_matches_display_format() {
        let e = entry("x", None);
        assert_eq!(e.date_label, "Nov 16 · 9:30 PM");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let e = entry("Walked in the park and breathed deeply 🌿\nsecond line", None);
        assert_eq!(e.preview(100), "Walked in the park and breathed deeply 🌿");
        assert_eq!(e.preview(7), "Walked…");
    }

    #[test]
    fn filters_restrict_the_haystack() {
        let e = entry("Felt grounded", Some(Mood::Calm));
        assert!(e.matches("calm", SearchFilter::Keywords));
        assert!(e.matches("calm", SearchFilter::Emotion));
        assert!(!e.matches("grounded", SearchFilter::Emotion));
        assert!(e.matches("nov 16", SearchFilter::Date));
        assert!(!e.matches("calm", SearchFilter::Date));
    }
}
