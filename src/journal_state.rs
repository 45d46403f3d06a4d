use crate::journal_entry::{JournalEntry, SearchFilter};
use crate::mood::Mood;
use chrono::{DateTime, Duration, Local};

pub const NEW_ENTRY_TITLE: &str = "New entry";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JournalError {
    #[error("Entry cannot be saved without text")]
    EmptyText,
    #[error("no journal entry with id `{0}`")]
    NotFound(String),
}

/// Journal entries for the running process, newest first.
#[derive(Debug, Default)]
pub struct JournalState {
    entries: Vec<JournalEntry>,
}

impl JournalState {
    pub fn new() -> Self {
        JournalState {
            entries: Vec::new(),
        }
    }

    pub fn seeded(now: DateTime<Local>) -> Self {
        let seeds = [
            (
                "Evening reflection",
                "Today felt balanced. I had a few moments of stress but overall I feel calm and grounded.",
                Mood::Calm,
            ),
            (
                "Morning check-in",
                "Woke up a bit tired but hopeful. I am curious about how today will go.",
                Mood::Neutral,
            ),
            (
                "Connection",
                "Had a great conversation with a friend. Feeling connected 💙",
                Mood::Happy,
            ),
            (
                "Overwhelmed",
                "Today I felt overwhelmed but took time to meditate 🧘",
                Mood::Tired,
            ),
            (
                "Gratitude",
                "Grateful for a calm morning ☕",
                Mood::Calm,
            ),
        ];

        let entries = seeds
            .iter()
            .enumerate()
            .map(|(i, (title, content, mood))| {
                JournalEntry::new(
                    (i + 1).to_string(),
                    *title,
                    *content,
                    now - Duration::days(i as i64),
                    Some(*mood),
                )
            })
            .collect();

        JournalState { entries }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn add_entry(
        &mut self,
        text: &str,
        mood: Option<Mood>,
        now: DateTime<Local>,
    ) -> Result<&JournalEntry, JournalError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyText);
        }

        let id = self.fresh_id(&now);
        let entry = JournalEntry::new(id, NEW_ENTRY_TITLE, trimmed, now, mood);
        log::debug!("journal: add id={} mood={:?}", entry.id, entry.mood);
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    pub fn update_text(&mut self, id: &str, text: &str) -> Result<(), JournalError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyText);
        }
        let entry = self.get_mut(id)?;
        entry.content = trimmed.to_string();
        log::debug!("journal: update id={}", id);
        Ok(())
    }

    pub fn set_mood(&mut self, id: &str, mood: Option<Mood>) -> Result<(), JournalError> {
        let entry = self.get_mut(id)?;
        entry.mood = mood;
        log::debug!("journal: mood id={} mood={:?}", id, mood);
        Ok(())
    }

    pub fn delete_entry(&mut self, id: &str) -> Result<JournalEntry, JournalError> {
        let idx = self
            .position(id)
            .ok_or_else(|| JournalError::NotFound(id.to_string()))?;
        log::debug!("journal: delete id={}", id);
        Ok(self.entries.remove(idx))
    }

    pub fn search(&self, query: &str, filter: SearchFilter) -> Vec<&JournalEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.matches(&needle, filter))
            .collect()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut JournalEntry, JournalError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| JournalError::NotFound(id.to_string()))
    }

    fn fresh_id(&self, now: &DateTime<Local>) -> String {
        let mut millis = now.timestamp_millis();
        while self.get(&millis.to_string()).is_some() {
            millis += 1;
        }
        millis.to_string()
    }
}
