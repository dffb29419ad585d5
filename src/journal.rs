use crate::models::{Analysis, JournalEntry, RemoteEntry};
use crate::mood::mood_color;
use chrono::{DateTime, Local, NaiveDateTime};
use tracing::warn;

pub const MIN_WORDS: usize = 5;
pub const RECOMMENDED_WORDS: usize = 10;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

pub fn can_submit(text: &str) -> bool {
    word_count(text) >= MIN_WORDS
}

#[derive(Debug, Default)]
pub struct JournalHistory {
    entries: Vec<JournalEntry>,
}

impl JournalHistory {
    pub fn push_front(&mut self, entry: JournalEntry) {
        self.entries.insert(0, entry);
    }

    pub fn replace_all(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn list(&self) -> Vec<JournalEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn entry_from_analysis(analysis: Analysis, journal_text: String, now: DateTime<Local>) -> JournalEntry {
    let id = analysis
        .id
        .map(|id| id.into_string())
        .unwrap_or_else(|| now.timestamp_millis().to_string());
    let timestamp = display_timestamp(analysis.created_at.as_deref(), now);

    JournalEntry {
        id,
        mood_color: mood_color(&analysis.mood),
        mood: analysis.mood,
        summary: analysis.summary,
        reflection: analysis.reflection,
        timestamp,
        journal_text,
    }
}

pub fn entry_from_remote(entry: RemoteEntry, now: DateTime<Local>) -> JournalEntry {
    JournalEntry {
        id: entry.id.into_string(),
        mood_color: mood_color(&entry.mood),
        timestamp: display_timestamp(entry.created_at.as_deref(), now),
        mood: entry.mood,
        summary: entry.summary,
        reflection: entry.reflection,
        journal_text: entry.journal_text,
    }
}

/// Formats a remote creation time in local time. Times without an offset are UTC.
pub fn display_timestamp(raw: Option<&str>, now: DateTime<Local>) -> String {
    let parsed = raw.and_then(|raw| {
        let parsed = parse_created_at(raw);
        if parsed.is_none() {
            warn!(created_at = raw, "unparseable entry timestamp");
        }
        parsed
    });
    parsed
        .unwrap_or(now)
        .format(DISPLAY_FORMAT)
        .to_string()
}

fn parse_created_at(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().with_timezone(&Local))
}
