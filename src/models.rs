use crate::charts::ChartOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type MoodCounts = HashMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub daily_data: BTreeMap<String, MoodCounts>,
    pub monthly_totals: IndexMap<String, u64>,
}

impl MonthlySummary {
    /// Count for one cell of the day x mood matrix, zero when absent.
    pub fn count(&self, day: &str, mood: &str) -> u64 {
        self.daily_data
            .get(day)
            .and_then(|moods| moods.get(mood))
            .copied()
            .unwrap_or(0)
    }
}

/// Ids arrive as integers from the remote store but are handled as strings locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RemoteId {
    Number(i64),
    Text(String),
}

impl RemoteId {
    pub fn into_string(self) -> String {
        match self {
            RemoteId::Number(id) => id.to_string(),
            RemoteId::Text(id) => id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub journal_text: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Analysis {
    pub mood: String,
    pub summary: String,
    pub reflection: String,
    #[serde(default)]
    pub id: Option<RemoteId>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    pub id: RemoteId,
    pub mood: String,
    pub summary: String,
    pub reflection: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub journal_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    pub id: String,
    pub mood: String,
    pub summary: String,
    pub reflection: String,
    pub timestamp: String,
    pub journal_text: String,
    pub mood_color: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub journal_text: String,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<JournalEntry>,
}

#[derive(Debug, Serialize)]
pub struct MonthlyChartsResponse {
    pub month: Option<String>,
    pub heatmap: Option<ChartOptions>,
    pub trend: Option<ChartOptions>,
    pub totals: Option<ChartOptions>,
}
