use crate::models::MonthlySummary;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub days: Vec<String>,
    pub moods: Vec<String>,
}

/// One non-zero matrix cell, serialized as `[day_index, mood_index, count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatCell(pub usize, pub usize, pub u64);

pub fn axes(summary: &MonthlySummary) -> Axes {
    // daily_data is a BTreeMap, so its keys are already sorted and unique.
    let days = summary.daily_data.keys().cloned().collect();
    let moods = summary.monthly_totals.keys().cloned().collect();
    Axes { days, moods }
}

pub fn heatmap_cells(summary: Option<&MonthlySummary>) -> Vec<HeatCell> {
    let Some(summary) = summary else {
        return Vec::new();
    };
    cells_for(summary, &axes(summary))
}

pub(crate) fn cells_for(summary: &MonthlySummary, axes: &Axes) -> Vec<HeatCell> {
    let mut cells = Vec::new();
    for (x, day) in axes.days.iter().enumerate() {
        for (y, mood) in axes.moods.iter().enumerate() {
            let count = summary.count(day, mood);
            if count > 0 {
                cells.push(HeatCell(x, y, count));
            }
        }
    }
    cells
}
