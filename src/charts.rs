use crate::aggregate::{axes, cells_for, HeatCell};
use crate::config::Theme;
use crate::models::MonthlySummary;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Heatmap,
    Line,
    Column,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub kind: ChartKind,
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_axis: Option<ColorAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAxis {
    pub min: u64,
    pub min_color: String,
    pub max_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub shared: bool,
    pub value_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    pub data: SeriesData,
    pub data_labels: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Cells(Vec<HeatCell>),
    Values(Vec<u64>),
}

pub fn heatmap(summary: Option<&MonthlySummary>, theme: &Theme) -> Option<ChartOptions> {
    let summary = summary?;
    let axes = axes(summary);
    let cells = cells_for(summary, &axes);

    Some(ChartOptions {
        kind: ChartKind::Heatmap,
        title: format!("Daily Mood Heatmap for {}", summary.month),
        x_axis: category_axis("Date", axes.days),
        y_axis: category_axis("Mood", axes.moods),
        color_axis: Some(ColorAxis {
            min: 0,
            min_color: theme.heatmap_min_color.clone(),
            max_color: theme.heatmap_max_color.clone(),
        }),
        tooltip: None,
        series: vec![Series {
            name: "Mood count".to_string(),
            data: SeriesData::Cells(cells),
            data_labels: true,
        }],
    })
}

pub fn trend(summary: Option<&MonthlySummary>) -> Option<ChartOptions> {
    let summary = summary?;
    let axes = axes(summary);

    let series = axes
        .moods
        .iter()
        .map(|mood| Series {
            name: mood.clone(),
            data: SeriesData::Values(
                axes.days.iter().map(|day| summary.count(day, mood)).collect(),
            ),
            data_labels: false,
        })
        .collect();

    Some(ChartOptions {
        kind: ChartKind::Line,
        title: format!("Daily Mood Trends for {}", summary.month),
        x_axis: category_axis("Date", axes.days),
        y_axis: value_axis("Mood Count"),
        color_axis: None,
        tooltip: Some(Tooltip {
            shared: true,
            value_suffix: " entries".to_string(),
        }),
        series,
    })
}

pub fn totals(summary: Option<&MonthlySummary>) -> Option<ChartOptions> {
    let summary = summary?;
    let moods: Vec<String> = summary.monthly_totals.keys().cloned().collect();
    let values = summary.monthly_totals.values().copied().collect();

    Some(ChartOptions {
        kind: ChartKind::Column,
        title: format!("Monthly Mood Totals for {}", summary.month),
        x_axis: category_axis("Mood", moods),
        y_axis: value_axis("Total Count"),
        color_axis: None,
        tooltip: None,
        series: vec![Series {
            name: "Moods".to_string(),
            data: SeriesData::Values(values),
            data_labels: false,
        }],
    })
}

fn category_axis(title: &str, categories: Vec<String>) -> Axis {
    Axis {
        title: title.to_string(),
        categories: Some(categories),
        min: None,
    }
}

fn value_axis(title: &str) -> Axis {
    Axis {
        title: title.to_string(),
        categories: None,
        min: Some(0),
    }
}
