use crate::auth::Session;
use crate::charts;
use crate::errors::AppError;
use crate::journal::{self, MIN_WORDS};
use crate::models::{EntriesResponse, JournalEntry, MonthlyChartsResponse, SubmitRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};
use tracing::{error, info};

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = Session::resolve(&headers, state.config.api_token.as_deref());
    if session.token().is_none() {
        return Redirect::to(&state.config.login_url).into_response();
    }
    Html(render_index(&state.config.theme)).into_response()
}

pub async fn login(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.config.login_url)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn submit_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    let token = require_token(&state, &headers)?;
    if !journal::can_submit(&payload.journal_text) {
        return Err(AppError::validation(format!(
            "journal entry needs at least {MIN_WORDS} words"
        )));
    }

    info!(
        words = journal::word_count(&payload.journal_text),
        chars = journal::character_count(&payload.journal_text),
        "submitting journal entry for analysis"
    );
    let analysis = state.api.analyze_journal(&token, &payload.journal_text).await?;
    let entry = journal::entry_from_analysis(analysis, payload.journal_text, Local::now());
    info!(id = %entry.id, mood = %entry.mood, "journal entry analyzed");

    state.history.lock().await.push_front(entry.clone());
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_entries(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<EntriesResponse>, AppError> {
    let token = require_token(&state, &headers)?;
    let remote = state.api.list_entries(&token).await?;

    let now = Local::now();
    let entries: Vec<JournalEntry> = remote
        .into_iter()
        .map(|entry| journal::entry_from_remote(entry, now))
        .collect();

    let mut history = state.history.lock().await;
    history.replace_all(entries);
    Ok(Json(EntriesResponse {
        entries: history.list(),
    }))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let token = require_token(&state, &headers)?;
    let removed = state.history.lock().await.remove(&id);

    // The local removal stands even if the remote delete fails.
    match state.api.delete_entry(&token, &id).await {
        Ok(()) => info!(%id, removed, "journal entry deleted"),
        Err(err) => error!(%id, "failed to delete journal entry remotely: {err}"),
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn monthly_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MonthlyChartsResponse>, AppError> {
    let token = require_token(&state, &headers)?;
    let ticket = state.summary.lock().await.begin();

    let outcome = match state.api.monthly_summary(&token).await {
        Ok(summary) => Some(summary),
        Err(err) => {
            error!("failed to fetch monthly summary: {err}");
            None
        }
    };

    let mut slot = state.summary.lock().await;
    slot.complete(ticket, outcome);
    let summary = slot.current();
    let theme = &state.config.theme;

    Ok(Json(MonthlyChartsResponse {
        month: summary.map(|summary| summary.month.clone()),
        heatmap: charts::heatmap(summary, theme),
        trend: charts::trend(summary),
        totals: charts::totals(summary),
    }))
}

fn require_token(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    Session::resolve(headers, state.config.api_token.as_deref())
        .token()
        .map(str::to_string)
        .ok_or_else(|| AppError::unauthenticated(&state.config.login_url))
}
