use crate::config::Config;
use crate::models::{AnalyzeRequest, Analysis, MonthlySummary, RemoteEntry};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to analysis service failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("analysis service answered {0}")]
    Rejected(StatusCode),
    #[error("unexpected response from analysis service: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("cannot build analysis service url: {0}")]
    InvalidUrl(String),
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    pub async fn analyze_journal(&self, token: &str, journal_text: &str) -> Result<Analysis, ApiError> {
        let request = self
            .http
            .post(self.url("/analyze-journal"))
            .json(&AnalyzeRequest { journal_text });
        self.send_json(request, token).await
    }

    pub async fn list_entries(&self, token: &str) -> Result<Vec<RemoteEntry>, ApiError> {
        let request = self.http.get(self.url("/journal-entries"));
        self.send_json(request, token).await
    }

    pub async fn delete_entry(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let request = self.http.delete(entry_url(&self.base_url, id)?);
        self.send(request, token).await?;
        Ok(())
    }

    pub async fn monthly_summary(&self, token: &str) -> Result<MonthlySummary, ApiError> {
        let request = self.http.get(self.url("/monthly-summary"));
        self.send_json(request, token).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder, token: &str) -> Result<Response, ApiError> {
        let response = request
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        debug!(url = %response.url(), %status, "analysis service responded");
        if !status.is_success() {
            return Err(ApiError::Rejected(status));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, token: &str) -> Result<T, ApiError> {
        let bytes = self
            .send(request, token)
            .await?
            .bytes()
            .await
            .map_err(ApiError::Transport)?;
        parse_body(&bytes)
    }
}

/// The id is pushed as one percent-encoded path segment, never pasted as raw text.
pub fn entry_url(base_url: &str, id: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(&format!("{base_url}/delete_journal"))
        .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(base_url.to_string()))?
        .push(id);
    Ok(url)
}

/// Parses a response body into its strict record; anything else fails closed.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(ApiError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RemoteId;

    #[test]
    fn entry_url_keeps_id_in_one_segment() {
        let cases = [
            ("42", "/delete_journal/42"),
            ("../x", "/delete_journal/..%2Fx"),
            ("7?a=1", "/delete_journal/7%3Fa=1"),
            ("a#b", "/delete_journal/a%23b"),
            ("x/y", "/delete_journal/x%2Fy"),
        ];
        for (id, path) in cases {
            let url = entry_url("http://127.0.0.1:8000", id).unwrap();
            assert_eq!(url.path(), path, "id {id:?}");
            assert!(url.query().is_none());
            assert!(url.fragment().is_none());
        }
    }

    #[test]
    fn entry_url_keeps_base_path() {
        let url = entry_url("https://journal.example.com/api", "5").unwrap();
        assert_eq!(url.as_str(), "https://journal.example.com/api/delete_journal/5");
    }

    #[test]
    fn entry_url_rejects_bad_base() {
        assert!(matches!(entry_url("not a url", "5"), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn analysis_requires_every_field() {
        let ok: Analysis =
            parse_body(br#"{"mood":"calm","summary":"s","reflection":"r"}"#).unwrap();
        assert_eq!(ok.mood, "calm");
        assert!(ok.id.is_none());

        let missing = parse_body::<Analysis>(br#"{"mood":"calm","summary":"s"}"#);
        assert!(matches!(missing, Err(ApiError::Malformed(_))));

        let wrong_type = parse_body::<Analysis>(br#"{"mood":3,"summary":"s","reflection":"r"}"#);
        assert!(matches!(wrong_type, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn analysis_accepts_stored_id() {
        let stored: Analysis = parse_body(
            br#"{"mood":"calm","summary":"s","reflection":"r","id":12,"created_at":"2024-06-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(stored.id, Some(RemoteId::Number(12)));
    }

    #[test]
    fn monthly_summary_keeps_mood_order() {
        let summary: MonthlySummary = parse_body(
            br#"{"month":"2024-06","daily_data":{"2024-06-02":{"sad":1},"2024-06-01":{"happy":2}},
                "monthly_totals":{"sad":1,"happy":2,"anxious":0}}"#,
        )
        .unwrap();
        let moods: Vec<&str> = summary.monthly_totals.keys().map(String::as_str).collect();
        assert_eq!(moods, vec!["sad", "happy", "anxious"]);
        let days: Vec<&str> = summary.daily_data.keys().map(String::as_str).collect();
        assert_eq!(days, vec!["2024-06-01", "2024-06-02"]);
    }

    #[test]
    fn negative_counts_are_malformed() {
        let result = parse_body::<MonthlySummary>(
            br#"{"month":"2024-06","daily_data":{"2024-06-01":{"sad":-1}},"monthly_totals":{"sad":0}}"#,
        );
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn entries_accept_null_created_at() {
        let entries: Vec<RemoteEntry> = parse_body(
            br#"[{"id":"a1","mood":"sad","summary":"s","reflection":"r","created_at":null,"journal_text":"t"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].id, RemoteId::Text("a1".to_string()));
        assert!(entries[0].created_at.is_none());
    }
}
