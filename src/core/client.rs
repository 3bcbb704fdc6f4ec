//! HTTP client for the movie-search backend
//!
//! Both search endpoints share one request/interpret path; the endpoint
//! descriptor ([`SearchKind`]) carries the parts that differ. Every failure
//! mode folds into a [`SearchOutcome`] so callers render instead of branch.

use log::info;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Filter parameters shared by both search endpoints, read fresh from the
/// form on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub language: String,
    pub model: String,
}

/// Which endpoint to hit, plus the parameters only that endpoint takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKind {
    Keyword { query: String, limit: u32 },
    Random,
}

impl SearchKind {
    /// Placeholder text installed in the results view while in flight.
    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchKind::Keyword { .. } => "Searching…",
            SearchKind::Random => "Searching random movie…",
        }
    }
}

/// Wire shape of both endpoints' response bodies.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    movies: Option<Vec<String>>,
    recommendations: Option<String>,
    error: Option<String>,
}

/// The single result of one completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 2xx body without an `error` field
    Found {
        movies: Vec<String>,
        recommendations: Option<String>,
    },
    /// 2xx body carrying a server-authored `error` message
    Rejected { message: String },
    /// Network failure, non-2xx status, or undecodable body
    Unreachable { message: String },
}

#[derive(Debug, Error)]
enum ApiError {
    #[error("server responded with status {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the two read-only search endpoints.
#[derive(Clone)]
pub struct SearchClient {
    http: HttpClient,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search to completion. Infallible at this boundary: transport
    /// and decode errors come back as [`SearchOutcome::Unreachable`].
    pub async fn search(&self, kind: &SearchKind, filters: &SearchFilters) -> SearchOutcome {
        match self.dispatch(kind, filters).await {
            Ok(outcome) => outcome,
            Err(err) => SearchOutcome::Unreachable {
                message: err.to_string(),
            },
        }
    }

    async fn dispatch(
        &self,
        kind: &SearchKind,
        filters: &SearchFilters,
    ) -> Result<SearchOutcome, ApiError> {
        let request = self.request(kind, filters).build()?;
        info!("GET {}", request.url());
        let response = self.http.execute(request).await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body = response.text().await?;
        let payload: SearchPayload = serde_json::from_str(&body)?;
        Ok(interpret(payload))
    }

    fn request(&self, kind: &SearchKind, filters: &SearchFilters) -> RequestBuilder {
        match kind {
            SearchKind::Keyword { query, limit } => self
                .http
                .get(format!("{}/search/", self.base_url))
                .query(&[
                    ("query", query.as_str()),
                    ("language", filters.language.as_str()),
                    ("model", filters.model.as_str()),
                ])
                .query(&[("limit", limit)]),
            SearchKind::Random => self
                .http
                .get(format!("{}/search/random/", self.base_url))
                .query(&[
                    ("language", filters.language.as_str()),
                    ("model", filters.model.as_str()),
                ]),
        }
    }
}

/// Map a decoded body to its outcome. The `error` field takes precedence;
/// an empty recommendation string counts as absent.
fn interpret(payload: SearchPayload) -> SearchOutcome {
    if let Some(message) = payload.error.filter(|e| !e.is_empty()) {
        return SearchOutcome::Rejected { message };
    }
    SearchOutcome::Found {
        movies: payload.movies.unwrap_or_default(),
        recommendations: payload.recommendations.filter(|r| !r.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(language: &str, model: &str) -> SearchFilters {
        SearchFilters {
            language: language.to_string(),
            model: model.to_string(),
        }
    }

    fn built_url(kind: &SearchKind, filters: &SearchFilters) -> String {
        let client = SearchClient::new("http://127.0.0.1:8000");
        let request = client.request(kind, filters).build().unwrap();
        request.url().to_string()
    }

    #[test]
    fn keyword_request_url_carries_all_four_parameters() {
        let kind = SearchKind::Keyword {
            query: "matrix".to_string(),
            limit: 5,
        };
        assert_eq!(
            built_url(&kind, &filters("en", "gpt")),
            "http://127.0.0.1:8000/search/?query=matrix&language=en&model=gpt&limit=5"
        );
    }

    #[test]
    fn random_request_url_has_no_query_parameter() {
        let url = built_url(&SearchKind::Random, &filters("fr", "llama"));
        assert_eq!(
            url,
            "http://127.0.0.1:8000/search/random/?language=fr&model=llama"
        );
        assert!(!url.contains("query"));
    }

    #[test]
    fn query_values_are_encoded() {
        let kind = SearchKind::Keyword {
            query: "blade runner?".to_string(),
            limit: 3,
        };
        let url = built_url(&kind, &filters("en", "llama3"));
        assert!(url.contains("query=blade+runner%3F"));
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let client = SearchClient::new("http://localhost:8000/");
        let request = client
            .request(&SearchKind::Random, &filters("es", "llama3"))
            .build()
            .unwrap();
        assert!(
            request
                .url()
                .to_string()
                .starts_with("http://localhost:8000/search/random/")
        );
    }

    #[test]
    fn error_field_takes_precedence_over_movies() {
        let payload: SearchPayload =
            serde_json::from_str(r#"{"error":"no results","movies":["ignored"]}"#).unwrap();
        assert_eq!(
            interpret(payload),
            SearchOutcome::Rejected {
                message: "no results".to_string()
            }
        );
    }

    #[test]
    fn empty_error_string_is_not_a_rejection() {
        let payload: SearchPayload =
            serde_json::from_str(r#"{"error":"","movies":["Heat"],"recommendations":""}"#).unwrap();
        assert_eq!(
            interpret(payload),
            SearchOutcome::Found {
                movies: vec!["Heat".to_string()],
                recommendations: None,
            }
        );
    }

    #[test]
    fn absent_fields_decode_to_empty_success() {
        let payload: SearchPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(
            interpret(payload),
            SearchOutcome::Found {
                movies: Vec::new(),
                recommendations: None,
            }
        );
    }

    #[test]
    fn recommendations_survive_when_non_empty() {
        let payload: SearchPayload = serde_json::from_str(
            r#"{"movies":["The Matrix\n1999"],"recommendations":"Try Dark City"}"#,
        )
        .unwrap();
        assert_eq!(
            interpret(payload),
            SearchOutcome::Found {
                movies: vec!["The Matrix\n1999".to_string()],
                recommendations: Some("Try Dark City".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn unreachable_server_folds_into_outcome() {
        let client = SearchClient::new("http://127.0.0.1:1");
        let outcome = client
            .search(&SearchKind::Random, &filters("en", "llama3"))
            .await;
        assert!(matches!(outcome, SearchOutcome::Unreachable { .. }));
    }
}
