//! Typed client for the mock document search API.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One document fragment, as returned by `/search` and sent to `/summarise`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub content: String,
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymResponse {
    pub term: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Serialize)]
struct SummariseRequest<'a> {
    query: &'a str,
    results_context: &'a [SearchResult],
}

#[derive(Debug, Serialize)]
struct AddToIndexRequest<'a> {
    doc: &'a str,
    id: &'a str,
}

/// Errors returned by [`DocSearchClient`].
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Optional knobs for `/pdfsummary`.
#[derive(Debug, Clone, Default)]
pub struct PdfSummaryOptions {
    pub system_prompt: Option<String>,
    pub sampling_method: Option<String>,
}

pub struct DocSearchClient {
    client: Client,
    base_url: String,
}

impl DocSearchClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Welcome message from `/`.
    pub async fn root(&self) -> Result<Message, SdkError> {
        let resp = self.client.get(self.url("/")).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `GET /search`. `k = None` uses the server default.
    pub async fn search(&self, query: &str, k: Option<i64>) -> Result<Vec<SearchResult>, SdkError> {
        let mut params = vec![("query", query.to_string())];
        if let Some(k) = k {
            params.push(("k", k.to_string()));
        }
        let resp = self.client.get(self.url("/search")).query(&params).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `POST /summarise`, returning the full streamed text.
    pub async fn summarise(
        &self,
        query: &str,
        results_context: &[SearchResult],
    ) -> Result<String, SdkError> {
        let resp = self
            .client
            .post(self.url("/summarise"))
            .json(&SummariseRequest {
                query,
                results_context,
            })
            .send()
            .await?;
        Ok(check(resp).await?.text().await?)
    }

    /// `GET /search-and-summarise`, returning the full streamed text.
    pub async fn search_and_summarise(&self, query: &str, k: Option<i64>) -> Result<String, SdkError> {
        let mut params = vec![("query", query.to_string())];
        if let Some(k) = k {
            params.push(("k", k.to_string()));
        }
        let resp = self
            .client
            .get(self.url("/search-and-summarise"))
            .query(&params)
            .send()
            .await?;
        Ok(check(resp).await?.text().await?)
    }

    /// `GET /synonyms`.
    pub async fn synonyms(&self, query: &str) -> Result<SynonymResponse, SdkError> {
        let resp = self
            .client
            .get(self.url("/synonyms"))
            .query(&[("query", query)])
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `GET /pdfsummary`, returning the full streamed text.
    pub async fn pdf_summary(
        &self,
        document_id: &str,
        options: &PdfSummaryOptions,
    ) -> Result<String, SdkError> {
        let mut params = vec![("document_id", document_id.to_string())];
        if let Some(prompt) = &options.system_prompt {
            params.push(("system_prompt", prompt.clone()));
        }
        if let Some(method) = &options.sampling_method {
            params.push(("sampling_method", method.clone()));
        }
        let resp = self
            .client
            .get(self.url("/pdfsummary"))
            .query(&params)
            .send()
            .await?;
        Ok(check(resp).await?.text().await?)
    }

    /// `POST /add-to-index`.
    pub async fn add_to_index(&self, doc: &str, id: &str) -> Result<Message, SdkError> {
        let resp = self
            .client
            .post(self.url("/add-to-index"))
            .json(&AddToIndexRequest { doc, id })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

async fn check(resp: Response) -> Result<Response, SdkError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(SdkError::Status { status, body })
}
