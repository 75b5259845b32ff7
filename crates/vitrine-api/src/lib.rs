// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;
use vitrine_app::{Page, PageRequest, Record};

pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Requested explicitly so the API does not return every column.
pub const RECORD_FIELDS: [&str; 7] = [
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("api.base_url must not be empty");
        }
        let base_url = Url::parse(trimmed)
            .with_context(|| format!("api.base_url {trimmed:?} is not a valid URL"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!(
                "api.base_url {trimmed:?} must use http or https, got {}",
                base_url.scheme()
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn page_url(&self, request: PageRequest) -> Result<Url> {
        if request.page == 0 {
            bail!("page numbers start at 1, got 0");
        }
        if request.limit == 0 {
            bail!("page limit must be positive, got 0");
        }

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &request.page.to_string())
            .append_pair("limit", &request.limit.to_string())
            .append_pair("fields", &RECORD_FIELDS.join(","));
        Ok(url)
    }

    pub fn fetch_page(&self, request: PageRequest) -> Result<Page> {
        let url = self.page_url(request)?;
        debug!(%url, "fetching artworks page");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|error| connection_error(self.base_url.as_str(), error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: ArtworksResponse = response.json().context("decode artworks page")?;
        Ok(Page {
            records: parsed.data,
            total: parsed.pagination.total,
        })
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow!(
            "request to {} timed out -- raise [api].timeout if the server is slow ({})",
            base_url,
            error
        );
    }
    anyhow!(
        "cannot reach {} -- check [api].base_url and your network ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        match (parsed.error, parsed.detail) {
            (Some(error), Some(detail)) if !detail.is_empty() => {
                return anyhow!("server error ({}): {}: {}", status.as_u16(), error, detail);
            }
            (Some(error), _) if !error.is_empty() => {
                return anyhow!("server error ({}): {}", status.as_u16(), error);
            }
            (None, Some(detail)) if !detail.is_empty() => {
                return anyhow!("server error ({}): {}", status.as_u16(), detail);
            }
            _ => {}
        }
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct ArtworksResponse {
    pagination: PaginationBody,
    #[serde(default)]
    data: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct PaginationBody {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<String>,
    detail: Option<String>,
}
