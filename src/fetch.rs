use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::warn;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; bt_scraper/0.1)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONCURRENCY: usize = 8;
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 2000;

/// A page failing after retries would leave the output silently
/// incomplete, so fetch errors abort the whole run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: StatusCode },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub struct FetchedPage {
    pub slug: String,
    pub url: String,
    pub html: String,
}

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// GET a page as text, retrying rate limits, server errors, and transport
/// errors with exponential backoff.
pub async fn get_with_retry(client: &Client, url: &str) -> Result<String, FetchError> {
    for attempt in 0..MAX_RETRIES {
        match get_once(client, url).await {
            Err(e) if is_retryable(&e) => {
                let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
                warn!(
                    "Fetch failed for {} (attempt {}/{}), backing off {:.1}s: {}",
                    url,
                    attempt + 1,
                    MAX_RETRIES,
                    backoff.as_secs_f64(),
                    e
                );
                tokio::time::sleep(backoff).await;
            }
            other => return other,
        }
    }

    get_once(client, url).await
}

async fn get_once(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request { url: url.to_string(), source: e })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Request { url: url.to_string(), source: e })
}

fn is_retryable(err: &FetchError) -> bool {
    match err {
        FetchError::Status { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
        }
        FetchError::Request { .. } => true,
    }
}

/// Fetch all sub-pages with bounded concurrency, returning them in the same
/// order as `pages`. The first failure aborts the run.
pub async fn fetch_pages(
    client: &Client,
    pages: Vec<(String, String)>,
) -> Result<Vec<FetchedPage>> {
    let semaphore = Arc::new(Semaphore::new(CONCURRENCY));

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut handles = Vec::with_capacity(pages.len());
    for (url, slug) in pages {
        let client = client.clone();
        let sem = Arc::clone(&semaphore);
        let pb = pb.clone();

        handles.push(tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let result = get_with_retry(&client, &url).await;
            pb.inc(1);
            result.map(|html| FetchedPage { slug, url, html })
        }));
    }

    // Join in spawn order so the output matches discovery order.
    let mut fetched = Vec::with_capacity(handles.len());
    for handle in handles {
        fetched.push(handle.await??);
    }

    pb.finish_and_clear();
    Ok(fetched)
}

// ── Tests ──
