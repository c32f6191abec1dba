use std::collections::HashSet;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tracing::info;

use crate::fetch;

pub const LANDING_URL: &str = "https://www.bulktransporter.com/cargo-tank-repair-directory/";

const DIRECTORY_PREFIX: &str = "/cargo-tank-repair-directory";
const SELF_REFERENTIAL_PREFIX: &str = "/cargo-tank-repair-directory/cargo-tank-repair-directory";

/// Fetch the directory landing page and return (url, slug) pairs for the
/// per-state sub-pages, in page order.
pub async fn fetch_state_urls(client: &reqwest::Client) -> Result<Vec<(String, String)>> {
    info!("Fetching directory landing page: {}", LANDING_URL);
    let html = fetch::get_with_retry(client, LANDING_URL)
        .await
        .context("Failed to fetch directory landing page")?;

    let pages = parse_state_links(&html, LANDING_URL);
    info!("State pages after filtering: {}", pages.len());
    Ok(pages)
}

/// Pull state sub-page links out of the landing page HTML.
///
/// Keeps relative targets under the directory path, drops the page's link to
/// itself, and absolutizes against the site base. Order is preserved,
/// duplicates are dropped.
pub fn parse_state_links(html: &str, landing_url: &str) -> Vec<(String, String)> {
    let base = base_url(landing_url);
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a").unwrap();

    let mut seen: HashSet<String> = HashSet::new();
    let mut pages = Vec::new();

    for element in document.select(&anchor_selector) {
        let href = match element.value().attr("href") {
            Some(href) => href,
            None => continue,
        };
        if href.is_empty() || href.starts_with(SELF_REFERENTIAL_PREFIX) {
            continue;
        }
        if !href.starts_with(DIRECTORY_PREFIX) {
            continue;
        }

        let url = format!("{}{}", base, href);
        if !seen.insert(url.clone()) {
            continue;
        }

        let slug = href
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(href)
            .to_string();
        pages.push((url, slug));
    }

    pages
}

/// Site base: the landing URL with the known directory path removed.
fn base_url(landing_url: &str) -> &str {
    match landing_url.find(DIRECTORY_PREFIX) {
        Some(idx) => &landing_url[..idx],
        None => landing_url,
    }
}

// ── Tests ──
