//! Scraping of the metrics endpoint.

use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, bail};

/// Timeout applied to the whole scrape request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch the raw exposition text from `http://localhost:<port>/metrics`.
///
/// The request is attempted exactly once; transport failures, timeouts, and
/// non-2xx statuses are all fatal.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the response status is
/// not successful.
pub async fn fetch_metrics(port: u16) -> Result<String> {
    let url = format!("http://localhost:{port}/metrics");

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .into_app_err("unable to build HTTP client")?;

    log::debug!("fetching {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .into_app_err_with(|| format!("Failed to fetch metrics from {url}"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Failed to fetch metrics from {url}: HTTP status {status}");
    }

    response
        .text()
        .await
        .into_app_err_with(|| format!("Failed to fetch metrics from {url}"))
}
