//! Network fetching for the size report.

use gloo_net::http::Request;
use sizescope_core::{AppReport, ReportError};

/// Fetches a size report from `url` and parses it.
///
/// Transport failures map to [`ReportError::Network`], non-success status
/// codes to [`ReportError::Http`], and malformed bodies to
/// [`ReportError::Parse`].
pub async fn fetch_report(url: &str) -> Result<AppReport, ReportError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ReportError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(ReportError::Http(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|err| ReportError::Network(err.to_string()))?;

    AppReport::from_json(&body)
}
