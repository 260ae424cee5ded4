use reqwest::blocking::Client;
use reqwest::header::ACCEPT_LANGUAGE;

use crate::config::Config;
use crate::passes::date::current_year;
use crate::passes::error::PassError;
use crate::passes::table::parse_passes;
use crate::passes::types::DateGroup;

/// Download the pass summary page for the configured observer.
///
/// Any response body is returned, error pages included: a page without
/// the pass table parses to an empty group.
pub fn fetch_page(config: &Config) -> Result<String, PassError> {
    let url = config.pass_summary_url()?;
    log::info!("Fetching {}", url);

    let client = Client::builder().timeout(config.timeout).build()?;
    let response = client
        .get(url)
        .header(ACCEPT_LANGUAGE, config.language.as_str())
        .send()?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Pass summary answered {}", status);
    }

    let body = response.text()?;
    log::debug!("Received {} bytes", body.len());
    Ok(body)
}

/// Fetch the page and group its passes by date.
///
/// Dates take the current UTC year, see [`current_year`].
pub fn extract_passes(config: &Config) -> Result<DateGroup, PassError> {
    let html = fetch_page(config)?;
    parse_passes(&html, config, current_year())
}
