//! Weekly cancellations refresh command.

use chrono::Utc;
use prt_cancellations::{parse_cancellations, CancellationsClient};
use prt_core::AppConfig;

/// Fetch the global cancellations page and save this week's entries as
/// pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the page cannot be fetched after retries, or if
/// the data file cannot be written.
pub(crate) async fn run_cancellations(config: &AppConfig) -> anyhow::Result<()> {
    let client = CancellationsClient::new(
        &config.cancellations_url,
        config.request_timeout_secs,
        &config.cancellations_user_agent,
        config.cancellations_max_retries,
        config.cancellations_retry_delay_secs,
    )?;

    tracing::info!(url = %config.cancellations_url, "fetching global cancellations page");
    let page = client.fetch_page().await?;

    let week_of = Utc::now().date_naive();
    let cancellations = parse_cancellations(&page, week_of);

    if let Some(parent) = config.cancellations_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(&cancellations)?;
    std::fs::write(&config.cancellations_path, json)?;

    println!(
        "{} cancellations saved to {}",
        cancellations.len(),
        config.cancellations_path.display()
    );
    Ok(())
}
