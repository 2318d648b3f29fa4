use std::path::PathBuf;

/// Runtime configuration for the page-generation and cancellations jobs.
///
/// Every field has a built-in default matching the production site, so an
/// empty environment is a fully working configuration. See
/// [`crate::config::load_app_config`] for the `PRT_*` variables that
/// override each field.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the remote events JSON feed.
    pub feed_url: String,
    /// Public base URL under which generated pages are served.
    pub base_url: String,
    /// Directory that receives one `<slug>.html` per event.
    pub output_dir: PathBuf,
    /// Path of the generated sitemap document.
    pub sitemap_path: PathBuf,
    /// Upper bound on pages generated per run.
    pub max_events: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// URL of the wiki page listing global event cancellations.
    pub cancellations_url: String,
    /// Path of the JSON file the cancellations job writes.
    pub cancellations_path: PathBuf,
    /// The wiki rejects non-browser agents, so this defaults to a browser
    /// profile rather than [`AppConfig::user_agent`].
    pub cancellations_user_agent: String,
    /// Additional attempts after the first failed cancellations fetch.
    pub cancellations_max_retries: u32,
    pub cancellations_retry_delay_secs: u64,
}
