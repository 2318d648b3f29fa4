//! Event page generation command.
//!
//! Fetch and normalization failures abort the run before anything is
//! written. Per-event failures are logged with the event's name and
//! skipped so one bad feature does not abort the batch; the sitemap is
//! built from the slugs that were actually written.

use chrono::{NaiveDate, Utc};
use prt_core::AppConfig;
use prt_feed::{event_features, normalize_event, FeedClient, FeedFeature};
use prt_pages::{build_sitemap, render_page, NoEnrichment};

/// Outcome of processing a single event: the written page's slug, or the
/// failure that made the batch skip it.
enum PageOutcome {
    Written { slug: String },
    Failed(anyhow::Error),
}

/// Generate one HTML page per feed event plus the sitemap.
///
/// Events are processed strictly in feed order, one at a time, and the
/// run is capped at `max_events` pages.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched or parsed, if its
/// shape is unrecognized, if the output directory cannot be created, or
/// if the sitemap cannot be written. Per-event render/write failures are
/// logged and skipped, not propagated.
pub(crate) async fn run_generate(config: &AppConfig) -> anyhow::Result<()> {
    let client = FeedClient::new(
        &config.feed_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    tracing::info!(feed_url = %config.feed_url, "fetching events feed");
    let document = client.fetch_document().await?;
    let features = event_features(&document)?;

    let selected = &features[..features.len().min(config.max_events)];
    tracing::info!(
        total = features.len(),
        selected = selected.len(),
        "events selected for generation"
    );

    std::fs::create_dir_all(&config.output_dir)?;

    let today = Utc::now().date_naive();
    let mut written_slugs: Vec<String> = Vec::with_capacity(selected.len());
    let mut failed: usize = 0;

    for (index, feature) in selected.iter().enumerate() {
        match write_event_page(feature, config, today) {
            PageOutcome::Written { slug } => {
                println!(
                    "generated: {}",
                    config.output_dir.join(format!("{slug}.html")).display()
                );
                written_slugs.push(slug);
            }
            PageOutcome::Failed(e) => {
                let name = feature
                    .get("properties")
                    .and_then(|p| p.get("eventname"))
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("<unnamed>");
                tracing::error!(index, event = %name, error = %e, "skipping event");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        tracing::warn!(
            failed,
            selected = selected.len(),
            "some events failed during generation"
        );
    }

    let sitemap = build_sitemap(&written_slugs, &config.base_url, today)?;
    std::fs::write(&config.sitemap_path, sitemap)?;
    println!("generated sitemap at {}", config.sitemap_path.display());

    println!("successfully generated {} event pages", written_slugs.len());
    Ok(())
}

/// Renders one feature and writes it under the output directory.
fn write_event_page(
    feature: &serde_json::Value,
    config: &AppConfig,
    today: NaiveDate,
) -> PageOutcome {
    let feature: FeedFeature = match serde_json::from_value(feature.clone()) {
        Ok(feature) => feature,
        Err(e) => {
            return PageOutcome::Failed(
                anyhow::Error::new(e).context("feature does not match the feed schema"),
            )
        }
    };

    let record = normalize_event(feature);
    let page = render_page(&record, &config.base_url, today, &NoEnrichment);
    let path = config.output_dir.join(format!("{}.html", page.slug));
    match std::fs::write(&path, &page.html) {
        Ok(()) => PageOutcome::Written { slug: page.slug },
        Err(e) => PageOutcome::Failed(
            anyhow::Error::new(e).context(format!("writing {}", path.display())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        std::env::temp_dir().join(format!("prt-generate-{tag}-{}-{nanos}", std::process::id()))
    }

    fn test_config(server: &MockServer, root: &Path, max_events: usize) -> AppConfig {
        AppConfig {
            feed_url: format!("{}/events.json", server.uri()),
            base_url: "https://www.parkrunnertourist.co.uk/events".to_string(),
            output_dir: root.join("events"),
            sitemap_path: root.join("sitemap.events.xml"),
            max_events,
            request_timeout_secs: 30,
            user_agent: "prt/0.1 (test)".to_string(),
            cancellations_url: "https://wiki.parkrun.com/index.php/Cancellations/Global"
                .to_string(),
            cancellations_path: root.join("_data/cancellations.json"),
            cancellations_user_agent: "Mozilla/5.0".to_string(),
            cancellations_max_retries: 4,
            cancellations_retry_delay_secs: 0,
        }
    }

    fn feed_with_one_broken_event() -> serde_json::Value {
        serde_json::json!({
            "events": {
                "features": [
                    {
                        "properties": { "eventname": "Bushy Park" },
                        "geometry": { "coordinates": [-0.3346, 51.4107] }
                    },
                    {
                        "properties": { "eventname": "Hackney Marshes" },
                        "geometry": { "coordinates": [-0.0419, 51.5566] }
                    },
                    {
                        "properties": 42,
                        "geometry": { "coordinates": [-1.0, 52.0] }
                    },
                    {
                        "properties": { "eventname": "Cornwall Park" },
                        "geometry": { "coordinates": [174.7832, -36.8983] }
                    },
                    {
                        "properties": { "eventname": "Keswick" },
                        "geometry": { "coordinates": [-3.1347, 54.6013] }
                    }
                ]
            }
        })
    }

    async fn serve_feed(server: &MockServer, body: &serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/events.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn html_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".html"))
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn one_broken_event_does_not_abort_the_batch() {
        let server = MockServer::start().await;
        serve_feed(&server, &feed_with_one_broken_event()).await;
        let root = temp_root("resilience");
        let config = test_config(&server, &root, 13);

        run_generate(&config).await.expect("batch should finish");

        assert_eq!(
            html_files(&config.output_dir),
            [
                "bushy-park.html",
                "cornwall-park.html",
                "hackney-marshes.html",
                "keswick.html"
            ]
        );

        let sitemap = std::fs::read_to_string(&config.sitemap_path).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 4);
        for slug in ["bushy-park", "hackney-marshes", "cornwall-park", "keswick"] {
            assert!(sitemap.contains(&format!("/{slug}.html")));
        }

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn rerunning_overwrites_pages_and_rebuilds_the_same_sitemap() {
        let server = MockServer::start().await;
        serve_feed(&server, &feed_with_one_broken_event()).await;
        let root = temp_root("idempotence");
        let config = test_config(&server, &root, 13);

        run_generate(&config).await.expect("first run should finish");
        let first_sitemap = std::fs::read_to_string(&config.sitemap_path).unwrap();

        run_generate(&config).await.expect("second run should finish");
        let second_sitemap = std::fs::read_to_string(&config.sitemap_path).unwrap();

        assert_eq!(first_sitemap, second_sitemap);
        assert_eq!(html_files(&config.output_dir).len(), 4);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn unrecognized_feed_shape_aborts_before_writing_anything() {
        let server = MockServer::start().await;
        serve_feed(&server, &serde_json::json!({ "items": [] })).await;
        let root = temp_root("schema");
        let config = test_config(&server, &root, 13);

        let err = run_generate(&config).await.unwrap_err();
        assert!(
            err.to_string().contains("unexpected JSON structure"),
            "unexpected error: {err:#}"
        );
        assert!(
            !config.output_dir.exists(),
            "no output should exist after a fatal feed error"
        );
        assert!(!config.sitemap_path.exists());

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn batch_is_capped_at_max_events() {
        let server = MockServer::start().await;
        serve_feed(&server, &feed_with_one_broken_event()).await;
        let root = temp_root("cap");
        let config = test_config(&server, &root, 2);

        run_generate(&config).await.expect("batch should finish");

        assert_eq!(
            html_files(&config.output_dir),
            ["bushy-park.html", "hackney-marshes.html"]
        );
        let sitemap = std::fs::read_to_string(&config.sitemap_path).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 2);

        let _ = std::fs::remove_dir_all(&root);
    }
}
