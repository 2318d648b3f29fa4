//! HTML page rendering for one event.
//!
//! The page body is a fixed template; rendering substitutes the event's
//! slug, partner domain, widget URLs, check-in date, and display text into
//! marked positions. Values placed in URL query strings are
//! percent-encoded; values placed in visible text have `&`, `<`, and `>`
//! escaped. The template itself is emitted as-is and is not validated
//! against an HTML grammar.

use chrono::{Datelike, NaiveDate};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use prt_core::{domain_for, EventRecord};

use crate::dates::next_friday;
use crate::enrich::DescriptionSource;
use crate::slug::slugify;

/// Placeholder substituted when the feed omits an event name.
const UNKNOWN_EVENT: &str = "Unknown event";

/// Sentinel the feed uses for events with no real description.
const NO_DESCRIPTION: &str = "No description available.";

/// Escape set for URL query values: everything non-alphanumeric except
/// the RFC 3986 unreserved marks.
const URL_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// One rendered page, ready to be written to `<output-dir>/<slug>.html`.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub slug: String,
    pub html: String,
}

/// Renders the complete HTML document for one event.
///
/// `today` anchors the check-in date and the footer year; callers pass
/// the current date. A missing event name substitutes a fixed
/// placeholder rather than failing, and a missing coordinate pair has
/// already been defaulted to `(0, 0)` upstream, so rendering itself
/// cannot fail.
#[must_use]
pub fn render_page(
    record: &EventRecord,
    base_url: &str,
    today: NaiveDate,
    descriptions: &dyn DescriptionSource,
) -> GeneratedPage {
    let name = record.name.as_deref().unwrap_or(UNKNOWN_EVENT);
    let long_name = record.long_name.as_deref().unwrap_or(name);
    let latitude = record.latitude();
    let longitude = record.longitude();

    let slug = slugify(name);
    let checkin = next_friday(today).format("%Y-%m-%d").to_string();
    let domain = domain_for(latitude, longitude);

    // "junior" anywhere in the long name selects the junior map variant.
    let map_variant = if long_name.to_lowercase().contains("junior") {
        "Junior"
    } else {
        "5k"
    };

    let venue = utf8_percent_encode(&format!("{name} parkrun"), URL_VALUE).to_string();
    let stay22_url = format!(
        "https://www.stay22.com/embed/gm?aid=parkrunnertourist&lat={latitude}&lng={longitude}&checkin={checkin}&maincolor=7dd856&venue={venue}"
    );
    let map_url = format!(
        "https://parkrunnertourist.co.uk/main?{map_variant}&lat={latitude}&lon={longitude}&zoom=13"
    );
    let weather_url =
        format!("https://parkrunnertourist.co.uk/weather?lat={latitude}&lon={longitude}");

    let escaped_name = escape_html(name);
    let html = TEMPLATE
        .replace(
            "{{PAGE_TITLE}}",
            &format!("Accommodation near {escaped_name} parkrun"),
        )
        .replace("{{NAME_LOWER}}", &escape_html(&name.to_lowercase()))
        .replace("{{NAME}}", &escaped_name)
        .replace("{{LONG_NAME}}", &escape_html(long_name))
        .replace("{{CANONICAL_URL}}", &format!("{base_url}/{slug}.html"))
        .replace(
            "{{DESCRIPTION_BLOCK}}",
            &description_block(record, name, descriptions),
        )
        .replace("{{STAY22_URL}}", &stay22_url)
        .replace("{{MAP_URL}}", &map_url)
        .replace("{{WEATHER_URL}}", &weather_url)
        .replace("{{PARTNER_DOMAIN}}", domain)
        .replace("{{LATITUDE}}", &latitude.to_string())
        .replace("{{LONGITUDE}}", &longitude.to_string())
        .replace("{{YEAR}}", &today.year().to_string());

    GeneratedPage { slug, html }
}

/// Builds the description `<div>`, or an empty string when the feed has
/// no meaningful description.
///
/// When the enrichment source supplies text longer than 50 characters it
/// replaces the feed description, with an attribution link pointing at
/// the matching encyclopedia article. Otherwise the feed's own text is
/// escaped and used directly.
fn description_block(
    record: &EventRecord,
    name: &str,
    descriptions: &dyn DescriptionSource,
) -> String {
    let feed_text = record.description.trim();
    if feed_text.is_empty() || feed_text == NO_DESCRIPTION {
        return String::new();
    }

    let inner = match descriptions.describe(name) {
        Some(text) if text.len() > 50 => {
            let article = name.split_whitespace().collect::<Vec<_>>().join("_");
            let article = utf8_percent_encode(&article, URL_VALUE).to_string();
            format!(
                "<p>{text}</p><p><em>Source: <a href=\"https://en.wikipedia.org/wiki/{article}\" target=\"_blank\" rel=\"noopener noreferrer\">Wikipedia</a></em></p>"
            )
        }
        _ => format!("<p>{}</p>", escape_html(&record.description)),
    };

    format!("<div class=\"description\">\n    {inner}\n  </div>")
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{PAGE_TITLE}}</title>
  <meta name="description" content="Find and book hotels, campsites, and cafes around {{NAME}} parkrun." />
  <meta name="keywords" content="parkrun, accommodation, hotels, stay, tourist, {{NAME_LOWER}}" />
  <meta name="author" content="Jake Lofthouse">
  <meta property="og:image" content="https://www.parkrunnertourist.co.uk/Images/Feature.jpg">
  <meta property="og:url" content="https://www.parkrunnertourist.co.uk">
  <meta property="og:type" content="website">
  <link rel="canonical" href="{{CANONICAL_URL}}" />
  <script src="https://cdn.tailwindcss.com"></script>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap" rel="stylesheet">

  <!-- Apple Smart Banner -->
  <meta name="apple-itunes-app" content="app-id=6743163993, app-argument=https://www.parkrunnertourist.co.uk">

  <!-- Favicon -->
  <link rel="icon" type="image/x-icon" href="favicon.ico">

  <style>
    * {
      box-sizing: border-box;
    }

    body {
      font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
      margin: 0;
      padding: 0;
      background: linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%);
      line-height: 1.6;
    }

    header {
      background: linear-gradient(135deg, #2e7d32 0%, #1b5e20 100%);
      color: white;
      padding: 1.5rem 2rem;
      font-weight: 600;
      font-size: 1.75rem;
      display: flex;
      justify-content: space-between;
      align-items: center;
      box-shadow: 0 4px 20px rgba(46, 125, 50, 0.3);
      position: relative;
      overflow: hidden;
    }

    header::before {
      content: '';
      position: absolute;
      top: 0;
      left: 0;
      right: 0;
      bottom: 0;
      background: url('data:image/svg+xml,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><circle cx="20" cy="20" r="2" fill="rgba(255,255,255,0.1)"/><circle cx="80" cy="40" r="1.5" fill="rgba(255,255,255,0.1)"/><circle cx="40" cy="80" r="1" fill="rgba(255,255,255,0.1)"/></svg>');
      pointer-events: none;
    }

    header a {
      color: white;
      text-decoration: none;
      cursor: pointer;
      position: relative;
      z-index: 1;
      transition: transform 0.3s ease;
    }

    header a:hover {
      transform: translateY(-2px);
    }

    main {
      padding: 3rem 2rem;
      max-width: 1400px;
      margin: 0 auto;
    }

    h1 {
      font-size: 3rem;
      font-weight: 800;
      margin-bottom: 1rem;
      background: linear-gradient(135deg, #2e7d32, #4caf50);
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
      text-align: center;
      position: relative;
      padding: 2rem 0;
      line-height: 1.2;
    }

    .subtitle {
      font-size: 1.5rem;
      font-weight: 600;
      color: #4caf50;
      text-align: center;
      margin-bottom: 3rem;
      position: relative;
    }

    .subtitle::after {
      content: '';
      position: absolute;
      bottom: -1rem;
      left: 50%;
      transform: translateX(-50%);
      width: 100px;
      height: 4px;
      background: linear-gradient(135deg, #4caf50, #2e7d32);
      border-radius: 2px;
    }

    .description {
      background: white;
      padding: 2rem;
      border-radius: 1rem;
      box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
      margin-bottom: 3rem;
      border: 1px solid rgba(76, 175, 80, 0.2);
    }

    .description p {
      margin: 0;
      color: #374151;
      font-size: 1.1rem;
    }

    .section-title {
      font-size: 1.5rem;
      font-weight: 600;
      margin-bottom: 1rem;
      color: #1f2937;
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }

    .section-title::before {
      content: '';
      width: 4px;
      height: 1.5rem;
      background: linear-gradient(135deg, #4caf50, #2e7d32);
      border-radius: 2px;
    }

    .toggle-btn {
      padding: 0.75rem 1.5rem;
      border-radius: 0.75rem;
      margin-right: 1rem;
      margin-bottom: 1rem;
      cursor: pointer;
      font-weight: 600;
      border: 2px solid #4caf50;
      transition: all 0.3s ease;
      background-color: white;
      color: #4caf50;
      user-select: none;
      font-size: 1rem;
      box-shadow: 0 2px 10px rgba(76, 175, 80, 0.2);
    }

    .toggle-btn:hover:not(.active) {
      background-color: #f1f8e9;
      transform: translateY(-2px);
      box-shadow: 0 4px 15px rgba(76, 175, 80, 0.3);
    }

    .toggle-btn.active {
      background: linear-gradient(135deg, #4caf50, #2e7d32);
      color: white;
      transform: translateY(-2px);
      box-shadow: 0 6px 20px rgba(76, 175, 80, 0.4);
    }

    .content-grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 2rem;
      margin-bottom: 2rem;
    }

    .iframe-container {
      background: white;
      border-radius: 1rem;
      padding: 1rem;
      box-shadow: 0 8px 30px rgba(0, 0, 0, 0.12);
      border: 1px solid rgba(76, 175, 80, 0.2);
      transition: transform 0.3s ease, box-shadow 0.3s ease;
      overflow: hidden;
    }

    .iframe-container:hover {
      transform: translateY(-4px);
      box-shadow: 0 12px 40px rgba(0, 0, 0, 0.15);
    }

    iframe {
      width: 100%;
      border-radius: 0.75rem;
      border: none;
      overflow: hidden;
    }

    .weather-iframe {
      height: 300px;
      width: 100%;
    }

    .parkrun-actions {
      display: flex;
      gap: 1rem;
      margin-bottom: 3rem;
      flex-wrap: wrap;
      justify-content: center;
    }

    .action-btn {
      padding: 0.75rem 1.5rem;
      border-radius: 0.75rem;
      cursor: pointer;
      font-weight: 600;
      border: 2px solid #4caf50;
      transition: all 0.3s ease;
      background: linear-gradient(135deg, #4caf50, #2e7d32);
      color: white;
      text-decoration: none;
      display: inline-block;
      font-size: 1rem;
      box-shadow: 0 4px 15px rgba(76, 175, 80, 0.3);
    }

    .action-btn:hover {
      transform: translateY(-2px);
      box-shadow: 0 6px 20px rgba(76, 175, 80, 0.4);
      background: linear-gradient(135deg, #388e3c, #1b5e20);
    }

    /* Modal Styles */
    .modal {
      display: none;
      position: fixed;
      z-index: 1000;
      left: 0;
      top: 0;
      width: 100%;
      height: 100%;
      background-color: rgba(0,0,0,0.5);
      backdrop-filter: blur(5px);
    }

    .modal-content {
      background-color: white;
      margin: 2% auto;
      padding: 0;
      border-radius: 1rem;
      width: 90%;
      max-width: 1000px;
      height: 90%;
      position: relative;
      box-shadow: 0 20px 60px rgba(0,0,0,0.3);
    }

    .modal-header {
      background: linear-gradient(135deg, #4caf50, #2e7d32);
      color: white;
      padding: 2rem 2rem;
      border-radius: 1rem 1rem 0 0;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .modal-header h2 {
      font-size: 2rem;
      font-weight: 700;
      margin: 0;
      color: white;
    }

    .close {
      color: white;
      float: right;
      font-size: 2.5rem;
      font-weight: bold;
      cursor: pointer;
      transition: transform 0.3s ease;
    }

    .close:hover {
      transform: scale(1.1);
    }

    .modal iframe {
      width: 100%;
      height: calc(100% - 100px);
      border: none;
      border-radius: 0 0 1rem 1rem;
    }

    .accommodation-iframe {
      height: 600px;
      overflow-x: hidden;
    }

    .map-iframe {
      height: 400px;
    }

    .hotels-section {
      grid-column: 1;
    }

    .right-column {
      grid-column: 2;
      display: flex;
      flex-direction: column;
      gap: 2rem;
    }

    /* Download footer */
    .download-footer {
      background: linear-gradient(135deg, #4caf50 0%, #2e7d32 100%);
      padding: 3rem 2rem;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 1.5rem;
      color: white;
      font-weight: 700;
      font-size: 1.3rem;
      text-transform: uppercase;
      letter-spacing: 1px;
      position: relative;
      overflow: hidden;
    }

    .download-footer::before {
      content: '';
      position: absolute;
      top: 0;
      left: 0;
      right: 0;
      bottom: 0;
      background: url('data:image/svg+xml,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><circle cx="25" cy="25" r="2" fill="rgba(255,255,255,0.1)"/><circle cx="75" cy="45" r="1.5" fill="rgba(255,255,255,0.1)"/><circle cx="45" cy="75" r="1" fill="rgba(255,255,255,0.1)"/></svg>');
      pointer-events: none;
    }

    .app-badges {
      display: flex;
      gap: 2rem;
      position: relative;
      z-index: 1;
    }

    .download-footer img {
      height: 70px;
      width: auto;
      background: none;
      transition: transform 0.3s ease, filter 0.3s ease;
      cursor: pointer;
      border-radius: 0.5rem;
    }

    .download-footer img:hover {
      transform: scale(1.1) translateY(-4px);
      filter: brightness(1.1);
    }

    footer {
      text-align: center;
      padding: 2rem;
      background: #f8fafc;
      color: #64748b;
      font-weight: 500;
    }

    /* Responsive Design */
    @media (max-width: 1024px) {
      .content-grid {
        grid-template-columns: 1fr;
        gap: 1.5rem;
      }

      /* Mobile order: parkrun location, hotels, weather */
      .right-column {
        order: 1;
        grid-column: 1;
        flex-direction: column-reverse;
      }

      .hotels-section {
        order: 2;
        grid-column: 1;
      }

      .weather-iframe {
        height: 250px;
      }

      .accommodation-iframe,
      .map-iframe {
        height: 450px;
      }

      .app-badges {
        justify-content: center;
      }
    }

    @media (max-width: 768px) {
      main {
        padding: 2rem 1rem;
      }

      h1 {
        font-size: 2.5rem;
      }

      .subtitle {
        font-size: 1.2rem;
      }

      header {
        padding: 1rem;
        font-size: 1.5rem;
      }

      .toggle-btn {
        margin-bottom: 0.5rem;
        margin-right: 0.5rem;
        padding: 0.5rem 1rem;
        font-size: 0.9rem;
      }

      .app-badges {
        flex-direction: column;
        gap: 1rem;
        align-items: center;
      }

      .accommodation-iframe,
      .map-iframe {
        height: 400px;
      }

      .weather-iframe {
        height: 200px;
      }

      .modal-header h2 {
        font-size: 1.5rem;
      }

      .close {
        font-size: 2rem;
      }
    }

    /* Hide Buy Me a Coffee widget on mobile and tablets */
    @media (max-width: 1024px) {
      [data-name="BMC-Widget"] {
        display: none !important;
      }
    }
  </style>
</head>
<body>

<header>
  <a href="https://www.parkrunnertourist.co.uk" target="_self" title="Go to parkrunner tourist homepage">parkrunner tourist</a>
  <div></div>
</header>

<main>
  <div class="subtitle">Accommodation near {{LONG_NAME}} </div>

  <div class="parkrun-actions">
    <a href="#" class="action-btn" onclick="openModal('courseModal', '{{NAME}}')">Course Map</a>
    <a href="#" class="action-btn" onclick="openModal('volunteerModal', '{{NAME}}')">Volunteer Roster</a>
    <a href="https://www.google.com/maps/dir/?api=1&destination={{LATITUDE}},{{LONGITUDE}}" target="_blank" class="action-btn">Directions</a>
  </div>

  {{DESCRIPTION_BLOCK}}

  <div class="content-grid">
    <div class="hotels-section">
      <div class="iframe-container">
        <h2 class="section-title">Hotel Prices</h2>
        <div>
          <button class="toggle-btn active" onclick="switchView('listview')" id="btn-listview">List View</button>
          <button class="toggle-btn" onclick="switchView('map')" id="btn-map">Map View</button>
        </div>
        <iframe id="stay22Frame" class="accommodation-iframe" scrolling="no"
          src="{{STAY22_URL}}&viewmode=listview&listviewexpand=true"
          title="Stay22 accommodation listing">
        </iframe>
      </div>
    </div>

    <div class="right-column">
      <div class="iframe-container">
        <h2 class="section-title">parkrun Location</h2>
        <iframe class="map-iframe" src="{{MAP_URL}}" title="parkrun Map"></iframe>
      </div>

      <div class="iframe-container">
        <h2 class="section-title">Weather This Week</h2>
        <iframe class="weather-iframe" src="{{WEATHER_URL}}" title="Weather forecast for {{NAME}}"></iframe>
      </div>
    </div>
  </div>
</main>

<!-- Course Modal -->
<div id="courseModal" class="modal">
  <div class="modal-content">
    <div class="modal-header">
      <h2>Course Map</h2>
      <span class="close" onclick="closeModal('courseModal')">&times;</span>
    </div>
    <iframe id="courseIframe" src="" title="Course Map"></iframe>
  </div>
</div>

<!-- Volunteer Modal -->
<div id="volunteerModal" class="modal">
  <div class="modal-content">
    <div class="modal-header">
      <h2>Volunteer Roster</h2>
      <span class="close" onclick="closeModal('volunteerModal')">&times;</span>
    </div>
    <iframe id="volunteerIframe" src="" title="Volunteer Roster"></iframe>
  </div>
</div>

<div class="download-footer">
  Download The App
  <div class="app-badges">
    <a href="https://apps.apple.com/gb/app/parkrunner-tourist/id6743163993" target="_blank" rel="noopener noreferrer">
      <img src="https://developer.apple.com/assets/elements/badges/download-on-the-app-store.svg" alt="Download on the App Store" />
    </a>
    <a href="https://play.google.com/store/apps/details?id=appinventor.ai_jlofty8.parkrunner_tourist" target="_blank" rel="noopener noreferrer">
      <img src="https://upload.wikimedia.org/wikipedia/commons/7/78/Google_Play_Store_badge_EN.svg" alt="Get it on Google Play" />
    </a>
  </div>
</div>

<footer>
  &copy; {{YEAR}} parkrunner tourist - Find your next running adventure
</footer>

<!-- Buy Me a Coffee Widget - Hidden on mobile and tablets -->
<script data-name="BMC-Widget" data-cfasync="false" src="https://cdnjs.buymeacoffee.com/1.0.0/widget.prod.min.js" data-id="jlofthouse" data-description="Support me on Buy me a coffee!" data-message="Support The App" data-color="#40DCA5" data-position="Right" data-x_margin="18" data-y_margin="18"></script>

<script>
  function switchView(mode) {
    const iframe = document.getElementById('stay22Frame');
    const baseUrl = "{{STAY22_URL}}";
    iframe.src = baseUrl + "&viewmode=" + mode + "&listviewexpand=" + (mode === 'listview');
    document.getElementById('btn-listview').classList.toggle('active', mode === 'listview');
    document.getElementById('btn-map').classList.toggle('active', mode === 'map');
  }

  // Modal functions
  function openModal(modalId, eventName) {
    const modal = document.getElementById(modalId);
    const eventSlug = eventName.toLowerCase().replace(/\s+/g, '');

    if (modalId === 'courseModal') {
      const courseIframe = document.getElementById('courseIframe');
      courseIframe.src = `https://{{PARTNER_DOMAIN}}/${eventSlug}/course/`;
    } else if (modalId === 'volunteerModal') {
      const volunteerIframe = document.getElementById('volunteerIframe');
      volunteerIframe.src = `https://{{PARTNER_DOMAIN}}/${eventSlug}/futureroster/`;
    }

    modal.style.display = 'block';
    document.body.style.overflow = 'hidden';
  }

  function closeModal(modalId) {
    const modal = document.getElementById(modalId);
    modal.style.display = 'none';
    document.body.style.overflow = 'auto';

    // Clear iframe src to stop loading
    if (modalId === 'courseModal') {
      document.getElementById('courseIframe').src = '';
    } else if (modalId === 'volunteerModal') {
      document.getElementById('volunteerIframe').src = '';
    }
  }

  // Close modal when clicking outside
  window.onclick = function(event) {
    if (event.target.classList.contains('modal')) {
      closeModal(event.target.id);
    }
  }

  // Add loading states for iframes
  document.addEventListener('DOMContentLoaded', function() {
    const iframes = document.querySelectorAll('iframe');
    iframes.forEach(iframe => {
      const container = iframe.closest('.iframe-container');
      iframe.addEventListener('load', function() {
        if (container) {
          container.style.background = 'white';
        }
      });
    });
  });
</script>

</body>
</html>"##;
