//! Sitemap XML assembly.

use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Failure while assembling the sitemap document.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to write sitemap XML: {0}")]
    Xml(#[from] std::io::Error),

    #[error("sitemap XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Builds the sitemap document for the given page slugs.
///
/// Emits one `<url>` entry per slug, in input order, each carrying
/// `today` as its last-modified date, a monthly change frequency, and a
/// priority of 0.7.
///
/// # Errors
///
/// Returns [`SitemapError`] if the XML writer fails or the finished
/// buffer is not valid UTF-8; neither occurs with an in-memory sink and
/// string inputs.
pub fn build_sitemap(
    slugs: &[String],
    base_url: &str,
    today: NaiveDate,
) -> Result<String, SitemapError> {
    let lastmod = today.format("%Y-%m-%d").to_string();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(urlset))?;

    for slug in slugs {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &format!("{base_url}/{slug}.html"))?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        write_text_element(&mut writer, "changefreq", "monthly")?;
        write_text_element(&mut writer, "priority", "0.7")?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_URL: &str = "https://www.parkrunnertourist.co.uk/events";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    fn slugs(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn one_url_entry_per_slug_in_input_order() {
        let xml = build_sitemap(&slugs(&["bushy-park", "hackney-marshes"]), BASE_URL, today())
            .expect("sitemap should build");
        assert_eq!(xml.matches("<url>").count(), 2);
        let first = xml.find("bushy-park.html").unwrap();
        let second = xml.find("hackney-marshes.html").unwrap();
        assert!(first < second, "entries should mirror input order");
    }

    #[test]
    fn entries_carry_fixed_metadata() {
        let xml =
            build_sitemap(&slugs(&["bushy-park"]), BASE_URL, today()).expect("sitemap should build");
        assert!(xml
            .contains("<loc>https://www.parkrunnertourist.co.uk/events/bushy-park.html</loc>"));
        assert!(xml.contains("<lastmod>2025-06-04</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
    }

    #[test]
    fn document_declares_the_sitemap_namespace() {
        let xml =
            build_sitemap(&slugs(&["bushy-park"]), BASE_URL, today()).expect("sitemap should build");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn empty_slug_list_produces_an_empty_urlset() {
        let xml = build_sitemap(&[], BASE_URL, today()).expect("sitemap should build");
        assert!(!xml.contains("<url>"));
        assert!(xml.contains("<urlset"));
    }

    #[test]
    fn same_inputs_produce_an_identical_document() {
        let a = build_sitemap(&slugs(&["a", "b"]), BASE_URL, today()).expect("sitemap should build");
        let b = build_sitemap(&slugs(&["a", "b"]), BASE_URL, today()).expect("sitemap should build");
        assert_eq!(a, b);
    }
}
