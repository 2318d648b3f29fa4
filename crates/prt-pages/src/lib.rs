//! Static page generation: slugs, dates, HTML rendering, and the sitemap.
//!
//! Everything here is synchronous and deterministic. The renderer takes the
//! current date as an argument rather than reading the clock, so output for
//! a fixed input is reproducible in tests.

pub mod dates;
pub mod enrich;
pub mod render;
pub mod sitemap;
pub mod slug;

pub use dates::next_friday;
pub use enrich::{DescriptionSource, NoEnrichment};
pub use render::{render_page, GeneratedPage};
pub use sitemap::{build_sitemap, SitemapError};
pub use slug::slugify;
