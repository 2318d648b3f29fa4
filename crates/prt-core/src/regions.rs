//! Static country bounding boxes for partner-domain resolution.
//!
//! The table is an ordered slice and resolution is strictly first-match in
//! declaration order; overlapping boxes are settled by position, not by
//! best fit. The first entry is a world-bounds sentinel with no domain, so
//! it can never terminate a search; points that fall through every
//! country box resolve to [`FALLBACK_DOMAIN`].

/// One entry in the region table.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    /// Numeric country id used by the upstream feed. Carried for reference;
    /// resolution never consults it.
    pub country_code: u16,
    /// Partner site hostname. `None` marks the sentinel entry.
    pub domain: Option<&'static str>,
    /// `min_lon, min_lat, max_lon, max_lat`, inclusive on all edges.
    pub bounds: [f64; 4],
}

impl Region {
    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let [min_lon, min_lat, max_lon, max_lat] = self.bounds;
        longitude >= min_lon && longitude <= max_lon && latitude >= min_lat && latitude <= max_lat
    }
}

/// Returned when no region box contains the point.
pub const FALLBACK_DOMAIN: &str = "www.parkrun.org.uk";

/// Country bounds in ascending feed-id order.
pub static REGIONS: &[Region] = &[
    Region {
        country_code: 0,
        domain: None,
        bounds: [-141.002, -47.29, 180.0, 83.1132],
    },
    Region {
        country_code: 3,
        domain: Some("www.parkrun.com.au"),
        bounds: [112.921, -43.6432, 153.639, -10.0591],
    },
    Region {
        country_code: 4,
        domain: Some("www.parkrun.co.at"),
        bounds: [9.53095, 46.3727, 17.1621, 49.0212],
    },
    Region {
        country_code: 14,
        domain: Some("www.parkrun.ca"),
        bounds: [-141.002, 41.6766, -52.6191, 83.1132],
    },
    Region {
        country_code: 23,
        domain: Some("www.parkrun.dk"),
        bounds: [8.07251, 54.5591, 15.157, 57.3282],
    },
    Region {
        country_code: 30,
        domain: Some("www.parkrun.fi"),
        bounds: [20.5486, 59.8078, 31.5867, 70.0923],
    },
    Region {
        country_code: 32,
        domain: Some("www.parkrun.com.de"),
        bounds: [5.86632, 47.2701, 15.0418, 55.0584],
    },
    Region {
        country_code: 42,
        domain: Some("www.parkrun.ie"),
        bounds: [-10.48, 51.4475, -5.99805, 55.3829],
    },
    Region {
        country_code: 44,
        domain: Some("www.parkrun.it"),
        bounds: [6.62662, 36.6441, 18.5204, 47.0918],
    },
    Region {
        country_code: 46,
        domain: Some("www.parkrun.jp"),
        bounds: [122.934, 24.2552, 145.817, 45.523],
    },
    Region {
        country_code: 54,
        domain: Some("www.parkrun.lt"),
        bounds: [20.9415, 53.8968, 26.8355, 56.4504],
    },
    Region {
        country_code: 57,
        domain: Some("www.parkrun.my"),
        bounds: [99.6407, 0.855001, 119.27, 7.36334],
    },
    Region {
        country_code: 64,
        domain: Some("www.parkrun.co.nl"),
        bounds: [3.35838, 50.7504, 7.2275, 53.5157],
    },
    Region {
        country_code: 65,
        domain: Some("www.parkrun.co.nz"),
        bounds: [166.724, -47.29, 180.0, -34.3928],
    },
    Region {
        country_code: 67,
        domain: Some("www.parkrun.no"),
        bounds: [4.64182, 57.9799, 31.0637, 71.1855],
    },
    Region {
        country_code: 74,
        domain: Some("www.parkrun.pl"),
        bounds: [14.1229, 49.002, 24.1458, 54.8358],
    },
    Region {
        country_code: 82,
        domain: Some("www.parkrun.sg"),
        bounds: [103.606, 1.21065, 104.044, 1.47077],
    },
    Region {
        country_code: 85,
        domain: Some("www.parkrun.co.za"),
        bounds: [16.4519, -34.8342, 32.945, -22.125],
    },
    Region {
        country_code: 88,
        domain: Some("www.parkrun.se"),
        bounds: [11.1095, 55.3374, 24.1552, 69.06],
    },
    Region {
        country_code: 97,
        domain: Some("www.parkrun.org.uk"),
        bounds: [-8.61772, 49.9029, 1.76891, 59.3608],
    },
    Region {
        country_code: 98,
        domain: Some("www.parkrun.us"),
        bounds: [-124.733, 24.5439, -66.9492, 49.3845],
    },
];

/// Resolve the partner domain for a coordinate.
///
/// Iterates [`REGIONS`] in declaration order, skips entries without a
/// domain, and returns the first whose bounds contain the point, falling
/// back to [`FALLBACK_DOMAIN`].
#[must_use]
pub fn domain_for(latitude: f64, longitude: f64) -> &'static str {
    REGIONS
        .iter()
        .filter_map(|region| region.domain.map(|domain| (region, domain)))
        .find(|(region, _)| region.contains(latitude, longitude))
        .map_or(FALLBACK_DOMAIN, |(_, domain)| domain)
}
