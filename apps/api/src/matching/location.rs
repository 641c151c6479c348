//! Location compatibility via city aliases and hand-curated metro groups.
//! There is no geometry here: two cities are either the same, neighbours, or apart.

use std::collections::HashMap;
use std::sync::LazyLock;

const SAME_PLACE: f64 = 100.0;
const UNKNOWN: f64 = 50.0;
const SAME_METRO: f64 = 80.0;
const DIFFERENT_REGION: f64 = 30.0;

/// Colloquial or historical name → official name. Keys and values are lowercase.
static CITY_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("bangalore", "bengaluru"),
        ("bombay", "mumbai"),
        ("madras", "chennai"),
        ("calcutta", "kolkata"),
        ("gurgaon", "gurugram"),
        ("new delhi", "delhi"),
        ("poona", "pune"),
        ("cochin", "kochi"),
        ("trivandrum", "thiruvananthapuram"),
    ])
});

/// Cities close enough to commute between. Holds both alias and official names.
const METRO_GROUPS: &[&[&str]] = &[
    &["delhi", "noida", "gurgaon", "gurugram", "faridabad", "ghaziabad"],
    &["mumbai", "navi mumbai", "thane", "pune"],
    &["bangalore", "bengaluru", "mysore"],
    &["hyderabad", "secunderabad"],
];

/// Official name for `city`, or `city` itself. Expects trimmed lowercase input.
pub fn canonical_city(city: &str) -> &str {
    CITY_ALIASES.get(city).copied().unwrap_or(city)
}

/// Index of the metro group containing `city`, if any.
pub fn metro_group(city: &str) -> Option<usize> {
    METRO_GROUPS.iter().position(|group| group.contains(&city))
}

pub fn score_location(candidate: Option<&str>, job: Option<&str>, is_remote: bool) -> f64 {
    if is_remote {
        return SAME_PLACE;
    }

    let candidate = candidate.map(|c| c.trim().to_lowercase()).unwrap_or_default();
    let job = job.map(|j| j.trim().to_lowercase()).unwrap_or_default();
    if candidate.is_empty() || job.is_empty() {
        return UNKNOWN;
    }

    if candidate == job {
        return SAME_PLACE;
    }

    let candidate = canonical_city(&candidate);
    let job_canonical = canonical_city(&job);
    if candidate == job_canonical {
        return SAME_PLACE;
    }

    // Catalog entries like "Remote (India)" without the remote flag set.
    if job.contains("remote") {
        return SAME_PLACE;
    }

    match (metro_group(candidate), metro_group(job_canonical)) {
        (Some(a), Some(b)) if a == b => SAME_METRO,
        _ => DIFFERENT_REGION,
    }
}
