// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::time::Duration;

/// LinkedIn session cookie. Paste a fresh `li_at` value here before a run;
/// an expired or placeholder cookie still produces a (mostly empty) report.
pub const LI_AT_COOKIE: &str = "XXXXXXX";

/// Job search keywords, percent-encoded at URL build time.
pub const KEYWORDS: &str = "HTML CSS Javascript";

/// Where the rendered report lands, relative to the working directory.
pub const OUTPUT_FILE: &str = "easy_apply_jobs.html";

/// How long a results page gets to finish rendering after the load event.
pub const RESULTS_SETTLE: Duration = Duration::from_secs(5);

/// Top-N cut per location.
pub const JOBS_PER_LOCATION: usize = 10;

/// One row of the location table: display name plus the opaque id LinkedIn
/// assigns to that search region.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub id: String,
}

/// The fixed search table, baked into the binary.
pub fn target_locations() -> Result<Vec<Location>> {
    serde_json::from_str(include_str!("../locations.json"))
        .context("parsing embedded location table")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_table_parses() {
        let locations = target_locations().unwrap();
        assert_eq!(locations.len(), 17);
        assert_eq!(locations[0].name, "Bangalore, Karnataka");
        assert_eq!(locations[0].id, "102713980");
    }

    #[test]
    fn location_ids_are_numeric() {
        for location in target_locations().unwrap() {
            assert!(
                location.id.chars().all(|c| c.is_ascii_digit()),
                "id for {} is not numeric: {}",
                location.name,
                location.id
            );
            assert!(!location.name.is_empty());
        }
    }
}
