// src/jobs.rs

use std::collections::BTreeMap;

/// One scraped job card. Built once per card during the search loop and
/// never mutated afterwards; the process keeps no other state.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub link: String,
    pub location: String,
}

/// How many jobs each location contributed, sorted by location name.
/// Feeds the report summary and filter options as well as the end-of-run log.
pub fn location_counts(jobs: &[Job]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for job in jobs {
        *counts.entry(job.location.as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(location: &str) -> Job {
        Job {
            title: "Frontend Dev".into(),
            company: "Acme".into(),
            link: "https://x/y".into(),
            location: location.into(),
        }
    }

    #[test]
    fn counts_tally_per_location() {
        let jobs = vec![job("Singapore"), job("Germany"), job("Singapore")];
        let counts = location_counts(&jobs);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Singapore"], 2);
        assert_eq!(counts["Germany"], 1);
    }

    #[test]
    fn counts_iterate_sorted_by_name() {
        let jobs = vec![job("Sweden"), job("Australia"), job("Norway")];
        let names: Vec<&str> = location_counts(&jobs).into_keys().collect();
        assert_eq!(names, vec!["Australia", "Norway", "Sweden"]);
    }

    #[test]
    fn empty_collection_has_no_counts() {
        assert!(location_counts(&[]).is_empty());
    }
}
