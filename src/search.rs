// src/search.rs

use anyhow::Result;
use headless_chrome::{Element, Tab};
use tracing::{info, warn};

use crate::config::{self, Location};
use crate::jobs::Job;

/// Jobs search endpoint; `f_AL=true` narrows results to Easy Apply postings.
const SEARCH_BASE: &str = "https://www.linkedin.com/jobs/search/";

/// Landing page used when a title anchor carries no href at all.
const FALLBACK_JOB_LINK: &str = "https://linkedin.com/jobs";

/// Origin for resolving site-relative job links.
const LINKEDIN_ORIGIN: &str = "https://www.linkedin.com";

// Selector chains, most specific first. The live DOM varies between
// accounts and rollouts, so every field is tried in order and the first
// hit with non-empty text wins.
const CARD_SELECTORS: &[&str] = &[
    "[data-job-id]",
    ".job-card-container",
    ".jobs-search-results__list-item",
];
const TITLE_SELECTORS: &[&str] = &[
    ".job-card-list__title",
    ".job-card-container__link",
    "h3 a",
    "h4 a",
    "[data-test-job-title]",
    ".sr-only",
];
const COMPANY_SELECTORS: &[&str] = &[
    ".job-card-container__primary-description",
    ".job-card-container__company-name",
    "h4",
    "[data-test-employer-name]",
];

/// Build the percent-encoded search URL for one location.
pub fn search_url(keywords: &str, location: &Location) -> String {
    format!(
        "{SEARCH_BASE}?keywords={}&location={}&locationId={}&f_AL=true",
        urlencoding::encode(keywords),
        urlencoding::encode(&location.name),
        location.id
    )
}

/// Scrape the top job cards for one location. Navigation failures are fatal
/// and bubble up; a card that cannot be read is logged and skipped.
pub fn search_location(tab: &Tab, keywords: &str, location: &Location) -> Result<Vec<Job>> {
    info!("🔍 Searching in {}...", location.name);
    tab.navigate_to(&search_url(keywords, location))?
        .wait_until_navigated()?;
    // TODO: replace the fixed settle sleep with tab.wait_for_element on the
    // results list; a slow page can outlast it.
    std::thread::sleep(config::RESULTS_SETTLE);

    let cards = find_job_cards(tab);
    info!("📋 Found {} job cards in {}", cards.len(), location.name);

    let mut jobs = Vec::new();
    for (i, card) in cards.iter().take(config::JOBS_PER_LOCATION).enumerate() {
        match extract_card(card, &location.name) {
            Ok(Some(job)) => {
                info!("  ✓ Job {}: {} at {} | {}", i + 1, job.title, job.company, location.name);
                jobs.push(job);
            }
            Ok(None) => {
                warn!("  ❌ No title found for job {} in {}", i + 1, location.name);
            }
            Err(e) => {
                warn!("  ❌ Error parsing job {} in {}: {}", i + 1, location.name, brief(&e));
            }
        }
    }
    Ok(jobs)
}

/// First card selector that matches anything wins.
fn find_job_cards(tab: &Tab) -> Vec<Element<'_>> {
    for selector in CARD_SELECTORS {
        if let Some(cards) = tab.find_elements(selector).ok().filter(|c| !c.is_empty()) {
            return cards;
        }
    }
    Vec::new()
}

/// Pull one job out of a card. `Ok(None)` means no selector produced a
/// usable title, so the card is skipped.
fn extract_card(card: &Element, location_name: &str) -> Result<Option<Job>> {
    let mut title_and_href = None;
    for selector in TITLE_SELECTORS {
        if let Ok(element) = card.find_element(selector) {
            if let Ok(text) = element.get_inner_text() {
                let text = text.trim();
                if !text.is_empty() {
                    let href = element.get_attribute_value("href")?;
                    title_and_href = Some((text.to_string(), href));
                    break;
                }
            }
        }
    }
    let (title, href) = match title_and_href {
        Some(found) => found,
        None => return Ok(None),
    };

    let mut company = String::from("Company Not Listed");
    for selector in COMPANY_SELECTORS {
        if let Ok(element) = card.find_element(selector) {
            if let Ok(text) = element.get_inner_text() {
                let text = text.trim();
                if !text.is_empty() {
                    company = text.to_string();
                    break;
                }
            }
        }
    }

    Ok(Some(Job {
        title,
        company,
        link: clean_job_link(href),
        location: location_name.to_string(),
    }))
}

/// Normalize a scraped href: fall back when absent, resolve site-relative
/// links (the CDP attribute read returns them verbatim, a WebDriver href
/// read would have resolved them) and drop everything after the first `?`.
fn clean_job_link(href: Option<String>) -> String {
    let link = match href {
        Some(h) if h.starts_with("http") => h,
        Some(h) if h.starts_with('/') => format!("{LINKEDIN_ORIGIN}{h}"),
        Some(h) if !h.is_empty() => h,
        _ => return FALLBACK_JOB_LINK.to_string(),
    };
    match link.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => link,
    }
}

/// Per-card errors get a single log line, capped at 100 characters.
fn brief(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    if msg.chars().count() > 100 {
        let capped: String = msg.chars().take(100).collect();
        format!("{capped}...")
    } else {
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, id: &str) -> Location {
        Location {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn search_url_encodes_spaces_and_commas() {
        let url = search_url(
            "HTML CSS Javascript",
            &location("Bangalore, Karnataka", "102713980"),
        );
        assert_eq!(
            url,
            "https://www.linkedin.com/jobs/search/?keywords=HTML%20CSS%20Javascript\
             &location=Bangalore%2C%20Karnataka&locationId=102713980&f_AL=true"
        );
    }

    #[test]
    fn search_urls_are_clean_for_the_whole_table() {
        for loc in config::target_locations().unwrap() {
            let url = search_url(config::KEYWORDS, &loc);
            assert!(url.contains(&format!("locationId={}", loc.id)), "{url}");
            assert!(url.ends_with("&f_AL=true"), "{url}");
            assert!(!url.contains(' '), "raw space survived in {url}");
            assert!(!url.contains(','), "raw comma survived in {url}");
        }
    }

    #[test]
    fn absolute_links_keep_host_and_lose_query() {
        let href = Some("https://www.linkedin.com/jobs/view/42?refId=abc&tracking=1".to_string());
        assert_eq!(clean_job_link(href), "https://www.linkedin.com/jobs/view/42");
    }

    #[test]
    fn relative_links_resolve_against_linkedin() {
        let href = Some("/jobs/view/42?refId=abc".to_string());
        assert_eq!(clean_job_link(href), "https://www.linkedin.com/jobs/view/42");
    }

    #[test]
    fn missing_or_empty_href_falls_back() {
        assert_eq!(clean_job_link(None), FALLBACK_JOB_LINK);
        assert_eq!(clean_job_link(Some(String::new())), FALLBACK_JOB_LINK);
    }

    #[test]
    fn brief_caps_long_messages() {
        let err = anyhow::anyhow!("x".repeat(300));
        let msg = brief(&err);
        assert_eq!(msg.chars().count(), 103); // 100 kept + "..."
        assert!(msg.ends_with("..."));
    }

    #[test]
    fn brief_leaves_short_messages_alone() {
        let err = anyhow::anyhow!("no href on title element");
        assert_eq!(brief(&err), "no href on title element");
    }
}
