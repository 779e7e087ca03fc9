// src/main.rs

//! LinkedIn Easy Apply job sweep: one headless-Chrome session, a fixed
//! table of locations searched in sequence, one static HTML report out.

use anyhow::{Context, Result};
use jobscout::{config, jobs, report, search, session::Session};
use rand::Rng;
use tokio::time::Duration;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let locations = config::target_locations()?;
    let session = Session::start(config::LI_AT_COOKIE)?;

    let mut all_jobs = Vec::new();
    for location in &locations {
        let found = search::search_location(session.tab(), config::KEYWORDS, location)?;
        all_jobs.extend(found);
        let pause = rand::thread_rng().gen_range(2_600..=3_400); // ms, eases off between locations
        std::thread::sleep(Duration::from_millis(pause));
    }

    info!("📄 Generating HTML report with {} total jobs...", all_jobs.len());
    tokio::fs::write(config::OUTPUT_FILE, report::render(&all_jobs))
        .await
        .with_context(|| format!("writing {}", config::OUTPUT_FILE))?;
    info!("✅ Report written to {}", config::OUTPUT_FILE);

    info!("📊 Job Summary by Location:");
    for (location, count) in jobs::location_counts(&all_jobs) {
        info!("  📍 {location}: {count} jobs");
    }
    info!("🎯 Total jobs found: {}", all_jobs.len());

    Ok(())
}
