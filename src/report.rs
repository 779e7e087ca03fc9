// src/report.rs
//
// Pure string rendering: same job collection in, byte-identical HTML out.
// The report is consumed locally, so the only escaping is for the double
// quotes that would break the surrounding attributes.

use crate::jobs::{location_counts, Job};

const PAGE_TITLE: &str = "Global LinkedIn Job Search Results";
const BANNER: &str = "🚀 Global HTML/CSS/JS Job Opportunities";

const STYLE: &str = r#"
        body { font-family: 'Segoe UI', Arial, sans-serif; background: #f0f2f5; padding: 40px; }
        .container { max-width: 1200px; margin: auto; }
        .job-card { background: white; padding: 20px; margin-bottom: 15px; border-radius: 10px;
                    border-left: 5px solid #0073b1; box-shadow: 0 4px 6px rgba(0,0,0,0.1);
                    display: flex; justify-content: space-between; align-items: center; }
        .job-number { background: #0073b1; color: white; width: 35px; height: 35px;
                      border-radius: 50%; display: flex; align-items: center;
                      justify-content: center; font-weight: bold; margin-right: 15px; }
        .job-content { display: flex; align-items: center; flex-grow: 1; }
        .info { flex-grow: 1; }
        .info h3 { margin: 0 0 5px 0; color: #333; font-size: 18px; }
        .info p { color: #666; margin: 3px 0; }
        .info .location { color: #0073b1; font-weight: 500; }
        .location-filter { margin-bottom: 25px; }
        .location-filter select { padding: 10px 15px; border: 1px solid #ddd;
                                  border-radius: 5px; font-size: 14px; }
        .apply-btn { background: #0073b1; color: white; padding: 12px 25px;
                     text-decoration: none; border-radius: 25px; font-weight: bold;
                     transition: 0.3s; margin-left: 15px; }
        .apply-btn:hover { background: #005582; }
        .summary { background: white; padding: 20px; border-radius: 10px;
                   margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
    "#;

// Hides every card whose data-location is not an exact match for the
// selected option; "all" shows everything.
const FILTER_SCRIPT: &str = r#"
        function filterByLocation() {
            const selectedLocation = document.getElementById('location-select').value;
            const jobCards = document.querySelectorAll('.job-card');

            jobCards.forEach(card => {
                if (selectedLocation === 'all' || card.dataset.location === selectedLocation) {
                    card.style.display = 'flex';
                } else {
                    card.style.display = 'none';
                }
            });
        }
    "#;

/// Attribute-safe text: the report only ever interpolates fields inside
/// double-quoted attributes and plain element bodies.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "&quot;")
}

/// Render the whole collection into one self-contained HTML document.
pub fn render(jobs: &[Job]) -> String {
    let counts = location_counts(jobs);

    let mut options = String::new();
    for (location, count) in &counts {
        let safe_location = escape_quotes(location);
        options.push_str(&format!(
            "                    <option value=\"{safe_location}\">{safe_location} ({count})</option>\n"
        ));
    }

    let mut cards = String::new();
    for (i, job) in jobs.iter().enumerate() {
        let number = i + 1;
        let safe_title = escape_quotes(&job.title);
        let safe_company = escape_quotes(&job.company);
        let safe_location = escape_quotes(&job.location);
        let link = &job.link;
        cards.push_str(&format!(
            r#"                <div class="job-card" data-location="{safe_location}">
                    <div class="job-content">
                        <div class="job-number">{number}</div>
                        <div class="info">
                            <h3>{safe_title}</h3>
                            <p><strong>Company:</strong> {safe_company}</p>
                            <p class="location">📍 {safe_location}</p>
                        </div>
                    </div>
                    <a href="{link}" class="apply-btn" target="_blank">Easy Apply</a>
                </div>
"#
        ));
    }

    let total = jobs.len();
    let countries = counts.len();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{PAGE_TITLE}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        <h1>{BANNER}</h1>

        <div class="summary">
            <h3>📊 Search Summary</h3>
            <p><strong>Total Jobs Found:</strong> {total}</p>
            <p><strong>Countries Searched:</strong> {countries}</p>
        </div>

        <div class="location-filter">
            <label for="location-select"><strong>Filter by Location:</strong> </label>
            <select id="location-select" onchange="filterByLocation()">
                <option value="all">All Locations ({total})</option>
{options}            </select>
        </div>

        <div id="jobs-container">
{cards}        </div>
    </div>

    <script>{FILTER_SCRIPT}</script>
</body>
</html>
"#
    )
}
