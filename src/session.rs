// src/session.rs

use std::ffi::OsStr;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use headless_chrome::protocol::cdp::Network::CookieParam;
use headless_chrome::{Browser, LaunchOptionsBuilder, Tab};
use serde_json::json;
use tracing::info;

/// An authenticated LinkedIn browser session: one Chrome process, one tab,
/// reused for every location search. Dropping the session kills Chrome on
/// success and failure paths alike.
pub struct Session {
    tab: Arc<Tab>,
    // Held for its lifetime only; the Chrome process dies with this handle.
    _browser: Browser,
}

impl Session {
    /// Launch headless Chrome, land on linkedin.com and attach the `li_at`
    /// session cookie. Any failure here is fatal.
    pub fn start(li_at_cookie: &str) -> Result<Session> {
        info!("🔄 Setting up headless Chrome...");
        let options = LaunchOptionsBuilder::default()
            .headless(true)
            .sandbox(false)
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
            ])
            .build()
            .map_err(|e| anyhow!("assembling launch options: {e}"))?;
        let browser = Browser::new(options).context("launching headless Chrome")?;
        let tab = browser.new_tab().context("opening browser tab")?;
        info!("✅ Chrome ready");

        info!("🌐 Navigating to LinkedIn...");
        tab.navigate_to("https://www.linkedin.com")?
            .wait_until_navigated()?;

        info!("🔐 Adding authentication cookie...");
        // CookieParam is mostly a tail of optional CDP fields; build it
        // from its JSON shape.
        let cookie: CookieParam = serde_json::from_value(json!({
            "name": "li_at",
            "value": li_at_cookie,
            "domain": ".www.linkedin.com",
            "path": "/",
            "secure": true,
            "httpOnly": true,
        }))
        .context("assembling li_at cookie")?;
        tab.set_cookies(vec![cookie])
            .context("injecting li_at cookie")?;

        Ok(Session {
            tab,
            _browser: browser,
        })
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }
}
