// src/core/net.rs

// Blocking HTTP GET. One request at a time; pacing is the runner's job.

use std::time::Duration;

use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Source of page bodies. The runner only ever talks to this trait,
/// so tests can feed captured pages without a network.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

/// Resolve a possibly relative link against the site base.
/// Wikidot page names ("feat:alert") look like a scheme to the URL parser,
/// so only http(s) links count as absolute.
pub fn join_url(base: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    if href.is_empty() {
        return s!(base);
    }

    let base_url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("invalid base URL '{base}': {e}, keeping link '{href}'");
            return s!(href);
        }
    };
    let joined = if href.starts_with('/') || href.starts_with('.') || href.starts_with('?') || href.starts_with('#') {
        base_url.join(href)
    } else {
        base_url.join(&join!("./", href))
    };
    match joined {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::warn!("cannot resolve '{href}' against '{base}': {e}");
            s!(href)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_variants() {
        let base = "http://dnd5e.wikidot.com";
        assert_eq!(join_url(base, "/spell:fireball"), "http://dnd5e.wikidot.com/spell:fireball");
        assert_eq!(join_url(base, "feat:alert"), "http://dnd5e.wikidot.com/feat:alert");
        assert_eq!(join_url("http://x.test/", "/a"), "http://x.test/a");
        assert_eq!(join_url(base, "https://other.test/p"), "https://other.test/p");
        assert_eq!(join_url(base, ""), base);
    }

    #[test]
    fn join_url_resolves_like_a_browser() {
        assert_eq!(join_url("http://dnd5e.wikidot.com", "//cdn.test/x"), "http://cdn.test/x");
        assert_eq!(join_url("http://h.test/a/b", "../c"), "http://h.test/c");
        assert_eq!(join_url("http://h.test/a/b", "/spells"), "http://h.test/spells");
        assert_eq!(join_url("http://h.test/a/b", "feat:alert"), "http://h.test/a/feat:alert");
    }

    #[test]
    fn join_url_keeps_href_on_bad_base() {
        assert_eq!(join_url("not a url", "/spell:alarm"), "/spell:alarm");
    }
}
