//! Campfire connection configuration.

/// Default Campfire host pattern; `{domain}` is replaced by the account subdomain.
pub const DEFAULT_BASE_URL_TEMPLATE: &str = "https://{domain}.campfirenow.com";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("campfire-notifier/", env!("CARGO_PKG_VERSION"));

/// How to reach the Campfire service for a given domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampfireConfig {
    /// Base URL template containing `{domain}`, or a fixed URL (self-hosted / test servers)
    pub base_url: String,
    pub user_agent: String,
}

impl Default for CampfireConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL_TEMPLATE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CampfireConfig {
    /// Use a fixed base URL instead of the hosted template.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve the base URL for `domain`, without a trailing slash.
    pub fn base_url_for(&self, domain: &str) -> String {
        self.base_url
            .replace("{domain}", domain)
            .trim_end_matches('/')
            .to_string()
    }
}
