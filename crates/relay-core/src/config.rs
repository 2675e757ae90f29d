//! # Relay Configuration
//!
//! Values the facade needs at request time. Built once at startup and
//! never mutated afterwards.

/// Where the provider sends the end user after checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl RedirectUrls {
    pub const DEFAULT_SUCCESS_URL: &'static str = "https://your-app.com/success";
    pub const DEFAULT_CANCEL_URL: &'static str = "https://your-app.com/cancel";

    pub fn new(success_url: impl Into<String>, cancel_url: impl Into<String>) -> Self {
        Self {
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }
}

impl Default for RedirectUrls {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUCCESS_URL, Self::DEFAULT_CANCEL_URL)
    }
}

/// Facade configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Price id used for the single checkout line item
    pub price_id: String,
    /// Mapping-service token handed out by `/map-token`
    pub map_token: Option<String>,
    /// Fixed checkout redirects
    pub redirect_urls: RedirectUrls,
}

impl RelayConfig {
    pub fn new(price_id: impl Into<String>, map_token: Option<String>) -> Self {
        Self {
            price_id: price_id.into(),
            map_token,
            redirect_urls: RedirectUrls::default(),
        }
    }

    /// Builder: override the redirect URLs (tests only need this)
    pub fn with_redirect_urls(mut self, urls: RedirectUrls) -> Self {
        self.redirect_urls = urls;
        self
    }
}
