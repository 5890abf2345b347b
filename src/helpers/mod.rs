//! Helper functions for views
//!
//! Date formatting and URL generation shared by the text views and the CLI.

mod date;
mod url;

pub use date::*;
pub use url::*;

use crate::config::SiteConfig;

/// Shown instead of a publication date that is missing or unreadable
pub const DATE_PLACEHOLDER: &str = "unpublished";

/// Collection of helper functions bound to a site configuration
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Get url_for helper
    pub fn url_for(&self, path: &str) -> String {
        url_for(self.config, path)
    }

    /// Get post_path helper
    pub fn post_path(&self, uid: &str) -> String {
        post_path(self.config, uid)
    }

    /// Format a publication date, falling back to a placeholder
    pub fn date(&self, date: Option<&str>) -> String {
        match format_date_with(date, &self.config.date_format) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::debug!("Not formatting publication date: {}", e);
                DATE_PLACEHOLDER.to_string()
            }
        }
    }
}
