//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::DEFAULT_WORDS_PER_MINUTE;
use crate::error::{Error, Result};

/// Largest page size the Prismic search API accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub root: String,

    // Display
    /// date-fns style pattern, e.g. "dd MMM yyyy"
    pub date_format: String,

    // Content
    pub post_type: String,
    /// Page size of the home feed
    pub per_page: u32,
    /// Page size used when listing static post paths
    pub paths_per_page: u32,
    pub words_per_minute: u32,

    // CMS
    #[serde(default)]
    pub prismic: PrismicConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "spacetravelling".to_string(),
            root: "/".to_string(),

            date_format: "dd MMM yyyy".to_string(),

            post_type: "posts".to_string(),
            per_page: 20,
            paths_per_page: 50,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,

            prismic: PrismicConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 {
            return Err(Error::Config("words_per_minute must be positive".into()));
        }
        for (name, size) in [
            ("per_page", self.per_page),
            ("paths_per_page", self.paths_per_page),
        ] {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(Error::Config(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_PAGE_SIZE, size
                )));
            }
        }
        if self.post_type.trim().is_empty() {
            return Err(Error::Config("post_type must not be empty".into()));
        }
        self.prismic.validate()
    }
}

/// Connection settings for the Prismic repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismicConfig {
    /// API v2 endpoint, e.g. https://<repo>.cdn.prismic.io/api/v2
    pub endpoint: String,
    pub access_token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PrismicConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://spacetravelling.cdn.prismic.io/api/v2".to_string(),
            access_token: None,
            timeout_secs: 10,
        }
    }
}

impl PrismicConfig {
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("prismic.endpoint must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("prismic.timeout_secs must be positive".into()));
        }
        Ok(())
    }
}
