//! spacetravelling: content pipeline of the spacetravelling blog
//!
//! Fetches posts from a Prismic-style headless CMS, normalizes the raw
//! documents into view entities, paginates the home feed with "load more"
//! semantics and computes reading time for full posts.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod gateway;
pub mod helpers;
pub mod view;

use std::path::{Path, PathBuf};

pub use config::SiteConfig;
pub use error::{Error, Result};

/// Name of the configuration file in the site directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A configured blog front-end
#[derive(Debug, Clone, Default)]
pub struct Spacetravelling {
    /// Site configuration
    pub config: SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Spacetravelling {
    /// Create an instance from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading configuration from {:?}", config_path);
            SiteConfig::load(&config_path)?
        } else {
            SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Build the CMS gateway for this site
    pub fn gateway(&self) -> Result<gateway::PrismicGateway> {
        gateway::PrismicGateway::new(&self.config.prismic)
    }
}
