//! Write a starter configuration

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# spacetravelling configuration

# Site
title: spacetravelling
root: /

# Display (date-fns style pattern)
date_format: dd MMM yyyy

# Content
post_type: posts
per_page: 20
paths_per_page: 50
words_per_minute: 200

# CMS
prismic:
  endpoint: https://spacetravelling.cdn.prismic.io/api/v2
  access_token:
  timeout_secs: 10
"#;

/// Create `_config.yml` in the given directory
///
/// An existing configuration is never overwritten.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("{:?} already exists", config_path);
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::info!("Created {:?}", config_path);

    Ok(())
}
