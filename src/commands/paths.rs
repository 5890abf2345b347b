//! Print the post paths to pre-render

use anyhow::{Context, Result};

use crate::feed::static_paths;
use crate::gateway::ContentGateway;
use crate::helpers::url_for;
use crate::Spacetravelling;

pub async fn run(site: &Spacetravelling, gateway: &dyn ContentGateway) -> Result<String> {
    let config = &site.config;
    let routes = static_paths(gateway, &config.post_type, config.paths_per_page)
        .await
        .context("Failed to list post paths")?;
    tracing::info!("Found {} post paths", routes.len());

    let paths: Vec<String> = routes.iter().map(|route| url_for(config, route)).collect();
    let mut out = paths.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::gateway::stub::StubGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_paths_under_configured_root() {
        let site = Spacetravelling {
            config: SiteConfig {
                root: "/blog".to_string(),
                ..SiteConfig::default()
            },
            ..Spacetravelling::default()
        };
        let mut gateway = StubGateway::default();
        gateway.first_page.results = vec![serde_json::from_value(
            json!({"uid": "hello", "data": {"title": "Hello"}}),
        )
        .unwrap()];

        let out = run(&site, &gateway).await.unwrap();
        assert_eq!(out, "/blog/post/hello\n");
    }

    #[tokio::test]
    async fn test_no_paths() {
        let site = Spacetravelling::default();
        let out = run(&site, &StubGateway::default()).await.unwrap();
        assert_eq!(out, "");
    }
}
