//! List the home feed

use anyhow::{Context, Result};

use crate::feed::PostFeed;
use crate::gateway::ContentGateway;
use crate::view::render_home;
use crate::Spacetravelling;

/// How many extra pages to load after the first one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    None,
    Pages(usize),
    All,
}

/// Seed the feed, load more pages as asked and render it
pub async fn run(
    site: &Spacetravelling,
    gateway: &dyn ContentGateway,
    load_more: LoadMore,
    json: bool,
) -> Result<String> {
    let config = &site.config;
    let mut feed = PostFeed::seed(gateway, &config.post_type, config.per_page)
        .await
        .context("Failed to load the home feed")?;

    let limit = match load_more {
        LoadMore::None => Some(0),
        LoadMore::Pages(pages) => Some(pages),
        LoadMore::All => None,
    };
    let loaded = feed
        .load_all(limit)
        .await
        .context("Failed to load more posts")?;
    tracing::info!(
        "Loaded {} posts ({} extra pages)",
        feed.state().posts.len(),
        loaded
    );

    if json {
        Ok(serde_json::to_string_pretty(feed.state())?)
    } else {
        Ok(render_home(feed.state(), config))
    }
}
