//! Home feed pagination state

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::normalize::normalize_post;
use super::post::Post;
use super::raw::RawPage;
use crate::error::Result;

/// Posts loaded so far plus the cursor of the next page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub next_page_url: Option<String>,
    pub posts: Vec<Post>,
}

impl PaginationState {
    /// Build the initial state from the first page of results
    pub fn seed(page: &RawPage) -> Result<Self> {
        Self::default().merge_page(page)
    }

    /// Whether another page can be loaded
    pub fn has_more(&self) -> bool {
        self.next_page_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }

    /// Append a newly fetched page, returning the new state
    ///
    /// Every result is normalized before anything is appended, so a
    /// malformed document fails the whole merge. Posts are not
    /// de-duplicated; a repeated uid is only logged.
    pub fn merge_page(&self, page: &RawPage) -> Result<Self> {
        let incoming = page
            .results
            .iter()
            .map(normalize_post)
            .collect::<Result<Vec<_>>>()?;

        let mut seen: HashSet<&str> = self.posts.iter().filter_map(|p| p.uid.as_deref()).collect();
        for post in &incoming {
            if let Some(uid) = post.uid.as_deref() {
                if !seen.insert(uid) {
                    tracing::warn!("Post {} appears more than once in the feed", uid);
                }
            }
        }

        let mut posts = Vec::with_capacity(self.posts.len() + incoming.len());
        posts.extend_from_slice(&self.posts);
        posts.extend(incoming);

        tracing::debug!(
            "Merged {} posts, {} total, more pages: {}",
            page.results.len(),
            posts.len(),
            page.next_page.as_deref().is_some_and(|url| !url.is_empty())
        );

        Ok(Self {
            next_page_url: page.next_page.clone(),
            posts,
        })
    }
}
