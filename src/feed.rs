//! Post feed - drives the gateway and owns the pagination state

use std::collections::HashSet;

use crate::content::{normalize_post_detail, PaginationState, PostDetail};
use crate::error::Result;
use crate::gateway::{ContentGateway, Predicate, QueryOptions};
use crate::helpers::post_route;

/// The home feed of one view
///
/// `load_more` takes `&mut self`, so a feed never has two fetches in
/// flight and every merge replaces the state as a whole.
pub struct PostFeed<'g> {
    gateway: &'g dyn ContentGateway,
    state: PaginationState,
}

impl<'g> PostFeed<'g> {
    /// Start a feed from existing state
    pub fn new(gateway: &'g dyn ContentGateway, state: PaginationState) -> Self {
        Self { gateway, state }
    }

    /// Query the first page of `doc_type` documents
    pub async fn seed(
        gateway: &'g dyn ContentGateway,
        doc_type: &str,
        page_size: u32,
    ) -> Result<PostFeed<'g>> {
        let page = gateway
            .query(
                &Predicate::document_type(doc_type),
                &QueryOptions::page_size(page_size),
            )
            .await?;
        let state = PaginationState::seed(&page)?;
        tracing::debug!("Seeded feed with {} {}", state.posts.len(), doc_type);
        Ok(Self { gateway, state })
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn into_state(self) -> PaginationState {
        self.state
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    /// Fetch and append the next page
    ///
    /// Returns `false` without fetching when there is nothing left. On
    /// error the state is left as it was.
    pub async fn load_more(&mut self) -> Result<bool> {
        let url = match self.state.next_page_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => return Ok(false),
        };

        let page = self.gateway.fetch_page(&url).await?;
        self.state = self.state.merge_page(&page)?;
        Ok(true)
    }

    /// Keep loading pages until none are left or `max_pages` were loaded
    ///
    /// Returns how many pages were loaded. A cursor that was already
    /// followed ends the walk, so a cyclic `next_page` cannot loop forever.
    pub async fn load_all(&mut self, max_pages: Option<usize>) -> Result<usize> {
        let mut followed: HashSet<String> = HashSet::new();
        let mut loaded = 0;

        while max_pages.map_or(true, |max| loaded < max) {
            if let Some(url) = self.state.next_page_url.as_deref() {
                if !followed.insert(url.to_string()) {
                    tracing::warn!("Next page {} was already loaded, stopping", url);
                    break;
                }
            }
            if !self.load_more().await? {
                break;
            }
            loaded += 1;
        }

        Ok(loaded)
    }
}

/// Fetch one post and normalize it for its own page
pub async fn fetch_post(
    gateway: &dyn ContentGateway,
    doc_type: &str,
    uid: &str,
    words_per_minute: u32,
) -> Result<PostDetail> {
    let raw = gateway.get_by_uid(doc_type, uid).await?;
    normalize_post_detail(&raw, words_per_minute)
}

/// Routes of the posts to pre-render, `/post/{uid}`
///
/// Only the first page is listed; the remaining posts are rendered on
/// demand. Documents without a uid cannot be routed to and are skipped.
pub async fn static_paths(
    gateway: &dyn ContentGateway,
    doc_type: &str,
    page_size: u32,
) -> Result<Vec<String>> {
    let page = gateway
        .query(
            &Predicate::document_type(doc_type),
            &QueryOptions::page_size(page_size),
        )
        .await?;

    Ok(page
        .results
        .iter()
        .filter_map(|doc| doc.uid.as_deref())
        .map(post_route)
        .collect())
}
