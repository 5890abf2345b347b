//! Content fetch gateway - the boundary to the headless CMS
//!
//! The pipeline only needs three operations from the CMS: run a query,
//! follow a `next_page` cursor and look a document up by uid. They are
//! expressed as the [`ContentGateway`] trait so the feed can be driven by
//! the Prismic client in production and by an in-memory stub in tests.

mod prismic;

use async_trait::async_trait;
use std::fmt;

use crate::content::{RawDocument, RawPage};
use crate::error::Result;

pub use prismic::PrismicGateway;

#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Fetch the page behind an opaque `next_page` URL
    async fn fetch_page(&self, url: &str) -> Result<RawPage>;

    /// Run a predicate query and return its first page
    async fn query(&self, predicate: &Predicate, options: &QueryOptions) -> Result<RawPage>;

    /// Fetch a single document of `doc_type` by uid
    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<RawDocument>;
}

/// A query predicate in Prismic syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `[[at(path, "value")]]`
    At { path: String, value: String },
}

impl Predicate {
    pub fn at(path: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::At {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Match every document of a custom type
    pub fn document_type(doc_type: &str) -> Self {
        Self::at("document.type", doc_type)
    }

    /// Match the document of `doc_type` with the given uid
    pub fn uid(doc_type: &str, uid: &str) -> Self {
        Self::at(format!("my.{}.uid", doc_type), uid)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::At { path, value } => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "[[at({}, \"{}\")]]", path, escaped)
            }
        }
    }
}

/// Paging options of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub page_size: u32,
    pub page: Option<u32>,
    /// e.g. `[document.first_publication_date desc]`
    pub orderings: Option<String>,
}

impl QueryOptions {
    pub fn page_size(page_size: u32) -> Self {
        Self {
            page_size,
            page: None,
            orderings: None,
        }
    }
}
