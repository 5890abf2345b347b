//! Validation and conversion of raw CMS documents into view entities

use serde::Deserialize;
use serde_json::Value;

use super::post::{Banner, ContentSection, Post, PostData, PostDetail, PostDetailData};
use super::raw::RawDocument;
use super::reading_time::estimate_reading_time;
use super::richtext::{Dimensions, RichTextBlock};
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct SummaryFields {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

#[derive(Deserialize)]
struct DetailFields {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    banner: Option<BannerFields>,
    #[serde(default)]
    content: Option<Vec<SectionFields>>,
}

#[derive(Deserialize)]
struct BannerFields {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    dimensions: Option<Dimensions>,
}

#[derive(Deserialize)]
struct SectionFields {
    #[serde(default)]
    heading: Option<String>,
    #[serde(default)]
    body: Vec<RichTextBlock>,
}

/// Validated `data` payload of a document
fn payload(raw: &RawDocument) -> Result<&Value> {
    match &raw.data {
        Some(data @ Value::Object(_)) => Ok(data),
        None | Some(Value::Null) => Err(Error::MalformedDocument(format!(
            "document {} has no data payload",
            raw.label()
        ))),
        Some(other) => Err(Error::MalformedDocument(format!(
            "document {} has a non-object data payload: {}",
            raw.label(),
            other
        ))),
    }
}

fn fields<'a, T: Deserialize<'a>>(raw: &RawDocument, data: &'a Value) -> Result<T> {
    T::deserialize(data).map_err(|e| {
        Error::MalformedDocument(format!("document {}: {}", raw.label(), e))
    })
}

/// Convert a raw document into a feed entry
///
/// Fields are copied verbatim. Missing fields become `None`; a missing
/// payload or a wrongly typed field rejects the document.
pub fn normalize_post(raw: &RawDocument) -> Result<Post> {
    let data = payload(raw)?;
    let SummaryFields {
        title,
        subtitle,
        author,
    } = fields(raw, data)?;

    Ok(Post {
        uid: raw.uid.clone(),
        first_publication_date: raw.first_publication_date.clone(),
        data: PostData {
            title,
            subtitle,
            author,
        },
    })
}

/// Convert a raw document into a full post, computing its reading time
pub fn normalize_post_detail(raw: &RawDocument, words_per_minute: u32) -> Result<PostDetail> {
    let data = payload(raw)?;
    let DetailFields {
        title,
        subtitle,
        author,
        banner,
        content,
    } = fields(raw, data)?;

    let banner = banner.ok_or_else(|| {
        Error::MalformedDocument(format!("document {} has no banner", raw.label()))
    })?;
    let banner = Banner {
        url: banner.url.ok_or_else(|| {
            Error::MalformedDocument(format!("document {} has a banner without url", raw.label()))
        })?,
        alt: banner.alt.unwrap_or_default(),
        dimensions: banner.dimensions.unwrap_or_default(),
    };

    let content: Vec<ContentSection> = content
        .unwrap_or_default()
        .into_iter()
        .map(|section| ContentSection {
            heading: section.heading.unwrap_or_default(),
            body: section.body,
        })
        .collect();

    let estimated_reading_time = estimate_reading_time(&content, words_per_minute);

    Ok(PostDetail {
        uid: raw.uid.clone(),
        first_publication_date: raw.first_publication_date.clone(),
        data: PostDetailData {
            title,
            subtitle,
            author,
            banner,
            content,
            estimated_reading_time,
        },
    })
}
