//! Post view entities

use serde::{Deserialize, Serialize};

use super::richtext::{Dimensions, RichTextBlock};

// Optional text fields are left out of the JSON when absent; the
// publication date is nullable and always present, `null` meaning unpublished.

/// A post summary as shown in the home feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Navigation key, `/post/{uid}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// ISO-8601 timestamp, exactly as the CMS sent it
    pub first_publication_date: Option<String>,

    pub data: PostData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A full post as shown on its own page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: PostDetailData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub banner: Banner,
    pub content: Vec<ContentSection>,
    /// Minutes, computed from `content`
    pub estimated_reading_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub url: String,
    pub alt: String,
    pub dimensions: Dimensions,
}

/// A titled group of rich-text blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}

impl ContentSection {
    /// Heading followed by the text of every text-carrying block
    pub fn plain_text(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.heading.as_str()).chain(self.body.iter().filter_map(|b| b.text()))
    }
}
