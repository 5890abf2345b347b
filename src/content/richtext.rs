//! Prismic structured text blocks

use serde::{Deserialize, Serialize};

/// One block of a structured text field, tagged by its `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RichTextBlock {
    #[serde(rename = "paragraph")]
    Paragraph(TextBlock),
    #[serde(rename = "heading1")]
    Heading1(TextBlock),
    #[serde(rename = "heading2")]
    Heading2(TextBlock),
    #[serde(rename = "heading3")]
    Heading3(TextBlock),
    #[serde(rename = "heading4")]
    Heading4(TextBlock),
    #[serde(rename = "heading5")]
    Heading5(TextBlock),
    #[serde(rename = "heading6")]
    Heading6(TextBlock),
    #[serde(rename = "preformatted")]
    Preformatted(TextBlock),
    #[serde(rename = "list-item")]
    ListItem(TextBlock),
    #[serde(rename = "o-list-item")]
    OrderedListItem(TextBlock),
    #[serde(rename = "image")]
    Image(ImageBlock),
    #[serde(rename = "embed")]
    Embed(EmbedBlock),
    /// Block types this crate does not know about
    #[serde(other)]
    Unknown,
}

impl RichTextBlock {
    /// Inline text of the block, if it carries any
    pub fn text(&self) -> Option<&str> {
        match self {
            RichTextBlock::Paragraph(block)
            | RichTextBlock::Heading1(block)
            | RichTextBlock::Heading2(block)
            | RichTextBlock::Heading3(block)
            | RichTextBlock::Heading4(block)
            | RichTextBlock::Heading5(block)
            | RichTextBlock::Heading6(block)
            | RichTextBlock::Preformatted(block)
            | RichTextBlock::ListItem(block)
            | RichTextBlock::OrderedListItem(block) => Some(&block.text),
            RichTextBlock::Image(_) | RichTextBlock::Embed(_) | RichTextBlock::Unknown => None,
        }
    }

    /// Heading level (1-6) for heading blocks
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            RichTextBlock::Heading1(_) => Some(1),
            RichTextBlock::Heading2(_) => Some(2),
            RichTextBlock::Heading3(_) => Some(3),
            RichTextBlock::Heading4(_) => Some(4),
            RichTextBlock::Heading5(_) => Some(5),
            RichTextBlock::Heading6(_) => Some(6),
            _ => None,
        }
    }
}

/// A block with inline text and formatting spans
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
}

/// Formatting applied to a character range of a text block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// strong, em, hyperlink, label, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedBlock {
    pub oembed: serde_json::Value,
}

impl EmbedBlock {
    /// URL of the embedded resource, when the provider gave one
    pub fn url(&self) -> Option<&str> {
        self.oembed
            .get("embed_url")
            .or_else(|| self.oembed.get("url"))
            .and_then(|url| url.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: u32,
    pub width: u32,
}
