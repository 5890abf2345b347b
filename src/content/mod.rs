//! Content module - CMS documents, view entities and the home feed state

mod normalize;
mod pagination;
mod post;
mod raw;
mod reading_time;
pub mod richtext;

pub use normalize::{normalize_post, normalize_post_detail};
pub use pagination::PaginationState;
pub use post::{Banner, ContentSection, Post, PostData, PostDetail, PostDetailData};
pub use raw::{RawDocument, RawPage};
pub use reading_time::{count_words, estimate_reading_time, DEFAULT_WORDS_PER_MINUTE};
pub use richtext::RichTextBlock;
