//! Reading time estimation

use super::post::ContentSection;

/// Reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Count whitespace-separated words across headings and text blocks
///
/// Images, embeds and unknown blocks carry no words.
pub fn count_words(content: &[ContentSection]) -> usize {
    content
        .iter()
        .flat_map(|section| section.plain_text())
        .map(|text| text.split_whitespace().count())
        .sum()
}

/// Estimated minutes to read `content`
///
/// Partial minutes round up and every post takes at least one minute,
/// including one without any words.
pub fn estimate_reading_time(content: &[ContentSection], words_per_minute: u32) -> u32 {
    let words = count_words(content);
    let speed = words_per_minute.max(1) as usize;
    let minutes = words.div_ceil(speed).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
