//! Plain-text views of the home feed and of a single post

use crate::config::SiteConfig;
use crate::content::{PaginationState, PostDetail, RichTextBlock};
use crate::helpers::Helpers;

/// Label of the control that loads the next page
pub const LOAD_MORE_LABEL: &str = "Load more posts";

/// Render the home listing
pub fn render_home(state: &PaginationState, config: &SiteConfig) -> String {
    let helpers = Helpers::new(config);
    let mut out = String::new();

    out.push_str(&format!("Home | {}\n\n", config.title));

    for post in &state.posts {
        let data = &post.data;
        out.push_str(data.title.as_deref().unwrap_or_default());
        out.push('\n');
        if let Some(subtitle) = data.subtitle.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!("  {}\n", subtitle));
        }
        out.push_str(&format!(
            "  {}  |  {}\n",
            helpers.date(post.first_publication_date.as_deref()),
            data.author.as_deref().unwrap_or_default()
        ));
        if let Some(uid) = post.uid.as_deref() {
            out.push_str(&format!("  {}\n", helpers.post_path(uid)));
        }
        out.push('\n');
    }

    if state.has_more() {
        out.push_str(&format!("[{}]\n", LOAD_MORE_LABEL));
    }

    out
}

/// Render a full post page
pub fn render_post(post: &PostDetail, config: &SiteConfig) -> String {
    let helpers = Helpers::new(config);
    let data = &post.data;
    let title = data.title.as_deref().unwrap_or_default();
    let mut out = String::new();

    out.push_str(&format!("{} | {}\n", title, config.title));
    out.push_str(&format!(
        "[banner: {}]\n\n",
        describe_image(&data.banner.alt, &data.banner.url)
    ));
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!(
        "{}  |  {}  |  {} min\n",
        helpers.date(post.first_publication_date.as_deref()),
        data.author.as_deref().unwrap_or_default(),
        data.estimated_reading_time
    ));

    for section in &data.content {
        out.push_str(&format!("\n## {}\n", section.heading));
        let mut ordered = 0;
        for block in &section.body {
            if matches!(block, RichTextBlock::OrderedListItem(_)) {
                ordered += 1;
            } else {
                ordered = 0;
            }
            if let Some(line) = render_block(block, ordered) {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    out
}

fn render_block(block: &RichTextBlock, ordinal: usize) -> Option<String> {
    let line = match block {
        RichTextBlock::ListItem(item) => format!("- {}", item.text),
        RichTextBlock::OrderedListItem(item) => format!("{}. {}", ordinal, item.text),
        RichTextBlock::Image(image) => format!(
            "[image: {}]",
            describe_image(image.alt.as_deref().unwrap_or_default(), &image.url)
        ),
        RichTextBlock::Embed(embed) => format!("[embed: {}]", embed.url().unwrap_or("unknown")),
        RichTextBlock::Unknown => return None,
        other => match other.heading_level() {
            Some(level) => format!("{} {}", "#".repeat(level as usize + 2), other.text()?),
            None => other.text()?.to_string(),
        },
    };
    Some(line)
}

fn describe_image<'a>(alt: &'a str, url: &'a str) -> &'a str {
    if alt.is_empty() {
        url
    } else {
        alt
    }
}
