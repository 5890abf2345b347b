//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/post/hello") // -> "/blog/post/hello"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Route of a single post page, keyed by uid, before the site root is applied
pub fn post_route(uid: &str) -> String {
    format!("/post/{}", uid)
}

/// Route of a single post page under the site root
pub fn post_path(config: &SiteConfig, uid: &str) -> String {
    url_for(config, &post_route(uid))
}
