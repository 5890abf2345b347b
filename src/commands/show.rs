//! Show a single post

use anyhow::{Context, Result};

use crate::feed::fetch_post;
use crate::gateway::ContentGateway;
use crate::view::render_post;
use crate::Spacetravelling;

pub async fn run(
    site: &Spacetravelling,
    gateway: &dyn ContentGateway,
    uid: &str,
    json: bool,
) -> Result<String> {
    let config = &site.config;
    let post = fetch_post(gateway, &config.post_type, uid, config.words_per_minute)
        .await
        .with_context(|| format!("Failed to load post {:?}", uid))?;

    tracing::info!(
        "Loaded post {} ({} min read)",
        uid,
        post.data.estimated_reading_time
    );

    if json {
        Ok(serde_json::to_string_pretty(&post)?)
    } else {
        Ok(render_post(&post, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gateway::stub::StubGateway;
    use serde_json::json;

    fn gateway() -> StubGateway {
        let mut gateway = StubGateway::default();
        gateway.documents.insert(
            "como-utilizar-hooks".to_string(),
            serde_json::from_value(json!({
                "uid": "como-utilizar-hooks",
                "first_publication_date": "2021-03-15T19:25:28+0000",
                "data": {
                    "title": "Como utilizar Hooks",
                    "author": "Joseph Oliveira",
                    "banner": {"url": "https://images.prismic.io/b.png", "alt": "hooks",
                               "dimensions": {"width": 1440, "height": 600}},
                    "content": [{"heading": "Intro", "body": [
                        {"type": "paragraph", "text": "Some text", "spans": []}
                    ]}]
                }
            }))
            .unwrap(),
        );
        gateway
    }

    #[tokio::test]
    async fn test_show_renders_post() {
        let site = Spacetravelling::default();
        let out = run(&site, &gateway(), "como-utilizar-hooks", false)
            .await
            .unwrap();
        assert!(out.contains("Como utilizar Hooks | spacetravelling"));
        assert!(out.contains("1 min"));
        assert!(out.contains("## Intro"));
    }

    #[tokio::test]
    async fn test_show_json_has_reading_time() {
        let site = Spacetravelling::default();
        let out = run(&site, &gateway(), "como-utilizar-hooks", true)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["estimatedReadingTime"], 1);
        assert_eq!(value["firstPublicationDate"], "2021-03-15T19:25:28+0000");
    }

    #[tokio::test]
    async fn test_show_unknown_uid() {
        let site = Spacetravelling::default();
        let err = run(&site, &gateway(), "missing", false).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotFound { .. })
        ));
    }
}
