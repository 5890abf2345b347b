//! Prismic REST API v2 client

use async_trait::async_trait;
use reqwest::{Client, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::{ContentGateway, Predicate, QueryOptions};
use crate::config::PrismicConfig;
use crate::content::{RawDocument, RawPage};
use crate::error::{Error, Result};

/// API descriptor returned by `GET {endpoint}`
#[derive(Debug, Deserialize)]
struct ApiInfo {
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(default, rename = "isMasterRef")]
    is_master_ref: bool,
}

/// Gateway backed by a Prismic repository
pub struct PrismicGateway {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl PrismicGateway {
    /// Create a client from explicit connection settings
    pub fn new(config: &PrismicConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("spacetravelling/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/documents/search", self.endpoint)
    }

    fn with_token(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.query(&[("access_token", token)]),
            None => request,
        }
    }

    fn search_request(
        &self,
        master_ref: &str,
        predicate: &Predicate,
        options: &QueryOptions,
    ) -> RequestBuilder {
        let mut params = vec![
            ("ref", master_ref.to_string()),
            ("q", predicate.to_string()),
            ("pageSize", options.page_size.to_string()),
        ];
        if let Some(page) = options.page {
            params.push(("page", page.to_string()));
        }
        if let Some(orderings) = &options.orderings {
            params.push(("orderings", orderings.clone()));
        }

        self.with_token(self.client.get(self.search_url()).query(&params))
    }

    /// Build a request, labelling a failure with `target`
    fn build(request: RequestBuilder, target: &str) -> Result<Request> {
        request.build().map_err(|e| Error::fetch(target, e))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.execute(Self::build(request, &self.endpoint)?).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let url = request.url().to_string();
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .execute(request)
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::fetch(url.clone(), e))?;

        response.json::<T>().await.map_err(|e| Error::fetch(url, e))
    }

    /// Look up the ref of the currently published content
    async fn master_ref(&self) -> Result<String> {
        let info: ApiInfo = self
            .send(self.with_token(self.client.get(&self.endpoint)))
            .await?;

        info.refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or_else(|| {
                Error::fetch(
                    self.endpoint.clone(),
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "API descriptor lists no master ref",
                    ),
                )
            })
    }
}

#[async_trait]
impl ContentGateway for PrismicGateway {
    async fn fetch_page(&self, url: &str) -> Result<RawPage> {
        self.execute(Self::build(self.client.get(url), url)?).await
    }

    async fn query(&self, predicate: &Predicate, options: &QueryOptions) -> Result<RawPage> {
        let master_ref = self.master_ref().await?;
        self.send(self.search_request(&master_ref, predicate, options))
            .await
    }

    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<RawDocument> {
        let page = self
            .query(&Predicate::uid(doc_type, uid), &QueryOptions::page_size(1))
            .await?;

        page.results
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound {
                doc_type: doc_type.to_string(),
                uid: uid.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn gateway(token: Option<&str>) -> PrismicGateway {
        PrismicGateway::new(&PrismicConfig {
            endpoint: "https://spacetravelling.cdn.prismic.io/api/v2/".to_string(),
            access_token: token.map(str::to_string),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_search_request_url() {
        let gateway = gateway(Some("tok"));
        let request = gateway
            .search_request(
                "master-ref",
                &Predicate::document_type("posts"),
                &QueryOptions::page_size(20),
            )
            .build()
            .unwrap();

        let url = request.url();
        assert_eq!(url.path(), "/api/v2/documents/search");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ref".to_string(), "master-ref".to_string()),
                (
                    "q".to_string(),
                    r#"[[at(document.type, "posts")]]"#.to_string()
                ),
                ("pageSize".to_string(), "20".to_string()),
                ("access_token".to_string(), "tok".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_request_optional_params() {
        let gateway = gateway(None);
        let options = QueryOptions {
            page_size: 50,
            page: Some(2),
            orderings: Some("[document.first_publication_date desc]".to_string()),
        };
        let request = gateway
            .search_request("r", &Predicate::document_type("posts"), &options)
            .build()
            .unwrap();

        let query = request.url().query().unwrap_or_default().to_string();
        assert!(query.contains("page=2"));
        assert!(query.contains("orderings="));
        assert!(!query.contains("access_token"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = PrismicGateway::new(&PrismicConfig {
            endpoint: String::new(),
            ..PrismicConfig::default()
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    /// Canned HTTP responses keyed by request path
    struct Route {
        path: &'static str,
        status: u16,
        body: String,
    }

    /// Serve `routes` on a local port; returns the API endpoint and the
    /// request targets seen so far
    async fn serve(routes: Vec<Route>) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(routes);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = seen.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => break,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&request);
                    let target = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let path = target.split('?').next().unwrap_or("/").to_string();
                    log.lock().unwrap().push(target);

                    let (status, body) = routes
                        .iter()
                        .find(|route| route.path == path)
                        .map(|route| (route.status, route.body.clone()))
                        .unwrap_or((404, String::new()));
                    let response = format!(
                        "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        (format!("http://{}/api/v2", addr), seen)
    }

    fn local_gateway(endpoint: &str) -> PrismicGateway {
        PrismicGateway::new(&PrismicConfig {
            endpoint: endpoint.to_string(),
            access_token: None,
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn descriptor() -> Route {
        Route {
            path: "/api/v2",
            status: 200,
            body: r#"{"refs": [
                {"id": "preview", "ref": "P1", "label": "Preview"},
                {"id": "master", "ref": "YE1", "label": "Master", "isMasterRef": true}
            ]}"#
            .to_string(),
        }
    }

    fn search(status: u16, body: &str) -> Route {
        Route {
            path: "/api/v2/documents/search",
            status,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_query_uses_master_ref() {
        let (endpoint, seen) = serve(vec![
            descriptor(),
            search(
                200,
                r#"{"next_page": null, "results": [{"uid": "a", "data": {"title": "A"}}]}"#,
            ),
        ])
        .await;
        let gateway = local_gateway(&endpoint);

        let page = gateway
            .query(&Predicate::document_type("posts"), &QueryOptions::page_size(20))
            .await
            .unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].uid.as_deref(), Some("a"));

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].contains("ref=YE1"));
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let (endpoint, _) = serve(vec![Route {
            path: "/api/v2",
            status: 500,
            body: String::new(),
        }])
        .await;
        let gateway = local_gateway(&endpoint);

        let result = gateway
            .query(&Predicate::document_type("posts"), &QueryOptions::page_size(20))
            .await;
        match result {
            Err(Error::FetchFailure { url, .. }) => assert!(url.starts_with(&endpoint)),
            other => panic!("expected a fetch failure, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_fetch_failure() {
        let (endpoint, _) = serve(vec![descriptor(), search(200, "not json")]).await;
        let gateway = local_gateway(&endpoint);

        let result = gateway
            .query(&Predicate::document_type("posts"), &QueryOptions::page_size(20))
            .await;
        assert!(matches!(result, Err(Error::FetchFailure { .. })));
    }

    #[tokio::test]
    async fn test_descriptor_without_master_ref() {
        let (endpoint, seen) = serve(vec![Route {
            path: "/api/v2",
            status: 200,
            body: r#"{"refs": [{"id": "preview", "ref": "P1"}]}"#.to_string(),
        }])
        .await;
        let gateway = local_gateway(&endpoint);

        let result = gateway
            .query(&Predicate::document_type("posts"), &QueryOptions::page_size(20))
            .await;
        assert!(matches!(result, Err(Error::FetchFailure { .. })));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_uid_without_results_is_not_found() {
        let (endpoint, _) = serve(vec![
            descriptor(),
            search(200, r#"{"next_page": null, "results": []}"#),
        ])
        .await;
        let gateway = local_gateway(&endpoint);

        let result = gateway.get_by_uid("posts", "nope").await;
        match result {
            Err(Error::NotFound { doc_type, uid }) => {
                assert_eq!(doc_type, "posts");
                assert_eq!(uid, "nope");
            }
            other => panic!("expected not found, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_follows_cursor_verbatim() {
        let (endpoint, seen) = serve(vec![search(
            200,
            r#"{"next_page": null, "results": [{"uid": "b", "data": {"title": "B"}}]}"#,
        )])
        .await;
        let gateway = local_gateway(&endpoint);
        let cursor = format!("{}/documents/search?page=2&ref=YE1", endpoint);

        let page = gateway.fetch_page(&cursor).await.unwrap();
        assert_eq!(page.results[0].uid.as_deref(), Some("b"));
        assert_eq!(
            seen.lock().unwrap().clone(),
            vec!["/api/v2/documents/search?page=2&ref=YE1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_bad_cursor_names_the_cursor() {
        let gateway = gateway(None);

        match gateway.fetch_page("not a url").await {
            Err(Error::FetchFailure { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected a fetch failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_api_info() {
        let info: ApiInfo = serde_json::from_str(
            r#"{"refs": [
                {"id": "preview", "ref": "P1", "label": "Preview"},
                {"id": "master", "ref": "YE1", "label": "Master", "isMasterRef": true}
            ], "types": {"posts": "Posts"}}"#,
        )
        .unwrap();
        let master = info.refs.into_iter().find(|r| r.is_master_ref).unwrap();
        assert_eq!(master.reference, "YE1");
    }
}
