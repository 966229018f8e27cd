use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{Result, WidgetError};
use crate::client::envelope::{parse_entity_details, parse_reviews};
use crate::client::ReviewSource;
use crate::config::ApiConfig;
use crate::domain::{EntityDetails, Review};

/// reqwest-backed content API client.
pub struct HttpReviewClient {
    client: Client,
    base_url: Url,
    api_key: String,
    entity_version: String,
    reviews_version: String,
}

impl HttpReviewClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(api.user_agent.as_str())
            .build()?;
        Self::with_client(client, api)
    }

    fn with_client(client: Client, api: &ApiConfig) -> Result<Self> {
        // A trailing slash keeps the last path segment when joining
        let mut base = api.base_url.trim_end_matches('/').to_string();
        base.push('/');

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
            api_key: api.api_key.clone(),
            entity_version: api.entity_version.clone(),
            reviews_version: api.reviews_version.clone(),
        })
    }

    /// `{base}/entities/{entity_id}?api_key=..&v=..`
    pub fn entity_url(&self, entity_id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| WidgetError::Config(format!("Base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["entities", entity_id]);
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("v", &self.entity_version);
        Ok(url)
    }

    /// `{base}/content/reviews?api_key=..&v=..&entity.id=..`
    pub fn reviews_url(&self, entity_id: &str) -> Result<Url> {
        let mut url = self.base_url.join("content/reviews")?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("v", &self.reviews_version)
            .append_pair("entity.id", entity_id);
        Ok(url)
    }

    async fn get(&self, url: Url, resource: &'static str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching {} from {}{}", resource, url.origin().ascii_serialization(), url.path());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Fetch { resource, status });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ReviewSource for HttpReviewClient {
    async fn fetch_entity_details(&self, entity_id: &str) -> Result<EntityDetails> {
        let body = self.get(self.entity_url(entity_id)?, "entity details").await?;
        let entity = parse_entity_details(&body)?;
        tracing::info!("Fetched entity details for {} ({})", entity_id, entity.name);
        Ok(entity)
    }

    async fn fetch_reviews(&self, entity_id: &str) -> Result<Vec<Review>> {
        let body = self.get(self.reviews_url(entity_id)?, "reviews").await?;
        let reviews = parse_reviews(&body)?;
        tracing::info!("Fetched {} reviews for {}", reviews.len(), entity_id);
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve canned responses on a loopback port, one per connection, in order.
    /// Returns the base URL and a handle yielding the request lines received.
    async fn serve(
        responses: Vec<(u16, &'static str)>,
    ) -> (String, tokio::task::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut request_lines = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let text = String::from_utf8_lossy(&request);
                request_lines.push(text.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            request_lines
        });

        (format!("http://{addr}/v2/accounts/me"), handle)
    }

    fn client_for(base_url: &str) -> HttpReviewClient {
        let api = ApiConfig {
            base_url: base_url.to_string(),
            api_key: "k3y".to_string(),
            ..Default::default()
        };
        let client = Client::builder().no_proxy().build().unwrap();
        HttpReviewClient::with_client(client, &api).unwrap()
    }

    #[test]
    fn test_entity_url() {
        let client = client_for("https://cdn.example.com/v2/accounts/me/");
        let url = client.entity_url("store 7").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/v2/accounts/me/entities/store%207?api_key=k3y&v=20231030"
        );
    }

    #[test]
    fn test_reviews_url() {
        let client = client_for("https://cdn.example.com/v2/accounts/me");
        let url = client.reviews_url("store-7").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/v2/accounts/me/content/reviews?api_key=k3y&v=20231019&entity.id=store-7"
        );
    }

    #[tokio::test]
    async fn test_fetch_entity_details() {
        let (base, server) = serve(vec![(200, r#"{"response": {"name": "Acme"}}"#)]).await;
        let client = client_for(&base);

        let entity = client.fetch_entity_details("acme-1").await.unwrap();
        assert_eq!(entity.name, "Acme");

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("GET /v2/accounts/me/entities/acme-1?api_key=k3y&v=20231030"));
    }

    #[tokio::test]
    async fn test_fetch_entity_details_http_error() {
        let (base, _server) = serve(vec![(404, r#"{"errors": []}"#)]).await;
        let client = client_for(&base);

        let err = client.fetch_entity_details("missing").await.unwrap_err();
        match err {
            WidgetError::Fetch { resource, status } => {
                assert_eq!(resource, "entity details");
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_reviews() {
        let body = r#"{"response": {"docs": [{"authorName": "Jane", "rating": 4}]}}"#;
        let (base, server) = serve(vec![(200, body)]).await;
        let client = client_for(&base);

        let reviews = client.fetch_reviews("acme-1").await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 4.0);

        let requests = server.await.unwrap();
        assert!(requests[0].contains("entity.id=acme-1"));
    }

    #[tokio::test]
    async fn test_fetch_reviews_without_docs() {
        let (base, _server) = serve(vec![(200, r#"{"response": {}}"#)]).await;
        let client = client_for(&base);

        let reviews = client.fetch_reviews("acme-1").await.unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reviews_server_error() {
        let (base, _server) = serve(vec![(500, "")]).await;
        let client = client_for(&base);

        let err = client.fetch_reviews("acme-1").await.unwrap_err();
        assert!(matches!(err, WidgetError::Fetch { resource: "reviews", .. }));
    }
}
