/*
[INPUT]:  Validated client configuration, endpoint paths and request bodies
[OUTPUT]: Decoded response bodies or normalized BiteshipError values
[POS]:    HTTP layer - core transport shared by every resource service
[UPDATE]: When adding connection options or changing error normalization
*/

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{BiteshipError, ClientConfig, Result};

/// HTTP transport for the Biteship API
///
/// Owns the connection pool. Every call sends the API key as a raw
/// `Authorization` header and `Content-Type: application/json`, and returns
/// only the decoded response body.
#[derive(Debug)]
pub struct HttpTransport {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport, failing fast on an invalid config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            BiteshipError::Config("API key contains characters not allowed in a header".to_string())
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, api_key);

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let http_client = builder
            .build()
            .map_err(|err| BiteshipError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout applied to every request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the full URL for an endpoint path
    ///
    /// The path is appended to the base URL, so a base with a path prefix
    /// (e.g. a proxy mount point) keeps it.
    fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        Ok(self.http_client.request(method, url))
    }

    /// GET {path}
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, path)?;
        self.send_json(builder).await
    }

    /// GET {path}?{query}
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path)?.query(query);
        self.send_json(builder).await
    }

    /// POST {path} with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path)?.json(body);
        self.send_json(builder).await
    }

    /// POST {path} without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::POST, path)?;
        self.send_json(builder).await
    }

    /// PUT {path} with a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path)?.json(body);
        self.send_json(builder).await
    }

    /// PATCH {path} with a JSON body
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PATCH, path)?.json(body);
        self.send_json(builder).await
    }

    /// DELETE {path}
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::DELETE, path)?;
        self.send_json(builder).await
    }

    /// Send one request and decode its body, normalizing every failure
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build().map_err(BiteshipError::from_send)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(%method, path = %path, "biteship request");

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                let err = BiteshipError::from_send(err);
                debug!(%method, path = %path, error = %err, "biteship request failed");
                return Err(err);
            }
        };

        let status = response.status();
        debug!(%method, path = %path, status = status.as_u16(), "biteship response");

        if !status.is_success() {
            let fallback = match response.error_for_status_ref() {
                Err(err) => err.to_string(),
                Ok(_) => format!("Request failed with status code {}", status.as_u16()),
            };
            // the status line arrived, so a broken body still reports it
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(%method, path = %path, error = %err, "biteship error body unreadable");
                    String::new()
                }
            };
            let err = BiteshipError::api_error(status, &body, fallback);
            debug!(%method, path = %path, status = err.status(), message = err.message(), "biteship api error");
            return Err(err);
        }

        let body = response.text().await.map_err(BiteshipError::from_send)?;
        serde_json::from_str(&body).map_err(|err| BiteshipError::Decode {
            status: status.as_u16(),
            message: err.to_string(),
            body,
        })
    }
}
