//! Kraken REST API client implementation.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{CredentialsProvider, IncreasingNonce, NonceProvider, sign_request};
use crate::error::KrakenError;
use crate::rest::method::{KrakenApiMethod, Visibility};
use crate::types::envelope::{Paginated, ResponseEnvelope};
use crate::types::last_id::split_last_id;

/// Base URL for the Kraken REST API.
pub const KRAKEN_BASE_URL: &str = "https://api.kraken.com";

/// API version prefix used in every request path.
const API_VERSION: u32 = 0;

/// The Kraken REST API client.
///
/// Handles endpoint dispatch, request signing for private endpoints, and
/// extraction of the out-of-band `"last"` pagination cursor. Each call is
/// exactly one request with one deterministic outcome; there are no
/// implicit retries.
///
/// # Example
///
/// ```rust,no_run
/// use kraken_rest_client::rest::KrakenRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints need no credentials.
///     let client = KrakenRestClient::new();
///     let time = client.get_server_time().await?;
///     println!("Server time: {}", time.unixtime);
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use kraken_rest_client::auth::StaticCredentials;
/// use kraken_rest_client::rest::KrakenRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = KrakenRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balance = client.get_account_balance().await?;
///     println!("Balance: {:?}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KrakenRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl KrakenRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`KrakenRestClient::builder()`] to configure credentials for
    /// private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> KrakenRestClientBuilder {
        KrakenRestClientBuilder::new()
    }

    /// Dispatch a call to an endpoint and decode the response envelope.
    pub(crate) async fn call<T, P>(
        &self,
        method: KrakenApiMethod,
        params: Option<&P>,
    ) -> Result<T, KrakenError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = self.execute(method, params).await?;

        let envelope: ResponseEnvelope<T> = serde_json::from_str(&body).inspect_err(|e| {
            tracing::debug!(?method, error = %e, "failed to decode response envelope");
        })?;
        envelope.into_result()
    }

    /// Dispatch a call to a cursor-bearing endpoint.
    ///
    /// The trailing top-level `"last"` field is split off the raw body
    /// before the envelope decode; its absence is an error, never a
    /// defaulted cursor.
    pub(crate) async fn call_with_last<T, P>(
        &self,
        method: KrakenApiMethod,
        params: Option<&P>,
    ) -> Result<Paginated<T>, KrakenError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = self.execute(method, params).await?;

        let (tree, last) = split_last_id(&body)?;
        let envelope: ResponseEnvelope<T> = serde_json::from_value(tree).inspect_err(|e| {
            tracing::debug!(?method, error = %e, "failed to decode response envelope");
        })?;
        Ok(Paginated {
            data: envelope.into_result()?,
            last,
        })
    }

    /// Build and send the request, returning the raw response body.
    async fn execute<P>(
        &self,
        method: KrakenApiMethod,
        params: Option<&P>,
    ) -> Result<String, KrakenError>
    where
        P: Serialize + ?Sized,
    {
        let path = method.url_path(API_VERSION);

        match method.visibility() {
            Visibility::Public => {
                let query = match params {
                    Some(p) => serde_urlencoded::to_string(p)?,
                    None => String::new(),
                };
                let url = if query.is_empty() {
                    format!("{}{}", self.base_url, path)
                } else {
                    format!("{}{}?{}", self.base_url, path, query)
                };

                tracing::debug!(%url, "GET");
                let response = self.http_client.get(&url).send().await?;
                Ok(response.text().await?)
            }
            Visibility::Private => {
                // The credential check must happen before any I/O.
                let credentials = self
                    .credentials
                    .as_ref()
                    .ok_or(KrakenError::MissingCredentials)?
                    .get_credentials();
                if !credentials.is_complete() {
                    return Err(KrakenError::MissingCredentials);
                }

                let nonce = self.nonce_provider.next_nonce();
                let form = match params {
                    Some(p) => serde_urlencoded::to_string(p)?,
                    None => String::new(),
                };
                // The signed byte sequence must equal the transmitted byte
                // sequence, so the body is built exactly once.
                let post_body = if form.is_empty() {
                    format!("nonce={nonce}")
                } else {
                    format!("{form}&nonce={nonce}")
                };
                let signature = sign_request(credentials, &path, nonce, &post_body)?;

                let url = format!("{}{}", self.base_url, path);
                tracing::debug!(%url, nonce, "POST");
                let response = self
                    .http_client
                    .post(&url)
                    .header("API-Key", &credentials.api_key)
                    .header("API-Sign", signature)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(post_body)
                    .send()
                    .await?;
                Ok(response.text().await?)
            }
        }
    }
}

impl Default for KrakenRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KrakenRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`KrakenRestClient`].
pub struct KrakenRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
}

impl KrakenRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: KRAKEN_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> KrakenRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("kraken-rest-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("kraken-rest-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        KrakenRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for KrakenRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
