use crate::decode::decode_body;
use crate::{ClientError, ClientResult, Prefer, Query};

use dw_config::{ClientConfig, Config};

use log::debug;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

const API_KEY_HEADER: HeaderName = HeaderName::from_static("apikey");
const PREFER_HEADER: HeaderName = HeaderName::from_static("prefer");

/// HTTP gateway to the hosted data API.
///
/// Every request carries the `apikey` and bearer `Authorization` headers.
/// Cloning is cheap and clones share one connection pool.
#[derive(Clone)]
pub struct Gateway {
    root: Url,
    client: ReqwestClient,
}

impl Gateway {
    /// Create a new gateway
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://<project>.supabase.co")
    /// * `schema_path` - Path prefix for resources (e.g., "rest/v1")
    /// * `api_key` - Sent in the `apikey` header
    /// * `bearer_token` - Sent as `Authorization: Bearer <token>`
    /// * `settings` - Request and connect timeouts
    pub fn new(
        base_url: &str,
        schema_path: &str,
        api_key: &str,
        bearer_token: &str,
        settings: &ClientConfig,
    ) -> ClientResult<Self> {
        let root = Self::root_url(base_url, schema_path)?;

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, Self::secret_header(api_key)?);
        headers.insert(
            AUTHORIZATION,
            Self::secret_header(&format!("Bearer {}", bearer_token))?,
        );

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .build()
            .map_err(|e| ClientError::invalid_config(format!("HTTP client: {}", e)))?;

        Ok(Self { root, client })
    }

    /// Create a gateway from loaded configuration
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let api_key = config
            .api
            .api_key()
            .ok_or_else(|| ClientError::invalid_config("api key is not set"))?;
        let bearer_token = config.api.bearer_token().unwrap_or(api_key);

        Self::new(
            &config.api.base_url,
            &config.api.schema_path,
            api_key,
            bearer_token,
            &config.client,
        )
    }

    /// Resource root every query is resolved against, always ending in `/`
    pub fn root(&self) -> &str {
        self.root.as_str()
    }

    fn root_url(base_url: &str, schema_path: &str) -> ClientResult<Url> {
        let base = base_url.trim_end_matches('/');
        let schema = schema_path.trim_matches('/');
        let root = if schema.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}/", base, schema)
        };

        Url::parse(&root).map_err(|e| ClientError::invalid_url(format!("{}: {}", root, e)))
    }

    fn secret_header(value: &str) -> ClientResult<HeaderValue> {
        let mut header = HeaderValue::from_str(value)
            .map_err(|_| ClientError::invalid_config("credential contains invalid characters"))?;
        header.set_sensitive(true);
        Ok(header)
    }

    /// Full request URL for a query, with parameters percent-encoded
    pub fn url(&self, query: &Query) -> ClientResult<Url> {
        let mut url = self
            .root
            .join(query.resource())
            .map_err(|e| ClientError::invalid_url(format!("{}: {}", query.resource(), e)))?;

        if !query.params().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Execute a request and decode the response body into `T`.
    ///
    /// Non-success statuses become [`ClientError::RemoteCallFailed`] or
    /// [`ClientError::DuplicateConflict`]. Dropping the future cancels the
    /// request.
    pub async fn execute<T, B>(
        &self,
        method: Method,
        query: &Query,
        body: Option<&B>,
        prefer: Option<Prefer>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.send(method, query, body, prefer).await?;
        decode_body(&text)
    }

    /// Execute a request whose response body is not needed
    pub async fn execute_discarding<B>(
        &self,
        method: Method,
        query: &Query,
        body: Option<&B>,
        prefer: Option<Prefer>,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, query, body, prefer).await.map(|_| ())
    }

    /// GET rows matching `query`
    pub async fn get<T: DeserializeOwned>(&self, query: &Query) -> ClientResult<T> {
        self.execute::<T, ()>(Method::GET, query, None, None).await
    }

    async fn send<B>(
        &self,
        method: Method,
        query: &Query,
        body: Option<&B>,
        prefer: Option<Prefer>,
    ) -> ClientResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(query)?;
        let mut req = self.client.request(method.clone(), url);

        if let Some(prefer) = prefer {
            req = req.header(PREFER_HEADER, prefer.header_value());
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        debug!("{} {}", method, query.resource());

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("{} {} -> {}", method, query.resource(), status.as_u16());

        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), text));
        }

        Ok(text)
    }
}
