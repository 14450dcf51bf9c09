use std::{collections::HashMap, sync::Arc, time::Duration};

use reqwest::{multipart::Form, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    client::{
        error::ApiError,
        token::{MemoryTokenStore, TokenStore},
    },
    model::{
        api::ApiResponse,
        auth::{AccessTokenDto, RefreshTokenDto},
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const REFRESH_PATH: &str = "/api/auth/refresh";

/// HTTP client for the bistro API.
///
/// Cloning is cheap; clones share the connection pool, the token store and the
/// refresh guard.
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::with_memory_store("http://localhost:3000")?;
/// client.auth().login("admin", "password123").await?;
/// let page = client.reservations().get_all(&Default::default()).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    /// Server origin without trailing slash; request paths start with `/api`.
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    /// Held while a refresh is in flight so concurrent 401s share its result.
    refresh_lock: Arc<Mutex<()>>,
}

/// Body of a failed request; both fields are optional so foreign error pages decode.
#[derive(Deserialize, Default)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
            refresh_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn with_memory_store(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(base_url, Arc::new(MemoryTokenStore::default()))
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a server path such as `/api/menu/download`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(|| self.http.get(self.url(path))).await
    }

    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(|| self.http.get(self.url(path)).query(query))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(|| self.http.post(self.url(path)).json(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(|| self.http.put(self.url(path)).json(body))
            .await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(|| self.http.patch(self.url(path)).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(|| self.http.delete(self.url(path))).await
    }

    /// Posts a multipart form. `form` is called again if the request is replayed
    /// after a token refresh, since a sent form cannot be reused.
    pub async fn post_multipart<T, F>(&self, path: &str, form: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> Form,
    {
        self.request(|| self.http.post(self.url(path)).multipart(form()))
            .await
    }

    /// Posts JSON without a bearer token and without the refresh retry.
    ///
    /// Used for login, where a 401 means bad credentials rather than an expired session.
    pub async fn post_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::Network)?;

        decode(response).await
    }

    /// Sends the request built by `build`, refreshing and replaying it once on 401.
    ///
    /// A 204 response decodes from JSON `null`, so callers expecting no content
    /// use `()` or an `Option`.
    ///
    /// # Returns
    /// - `Ok(T)` - 2xx response body
    /// - `Err(ApiError::Status)` - Non-2xx response, including a 401 with no refresh token
    /// - `Err(ApiError::SessionExpired)` - 401 and the refresh failed; tokens are cleared
    /// - `Err(ApiError::Network)` - No response
    pub async fn request<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let response = self.execute(build).await?;

        decode(response).await
    }

    async fn execute<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let sent_token = self.tokens.access_token();
        let response = authorize(build(), sent_token.as_deref())
            .send()
            .await
            .map_err(ApiError::Network)?;

        if response.status() != StatusCode::UNAUTHORIZED || self.tokens.refresh_token().is_none() {
            return Ok(response);
        }

        if !self.refresh_after(sent_token.as_deref()).await {
            self.tokens.clear();
            return Err(ApiError::SessionExpired);
        }

        let token = self.tokens.access_token();
        authorize(build(), token.as_deref())
            .send()
            .await
            .map_err(ApiError::Network)
    }

    /// Exchanges the stored refresh token for a new access token.
    ///
    /// Returns whether the session now holds a fresh access token. Does not clear
    /// tokens on failure.
    pub async fn refresh_session(&self) -> bool {
        let current = self.tokens.access_token();

        self.refresh_after(current.as_deref()).await
    }

    /// Refreshes unless another caller already replaced `stale` while this one
    /// waited for the guard.
    async fn refresh_after(&self, stale: Option<&str>) -> bool {
        let _guard = self.refresh_lock.lock().await;

        let current = self.tokens.access_token();
        if current.is_some() && current.as_deref() != stale {
            return true;
        }

        let Some(refresh_token) = self.tokens.refresh_token() else {
            return false;
        };

        match self.request_access_token(refresh_token).await {
            Ok(token) => {
                self.tokens.set_access_token(&token.access_token);
                tracing::debug!("Access token refreshed");
                true
            }
            Err(e) => {
                tracing::debug!("Token refresh failed: {}", e);
                false
            }
        }
    }

    async fn request_access_token(&self, refresh_token: String) -> Result<AccessTokenDto, ApiError> {
        let body: ApiResponse<AccessTokenDto> = self
            .post_anonymous(REFRESH_PATH, &RefreshTokenDto { refresh_token })
            .await?;

        Ok(body.data)
    }
}

fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body: ErrorBody = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => ErrorBody::default(),
        };

        return Err(ApiError::Status {
            message: body
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
            status: status.as_u16(),
            errors: body.errors,
        });
    }

    let bytes = response.bytes().await.map_err(ApiError::Network)?;
    if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }

    Ok(serde_json::from_slice(&bytes)?)
}
