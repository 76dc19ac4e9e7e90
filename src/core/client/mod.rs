//! Public client surface + builder.
//! Internals are split into `auth` (bearer-token state) and `constants`
//! (UA + defaults).

mod auth;
mod constants;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::core::{GsError, models::Health, net, wire};
use crate::retry::{CancelToken, RetryConfig, RetryExecutor};

pub(crate) use constants::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

#[derive(Debug)]
struct Inner {
    http: Client,
    base_url: Url,
    retry: RetryConfig,
    token: RwLock<Option<String>>,
}

/// Handle to the GenStudio backend. Cheap to clone; all clones share the
/// HTTP connection pool, the default retry policy, and the bearer token.
#[derive(Clone, Debug)]
pub struct GsClient {
    inner: Arc<Inner>,
}

impl Default for GsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl GsClient {
    /// Create a new builder.
    pub fn builder() -> GsClientBuilder {
        GsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Resolve a route relative to the API base.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, GsError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /* -------- account surface -------- */

    /// Register a new account. The backend does not issue a token here;
    /// call [`login`](Self::login) afterwards.
    ///
    /// # Errors
    ///
    /// `GsError::Api` with the backend message (e.g. `"User already exists"`
    /// on 409), or a transport-level error.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<crate::core::models::User, GsError> {
        crate::auth::api::signup(self, name, email, password).await
    }

    /// Authenticate and store the returned bearer token on this client, so
    /// subsequent generation calls are authenticated automatically.
    ///
    /// # Errors
    ///
    /// `GsError::Api` with the backend message (`"User not found"`,
    /// `"Invalid credentials"`), or a transport-level error.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<crate::core::models::User, GsError> {
        let user = crate::auth::api::login(self, email, password).await?;
        if let Some(token) = &user.token {
            self.set_bearer_token(token.clone()).await;
        }
        Ok(user)
    }

    /// Probe `/health`.
    ///
    /// # Errors
    ///
    /// Fails when the endpoint is unreachable or returns a non-success
    /// status after the retry budget is spent.
    pub async fn health(&self) -> Result<Health, GsError> {
        let url = self.endpoint("health")?;
        let req = self.http().get(url);
        let resp = self.send_with_retry(req, None, None).await?;
        let env: wire::HealthEnvelope = net::read_json(resp, "health").await?;
        Ok(env.into())
    }

    /// List recent generations, newest first. See
    /// [`generations::list`](crate::generations::list).
    ///
    /// # Errors
    ///
    /// Requires a bearer token; see [`GsError::Auth`].
    pub async fn list_generations(
        &self,
        limit: u32,
    ) -> Result<Vec<crate::core::models::Generation>, GsError> {
        crate::generations::list(self, limit).await
    }

    /* -------- central request path -------- */

    /// Send a request, retrying transport failures and transient statuses
    /// (408/429/5xx) under the client's retry policy. Definitive backend
    /// answers — success or structured rejection — pass through on the
    /// first response that produces one.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
        cancel: Option<&CancelToken>,
    ) -> Result<reqwest::Response, GsError> {
        if req.try_clone().is_none() {
            return Err(GsError::Data("request body cannot be retried".into()));
        }

        let config = retry_override.cloned().unwrap_or_else(|| self.inner.retry.clone());
        let executor = RetryExecutor::new(config);

        let req = &req;
        let resp = executor
            .execute(
                move || async move {
                    let attempt = req
                        .try_clone()
                        .ok_or_else(|| GsError::Data("request body cannot be retried".into()))?;
                    let resp = attempt.send().await?;
                    if constants::RETRY_STATUS.contains(&resp.status().as_u16()) {
                        return Err(net::error_for_status(resp).await);
                    }
                    Ok(resp)
                },
                cancel,
            )
            .await?;

        if !resp.status().is_success() {
            return Err(net::error_for_status(resp).await);
        }
        Ok(resp)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct GsClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    bearer_token: Option<String>,
}

impl GsClientBuilder {
    /// Override the API base (e.g. `http://localhost:4000/api/`). A trailing
    /// slash is added if missing so route joins behave.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the default retry policy for all requests made through this
    /// client. Individual calls can override it.
    #[must_use]
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry = Some(config);
        self
    }

    /// Provide a bearer token up front (stored session, tests).
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// # Errors
    ///
    /// Fails when the default base URL cannot be parsed or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<GsClient, GsError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(constants::DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(constants::USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(GsClient {
            inner: Arc::new(Inner {
                http,
                base_url,
                retry: self.retry.unwrap_or_default(),
                token: RwLock::new(self.bearer_token),
            }),
        })
    }
}
