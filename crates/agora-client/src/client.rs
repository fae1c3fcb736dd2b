use std::sync::Arc;

use agora_types::parse_error_body;
use agora_types::protocol::RefreshRequest;
use agora_types::Session;
use reqwest::{multipart, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::SessionManager;
use crate::task::sleep;

/// Whether a request carries the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Never sent (login, register, refresh).
    None,
    /// Sent when present; a rejected token is dropped and the call repeated anonymously.
    Optional,
    /// Must be present, otherwise [`ClientError::MissingSession`].
    Required,
}

#[derive(Debug, Clone)]
pub(crate) enum FormField {
    Text { name: &'static str, value: String },
    File { name: &'static str, file_name: String, mime: String, data: bytes::Bytes },
}

#[derive(Debug, Clone)]
pub(crate) enum Payload {
    Empty,
    Json(serde_json::Value),
    /// Rebuilt for every attempt since a multipart body is consumed on send.
    Multipart(Vec<FormField>),
}

/// A gateway call that can be sent more than once.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    method: Method,
    path: String,
    payload: Payload,
    auth: Auth,
}

impl Request {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), payload: Payload::Empty, auth: Auth::Optional }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidResponse(format!("unserializable body: {e}")))?;
        self.payload = Payload::Json(value);
        Ok(self)
    }

    pub(crate) fn multipart(mut self, fields: Vec<FormField>) -> Self {
        self.payload = Payload::Multipart(fields);
        self
    }

    pub(crate) fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }
}

fn is_auth_failure(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

fn build_form(fields: &[FormField]) -> Result<multipart::Form, ClientError> {
    let mut form = multipart::Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(*name, value.clone()),
            FormField::File { name, file_name, mime, data } => {
                let mut part = multipart::Part::bytes(data.to_vec()).file_name(file_name.clone());
                if !mime.is_empty() {
                    part = part.mime_str(mime).map_err(|e| agora_types::ValidationError::Invalid {
                        field: file_name.clone(),
                        message: format!("bad content type {mime}: {e}"),
                    })?;
                }
                form.part(*name, part)
            },
        };
    }
    Ok(form)
}

/// Turn a non-2xx response into [`ClientError::Http`] with the gateway's message.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Http { status: status.as_u16(), message: parse_error_body(status.as_u16(), &body) })
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = ensure_success(response).await?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// The single HTTP wrapper every page and command goes through.
///
/// It attaches the bearer token, retries idempotent GETs on 5xx and network
/// failures, and owns the 401 path: one `POST /refresh` attempt, one replay of
/// the original request, and on failure the session is cleared.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    config: Arc<ClientConfig>,
    session: SessionManager,
    refresh_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("gateway_url", &self.config.gateway_url)
            .field("session", &self.session)
            .finish()
    }
}

impl GatewayClient {
    pub fn new(config: ClientConfig, session: SessionManager) -> Result<Self, ClientError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let http = builder.build()?;
        Ok(Self { http, config: Arc::new(config), session, refresh_lock: Arc::new(Mutex::new(())) })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    fn build(&self, request: &Request, token: Option<&str>) -> Result<RequestBuilder, ClientError> {
        let mut builder = self.http.request(request.method.clone(), self.config.url(&request.path));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.payload {
            Payload::Empty => builder,
            Payload::Json(value) => builder.json(value),
            Payload::Multipart(fields) => builder.multipart(build_form(fields)?),
        };
        Ok(builder)
    }

    async fn send_once(&self, request: &Request, token: Option<&str>) -> Result<Response, ClientError> {
        Ok(self.build(request, token)?.send().await?)
    }

    async fn send_with_retry(
        &self,
        request: &Request,
        token: Option<&str>,
    ) -> Result<Response, ClientError> {
        if request.method != Method::GET {
            return self.send_once(request, token).await;
        }

        let retry = &self.config.retry;
        let mut attempts = 0;
        loop {
            attempts += 1;
            let outcome = self.send_once(request, token).await;
            let retryable = match &outcome {
                Ok(response) => response.status().is_server_error(),
                Err(ClientError::Network(_)) => true,
                Err(_) => false,
            };
            if !retryable || attempts > retry.max_retries {
                return outcome;
            }
            let delay = retry.delay_for(attempts);
            debug!("GET {} failed, retrying in {:?} (attempt {})", request.path, delay, attempts);
            sleep(delay).await;
        }
    }

    /// Send `request`, handling token refresh. Non-auth error statuses are
    /// returned as-is for the caller to decode.
    pub(crate) async fn execute(&self, request: Request) -> Result<Response, ClientError> {
        let token = match request.auth {
            Auth::None => None,
            Auth::Optional => self.session.token(),
            Auth::Required => Some(self.session.token().ok_or(ClientError::MissingSession)?),
        };

        debug!("{} {}", request.method, request.path);
        let response = self.send_with_retry(&request, token.as_deref()).await?;
        let Some(rejected) = token else {
            return Ok(response);
        };
        if !is_auth_failure(response.status()) {
            return Ok(response);
        }

        if let Some(fresh) = self.refresh_after_rejection(&rejected).await? {
            let retried = self.send_with_retry(&request, Some(&fresh)).await?;
            if !is_auth_failure(retried.status()) {
                return Ok(retried);
            }
        }

        warn!("Gateway rejected the session on {} {}, clearing tokens", request.method, request.path);
        self.session.clear()?;
        if request.auth == Auth::Optional {
            return self.send_with_retry(&request, None).await;
        }
        Err(ClientError::Unauthorized)
    }

    /// Returns the token to replay with, or `None` when refreshing is impossible.
    async fn refresh_after_rejection(&self, rejected: &str) -> Result<Option<String>, ClientError> {
        let _guard = self.refresh_lock.lock().await;

        let Some(current) = self.session.current() else {
            return Ok(None);
        };
        // Another request already refreshed while we waited for the lock.
        if current.access_token != rejected {
            return Ok(Some(current.access_token));
        }
        let Some(refresh_token) = current.refresh_token.clone().filter(|_| current.can_refresh()) else {
            return Ok(None);
        };

        debug!("Access token rejected, trying refresh");
        let request = Request::post("/refresh").json(&RefreshRequest { refresh_token })?.auth(Auth::None);
        let response = match self.send_once(&request, None).await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!("Refresh rejected with status {}", response.status());
                return Ok(None);
            },
            Err(e) => {
                debug!("Refresh failed: {}", e);
                return Ok(None);
            },
        };
        let fresh: Session = match read_json(response).await {
            Ok(fresh) => fresh,
            Err(e) => {
                debug!("Refresh returned an unusable body: {}", e);
                return Ok(None);
            },
        };

        let merged = current.rotated(fresh);
        let token = merged.access_token.clone();
        self.session.set_session(merged)?;
        info!("Session refreshed");
        Ok(Some(token))
    }

    pub(crate) async fn call_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ClientError> {
        read_json(self.execute(request).await?).await
    }

    pub(crate) async fn send_ok(&self, request: Request) -> Result<(), ClientError> {
        ensure_success(self.execute(request).await?).await.map(|_| ())
    }
}
