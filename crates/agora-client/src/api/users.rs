//! Users, developers and authentication endpoints.

use agora_types::protocol::{DeveloperRequest, LoginRequest, ProfileUpdate, RegisterRequest};
use agora_types::{Developer, Session, User};

use crate::client::{Auth, GatewayClient, Request};
use crate::error::ClientError;

impl GatewayClient {
    /// `POST /login`. Does not store the returned tokens.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ClientError> {
        self.call_json(Request::post("/login").json(credentials)?.auth(Auth::None)).await
    }

    /// `POST /users/register`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ClientError> {
        self.call_json(Request::post("/users/register").json(request)?.auth(Auth::None)).await
    }

    /// `GET /users/me`.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.call_json(Request::get("/users/me").auth(Auth::Required)).await
    }

    /// `PATCH /users/me`. Returns the raw body so partial answers can be merged
    /// with [`User::merge_update`].
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<serde_json::Value, ClientError> {
        self.call_json(Request::patch("/users/me").json(update)?.auth(Auth::Required)).await
    }

    /// `GET /users/{id}`.
    pub async fn user(&self, id: &str) -> Result<User, ClientError> {
        self.call_json(Request::get(format!("/users/{id}"))).await
    }

    /// `POST /developers/`.
    pub async fn create_developer(&self, request: &DeveloperRequest) -> Result<Developer, ClientError> {
        self.call_json(Request::post("/developers/").json(request)?.auth(Auth::Required)).await
    }

    /// `GET /developers/me`.
    pub async fn my_developer(&self) -> Result<Developer, ClientError> {
        self.call_json(Request::get("/developers/me").auth(Auth::Required)).await
    }
}
