//! Agents, versions, media and reviews.

use agora_types::forms::MediaFile;
use agora_types::protocol::{AgentCommentCreate, AgentCreate, VersionCreate};
use agora_types::{Agent, AgentComment, AgentVersion, Content};

use crate::client::{Auth, FormField, GatewayClient, Request};
use crate::error::ClientError;

impl GatewayClient {
    /// `GET /agents`.
    pub async fn agents(&self) -> Result<Vec<Agent>, ClientError> {
        self.call_json(Request::get("/agents")).await
    }

    /// `GET /agents/my`: agents published by the signed-in user.
    pub async fn my_agents(&self) -> Result<Vec<Agent>, ClientError> {
        self.call_json(Request::get("/agents/my").auth(Auth::Required)).await
    }

    /// `GET /agents/{id}`.
    pub async fn agent(&self, id: &str) -> Result<Agent, ClientError> {
        self.call_json(Request::get(format!("/agents/{id}"))).await
    }

    /// `POST /agents/`.
    pub async fn create_agent(&self, request: &AgentCreate) -> Result<Agent, ClientError> {
        self.call_json(Request::post("/agents/").json(request)?.auth(Auth::Required)).await
    }

    /// `GET /agents/{id}/comments`.
    pub async fn agent_comments(&self, id: &str) -> Result<Vec<AgentComment>, ClientError> {
        self.call_json(Request::get(format!("/agents/{id}/comments"))).await
    }

    /// `POST /agents/{id}/comments`.
    pub async fn post_agent_comment(
        &self,
        comment: &AgentCommentCreate,
    ) -> Result<AgentComment, ClientError> {
        let path = format!("/agents/{}/comments", comment.agent_id);
        self.call_json(Request::post(path).json(comment)?.auth(Auth::Required)).await
    }

    /// `GET /agents/{id}/discussions`.
    pub async fn agent_discussions(&self, id: &str) -> Result<Vec<Content>, ClientError> {
        self.call_json(Request::get(format!("/agents/{id}/discussions"))).await
    }

    /// `POST /agents/{id}/versions/`.
    pub async fn create_version(&self, request: &VersionCreate) -> Result<AgentVersion, ClientError> {
        let path = format!("/agents/{}/versions/", request.agent_id);
        self.call_json(Request::post(path).json(request)?.auth(Auth::Required)).await
    }

    /// `POST /agents/{id}/media/` as multipart `file` + `is_primary`.
    pub async fn upload_media(
        &self,
        agent_id: &str,
        file: &MediaFile,
        is_primary: bool,
    ) -> Result<(), ClientError> {
        let fields = vec![
            FormField::File {
                name: "file",
                file_name: file.name.clone(),
                mime: file.mime.clone(),
                data: file.data.clone().into(),
            },
            FormField::Text { name: "is_primary", value: is_primary.to_string() },
        ];
        let request = Request::post(format!("/agents/{agent_id}/media/")).multipart(fields).auth(Auth::Required);
        self.send_ok(request).await
    }
}
