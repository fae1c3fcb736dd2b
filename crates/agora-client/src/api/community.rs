//! Articles, discussions and their comment threads.

use agora_types::protocol::{ContentCommentCreate, ContentCreate};
use agora_types::{Content, ContentComment, ContentKind};

use crate::client::{Auth, GatewayClient, Request};
use crate::error::ClientError;

impl GatewayClient {
    /// `GET /contents/`: every article and discussion.
    pub async fn contents(&self) -> Result<Vec<Content>, ClientError> {
        self.call_json(Request::get("/contents/")).await
    }

    /// Contents of one kind. The gateway has no type filter, so this filters locally.
    pub async fn contents_of(&self, kind: ContentKind) -> Result<Vec<Content>, ClientError> {
        let mut contents = self.contents().await?;
        contents.retain(|c| c.kind() == kind);
        Ok(contents)
    }

    /// `GET /contents/{id}`.
    pub async fn content(&self, id: &str) -> Result<Content, ClientError> {
        self.call_json(Request::get(format!("/contents/{id}"))).await
    }

    /// `POST /contents/`.
    pub async fn create_content(&self, request: &ContentCreate) -> Result<Content, ClientError> {
        self.call_json(Request::post("/contents/").json(request)?.auth(Auth::Required)).await
    }

    /// `GET /contents/{id}/comments`.
    pub async fn content_comments(&self, id: &str) -> Result<Vec<ContentComment>, ClientError> {
        self.call_json(Request::get(format!("/contents/{id}/comments"))).await
    }

    /// `POST /contents/{id}/comments`.
    pub async fn post_content_comment(
        &self,
        comment: &ContentCommentCreate,
    ) -> Result<ContentComment, ClientError> {
        let path = format!("/contents/{}/comments", comment.content_id);
        self.call_json(Request::post(path).json(comment)?.auth(Auth::Required)).await
    }
}
