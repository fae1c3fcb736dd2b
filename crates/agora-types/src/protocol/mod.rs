//! Request bodies sent to the gateway.

mod assistant;
mod auth;
mod catalog;
mod community;

pub use assistant::{AssistantRequest, ChatMessage, ChatRole};
pub use auth::{DeveloperRequest, LoginRequest, ProfileUpdate, RefreshRequest, RegisterRequest};
pub use catalog::{AgentCommentCreate, AgentCreate, VersionCreate};
pub use community::{ContentCommentCreate, ContentCreate};
