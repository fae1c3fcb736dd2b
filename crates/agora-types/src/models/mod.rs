//! Gateway entities.
//!
//! Everything here is owned and mutated by the gateway; the client only keeps
//! transient copies for rendering.

mod agent;
mod comment;
mod content;
mod lenient;
mod media;
mod token;
mod user;

pub use agent::{Agent, AgentDeveloper, AgentVersion, VersionStatus};
pub use comment::{AgentComment, CommentView, ContentComment};
pub use content::{Content, ContentKind};
pub use media::{AgentMedia, MediaItem, MediaKind};
pub use token::Session;
pub use user::{Developer, Role, User};
