//! # Agora Types
//!
//! Core types, request payloads and validation for the Agora agent marketplace.
//!
//! This crate provides the foundational type system shared by every Agora front-end:
//!
//! - **`error`** - Client-side validation errors and gateway error-body parsing
//! - **`models`** - Gateway entities (User, Developer, Agent, Content, Comment, Session)
//! - **`protocol`** - Request bodies sent to the gateway
//! - **`forms`** - Form state with the validation rules each form enforces
//! - **`view`** - Pure helpers that turn raw entities into display strings
//!
//! ## Architecture Role
//!
//! `agora-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                agora-types (this crate)
//!                        │
//!                        ▼
//!                  agora-client
//!                        │
//!             ┌──────────┴──────────┐
//!             ▼                     ▼
//!        src-leptos             agora-cli
//! ```
//!
//! The gateway owns every entity; these types are render-scoped copies and carry
//! no cross-entity integrity guarantees.

pub mod error;
pub mod forms;
pub mod models;
pub mod protocol;
pub mod view;

// Re-export error types for convenience
pub use error::{parse_error_body, ValidationError};

// Re-export core model types
pub use models::{
    Agent, AgentComment, AgentMedia, AgentVersion, CommentView, Content, ContentComment,
    ContentKind, Developer, MediaItem, MediaKind, Role, Session, User, VersionStatus,
};
