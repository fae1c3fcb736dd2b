#![doc = include_str!("../README.md")]

mod api;
pub mod auth;
mod client;
mod config;
mod error;
pub mod guard;
pub mod session;
mod task;
pub mod wizard;

pub use api::ReplyStream;
pub use auth::{AuthService, AuthState};
pub use client::GatewayClient;
pub use config::{ClientConfig, RetryConfig};
pub use error::{AuthError, ClientError, StoreError};
pub use guard::{resolve, GuardDecision};
pub use session::{MemoryStore, SessionManager, SessionStore};
pub use task::cancellable;
pub use wizard::{AgentWizard, WizardStep};

#[cfg(not(target_arch = "wasm32"))]
pub use session::FileStore;
