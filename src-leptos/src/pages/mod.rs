//! Page components

mod add_agent;
mod agent;
mod article;
mod articles;
mod discussion;
mod discussions;
mod forgot_password;
mod home;
mod login;
mod not_found;
mod profile;
mod register;
mod register_developer;
mod thread;

pub use add_agent::{AddAgentLegacy, AgentBasicsStep, AgentMediaStep, AgentVersionStep};
pub use agent::AgentDetail;
pub use article::ArticleDetail;
pub use articles::Articles;
pub use discussion::Discussion;
pub use discussions::Discussions;
pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use register::Register;
pub use register_developer::RegisterDeveloper;
