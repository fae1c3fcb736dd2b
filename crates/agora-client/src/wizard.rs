//! The three-step "add agent" flow.
//!
//! Each step issues its own request; the created agent id travels in the
//! route. There is no rollback: an agent created in step 1 stays on the
//! gateway even if a later step fails.

use agora_types::forms::{AgentBasicsForm, MediaSelection, VersionForm};
use agora_types::{Agent, AgentVersion};
use futures::future::try_join_all;
use tracing::{debug, info};

use crate::client::GatewayClient;
use crate::error::ClientError;

/// Where the wizard lands once media is uploaded.
pub const FINISHED_ROUTE: &str = "/profile?agentCreated=true";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Basics,
    Version,
    Media,
}

/// How a step circle is drawn in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::Basics, Self::Version, Self::Media];
    pub const TOTAL: usize = Self::ALL.len();

    /// 1-based position.
    pub fn number(self) -> usize {
        match self {
            Self::Basics => 1,
            Self::Version => 2,
            Self::Media => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basics => "Basic information",
            Self::Version => "Version",
            Self::Media => "Media",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::Version),
            Self::Version => Some(Self::Media),
            Self::Media => None,
        }
    }

    /// Route for this step. Steps after the first need the agent id.
    pub fn route(self, agent_id: &str) -> String {
        match self {
            Self::Basics => "/add_agents/agent".to_string(),
            Self::Version => format!("/add_agents/{agent_id}/version"),
            Self::Media => format!("/add_agents/{agent_id}/media"),
        }
    }

    /// Route to follow after this step succeeded.
    pub fn next_route(self, agent_id: &str) -> String {
        self.next().map_or_else(|| FINISHED_ROUTE.to_string(), |next| next.route(agent_id))
    }

    /// Parse a wizard route back into its step and agent id.
    pub fn from_route(path: &str) -> Option<(Self, Option<String>)> {
        let rest = path.trim_end_matches('/').strip_prefix("/add_agents/")?;
        if rest == "agent" {
            return Some((Self::Basics, None));
        }
        let (id, step) = rest.split_once('/')?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        match step {
            "version" => Some((Self::Version, Some(id.to_string()))),
            "media" => Some((Self::Media, Some(id.to_string()))),
            _ => None,
        }
    }

    pub fn state_of(self, other: WizardStep) -> StepState {
        match other.number().cmp(&self.number()) {
            std::cmp::Ordering::Less => StepState::Done,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }

    /// Width of the progress bar for this step.
    pub fn progress_percent(self) -> u8 {
        (self.number() * 100 / Self::TOTAL) as u8
    }
}

/// Runs the wizard steps against the gateway.
#[derive(Debug, Clone)]
pub struct AgentWizard {
    client: GatewayClient,
}

impl AgentWizard {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    /// Step 1: create the listing.
    pub async fn submit_basics(&self, form: &AgentBasicsForm, user_id: &str) -> Result<Agent, ClientError> {
        let request = form.into_request(user_id)?;
        let agent = self.client.create_agent(&request).await?;
        info!("Created agent {} ({})", agent.name, agent.id);
        Ok(agent)
    }

    /// Step 2: publish the first version.
    pub async fn submit_version(&self, agent_id: &str, form: &VersionForm) -> Result<AgentVersion, ClientError> {
        let request = form.into_request(agent_id)?;
        let version = self.client.create_version(&request).await?;
        debug!("Created version {} for agent {}", version.version, agent_id);
        Ok(version)
    }

    /// Step 3: upload every file concurrently; the first failure fails the step.
    pub async fn submit_media(&self, agent_id: &str, media: &MediaSelection) -> Result<usize, ClientError> {
        media.validate()?;
        let plan = media.upload_plan();
        let uploads = plan
            .iter()
            .map(|(file, is_primary)| self.client.upload_media(agent_id, file, *is_primary));
        try_join_all(uploads).await?;
        info!("Uploaded {} media file(s) for agent {}", plan.len(), agent_id);
        Ok(plan.len())
    }

    /// All three steps in one go (used by the terminal client).
    pub async fn publish(
        &self,
        user_id: &str,
        basics: &AgentBasicsForm,
        version: &VersionForm,
        media: &MediaSelection,
    ) -> Result<Agent, ClientError> {
        // Validate everything up front so a bad file does not leave a half-made agent.
        basics.into_request(user_id)?;
        media.validate()?;

        let agent = self.submit_basics(basics, user_id).await?;
        self.submit_version(&agent.id, version).await?;
        self.submit_media(&agent.id, media).await?;
        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_chain_to_profile() {
        assert_eq!(WizardStep::Basics.route("ignored"), "/add_agents/agent");
        assert_eq!(WizardStep::Basics.next_route("42"), "/add_agents/42/version");
        assert_eq!(WizardStep::Version.next_route("42"), "/add_agents/42/media");
        assert_eq!(WizardStep::Media.next_route("42"), FINISHED_ROUTE);
    }

    #[test]
    fn test_from_route() {
        assert_eq!(WizardStep::from_route("/add_agents/agent"), Some((WizardStep::Basics, None)));
        assert_eq!(
            WizardStep::from_route("/add_agents/abc/media/"),
            Some((WizardStep::Media, Some("abc".to_string())))
        );
        assert_eq!(WizardStep::from_route("/add_agents/abc/unknown"), None);
        assert_eq!(WizardStep::from_route("/agents/abc"), None);
    }

    #[test]
    fn test_progress() {
        assert_eq!(WizardStep::Basics.progress_percent(), 33);
        assert_eq!(WizardStep::Media.progress_percent(), 100);
        assert_eq!(WizardStep::Version.state_of(WizardStep::Basics), StepState::Done);
        assert_eq!(WizardStep::Version.state_of(WizardStep::Version), StepState::Current);
        assert_eq!(WizardStep::Version.state_of(WizardStep::Media), StepState::Upcoming);
    }
}
