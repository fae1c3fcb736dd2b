//! Main App component with routing

use agora_client::{AuthService, AuthState, ClientError, GatewayClient, SessionManager};
use agora_types::User;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::auth::{AuthProvider, ProtectedRoute};
use crate::components::{Assistant, Footer, Header};
use crate::config::client_config;
use crate::pages::{
    AddAgentLegacy, AgentBasicsStep, AgentDetail, AgentMediaStep, AgentVersionStep, ArticleDetail,
    Articles, Discussion, Discussions, ForgotPassword, Home, Login, NotFound, Profile, Register,
    RegisterDeveloper,
};
use crate::storage::LocalStorageStore;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub client: GatewayClient,
    pub auth: AuthService,
    /// Signal copy of the auth service state; the only thing pages subscribe to.
    pub auth_state: RwSignal<AuthState>,
}

impl AppState {
    pub fn new() -> Result<Self, ClientError> {
        let session = SessionManager::new(LocalStorageStore);
        let client = GatewayClient::new(client_config(), session)?;
        let auth = AuthService::new(client.clone());
        Ok(Self { auth_state: RwSignal::new(auth.state()), client, auth })
    }

    pub fn user(&self) -> Option<User> {
        self.auth_state.with(|s| s.user().cloned())
    }

    pub fn user_id(&self) -> Option<String> {
        self.auth_state.with(|s| s.user().map(|u| u.id.clone()))
    }

    /// Inline message for a failed call. A lost session also flips the auth
    /// state so guarded pages redirect to the login page.
    pub fn report(&self, err: &ClientError) -> String {
        self.auth.on_client_error(err);
        err.to_string()
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to start the gateway client: {}", e);
            return view! {
                <div class="app-error">
                    <h1>"Agora is unavailable"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        },
    };
    provide_context(state);

    view! {
        <Title text="Agora - AI agent marketplace" />
        <AuthProvider>
            <Router>
                <div class="app-container">
                    <Header />
                    <main class="main-content container">
                        <Routes fallback=NotFound>
                            <Route path=path!("/") view=Home />
                            <Route path=path!("/agent/:id") view=AgentDetail />
                            <Route path=path!("/discussions") view=Discussions />
                            <Route path=path!("/discussion") view=Discussion />
                            <Route path=path!("/articles") view=Articles />
                            <Route path=path!("/article/:id") view=ArticleDetail />
                            <Route
                                path=path!("/login")
                                view=|| view! { <ProtectedRoute guest_only=true><Login /></ProtectedRoute> }
                            />
                            <Route
                                path=path!("/register")
                                view=|| view! { <ProtectedRoute guest_only=true><Register /></ProtectedRoute> }
                            />
                            <Route path=path!("/register-developer") view=RegisterDeveloper />
                            <Route
                                path=path!("/forgot-password")
                                view=|| view! { <ProtectedRoute guest_only=true><ForgotPassword /></ProtectedRoute> }
                            />
                            <Route
                                path=path!("/profile")
                                view=|| view! { <ProtectedRoute><Profile /></ProtectedRoute> }
                            />
                            <Route
                                path=path!("/add_agents/agent")
                                view=|| view! { <ProtectedRoute><AgentBasicsStep /></ProtectedRoute> }
                            />
                            <Route
                                path=path!("/add_agents/:id/version")
                                view=|| view! { <ProtectedRoute><AgentVersionStep /></ProtectedRoute> }
                            />
                            <Route
                                path=path!("/add_agents/:id/media")
                                view=|| view! { <ProtectedRoute><AgentMediaStep /></ProtectedRoute> }
                            />
                            <Route
                                path=path!("/add_agent")
                                view=|| view! { <ProtectedRoute><AddAgentLegacy /></ProtectedRoute> }
                            />
                        </Routes>
                    </main>
                    <Footer />
                    <Assistant />
                </div>
            </Router>
        </AuthProvider>
    }
    .into_any()
}
