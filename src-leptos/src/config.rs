//! Build-time endpoints for the web client.
//!
//! `AGORA_GATEWAY_URL` and `AGORA_ASSISTANT_URL` are read when the bundle is
//! compiled. Paths starting with `/` are resolved against the page origin.

use agora_client::ClientConfig;

const DEFAULT_GATEWAY_URL: &str = "/api";

const GATEWAY_URL: Option<&str> = option_env!("AGORA_GATEWAY_URL");
const ASSISTANT_URL: Option<&str> = option_env!("AGORA_ASSISTANT_URL");

fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Turn `/api` into `https://host/api`; absolute URLs pass through.
fn absolute(url: &str) -> String {
    if url.starts_with('/') {
        format!("{}{}", origin().unwrap_or_default(), url)
    } else {
        url.to_string()
    }
}

pub fn client_config() -> ClientConfig {
    let gateway = GATEWAY_URL.filter(|u| !u.is_empty()).unwrap_or(DEFAULT_GATEWAY_URL);
    let config = ClientConfig::new(absolute(gateway));
    match ASSISTANT_URL.filter(|u| !u.is_empty()) {
        Some(url) => config.with_assistant_url(absolute(url)),
        None => config,
    }
}

/// Whether the chat widget has somewhere to talk to.
pub const fn assistant_enabled() -> bool {
    ASSISTANT_URL.is_some()
}
