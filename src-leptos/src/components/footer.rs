//! Site footer

use leptos::prelude::*;

const LINK_GROUPS: [(&str, &[(&str, &str)]); 3] = [
    ("For customers", &[("Catalog", "/"), ("Articles", "/articles")]),
    ("For developers", &[("Publish an agent", "/add_agents/agent"), ("Become a developer", "/profile")]),
    ("Community", &[("Discussions", "/discussions"), ("Sign in", "/login")]),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="main-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <span class="logo-title">"Agora"</span>
                    <p class="footer-about-text">"The place to find and share AI agents"</p>
                </div>
                {LINK_GROUPS.into_iter().map(|(heading, links)| view! {
                    <div class="footer-links">
                        <h3 class="footer-heading">{heading}</h3>
                        <ul>
                            {links.iter().map(|(label, href)| view! {
                                <li><a href=*href>{*label}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
            <div class="footer-bottom">{format!("© {} Agora", year)}</div>
        </footer>
    }
}
