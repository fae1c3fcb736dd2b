use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found - Agora" />
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/" class="btn btn--primary">"Back to catalog"</a>
        </div>
    }
}
