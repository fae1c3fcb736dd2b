//! Article page

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::thread::ContentThread;

#[component]
pub fn ArticleDetail() -> impl IntoView {
    let params = use_params_map();
    let article_id = Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()));

    view! {
        <ContentThread
            content_id=article_id
            back_href="/articles"
            back_label="‹ Back to articles"
            missing_text="Article not found."
        />
    }
}
