//! Single-page submission: upload an agent archive and a demo video directly.
//! The wizard is the full flow; this page only ships the two files.

use agora_client::{ClientError, GatewayClient};
use agora_types::forms::MediaFile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::app::AppState;
use crate::files::{read_file, read_video, selected_files};
use crate::tasks::alert;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Upload {
    Archive,
    Video,
}

impl Upload {
    fn label(self) -> &'static str {
        match self {
            Self::Archive => "Archive",
            Self::Video => "Video",
        }
    }
}

#[component]
pub fn AddAgentLegacy() -> impl IntoView {
    let state = expect_context::<AppState>();
    let busy = RwSignal::new(Option::<Upload>::None);

    let upload = move |kind: Upload, input: web_sys::HtmlInputElement| {
        let Some(file) = selected_files(&input).into_iter().next() else {
            return;
        };
        let client = state.client.clone();
        let report = state.clone();
        busy.set(Some(kind));
        spawn_local(async move {
            let read = match kind {
                Upload::Archive => read_file(&file).await,
                Upload::Video => read_video(&file).await,
            };
            let result = match read {
                Ok(media) => send(&client, kind, &media).await.map_err(|e| report.report(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => alert(&format!("{} uploaded successfully!", kind.label())),
                Err(e) => {
                    alert(&format!("Upload failed: {}", e));
                    input.set_value("");
                },
            }
            busy.try_set(None);
        });
    };

    let upload_archive = upload.clone();
    let upload_video = upload;

    view! {
        <Title text="Upload agent files - Agora" />
        <div class="back-to-catalog">
            <a href="/" class="btn btn--secondary">"‹ Back to catalog"</a>
        </div>
        <div class="wizard-card">
            <h1 class="wizard-title">"Upload agent files"</h1>
            <p class="form-hint">
                "To publish a full listing use the "<a href="/add_agents/agent">"step-by-step wizard"</a>"."
            </p>

            <div class="form-group">
                <label for="archive-input" class="form-label">"Agent archive (.zip)"</label>
                <input
                    id="archive-input"
                    type="file"
                    accept=".zip,application/zip"
                    class="form-input"
                    disabled=move || busy.get().is_some()
                    on:change=move |ev| upload_archive(Upload::Archive, event_target(&ev))
                />
            </div>

            <div class="form-group">
                <label for="legacy-video-input" class="form-label">"Demo video (.mp4)"</label>
                <input
                    id="legacy-video-input"
                    type="file"
                    accept="video/mp4,.mp4"
                    class="form-input"
                    disabled=move || busy.get().is_some()
                    on:change=move |ev| upload_video(Upload::Video, event_target(&ev))
                />
            </div>

            {move || busy.get().map(|kind| view! { <p class="form-hint">{format!("Uploading {}...", kind.label().to_lowercase())}</p> })}
        </div>
    }
}

async fn send(client: &GatewayClient, kind: Upload, media: &MediaFile) -> Result<(), ClientError> {
    match kind {
        Upload::Archive => client.upload_archive(media).await,
        Upload::Video => client.upload_video(media).await,
    }
    .map(|response| log::debug!("{} upload response: {}", kind.label(), response))
}
