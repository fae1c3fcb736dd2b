//! Wizard step 3: screenshots and a demo video

use agora_client::{AgentWizard, WizardStep};
use agora_types::forms::{MediaFile, MediaSelection};
use agora_types::{MediaItem, MediaKind};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use super::{wizard_agent_id, StepLayout};
use crate::app::AppState;
use crate::components::{Button, ErrorAlert, MediaCarousel, Modal, ModalType};
use crate::files::{dropped_files, preview_url, read_file, read_video, revoke_preview, selected_files};
use crate::tasks::{alert, spawn_fetch};

const STEP: WizardStep = WizardStep::Media;

/// Name, type and size only; enough for the checks that do not need the bytes.
fn file_header(file: &web_sys::File) -> MediaFile {
    MediaFile { name: file.name(), mime: file.type_(), size: file.size() as u64, ..Default::default() }
}

#[component]
pub fn AgentMediaStep() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let agent_id = wizard_agent_id();

    let selection = RwSignal::new(MediaSelection::default());
    // Object URLs parallel to `selection.photos`.
    let photo_previews = RwSignal::new(Vec::<String>::new());
    let video_preview = RwSignal::new(Option::<String>::None);
    let zoomed = RwSignal::new(Option::<String>::None);
    let reading = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let photo_input = NodeRef::<html::Input>::new();
    let video_input = NodeRef::<html::Input>::new();

    on_cleanup(move || {
        photo_previews.try_with_untracked(|urls| urls.iter().for_each(|u| revoke_preview(u)));
        video_preview.try_with_untracked(|url| url.as_deref().map(revoke_preview));
    });

    let add_photos = move |files: Vec<web_sys::File>| {
        let total = files.len();
        let images: Vec<web_sys::File> =
            files.into_iter().filter(|f| file_header(f).validate_photo().is_ok()).collect();
        if images.len() < total {
            alert(&format!("{} file(s) skipped: only images are accepted", total - images.len()));
        }
        if images.is_empty() {
            return;
        }
        reading.set(true);
        spawn_local(async move {
            let mut read = Vec::with_capacity(images.len());
            let mut urls = Vec::with_capacity(images.len());
            for file in &images {
                match read_file(file).await {
                    Ok(media) => {
                        read.push(media);
                        urls.push(preview_url(file).unwrap_or_default());
                    },
                    Err(e) => log::warn!("{}", e),
                }
            }
            selection.try_update(|s| s.add_photos(read));
            photo_previews.try_update(|p| p.extend(urls));
            reading.try_set(false);
        });
    };

    let remove_photo = move |url: String| {
        let Some(index) = photo_previews.with_untracked(|p| p.iter().position(|u| *u == url)) else {
            return;
        };
        selection.update(|s| s.remove_photo(index));
        photo_previews.update(|p| {
            p.remove(index);
        });
        revoke_preview(&url);
    };

    let choose_video = move |file: web_sys::File| {
        // Cheap checks before reading a large file into memory.
        if let Err(e) = file_header(&file).validate_video() {
            alert(&e.to_string());
            return;
        }
        reading.set(true);
        spawn_local(async move {
            match read_video(&file).await {
                Ok(media) => match selection.try_update(|s| s.set_video(media)) {
                    Some(Ok(())) => {
                        let url = preview_url(&file);
                        if let Some(old) = video_preview.try_update(|v| std::mem::replace(v, url)).flatten() {
                            revoke_preview(&old);
                        }
                    },
                    Some(Err(e)) => alert(&e.to_string()),
                    None => {},
                },
                Err(e) => alert(&e),
            }
            reading.try_set(false);
        });
    };

    let remove_video = move || {
        selection.update(|s| s.video = None);
        if let Some(old) = video_preview.try_update(Option::take).flatten() {
            revoke_preview(&old);
        }
        if let Some(input) = video_input.get_untracked() {
            input.set_value("");
        }
    };

    let preview_media = Signal::derive(move || {
        let photos = photo_previews.get().into_iter().map(|src| MediaItem {
            kind: MediaKind::Image,
            src,
            alt: Some("Screenshot".to_string()),
        });
        let video = video_preview.get().map(|src| MediaItem { kind: MediaKind::Video, src, alt: None });
        photos.chain(video).collect::<Vec<_>>()
    });

    let on_publish = move || {
        let Some(id) = agent_id.get_untracked() else {
            return;
        };
        let media = selection.get_untracked();
        if let Err(e) = media.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        uploading.set(true);
        error.set(None);
        let wizard = AgentWizard::new(state.client.clone());
        let report = state.clone();
        let nav = navigate.clone();
        spawn_fetch(async move { wizard.submit_media(&id, &media).await.map(|_| id) }, move |result| {
            match result {
                Ok(id) => nav(&STEP.next_route(&id), Default::default()),
                Err(e) => {
                    error.set(Some(report.report(&e)));
                    uploading.set(false);
                },
            }
        });
    };

    let back_href = agent_id.get_untracked().map(|id| WizardStep::Version.route(&id)).unwrap_or_else(|| "/".to_string());

    view! {
        <Title text="Add agent: media - Agora" />
        <StepLayout step=STEP back_href=back_href back_label="‹ Back to version">
            <ErrorAlert error=error />
            <div class="agent-form">
                <div class="form-group">
                    <label class="form-label">"Screenshots (3-5 recommended)"</label>
                    <div
                        class="drop-zone"
                        on:dragover=|ev: web_sys::DragEvent| ev.prevent_default()
                        on:drop=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            add_photos(dropped_files(&ev));
                        }
                        on:click=move |_| {
                            if let Some(input) = photo_input.get_untracked() {
                                input.click();
                            }
                        }
                    >
                        <p>"Drop images here or "<span class="link">"choose files"</span></p>
                        <p class="form-hint">"JPG, PNG, GIF"</p>
                    </div>
                    <input
                        node_ref=photo_input
                        type="file"
                        accept="image/*"
                        multiple=true
                        class="hidden"
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            let files = selected_files(&input);
                            input.set_value("");
                            add_photos(files);
                        }
                    />
                    <div class="photo-grid">
                        <For
                            each=move || photo_previews.get()
                            key=|url| url.clone()
                            children=move |url| {
                                let zoom_url = url.clone();
                                let remove_url = url.clone();
                                view! {
                                    <div class="photo-thumb">
                                        <img src=url alt="Screenshot" on:click=move |_| zoomed.set(Some(zoom_url.clone())) />
                                        <button
                                            type="button"
                                            class="photo-remove"
                                            title="Remove"
                                            on:click=move |_| remove_photo(remove_url.clone())
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="video-input" class="form-label">"Demo video (.mp4, up to 100 MB and 3 minutes)"</label>
                    <input
                        id="video-input"
                        node_ref=video_input
                        type="file"
                        accept="video/mp4,.mp4"
                        class="form-input"
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            match selected_files(&input).into_iter().next() {
                                Some(file) => choose_video(file),
                                None => remove_video(),
                            }
                        }
                    />
                    <Show when=move || selection.with(|s| s.video.is_some())>
                        <div class="video-selected">
                            <span>{move || selection.with(|s| s.video.as_ref().map(|v| v.name.clone()).unwrap_or_default())}</span>
                            <button type="button" class="btn btn--ghost" on:click=move |_| remove_video()>"Remove"</button>
                        </div>
                    </Show>
                </div>

                <Show when=move || reading.get()>
                    <p class="form-hint">"Reading files..."</p>
                </Show>

                <Show when=move || !preview_media.with(Vec::is_empty)>
                    <div class="media-preview">
                        <h3>"Preview"</h3>
                        <MediaCarousel media=preview_media height="300px" />
                    </div>
                </Show>

                <div class="form-actions">
                    <Button
                        text="Publish"
                        loading_text="Uploading..."
                        loading=uploading
                        disabled=reading
                        on_click=on_publish
                    />
                </div>
            </div>
        </StepLayout>

        <Modal
            is_open=Signal::derive(move || zoomed.with(Option::is_some))
            title="Screenshot"
            modal_type=ModalType::Alert
            confirm_text="Close".to_string()
            on_confirm=Callback::new(move |_| zoomed.set(None))
            on_cancel=Callback::new(move |_| zoomed.set(None))
        >
            {move || zoomed.get().map(|src| view! { <img class="photo-zoomed" src=src alt="Screenshot" /> })}
        </Modal>
    }
}
