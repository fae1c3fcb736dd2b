//! Turning `<input type="file">` selections into [`MediaFile`]s.

use std::cell::RefCell;
use std::rc::Rc;

use agora_types::forms::MediaFile;
use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Files currently selected in an input element.
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Files dropped onto a drop zone.
pub fn dropped_files(ev: &web_sys::DragEvent) -> Vec<web_sys::File> {
    let Some(list) = ev.data_transfer().and_then(|t| t.files()) else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Read the whole file into memory.
pub async fn read_file(file: &web_sys::File) -> Result<MediaFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let data = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(MediaFile {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
        duration_secs: None,
        data,
    })
}

/// Like [`read_file`], plus the video duration from its metadata.
pub async fn read_video(file: &web_sys::File) -> Result<MediaFile, String> {
    let duration = video_duration(file).await;
    let mut media = read_file(file).await?;
    media.duration_secs = duration;
    Ok(media)
}

/// Local preview URL for an image or video. Revoke with [`revoke_preview`].
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_preview(url: &str) {
    drop(web_sys::Url::revoke_object_url(url));
}

/// Load only the metadata into a detached `<video>` and read its duration.
/// `None` when the browser cannot decode the file.
async fn video_duration(file: &web_sys::File) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let video: web_sys::HtmlVideoElement = document.create_element("video").ok()?.dyn_into().ok()?;
    let url = preview_url(file)?;

    let (tx, rx) = oneshot::channel::<()>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let settle = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                drop(tx.send(()));
            }
        })
    };
    video.set_preload("metadata");
    video.set_onloadedmetadata(Some(settle.as_ref().unchecked_ref()));
    video.set_onerror(Some(settle.as_ref().unchecked_ref()));
    video.set_src(&url);

    let settled = rx.await.is_ok();
    video.set_onloadedmetadata(None);
    video.set_onerror(None);
    revoke_preview(&url);

    let duration = video.duration();
    (settled && duration.is_finite()).then_some(duration)
}
