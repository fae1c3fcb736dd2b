//! Small DOM event helpers

use wasm_bindgen::JsCast;

/// Checked state of the checkbox that fired `ev`.
pub fn event_target_checked(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}
