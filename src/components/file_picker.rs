use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::filename::{show_filename, NO_FILE_CHOSEN};

/// Styled file input whose chosen filename is mirrored into a label.
#[component]
pub fn FilePicker(
    #[prop(into)] input_id: String,
    #[prop(into)] label_id: String,
) -> impl IntoView {
    let label_for_change = label_id.clone();
    let on_change = move |ev: web_sys::Event| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(target) = ev.target() {
            if let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() {
                show_filename(&document, &input, &label_for_change);
            }
        }
    };

    view! {
        <div style="display: flex; align-items: center; gap: 12px; font-size: 12px;">
            <label
                for=input_id.clone()
                style="border: 1px solid #44dd66; padding: 6px 12px; cursor: pointer; color: #44dd66;"
            >
                "Choose story"
            </label>
            <input
                id=input_id
                type="file"
                accept="image/*,video/*"
                style="display: none;"
                on:change=on_change
            />
            <span id=label_id style="color: #66cc88;">{NO_FILE_CHOSEN}</span>
        </div>
    }
}
