use leptos::prelude::*;

use crate::config::{DEFAULT_CONTAINER_ID, DEFAULT_LABEL_ID, DEFAULT_MEDIA_ID};

/// Static markup the presenter drives. Leptos only renders it once; after
/// that the presenter owns its children and display style.
#[component]
pub fn StoryModal() -> impl IntoView {
    view! {
        <div
            id=DEFAULT_CONTAINER_ID
            class="modal"
            style="display: none; position: fixed; inset: 0; \
                   background: rgba(0,0,0,0.9); z-index: 1000;"
        >
            <div
                class="modal-content"
                style="position: relative; margin: 5vh auto; max-width: 90vw; \
                       text-align: center; color: #ccffdd; \
                       font-family: 'JetBrains Mono', 'Fira Code', Consolas, monospace;"
            >
                <span
                    id="closeModal"
                    class="close"
                    style="position: absolute; top: -8px; right: 0; \
                           font-size: 28px; cursor: pointer; color: #66cc88;"
                >
                    "\u{00d7}"
                </span>
                <div
                    id=DEFAULT_MEDIA_ID
                    style="max-height: 80vh; display: flex; justify-content: center;"
                ></div>
                <p id=DEFAULT_LABEL_ID style="margin-top: 12px; font-size: 13px;"></p>
            </div>
        </div>
    }
}
