use leptos::prelude::*;

use crate::components::{FilePicker, StoryFeed, StoryModal};
use crate::config::ModalConfig;
use crate::state::Feed;

/// Id of the `<script type="application/json">` a server can embed the
/// story feed in.
const FEED_SCRIPT_ID: &str = "storyFeed";
/// Same, for a modal config overriding the default element ids.
const CONFIG_SCRIPT_ID: &str = "storyModalConfig";

fn embedded_json(id: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.text_content())
}

fn load_modal_config() {
    let Some(json) = embedded_json(CONFIG_SCRIPT_ID) else {
        return;
    };
    match ModalConfig::from_json(&json) {
        Ok(config) => crate::install_config(config),
        Err(err) => tracing::warn!(%err, "embedded story modal config ignored"),
    }
}

fn load_feed() -> Feed {
    match embedded_json(FEED_SCRIPT_ID) {
        Some(json) => Feed::from_json(&json).unwrap_or_else(|err| {
            tracing::warn!(%err, "embedded story feed unreadable, showing none");
            Feed::default()
        }),
        None => {
            tracing::info!("no embedded story feed, using demo stories");
            Feed::demo()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    load_modal_config();
    let feed = load_feed();
    tracing::debug!(stories = feed.stories.len(), "story feed loaded");

    view! {
        <div style="min-height: 100vh; background: #020202; color: #ccffdd; padding: 24px; \
                    box-sizing: border-box; \
                    font-family: 'JetBrains Mono', 'Fira Code', Consolas, monospace;">
            <h2 style="margin: 0 0 16px 0; font-size: 16px; color: #44dd66;">"Stories"</h2>
            <StoryFeed feed=feed />
            <FilePicker input_id="storyUpload" label_id="storyUploadName" />
            <StoryModal />
        </div>
    }
}
