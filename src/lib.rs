pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod filename;
pub mod logging;
pub mod media;
pub mod presenter;
pub mod state;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

pub use config::ModalConfig;
pub use dom::DomStage;
pub use error::ModalError;
pub use media::{MediaKind, MediaReference};
pub use presenter::{DismissTrigger, Presenter, Stage, Visibility};

thread_local! {
    static CONFIG: RefCell<ModalConfig> = RefCell::new(ModalConfig::default());
    // Created on first open so pages can configure before any story is shown.
    static PRESENTER: RefCell<Option<Presenter<DomStage>>> = const { RefCell::new(None) };
}

/// Panic hook plus console logging. Idempotent.
#[wasm_bindgen(js_name = initStoryViewer)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init();
}

/// Replace the modal configuration. A modal opened under the old one is
/// hidden and its listeners released.
pub fn install_config(config: ModalConfig) {
    CONFIG.with(|current| *current.borrow_mut() = config);
    let previous = PRESENTER.with(|slot| slot.borrow_mut().take());
    if let Some(presenter) = previous {
        presenter.retire();
    }
}

/// JS entry for [`install_config`]. An invalid config is logged and the
/// current one kept.
#[wasm_bindgen(js_name = configureStoryModal)]
pub fn configure_story_modal(config: JsValue) {
    match ModalConfig::from_js(config) {
        Ok(config) => install_config(config),
        Err(err) => tracing::warn!(%err, "keeping previous story modal config"),
    }
}

#[wasm_bindgen(js_name = openStoryModal)]
pub fn open_story_modal(media_url: &str, username: &str) {
    PRESENTER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let config = CONFIG.with(|c| c.borrow().clone());
            match Presenter::for_page(config) {
                Ok(presenter) => *slot = Some(presenter),
                Err(err) => {
                    tracing::warn!(%err, "story modal unavailable");
                    return;
                }
            }
        }
        if let Some(presenter) = slot.as_ref() {
            presenter.present(media_url, username);
        }
    });
}

#[wasm_bindgen(js_name = closeStoryModal)]
pub fn close_story_modal() {
    PRESENTER.with(|slot| {
        if let Some(presenter) = slot.borrow().as_ref() {
            presenter.close();
        }
    });
}

#[wasm_bindgen(js_name = showFilename)]
pub fn show_filename(input: &HtmlInputElement, label_id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        filename::show_filename(&document, input, label_id);
    }
}
