use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::config::{ModalConfig, HIDDEN_DISPLAY};
use crate::error::ModalError;
use crate::media::MediaReference;
use crate::presenter::{DismissHandler, DismissTrigger, Presenter, Stage, Visibility};

/// [`Stage`] backed by the live document. Elements are looked up on every
/// call since the host page may re-render them between opens.
pub struct DomStage {
    document: Document,
    config: ModalConfig,
}

impl DomStage {
    pub fn new(document: Document, config: ModalConfig) -> Self {
        Self { document, config }
    }

    pub fn from_window(config: ModalConfig) -> Result<Self, ModalError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ModalError::missing("document"))?;
        Ok(Self::new(document, config))
    }

    fn element(&self, id: &str) -> Result<Element, ModalError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ModalError::missing(format!("#{id}")))
    }

    fn container(&self) -> Result<HtmlElement, ModalError> {
        let id = &self.config.container_id;
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ModalError::Dom(format!("#{id} is not an html element")))
    }

    fn close_control(&self) -> Option<Element> {
        for selector in &self.config.close_selectors {
            match self.document.query_selector(selector) {
                Ok(Some(control)) => return Some(control),
                Ok(None) => {}
                Err(_) => tracing::warn!(selector, "invalid close control selector"),
            }
        }
        None
    }

    fn render(&self, media: &MediaReference) -> Result<Element, JsValue> {
        let plan = media.render_plan();
        let node = self.document.create_element(plan.tag)?;
        if let Some(src) = plan.src {
            node.set_attribute("src", src)?;
        }
        if plan.controls {
            node.set_attribute("controls", "")?;
        }
        if let Some(text) = plan.text {
            node.set_text_content(Some(text));
        }
        Ok(node)
    }
}

impl Stage for DomStage {
    type Binding = DomBinding;

    fn clear_media(&self) -> Result<(), ModalError> {
        let mount = self.element(&self.config.media_id)?;
        while let Some(child) = mount.first_child() {
            mount.remove_child(&child)?;
        }
        Ok(())
    }

    fn mount_media(&self, media: &MediaReference) -> Result<(), ModalError> {
        let mount = self.element(&self.config.media_id)?;
        let node = self.render(media)?;
        mount.append_child(&node)?;
        Ok(())
    }

    fn set_label(&self, text: &str) -> Result<(), ModalError> {
        self.element(&self.config.label_id)?
            .set_text_content(Some(text));
        Ok(())
    }

    fn set_visibility(&self, visibility: Visibility) -> Result<(), ModalError> {
        let display = match visibility {
            Visibility::Shown => self.config.shown_display.as_str(),
            Visibility::Hidden => HIDDEN_DISPLAY,
        };
        self.container()?.style().set_property("display", display)?;
        Ok(())
    }

    fn visibility(&self) -> Visibility {
        let display = self
            .container()
            .ok()
            .and_then(|c| c.style().get_property_value("display").ok());
        // No inline display means the page stylesheet keeps it hidden.
        match display {
            Some(value) if !value.is_empty() && value != HIDDEN_DISPLAY => Visibility::Shown,
            _ => Visibility::Hidden,
        }
    }

    fn bind_dismissal(&self, on_dismiss: DismissHandler) -> Result<DomBinding, ModalError> {
        let container = self.container()?;
        let window = web_sys::window().ok_or_else(|| ModalError::missing("window"))?;
        let mut binding = DomBinding::default();

        let backdrop = JsValue::from(container);
        let on_click = on_dismiss.clone();
        let attached = binding.listen(EventTarget::from(window), "click", move |ev: Event| {
            let target = ev.target().map(JsValue::from);
            on_click(DismissTrigger::window_click(target.as_ref(), &backdrop));
        });
        if let Err(err) = attached {
            self.release(binding);
            return Err(err);
        }

        match self.close_control() {
            Some(control) => {
                let attached = binding.listen(EventTarget::from(control), "click", move |_ev: Event| {
                    on_dismiss(DismissTrigger::CloseControl);
                });
                if let Err(err) = attached {
                    self.release(binding);
                    return Err(err);
                }
            }
            None => tracing::debug!(
                selectors = ?self.config.close_selectors,
                "no close control found, only backdrop clicks dismiss"
            ),
        }

        Ok(binding)
    }

    fn release(&self, binding: DomBinding) {
        for listener in binding.listeners {
            let removed = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
            if removed.is_err() {
                tracing::warn!(event = listener.event, "failed to remove story modal listener");
            }
        }
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Listeners attached for one open of the modal. The closures live here so
/// they can be detached by identity on the next open.
#[derive(Default)]
pub struct DomBinding {
    listeners: Vec<Listener>,
}

impl DomBinding {
    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), ModalError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener { target, event, callback });
        Ok(())
    }
}

impl Presenter<DomStage> {
    /// Presenter for the current page's document.
    pub fn for_page(config: ModalConfig) -> Result<Self, ModalError> {
        let stage = DomStage::from_window(config.clone())?;
        Ok(Presenter::new(stage, config))
    }
}
