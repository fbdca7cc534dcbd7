use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::ModalConfig;
use crate::error::ModalError;
use crate::media::MediaReference;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

/// What the stage saw that might close the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseControl,
    /// Any click in the window. `on_backdrop` is true only when the click
    /// target is the container itself, not something mounted inside it.
    WindowClick { on_backdrop: bool },
}

impl DismissTrigger {
    /// Classify a window click by comparing its target with the container.
    /// A click with no target never counts as a backdrop click.
    pub fn window_click<T: PartialEq>(target: Option<&T>, container: &T) -> Self {
        DismissTrigger::WindowClick {
            on_backdrop: target == Some(container),
        }
    }

    pub fn dismisses(&self) -> bool {
        match self {
            DismissTrigger::CloseControl => true,
            DismissTrigger::WindowClick { on_backdrop } => *on_backdrop,
        }
    }
}

pub type DismissHandler = Rc<dyn Fn(DismissTrigger)>;

/// The surface a [`Presenter`] draws on.
///
/// Each step may fail on its own (usually because an element is missing from
/// the host page); the presenter logs the failure and moves on to the next.
pub trait Stage {
    /// Listener registrations returned by [`Stage::bind_dismissal`]. Handing
    /// one back to [`Stage::release`] must detach every listener it holds.
    type Binding;

    fn clear_media(&self) -> Result<(), ModalError>;
    fn mount_media(&self, media: &MediaReference) -> Result<(), ModalError>;
    fn set_label(&self, text: &str) -> Result<(), ModalError>;
    fn set_visibility(&self, visibility: Visibility) -> Result<(), ModalError>;
    fn visibility(&self) -> Visibility;
    fn bind_dismissal(&self, on_dismiss: DismissHandler) -> Result<Self::Binding, ModalError>;
    fn release(&self, binding: Self::Binding);
}

/// Shows one story at a time in a modal.
pub struct Presenter<S: Stage> {
    stage: Rc<S>,
    config: ModalConfig,
    binding: RefCell<Option<S::Binding>>,
}

impl<S: Stage + 'static> Presenter<S> {
    pub fn new(stage: S, config: ModalConfig) -> Self {
        Self {
            stage: Rc::new(stage),
            config,
            binding: RefCell::new(None),
        }
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn visibility(&self) -> Visibility {
        self.stage.visibility()
    }

    /// Replace whatever is in the modal with `media_url`, label it with
    /// `username` and show it. Never fails; steps the page can't support are
    /// skipped.
    pub fn present(&self, media_url: &str, username: &str) {
        let media = MediaReference::new(media_url);
        tracing::debug!(url = %media.url, kind = ?media.kind, username, "presenting story");

        skip_on_error("clear media", self.stage.clear_media());
        skip_on_error("mount media", self.stage.mount_media(&media));
        skip_on_error("set label", self.stage.set_label(&self.config.label_for(username)));
        skip_on_error("show modal", self.stage.set_visibility(Visibility::Shown));

        self.rebind();
    }

    /// Hide the modal. Listeners stay bound until the next `present`.
    pub fn close(&self) {
        hide(&*self.stage);
    }

    /// Hide the modal and detach its listeners. Used when the presenter is
    /// replaced, so an open modal is never left without a way to close it.
    pub fn retire(self) {
        self.close();
    }

    fn rebind(&self) {
        // Detach the previous open's listeners before adding new ones so
        // repeated opens never stack handlers.
        if let Some(previous) = self.binding.borrow_mut().take() {
            self.stage.release(previous);
        }

        let stage: Weak<S> = Rc::downgrade(&self.stage);
        let on_dismiss: DismissHandler = Rc::new(move |trigger: DismissTrigger| {
            if !trigger.dismisses() {
                return;
            }
            if let Some(stage) = stage.upgrade() {
                tracing::debug!(?trigger, "dismissing story modal");
                hide(&*stage);
            }
        });

        match self.stage.bind_dismissal(on_dismiss) {
            Ok(binding) => *self.binding.borrow_mut() = Some(binding),
            Err(err) => tracing::warn!(%err, "story modal dismissal not bound"),
        }
    }
}

impl<S: Stage> Drop for Presenter<S> {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.get_mut().take() {
            self.stage.release(binding);
        }
    }
}

fn hide<S: Stage>(stage: &S) {
    skip_on_error("hide modal", stage.set_visibility(Visibility::Hidden));
}

fn skip_on_error(step: &str, result: Result<(), ModalError>) {
    if let Err(err) = result {
        tracing::warn!(step, %err, "skipping story modal step");
    }
}
