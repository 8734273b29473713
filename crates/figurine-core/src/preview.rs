//! Page-level preview flow: generate, toggle between photo and 3D, edit.
//!
//! The UI chrome reads [`Preview::mode`] and [`Preview::status`] to decide
//! what to show; message text and dismissal timers stay with the host.

use crate::manager::{RenderSurface, SceneManager};
use crate::options::OptionSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Uploaded photo with an overlay of the chosen options.
    #[default]
    Flat,
    ThreeD,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("no photo uploaded")]
    MissingPhoto,
    #[error("not every option is selected")]
    IncompleteOptions,
    #[error("photo could not be read")]
    PhotoUnreadable,
    #[error("3D renderer unavailable")]
    RendererUnavailable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewStatus {
    #[default]
    Idle,
    /// Photo is being read / scene is being prepared.
    Loading,
    /// Model ready.
    Ready,
    /// The user went back to change options.
    Editing,
    Error(PreviewError),
}

pub struct Preview<S: RenderSurface> {
    pub scene: SceneManager<S>,
    mode: ViewMode,
    status: PreviewStatus,
    options: Option<OptionSet>,
}

impl<S: RenderSurface> Default for Preview<S> {
    fn default() -> Self {
        Self::new(SceneManager::default())
    }
}

impl<S: RenderSurface> Preview<S> {
    pub fn new(scene: SceneManager<S>) -> Self {
        Self {
            scene,
            mode: ViewMode::Flat,
            status: PreviewStatus::Idle,
            options: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn status(&self) -> PreviewStatus {
        self.status
    }

    /// Options of the last successful generation.
    pub fn options(&self) -> Option<&OptionSet> {
        self.options.as_ref()
    }

    /// Gate a generate click. On success the status becomes `Loading` and the
    /// host starts reading the photo.
    pub fn begin(&mut self, has_photo: bool, options_complete: bool) -> Result<(), PreviewError> {
        let result = if !has_photo {
            Err(PreviewError::MissingPhoto)
        } else if !options_complete {
            Err(PreviewError::IncompleteOptions)
        } else {
            Ok(())
        };
        self.status = match result {
            Ok(()) => PreviewStatus::Loading,
            Err(e) => PreviewStatus::Error(e),
        };
        result
    }

    /// Build or update the mannequin and switch to 3D. The host calls this
    /// after the photo read completed and the scene was initialized.
    pub fn generate_preview(&mut self, options: OptionSet) {
        if !self.scene.is_initialized() {
            log::warn!("[preview] generating before the scene surface exists");
        }
        self.scene.apply_options(&options);
        self.options = Some(options);
        self.mode = ViewMode::ThreeD;
        self.status = PreviewStatus::Ready;
    }

    /// Visibility only; nothing is rebuilt.
    pub fn toggle_mode(&mut self, to_3d: bool) -> ViewMode {
        self.mode = if to_3d {
            ViewMode::ThreeD
        } else {
            ViewMode::Flat
        };
        self.mode
    }

    /// Go back to the form: flat mode, editing status.
    pub fn edit(&mut self) {
        self.mode = ViewMode::Flat;
        self.status = PreviewStatus::Editing;
    }

    /// The photo read started by [`Preview::begin`] failed. The view is left
    /// as it was.
    pub fn photo_failed(&mut self) {
        self.status = PreviewStatus::Error(PreviewError::PhotoUnreadable);
    }

    /// Renderer could not be created; stay on the photo.
    pub fn renderer_failed(&mut self) {
        self.mode = ViewMode::Flat;
        self.status = PreviewStatus::Error(PreviewError::RendererUnavailable);
    }

    /// The host dismissed the status message.
    pub fn dismiss_status(&mut self) {
        if !matches!(self.status, PreviewStatus::Error(_)) {
            self.status = PreviewStatus::Idle;
        }
    }
}
