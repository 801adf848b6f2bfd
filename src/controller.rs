//! Interaction controller - owns the rectangles, the image and the active
//! session.
//!
//! Pointer handlers live in [`crate::input`] and the detection round trip in
//! [`crate::submission`]; both are `impl InteractionController` blocks over
//! the state defined here.

use crate::error::{EditorError, EditorResult};
use crate::hit_testing::HitTester;
use crate::image_source::{ImageLayout, ImageSource};
use crate::input::{CoordinateMapper, InteractionState, PointerTarget};
use crate::perf::PointerTimings;
use crate::render::EditorView;
use crate::settings::EditorSettings;
use crate::store::RectangleStore;
use crate::types::{ContainerFrame, Point, RectId, Rectangle};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Controller shared between threads. All access is serialized by the mutex.
pub type SharedController = Arc<Mutex<InteractionController>>;

/// The image currently being annotated and how it is laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    pub source: ImageSource,
    pub layout: ImageLayout,
}

pub struct InteractionController {
    pub(crate) store: RectangleStore,
    pub(crate) state: InteractionState,
    pub(crate) image: Option<LoadedImage>,
    pub(crate) settings: EditorSettings,
    pub(crate) hit_tester: HitTester,
    pub(crate) timings: PointerTimings,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        let hit_tester = HitTester::new(settings.handle_hit_radius, settings.delete_button_size);
        Self {
            store: RectangleStore::new(hit_tester.reach()),
            state: InteractionState::Idle,
            image: None,
            settings,
            hit_tester,
            timings: PointerTimings::new(),
        }
    }

    pub fn into_shared(self) -> SharedController {
        Arc::new(Mutex::new(self))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn store(&self) -> &RectangleStore {
        &self.store
    }

    /// Rectangles in store order
    pub fn rectangles(&self) -> &[Rectangle] {
        self.store.as_slice()
    }

    pub fn rectangle(&self, id: RectId) -> Option<&Rectangle> {
        self.store.get(id)
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn pointer_timings(&self) -> &PointerTimings {
        &self.timings
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Start annotating a new image. Drops every rectangle, discards any
    /// session and restarts "Area N" numbering.
    pub fn load_image(
        &mut self,
        source: ImageSource,
        layout: ImageLayout,
        view: &mut dyn EditorView,
    ) {
        self.clear_rectangles(view);
        info!(
            bytes = source.bytes.len(),
            mime = %source.mime,
            width = source.natural.width,
            height = source.natural.height,
            "Image loaded"
        );
        self.image = Some(LoadedImage { source, layout });
    }

    /// Update where the image is drawn (e.g. after the host view resized).
    pub fn set_image_layout(&mut self, layout: ImageLayout) -> EditorResult<()> {
        let image = self.image.as_mut().ok_or(EditorError::NoImageLoaded)?;
        image.layout = layout;
        Ok(())
    }

    /// Return to the freshly constructed state: no image, no rectangles,
    /// no session.
    pub fn reset(&mut self, view: &mut dyn EditorView) {
        self.clear_rectangles(view);
        self.image = None;
        self.timings.reset();
    }

    fn clear_rectangles(&mut self, view: &mut dyn EditorView) {
        self.finish_session("rectangles cleared");
        for id in self.store.ids() {
            view.remove_rectangle(id);
        }
        self.store.clear();
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Add a rectangle with the default geometry and render it.
    pub fn add_rectangle(&mut self, view: &mut dyn EditorView) -> EditorResult<RectId> {
        if self.image.is_none() {
            warn!("Add rectangle ignored: no image loaded");
            return Err(EditorError::NoImageLoaded);
        }

        let id = self.store.add(self.settings.default_rect);
        if let Some(rect) = self.store.get(id) {
            view.render_rectangle(rect);
        }
        Ok(id)
    }

    /// Delete a rectangle. If it is the target of the open session, the
    /// session is discarded and the controller returns to idle.
    pub fn delete_rectangle(
        &mut self,
        id: RectId,
        view: &mut dyn EditorView,
    ) -> EditorResult<Rectangle> {
        let removed = self
            .store
            .remove(id)
            .ok_or(EditorError::UnknownRectangle(id))?;

        if self.state.target_id() == Some(id) {
            self.finish_session("target deleted");
        }

        view.remove_rectangle(id);
        debug!(rect_id = id, "rectangle deleted");
        Ok(removed)
    }

    /// Classify a global pointer position against the rectangles using the
    /// built-in hit tester.
    pub fn hit_test(&self, position: Point, frame: ContainerFrame) -> Option<PointerTarget> {
        let local = CoordinateMapper::to_container_local(position, frame.origin);
        self.hit_tester.hit_test(&self.store, local)
    }
}
