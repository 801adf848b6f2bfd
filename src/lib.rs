//! Regionboard - interactive rectangle editing over an image.
//!
//! Rectangles are dragged and resized from eight handles inside a
//! container, kept at or above a minimum size, and submitted to a detection
//! backend as image-pixel crop areas. Results come back as labels.
//!
//! ## Architecture
//!
//! - `geometry`: pure drag/resize math
//! - `store` / `spatial_index` / `hit_testing`: rectangles and pointer
//!   classification
//! - `controller` + `input`: the interaction state machine and its pointer
//!   handlers
//! - `submission`: wire format, HTTP backend and label application
//! - `render`: the view trait hosts implement

pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod hit_testing;
pub mod image_source;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod submission;
pub mod types;

pub use controller::{InteractionController, LoadedImage, SharedController};
pub use error::{EditorError, EditorResult};
pub use render::EditorView;
pub use types::{Container, ContainerFrame, Direction, Geometry, PixelRect, Point, RectId, Rectangle, Size};
