//! Coordinate conversion between the host's global pointer space, the
//! container-local space rectangles live in, and image pixels.

use crate::image_source::ImageLayout;
use crate::types::{Geometry, PixelRect, Point, Size};

pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Convert a global pointer position to container-local coordinates.
    #[inline]
    pub fn to_container_local(global: Point, container_origin: Point) -> Point {
        global - container_origin
    }

    /// Convert a container-local position back to global coordinates.
    #[inline]
    pub fn to_global(local: Point, container_origin: Point) -> Point {
        local + container_origin
    }

    /// Scale a rectangle (relative to the rendered image's top-left) into
    /// image pixels. Each axis scales by `natural / rendered`.
    ///
    /// Returns `None` when the rendered size is not positive.
    pub fn to_image_pixels(rect: &Geometry, natural: Size, rendered: Size) -> Option<PixelRect> {
        if !rendered.is_positive() {
            return None;
        }
        let sx = natural.width / rendered.width;
        let sy = natural.height / rendered.height;

        Some(PixelRect {
            x1: rect.x * sx,
            y1: rect.y * sy,
            x2: rect.right() * sx,
            y2: rect.bottom() * sy,
        })
    }

    /// Map a container-local rectangle to image pixels, accounting for where
    /// the image is drawn inside the container.
    pub fn container_rect_to_image_pixels(
        rect: &Geometry,
        natural: Size,
        layout: &ImageLayout,
    ) -> Option<PixelRect> {
        let relative = Geometry {
            x: rect.x - layout.offset.x,
            y: rect.y - layout.offset.y,
            ..*rect
        };
        Self::to_image_pixels(&relative, natural, layout.rendered)
    }
}
