//! Unit tests for coordinate mapping.

use regionboard::image_source::ImageLayout;
use regionboard::input::CoordinateMapper;
use regionboard::{Geometry, PixelRect, Point, Size};

#[test]
fn test_container_local_is_subtraction() {
    let local =
        CoordinateMapper::to_container_local(Point::new(340.0, 210.0), Point::new(300.0, 200.0));
    assert_eq!(local, Point::new(40.0, 10.0));
}

#[test]
fn test_image_pixels_scale_each_axis() {
    // Image displayed at half width, quarter height
    let pixels = CoordinateMapper::to_image_pixels(
        &Geometry::new(50.0, 50.0, 100.0, 60.0),
        Size::new(1600.0, 2400.0),
        Size::new(800.0, 600.0),
    );

    assert_eq!(
        pixels,
        Some(PixelRect {
            x1: 100.0,
            y1: 200.0,
            x2: 300.0,
            y2: 440.0,
        })
    );
}

#[test]
fn test_image_pixels_need_rendered_size() {
    let rect = Geometry::new(0.0, 0.0, 20.0, 20.0);
    assert_eq!(
        CoordinateMapper::to_image_pixels(&rect, Size::new(10.0, 10.0), Size::new(0.0, 10.0)),
        None
    );
}

#[test]
fn test_offset_image_layout() {
    let layout = ImageLayout::new(Size::new(400.0, 300.0), Point::new(100.0, 50.0));
    let pixels = CoordinateMapper::container_rect_to_image_pixels(
        &Geometry::new(150.0, 100.0, 40.0, 30.0),
        Size::new(800.0, 600.0),
        &layout,
    );

    assert_eq!(
        pixels,
        Some(PixelRect {
            x1: 100.0,
            y1: 100.0,
            x2: 180.0,
            y2: 160.0,
        })
    );
}
