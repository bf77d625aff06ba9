extern crate mandelzoom;
extern crate num;

use mandelzoom::palette::MEMBER_COLOR;
use mandelzoom::{
    evaluate, pixel_to_point, zoom, Palette, Pixel, PixelBuffer, Raster, RenderConfig, Renderer,
    Session, Viewport,
};
use num::Complex;

#[test]
fn top_left_of_the_default_view_escapes_at_once() {
    let raster = Raster(4, 4);
    let viewport = Viewport::default();
    let c = pixel_to_point(Pixel(0, 0), raster, &viewport);
    assert_eq!(c, Complex::new(-2.0, -1.0));

    let escape = evaluate(c, 80);
    assert_eq!(escape.iterations, 1);
    assert!(!escape.member);

    let renderer = Renderer::new(Palette::rainbow(), &RenderConfig::default()).unwrap();
    let frame = renderer.render(&viewport, raster);
    let member = [MEMBER_COLOR.0, MEMBER_COLOR.1, MEMBER_COLOR.2, 255];
    assert_ne!(frame.pixel(Pixel(0, 0)), member);
}

#[test]
fn center_click_is_a_pure_scale_down() {
    let raster = Raster(300, 200);
    let old = Viewport::default();
    let new = zoom(Pixel(150, 100), raster, &old, 0.5);
    assert!((new.real_width() - old.real_width() / 2.0).abs() < 1e-12);
    assert!((new.imaginary_height() - old.imaginary_height() / 2.0).abs() < 1e-12);
    assert!((new.center().re - old.center().re).abs() < 1e-12);
    assert!((new.center().im - old.center().im).abs() < 1e-12);
}

#[test]
fn same_view_renders_identical_frames() {
    let config = RenderConfig::default().with_threads(4);
    let renderer = Renderer::new(Palette::rainbow(), &config).unwrap();
    let viewport = Viewport::new(-0.75, -0.73, 0.1, 0.12).unwrap();
    let first = renderer.render(&viewport, Raster(64, 48));
    let second = renderer.render(&viewport, Raster(64, 48));
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn session_frames_follow_the_zoomed_viewport() {
    let config = RenderConfig::default();
    let raster = Raster(20, 10);
    let frames = Vec::<PixelBuffer>::new();
    let mut session = Session::new(&config, Palette::rainbow(), frames, raster).unwrap();
    session.start().unwrap();
    session.click(Pixel(3, 7)).unwrap();

    let expected_viewport = zoom(Pixel(3, 7), raster, &Viewport::default(), 0.5);
    assert_eq!(*session.viewport(), expected_viewport);

    let renderer = Renderer::new(Palette::rainbow(), &config).unwrap();
    let frames = session.into_presenter();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1], renderer.render(&expected_viewport, raster));
}
