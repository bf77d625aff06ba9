extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use image::GenericImageView;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn mandelzoom() -> Command {
    Command::cargo_bin("mandelzoom").unwrap()
}

#[test]
fn renders_the_default_view() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("mandel.png");
    mandelzoom()
        .arg("--output")
        .arg(&out)
        .args(&["--size", "40x30", "--threads", "1"])
        .assert()
        .success();
    let img = image::open(&out).unwrap();
    assert_eq!(img.dimensions(), (40, 30));
}

#[test]
fn writes_one_file_per_frame() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("zoom.png");
    mandelzoom()
        .arg("-o")
        .arg(&out)
        .args(&["-s", "24x16", "-c", "12,8", "-c", "3,4", "--frames"])
        .assert()
        .success();
    for frame in 0..3 {
        assert!(dir.path().join(format!("zoom-{:04}.png", frame)).exists());
    }
    assert!(!dir.path().join("zoom-0003.png").exists());
    assert!(!out.exists());
}

#[test]
fn writes_a_pixmap() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("mandel.ppm");
    mandelzoom()
        .arg("-o")
        .arg(&out)
        .args(&["-s", "8x8", "--real", "-1.5,-1", "--imaginary", "-0.25,0.25"])
        .assert()
        .success();
    let img = image::open(&out).unwrap();
    assert_eq!(img.dimensions(), (8, 8));
}

#[test]
fn random_palette_with_a_seed() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.ppm");
    let second = dir.path().join("second.ppm");
    for out in &[&first, &second] {
        mandelzoom()
            .arg("-o")
            .arg(out)
            .args(&["-s", "16x12", "--palette", "random", "--seed", "42", "-i", "120"])
            .assert()
            .success();
    }
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn rejects_a_malformed_size() {
    let dir = tempdir().unwrap();
    mandelzoom()
        .arg("-o")
        .arg(dir.path().join("x.png"))
        .args(&["-s", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_an_inverted_viewport() {
    let dir = tempdir().unwrap();
    mandelzoom()
        .arg("-o")
        .arg(dir.path().join("x.png"))
        .args(&["-s", "8x8", "--real", "1,-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid viewport"));
}

#[test]
fn rejects_a_click_outside_the_raster() {
    let dir = tempdir().unwrap();
    mandelzoom()
        .arg("-o")
        .arg(dir.path().join("x.png"))
        .args(&["-s", "8x8", "-c", "9,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the 8x8 raster"));
}

#[test]
fn rainbow_palette_cannot_cover_more_iterations() {
    let dir = tempdir().unwrap();
    mandelzoom()
        .arg("-o")
        .arg(dir.path().join("x.png"))
        .args(&["-s", "8x8", "-i", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("palette has 80 colors"));
}

#[test]
fn rejects_a_size_too_large_to_allocate() {
    let dir = tempdir().unwrap();
    mandelzoom()
        .arg("-o")
        .arg(dir.path().join("x.png"))
        .args(&["-s", "4611686018427387904x4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid raster"));
}

#[test]
fn warns_when_a_seed_has_no_random_palette() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("x.png");
    mandelzoom()
        .env("RUST_LOG", "warn")
        .arg("-o")
        .arg(&out)
        .args(&["-s", "8x8", "--seed", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--seed only applies to --palette random"));
    assert!(out.exists());
}
