use std::fs;

use tempfile::tempdir;

use crate::brush::RoiHost;
use crate::config::{ConfigError, Settings, StackSettings};
use crate::model::BitDepth;
use crate::plot::{Plot, PlotColor, PlotSeries};
use crate::stack::ImageSource;

use super::{AppContext, AppError, StrokePoint};

fn small_settings() -> Settings {
    Settings {
        stack: StackSettings {
            width: 80,
            height: 60,
            bit_depth: BitDepth::Gray8,
        },
        ..Settings::default()
    }
}

fn gray_plot(title: &str) -> Plot {
    Plot::new(title, 80, 60)
        .expect("plot")
        .with_series(PlotSeries::line(
            "ramp",
            vec![0.0, 1.0, 2.0],
            vec![0.0, 2.0, 1.0],
            PlotColor::BLACK,
        ))
        .expect("series")
}

fn color_plot(title: &str) -> Plot {
    Plot::new(title, 80, 60)
        .expect("plot")
        .with_series(PlotSeries::dots(
            "hits",
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            PlotColor::RED,
        ))
        .expect("series")
}

#[test]
fn loads_plots_and_builds_stack() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plots.json");
    let plots = vec![gray_plot("a"), color_plot("b")];
    fs::write(&path, serde_json::to_string(&plots).expect("serialize")).expect("write plots");

    let app = AppContext::new(small_settings());
    let loaded = app.stack_service().load_plots(&path).expect("load plots");
    assert_eq!(loaded, plots);

    let stack = app.stack_service().build(&loaded).expect("build");
    let summary = app.stack_service().summary(&stack);
    assert_eq!(summary.size, 2);
    assert_eq!(summary.bit_depth, BitDepth::Rgb24);
    assert_eq!((summary.width, summary.height), (80, 60));
}

#[test]
fn configured_depth_is_the_starting_point() {
    let mut settings = small_settings();
    settings.stack.bit_depth = BitDepth::Rgb24;
    let app = AppContext::new(settings);
    let stack = app
        .stack_service()
        .build(&[gray_plot("only")])
        .expect("build");
    assert_eq!(stack.bit_depth(), BitDepth::Rgb24);
}

#[test]
fn renders_and_exports_slices() {
    let dir = tempdir().expect("tempdir");
    let app = AppContext::new(small_settings());
    let stack = app
        .stack_service()
        .build(&[gray_plot("a"), gray_plot("b")])
        .expect("build");

    let single = dir.path().join("slice.png");
    app.stack_service()
        .render_slice(&stack, 2, &single)
        .expect("render");
    let decoded = image::open(&single).expect("open slice");
    assert_eq!((decoded.width(), decoded.height()), (80, 60));

    let error = app
        .stack_service()
        .render_slice(&stack, 3, dir.path().join("missing.png"))
        .expect_err("out of range");
    assert!(matches!(error, AppError::SliceUnavailable(3)));

    let written = app
        .stack_service()
        .export(&stack, dir.path().join("out"))
        .expect("export");
    assert_eq!(written.len(), 2);
    assert!(written[1].ends_with("slice_0002.png"));
    assert!(written.iter().all(|path| path.exists()));
}

#[test]
fn yaml_plots_are_accepted() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plots.yaml");
    fs::write(&path, serde_yaml::to_string(&vec![gray_plot("y")]).expect("yaml"))
        .expect("write plots");
    let app = AppContext::default();
    assert_eq!(app.stack_service().load_plots(&path).expect("load").len(), 1);
}

#[test]
fn replays_stroke_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stroke.json");
    fs::write(
        &path,
        r#"[{"x": 20, "y": 20}, {"x": 26, "y": 20}, {"x": 23, "y": 20, "subtract": true}]"#,
    )
    .expect("write stroke");

    let app = AppContext::new(small_settings());
    let stroke = app.brush_service().load_stroke(&path).expect("load stroke");
    assert_eq!(
        stroke[2],
        StrokePoint {
            x: 23,
            y: 20,
            subtract: true
        }
    );

    let (target, report) = app
        .brush_service()
        .replay(&stroke, Some(8))
        .expect("replay");
    assert_eq!(report.samples, 3);
    assert!(report.area > 0);
    let roi = target.roi().expect("roi");
    assert!(roi.is_composite());
    assert!(!roi.contains(23.5, 20.5));
    assert_eq!(report.description, Some(roi.describe()));

    let mask_path = dir.path().join("mask.png");
    app.brush_service()
        .save_mask(&target, &mask_path)
        .expect("save mask");
    let mask = image::open(&mask_path).expect("open mask").to_luma8();
    assert_eq!(mask.dimensions(), (80, 60));
    let covered = mask.pixels().filter(|pixel| pixel.0[0] == 255).count();
    assert_eq!(covered, report.area);
}

#[test]
fn empty_stroke_yields_blank_mask() {
    let dir = tempdir().expect("tempdir");
    let app = AppContext::new(small_settings());
    let (target, report) = app.brush_service().replay(&[], None).expect("replay");
    assert_eq!(report.samples, 0);
    assert_eq!(report.area, 0);
    assert!(report.description.is_none());

    let mask_path = dir.path().join("mask.png");
    app.brush_service()
        .save_mask(&target, &mask_path)
        .expect("save mask");
    let mask = image::open(&mask_path).expect("open mask").to_luma8();
    assert!(mask.pixels().all(|pixel| pixel.0[0] == 0));
}

#[test]
fn replay_rejects_out_of_range_diameter() {
    let app = AppContext::new(small_settings());
    let stroke = [StrokePoint {
        x: 10,
        y: 10,
        subtract: false,
    }];
    let error = app
        .brush_service()
        .replay(&stroke, Some(3_000_000_000))
        .expect_err("oversized diameter");
    assert!(matches!(error, AppError::Config(ConfigError::Invalid(_))));
    assert!(app.brush_service().replay(&stroke, Some(0)).is_err());
}
