use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::model::{BitDepth, Pixels};
use crate::plot::{PLOT_MAGIC, Plot, PlotColor, PlotError, PlotSeries};

use super::{ImageSource, PlotSnapshot, PlotVirtualStack, StackError};

fn plot(color: PlotColor) -> Plot {
    Plot::new("series", 64, 48)
        .expect("plot")
        .with_series(PlotSeries::line(
            "data",
            vec![0.0, 1.0, 2.0],
            vec![2.0, 0.0, 1.0],
            color,
        ))
        .expect("series")
}

#[test]
fn size_counts_adds_minus_deletes() {
    let mut stack = PlotVirtualStack::new(64, 48);
    assert!(stack.is_empty());
    for expected in 1..=4 {
        assert_eq!(stack.add_plot(&plot(PlotColor::BLACK)).expect("add"), expected);
    }
    stack.delete_slice(2).expect("delete");
    stack.delete_slice(1).expect("delete");
    assert_eq!(stack.size(), 2);
    stack.add_plot(&plot(PlotColor::BLACK)).expect("add");
    assert_eq!(stack.size(), 3);
}

#[test]
fn bit_depth_is_monotonic_until_reset() {
    let mut stack = PlotVirtualStack::new(64, 48);
    stack.add_plot(&plot(PlotColor::BLACK)).expect("gray");
    assert_eq!(stack.bit_depth(), BitDepth::Gray8);

    stack.add_plot(&plot(PlotColor::RED)).expect("color");
    assert_eq!(stack.bit_depth(), BitDepth::Rgb24);

    stack.add_plot(&plot(PlotColor::gray(90))).expect("gray");
    stack.delete_slice(2).expect("delete color slice");
    assert_eq!(stack.bit_depth(), BitDepth::Rgb24);

    stack.set_bit_depth(BitDepth::Gray8);
    assert_eq!(stack.bit_depth(), BitDepth::Gray8);
}

#[test]
fn delete_on_empty_stack_is_a_no_op() {
    let mut stack = PlotVirtualStack::new(64, 48);
    for index in [0, 1, 7] {
        stack.delete_slice(index).expect("empty stack ignores deletes");
    }
    assert_eq!(stack.size(), 0);
}

#[test]
fn delete_out_of_range_fails() {
    let mut stack = PlotVirtualStack::new(64, 48);
    stack.add_plot(&plot(PlotColor::BLACK)).expect("add");
    stack.add_plot(&plot(PlotColor::BLACK)).expect("add");

    let error = stack.delete_slice(0).expect_err("index 0");
    assert!(matches!(
        error,
        StackError::IndexOutOfRange { index: 0, size: 2 }
    ));
    let error = stack.delete_slice(3).expect_err("past the end");
    assert!(error.to_string().contains("out of range"));
    assert_eq!(stack.size(), 2);
}

#[test]
fn decoded_slices_follow_stack_depth() {
    let mut stack = PlotVirtualStack::new(64, 48);
    stack.add_plot(&plot(PlotColor::BLACK)).expect("gray plot A");
    assert_eq!(stack.bit_depth(), BitDepth::Gray8);
    assert_eq!(stack.size(), 1);

    stack.add_plot(&plot(PlotColor::BLUE)).expect("color plot B");
    assert_eq!(stack.bit_depth(), BitDepth::Rgb24);
    assert_eq!(stack.size(), 2);

    let first = stack.processor(1).expect("slice 1");
    assert_eq!(first.slice, 1);
    assert_eq!(first.bit_depth(), BitDepth::Rgb24);
    assert_eq!(first.dimensions(), (64, 48));
    let again = stack.processor(1).expect("slice 1 again");
    assert_eq!(again, first);

    stack.set_bit_depth(BitDepth::Gray8);
    let second = stack.processor(2).expect("slice 2");
    assert_eq!(second.slice, 2);
    assert!(matches!(second.pixels, Pixels::Gray8(_)));
}

#[test]
fn pixels_match_processor_output() {
    let mut stack = PlotVirtualStack::new(64, 48);
    stack.add_plot(&plot(PlotColor::BLACK)).expect("add");
    let pixels = stack.pixels(1).expect("pixels");
    assert_eq!(Some(pixels), stack.processor(1).map(|slice| slice.pixels));
}

#[test]
fn missing_or_corrupt_slices_return_none() {
    let failures = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&failures);
    let mut stack = PlotVirtualStack::new(64, 48).with_failure_hook(Arc::new(
        move |slice: usize, error: &PlotError| {
            recorded
                .lock()
                .expect("lock")
                .push((slice, error.to_string()));
        },
    ));
    stack.add_snapshot(PlotSnapshot::from_bytes(b"garbage bytes".to_vec(), false));
    stack.add_snapshot(PlotSnapshot::from_bytes(Vec::new(), false));

    assert!(stack.processor(0).is_none());
    assert!(stack.processor(3).is_none());
    assert!(stack.processor(2).is_none());
    assert!(stack.processor(1).is_none());

    let failures = failures.lock().expect("lock");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, 1);
    assert!(failures[0].1.contains("header"));
}

#[test]
fn oversized_snapshot_is_reported_not_rendered() {
    let failures = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&failures);
    let mut stack = PlotVirtualStack::new(64, 48).with_failure_hook(Arc::new(
        move |_: usize, error: &PlotError| {
            assert!(matches!(error, PlotError::FrameTooLarge { .. }));
            counter.fetch_add(1, Ordering::SeqCst);
        },
    ));
    let huge = Plot {
        width: u32::MAX,
        height: u32::MAX,
        ..plot(PlotColor::BLACK)
    };
    let mut bytes = PLOT_MAGIC.to_vec();
    bytes.extend(bincode::serialize(&huge).expect("serialize"));
    stack.add_snapshot(PlotSnapshot::from_bytes(bytes, false));

    assert!(stack.processor(1).is_none());
    assert_eq!(failures.load(Ordering::SeqCst), 1);
}

#[test]
fn writes_and_labels_are_ignored() {
    let mut stack = PlotVirtualStack::new(64, 48);
    stack.add_plot(&plot(PlotColor::BLACK)).expect("add");
    let before = stack.processor(1).expect("slice");
    let replacement = Pixels::blank(64, 48, BitDepth::Gray8, 0).expect("blank");
    stack.set_pixels(replacement, 1);
    assert_eq!(stack.processor(1).expect("slice"), before);
    assert_eq!(stack.slice_label(1), None);
}

#[test]
fn materialize_decodes_every_slice() {
    let failures = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&failures);
    let mut stack = PlotVirtualStack::new(64, 48).with_failure_hook(Arc::new(move |_: usize, _: &PlotError| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    stack.add_plot(&plot(PlotColor::BLACK)).expect("add");
    stack.add_snapshot(PlotSnapshot::from_bytes(b"PLT1".to_vec(), false));
    stack.add_plot(&plot(PlotColor::RED)).expect("add");

    let slices = stack.materialize();
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].as_ref().map(|slice| slice.slice), Some(1));
    assert!(slices[1].is_none());
    assert_eq!(slices[2].as_ref().map(|slice| slice.bit_depth()), Some(BitDepth::Rgb24));
    assert_eq!(failures.load(Ordering::SeqCst), 1);
}
