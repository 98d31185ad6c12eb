use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{BrushMode, BrushSample, CanvasButton, PointerState, SubtractModifier};

/// Canvas-side pointer state, polled from the sampler thread.
pub trait PointerSource: Send + Sync {
    fn pointer(&self) -> PointerState;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub interval: Duration,
    pub trigger: CanvasButton,
    pub subtract_with: SubtractModifier,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1),
            trigger: CanvasButton::Primary,
            subtract_with: SubtractModifier::Alt,
        }
    }
}

/// Polls `source` until the trigger button is released, `stop` is raised or the
/// receiver goes away. Only position changes are forwarded; the trigger is
/// checked on every poll.
pub fn sample_pointer(
    source: &dyn PointerSource,
    config: SamplerConfig,
    sender: &Sender<BrushSample>,
    stop: &AtomicBool,
) {
    let mut previous = None;
    while !stop.load(Ordering::Acquire) {
        let state = source.pointer();
        if !state.is_down(config.trigger) {
            sender.send(BrushSample::Released).ok();
            return;
        }
        if previous == Some(state.position) {
            thread::sleep(config.interval);
            continue;
        }
        previous = Some(state.position);
        let sample = BrushSample::Stroke {
            position: state.position,
            mode: BrushMode::from_modifiers(state.modifiers, config.subtract_with),
        };
        if sender.send(sample).is_err() {
            return;
        }
    }
}

pub fn spawn_sampler(
    source: Arc<dyn PointerSource>,
    config: SamplerConfig,
    sender: Sender<BrushSample>,
    stop: Arc<AtomicBool>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("roi-brush".to_string())
        .spawn(move || sample_pointer(source.as_ref(), config, &sender, &stop))
}
