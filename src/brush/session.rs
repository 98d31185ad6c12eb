use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};

use super::{
    BrushError, BrushSample, BrushTool, PointerSource, Result, RoiHost, SamplerConfig,
    spawn_sampler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub started: bool,
    pub samples: usize,
}

/// Consumes brush samples and commits every ROI update to `host`.
///
/// Returns without touching anything when there is no host or it has no
/// canvas. A non-area ROI present at the start is removed first.
pub fn run_session<H: RoiHost + ?Sized>(
    host: Option<&mut H>,
    tool: &mut BrushTool,
    samples: &Receiver<BrushSample>,
) -> Result<SessionSummary> {
    let Some(host) = host.filter(|host| host.has_canvas()) else {
        log::debug!("brush session skipped: no displayed target image");
        return Ok(SessionSummary::default());
    };
    if host.roi().is_some_and(|roi| !roi.is_area()) {
        host.delete_roi();
    }

    let mut summary = SessionSummary {
        started: true,
        samples: 0,
    };
    log::debug!("brush session started with diameter {}", tool.diameter());
    while let Ok(BrushSample::Stroke { position, mode }) = samples.recv() {
        let updated = tool.apply(host.roi().cloned(), position, mode)?;
        host.set_roi(updated);
        summary.samples += 1;
    }
    log::debug!("brush session finished after {} samples", summary.samples);
    Ok(summary)
}

#[derive(Debug, Clone)]
pub struct Brush {
    tool: BrushTool,
    sampler: SamplerConfig,
}

impl Brush {
    pub fn new(tool: BrushTool, sampler: SamplerConfig) -> Self {
        Self { tool, sampler }
    }

    pub fn tool(&self) -> &BrushTool {
        &self.tool
    }

    /// Runs one press-drag-release interaction: samples `source` on a
    /// dedicated thread and applies the samples to `host` on this one.
    pub fn paint<H: RoiHost + ?Sized>(
        &mut self,
        source: Arc<dyn PointerSource>,
        host: Option<&mut H>,
    ) -> Result<SessionSummary> {
        let Some(host) = host.filter(|host| host.has_canvas()) else {
            log::debug!("brush not started: no displayed target image");
            return Ok(SessionSummary::default());
        };

        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let sampler = spawn_sampler(source, self.sampler, sender, Arc::clone(&stop))?;

        let outcome = run_session(Some(host), &mut self.tool, &receiver);
        stop.store(true, Ordering::Release);
        drop(receiver);
        sampler.join().map_err(|_| BrushError::SamplerPanicked)?;
        outcome
    }
}
