use std::time::Duration;

use tracing::{debug, trace};

use crate::clock::{TimeScale, TimeSource};
use crate::params::FrameParams;

/// Consumer of per-frame uniform values.
///
/// Implemented by the GL window in the `renderer` crate. Any error aborts the
/// frame loop immediately.
pub trait FrameSink {
    type Error;

    /// Uploads `params` and issues the draw call for this frame.
    fn submit(&mut self, params: &FrameParams) -> Result<(), Self::Error>;

    /// Displays the finished frame. May block on vsync.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Drains pending input without blocking and reports whether the user
    /// asked to quit.
    fn poll_quit(&mut self) -> Result<bool, Self::Error>;
}

/// Frame count and wall-clock duration of a completed loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frames: u64,
    pub elapsed: Duration,
}

impl FrameReport {
    /// Mean frames per second over the run, `None` if no time has elapsed.
    pub fn average_fps(&self) -> Option<f64> {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            Some(self.frames as f64 / seconds)
        } else {
            None
        }
    }
}

/// Renders frames until the sink reports a quit request.
///
/// The clock is reset on entry so the report covers exactly this loop.
pub fn run_frames<T, S>(
    source: &mut T,
    scale: TimeScale,
    sink: &mut S,
) -> Result<FrameReport, S::Error>
where
    T: TimeSource + ?Sized,
    S: FrameSink + ?Sized,
{
    source.reset();
    let mut frames: u64 = 0;
    debug!(
        scale = scale.scale(),
        offset = scale.offset(),
        "entering frame loop"
    );

    loop {
        let t = scale.apply(source.elapsed_seconds());
        let params = FrameParams::at(t);
        trace!(frame = frames, t, "submitting frame");

        sink.submit(&params)?;
        sink.present()?;
        frames = frames.saturating_add(1);

        if sink.poll_quit()? {
            break;
        }
    }

    let elapsed = Duration::from_secs_f64(source.elapsed_seconds().max(0.0));
    debug!(frames, elapsed = ?elapsed, "frame loop finished");
    Ok(FrameReport { frames, elapsed })
}
