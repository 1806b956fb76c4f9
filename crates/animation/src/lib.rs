//! Host-side animation for the orbit-trap fractal demo.
//!
//! Every frame the fragment shader receives a small set of uniforms that are
//! pure functions of a scaled wall-clock time `t`:
//!
//! ```text
//!   TimeSource ──▶ TimeScale::apply ──▶ t ──▶ FrameParams::at(t) ──▶ FrameSink
//!                                                                    │
//!                                          FrameReport ◀── run_frames ┘
//! ```
//!
//! Nothing is carried from one frame to the next except the clock itself, so
//! the same `t` always yields bit-identical parameters.

mod clock;
mod driver;
mod params;

pub use clock::{SystemTimeSource, TimeScale, TimeSource, DEFAULT_TIME_SCALE};
pub use driver::{run_frames, FrameReport, FrameSink};
pub use params::{FrameParams, Rgb};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AnimationError {
    #[error("time scale must be a positive finite number (got {0})")]
    InvalidTimeScale(f64),
    #[error("time offset must be finite (got {0})")]
    InvalidTimeOffset(f64),
}
