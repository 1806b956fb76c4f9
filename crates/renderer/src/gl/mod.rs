//! OpenGL plumbing behind the frame sink.
//!
//! - `context` creates the winit window, the glutin display/surface/context
//!   and loads GL function pointers through `glow`.
//! - `pipeline` owns the single full-screen triangle (VBO + VAO).
//! - `uniforms` resolves uniform locations once and writes `FrameParams`
//!   into them every frame.
//!
//! Every setup step is followed by a [`check_error`] checkpoint so driver
//! errors surface as `RenderError::Gl` with the step that triggered them.

mod context;
mod pipeline;
mod uniforms;

pub(crate) use context::GlContext;
pub(crate) use pipeline::TriangleGeometry;
pub(crate) use uniforms::UniformLocations;

use glow::HasContext;

use crate::error::RenderError;

/// Fails with the pending GL error, if any. `stage` names the call that was
/// just issued.
pub(crate) fn check_error(gl: &glow::Context, stage: &'static str) -> Result<(), RenderError> {
    let code = unsafe { gl.get_error() };
    if code == glow::NO_ERROR {
        Ok(())
    } else {
        Err(RenderError::Gl { code, stage })
    }
}
