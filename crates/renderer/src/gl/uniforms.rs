use animation::FrameParams;
use glow::HasContext;
use tracing::{debug, warn};

use super::check_error;
use crate::error::RenderError;

pub(crate) const TIME_UNIFORM: &str = "time";
pub(crate) const COLOR_UNIFORMS: [&str; 3] = ["col0", "col1", "col2"];
pub(crate) const C_UNIFORM: &str = "c";
pub(crate) const TRAP_UNIFORM: &str = "trap";

/// Uniform locations resolved once after linking.
///
/// Names the driver optimised out (or the shader never declared) resolve to
/// `None`; GL treats writes to them as no-ops.
pub(crate) struct UniformLocations {
    time: Option<glow::UniformLocation>,
    colors: [Option<glow::UniformLocation>; 3],
    c: Option<glow::UniformLocation>,
    trap: Option<glow::UniformLocation>,
}

impl UniformLocations {
    pub(crate) fn lookup(
        gl: &glow::Context,
        program: glow::Program,
    ) -> Result<Self, RenderError> {
        let locations = Self {
            time: locate(gl, program, TIME_UNIFORM),
            colors: COLOR_UNIFORMS.map(|name| locate(gl, program, name)),
            c: locate(gl, program, C_UNIFORM),
            trap: locate(gl, program, TRAP_UNIFORM),
        };
        check_error(gl, "query uniform locations")?;
        Ok(locations)
    }

    /// Writes one frame of uniforms into the current program, in the order
    /// time, colors, `c`, trap.
    pub(crate) fn upload(&self, gl: &glow::Context, params: &FrameParams) {
        unsafe {
            gl.uniform_1_f32(self.time.as_ref(), params.time);
            for (location, color) in self.colors.iter().zip(params.colors.iter()) {
                gl.uniform_3_f32(location.as_ref(), color.r, color.g, color.b);
            }
            gl.uniform_2_f32(self.c.as_ref(), params.c[0], params.c[1]);
            gl.uniform_2_f32(self.trap.as_ref(), params.trap[0], params.trap[1]);
        }
    }
}

fn locate(
    gl: &glow::Context,
    program: glow::Program,
    name: &str,
) -> Option<glow::UniformLocation> {
    let location = unsafe { gl.get_uniform_location(program, name) };
    if location.is_some() {
        debug!(uniform = name, "resolved uniform location");
    } else {
        warn!(
            uniform = name,
            "shader program has no active uniform; updates will be ignored"
        );
    }
    location
}
