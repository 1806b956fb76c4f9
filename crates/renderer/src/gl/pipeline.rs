use std::mem::size_of;

use glow::HasContext;

use super::check_error;
use crate::error::RenderError;

/// Vertex attribute carrying triangle positions.
pub(crate) const POSITION_ATTRIBUTE: &str = "pos";

const COMPONENTS_PER_VERTEX: i32 = 3;
const VERTEX_COUNT: i32 = 3;

/// One oversized triangle. Its `[-1, 1]` clip-space intersection is the
/// whole viewport.
pub(crate) const TRIANGLE_VERTICES: [f32; 9] = [
    -10.0, -10.0, 0.0, //
    10.0, -10.0, 0.0, //
    0.0, 10.0, 0.0,
];

/// Static vertex buffer and vertex array for [`TRIANGLE_VERTICES`].
pub(crate) struct TriangleGeometry {
    vbo: glow::Buffer,
    vao: glow::VertexArray,
}

impl TriangleGeometry {
    pub(crate) fn new(gl: &glow::Context, program: glow::Program) -> Result<Self, RenderError> {
        unsafe {
            let position = gl
                .get_attrib_location(program, POSITION_ATTRIBUTE)
                .ok_or(RenderError::MissingAttribute(POSITION_ATTRIBUTE))?;

            let vao = gl
                .create_vertex_array()
                .map_err(|reason| RenderError::Allocate {
                    object: "vertex array",
                    reason,
                })?;
            gl.bind_vertex_array(Some(vao));
            check_error(gl, "bind vertex array")?;

            let vbo = gl.create_buffer().map_err(|reason| RenderError::Allocate {
                object: "vertex buffer",
                reason,
            })?;
            check_error(gl, "create vertex buffer")?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            check_error(gl, "bind vertex buffer")?;
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&TRIANGLE_VERTICES),
                glow::STATIC_DRAW,
            );
            check_error(gl, "upload vertex buffer")?;

            gl.enable_vertex_attrib_array(position);
            check_error(gl, "enable position attribute")?;
            gl.vertex_attrib_pointer_f32(
                position,
                COMPONENTS_PER_VERTEX,
                glow::FLOAT,
                false,
                COMPONENTS_PER_VERTEX * size_of::<f32>() as i32,
                0,
            );
            check_error(gl, "describe position attribute")?;

            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::BLEND);
            check_error(gl, "disable depth and blend")?;

            Ok(Self { vbo, vao })
        }
    }

    pub(crate) fn draw(&self, gl: &glow::Context) -> Result<(), RenderError> {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            check_error(gl, "bind vertex buffer")?;
            gl.draw_arrays(glow::TRIANGLES, 0, VERTEX_COUNT);
            check_error(gl, "draw")
        }
    }

    pub(crate) fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.vbo);
            gl.delete_vertex_array(self.vao);
        }
    }
}
