use glow::HasContext;
use tracing::{debug, info};

use crate::error::RenderError;
use crate::gl::check_error;
use crate::types::{ShaderSources, ShaderStage};

/// Compiles both stages, links them and makes the program current.
///
/// Compile and link logs are always logged; a failed compile or link is an
/// error rather than a warning so the caller never draws with a broken program.
pub(crate) fn build_program(
    gl: &glow::Context,
    sources: &ShaderSources,
) -> Result<glow::Program, RenderError> {
    unsafe {
        let program = gl.create_program().map_err(|reason| RenderError::Allocate {
            object: "program",
            reason,
        })?;
        check_error(gl, "create program")?;

        let vertex = match compile_shader(gl, ShaderStage::Vertex, sources) {
            Ok(shader) => shader,
            Err(err) => {
                gl.delete_program(program);
                return Err(err);
            }
        };
        let fragment = match compile_shader(gl, ShaderStage::Fragment, sources) {
            Ok(shader) => shader,
            Err(err) => {
                gl.delete_shader(vertex);
                gl.delete_program(program);
                return Err(err);
            }
        };

        gl.attach_shader(program, fragment);
        gl.attach_shader(program, vertex);
        check_error(gl, "attach shaders")?;
        gl.link_program(program);
        check_error(gl, "link program")?;

        let linked = gl.get_program_link_status(program);
        let link_log = gl.get_program_info_log(program);
        if let Some(log) = meaningful_log(&link_log) {
            info!(log, "program link log");
        }

        for shader in [vertex, fragment] {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        if !linked {
            gl.delete_program(program);
            return Err(RenderError::ShaderLink { log: link_log });
        }

        gl.use_program(Some(program));
        check_error(gl, "use program")?;

        info!("finished compiling and linking program");
        Ok(program)
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    sources: &ShaderSources,
) -> Result<glow::Shader, RenderError> {
    let shader = gl
        .create_shader(stage.gl_kind())
        .map_err(|reason| RenderError::Allocate {
            object: "shader",
            reason,
        })?;
    check_error(gl, "create shader")?;
    gl.shader_source(shader, sources.for_stage(stage));
    check_error(gl, "upload shader source")?;
    gl.compile_shader(shader);
    check_error(gl, "compile shader")?;

    let log = gl.get_shader_info_log(shader);
    match meaningful_log(&log) {
        Some(text) => info!(%stage, log = text, "shader compile log"),
        None => debug!(%stage, "shader compiled without log output"),
    }

    if gl.get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        gl.delete_shader(shader);
        Err(RenderError::ShaderCompile { stage, log })
    }
}

/// Drivers pad empty logs with whitespace or a lone NUL.
fn meaningful_log(log: &str) -> Option<&str> {
    let trimmed = log.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
