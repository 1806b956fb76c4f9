use std::io;
use std::path::PathBuf;

use crate::types::ShaderStage;

/// Exit code for window, context, event loop or shader file failures.
pub const EXIT_SETUP: u8 = 1;
/// Exit code for shader programs that fail to compile, link or expose `pos`.
pub const EXIT_SHADER: u8 = 4;
/// Exit code for errors reported by the GL driver.
pub const EXIT_GL: u8 = 3;

/// Everything that can stop the renderer. None of these are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create event loop: {0}")]
    EventLoop(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create OpenGL context: {0}")]
    Context(String),
    #[error("failed to open shader file {}: {source}", path.display())]
    ShaderIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to compile {stage} shader:\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("failed to link shader program:\n{log}")]
    ShaderLink { log: String },
    #[error("shader program has no active `{0}` attribute")]
    MissingAttribute(&'static str),
    #[error("failed to allocate GL {object}: {reason}")]
    Allocate {
        object: &'static str,
        reason: String,
    },
    #[error("Encountered a GL error: {code} (after {stage})")]
    Gl { code: u32, stage: &'static str },
    #[error("failed to present frame: {0}")]
    Present(String),
}

impl RenderError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            RenderError::EventLoop(_)
            | RenderError::Window(_)
            | RenderError::Context(_)
            | RenderError::ShaderIo { .. } => EXIT_SETUP,
            RenderError::ShaderCompile { .. }
            | RenderError::ShaderLink { .. }
            | RenderError::MissingAttribute(_) => EXIT_SHADER,
            RenderError::Allocate { .. } | RenderError::Gl { .. } | RenderError::Present(_) => {
                EXIT_GL
            }
        }
    }
}
