//! OpenGL renderer for the orbit-trap fractal demo.
//!
//! The crate glues a winit window, a glutin OpenGL 3.1 core context and a
//! single full-screen triangle to the frame loop from the `animation` crate:
//!
//! ```text
//!   orbitrap CLI
//!          │ RendererConfig
//!          ▼
//!   Renderer::run ──▶ ShaderPaths::load ──▶ WindowState::new (context, program, VBO)
//!          │
//!          └─▶ animation::run_frames ──▶ submit (uniforms + draw) ─▶ present ─▶ poll_quit
//! ```
//!
//! `WindowState` owns every GL resource and implements
//! [`animation::FrameSink`]; `Renderer` is the thin entry point that wires the
//! clock and the sink together and hands back a [`FrameReport`].

mod compile;
mod error;
mod gl;
mod types;
mod window;

pub use animation::FrameReport;
pub use error::{RenderError, EXIT_GL, EXIT_SETUP, EXIT_SHADER};
pub use types::{
    RendererConfig, ShaderPaths, ShaderSources, ShaderStage, WindowConfig,
    DEFAULT_FRAGMENT_SHADER, DEFAULT_SHADER_DIR, DEFAULT_VERTEX_SHADER,
};

use animation::{run_frames, SystemTimeSource, TimeScale};
use tracing::info;

use crate::window::WindowState;

/// Entry point that owns the configuration for one run.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Loads the shaders, opens the window and renders until the user quits.
    ///
    /// Shader files are read before any window is created so a missing file
    /// fails without touching the display.
    pub fn run(&self, scale: TimeScale) -> Result<FrameReport, RenderError> {
        let sources = self.config.shaders.load()?;
        info!(
            vertex = %self.config.shaders.vertex_path().display(),
            fragment = %self.config.shaders.fragment_path().display(),
            "loaded shader sources"
        );

        let mut window = WindowState::new(&self.config.window, &sources)?;
        let mut clock = SystemTimeSource::new();
        run_frames(&mut clock, scale, &mut window)
    }
}
