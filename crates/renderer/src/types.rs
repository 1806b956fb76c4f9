use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Directory searched for shaders when the caller does not pick one.
pub const DEFAULT_SHADER_DIR: &str = "shaders";
pub const DEFAULT_VERTEX_SHADER: &str = "vert.glsl";
pub const DEFAULT_FRAGMENT_SHADER: &str = "frag.glsl";

/// Programmable pipeline stage a shader source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Locations of the vertex/fragment shader pair on disk.
///
/// `vertex` and `fragment` are resolved against `directory` unless they are
/// absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub directory: PathBuf,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderPaths {
    pub fn vertex_path(&self) -> PathBuf {
        self.directory.join(&self.vertex)
    }

    pub fn fragment_path(&self) -> PathBuf {
        self.directory.join(&self.fragment)
    }

    /// Reads both shader files fully into memory.
    pub fn load(&self) -> Result<ShaderSources, RenderError> {
        let vertex = read_source(&self.vertex_path())?;
        let fragment = read_source(&self.fragment_path())?;
        Ok(ShaderSources { vertex, fragment })
    }
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_SHADER_DIR),
            vertex: PathBuf::from(DEFAULT_VERTEX_SHADER),
            fragment: PathBuf::from(DEFAULT_FRAGMENT_SHADER),
        }
    }
}

/// GLSL text of both stages, ready for compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn for_stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn read_source(path: &Path) -> Result<String, RenderError> {
    let source = fs::read_to_string(path).map_err(|source| RenderError::ShaderIo {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "loaded shader source");
    Ok(source)
}

/// Window and swapchain settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Inner size in physical pixels; used as-is when not fullscreen.
    pub size: (u32, u32),
    /// Initial top-left position in physical pixels.
    pub position: (i32, i32),
    /// Borderless fullscreen on the current monitor.
    pub fullscreen: bool,
    /// Wait for vertical blank on every swap.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fractals".to_string(),
            size: (600, 600),
            position: (100, 100),
            fullscreen: true,
            vsync: true,
        }
    }
}

/// Immutable configuration passed to the renderer at start-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RendererConfig {
    pub shaders: ShaderPaths,
    pub window: WindowConfig,
}
