use anyhow::{Context, Result};
use renderer::{RenderError, Renderer, EXIT_SETUP};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{FileConfig, Settings};
use crate::paths;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let file = load_file_config(&cli)?;
    let settings = Settings::resolve(&cli, file).context("invalid settings")?;
    debug!(
        shader_dir = %settings.renderer.shaders.directory.display(),
        vertex = %settings.renderer.shaders.vertex.display(),
        fragment = %settings.renderer.shaders.fragment.display(),
        fullscreen = settings.renderer.window.fullscreen,
        size = ?settings.renderer.window.size,
        vsync = settings.renderer.window.vsync,
        time_scale = settings.time_scale.scale(),
        time_offset = settings.time_scale.offset(),
        "resolved orbitrap settings"
    );

    let renderer = Renderer::new(settings.renderer);
    let report = renderer
        .run(settings.time_scale)
        .context("renderer stopped with an error")?;

    info!(frames = report.frames, elapsed = ?report.elapsed, "render loop finished");
    match report.average_fps() {
        Some(fps) => println!("FPS: {fps}"),
        None => println!("FPS: n/a (no time elapsed)"),
    }
    Ok(())
}

fn load_file_config(cli: &Cli) -> Result<FileConfig> {
    if let Some(path) = cli.config.as_deref() {
        info!(path = %path.display(), "loading configuration");
        return FileConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    match paths::default_config_file() {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            FileConfig::load(&path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        }
        None => Ok(FileConfig::default()),
    }
}

/// Picks the process exit code for a failed run.
///
/// Renderer failures carry their own class; anything else happened while
/// setting up and maps to the setup code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<RenderError>())
        .map(RenderError::exit_code)
        .unwrap_or(EXIT_SETUP)
}
