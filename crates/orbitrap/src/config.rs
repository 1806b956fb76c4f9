use std::fs;
use std::path::{Path, PathBuf};

use animation::{TimeScale, DEFAULT_TIME_SCALE};
use renderer::{RendererConfig, ShaderPaths, WindowConfig};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// Contents of `config.toml`. Every key is optional; CLI flags win.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub shader_dir: Option<PathBuf>,
    pub vertex_shader: Option<PathBuf>,
    pub fragment_shader: Option<PathBuf>,
    pub window: WindowSection,
    pub animation: AnimationSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub fullscreen: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub vsync: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationSection {
    pub time_scale: Option<f64>,
    pub time_offset: Option<f64>,
}

impl FileConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Everything the run needs once CLI flags and the config file are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub renderer: RendererConfig,
    pub time_scale: TimeScale,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = ShaderPaths::default();
        let shaders = ShaderPaths {
            directory: cli
                .shader_dir
                .clone()
                .or(file.shader_dir)
                .unwrap_or(defaults.directory),
            vertex: cli
                .vertex
                .clone()
                .or(file.vertex_shader)
                .unwrap_or(defaults.vertex),
            fragment: cli
                .fragment
                .clone()
                .or(file.fragment_shader)
                .unwrap_or(defaults.fragment),
        };

        let mut window = WindowConfig::default();
        if let Some(fullscreen) = file.window.fullscreen {
            window.fullscreen = fullscreen;
        }
        if cli.windowed {
            window.fullscreen = false;
        }
        if let Some(vsync) = file.window.vsync {
            window.vsync = vsync;
        }
        if cli.no_vsync {
            window.vsync = false;
        }
        let width = cli
            .size
            .map(|size| size.width)
            .or(file.window.width)
            .unwrap_or(window.size.0);
        let height = cli
            .size
            .map(|size| size.height)
            .or(file.window.height)
            .unwrap_or(window.size.1);
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero (got {width}x{height})"
            )));
        }
        window.size = (width, height);

        let scale = cli
            .time_scale
            .or(file.animation.time_scale)
            .unwrap_or(DEFAULT_TIME_SCALE);
        let offset = cli
            .time_offset
            .or(file.animation.time_offset)
            .unwrap_or(0.0);
        let time_scale =
            TimeScale::new(scale, offset).map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Ok(Self {
            renderer: RendererConfig { shaders, window },
            time_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
shader_dir = "/usr/share/orbitrap/shaders"
fragment_shader = "julia.frag"

[window]
fullscreen = false
width = 1280
height = 720
vsync = false

[animation]
time_scale = 2.0
time_offset = 5.0
"#;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["orbitrap"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = FileConfig::from_toml_str("").unwrap();
        let settings = Settings::resolve(&cli(&["--shader-dir", "shaders"]), file).unwrap();

        assert_eq!(settings.renderer.shaders, ShaderPaths::default());
        assert_eq!(settings.renderer.window, WindowConfig::default());
        assert_eq!(settings.time_scale, TimeScale::default());
    }

    #[test]
    fn file_values_apply() {
        let file = FileConfig::from_toml_str(CONFIG).unwrap();
        let args = cli(&["--shader-dir", "/usr/share/orbitrap/shaders"]);
        let settings = Settings::resolve(&args, file).unwrap();

        assert_eq!(
            settings.renderer.shaders.fragment_path(),
            PathBuf::from("/usr/share/orbitrap/shaders/julia.frag")
        );
        assert_eq!(settings.renderer.shaders.vertex, PathBuf::from("vert.glsl"));
        assert!(!settings.renderer.window.fullscreen);
        assert!(!settings.renderer.window.vsync);
        assert_eq!(settings.renderer.window.size, (1280, 720));
        assert_eq!(settings.time_scale.scale(), 2.0);
        assert_eq!(settings.time_scale.apply(1.0), 12.0);
    }

    #[test]
    fn cli_overrides_file() {
        let file = FileConfig::from_toml_str(CONFIG).unwrap();
        let settings = Settings::resolve(
            &cli(&[
                "--shader-dir",
                "local",
                "--fragment",
                "mandel.frag",
                "--size",
                "640x480",
                "--time-scale",
                "1",
            ]),
            file,
        )
        .unwrap();

        assert_eq!(
            settings.renderer.shaders.fragment_path(),
            PathBuf::from("local/mandel.frag")
        );
        assert_eq!(settings.renderer.window.size, (640, 480));
        assert_eq!(settings.time_scale.scale(), 1.0);
        assert_eq!(settings.time_scale.offset(), 5.0);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = FileConfig::from_toml_str("shader_directory = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_non_positive_time_scale() {
        let file = FileConfig::from_toml_str("[animation]\ntime_scale = 0.0\n").unwrap();
        let err = Settings::resolve(&cli(&["--shader-dir", "shaders"]), file).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_window_dimension() {
        let file = FileConfig::from_toml_str("[window]\nwidth = 0\n").unwrap();
        let err = Settings::resolve(&cli(&["--shader-dir", "shaders"]), file).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        match FileConfig::load(&path) {
            Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected read error, got {other:?}"),
        }

        fs::write(&path, CONFIG).unwrap();
        let loaded = FileConfig::load(&path).unwrap();
        assert_eq!(loaded.window.width, Some(1280));
    }
}
