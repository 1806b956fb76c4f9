use std::path::PathBuf;

use clap::Parser;

use crate::config::WindowSize;
use crate::paths::{ENV_CONFIG_FILE, ENV_SHADER_DIR};

#[derive(Parser, Debug)]
#[command(
    name = "orbitrap",
    author,
    version,
    about = "Animated Julia-set orbit trap shader demo",
    arg_required_else_help = false
)]
pub struct Cli {
    /// TOML configuration file (defaults to `config.toml` in the user config directory).
    #[arg(long, value_name = "FILE", env = ENV_CONFIG_FILE)]
    pub config: Option<PathBuf>,

    /// Directory holding the vertex and fragment shaders.
    #[arg(long, value_name = "DIR", env = ENV_SHADER_DIR)]
    pub shader_dir: Option<PathBuf>,

    /// Vertex shader file name, relative to the shader directory unless absolute.
    #[arg(long, value_name = "FILE")]
    pub vertex: Option<PathBuf>,

    /// Fragment shader file name, relative to the shader directory unless absolute.
    #[arg(long, value_name = "FILE")]
    pub fragment: Option<PathBuf>,

    /// Open a regular window instead of going fullscreen.
    #[arg(long)]
    pub windowed: bool,

    /// Window size used in windowed mode (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_window_size)]
    pub size: Option<WindowSize>,

    /// Swap buffers without waiting for vertical blank.
    #[arg(long)]
    pub no_vsync: bool,

    /// Multiplier applied to elapsed seconds before animating (default 3.0).
    #[arg(long, value_name = "SCALE", allow_negative_numbers = true)]
    pub time_scale: Option<f64>,

    /// Seconds added to the clock before scaling, to start later in the animation.
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub time_offset: Option<f64>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_window_size(value: &str) -> Result<WindowSize, String> {
    let trimmed = value.trim();
    let (w, h) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid size '{trimmed}'; expected WIDTHxHEIGHT"))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid width in '{trimmed}'"))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid height in '{trimmed}'"))?;
    if width == 0 || height == 0 {
        return Err("window dimensions must be greater than zero".into());
    }
    Ok(WindowSize { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_window_sizes() {
        assert_eq!(
            parse_window_size("1280x720").unwrap(),
            WindowSize {
                width: 1280,
                height: 720
            }
        );
        assert_eq!(
            parse_window_size(" 800X600 ").unwrap(),
            WindowSize {
                width: 800,
                height: 600
            }
        );
        assert!(parse_window_size("1280").is_err());
        assert!(parse_window_size("0x720").is_err());
        assert!(parse_window_size("widexhigh").is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "orbitrap",
            "--shader-dir",
            "/srv/shaders",
            "--fragment",
            "julia.frag",
            "--windowed",
            "--size",
            "1024x768",
            "--no-vsync",
            "--time-scale",
            "1.5",
            "--time-offset",
            "-20",
        ])
        .unwrap();

        assert_eq!(cli.shader_dir, Some(PathBuf::from("/srv/shaders")));
        assert_eq!(cli.fragment, Some(PathBuf::from("julia.frag")));
        assert_eq!(cli.vertex, None);
        assert!(cli.windowed);
        assert!(cli.no_vsync);
        assert_eq!(
            cli.size,
            Some(WindowSize {
                width: 1024,
                height: 768
            })
        );
        assert_eq!(cli.time_scale, Some(1.5));
        assert_eq!(cli.time_offset, Some(-20.0));
    }
}
