use std::ffi::CString;
use std::num::NonZeroU32;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use tracing::{debug, info, warn};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, Window, WindowBuilder};

use crate::error::RenderError;
use crate::types::WindowConfig;

/// Requested context version; the shaders target GLSL 1.40.
const GL_VERSION: Version = Version::new(3, 1);

/// Window plus a current GL context and its function table.
pub(crate) struct GlContext {
    pub gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlContext {
    pub(crate) fn new(
        event_loop: &EventLoop<()>,
        config: &WindowConfig,
    ) -> Result<Self, RenderError> {
        let mut window_builder = WindowBuilder::new()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.size.0, config.size.1))
            .with_position(PhysicalPosition::new(config.position.0, config.position.1));
        if config.fullscreen {
            window_builder = window_builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let template = ConfigTemplateBuilder::new().with_depth_size(0);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let (window, gl_config) = display_builder
            .build(event_loop, template, pick_config)
            .map_err(|err| RenderError::Window(err.to_string()))?;
        let window = window
            .ok_or_else(|| RenderError::Window("display builder returned no window".into()))?;
        debug!(
            samples = gl_config.num_samples(),
            alpha = gl_config.alpha_size(),
            "selected GL framebuffer config"
        );

        let gl_display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(GL_VERSION)))
            .with_profile(GlProfile::Core)
            .build(Some(window.raw_window_handle()));
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|err| RenderError::Context(err.to_string()))?;

        let surface_attributes = window.build_surface_attributes(SurfaceAttributesBuilder::new());
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|err| RenderError::Context(err.to_string()))?;
        let context = not_current
            .make_current(&surface)
            .map_err(|err| RenderError::Context(err.to_string()))?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(err) = surface.set_swap_interval(&context, interval) {
            warn!(vsync = config.vsync, "failed to set swap interval: {err}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| match CString::new(symbol) {
                Ok(symbol) => gl_display.get_proc_address(&symbol),
                Err(_) => std::ptr::null(),
            })
        };

        unsafe {
            info!(
                vendor = %gl.get_parameter_string(glow::VENDOR),
                renderer = %gl.get_parameter_string(glow::RENDERER),
                version = %gl.get_parameter_string(glow::VERSION),
                "created OpenGL context"
            );
        }

        Ok(Self {
            gl,
            surface,
            context,
            window,
        })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn swap_buffers(&self) -> Result<(), RenderError> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|err| RenderError::Present(err.to_string()))
    }

    /// Matches the surface and viewport to the window's new inner size.
    pub(crate) fn resize(&self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.window.resize_surface(&self.surface, &self.context);
        unsafe {
            self.gl
                .viewport(0, 0, size.width as i32, size.height as i32);
        }
        debug!(width = size.width, height = size.height, "resized surface");
    }
}

/// Picks the config with the fewest MSAA samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() < best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("glutin offers at least one config matching the template")
}
