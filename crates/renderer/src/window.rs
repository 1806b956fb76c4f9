use std::time::Duration;

use animation::{FrameParams, FrameSink};
use glow::HasContext;
use tracing::{debug, info, trace};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::compile::build_program;
use crate::error::RenderError;
use crate::gl::{check_error, GlContext, TriangleGeometry, UniformLocations};
use crate::types::{ShaderSources, WindowConfig};

/// Owns the event loop, the GL context and every GL object drawn each frame.
///
/// Events are pumped with a zero timeout once per frame, so the frame loop
/// stays in control and only blocks inside the buffer swap.
pub(crate) struct WindowState {
    event_loop: EventLoop<()>,
    context: GlContext,
    program: glow::Program,
    geometry: TriangleGeometry,
    uniforms: UniformLocations,
    quit_requested: bool,
}

impl WindowState {
    pub(crate) fn new(
        config: &WindowConfig,
        sources: &ShaderSources,
    ) -> Result<Self, RenderError> {
        let event_loop =
            EventLoop::new().map_err(|err| RenderError::EventLoop(err.to_string()))?;
        let context = GlContext::new(&event_loop, config)?;
        let gl = &context.gl;

        let program = build_program(gl, sources)?;
        let uniforms = UniformLocations::lookup(gl, program)?;
        let geometry = TriangleGeometry::new(gl, program)?;
        context.resize(context.window().inner_size());
        check_error(gl, "initial viewport")?;

        info!("finished init");
        Ok(Self {
            event_loop,
            context,
            program,
            geometry,
            uniforms,
            quit_requested: false,
        })
    }
}

impl FrameSink for WindowState {
    type Error = RenderError;

    fn submit(&mut self, params: &FrameParams) -> Result<(), RenderError> {
        let gl = &self.context.gl;
        self.uniforms.upload(gl, params);
        self.geometry.draw(gl)
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.context.swap_buffers()
    }

    fn poll_quit(&mut self) -> Result<bool, RenderError> {
        let Self {
            event_loop,
            context,
            quit_requested,
            ..
        } = self;
        let window_id = context.window().id();

        let status = event_loop.pump_events(Some(Duration::ZERO), |event, _target| {
            let Event::WindowEvent { window_id: id, event } = event else {
                return;
            };
            if id != window_id {
                return;
            }
            match event {
                WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                    debug!("window close requested");
                    *quit_requested = true;
                }
                WindowEvent::KeyboardInput { event, .. } if is_escape_press(&event) => {
                    debug!("escape pressed");
                    *quit_requested = true;
                }
                WindowEvent::Resized(size) => context.resize(size),
                other => trace!(event = ?other, "ignored window event"),
            }
        });

        if let PumpStatus::Exit(code) = status {
            debug!(code, "event loop exited");
            *quit_requested = true;
        }
        Ok(*quit_requested)
    }
}

impl Drop for WindowState {
    fn drop(&mut self) {
        let gl = &self.context.gl;
        self.geometry.destroy(gl);
        unsafe {
            gl.delete_program(self.program);
        }
    }
}

fn is_escape_press(event: &KeyEvent) -> bool {
    event.state == ElementState::Pressed
        && matches!(event.logical_key, Key::Named(NamedKey::Escape))
}
