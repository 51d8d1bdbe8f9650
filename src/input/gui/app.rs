//! Main GUI application loop.
//!
//! One logical frame cycle: apply the input commands that arrived, run one
//! full render pass over the current state, hand the buffer to the presenter.
//! Rendering stays on the event-loop thread; nothing here blocks except the
//! wait for the next event.

use crate::controllers::viewer::command::CommandOutcome;
use crate::controllers::viewer::config::ViewerConfig;
use crate::controllers::viewer::controller::ViewerController;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::frame_size::FrameSize;
use crate::core::fractals::julia::render_params::RenderParams;
use crate::core::palette::factory::palette_factory;
use crate::core::palette::palette::Palette;
use crate::input::gui::keymap::command_for_key;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::error;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

/// Application state tying the controller to the presenter.
struct App {
    presenter: PixelsPresenter,
    controller: ViewerController,
    render_params: RenderParams,
    palette: Palette,
}

impl App {
    fn new(window: &'static Window, config: &ViewerConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let size = window.inner_size();
        let frame_size = FrameSize::new(size.width, size.height)?;
        let render_params = RenderParams::new(config.max_iterations, config.escape_threshold)?;

        Ok(Self {
            presenter: PixelsPresenter::new(window),
            controller: ViewerController::new(config.julia_params(), frame_size),
            render_params,
            palette: palette_factory(config.palette_kind),
        })
    }

    /// Renders the current state to the window.
    fn render(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (width, height) = self.presenter.surface_size();

        // Skip rendering for invalid size (e.g., minimized window)
        if width == 0 || height == 0 {
            return Ok(());
        }

        let size = FrameSize::new(width, height)?;
        let frame = render_frame(
            size,
            self.controller.view(),
            self.controller.julia(),
            self.render_params,
            &self.palette,
        )?;

        self.presenter.present(&frame)?;
        Ok(())
    }

    /// Handles window resize by recreating the presenter surface and telling
    /// the controller about the new pan geometry.
    fn resize(&mut self, width: u32, height: u32) {
        self.presenter.resize(width, height);

        if let Ok(frame_size) = FrameSize::new(width, height) {
            self.controller.set_frame_size(frame_size);
        }
    }
}

/// Runs the interactive viewer.
///
/// This function does not return until the window is closed or the quit
/// command arrives.
pub fn run_gui(config: &ViewerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Julia viewer")
            .with_inner_size(LogicalSize::new(
                f64::from(config.width),
                f64::from(config.height),
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = App::new(window, config)?;
    let mut redraw_pending = true;

    event_loop
        .run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput {
                        event: key_event, ..
                    } => {
                        if key_event.state == ElementState::Pressed {
                            if let PhysicalKey::Code(key_code) = key_event.physical_key {
                                if let Some(command) = command_for_key(key_code) {
                                    match app.controller.apply(command) {
                                        CommandOutcome::Quit => elwt.exit(),
                                        CommandOutcome::Continue => redraw_pending = true,
                                    }
                                }
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        if let Err(e) = app.render() {
                            error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    // Only request redraw if state changed
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");

    Ok(())
}
