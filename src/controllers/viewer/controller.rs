use crate::controllers::viewer::command::{CommandOutcome, ViewerCommand};
use crate::core::data::frame_size::FrameSize;
use crate::core::fractals::julia::params::JuliaParams;
use crate::core::view::view_state::ViewState;
use log::info;

const ZOOM_IN_FACTOR: f32 = 1.05;
const ZOOM_OUT_FACTOR: f32 = 0.95;

// Pan displacement in pixels per keypress, converted to plane units through
// the current frame size and zoom.
const PAN_STEP_PIXELS: f32 = 5.0;

/// Owns the mutable view and parameter state and applies discrete input
/// commands to it. Single flat state, no modes; the renderer reads the state
/// between commands on the same thread.
#[derive(Debug)]
pub struct ViewerController {
    view: ViewState,
    julia: JuliaParams,
    frame_size: FrameSize,
}

impl ViewerController {
    #[must_use]
    pub fn new(julia: JuliaParams, frame_size: FrameSize) -> Self {
        Self {
            view: ViewState::default(),
            julia,
            frame_size,
        }
    }

    pub fn apply(&mut self, command: ViewerCommand) -> CommandOutcome {
        match command {
            ViewerCommand::ZoomIn => self.view.scale *= ZOOM_IN_FACTOR,
            ViewerCommand::ZoomOut => self.view.scale *= ZOOM_OUT_FACTOR,
            ViewerCommand::PanUp => self.view.pan.imag -= self.pan_step_vertical(),
            ViewerCommand::PanDown => self.view.pan.imag += self.pan_step_vertical(),
            ViewerCommand::PanLeft => self.view.pan.real -= self.pan_step_horizontal(),
            ViewerCommand::PanRight => self.view.pan.real += self.pan_step_horizontal(),
            ViewerCommand::ConstantRealUp => {
                self.julia.constant.real += self.julia.displacement_step.real;
            }
            ViewerCommand::ConstantRealDown => {
                self.julia.constant.real -= self.julia.displacement_step.real;
            }
            ViewerCommand::ConstantImagUp => {
                self.julia.constant.imag += self.julia.displacement_step.imag;
            }
            ViewerCommand::ConstantImagDown => {
                self.julia.constant.imag -= self.julia.displacement_step.imag;
            }
            ViewerCommand::Report => {
                info!(
                    "constant: ({}, {})  pan: ({}, {})",
                    self.julia.constant.real,
                    self.julia.constant.imag,
                    self.view.pan.real,
                    self.view.pan.imag
                );
            }
            ViewerCommand::Quit => return CommandOutcome::Quit,
        }

        CommandOutcome::Continue
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn julia(&self) -> JuliaParams {
        self.julia
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    pub fn set_frame_size(&mut self, frame_size: FrameSize) {
        self.frame_size = frame_size;
    }

    fn pan_step_horizontal(&self) -> f32 {
        self.view.scale * PAN_STEP_PIXELS / self.frame_size.width() as f32
    }

    fn pan_step_vertical(&self) -> f32 {
        self.view.scale * PAN_STEP_PIXELS / self.frame_size.height() as f32
    }
}
