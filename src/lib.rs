mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;
mod storage;

pub use crate::controllers::snapshot::render_snapshot;
pub use crate::controllers::viewer::{
    CommandOutcome, ConfigError, ViewerCommand, ViewerConfig, ViewerController,
};
pub use crate::core::actions::render_frame::render_frame;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::julia::algorithm::escape_time;
pub use crate::core::fractals::julia::params::JuliaParams;
pub use crate::core::fractals::julia::render_params::RenderParams;
pub use crate::core::palette::factory::palette_factory;
pub use crate::core::palette::fire_gradient::fire_gradient_palette;
pub use crate::core::palette::greyscale::greyscale_palette;
pub use crate::core::palette::kinds::PaletteKinds;
pub use crate::core::palette::palette::{Palette, PaletteError};
pub use crate::core::util::pixel_to_plane::pixel_to_plane;
pub use crate::core::view::view_state::ViewState;
pub use crate::storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
