use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::fractals::julia::algorithm::escape_time;
use crate::core::fractals::julia::params::JuliaParams;
use crate::core::fractals::julia::render_params::RenderParams;
use crate::core::palette::palette::Palette;
use crate::core::util::pixel_to_plane::pixel_to_plane;
use crate::core::view::view_state::ViewState;

/// One full render pass: map every pixel to the plane, iterate it, colour it.
///
/// The buffer is recomputed from scratch on every call. There is no dirty
/// region tracking and no caching of prior escape times; at these resolutions
/// the per-pixel work is cheap enough to redo wholesale each frame.
pub fn render_frame(
    size: FrameSize,
    view: ViewState,
    julia: JuliaParams,
    render_params: RenderParams,
    palette: &Palette,
) -> Result<FrameBuffer, FrameBufferError> {
    let mut buffer = FrameBuffer::new(size);

    for y in 0..size.height() {
        for x in 0..size.width() {
            let pixel = Point { x, y };
            let z0 = pixel_to_plane(pixel, size, view);
            let escape = escape_time(
                z0,
                julia.constant,
                render_params.max_iterations(),
                render_params.escape_threshold(),
            );
            let colour = palette.colour_for(escape, render_params.max_iterations());

            buffer.set_pixel(pixel, colour)?;
        }
    }

    Ok(buffer)
}
