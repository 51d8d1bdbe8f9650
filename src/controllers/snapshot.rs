use crate::controllers::viewer::config::ViewerConfig;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::frame_size::FrameSize;
use crate::core::fractals::julia::render_params::RenderParams;
use crate::core::palette::factory::palette_factory;
use crate::core::view::view_state::ViewState;
use crate::storage::write_ppm::write_ppm;
use log::info;
use std::path::Path;
use std::time::Instant;

/// Renders one frame of the configured scene and writes it as a binary PPM.
///
/// Exercises the whole pipeline without a window; the GUI shell drives the
/// same `render_frame` interactively.
pub fn render_snapshot(
    config: &ViewerConfig,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = FrameSize::new(config.width, config.height)?;
    let render_params = RenderParams::new(config.max_iterations, config.escape_threshold)?;
    let palette = palette_factory(config.palette_kind);

    info!(
        "rendering {}x{} julia snapshot, constant ({}, {}), {} iterations",
        config.width,
        config.height,
        config.constant.real,
        config.constant.imag,
        config.max_iterations
    );

    let start = Instant::now();
    let frame = render_frame(
        size,
        ViewState::default(),
        config.julia_params(),
        render_params,
        &palette,
    )?;
    info!("render pass took {:?}", start.elapsed());

    write_ppm(&frame, &filepath)?;
    info!("saved to {}", filepath.as_ref().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_with_defaults_writes_a_ppm() {
        let path = std::env::temp_dir().join("julia_viewer_snapshot_test.ppm");
        let config = ViewerConfig {
            width: 64,
            height: 48,
            ..ViewerConfig::default()
        };

        render_snapshot(&config, &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        assert!(contents.starts_with(b"P6\n64 48\n255\n"));
        // Header plus 3 bytes per pixel.
        assert_eq!(contents.len(), 13 + 64 * 48 * 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn snapshot_refuses_zero_dimensions() {
        let path = std::env::temp_dir().join("julia_viewer_snapshot_invalid.ppm");
        let config = ViewerConfig {
            width: 0,
            ..ViewerConfig::default()
        };

        let result = render_snapshot(&config, &path);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn snapshot_refuses_zero_iteration_budget() {
        let path = std::env::temp_dir().join("julia_viewer_snapshot_zero_iter.ppm");
        let config = ViewerConfig {
            max_iterations: 0,
            ..ViewerConfig::default()
        };

        assert!(render_snapshot(&config, &path).is_err());
    }
}
