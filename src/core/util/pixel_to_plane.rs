use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::view::view_state::ViewState;

/// Maps a pixel to its complex-plane coordinate.
///
/// Coordinates are centered on the image middle and normalized by the image
/// dimensions, so the visible extent stays roughly constant across window
/// sizes; zoom and pan act as a uniform scale and translation in plane space.
#[must_use]
pub fn pixel_to_plane(pixel: Point, size: FrameSize, view: ViewState) -> Complex {
    let width = size.width() as f32;
    let height = size.height() as f32;

    let real = view.scale * (pixel.x as f32 - width / 2.0) / width + view.pan.real;
    let imag = view.scale * (pixel.y as f32 - height / 2.0) / height + view.pan.imag;

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_maps_exactly_to_pan() {
        let size = FrameSize::new(640, 480).unwrap();
        let view = ViewState {
            pan: Complex {
                real: 0.25,
                imag: -1.5,
            },
            scale: 1.0,
        };

        let result = pixel_to_plane(Point { x: 320, y: 240 }, size, view);

        assert_eq!(result.real, 0.25);
        assert_eq!(result.imag, -1.5);
    }

    #[test]
    fn test_center_pixel_maps_to_pan_for_any_even_size() {
        for (width, height) in [(2, 2), (100, 60), (1920, 1080)] {
            let size = FrameSize::new(width, height).unwrap();
            let view = ViewState {
                pan: Complex {
                    real: -0.5,
                    imag: 0.75,
                },
                scale: 1.0,
            };

            let result = pixel_to_plane(
                Point {
                    x: width / 2,
                    y: height / 2,
                },
                size,
                view,
            );

            assert_eq!(result, view.pan);
        }
    }

    #[test]
    fn test_odd_size_center_is_within_half_a_pixel_of_pan() {
        let size = FrameSize::new(101, 75).unwrap();
        let view = ViewState::default();

        let result = pixel_to_plane(Point { x: 50, y: 37 }, size, view);

        assert!(result.real.abs() <= 0.5 / 101.0);
        assert!(result.imag.abs() <= 0.5 / 75.0);
    }

    #[test]
    fn test_left_edge_is_half_a_scale_unit_from_center() {
        let size = FrameSize::new(640, 480).unwrap();
        let view = ViewState::default();

        let result = pixel_to_plane(Point { x: 0, y: 240 }, size, view);

        assert_eq!(result.real, -0.5);
        assert_eq!(result.imag, 0.0);
    }

    #[test]
    fn test_scale_widens_the_visible_extent() {
        let size = FrameSize::new(640, 480).unwrap();
        let wide = ViewState {
            pan: Complex::ZERO,
            scale: 4.0,
        };

        let result = pixel_to_plane(Point { x: 0, y: 240 }, size, wide);

        assert_eq!(result.real, -2.0);
    }

    #[test]
    fn test_pan_translates_every_pixel() {
        let size = FrameSize::new(640, 480).unwrap();
        let centered = pixel_to_plane(Point { x: 12, y: 34 }, size, ViewState::default());
        let panned = pixel_to_plane(
            Point { x: 12, y: 34 },
            size,
            ViewState {
                pan: Complex {
                    real: 2.0,
                    imag: -3.0,
                },
                scale: 1.0,
            },
        );

        assert_eq!(panned.real, centered.real + 2.0);
        assert_eq!(panned.imag, centered.imag + -3.0);
    }
}
