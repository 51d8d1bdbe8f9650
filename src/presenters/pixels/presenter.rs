use crate::core::data::frame_buffer::FrameBuffer;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Owns the `pixels` surface and the RGBA upload path.
///
/// The core hands over a finished frame; this type copies it into the
/// surface's framebuffer and presents it. Resizes recreate both the surface
/// and the backing buffer so the two never disagree about dimensions.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        Self {
            pixels,
            width: size.width,
            height: size.height,
        }
    }

    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
            self.pixels
                .resize_surface(width, height)
                .expect("Failed to resize surface");
            self.pixels
                .resize_buffer(width, height)
                .expect("Failed to resize buffer");
        }
    }

    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), pixels::Error> {
        let src = frame.as_bytes();
        let dest = self.pixels.frame_mut();

        assert_eq!(
            dest.len(),
            src.len(),
            "pixels frame length {} does not match rendered frame length {} for {}x{}",
            dest.len(),
            src.len(),
            self.width,
            self.height
        );

        dest.copy_from_slice(src);
        self.pixels.render()
    }
}
