use crate::adapters::pixel_format::copy_rgba_to_rgb;
use crate::core::data::frame_buffer::FrameBuffer;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::File::create(filepath)?;
    let width = frame.size().width();
    let height = frame.size().height();

    // P6 carries binary RGB, so the alpha channel is stripped first.
    let mut rgb = vec![0; frame.size().pixel_count() * 3];
    copy_rgba_to_rgb(frame.as_bytes(), &mut rgb);

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(&rgb)?;

    Ok(())
}
