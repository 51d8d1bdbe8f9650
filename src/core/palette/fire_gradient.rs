use crate::core::data::colour::Colour;
use crate::core::palette::palette::{PALETTE_SIZE, Palette};

/// Black → red → orange → yellow → white ramp sampled into a fixed table.
#[must_use]
pub fn fire_gradient_palette() -> Palette {
    let colours = (0..PALETTE_SIZE).map(fire_entry).collect();

    Palette::from_colours(colours).expect("fire gradient table covers the full index range")
}

fn fire_entry(index: usize) -> Colour {
    let t = index as f32 / (PALETTE_SIZE - 1) as f32;

    let (r, g, b) = if t < 0.25 {
        let local_t = t / 0.25;
        ((local_t * 255.0) as u8, 0, 0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        (255, (local_t * 165.0) as u8, 0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        (255, (165.0 + local_t * 90.0) as u8, 0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        (255, 255, (local_t * 255.0) as u8)
    };

    Colour { r, g, b }
}
