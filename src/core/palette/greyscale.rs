use crate::core::data::colour::Colour;
use crate::core::palette::palette::{PALETTE_SIZE, Palette};

/// Default ramp: entry `i` is `(i, i, i)`.
#[must_use]
pub fn greyscale_palette() -> Palette {
    let colours = (0..PALETTE_SIZE)
        .map(|i| {
            let level = i as u8;
            Colour {
                r: level,
                g: level,
                b: level,
            }
        })
        .collect();

    Palette::from_colours(colours).expect("greyscale table covers the full index range")
}
