use crate::core::palette::fire_gradient::fire_gradient_palette;
use crate::core::palette::greyscale::greyscale_palette;
use crate::core::palette::kinds::PaletteKinds;
use crate::core::palette::palette::Palette;

#[must_use]
pub fn palette_factory(kind: PaletteKinds) -> Palette {
    match kind {
        PaletteKinds::Greyscale => greyscale_palette(),
        PaletteKinds::FireGradient => fire_gradient_palette(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn factory_builds_every_kind() {
        for &kind in PaletteKinds::ALL {
            let palette = palette_factory(kind);
            // Both built-in ramps end bright.
            assert_eq!(
                palette.entry(255),
                Colour {
                    r: 255,
                    g: 255,
                    b: 255
                }
            );
        }
    }

    #[test]
    fn default_kind_is_greyscale() {
        let palette = palette_factory(PaletteKinds::default());

        assert_eq!(palette.entry(128), Colour { r: 128, g: 128, b: 128 });
    }
}
