#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum PaletteKinds {
    #[default]
    Greyscale,
    FireGradient,
}

impl PaletteKinds {
    pub const ALL: &'static [Self] = &[Self::Greyscale, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Greyscale => "Greyscale",
            Self::FireGradient => "Fire gradient",
        }
    }
}

impl std::fmt::Display for PaletteKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(PaletteKinds::ALL.first(), Some(&PaletteKinds::default()));
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PaletteKinds::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
