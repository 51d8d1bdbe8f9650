pub mod factory;
pub mod fire_gradient;
pub mod greyscale;
pub mod kinds;
pub mod palette;
