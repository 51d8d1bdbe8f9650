pub mod algorithm;
pub mod params;
pub mod render_params;
