pub mod command;
pub mod config;
pub mod controller;

pub use command::{CommandOutcome, ViewerCommand};
pub use config::{ConfigError, ViewerConfig};
pub use controller::ViewerController;
