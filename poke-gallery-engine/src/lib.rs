pub mod config;
pub mod controller;
pub mod fan_out;

pub use config::*;
pub use controller::*;
pub use fan_out::*;
