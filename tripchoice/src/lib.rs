pub mod app;
pub mod config;
pub mod model;

pub use model::constants::*;
