pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod entity;
pub mod error;
pub mod logging;
pub mod registry;
pub mod render;
pub mod search;
pub mod stats;

pub use app::AppState;
pub use error::{RailboardError, Result};
pub use registry::TrainRegistry;
