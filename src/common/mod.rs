pub mod config;
pub mod error;

pub use config::SlideConfig;
pub use error::{GeometryError, GeometryResult};
