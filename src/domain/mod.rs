//! Domain - Shapes, surface materials, scene configuration and its errors

pub mod config;
pub mod error;
pub mod material;
pub mod shape;

pub use config::{EntityTemplate, SceneConfig};
pub use error::ConfigError;
pub use material::Material;
pub use shape::{Shape, ShapeTag};
