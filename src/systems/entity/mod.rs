//! Entity - A circle or box that moves as a unit
//!
//! The entity owns its kinematic state and material. Shape-specific
//! behaviour is selected by matching on `Shape`, not by trait objects.

mod body;
mod lifecycle;

pub use body::{Entity, EntityDesc};
pub use lifecycle::Bounds;
