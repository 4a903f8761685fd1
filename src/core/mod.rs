//! Core - Math primitives shared by every system
//!
//! Pure value types, no scene state lives here.

pub mod math;

pub use math::{Mat4, Vec2};
