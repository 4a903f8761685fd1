//! Systems - Entity integration, collision detection and collision response

pub mod collision;
pub mod entity;
pub mod response;
