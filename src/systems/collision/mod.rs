//! Collision - Pairwise detection over the scene list
//!
//! Exhaustive O(n^2) narrow phase; there is no broad phase. Box geometry is
//! axis-aligned and ignores `rotation`.

mod contact;
pub mod dispatch;
pub mod narrow;

pub use contact::Contact;
pub use dispatch::{check_all, check_collisions, test_pair, CollisionStats};
