//! Board geometry and piece placement.
//!
//! - `topology`: static terrain classification, computed once per board
//! - `occupancy`: which piece (if any) stands on each cell

pub mod occupancy;
pub mod topology;

pub use occupancy::Occupancy;
pub use topology::{classify, width, Topology};
