//!Orbit analysis: ground tracks, station visibility and orbit differencing.

pub mod differences;
pub mod ground_tracks;
pub mod visibility;
