//!A simplistic simulation of satellite orbits based on the two body
//!problem: element set conversions, reference basis transforms, analytic
//!and numeric propagation, and ground segment analysis.

pub use analysis::differences::{enu_diff, hcl_diff};
pub use analysis::ground_tracks::ground_tracks;
pub use analysis::visibility::{GroundStation, is_visible, look_angle, station_visibility};
pub use converters::cart2kep::cart2kep;
pub use converters::ecef2latlong::ecef2latlong;
pub use converters::eci2ecef::{eci2ecef, gast};
pub use converters::kep2cart::kep2cart;
pub use converters::latlong2enu::enu_basis;
pub use error::{Error, Result};
pub use io::{read_states, write_states};
pub use kepler::solve_kepler;
pub use propagation::keplerian::propagate_orbit;
pub use propagation::rk4::{rk4_j2, rk4_monopole};
pub use types::{Ecef, Eci, Keplerian, LookAngle, State, SubPoint};

pub mod analysis;
pub mod converters;
pub mod data;
mod error;
mod helpers;
pub mod io;
mod kepler;
pub mod propagation;
mod types;
