//!Orbit propagators. `keplerian` steps the orbit analytically in element
//!space; `rk4` integrates the gravity ODE numerically and can carry the J2
//!oblateness correction.

pub mod keplerian;
pub mod rk4;
