//!Conversions between element sets and reference bases.

pub mod cart2kep;
pub mod ecef2latlong;
pub mod eci2ecef;
pub mod kep2cart;
pub mod latlong2enu;
