//!Physical constants for the two body problem. Gravity values are EGM96.

///Gravitational parameter of the Earth in km^3/s^2.
pub const GM: f64 = 398600.4415;
///Equatorial radius of the Earth in km.
pub const EARTH_RADIUS: f64 = 6378.137;
///Average radius of the Earth in km, used for the spherical sub point altitude.
pub const MEAN_EARTH_RADIUS: f64 = 6367.;
///Rotation rate of the Earth in rad/s.
pub const EARTH_ROTATION_RATE: f64 = 7.2921158553e-5;
///Scale length of the EGM96 spherical harmonic expansion in km.
pub const EGM96_SCALE_LENGTH: f64 = 6378.1363;
///Normalised EGM96 C20 zonal coefficient.
pub const C20: f64 = -4.84165371736e-4;
///The J2000 epoch (2000-01-01T12:00:00Z) as Unix seconds. Sidereal time is
///measured from here.
pub const J2000: f64 = 946_728_000.;
