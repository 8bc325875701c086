use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

///Position and velocity in the Earth centred inertial basis, km and km/s.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Eci {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}
impl Eci {
    pub fn new(position: [f64; 3], velocity: [f64; 3]) -> Eci {
        Eci {
            x: position[0],
            y: position[1],
            z: position[2],
            vx: velocity[0],
            vy: velocity[1],
            vz: velocity[2],
        }
    }
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    pub fn velocity(&self) -> [f64; 3] {
        [self.vx, self.vy, self.vz]
    }
}

///Position and velocity in the Earth centred Earth fixed basis, km and km/s.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}
impl Ecef {
    pub fn new(position: [f64; 3], velocity: [f64; 3]) -> Ecef {
        Ecef {
            x: position[0],
            y: position[1],
            z: position[2],
            vx: velocity[0],
            vy: velocity[1],
            vz: velocity[2],
        }
    }
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    pub fn velocity(&self) -> [f64; 3] {
        [self.vx, self.vy, self.vz]
    }
}

///Classical orbital elements. `a` is in km, every angle is in radians
///normalised to [0, 2pi).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Keplerian {
    ///Semi-major axis (km)
    pub a: f64,
    ///Eccentricity
    pub e: f64,
    ///Inclination (radians)
    pub i: f64,
    ///Right ascension of the ascending node (radians)
    pub raan: f64,
    ///Argument of perigee (radians)
    pub arg_perigee: f64,
    ///True anomaly (radians)
    pub true_anomaly: f64,
}

///The point on the Earth directly below a satellite. Latitude and longitude
///in degrees, longitude in (-180, 180], altitude in km above the mean Earth
///radius.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SubPoint {
    pub lat: f64,
    pub long: f64,
    pub alt: f64,
}

///Elevation and azimuth of a satellite seen from a ground station, both in
///degrees with azimuth measured from north. Range in km.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LookAngle {
    pub elevation: f64,
    pub azimuth: f64,
    pub range: f64,
}

///One sample of a propagated orbit. `time` is Unix seconds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct State {
    pub eci: Eci,
    pub time: f64,
}
impl State {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis((self.time * 1000.).round() as i64)
    }
}
