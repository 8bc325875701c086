use serde::{Deserialize, Serialize};

use crate::converters::ecef2latlong::ecef2latlong;
use crate::converters::latlong2enu::{enu_basis, up};
use crate::data::EARTH_RADIUS;
use crate::helpers::{dot, norm, normalised_atan2, unit, vector_diff};
use crate::types::LookAngle;

///A tracking station on the Earth's surface. Latitude, longitude and the
///masking angle (the minimum elevation it can see down to) in degrees.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroundStation {
    pub name: String,
    pub lat: f64,
    pub long: f64,
    pub masking_angle: f64,
}
impl GroundStation {
    pub fn new(name: &str, lat: f64, long: f64, masking_angle: f64) -> GroundStation {
        GroundStation {
            name: name.to_string(),
            lat,
            long,
            masking_angle,
        }
    }
    ///The station's ECEF position on the spherical Earth surface.
    pub fn ecef_position(&self) -> [f64; 3] {
        let u = up(self.lat.to_radians(), self.long.to_radians());
        [u[0] * EARTH_RADIUS, u[1] * EARTH_RADIUS, u[2] * EARTH_RADIUS]
    }
}

///Elevation, azimuth and range of a satellite ECEF position as seen from a
///station.
pub fn look_angle(satellite: [f64; 3], station: &GroundStation) -> LookAngle {
    let station_pos = station.ecef_position();
    let separation = vector_diff(station_pos, satellite);
    let range = norm(separation);
    let direction = unit(separation);
    let (e, n, u) = station_basis(station_pos);
    LookAngle {
        elevation: dot(direction, u).asin().to_degrees(),
        azimuth: normalised_atan2(dot(direction, e), dot(direction, n)).to_degrees(),
        range,
    }
}

fn station_basis(position: [f64; 3]) -> ([f64; 3], [f64; 3], [f64; 3]) {
    let sub = ecef2latlong(position);
    enu_basis(sub.lat, sub.long)
}

///True when the satellite sits above the station's masking angle.
pub fn is_visible(satellite: [f64; 3], station: &GroundStation) -> bool {
    look_angle(satellite, station).elevation - station.masking_angle > 0.
}

///True when any of the stations sees the satellite.
pub fn station_visibility(satellite: [f64; 3], stations: &[GroundStation]) -> bool {
    stations.iter().any(|station| is_visible(satellite, station))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_overhead() {
        let station = GroundStation::new("Test", 0., 0., 10.);
        let angle = look_angle([7000., 0., 0.], &station);
        assert_relative_eq!(angle.elevation, 90., epsilon = 1e-9);
        assert_relative_eq!(angle.range, 7000. - EARTH_RADIUS, epsilon = 1e-9);
        assert!(is_visible([7000., 0., 0.], &station));
    }

    #[test]
    fn test_satellite_on_the_horizon() {
        let station = GroundStation::new("Test", 0., 0., 5.);
        let angle = look_angle([EARTH_RADIUS, 700., 0.], &station);
        assert_abs_diff_eq!(angle.elevation, 0., epsilon = 1e-9);
        assert_relative_eq!(angle.azimuth, 90., epsilon = 1e-9);
        assert_relative_eq!(angle.range, 700., epsilon = 1e-9);
        assert!(!is_visible([EARTH_RADIUS, 700., 0.], &station));
    }

    #[test]
    fn test_antipode_is_hidden() {
        let station = GroundStation::new("Test", 0., 0., 5.);
        let angle = look_angle([-7000., 0., 0.], &station);
        assert_relative_eq!(angle.elevation, -90., epsilon = 1e-9);
        assert!(!is_visible([-7000., 0., 0.], &station));
    }

    #[test]
    fn test_station_visibility() {
        let stations = [
            GroundStation::new("Far", 0., 180., 5.),
            GroundStation::new("Near", 0., 0., 5.),
        ];
        assert!(station_visibility([7000., 0., 0.], &stations));
        assert!(!station_visibility([0., 0., 7000.], &stations[..1]));
    }
}
