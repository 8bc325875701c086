use crate::data::MEAN_EARTH_RADIUS;
use crate::helpers::{norm, normalised_atan2};
use crate::types::SubPoint;

///Converts an Earth fixed position to latitude, longitude and altitude over
///a spherical Earth.
pub fn ecef2latlong(position: [f64; 3]) -> SubPoint {
    let (lat, long) = lat_long(position);
    SubPoint {
        lat,
        long,
        alt: height(position),
    }
}

fn lat_long(r: [f64; 3]) -> (f64, f64) {
    let mut long = normalised_atan2(r[1], r[0]).to_degrees();
    let lat = (r[2] / (r[0] * r[0] + r[1] * r[1]).sqrt()).atan().to_degrees();
    if long > 180. {
        long -= 360.;
    }
    (lat, long)
}

fn height(r: [f64; 3]) -> f64 {
    norm(r) - MEAN_EARTH_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_prime_meridian() {
        let sub = ecef2latlong([7000., 0., 0.]);
        assert_abs_diff_eq!(sub.lat, 0.);
        assert_abs_diff_eq!(sub.long, 0.);
        assert_relative_eq!(sub.alt, 633.);
    }

    #[test]
    fn test_longitude_wrap() {
        assert_relative_eq!(ecef2latlong([0., 7000., 0.]).long, 90., epsilon = 1e-9);
        assert_relative_eq!(ecef2latlong([-7000., 7000., 0.]).long, 135., epsilon = 1e-9);
        //The western hemisphere comes back negative.
        assert_relative_eq!(ecef2latlong([0., -7000., 0.]).long, -90., epsilon = 1e-9);
        assert_relative_eq!(ecef2latlong([-7000., -7000., 0.]).long, -135., epsilon = 1e-9);
    }

    #[test]
    fn test_pole() {
        let sub = ecef2latlong([0., 0., 7000.]);
        assert_relative_eq!(sub.lat, 90., epsilon = 1e-9);
        assert_relative_eq!(sub.alt, 633.);
    }
}
