use crate::analysis::visibility::GroundStation;
use crate::converters::eci2ecef::eci2ecef;
use crate::converters::latlong2enu::enu_basis;
use crate::helpers::{cross, dot, unit, vector_diff};
use crate::types::Eci;

///Separation of two inertial states projected onto the first state's
///height, cross track, along track basis.
pub fn hcl_diff(reference: &Eci, other: &Eci) -> [f64; 3] {
    let diff = vector_diff(reference.position(), other.position());
    let (h, c, l) = hcl_basis(reference);
    project(h, c, l, diff)
}

///Separation of two inertial states projected onto a station's east, north,
///up basis. `time` (Unix seconds) fixes the Earth rotation for both states.
pub fn enu_diff(reference: &Eci, other: &Eci, station: &GroundStation, time: f64) -> [f64; 3] {
    let (e, n, u) = enu_basis(station.lat, station.long);
    let a = eci2ecef(reference, time);
    let b = eci2ecef(other, time);
    project(e, n, u, vector_diff(a.position(), b.position()))
}

fn hcl_basis(state: &Eci) -> ([f64; 3], [f64; 3], [f64; 3]) {
    let h = unit(state.position());
    let c = unit(cross(state.position(), state.velocity()));
    let l = cross(c, h);
    (h, c, l)
}

fn project(x: [f64; 3], y: [f64; 3], z: [f64; 3], diff: [f64; 3]) -> [f64; 3] {
    [dot(x, diff), dot(y, diff), dot(z, diff)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::J2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hcl_diff() {
        let reference = Eci::new([7000., 0., 0.], [0., 7.5, 0.]);
        let other = Eci::new([7001., 2., 3.], [0., 7.5, 0.]);
        //H is radial, C is the orbit normal (+z here), L completes the set.
        let diff = hcl_diff(&reference, &other);
        assert_abs_diff_eq!(diff[0], 1., epsilon = 1e-12);
        assert_abs_diff_eq!(diff[1], 3., epsilon = 1e-12);
        assert_abs_diff_eq!(diff[2], 2., epsilon = 1e-12);
    }

    #[test]
    fn test_hcl_diff_is_zero_for_identical_states() {
        let state = Eci::new([6778., 1234., -2345.], [1.5, -7.1, 0.3]);
        let diff = hcl_diff(&state, &state);
        assert_abs_diff_eq!(diff[0], 0.);
        assert_abs_diff_eq!(diff[1], 0.);
        assert_abs_diff_eq!(diff[2], 0.);
    }

    #[test]
    fn test_enu_diff() {
        //A purely polar separation survives the Earth rotation unchanged and
        //lands on the north component of an equatorial station.
        let reference = Eci::new([7000., 0., 0.], [0., 7.5, 0.]);
        let other = Eci::new([7000., 0., 5.], [0., 7.5, 0.]);
        let station = GroundStation::new("Test", 0., 0., 5.);
        let diff = enu_diff(&reference, &other, &station, J2000 + 999.);
        assert_abs_diff_eq!(diff[0], 0., epsilon = 1e-12);
        assert_abs_diff_eq!(diff[1], 5., epsilon = 1e-12);
        assert_abs_diff_eq!(diff[2], 0., epsilon = 1e-12);
    }
}
