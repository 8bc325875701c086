use crate::data::GM;
use crate::helpers::{cross, dot, norm, normalise_angle, normalised_atan2, unit};
use crate::types::{Eci, Keplerian};

///Converts an inertial state vector to classical orbital elements.
///
///Undefined for exactly equatorial orbits, where the ascending node (and
///with it the argument of perigee) has no meaning.
pub fn cart2kep(state: &Eci) -> Keplerian {
    let r = state.position();
    let v = state.velocity();
    let h = cross(r, v);
    let w = unit(h);
    let i = inclination(w);
    let raan = raan(w);
    let a = semi_major_axis(r, v);
    let p = semi_latus_rectum(h);
    let e = eccentricity(a, p);
    let n = mean_motion(a);
    let ecc_anomaly = eccentric_anomaly(r, v, a, n);
    let true_anomaly = true_anomaly(ecc_anomaly, e);
    let u = argument_of_latitude(r, i, raan);
    Keplerian {
        a,
        e,
        i: normalise_angle(i),
        raan: normalise_angle(raan),
        arg_perigee: normalise_angle(u - true_anomaly),
        true_anomaly: normalise_angle(true_anomaly),
    }
}

fn inclination(w: [f64; 3]) -> f64 {
    normalised_atan2((w[0] * w[0] + w[1] * w[1]).sqrt(), w[2])
}

fn raan(w: [f64; 3]) -> f64 {
    normalised_atan2(w[0], -w[1])
}

///Vis-viva: a = 1 / (2/r - v^2/GM).
fn semi_major_axis(r: [f64; 3], v: [f64; 3]) -> f64 {
    1. / (2. / norm(r) - dot(v, v) / GM)
}

fn semi_latus_rectum(h: [f64; 3]) -> f64 {
    dot(h, h) / GM
}

///The radicand goes marginally negative for near circular orbits, so clamp
///it rather than produce NaN.
fn eccentricity(a: f64, p: f64) -> f64 {
    (1. - p / a).max(0.).sqrt()
}

pub(crate) fn mean_motion(a: f64) -> f64 {
    (GM / a.powi(3)).sqrt()
}

fn eccentric_anomaly(r: [f64; 3], v: [f64; 3], a: f64, n: f64) -> f64 {
    normalised_atan2(dot(r, v) / (a * a * n), 1. - norm(r) / a)
}

fn true_anomaly(ecc_anomaly: f64, e: f64) -> f64 {
    normalised_atan2(
        (1. - e * e).sqrt() * ecc_anomaly.sin(),
        ecc_anomaly.cos() - e,
    )
}

fn argument_of_latitude(r: [f64; 3], i: f64, raan: f64) -> f64 {
    normalised_atan2(r[2] / i.sin(), r[0] * raan.cos() + r[1] * raan.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_inclination_and_node() {
        //h = R x V = (0, -7000, 56000), so tan(i) = 7000/56000 exactly
        let state = Eci::new([7000., 0., 0.], [0., 8., 1.]);
        let kep = cart2kep(&state);
        assert_relative_eq!(kep.i, 0.125_f64.atan(), epsilon = 1e-12);
        assert_abs_diff_eq!(kep.raan, 0., epsilon = 1e-12);
    }

    #[test]
    fn test_circular_orbit() {
        let speed = (GM / 7000.).sqrt();
        let incl = std::f64::consts::FRAC_PI_4;
        let state = Eci::new([7000., 0., 0.], [0., speed * incl.cos(), speed * incl.sin()]);
        let kep = cart2kep(&state);
        assert_relative_eq!(kep.a, 7000., epsilon = 1e-6);
        assert!(kep.e < 1e-7);
        assert!(!kep.e.is_nan());
        assert_relative_eq!(kep.i, incl, epsilon = 1e-9);
    }

    #[test]
    fn test_vis_viva() {
        let state = Eci::new([8000., 0., 0.], [0., 6., 3.]);
        let kep = cart2kep(&state);
        let expected = 1. / (2. / 8000. - 45. / GM);
        assert_relative_eq!(kep.a, expected, epsilon = 1e-12);
    }
}
