use crate::data::GM;
use crate::types::{Eci, Keplerian};

///Converts classical orbital elements to an inertial state vector.
pub fn kep2cart(kep: &Keplerian) -> Eci {
    let (p_vec, q_vec) = gaussian_vectors(kep.raan, kep.arg_perigee, kep.i);
    let p = semi_latus_rectum(kep.a, kep.e);
    let r = radial_distance(p, kep.e, kep.true_anomaly);
    Eci::new(
        position(p_vec, q_vec, r, kep.true_anomaly),
        velocity(kep.true_anomaly, kep.a, kep.e, r, p_vec, q_vec),
    )
}

///The P and Q Gaussian vectors spanning the orbital plane: P points at
///perigee, Q is 90 degrees ahead in the direction of motion.
pub(crate) fn gaussian_vectors(raan: f64, arg_perigee: f64, i: f64) -> ([f64; 3], [f64; 3]) {
    let p = [
        raan.cos() * arg_perigee.cos() - raan.sin() * i.cos() * arg_perigee.sin(),
        raan.sin() * arg_perigee.cos() + raan.cos() * i.cos() * arg_perigee.sin(),
        i.sin() * arg_perigee.sin(),
    ];
    let q = [
        -raan.cos() * arg_perigee.sin() - raan.sin() * i.cos() * arg_perigee.cos(),
        raan.cos() * i.cos() * arg_perigee.cos() - raan.sin() * arg_perigee.sin(),
        i.sin() * arg_perigee.cos(),
    ];
    (p, q)
}

fn semi_latus_rectum(a: f64, e: f64) -> f64 {
    a * (1. - e * e)
}

fn radial_distance(p: f64, e: f64, true_anomaly: f64) -> f64 {
    p / (1. + e * true_anomaly.cos())
}

fn position(p_vec: [f64; 3], q_vec: [f64; 3], r: f64, true_anomaly: f64) -> [f64; 3] {
    let x = r * true_anomaly.cos();
    let y = r * true_anomaly.sin();
    [
        x * p_vec[0] + y * q_vec[0],
        x * p_vec[1] + y * q_vec[1],
        x * p_vec[2] + y * q_vec[2],
    ]
}

fn velocity(
    true_anomaly: f64,
    a: f64,
    e: f64,
    r: f64,
    p_vec: [f64; 3],
    q_vec: [f64; 3],
) -> [f64; 3] {
    let x = r * true_anomaly.cos();
    let y = r * true_anomaly.sin();

    let cos_e = x / a + e;
    let sin_e = y / (a * (1. - e * e).sqrt());

    let f = (a * GM).sqrt() / r;
    let g = (1. - e * e).sqrt();

    [
        -f * sin_e * p_vec[0] + f * g * cos_e * q_vec[0],
        -f * sin_e * p_vec[1] + f * g * cos_e * q_vec[1],
        -f * sin_e * p_vec[2] + f * g * cos_e * q_vec[2],
    ]
}
