use std::f64::consts::PI;

use crate::error::{Error, Result};

const TOLERANCE: f64 = 1e-8;
const MAX_ITERATIONS: usize = 50;

///Solves Kepler's equation M = E - e*sin(E) for the eccentric anomaly using
///Newton's method. Starts from M, or from pi for highly eccentric orbits
///where Newton from M can overshoot.
pub fn solve_kepler(e: f64, mean_anomaly: f64) -> Result<f64> {
    let mut ecc_anomaly = if e > 0.8 { PI } else { mean_anomaly };
    for _ in 0..MAX_ITERATIONS {
        let residual = ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly;
        if residual.abs() <= TOLERANCE {
            return Ok(ecc_anomaly);
        }
        ecc_anomaly -= residual / (1. - e * ecc_anomaly.cos());
    }
    Err(Error::KeplerDivergence {
        eccentricity: e,
        mean_anomaly,
        iterations: MAX_ITERATIONS,
    })
}
