use chrono::{DateTime, Utc};
use log::debug;

use crate::converters::cart2kep::{cart2kep, mean_motion};
use crate::converters::kep2cart::gaussian_vectors;
use crate::data::GM;
use crate::error::Result;
use crate::helpers::{norm, normalised_atan2};
use crate::kepler::solve_kepler;
use crate::types::{Eci, Keplerian, State};

///Propagates an orbit analytically under two body gravity. Returns the
///initial state at `epoch` followed by one sample per step.
pub fn propagate_orbit(
    state: &Eci,
    dt: f64,
    steps: usize,
    epoch: DateTime<Utc>,
) -> Result<Vec<State>> {
    debug!("keplerian propagation: {steps} steps of {dt}s from {epoch}");
    let base_time = epoch.timestamp() as f64;
    let mut results = vec![State {
        eci: *state,
        time: base_time,
    }];
    let mut current = *state;
    for step in 0..steps {
        current = orbit_step(&current, dt)?;
        results.push(State {
            eci: current,
            time: base_time + dt * (step + 1) as f64,
        });
    }
    Ok(results)
}

fn orbit_step(state: &Eci, dt: f64) -> Result<Eci> {
    let kep = cart2kep(state);
    let r = norm(state.position());
    let ecc_anomaly = eccentric_anomaly_after(r, &kep, dt)?;
    Ok(Eci::new(
        position_at(ecc_anomaly, &kep),
        velocity_at(ecc_anomaly, &kep),
    ))
}

///Eccentric anomaly dt seconds after the epoch of `kep`: recover E0 from the
///radial distance and true anomaly, advance the mean anomaly by n*dt, then
///solve Kepler's equation back to eccentric.
fn eccentric_anomaly_after(r: f64, kep: &Keplerian, dt: f64) -> Result<f64> {
    let n = mean_motion(kep.a);
    let cos_e0 = r * kep.true_anomaly.cos() / kep.a + kep.e;
    let sin_e0 = r * kep.true_anomaly.sin() / (kep.a * (1. - kep.e * kep.e).sqrt());
    let e0 = normalised_atan2(sin_e0, cos_e0);
    let m0 = e0 - kep.e * e0.sin();
    solve_kepler(kep.e, m0 + n * dt)
}

fn position_at(ecc_anomaly: f64, kep: &Keplerian) -> [f64; 3] {
    let x = kep.a * (ecc_anomaly.cos() - kep.e);
    let y = kep.a * (1. - kep.e * kep.e).sqrt() * ecc_anomaly.sin();
    let (p, q) = gaussian_vectors(kep.raan, kep.arg_perigee, kep.i);
    [
        x * p[0] + y * q[0],
        x * p[1] + y * q[1],
        x * p[2] + y * q[2],
    ]
}

fn velocity_at(ecc_anomaly: f64, kep: &Keplerian) -> [f64; 3] {
    let r = kep.a * (1. - kep.e * ecc_anomaly.cos());
    let xdot = -(kep.a * GM).sqrt() * ecc_anomaly.sin() / r;
    let ydot = (kep.a * GM).sqrt() * (1. - kep.e * kep.e).sqrt() * ecc_anomaly.cos() / r;
    let (p, q) = gaussian_vectors(kep.raan, kep.arg_perigee, kep.i);
    [
        xdot * p[0] + ydot * q[0],
        xdot * p[1] + ydot * q[1],
        xdot * p[2] + ydot * q[2],
    ]
}
