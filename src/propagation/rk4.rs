use chrono::{DateTime, Utc};
use log::debug;

use crate::data::{C20, EGM96_SCALE_LENGTH, GM};
use crate::helpers::norm;
use crate::types::{Eci, State};

type KFn = fn([f64; 3], f64) -> [f64; 3];

///Propagates an orbit numerically with a monopole (point mass) gravity
///model. Same output shape as `propagate_orbit`.
pub fn rk4_monopole(state: &Eci, dt: f64, steps: usize, epoch: DateTime<Utc>) -> Vec<State> {
    debug!("rk4 monopole propagation: {steps} steps of {dt}s from {epoch}");
    propagate(state, dt, steps, epoch, monopole_k)
}

///Propagates an orbit numerically with the J2 oblateness correction applied
///to the gravity model.
pub fn rk4_j2(state: &Eci, dt: f64, steps: usize, epoch: DateTime<Utc>) -> Vec<State> {
    debug!("rk4 j2 propagation: {steps} steps of {dt}s from {epoch}");
    propagate(state, dt, steps, epoch, j2_k)
}

fn propagate(state: &Eci, dt: f64, steps: usize, epoch: DateTime<Utc>, k: KFn) -> Vec<State> {
    let base_time = epoch.timestamp() as f64;
    let mut results = vec![State {
        eci: *state,
        time: base_time,
    }];
    let mut current = *state;
    for step in 0..steps {
        current = rk4_step(&current, dt, k);
        results.push(State {
            eci: current,
            time: base_time + dt * (step + 1) as f64,
        });
    }
    results
}

///One Runge-Kutta-Nystrom step of the second order gravity ODE. The k
///function returns h^2/2 times the acceleration at a trial position.
fn rk4_step(state: &Eci, dt: f64, k: KFn) -> Eci {
    let r = state.position();
    let v = state.velocity();
    let k1 = k(r, dt);
    let k2 = k(stage_midpoint(k1, v, r, dt), dt);
    let k3 = k(stage_midpoint(k2, v, r, dt), dt);
    let k4 = k(stage_endpoint(k3, v, r, dt), dt);
    let p = position_weights(k1, k2, k3);
    let q = velocity_weights(k1, k2, k3, k4);
    Eci::new(
        [
            r[0] + dt * v[0] + p[0],
            r[1] + dt * v[1] + p[1],
            r[2] + dt * v[2] + p[2],
        ],
        [v[0] + q[0] / dt, v[1] + q[1] / dt, v[2] + q[2] / dt],
    )
}

fn stage_midpoint(k: [f64; 3], v: [f64; 3], r: [f64; 3], dt: f64) -> [f64; 3] {
    [
        r[0] + dt / 2. * v[0] + k[0] / 4.,
        r[1] + dt / 2. * v[1] + k[1] / 4.,
        r[2] + dt / 2. * v[2] + k[2] / 4.,
    ]
}

fn stage_endpoint(k: [f64; 3], v: [f64; 3], r: [f64; 3], dt: f64) -> [f64; 3] {
    [
        r[0] + dt * v[0] + k[0],
        r[1] + dt * v[1] + k[1],
        r[2] + dt * v[2] + k[2],
    ]
}

fn position_weights(k1: [f64; 3], k2: [f64; 3], k3: [f64; 3]) -> [f64; 3] {
    [
        (k1[0] + k2[0] + k3[0]) / 3.,
        (k1[1] + k2[1] + k3[1]) / 3.,
        (k1[2] + k2[2] + k3[2]) / 3.,
    ]
}

fn velocity_weights(k1: [f64; 3], k2: [f64; 3], k3: [f64; 3], k4: [f64; 3]) -> [f64; 3] {
    [
        (k1[0] + 2. * k2[0] + 2. * k3[0] + k4[0]) / 3.,
        (k1[1] + 2. * k2[1] + 2. * k3[1] + k4[1]) / 3.,
        (k1[2] + 2. * k2[2] + 2. * k3[2] + k4[2]) / 3.,
    ]
}

fn monopole_acceleration(r0: f64, r: [f64; 3]) -> [f64; 3] {
    [
        -(GM * r[0]) / r0.powi(3),
        -(GM * r[1]) / r0.powi(3),
        -(GM * r[2]) / r0.powi(3),
    ]
}

fn monopole_k(r: [f64; 3], dt: f64) -> [f64; 3] {
    let r0 = norm(r);
    let a = monopole_acceleration(r0, r);
    [
        0.5 * dt * dt * a[0],
        0.5 * dt * dt * a[1],
        0.5 * dt * dt * a[2],
    ]
}

fn kronecker_delta(m: u32) -> u32 {
    if m == 0 { 1 } else { 0 }
}

fn factorial(n: u32) -> f64 {
    (1..=n).fold(1., |acc, v| acc * v as f64)
}

///Converts a normalised spherical harmonic coefficient to its unnormalised
///form for degree n and order m.
fn denormalise_coefficient(c: f64, n: u32, m: u32) -> f64 {
    let num = factorial(n + m);
    let den = factorial(n - m) * (2 * n + 1) as f64 * (2 - kronecker_delta(m)) as f64;
    c / (num / den).sqrt()
}

fn j2_acceleration(r: [f64; 3], r0: f64, c: f64, a: f64) -> [f64; 3] {
    let zonal = 1.5 * GM * (a * a / r0.powi(5)) * c;
    let flattening = 5. * r[2] * r[2] / (r0 * r0);
    [
        -GM * r[0] / r0.powi(3) + zonal * r[0] * (1. - flattening),
        -GM * r[1] / r0.powi(3) + zonal * r[1] * (1. - flattening),
        -GM * r[2] / r0.powi(3) + zonal * r[2] * (3. - flattening),
    ]
}

fn j2_k(r: [f64; 3], dt: f64) -> [f64; 3] {
    let c = denormalise_coefficient(C20, 2, 0);
    let r0 = norm(r);
    let a = j2_acceleration(r, r0, c, EGM96_SCALE_LENGTH);
    [
        0.5 * dt * dt * a[0],
        0.5 * dt * dt * a[1],
        0.5 * dt * dt * a[2],
    ]
}
